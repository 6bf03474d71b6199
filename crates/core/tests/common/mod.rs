#![allow(dead_code)]

use srcmodel_api::ClassKind;
use srcmodel_core::builder::{
    AnnoDef, ClassDef, FieldDef, MethodDef, PackageDef, ParameterDef, TagDef, TypeDef,
};
use srcmodel_core::{BuilderEvent, ClassId, FieldId, MethodId, Model, ModelBuilder, SourceId};

pub fn package(name: &str) -> BuilderEvent {
    BuilderEvent::Package(PackageDef {
        name: name.to_string(),
        line: 1,
    })
}

pub fn import(name: &str) -> BuilderEvent {
    BuilderEvent::Import {
        name: name.to_string(),
        line: 2,
    }
}

pub fn class(name: &str) -> BuilderEvent {
    BuilderEvent::BeginClass(ClassDef::new(name, ClassKind::Class))
}

pub fn interface(name: &str) -> BuilderEvent {
    BuilderEvent::BeginClass(ClassDef::new(name, ClassKind::Interface))
}

pub fn begin(def: ClassDef) -> BuilderEvent {
    BuilderEvent::BeginClass(def)
}

pub fn end_class() -> BuilderEvent {
    BuilderEvent::EndClass { line: 0 }
}

pub fn field(name: &str, ty: TypeDef) -> BuilderEvent {
    BuilderEvent::Field(FieldDef::new(name, ty))
}

pub fn doc(text: &str) -> BuilderEvent {
    BuilderEvent::JavaDoc {
        text: text.to_string(),
        line: 0,
    }
}

pub fn tag(name: &str, text: &str) -> BuilderEvent {
    BuilderEvent::JavaDocTag(TagDef {
        name: name.to_string(),
        text: text.to_string(),
        line: 0,
    })
}

pub fn annotation(def: AnnoDef) -> BuilderEvent {
    BuilderEvent::Annotation(def)
}

pub fn ty(name: &str) -> TypeDef {
    TypeDef::new(name)
}

/// `name<args>`
pub fn generic(name: &str, args: &[&str]) -> TypeDef {
    TypeDef::new(name).with_arguments(args.iter().map(|a| TypeDef::new(*a)).collect())
}

/// Begin/param/end events for a method with the given parameters.
pub fn method(def: MethodDef, params: Vec<ParameterDef>) -> Vec<BuilderEvent> {
    let mut events = vec![BuilderEvent::BeginMethod { line: def.line }];
    events.extend(params.into_iter().map(BuilderEvent::Parameter));
    events.push(BuilderEvent::EndMethod(def));
    events
}

/// `ret name()`
pub fn simple_method(name: &str, ret: &str) -> Vec<BuilderEvent> {
    method(MethodDef::new(name, TypeDef::new(ret)), vec![])
}

pub fn param(name: &str, ty: &str) -> ParameterDef {
    ParameterDef::new(name, TypeDef::new(ty))
}

/// Feed one compilation unit and close it.
pub fn build(model: &mut Model, events: Vec<BuilderEvent>) -> SourceId {
    let mut builder = ModelBuilder::new(model);
    builder.replay(events).unwrap();
    builder.finish().unwrap()
}

pub fn class_id(model: &Model, fqn: &str) -> ClassId {
    model
        .class_by_name(fqn)
        .unwrap_or_else(|| panic!("class {fqn} not in model"))
}

pub fn field_id(model: &Model, class: &str, name: &str) -> FieldId {
    model
        .field_by_name(class_id(model, class), name)
        .unwrap_or_else(|| panic!("field {class}.{name} not in model"))
}

pub fn method_id(model: &Model, class: &str, name: &str) -> MethodId {
    model
        .methods_by_name(class_id(model, class), name)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("method {class}.{name} not in model"))
}

/// Usage form of a field's type as seen from its own class.
pub fn field_type(model: &Model, class: &str, name: &str) -> String {
    model.field_type(field_id(model, class, name)).to_string()
}
