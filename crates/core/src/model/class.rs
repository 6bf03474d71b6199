use super::{
    Annotation, ClassId, Documentation, FieldId, JavaModel, MethodId, Model, Modifiers, SourceId,
    TypeRef, TypeVariable, TypeView,
};
use crate::error::{ModelError, Result};
use crate::naming::{self, ENUM_FQN, OBJECT_FQN};
use srcmodel_api::ClassKind;

/// A class, interface, enum or annotation type declared in source.
#[derive(Debug, Clone)]
pub struct JavaClass {
    pub(crate) name: String,
    pub(crate) kind: ClassKind,
    pub(crate) modifiers: Modifiers,
    /// Explicit `extends` of a plain class. Defaults are computed on read.
    pub(crate) superclass: Option<TypeRef>,
    pub(crate) implements: Vec<TypeRef>,
    pub(crate) type_parameters: Vec<TypeVariable>,
    pub(crate) fields: Vec<FieldId>,
    pub(crate) methods: Vec<MethodId>,
    pub(crate) nested: Vec<ClassId>,
    pub(crate) parent: Option<ClassId>,
    pub(crate) source: SourceId,
    pub(crate) documentation: Documentation,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) line: usize,
}

impl JavaClass {
    pub(crate) fn new(
        name: impl Into<String>,
        kind: ClassKind,
        source: SourceId,
        parent: Option<ClassId>,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Modifiers::default(),
            superclass: None,
            implements: Vec::new(),
            type_parameters: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            nested: Vec::new(),
            parent,
            source,
            documentation: Documentation::default(),
            annotations: Vec::new(),
            line,
        }
    }

    /// Simple name as declared.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    /// True for interfaces and annotation types.
    pub fn is_interface(&self) -> bool {
        self.kind.is_interface_like()
    }

    pub fn is_enum(&self) -> bool {
        self.kind == ClassKind::Enum
    }

    pub fn is_annotation(&self) -> bool {
        self.kind == ClassKind::Annotation
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    /// The superclass exactly as declared, without kind defaults.
    pub fn declared_superclass(&self) -> Option<&TypeRef> {
        self.superclass.as_ref()
    }

    /// Implemented interfaces (or extended ones, for an interface).
    pub fn implements(&self) -> &[TypeRef] {
        &self.implements
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    pub fn field_ids(&self) -> &[FieldId] {
        &self.fields
    }

    pub fn method_ids(&self) -> &[MethodId] {
        &self.methods
    }

    pub fn nested_class_ids(&self) -> &[ClassId] {
        &self.nested
    }

    /// Enclosing class, `None` at top level.
    pub fn parent(&self) -> Option<ClassId> {
        self.parent
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn is_inner(&self) -> bool {
        self.parent.is_some()
    }
}

impl JavaModel for JavaClass {
    fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

impl Model {
    /// Internal name: `p.Outer$Inner`.
    pub fn fully_qualified_name(&self, class: ClassId) -> String {
        let mut chain = vec![self.class(class).name.as_str()];
        let mut current = self.class(class).parent;
        while let Some(parent) = current {
            chain.push(self.class(parent).name.as_str());
            current = self.class(parent).parent;
        }
        chain.reverse();
        let prefix = self.source(self.class(class).source).class_name_prefix();
        format!("{prefix}{}", chain.join("$"))
    }

    /// Usage name: `p.Outer.Inner`.
    pub fn canonical_name(&self, class: ClassId) -> String {
        naming::to_source_form(&self.fully_qualified_name(class))
    }

    pub fn package_name(&self, class: ClassId) -> &str {
        self.source(self.class(class).source).package_name()
    }

    /// Prefix nested class names are built from: `p.Outer$`.
    pub fn class_name_prefix(&self, class: ClassId) -> String {
        format!("{}$", self.fully_qualified_name(class))
    }

    /// A pre-resolved reference to the class itself.
    pub fn as_type(&self, class: ClassId) -> TypeView<'_> {
        self.view_owned(TypeRef::resolved(self.fully_qualified_name(class)))
    }

    /// `class p.X` or `interface p.X`.
    pub fn class_to_string(&self, class: ClassId) -> String {
        let keyword = if self.class(class).is_interface() {
            "interface"
        } else {
            "class"
        };
        format!("{keyword} {}", self.fully_qualified_name(class))
    }

    /// The effective superclass.
    ///
    /// A plain class without `extends` reports `java.lang.Object` (unless it
    /// is `java.lang.Object`), an enum always reports `java.lang.Enum`, and
    /// interfaces and annotation types have none.
    pub fn superclass(&self, class: ClassId) -> Option<TypeView<'_>> {
        let declared = self.class(class);
        match declared.kind {
            ClassKind::Interface | ClassKind::Annotation => None,
            ClassKind::Enum => Some(self.view_owned(TypeRef::resolved(ENUM_FQN))),
            ClassKind::Class => match &declared.superclass {
                Some(ty) => Some(self.view(ty)),
                None if self.fully_qualified_name(class) == OBJECT_FQN => None,
                None => Some(self.view_owned(TypeRef::resolved(OBJECT_FQN))),
            },
        }
    }

    /// Replace the superclass, enforcing the rules of the class's kind.
    pub fn set_superclass(&mut self, class: ClassId, superclass: Option<TypeRef>) -> Result<()> {
        match self.class(class).kind {
            ClassKind::Enum => {
                let keeps_enum_base = superclass
                    .as_ref()
                    .is_some_and(|ty| self.view(ty).fully_qualified_name() == ENUM_FQN);
                if !keeps_enum_base {
                    return Err(ModelError::InvalidMutation(
                        "enums cannot extend other classes".to_string(),
                    ));
                }
                Ok(())
            }
            ClassKind::Interface | ClassKind::Annotation => match superclass {
                None => Ok(()),
                Some(_) => Err(ModelError::InvalidMutation(
                    "interfaces cannot have a superclass".to_string(),
                )),
            },
            ClassKind::Class => {
                self.class_mut(class).superclass = superclass;
                Ok(())
            }
        }
    }

    pub fn interfaces(&self, class: ClassId) -> Vec<TypeView<'_>> {
        self.class(class)
            .implements
            .iter()
            .map(|ty| self.view(ty))
            .collect()
    }

    /// Parsed classes behind the implemented interfaces; unknown ones are skipped.
    pub fn implemented_interface_classes(&self, class: ClassId) -> Vec<ClassId> {
        self.interfaces(class)
            .iter()
            .filter_map(|ty| self.class_by_name(ty.fully_qualified_name()))
            .collect()
    }

    /// A nested class by simple name; `A.B` walks two nesting levels.
    pub fn nested_class_by_name(&self, class: ClassId, name: &str) -> Option<ClassId> {
        let mut current = class;
        for segment in name.split(naming::TYPE_SEPARATOR) {
            current = self
                .class(current)
                .nested
                .iter()
                .copied()
                .find(|&nested| self.class(nested).name == segment)?;
        }
        Some(current)
    }

    pub fn field_by_name(&self, class: ClassId, name: &str) -> Option<FieldId> {
        self.class(class)
            .fields
            .iter()
            .copied()
            .find(|&field| self.field(field).name() == name)
    }

    /// Declared methods named `name`, in declaration order.
    pub fn methods_by_name(&self, class: ClassId, name: &str) -> Vec<MethodId> {
        self.class(class)
            .methods
            .iter()
            .copied()
            .filter(|&method| self.method(method).name() == name)
            .collect()
    }

    /// Every parsed class that is a subtype of `class`, directly or not.
    pub fn derived_classes(&self, class: ClassId) -> Vec<ClassId> {
        let target = self.as_type(class);
        self.class_ids()
            .filter(|&candidate| candidate != class)
            .filter(|&candidate| self.as_type(candidate).is_subtype_of(&target))
            .collect()
    }

    /// Whether `class` is `other` or a subtype of it.
    pub fn class_is_a(&self, class: ClassId, other: &str) -> bool {
        let other = self.view_owned(TypeRef::resolved(other));
        self.as_type(class).is_subtype_of(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JavaSource;

    fn model_with(kind: ClassKind) -> (Model, ClassId) {
        let mut model = Model::default();
        let source = model.alloc_source(JavaSource::default());
        let class = model.alloc_class(JavaClass::new("Thing", kind, source, None, 1));
        (model, class)
    }

    #[test]
    fn test_default_superclass_of_plain_class() {
        let (model, class) = model_with(ClassKind::Class);
        let superclass = model.superclass(class).unwrap();
        assert_eq!(superclass.value(), "java.lang.Object");
    }

    #[test]
    fn test_enum_superclass_is_fixed() {
        let (mut model, class) = model_with(ClassKind::Enum);
        assert_eq!(model.superclass(class).unwrap().value(), "java.lang.Enum");

        let err = model
            .set_superclass(class, Some(TypeRef::resolved("a.Other")))
            .unwrap_err();
        assert_eq!(err.to_string(), "enums cannot extend other classes");
        assert!(model.set_superclass(class, None).is_err());
        assert!(model
            .set_superclass(class, Some(TypeRef::resolved(ENUM_FQN)))
            .is_ok());
    }

    #[test]
    fn test_interface_has_no_superclass() {
        let (mut model, class) = model_with(ClassKind::Interface);
        assert!(model.superclass(class).is_none());
        let err = model
            .set_superclass(class, Some(TypeRef::resolved("a.Base")))
            .unwrap_err();
        assert_eq!(err.to_string(), "interfaces cannot have a superclass");
        assert_eq!(model.class_to_string(class), "interface Thing");
    }

    #[test]
    fn test_explicit_superclass_replaces_default() {
        let (mut model, class) = model_with(ClassKind::Class);
        model
            .set_superclass(class, Some(TypeRef::resolved("a.Base")))
            .unwrap();
        assert_eq!(model.superclass(class).unwrap().value(), "a.Base");
        assert_eq!(model.class_to_string(class), "class Thing");
    }
}
