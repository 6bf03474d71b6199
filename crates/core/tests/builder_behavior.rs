mod common;

use common::*;
use srcmodel_api::ClassKind;
use srcmodel_core::builder::{AnnoDef, ClassDef, ElemValueDef, MethodDef, ParameterDef, TypeDef};
use srcmodel_core::model::AnnotationValue;
use srcmodel_core::{
    Builder, BuilderError, BuilderEvent, EntityRef, JavaModel, Model, ModelBuilder, ModelError,
};

#[test]
fn test_nested_class_names() {
    let mut model = Model::default();
    build(
        &mut model,
        vec![
            package("p"),
            class("Outer"),
            class("Inner"),
            class("Deep"),
            end_class(),
            end_class(),
            end_class(),
        ],
    );

    let inner = class_id(&model, "p.Outer$Inner");
    assert_eq!(model.fully_qualified_name(inner), "p.Outer$Inner");
    assert_eq!(model.canonical_name(inner), "p.Outer.Inner");
    assert_eq!(model.class_by_name("p.Outer.Inner"), Some(inner));
    assert_eq!(model.class_name_prefix(inner), "p.Outer$Inner$");
    assert_eq!(model.package_name(inner), "p");

    let outer = class_id(&model, "p.Outer");
    let deep = model.nested_class_by_name(outer, "Inner.Deep").unwrap();
    assert_eq!(model.fully_qualified_name(deep), "p.Outer$Inner$Deep");
    assert_eq!(model.class(deep).parent(), Some(inner));
    assert_eq!(model.source(model.class(outer).source()).class_ids(), &[outer]);
}

#[test]
fn test_default_package_names() {
    let mut model = Model::default();
    build(&mut model, vec![class("Plain"), end_class()]);
    let plain = class_id(&model, "Plain");
    assert_eq!(model.fully_qualified_name(plain), "Plain");
    assert_eq!(model.package_name(plain), "");
    assert_eq!(model.class_to_string(plain), "class Plain");
}

#[test]
fn test_last_javadoc_wins() {
    let mut model = Model::default();
    build(
        &mut model,
        vec![
            doc("stale comment"),
            doc("Widget docs"),
            tag("author", "jane"),
            tag("since", "1.2"),
            class("Widget"),
            field("plain", ty("int")),
            end_class(),
        ],
    );

    let widget = model.class(class_id(&model, "Widget"));
    assert_eq!(widget.comment(), Some("Widget docs"));
    assert_eq!(widget.tags().len(), 2);
    assert_eq!(widget.tag_by_name("since").unwrap().value(), "1.2");
    assert_eq!(
        widget.tag_by_name("author").unwrap().context(),
        EntityRef::Class(class_id(&model, "Widget"))
    );

    let plain = model.field(field_id(&model, "Widget", "plain"));
    assert_eq!(plain.comment(), None);
}

#[test]
fn test_method_javadoc_attaches_at_end_method() {
    let mut model = Model::default();
    let mut events = vec![class("Service"), doc("Runs the job.")];
    events.extend(method(
        MethodDef::new("run", ty("void")),
        vec![param("count", "int")],
    ));
    events.push(field("after", ty("int")));
    events.push(end_class());
    build(&mut model, events);

    let run = model.method(method_id(&model, "Service", "run"));
    assert_eq!(run.comment(), Some("Runs the job."));
    assert_eq!(run.parameters().len(), 1);
    assert_eq!(
        model.field(field_id(&model, "Service", "after")).comment(),
        None
    );
}

#[test]
fn test_annotations_bind_to_next_entity() {
    let mut model = Model::default();
    let anno = AnnoDef::new("Marker")
        .with_arg(
            "value",
            ElemValueDef::FieldRef {
                name: "LIMIT".to_string(),
            },
        )
        .with_arg(
            "nested",
            ElemValueDef::List {
                values: vec![ElemValueDef::Annotation(AnnoDef::new("Inner"))],
            },
        );
    build(
        &mut model,
        vec![
            package("p"),
            class("Config"),
            field("LIMIT", ty("int")),
            annotation(anno),
            field("guarded", ty("String")),
            end_class(),
        ],
    );

    let limit = field_id(&model, "p.Config", "LIMIT");
    let guarded = field_id(&model, "p.Config", "guarded");
    assert!(model.field(limit).annotations().is_empty());

    let annotations = model.field(guarded).annotations();
    assert_eq!(annotations.len(), 1);
    let marker = &annotations[0];
    assert_eq!(marker.context(), Some(EntityRef::Field(guarded)));
    assert_eq!(
        marker.elements().keys().collect::<Vec<_>>(),
        vec!["value", "nested"]
    );

    match marker.element("value") {
        Some(AnnotationValue::FieldRef { name, context }) => {
            assert_eq!(context, &Some(EntityRef::Field(guarded)));
            assert_eq!(model.field_ref_target(context.unwrap(), name), Some(limit));
        }
        other => panic!("unexpected element {other:?}"),
    }
    match marker.element("nested") {
        Some(AnnotationValue::List(values)) => match &values[0] {
            AnnotationValue::Annotation(inner) => {
                assert_eq!(inner.context(), Some(EntityRef::Field(guarded)));
                assert_eq!(model.view(inner.type_ref()).value(), "Inner");
            }
            other => panic!("unexpected value {other:?}"),
        },
        other => panic!("unexpected element {other:?}"),
    }
}

#[test]
fn test_parameter_and_method_annotations() {
    let mut model = Model::default();
    let mut builder = ModelBuilder::new(&mut model);
    builder.begin_class(ClassDef::new("Api", ClassKind::Class)).unwrap();
    builder.add_annotation(AnnoDef::new("Override")).unwrap();
    builder.begin_method(4).unwrap();
    builder.add_annotation(AnnoDef::new("Nullable")).unwrap();
    builder
        .add_parameter(ParameterDef::new("name", TypeDef::new("String")))
        .unwrap();
    builder
        .end_method(MethodDef::new("toString", TypeDef::new("String")))
        .unwrap();
    builder.end_class(9).unwrap();
    builder.finish().unwrap();

    let method = method_id(&model, "Api", "toString");
    let m = model.method(method);
    assert_eq!(m.annotations().len(), 1);
    assert_eq!(
        model.view(m.annotations()[0].type_ref()).value(),
        "java.lang.Override"
    );
    let parameter = &m.parameters()[0];
    assert_eq!(parameter.annotations().len(), 1);
    assert_eq!(
        parameter.annotations()[0].context(),
        Some(EntityRef::Parameter(method, 0))
    );
}

#[test]
fn test_interface_extends_are_interfaces() {
    let mut model = Model::default();
    let mut def = ClassDef::new("Both", ClassKind::Interface);
    def.extends = vec![ty("Runnable"), ty("Comparable")];
    build(&mut model, vec![package("p"), begin(def), end_class()]);

    let both = class_id(&model, "p.Both");
    assert!(model.superclass(both).is_none());
    let interfaces: Vec<String> = model.interfaces(both).iter().map(|t| t.value()).collect();
    assert_eq!(interfaces, vec!["java.lang.Runnable", "java.lang.Comparable"]);
    assert_eq!(model.class_to_string(both), "interface p.Both");
}

#[test]
fn test_enum_constants() {
    let mut model = Model::default();
    let mut def = ClassDef::new("Color", ClassKind::Enum);
    def.implements = vec![ty("Runnable")];
    build(
        &mut model,
        vec![
            package("p"),
            begin(def),
            field("RED", ty("Color")),
            field("count", ty("int")),
            end_class(),
        ],
    );

    let color = class_id(&model, "p.Color");
    assert_eq!(model.superclass(color).unwrap().value(), "java.lang.Enum");
    assert!(model.is_enum_constant(field_id(&model, "p.Color", "RED")));
    assert!(!model.is_enum_constant(field_id(&model, "p.Color", "count")));
    assert_eq!(model.interfaces(color)[0].value(), "java.lang.Runnable");
}

#[test]
fn test_enum_header_cannot_extend() {
    let mut model = Model::default();
    let mut def = ClassDef::new("Color", ClassKind::Enum);
    def.extends = vec![ty("Base")];
    let result = ModelBuilder::new(&mut model).build(vec![package("p"), begin(def), end_class()]);
    match result {
        Err(ModelError::InvalidMutation(message)) => {
            assert_eq!(message, "enums cannot extend other classes")
        }
        other => panic!("expected invalid mutation, got {other:?}"),
    }
    assert!(model.class_by_name("p.Color").is_none());

    let mut def = ClassDef::new("Shade", ClassKind::Enum);
    def.extends = vec![ty("java.lang.Enum")];
    build(&mut model, vec![package("p"), begin(def), end_class()]);
    let shade = class_id(&model, "p.Shade");
    assert_eq!(model.superclass(shade).unwrap().value(), "java.lang.Enum");
}

#[test]
fn test_method_signatures() {
    let mut model = Model::default();
    let mut def = MethodDef::new("write", ty("int"));
    def.modifiers = vec!["public".to_string(), "static".to_string()];
    def.exceptions = vec![ty("java.io.IOException")];
    let mut events = vec![package("p"), class("Io")];
    events.extend(method(
        def,
        vec![
            param("target", "String"),
            ParameterDef::varargs("rest", TypeDef::new("Object")),
        ],
    ));
    events.extend(method(MethodDef::constructor("Io"), vec![]));
    events.push(end_class());
    build(&mut model, events);

    let write = method_id(&model, "p.Io", "write");
    assert!(model.method(write).is_varargs());
    assert!(model.method(write).modifiers().is_static());
    assert_eq!(
        model.declaration_signature(write, true),
        "public static int write(java.lang.String target, java.lang.Object... rest) throws java.io.IOException"
    );
    assert_eq!(
        model.declaration_signature(write, false),
        "int write(java.lang.String target, java.lang.Object... rest) throws java.io.IOException"
    );
    assert_eq!(model.call_signature(write), "write(target, rest)");

    let ctor = method_id(&model, "p.Io", "Io");
    assert!(model.method(ctor).is_constructor());
    assert!(model.return_type(ctor).is_none());
    assert_eq!(model.declaration_signature(ctor, false), "Io()");
}

#[test]
fn test_field_extra_dimensions_and_initializer() {
    let mut model = Model::default();
    let mut def = srcmodel_core::builder::FieldDef::new("grid", TypeDef::array("int", 1));
    def.dimensions = 1;
    def.body = Some("new int[3][3]".to_string());
    build(
        &mut model,
        vec![class("Board"), BuilderEvent::Field(def), end_class()],
    );

    let grid = model.field(field_id(&model, "Board", "grid"));
    assert_eq!(grid.initialization_expression(), Some("new int[3][3]"));
    assert_eq!(field_type(&model, "Board", "grid"), "int[][]");
}

#[test]
fn test_duplicate_class_replaces_index_entry() {
    let mut model = Model::default();
    build(&mut model, vec![package("p"), class("Twice"), end_class()]);
    build(&mut model, vec![package("p"), class("Twice"), end_class()]);

    let found = class_id(&model, "p.Twice");
    assert_eq!(model.class_ids().count(), 2);
    assert_eq!(model.class(found).source().index(), 1);
}

#[test]
fn test_replay_json_stream() {
    let json = r#"[
        {"event": "package", "name": "com.acme"},
        {"event": "import", "name": "java.util.List"},
        {"event": "java_doc", "text": "A gadget."},
        {"event": "java_doc_tag", "name": "deprecated", "text": "use Widget"},
        {"event": "begin_class", "name": "Gadget", "kind": "class", "modifiers": ["public"]},
        {"event": "field", "name": "parts", "type": {"name": "List", "arguments": [{"name": "String"}]}},
        {"event": "begin_method"},
        {"event": "parameter", "name": "index", "type": {"name": "int"}},
        {"event": "end_method", "name": "part", "return_type": {"name": "String"}},
        {"event": "end_class"}
    ]"#;
    let mut model = Model::default();
    let mut builder = ModelBuilder::new(&mut model).with_origin("Gadget.java");
    builder
        .replay(BuilderEvent::parse_stream(json).unwrap())
        .unwrap();
    let source = builder.finish().unwrap();

    assert_eq!(model.source(source).origin(), Some("Gadget.java"));
    assert_eq!(model.source(source).imports(), &["java.util.List".to_string()]);
    let gadget = class_id(&model, "com.acme.Gadget");
    assert!(model.class(gadget).modifiers().is_public());
    assert_eq!(
        model.class(gadget).tag_by_name("deprecated").unwrap().value(),
        "use Widget"
    );
    let parts = model.field_type(field_id(&model, "com.acme.Gadget", "parts"));
    assert_eq!(parts.to_generic_string(), "java.util.List<java.lang.String>");
    assert_eq!(
        model
            .return_type(method_id(&model, "com.acme.Gadget", "part"))
            .unwrap()
            .value(),
        "java.lang.String"
    );
}

fn builder_error(result: srcmodel_core::Result<()>) -> BuilderError {
    match result {
        Err(ModelError::Builder(err)) => err,
        other => panic!("expected a builder error, got {other:?}"),
    }
}

#[test]
fn test_protocol_violations() {
    let mut model = Model::default();

    let mut builder = ModelBuilder::new(&mut model);
    assert_eq!(
        builder_error(builder.end_class(7)),
        BuilderError::UnbalancedEndClass { line: 7 }
    );
    assert!(matches!(
        builder_error(builder.add_field(srcmodel_core::builder::FieldDef::new("x", ty("int")))),
        BuilderError::NoOpenClass { event: "addField", .. }
    ));
    assert!(matches!(
        builder_error(BuilderEvent::JavaDocTag(Default::default()).apply(&mut builder)),
        BuilderError::OrphanDocTag { .. }
    ));
    assert!(matches!(
        builder_error(builder.end_method(MethodDef::new("m", ty("void")))),
        BuilderError::NoOpenMethod { event: "endMethod", .. }
    ));
    assert!(matches!(
        builder_error(builder.begin_method(3)),
        BuilderError::NoOpenClass { event: "beginMethod", .. }
    ));

    builder.begin_class(ClassDef::new("A", ClassKind::Class)).unwrap();
    assert!(matches!(
        builder_error(package("late").apply(&mut builder)),
        BuilderError::LatePackage { .. }
    ));

    builder.begin_method(5).unwrap();
    assert!(matches!(
        builder_error(builder.begin_class(ClassDef::new("Local", ClassKind::Class))),
        BuilderError::MethodStillOpen { event: "beginClass", .. }
    ));
    assert!(matches!(
        builder_error(builder.begin_method(6)),
        BuilderError::MethodStillOpen { event: "beginMethod", .. }
    ));
    assert!(matches!(
        builder_error(builder.end_class(8)),
        BuilderError::MethodStillOpen { event: "endClass", .. }
    ));

    match builder.finish() {
        Err(ModelError::Builder(BuilderError::Unterminated {
            open_classes,
            method_open,
        })) => {
            assert_eq!(open_classes, 1);
            assert!(method_open);
        }
        other => panic!("expected unterminated stream, got {other:?}"),
    }
}

#[test]
fn test_leading_javadoc_documents_the_package() {
    let mut model = Model::default();
    let source = build(
        &mut model,
        vec![
            doc("Shapes and their hierarchy."),
            package("shapes"),
            class("Circle"),
            end_class(),
        ],
    );

    let package = model.source(source).package().unwrap();
    assert_eq!(package.comment(), Some("Shapes and their hierarchy."));
    let circle = class_id(&model, "shapes.Circle");
    assert_eq!(model.class(circle).comment(), None);
}

#[test]
fn test_package_must_come_first() {
    let mut model = Model::default();
    let mut builder = ModelBuilder::new(&mut model);
    package("a").apply(&mut builder).unwrap();
    assert!(matches!(
        builder_error(package("b").apply(&mut builder)),
        BuilderError::LatePackage { line: 1 }
    ));
    builder.finish().unwrap();
}

#[test]
fn test_rejected_unit_leaves_model_untouched() {
    let mut model = Model::default();
    build(
        &mut model,
        vec![package("p"), class("Keep"), field("count", ty("int")), end_class()],
    );
    let keep = class_id(&model, "p.Keep");

    // redeclares Keep, then fails on an unbalanced end
    let mut events = vec![package("p"), class("Keep"), end_class(), class("Half")];
    events.extend(simple_method("run", "void"));
    events.push(field("size", ty("int")));
    events.push(end_class());
    events.push(end_class());
    let result = ModelBuilder::new(&mut model).build(events);
    assert!(matches!(
        result,
        Err(ModelError::Builder(BuilderError::UnbalancedEndClass { .. }))
    ));

    assert_eq!(model.source_ids().count(), 1);
    assert_eq!(model.class_ids().count(), 1);
    assert_eq!(model.class_by_name("p.Keep"), Some(keep));
    assert!(model.class_by_name("p.Half").is_none());
    assert!(model.field_by_name(keep, "count").is_some());

    // an unterminated unit is rolled back by finish
    let mut builder = ModelBuilder::new(&mut model);
    builder.replay(vec![package("p"), class("Open")]).unwrap();
    assert!(builder.finish().is_err());
    assert_eq!(model.class_ids().count(), 1);
    assert!(model.class_by_name("p.Open").is_none());
}
