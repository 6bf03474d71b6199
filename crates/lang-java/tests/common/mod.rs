#![allow(dead_code)]

use serde_json::{Value, json};
use srcmodel_core::{BuilderEvent, ClassId, Model};
use srcmodel_java::JavaProjectBuilder;

/// Build a project from `(origin, event stream)` pairs.
pub fn setup_project(sources: Vec<(&str, Vec<Value>)>) -> JavaProjectBuilder {
    let mut project = JavaProjectBuilder::new();
    add_sources(&mut project, sources);
    project
}

pub fn add_sources(project: &mut JavaProjectBuilder, sources: Vec<(&str, Vec<Value>)>) {
    for (origin, events) in sources {
        let events: Vec<BuilderEvent> = events
            .into_iter()
            .map(|event| serde_json::from_value(event).unwrap())
            .collect();
        project.add_named_source(origin, events).unwrap();
    }
}

pub fn package(name: &str) -> Value {
    json!({"event": "package", "name": name, "line": 1})
}

pub fn import(name: &str) -> Value {
    json!({"event": "import", "name": name})
}

pub fn class(name: &str) -> Value {
    json!({"event": "begin_class", "name": name, "kind": "class"})
}

pub fn class_extending(name: &str, superclass: &str) -> Value {
    json!({
        "event": "begin_class",
        "name": name,
        "kind": "class",
        "extends": [{"name": superclass}]
    })
}

pub fn end_class() -> Value {
    json!({"event": "end_class"})
}

/// `ret name();` as a begin/end pair.
pub fn method(name: &str, ret: &str) -> [Value; 2] {
    [
        json!({"event": "begin_method"}),
        json!({"event": "end_method", "name": name, "return_type": {"name": ret}}),
    ]
}

pub fn class_id(project: &JavaProjectBuilder, fqn: &str) -> ClassId {
    project
        .class_by_name(fqn)
        .unwrap_or_else(|| panic!("class {fqn} not in project"))
}

/// Return types of a class's methods in declaration order, usage form.
pub fn return_types(model: &Model, class: ClassId) -> Vec<String> {
    model
        .class(class)
        .method_ids()
        .iter()
        .filter_map(|&m| model.return_type(m))
        .map(|ty| ty.to_string())
        .collect()
}
