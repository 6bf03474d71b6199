use super::defs::{AnnoDef, ClassDef, FieldDef, MethodDef, PackageDef, ParameterDef, TagDef};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Receiver of parse events, one method per event.
pub trait Builder {
    fn add_package(&mut self, def: PackageDef) -> Result<()>;

    fn add_import(&mut self, name: &str, line: usize) -> Result<()>;

    /// Replaces any comment that has not been attached yet.
    fn add_java_doc(&mut self, text: &str, line: usize) -> Result<()>;

    fn add_java_doc_tag(&mut self, tag: TagDef) -> Result<()>;

    fn begin_class(&mut self, def: ClassDef) -> Result<()>;

    fn end_class(&mut self, line: usize) -> Result<()>;

    fn begin_method(&mut self, line: usize) -> Result<()>;

    fn end_method(&mut self, def: MethodDef) -> Result<()>;

    fn add_field(&mut self, def: FieldDef) -> Result<()>;

    fn add_parameter(&mut self, def: ParameterDef) -> Result<()>;

    fn add_annotation(&mut self, def: AnnoDef) -> Result<()>;

    /// A method without parameters or parameter annotations.
    fn add_method(&mut self, def: MethodDef) -> Result<()> {
        self.begin_method(def.line)?;
        self.end_method(def)
    }
}

/// A parse event as data, e.g. read from a JSON event stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BuilderEvent {
    Package(PackageDef),
    Import {
        name: String,
        #[serde(default)]
        line: usize,
    },
    JavaDoc {
        text: String,
        #[serde(default)]
        line: usize,
    },
    JavaDocTag(TagDef),
    BeginClass(ClassDef),
    EndClass {
        #[serde(default)]
        line: usize,
    },
    BeginMethod {
        #[serde(default)]
        line: usize,
    },
    EndMethod(MethodDef),
    Field(FieldDef),
    Parameter(ParameterDef),
    Annotation(AnnoDef),
}

impl BuilderEvent {
    pub fn apply<B: Builder + ?Sized>(self, builder: &mut B) -> Result<()> {
        match self {
            BuilderEvent::Package(def) => builder.add_package(def),
            BuilderEvent::Import { name, line } => builder.add_import(&name, line),
            BuilderEvent::JavaDoc { text, line } => builder.add_java_doc(&text, line),
            BuilderEvent::JavaDocTag(tag) => builder.add_java_doc_tag(tag),
            BuilderEvent::BeginClass(def) => builder.begin_class(def),
            BuilderEvent::EndClass { line } => builder.end_class(line),
            BuilderEvent::BeginMethod { line } => builder.begin_method(line),
            BuilderEvent::EndMethod(def) => builder.end_method(def),
            BuilderEvent::Field(def) => builder.add_field(def),
            BuilderEvent::Parameter(def) => builder.add_parameter(def),
            BuilderEvent::Annotation(def) => builder.add_annotation(def),
        }
    }

    /// Decode a JSON array of events.
    pub fn parse_stream(json: &str) -> Result<Vec<BuilderEvent>> {
        Ok(serde_json::from_str(json)?)
    }
}
