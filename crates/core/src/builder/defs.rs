//! Plain declaration records delivered by the parser with each event.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use srcmodel_api::ClassKind;

/// A type as written: `Map<String, List<Integer>>[]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(default)]
    pub dimensions: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn array(name: impl Into<String>, dimensions: usize) -> Self {
        Self {
            name: name.into(),
            dimensions,
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeDef>) -> Self {
        self.arguments = arguments;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeVariableDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bounds: Vec<TypeDef>,
}

impl TypeVariableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDef {
    pub name: String,
    #[serde(default)]
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassDef {
    pub name: String,
    pub kind: ClassKind,
    pub modifiers: Vec<String>,
    pub type_params: Vec<TypeVariableDef>,
    /// Superclass of a class; extended interfaces of an interface.
    pub extends: Vec<TypeDef>,
    pub implements: Vec<TypeDef>,
    pub line: usize,
}

impl ClassDef {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MethodDef {
    pub name: String,
    pub modifiers: Vec<String>,
    pub type_params: Vec<TypeVariableDef>,
    pub return_type: Option<TypeDef>,
    /// Extra dimensions written after the parameter list: `int foo()[]`.
    pub dimensions: usize,
    pub exceptions: Vec<TypeDef>,
    pub constructor: bool,
    pub body: Option<String>,
    pub line: usize,
}

impl MethodDef {
    pub fn new(name: impl Into<String>, return_type: TypeDef) -> Self {
        Self {
            name: name.into(),
            return_type: Some(return_type),
            ..Default::default()
        }
    }

    pub fn constructor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constructor: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDef {
    pub name: String,
    pub modifiers: Vec<String>,
    #[serde(rename = "type")]
    pub ty: TypeDef,
    /// Extra dimensions written after the name: `int a[]`.
    pub dimensions: usize,
    pub body: Option<String>,
    pub line: usize,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: TypeDef) -> Self {
        Self {
            name: name.into(),
            ty,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDef,
    pub dimensions: usize,
    pub varargs: bool,
    pub line: usize,
}

impl ParameterDef {
    pub fn new(name: impl Into<String>, ty: TypeDef) -> Self {
        Self {
            name: name.into(),
            ty,
            ..Default::default()
        }
    }

    pub fn varargs(name: impl Into<String>, ty: TypeDef) -> Self {
        Self {
            varargs: true,
            ..Self::new(name, ty)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDef {
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub line: usize,
}

/// An annotation as parsed, before it is bound to an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnoDef {
    #[serde(rename = "type")]
    pub type_def: TypeDef,
    #[serde(default)]
    pub args: IndexMap<String, ElemValueDef>,
    #[serde(default)]
    pub line: usize,
}

impl AnnoDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            type_def: TypeDef::new(name),
            ..Default::default()
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: ElemValueDef) -> Self {
        self.args.insert(name.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElemValueDef {
    Annotation(AnnoDef),
    Constant { value: String },
    FieldRef { name: String },
    ClassLiteral {
        #[serde(rename = "type")]
        type_def: TypeDef,
    },
    List { values: Vec<ElemValueDef> },
}
