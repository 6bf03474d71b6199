use serde::{Deserialize, Serialize};
use std::fmt;

/// The four flavours of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
}

impl ClassKind {
    /// Interfaces and annotation types have no superclass slot.
    pub fn is_interface_like(&self) -> bool {
        matches!(self, ClassKind::Interface | ClassKind::Annotation)
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Interface => "interface",
            ClassKind::Enum => "enum",
            ClassKind::Annotation => "@interface",
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What an external class library knows about a class that was not parsed from source.
///
/// Names are fully qualified, nested classes use `$` (`java.util.Map$Entry`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMetadata {
    pub fqn: String,
    #[serde(default)]
    pub kind: ClassKind,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

impl ClassMetadata {
    pub fn new(fqn: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            fqn: fqn.into(),
            kind,
            superclass: None,
            interfaces: Vec::new(),
            modifiers: vec!["public".to_string()],
        }
    }

    pub fn class(fqn: impl Into<String>) -> Self {
        Self::new(fqn, ClassKind::Class)
    }

    pub fn interface(fqn: impl Into<String>) -> Self {
        Self::new(fqn, ClassKind::Interface)
    }

    pub fn with_superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn with_interfaces<I, S>(mut self, interfaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interfaces = interfaces.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind.is_interface_like()
    }

    /// Simple name after the last package or nesting separator.
    pub fn simple_name(&self) -> &str {
        self.fqn
            .rsplit(|c| c == '.' || c == '$')
            .next()
            .unwrap_or(&self.fqn)
    }
}
