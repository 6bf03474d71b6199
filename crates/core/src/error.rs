use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("{0}")]
    InvalidMutation(String),
    #[error("Builder protocol violation: {0}")]
    Builder(#[from] BuilderError),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised when the parse-event stream does not follow the builder protocol.
///
/// These always point at a misbehaving producer; continuing would corrupt the graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    #[error("{event} at line {line} with no open class")]
    NoOpenClass { event: &'static str, line: usize },
    #[error("{event} at line {line} with no open method")]
    NoOpenMethod { event: &'static str, line: usize },
    #[error("{event} at line {line} while a method is still open")]
    MethodStillOpen { event: &'static str, line: usize },
    #[error("endClass at line {line} with an empty class stack")]
    UnbalancedEndClass { line: usize },
    #[error("javadoc tag at line {line} without a preceding comment")]
    OrphanDocTag { line: usize },
    #[error("package declaration at line {line} after the package was set or a type was declared")]
    LatePackage { line: usize },
    #[error("event stream ended with {open_classes} open class(es), method open: {method_open}")]
    Unterminated {
        open_classes: usize,
        method_open: bool,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
