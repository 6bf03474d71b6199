pub mod library;
pub mod models;

// Re-export commonly used types
pub use library::{ClassLibrary, ClassLibraryPtr, EmptyClassLibrary};
pub use models::*;
