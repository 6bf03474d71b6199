use crate::models::ClassMetadata;
use std::sync::Arc;

/// Answers questions about classes that live outside the parsed sources.
///
/// Implementations must be cheap, synchronous and safe to query from many
/// threads at once. Anything backed by I/O caches behind this boundary.
pub trait ClassLibrary: Send + Sync {
    /// Metadata for a fully qualified name (`$` for nested classes), if known.
    fn lookup(&self, fqn: &str) -> Option<ClassMetadata>;

    /// Whether the fully qualified name denotes a known class.
    fn exists(&self, fqn: &str) -> bool {
        self.lookup(fqn).is_some()
    }
}

/// Pointer type for class libraries.
pub type ClassLibraryPtr = Arc<dyn ClassLibrary>;

impl<T: ClassLibrary + ?Sized> ClassLibrary for Arc<T> {
    fn lookup(&self, fqn: &str) -> Option<ClassMetadata> {
        (**self).lookup(fqn)
    }

    fn exists(&self, fqn: &str) -> bool {
        (**self).exists(fqn)
    }
}

/// A library that knows nothing. Only parsed sources and built-ins resolve.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyClassLibrary;

impl ClassLibrary for EmptyClassLibrary {
    fn lookup(&self, _fqn: &str) -> Option<ClassMetadata> {
        None
    }

    fn exists(&self, _fqn: &str) -> bool {
        false
    }
}
