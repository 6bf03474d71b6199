use srcmodel_api::{ClassKind, ClassLibrary, ClassLibraryPtr, ClassMetadata};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// A library that knows exactly the names its predicate accepts.
///
/// Accepted names carry no supertype information.
pub struct FnClassLoader<F> {
    accepts: F,
}

impl<F> FnClassLoader<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(accepts: F) -> Self {
        Self { accepts }
    }
}

impl<F> fmt::Debug for FnClassLoader<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnClassLoader").finish_non_exhaustive()
    }
}

impl<F> ClassLibrary for FnClassLoader<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn lookup(&self, fqn: &str) -> Option<ClassMetadata> {
        (self.accepts)(fqn).then(|| ClassMetadata::new(fqn, ClassKind::Class))
    }

    fn exists(&self, fqn: &str) -> bool {
        (self.accepts)(fqn)
    }
}

/// Ordered list of libraries; the first one that knows a name answers.
///
/// Loaders can be appended through a shared reference, so a chain already
/// handed to a model keeps growing.
#[derive(Default)]
pub struct ClassLoaderChain {
    loaders: RwLock<Vec<ClassLibraryPtr>>,
}

impl ClassLoaderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(self, loader: ClassLibraryPtr) -> Self {
        self.add(loader);
        self
    }

    pub fn add(&self, loader: ClassLibraryPtr) {
        let mut loaders = self.loaders.write().unwrap_or_else(PoisonError::into_inner);
        loaders.push(loader);
        tracing::debug!(count = loaders.len(), "class loader added");
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Clone the list so no lock is held while a loader runs
    fn snapshot(&self) -> Vec<ClassLibraryPtr> {
        self.read().iter().map(Arc::clone).collect()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<ClassLibraryPtr>> {
        self.loaders.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ClassLoaderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassLoaderChain")
            .field("loaders", &self.len())
            .finish()
    }
}

impl ClassLibrary for ClassLoaderChain {
    fn lookup(&self, fqn: &str) -> Option<ClassMetadata> {
        self.snapshot()
            .iter()
            .find_map(|loader| loader.lookup(fqn))
    }

    fn exists(&self, fqn: &str) -> bool {
        self.snapshot().iter().any(|loader| loader.exists(fqn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcmodel_core::InMemoryClassLibrary;

    #[test]
    fn test_predicate_loader() {
        let loader = FnClassLoader::new(|name| name.starts_with("com.acme."));
        assert!(loader.exists("com.acme.Tool"));
        assert!(!loader.exists("org.other.Tool"));
        assert_eq!(loader.lookup("com.acme.Tool").unwrap().fqn, "com.acme.Tool");
    }

    #[test]
    fn test_first_loader_wins() {
        let first = InMemoryClassLibrary::new();
        first.insert(ClassMetadata::interface("a.Thing"));
        let chain = ClassLoaderChain::new()
            .with_loader(Arc::new(first))
            .with_loader(Arc::new(FnClassLoader::new(|name| name == "a.Thing")));

        assert_eq!(chain.len(), 2);
        assert!(chain.lookup("a.Thing").unwrap().is_interface());
        assert!(!chain.exists("a.Other"));
    }

    #[test]
    fn test_loaders_added_later_are_seen() {
        let chain = Arc::new(ClassLoaderChain::new());
        let shared: ClassLibraryPtr = chain.clone();
        assert!(!shared.exists("late.Bird"));
        chain.add(Arc::new(FnClassLoader::new(|name| name == "late.Bird")));
        assert!(shared.exists("late.Bird"));
    }
}
