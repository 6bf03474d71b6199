use dashmap::DashMap;
use srcmodel_api::{ClassKind, ClassLibrary, ClassMetadata};

/// A mutable, thread-safe class table.
///
/// Classes may be registered while the model is being queried; type
/// references that already memoized an answer keep it.
#[derive(Debug, Default)]
pub struct InMemoryClassLibrary {
    classes: DashMap<String, ClassMetadata>,
}

impl InMemoryClassLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plain class with no known supertypes.
    pub fn add(&self, fqn: impl Into<String>) {
        let fqn = fqn.into();
        self.classes
            .insert(fqn.clone(), ClassMetadata::new(fqn, ClassKind::Class));
    }

    pub fn insert(&self, metadata: ClassMetadata) {
        self.classes.insert(metadata.fqn.clone(), metadata);
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassLibrary for InMemoryClassLibrary {
    fn lookup(&self, fqn: &str) -> Option<ClassMetadata> {
        self.classes.get(fqn).map(|entry| entry.value().clone())
    }

    fn exists(&self, fqn: &str) -> bool {
        self.classes.contains_key(fqn)
    }
}
