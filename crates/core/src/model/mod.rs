//! The linked object model of a set of parsed compilation units.
//!
//! Entities live in arenas owned by [`Model`] and point at each other by id.
//! Back-links (class to enclosing class or source, member to declaring class)
//! are plain ids, so there are no ownership cycles.

pub mod annotation;
pub mod class;
pub mod doc;
pub mod member;
pub mod source;
pub mod type_ref;

pub use annotation::{Annotation, AnnotationValue};
pub use class::JavaClass;
pub use doc::{
    AliasDocletTagFactory, DefaultDocletTagFactory, DocletTag, DocletTagFactory, Documentation,
    JavaModel, Modifiers,
};
pub use member::{JavaField, JavaMethod, JavaParameter};
pub use source::{JavaPackage, JavaSource};
pub use type_ref::{TypeRef, TypeVariable, TypeView};

use crate::config::ModelConfig;
use crate::naming;
use srcmodel_api::{ClassLibraryPtr, EmptyClassLibrary};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            pub fn index(self) -> usize {
                self.0 as usize
            }

            fn from_index(index: usize) -> Self {
                Self(index as u32)
            }
        }
    };
}

arena_id!(
    /// A compilation unit.
    SourceId
);
arena_id!(ClassId);
arena_id!(MethodId);
arena_id!(FieldId);

/// A lookup context that can turn a bare name into a fully qualified one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeId {
    Source(SourceId),
    Class(ClassId),
    /// A method sees its own type parameters before its declaring class's scope.
    Method(MethodId),
}

/// Non-owning link to anything that can carry javadoc and annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Package(SourceId),
    Class(ClassId),
    Method(MethodId),
    Field(FieldId),
    /// Parameter at the given position of a method.
    Parameter(MethodId, usize),
}

/// Arena lengths before a compilation unit started building.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Checkpoint {
    sources: usize,
    classes: usize,
    methods: usize,
    fields: usize,
}

pub struct Model {
    config: ModelConfig,
    library: ClassLibraryPtr,
    sources: Vec<JavaSource>,
    classes: Vec<JavaClass>,
    methods: Vec<JavaMethod>,
    fields: Vec<JavaField>,
    /// Parsed classes by internal fully qualified name (`p.Outer$Inner`).
    class_index: HashMap<String, ClassId>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Arc::new(EmptyClassLibrary))
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("sources", &self.sources.len())
            .field("classes", &self.classes.len())
            .field("methods", &self.methods.len())
            .field("fields", &self.fields.len())
            .finish()
    }
}

impl Model {
    pub fn new(library: ClassLibraryPtr) -> Self {
        Self::with_config(library, ModelConfig::default())
    }

    pub fn with_config(library: ClassLibraryPtr, config: ModelConfig) -> Self {
        Self {
            config,
            library,
            sources: Vec::new(),
            classes: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            class_index: HashMap::new(),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn library(&self) -> &ClassLibraryPtr {
        &self.library
    }

    // ---- Arena access ----

    pub fn source(&self, id: SourceId) -> &JavaSource {
        &self.sources[id.index()]
    }

    pub fn class(&self, id: ClassId) -> &JavaClass {
        &self.classes[id.index()]
    }

    pub fn method(&self, id: MethodId) -> &JavaMethod {
        &self.methods[id.index()]
    }

    pub fn field(&self, id: FieldId) -> &JavaField {
        &self.fields[id.index()]
    }

    pub fn source_ids(&self) -> impl Iterator<Item = SourceId> + '_ {
        (0..self.sources.len()).map(SourceId::from_index)
    }

    /// Every parsed class, nested ones included, in declaration order.
    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.classes.len()).map(ClassId::from_index)
    }

    /// Classes matching the predicate.
    pub fn search<F>(&self, predicate: F) -> Vec<ClassId>
    where
        F: Fn(ClassId, &JavaClass) -> bool,
    {
        self.class_ids()
            .filter(|&id| predicate(id, self.class(id)))
            .collect()
    }

    // ---- Name lookup ----

    /// A parsed class by fully qualified name, in either `$` or dotted form.
    pub fn class_by_name(&self, name: &str) -> Option<ClassId> {
        naming::nesting_candidates(name)
            .iter()
            .find_map(|candidate| self.class_index.get(candidate).copied())
    }

    /// Internal name of a class known to the parsed sources or the library.
    pub fn find_known(&self, name: &str) -> Option<String> {
        naming::nesting_candidates(name)
            .into_iter()
            .find(|candidate| {
                self.class_index.contains_key(candidate) || self.library.exists(candidate)
            })
    }

    pub fn class_exists(&self, name: &str) -> bool {
        self.find_known(name).is_some()
    }

    /// The scope a type reference attached to `entity` resolves in.
    pub fn scope_of(&self, entity: EntityRef) -> ScopeId {
        match entity {
            EntityRef::Package(source) => ScopeId::Source(source),
            EntityRef::Class(class) => ScopeId::Class(class),
            EntityRef::Method(method) | EntityRef::Parameter(method, _) => ScopeId::Method(method),
            EntityRef::Field(field) => ScopeId::Class(self.field(field).parent()),
        }
    }

    /// The innermost class a scope belongs to.
    pub fn scope_class(&self, scope: ScopeId) -> Option<ClassId> {
        match scope {
            ScopeId::Source(_) => None,
            ScopeId::Class(class) => Some(class),
            ScopeId::Method(method) => Some(self.method(method).parent()),
        }
    }

    pub fn scope_source(&self, scope: ScopeId) -> SourceId {
        match scope {
            ScopeId::Source(source) => source,
            ScopeId::Class(class) => self.class(class).source(),
            ScopeId::Method(method) => self.class(self.method(method).parent()).source(),
        }
    }

    // ---- Type views ----

    pub fn view<'m>(&'m self, ty: &'m TypeRef) -> TypeView<'m> {
        TypeView::new(self, Cow::Borrowed(ty))
    }

    pub fn view_owned(&self, ty: TypeRef) -> TypeView<'_> {
        TypeView::new(self, Cow::Owned(ty))
    }

    // ---- Construction, used by the builder ----

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            sources: self.sources.len(),
            classes: self.classes.len(),
            methods: self.methods.len(),
            fields: self.fields.len(),
        }
    }

    /// Drop everything allocated after `checkpoint` and rebuild the class
    /// index, restoring entries a dropped duplicate had replaced.
    pub(crate) fn rollback(&mut self, checkpoint: Checkpoint) {
        self.sources.truncate(checkpoint.sources);
        self.classes.truncate(checkpoint.classes);
        self.methods.truncate(checkpoint.methods);
        self.fields.truncate(checkpoint.fields);
        self.class_index = (0..self.classes.len())
            .map(ClassId::from_index)
            .map(|id| (self.fully_qualified_name(id), id))
            .collect();
    }

    pub(crate) fn alloc_source(&mut self, source: JavaSource) -> SourceId {
        let id = SourceId::from_index(self.sources.len());
        self.sources.push(source);
        id
    }

    /// Store a class, link it under its parent (or source) and index its name.
    pub(crate) fn alloc_class(&mut self, class: JavaClass) -> ClassId {
        let id = ClassId::from_index(self.classes.len());
        let parent = class.parent();
        let source = class.source();
        self.classes.push(class);

        match parent {
            Some(parent) => self.classes[parent.index()].nested.push(id),
            None => self.sources[source.index()].classes.push(id),
        }

        let fqn = self.fully_qualified_name(id);
        if let Some(previous) = self.class_index.insert(fqn.clone(), id) {
            tracing::warn!(
                class = %fqn,
                ?previous,
                "duplicate class declaration replaces earlier one"
            );
        }
        id
    }

    /// Store a method that is not yet listed on its class.
    pub(crate) fn alloc_method(&mut self, method: JavaMethod) -> MethodId {
        let id = MethodId::from_index(self.methods.len());
        self.methods.push(method);
        id
    }

    pub(crate) fn attach_method(&mut self, method: MethodId) {
        let parent = self.methods[method.index()].parent();
        self.classes[parent.index()].methods.push(method);
    }

    pub(crate) fn alloc_field(&mut self, field: JavaField) -> FieldId {
        let id = FieldId::from_index(self.fields.len());
        let parent = field.parent();
        self.fields.push(field);
        self.classes[parent.index()].fields.push(id);
        id
    }

    pub(crate) fn source_mut(&mut self, id: SourceId) -> &mut JavaSource {
        &mut self.sources[id.index()]
    }

    pub(crate) fn class_mut(&mut self, id: ClassId) -> &mut JavaClass {
        &mut self.classes[id.index()]
    }

    pub(crate) fn method_mut(&mut self, id: MethodId) -> &mut JavaMethod {
        &mut self.methods[id.index()]
    }

    pub(crate) fn field_mut(&mut self, id: FieldId) -> &mut JavaField {
        &mut self.fields[id.index()]
    }
}
