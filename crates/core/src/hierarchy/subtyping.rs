use crate::model::{ClassId, Model, TypeRef, TypeView};
use crate::naming;
use crate::resolver::context::ResolutionContext;
use srcmodel_api::ClassMetadata;

/// The class a type reference names, parsed or known to the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundClass {
    Source(ClassId),
    External(ClassMetadata),
}

impl BoundClass {
    pub fn as_source(&self) -> Option<ClassId> {
        match self {
            BoundClass::Source(id) => Some(*id),
            BoundClass::External(_) => None,
        }
    }

    pub fn fully_qualified_name(&self, model: &Model) -> String {
        match self {
            BoundClass::Source(id) => model.fully_qualified_name(*id),
            BoundClass::External(meta) => meta.fqn.clone(),
        }
    }
}

impl Model {
    /// Parsed class first, then the library.
    pub fn lookup_class(&self, fqn: &str) -> Option<BoundClass> {
        if let Some(id) = self.class_by_name(fqn) {
            return Some(BoundClass::Source(id));
        }
        naming::nesting_candidates(fqn)
            .iter()
            .find_map(|candidate| self.library().lookup(candidate))
            .map(BoundClass::External)
    }

    /// Effective superclass of a bound class.
    pub fn bound_superclass(&self, class: &BoundClass) -> Option<TypeView<'_>> {
        match class {
            BoundClass::Source(id) => self.superclass(*id),
            BoundClass::External(meta) => meta
                .superclass
                .as_ref()
                .map(|name| self.view_owned(TypeRef::resolved(name.clone()))),
        }
    }

    pub fn bound_interfaces(&self, class: &BoundClass) -> Vec<TypeView<'_>> {
        match class {
            BoundClass::Source(id) => self.interfaces(*id),
            BoundClass::External(meta) => meta
                .interfaces
                .iter()
                .map(|name| self.view_owned(TypeRef::resolved(name.clone())))
                .collect(),
        }
    }
}

impl<'m> TypeView<'m> {
    /// The class this reference names.
    ///
    /// Nested classes of the class that owns the reference are tried first,
    /// then the model and its library.
    pub fn bind_to_class(&self) -> Option<BoundClass> {
        let model = self.model;
        let fqn = self.fully_qualified_name();
        if let Some(scope) = self.type_ref().scope() {
            let context = ResolutionContext::new(model, scope);
            if let Some(class) = context.class {
                let nested = model
                    .class(class)
                    .nested_class_ids()
                    .iter()
                    .copied()
                    .find(|&nested| model.fully_qualified_name(nested) == fqn);
                if let Some(nested) = nested {
                    return Some(BoundClass::Source(nested));
                }
            }
        }
        model.lookup_class(fqn)
    }

    /// Erasure-equal to `candidate`, or reaches it through superclasses and
    /// interfaces. Walks stop at the configured hierarchy depth.
    pub fn is_subtype_of(&self, candidate: &TypeView<'_>) -> bool {
        is_subtype_within(self, candidate, self.model.config().max_hierarchy_depth)
    }
}

fn is_subtype_within(ty: &TypeView<'_>, candidate: &TypeView<'_>, depth: usize) -> bool {
    if ty == candidate {
        return true;
    }
    if depth == 0 {
        tracing::warn!(ty = %ty, candidate = %candidate, "hierarchy depth limit reached");
        return false;
    }
    let Some(class) = ty.bind_to_class() else {
        return false;
    };
    let model = ty.model;
    model
        .bound_interfaces(&class)
        .iter()
        .any(|iface| is_subtype_within(iface, candidate, depth - 1))
        || model
            .bound_superclass(&class)
            .is_some_and(|sup| is_subtype_within(&sup, candidate, depth - 1))
}
