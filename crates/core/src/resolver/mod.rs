//! Scope-chain resolution of names as written in source.
//!
//! Each [`TypeScope`] layer either answers or defers to the next one, in
//! this order: type parameters, nested classes, single-type imports, the
//! current package, on-demand imports, then built-in names.

pub mod context;
pub mod scope;

use crate::model::{Model, ScopeId};
use context::ResolutionContext;
use scope::{
    BuiltinScope, ImportScope, MemberScope, PackageScope, TypeParameterScope, TypeScope,
    WildcardImportScope,
};
use std::ops::ControlFlow;

const SCOPE_CHAIN: [&dyn TypeScope; 6] = [
    &TypeParameterScope,
    &MemberScope,
    &ImportScope,
    &PackageScope,
    &WildcardImportScope,
    &BuiltinScope,
];

impl Model {
    /// Fully qualified (internal `$` form) name for `name` seen from `scope`.
    ///
    /// Not memoized; [`crate::model::TypeRef::resolve`] caches on top of this.
    pub fn resolve_type(&self, scope: ScopeId, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        let context = ResolutionContext::new(self, scope);
        let result = SCOPE_CHAIN.iter().try_for_each(|layer| {
            match layer.resolve(name, &context) {
                Some(fqn) => ControlFlow::Break((layer.name(), fqn)),
                None => ControlFlow::Continue(()),
            }
        });
        match result {
            ControlFlow::Break((layer, fqn)) => {
                tracing::trace!(name, %fqn, layer, "resolved type name");
                Some(fqn)
            }
            ControlFlow::Continue(()) => {
                tracing::trace!(name, ?scope, "type name left unresolved");
                None
            }
        }
    }
}
