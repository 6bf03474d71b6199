use super::context::ResolutionContext;

pub mod builtin;
pub mod import_scope;
pub mod member;
pub mod package_scope;
pub mod type_param;

pub use builtin::BuiltinScope;
pub use import_scope::{ImportScope, WildcardImportScope};
pub use member::MemberScope;
pub use package_scope::PackageScope;
pub use type_param::TypeParameterScope;

/// One layer of the resolution chain.
pub trait TypeScope: Sync {
    /// `None` hands the name to the next layer.
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String>;

    fn name(&self) -> &'static str;
}
