use super::TypeScope;
use crate::naming;
use crate::resolver::context::ResolutionContext;

/// Classes of the current package, parsed or known to the library.
pub struct PackageScope;

impl TypeScope for PackageScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        let candidate = naming::join_package(context.package(), name);
        context.model.find_known(&candidate)
    }

    fn name(&self) -> &'static str {
        "Package"
    }
}
