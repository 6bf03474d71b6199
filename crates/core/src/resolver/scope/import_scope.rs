use super::TypeScope;
use crate::naming;
use crate::resolver::context::ResolutionContext;

/// Single-type imports: `import a.b.Outer;` answers `Outer` and `Outer.Inner`.
pub struct ImportScope;

impl TypeScope for ImportScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        let (outer, nested) = naming::split_outer(name);
        let suffix = format!(".{outer}");
        context
            .single_type_imports()
            .find(|import| import.ends_with(&suffix) || *import == outer)
            .map(|import| {
                let candidate = format!("{import}{nested}");
                // an import names a class even when no library knows it
                context.model.find_known(&candidate).unwrap_or(candidate)
            })
    }

    fn name(&self) -> &'static str {
        "Import"
    }
}

/// On-demand imports. The first import that knows the name wins; clashes
/// between two wildcard packages are not reported.
pub struct WildcardImportScope;

impl TypeScope for WildcardImportScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        context.wildcard_imports().find_map(|package| {
            context
                .model
                .find_known(&naming::join_package(package, name))
        })
    }

    fn name(&self) -> &'static str {
        "WildcardImport"
    }
}
