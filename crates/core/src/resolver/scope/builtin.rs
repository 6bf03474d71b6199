use super::TypeScope;
use crate::naming;
use crate::resolver::context::ResolutionContext;

/// Primitives, implicit `java.lang` names, configured implicit packages and
/// names that are already qualified.
pub struct BuiltinScope;

impl TypeScope for BuiltinScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        if naming::is_primitive(name) {
            return Some(name.to_string());
        }
        if let Some(fqn) = naming::implicit_java_lang(name) {
            return Some(fqn);
        }
        let model = context.model;
        if let Some(fqn) = model
            .config()
            .implicit_packages
            .iter()
            .find_map(|package| model.find_known(&naming::join_package(package, name)))
        {
            return Some(fqn);
        }
        if name.contains(naming::TYPE_SEPARATOR) {
            return Some(model.find_known(name).unwrap_or_else(|| name.to_string()));
        }
        None
    }

    fn name(&self) -> &'static str {
        "Builtin"
    }
}
