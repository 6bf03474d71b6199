use super::TypeScope;
use crate::resolver::context::ResolutionContext;

/// Type variables in scope resolve to themselves.
pub struct TypeParameterScope;

impl TypeScope for TypeParameterScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        if name.contains('.') {
            return None;
        }
        let model = context.model;
        let on_method = context.method.is_some_and(|method| {
            model
                .method(method)
                .type_parameters()
                .iter()
                .any(|tp| tp.name() == name)
        });
        let on_class = || {
            context.enclosing_classes().any(|class| {
                model
                    .class(class)
                    .type_parameters()
                    .iter()
                    .any(|tp| tp.name() == name)
            })
        };
        (on_method || on_class()).then(|| name.to_string())
    }

    fn name(&self) -> &'static str {
        "TypeParameter"
    }
}
