use super::TypeScope;
use crate::resolver::context::ResolutionContext;

/// Nested classes of the current class, then of each enclosing class.
pub struct MemberScope;

impl TypeScope for MemberScope {
    fn resolve(&self, name: &str, context: &ResolutionContext) -> Option<String> {
        let model = context.model;
        context.enclosing_classes().find_map(|class| {
            if model.class(class).name() == name {
                return Some(model.fully_qualified_name(class));
            }
            model
                .nested_class_by_name(class, name)
                .map(|nested| model.fully_qualified_name(nested))
        })
    }

    fn name(&self) -> &'static str {
        "Member"
    }
}
