use crate::model::{ClassId, MethodId, Model, ScopeId, SourceId};

/// Where a name is being resolved: the source, innermost class and method.
pub struct ResolutionContext<'a> {
    pub model: &'a Model,
    pub source: SourceId,
    pub class: Option<ClassId>,
    pub method: Option<MethodId>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(model: &'a Model, scope: ScopeId) -> Self {
        let method = match scope {
            ScopeId::Method(method) => Some(method),
            _ => None,
        };
        Self {
            model,
            source: model.scope_source(scope),
            class: model.scope_class(scope),
            method,
        }
    }

    /// The current class followed by its enclosing classes, innermost first.
    pub fn enclosing_classes(&self) -> impl Iterator<Item = ClassId> + 'a {
        let model = self.model;
        std::iter::successors(self.class, move |&class| model.class(class).parent())
    }

    pub fn package(&self) -> &'a str {
        self.model.source(self.source).package_name()
    }

    pub fn imports(&self) -> &'a [String] {
        self.model.source(self.source).imports()
    }

    /// Single-type imports, skipping static ones.
    pub fn single_type_imports(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.imports()
            .iter()
            .map(String::as_str)
            .filter(|import| !import.ends_with(".*") && !import.starts_with("static "))
    }

    /// Packages (or classes) imported on demand, without the trailing `.*`.
    pub fn wildcard_imports(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.imports()
            .iter()
            .filter(|import| !import.starts_with("static "))
            .filter_map(|import| import.strip_suffix(".*"))
    }
}
