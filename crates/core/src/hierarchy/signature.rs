use super::BoundClass;
use crate::model::{ClassId, MethodId, Model, TypeRef};

/// How far a signature lookup reaches and which variadic-ness it prefers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodQuery {
    /// Also search superclasses and interfaces.
    pub superclasses: bool,
    /// `Some(flag)` prefers methods whose variadic-ness equals `flag`;
    /// `None` prefers non-variadic methods.
    pub varargs: Option<bool>,
}

impl MethodQuery {
    pub fn declared() -> Self {
        Self::default()
    }

    pub fn inherited() -> Self {
        Self {
            superclasses: true,
            varargs: None,
        }
    }

    pub fn with_varargs(mut self, varargs: bool) -> Self {
        self.varargs = Some(varargs);
        self
    }
}

impl Model {
    /// Same name, arity and erased parameter types.
    ///
    /// A variadic last parameter also accepts the query type with one more
    /// array dimension (`String...` matches `String[]` and `String[][]`).
    pub fn signature_matches(&self, method: MethodId, name: &str, params: &[TypeRef]) -> bool {
        let m = self.method(method);
        if m.name() != name || m.parameters().len() != params.len() {
            return false;
        }
        let last = params.len().saturating_sub(1);
        m.parameters()
            .iter()
            .zip(params)
            .enumerate()
            .all(|(i, (declared, query))| {
                let declared_ty = self.view(declared.type_ref());
                let query_ty = self.view(query);
                declared_ty == query_ty
                    || (i == last
                        && declared.is_varargs()
                        && query_ty.dimensions() == declared_ty.dimensions() + 1
                        && query_ty.value() == declared_ty.value())
            })
    }

    /// Best match declared on `class`, honoring the query's varargs preference.
    pub fn declared_method_by_signature(
        &self,
        class: ClassId,
        name: &str,
        params: &[TypeRef],
        varargs: Option<bool>,
    ) -> Option<MethodId> {
        let candidates: Vec<MethodId> = self
            .class(class)
            .method_ids()
            .iter()
            .copied()
            .filter(|&m| self.signature_matches(m, name, params))
            .collect();
        let preferred = varargs.unwrap_or(false);
        candidates
            .iter()
            .copied()
            .find(|&m| self.method(m).is_varargs() == preferred)
            .or_else(|| candidates.first().copied())
    }

    pub fn method_by_signature(
        &self,
        class: ClassId,
        name: &str,
        params: &[TypeRef],
        query: MethodQuery,
    ) -> Option<MethodId> {
        self.methods_by_signature(class, name, params, query)
            .into_iter()
            .next()
    }

    /// Matches on `class`, then the first non-private match up the superclass
    /// chain, then the first match of each interface.
    pub fn methods_by_signature(
        &self,
        class: ClassId,
        name: &str,
        params: &[TypeRef],
        query: MethodQuery,
    ) -> Vec<MethodId> {
        self.methods_by_signature_within(
            class,
            name,
            params,
            query,
            self.config().max_hierarchy_depth,
        )
    }

    fn methods_by_signature_within(
        &self,
        class: ClassId,
        name: &str,
        params: &[TypeRef],
        query: MethodQuery,
        depth: usize,
    ) -> Vec<MethodId> {
        let mut result: Vec<MethodId> = self
            .declared_method_by_signature(class, name, params, query.varargs)
            .into_iter()
            .collect();
        if !query.superclasses {
            return result;
        }
        if depth == 0 {
            tracing::warn!(
                class = %self.fully_qualified_name(class),
                "hierarchy depth limit reached during signature lookup"
            );
            return result;
        }

        let parents = self
            .superclass(class)
            .into_iter()
            .chain(self.interfaces(class))
            .filter_map(|ty| match ty.bind_to_class() {
                Some(BoundClass::Source(id)) => Some(id),
                _ => None,
            })
            .collect::<Vec<_>>();
        for parent in parents {
            let inherited = self
                .methods_by_signature_within(parent, name, params, query, depth - 1)
                .into_iter()
                .find(|&m| !self.method(m).modifiers().is_private());
            if let Some(method) = inherited {
                result.push(method);
            }
        }
        result
    }
}
