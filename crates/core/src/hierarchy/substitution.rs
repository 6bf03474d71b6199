use super::BoundClass;
use crate::model::{ClassId, FieldId, MethodId, Model, TypeRef, TypeView};

impl Model {
    /// Rewrite `ty`, written against `declaring`'s type parameters, in terms
    /// of the type arguments `use_site` passes to `declaring`.
    ///
    /// Only a direct superclass or directly implemented interface of
    /// `use_site` is matched; an indirect ancestor leaves `ty` unchanged.
    /// A parameterized `ty` keeps its own name and has its arguments rewritten.
    pub fn substitute(&self, ty: &TypeRef, declaring: ClassId, use_site: ClassId) -> TypeRef {
        if !ty.actual_type_arguments().is_empty() {
            let arguments = ty
                .actual_type_arguments()
                .iter()
                .map(|arg| self.substitute(arg, declaring, use_site))
                .collect();
            return ty.clone().with_arguments(arguments);
        }
        self.substitute_variable(ty, declaring, use_site)
            .unwrap_or_else(|| ty.clone())
    }

    fn substitute_variable(
        &self,
        ty: &TypeRef,
        declaring: ClassId,
        use_site: ClassId,
    ) -> Option<TypeRef> {
        let name = ty.fully_qualified_name(self);
        let index = self
            .class(declaring)
            .type_parameters()
            .iter()
            .position(|tp| tp.name() == name)?;

        let declaring_fqn = self.fully_qualified_name(declaring);
        let site = self.class(use_site);

        if let Some(sup) = site
            .declared_superclass()
            .filter(|sup| self.view(sup).fully_qualified_name() == declaring_fqn)
        {
            return sup.actual_type_arguments().get(index).cloned();
        }

        let iface = site
            .implements()
            .iter()
            .find(|iface| self.view(iface).fully_qualified_name() == declaring_fqn)?;
        let arg = iface.actual_type_arguments().get(index)?;
        // the interface may itself re-parameterize the argument
        Some(match self.view(iface).bind_to_class() {
            Some(BoundClass::Source(bound)) => self.substitute(arg, bound, bound),
            _ => arg.clone(),
        })
    }

    /// Field type as seen from `use_site`.
    pub fn field_type_in(&self, field: FieldId, use_site: ClassId) -> TypeView<'_> {
        let f = self.field(field);
        self.view_owned(self.substitute(f.type_ref(), f.parent(), use_site))
    }

    /// Return type as seen from `use_site`; `None` for constructors.
    pub fn return_type_in(&self, method: MethodId, use_site: ClassId) -> Option<TypeView<'_>> {
        let m = self.method(method);
        m.return_type()
            .map(|ty| self.view_owned(self.substitute(ty, m.parent(), use_site)))
    }

    pub fn parameter_types_in(&self, method: MethodId, use_site: ClassId) -> Vec<TypeView<'_>> {
        let m = self.method(method);
        m.parameters()
            .iter()
            .map(|p| self.view_owned(self.substitute(p.type_ref(), m.parent(), use_site)))
            .collect()
    }
}

impl<'m> TypeView<'m> {
    /// This type as seen from `use_site` when declared in `declaring`.
    pub fn resolve_type_variable(&self, declaring: ClassId, use_site: ClassId) -> TypeView<'m> {
        let model = self.model;
        model.view_owned(model.substitute(self.type_ref(), declaring, use_site))
    }
}
