use super::BoundClass;
use crate::model::{ClassId, MethodId, Model, TypeRef, TypeView};
use indexmap::IndexMap;
use std::collections::HashSet;

/// A property derived from a getter and/or setter pair.
#[derive(Debug, Clone)]
pub struct BeanProperty {
    name: String,
    ty: Option<TypeRef>,
    accessor: Option<MethodId>,
    mutator: Option<MethodId>,
}

impl BeanProperty {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_ref(&self) -> Option<&TypeRef> {
        self.ty.as_ref()
    }

    pub fn accessor(&self) -> Option<MethodId> {
        self.accessor
    }

    pub fn mutator(&self) -> Option<MethodId> {
        self.mutator
    }
}

impl Model {
    /// Methods of `class`, optionally followed by inherited ones.
    ///
    /// Inherited constructors and private methods are left out, as is any
    /// inherited method overridden by one already listed. Overrides match on
    /// name and erased parameter types; parameter names, return types and
    /// `throws` clauses do not matter.
    pub fn methods(&self, class: ClassId, superclasses: bool) -> Vec<MethodId> {
        let mut result = self.class(class).method_ids().to_vec();
        if superclasses {
            let mut visited = HashSet::from([class]);
            self.collect_inherited_methods(
                class,
                &mut result,
                &mut visited,
                self.config().max_hierarchy_depth,
            );
        }
        result
    }

    fn collect_inherited_methods(
        &self,
        class: ClassId,
        result: &mut Vec<MethodId>,
        visited: &mut HashSet<ClassId>,
        depth: usize,
    ) {
        if depth == 0 {
            tracing::warn!(
                class = %self.fully_qualified_name(class),
                "hierarchy depth limit reached while collecting methods"
            );
            return;
        }
        let parents: Vec<ClassId> = self
            .superclass(class)
            .into_iter()
            .chain(self.interfaces(class))
            .filter_map(|ty| match ty.bind_to_class() {
                Some(BoundClass::Source(id)) => Some(id),
                _ => None,
            })
            .collect();
        for parent in parents {
            if !visited.insert(parent) {
                continue;
            }
            for &method in self.class(parent).method_ids() {
                let m = self.method(method);
                if m.is_constructor() || m.modifiers().is_private() {
                    continue;
                }
                if !self.is_overridden(method, result) {
                    result.push(method);
                }
            }
            self.collect_inherited_methods(parent, result, visited, depth - 1);
        }
    }

    fn is_overridden(&self, method: MethodId, listed: &[MethodId]) -> bool {
        let m = self.method(method);
        let params: Vec<TypeRef> = m
            .parameters()
            .iter()
            .map(|p| p.type_ref().clone())
            .collect();
        listed
            .iter()
            .any(|&other| self.signature_matches(other, m.name(), &params))
    }

    /// Properties in the order their first accessor or mutator appears.
    ///
    /// A getter and setter pair up only when their property types are equal;
    /// a later method with a conflicting type is ignored.
    pub fn bean_properties(&self, class: ClassId, superclasses: bool) -> Vec<BeanProperty> {
        let mut properties: IndexMap<String, BeanProperty> = IndexMap::new();
        for method in self.methods(class, superclasses) {
            let is_accessor = self.is_property_accessor(method);
            if !is_accessor && !self.is_property_mutator(method) {
                continue;
            }
            let (Some(name), Some(ty)) = (
                self.method(method).property_name(),
                self.property_type(method),
            ) else {
                continue;
            };
            let property = properties
                .entry(name.clone())
                .or_insert_with(|| BeanProperty {
                    name,
                    ty: None,
                    accessor: None,
                    mutator: None,
                });
            if !compatible(self, property.ty.as_ref(), &ty) {
                continue;
            }
            if property.ty.is_none() {
                property.ty = Some(ty.type_ref().clone());
            }
            if is_accessor {
                property.accessor.get_or_insert(method);
            } else {
                property.mutator.get_or_insert(method);
            }
        }
        properties.into_values().collect()
    }

    pub fn bean_property(
        &self,
        class: ClassId,
        name: &str,
        superclasses: bool,
    ) -> Option<BeanProperty> {
        self.bean_properties(class, superclasses)
            .into_iter()
            .find(|p| p.name == name)
    }
}

fn compatible(model: &Model, existing: Option<&TypeRef>, candidate: &TypeView<'_>) -> bool {
    existing.is_none_or(|ty| model.view(ty) == *candidate)
}
