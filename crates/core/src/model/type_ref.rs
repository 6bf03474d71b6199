use super::{Model, ScopeId};
use crate::naming;
use once_cell::sync::OnceCell;
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A reference to a named type as written in source, resolved lazily.
///
/// The first resolution answer (including "not found") is cached for the
/// lifetime of the reference. Equality needs the owning [`Model`], so compare
/// references through [`TypeView`].
#[derive(Debug, Clone)]
pub struct TypeRef {
    name: String,
    resolved: OnceCell<Option<String>>,
    dimensions: usize,
    scope: Option<ScopeId>,
    arguments: Vec<TypeRef>,
}

impl TypeRef {
    /// A reference written as `name` inside `scope`, resolved on first use.
    pub fn unresolved(name: impl Into<String>, dimensions: usize, scope: ScopeId) -> Self {
        Self {
            name: name.into(),
            resolved: OnceCell::new(),
            dimensions,
            scope: Some(scope),
            arguments: Vec::new(),
        }
    }

    /// A reference that is already fully qualified (internal `$` form).
    pub fn resolved(fqn: impl Into<String>) -> Self {
        let fqn = fqn.into();
        Self {
            resolved: OnceCell::with_value(Some(fqn.clone())),
            name: fqn,
            dimensions: 0,
            scope: None,
            arguments: Vec::new(),
        }
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_arguments(mut self, arguments: Vec<TypeRef>) -> Self {
        self.arguments = arguments;
        self
    }

    /// The name exactly as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }

    pub fn actual_type_arguments(&self) -> &[TypeRef] {
        &self.arguments
    }

    /// Fully qualified name, computed once and then frozen.
    pub fn resolve(&self, model: &Model) -> Option<&str> {
        if let Some(cached) = self.resolved.get() {
            return cached.as_deref();
        }
        let computed = self
            .scope
            .and_then(|scope| model.resolve_type(scope, &self.name));
        // Another reader may have stored its answer first; both answers are equal.
        let _ = self.resolved.set(computed);
        self.resolved.get().and_then(|r| r.as_deref())
    }

    /// Resolved name, or the raw name when resolution fails.
    pub fn fully_qualified_name<'a>(&'a self, model: &Model) -> &'a str {
        self.resolve(model).unwrap_or(&self.name)
    }

    /// The cached resolution, without computing it.
    pub fn cached_resolution(&self) -> Option<Option<&str>> {
        self.resolved.get().map(|r| r.as_deref())
    }
}

/// A declared type parameter such as `T extends Number & Comparable<T>`.
#[derive(Debug, Clone)]
pub struct TypeVariable {
    name: String,
    bounds: Vec<TypeRef>,
}

impl TypeVariable {
    pub fn new(name: impl Into<String>, bounds: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[TypeRef] {
        &self.bounds
    }

    /// `<T extends java.lang.Number & java.lang.Comparable>`
    pub fn generic_value(&self, model: &Model) -> String {
        let mut out = format!("<{}", self.name);
        for (i, bound) in self.bounds.iter().enumerate() {
            out.push_str(if i == 0 { " extends " } else { " & " });
            out.push_str(&model.view(bound).generic_value());
        }
        out.push('>');
        out
    }
}

/// A [`TypeRef`] read through the model it belongs to.
///
/// Equality and hashing use the erased usage name and the array depth only:
/// `List<String>` equals `List<Integer>`.
#[derive(Clone)]
pub struct TypeView<'m> {
    pub(crate) model: &'m Model,
    ty: Cow<'m, TypeRef>,
}

impl<'m> TypeView<'m> {
    pub(crate) fn new(model: &'m Model, ty: Cow<'m, TypeRef>) -> Self {
        Self { model, ty }
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    pub fn into_owned(self) -> TypeRef {
        self.ty.into_owned()
    }

    /// Internal form, nested classes joined with `$`.
    pub fn fully_qualified_name(&self) -> &str {
        self.ty.fully_qualified_name(self.model)
    }

    /// Usage form, nested classes joined with `.`.
    pub fn value(&self) -> String {
        naming::to_source_form(self.fully_qualified_name())
    }

    /// Usage form with type arguments, e.g. `java.util.Map<K,java.util.List<V>>`.
    pub fn generic_value(&self) -> String {
        let mut out = self.value();
        if !self.ty.arguments.is_empty() {
            let args: Vec<String> = self
                .actual_type_arguments()
                .iter()
                .map(|arg| arg.to_generic_string())
                .collect();
            out.push('<');
            out.push_str(&args.join(","));
            out.push('>');
        }
        out
    }

    pub fn to_generic_string(&self) -> String {
        let mut out = self.generic_value();
        out.push_str(&"[]".repeat(self.ty.dimensions));
        out
    }

    pub fn is_resolved(&self) -> bool {
        self.ty.resolve(self.model).is_some()
    }

    pub fn dimensions(&self) -> usize {
        self.ty.dimensions
    }

    pub fn is_array(&self) -> bool {
        self.ty.is_array()
    }

    pub fn is_primitive(&self) -> bool {
        !self.is_array() && naming::is_primitive(self.fully_qualified_name())
    }

    pub fn is_void(&self) -> bool {
        !self.is_array() && self.fully_qualified_name() == "void"
    }

    pub fn actual_type_arguments(&self) -> Vec<TypeView<'_>> {
        self.ty
            .arguments
            .iter()
            .map(|arg| TypeView::new(self.model, Cow::Borrowed(arg)))
            .collect()
    }
}

impl PartialEq for TypeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.value() == other.value()
    }
}

impl Eq for TypeView<'_> {}

impl Hash for TypeView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
        self.dimensions().hash(state);
    }
}

impl fmt::Display for TypeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value(), "[]".repeat(self.dimensions()))
    }
}

impl fmt::Debug for TypeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeView")
            .field("name", &self.ty.name)
            .field("value", &self.value())
            .field("dimensions", &self.dimensions())
            .finish()
    }
}
