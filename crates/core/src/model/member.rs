use super::{
    Annotation, ClassId, Documentation, FieldId, JavaModel, MethodId, Model, Modifiers, TypeRef,
    TypeVariable, TypeView,
};
use crate::naming;

#[derive(Debug, Clone)]
pub struct JavaMethod {
    pub(crate) name: String,
    pub(crate) parent: ClassId,
    pub(crate) modifiers: Modifiers,
    /// `None` for constructors.
    pub(crate) return_type: Option<TypeRef>,
    pub(crate) parameters: Vec<JavaParameter>,
    pub(crate) exceptions: Vec<TypeRef>,
    pub(crate) type_parameters: Vec<TypeVariable>,
    pub(crate) constructor: bool,
    pub(crate) source_code: Option<String>,
    pub(crate) documentation: Documentation,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) line: usize,
}

impl JavaMethod {
    /// An open method: the name and signature arrive when it is closed.
    pub(crate) fn open(parent: ClassId, line: usize) -> Self {
        Self {
            name: String::new(),
            parent,
            modifiers: Modifiers::default(),
            return_type: None,
            parameters: Vec::new(),
            exceptions: Vec::new(),
            type_parameters: Vec::new(),
            constructor: false,
            source_code: None,
            documentation: Documentation::default(),
            annotations: Vec::new(),
            line,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declaring class.
    pub fn parent(&self) -> ClassId {
        self.parent
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn return_type(&self) -> Option<&TypeRef> {
        self.return_type.as_ref()
    }

    pub fn parameters(&self) -> &[JavaParameter] {
        &self.parameters
    }

    pub fn parameter_by_name(&self, name: &str) -> Option<&JavaParameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn exceptions(&self) -> &[TypeRef] {
        &self.exceptions
    }

    pub fn type_parameters(&self) -> &[TypeVariable] {
        &self.type_parameters
    }

    pub fn is_constructor(&self) -> bool {
        self.constructor
    }

    /// Whether the last parameter is variadic.
    pub fn is_varargs(&self) -> bool {
        self.parameters.last().is_some_and(|p| p.varargs)
    }

    /// Raw body text, if the producer kept it.
    pub fn source_code(&self) -> Option<&str> {
        self.source_code.as_deref()
    }

    /// `foo` for `getFoo`, `isFoo` or `setFoo`; `None` for other names.
    pub fn property_name(&self) -> Option<String> {
        let stem = ["get", "set", "is"]
            .iter()
            .find_map(|prefix| self.name.strip_prefix(prefix))?;
        stem.chars()
            .next()
            .filter(|c| c.is_uppercase())
            .map(|_| naming::decapitalize(stem))
    }
}

impl JavaModel for JavaMethod {
    fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

#[derive(Debug, Clone)]
pub struct JavaParameter {
    pub(crate) name: String,
    pub(crate) ty: TypeRef,
    pub(crate) varargs: bool,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) line: usize,
}

impl JavaParameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    pub fn is_varargs(&self) -> bool {
        self.varargs
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn line_number(&self) -> usize {
        self.line
    }
}

#[derive(Debug, Clone)]
pub struct JavaField {
    pub(crate) name: String,
    pub(crate) parent: ClassId,
    pub(crate) ty: TypeRef,
    pub(crate) modifiers: Modifiers,
    pub(crate) initializer: Option<String>,
    pub(crate) documentation: Documentation,
    pub(crate) annotations: Vec<Annotation>,
    pub(crate) line: usize,
}

impl JavaField {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declaring class.
    pub fn parent(&self) -> ClassId {
        self.parent
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn initialization_expression(&self) -> Option<&str> {
        self.initializer.as_deref()
    }
}

impl JavaModel for JavaField {
    fn documentation(&self) -> &Documentation {
        &self.documentation
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn line_number(&self) -> usize {
        self.line
    }
}

impl Model {
    pub fn return_type(&self, method: MethodId) -> Option<TypeView<'_>> {
        self.method(method).return_type.as_ref().map(|ty| self.view(ty))
    }

    pub fn field_type(&self, field: FieldId) -> TypeView<'_> {
        self.view(&self.field(field).ty)
    }

    /// A constant of an enum: its type is the enum itself.
    pub fn is_enum_constant(&self, field: FieldId) -> bool {
        let field = self.field(field);
        self.class(field.parent).is_enum()
            && self.view(&field.ty).fully_qualified_name()
                == self.fully_qualified_name(field.parent)
    }

    /// `public java.lang.String name(int a, java.lang.Object... rest) throws java.io.IOException`
    pub fn declaration_signature(&self, method: MethodId, with_modifiers: bool) -> String {
        let m = self.method(method);
        let mut out = String::new();
        if with_modifiers {
            out.push_str(&m.modifiers.render());
        }
        if let Some(ty) = &m.return_type {
            out.push_str(&self.view(ty).to_string());
            out.push(' ');
        }
        out.push_str(&m.name);
        out.push('(');
        let params: Vec<String> = m
            .parameters
            .iter()
            .map(|p| {
                let ty = self.view(&p.ty);
                if p.varargs {
                    format!("{}... {}", ty, p.name)
                } else {
                    format!("{} {}", ty, p.name)
                }
            })
            .collect();
        out.push_str(&params.join(", "));
        out.push(')');
        if !m.exceptions.is_empty() {
            let exceptions: Vec<String> =
                m.exceptions.iter().map(|e| self.view(e).value()).collect();
            out.push_str(" throws ");
            out.push_str(&exceptions.join(", "));
        }
        out
    }

    /// `name(a, rest)`
    pub fn call_signature(&self, method: MethodId) -> String {
        let m = self.method(method);
        let names: Vec<&str> = m.parameters.iter().map(|p| p.name.as_str()).collect();
        format!("{}({})", m.name, names.join(", "))
    }

    /// `getX()` with a non-void result or `isX()` returning `boolean`.
    pub fn is_property_accessor(&self, method: MethodId) -> bool {
        let m = self.method(method);
        if m.modifiers.is_static() || !m.parameters.is_empty() || m.property_name().is_none() {
            return false;
        }
        let Some(ret) = self.return_type(method) else {
            return false;
        };
        if m.name.starts_with("get") {
            !ret.is_void()
        } else if m.name.starts_with("is") {
            !ret.is_array() && ret.fully_qualified_name() == "boolean"
        } else {
            false
        }
    }

    /// `setX(value)`.
    pub fn is_property_mutator(&self, method: MethodId) -> bool {
        let m = self.method(method);
        !m.modifiers.is_static()
            && m.parameters.len() == 1
            && m.name.starts_with("set")
            && m.property_name().is_some()
    }

    /// Return type of an accessor, parameter type of a mutator.
    pub fn property_type(&self, method: MethodId) -> Option<TypeView<'_>> {
        if self.is_property_accessor(method) {
            self.return_type(method)
        } else if self.is_property_mutator(method) {
            self.method(method).parameters.first().map(|p| self.view(&p.ty))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> JavaMethod {
        let mut method = JavaMethod::open(ClassId(0), 1);
        method.name = name.to_string();
        method
    }

    #[test]
    fn test_property_name() {
        assert_eq!(named("getMcFnord").property_name().as_deref(), Some("mcFnord"));
        assert_eq!(named("isEmpty").property_name().as_deref(), Some("empty"));
        assert_eq!(named("setURL").property_name().as_deref(), Some("URL"));
        assert_eq!(named("getaway").property_name(), None);
        assert_eq!(named("get").property_name(), None);
        assert_eq!(named("run").property_name(), None);
    }
}
