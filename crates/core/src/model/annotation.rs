use super::{EntityRef, FieldId, Model, TypeRef};
use indexmap::IndexMap;

/// An annotation attached to a package, class, member or parameter.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub(crate) ty: TypeRef,
    pub(crate) elements: IndexMap<String, AnnotationValue>,
    pub(crate) context: Option<EntityRef>,
    pub(crate) line: usize,
}

/// Element values in the shapes the annotation grammar allows.
#[derive(Debug, Clone)]
pub enum AnnotationValue {
    Annotation(Annotation),
    /// Literal text: numbers, strings, chars, booleans, expressions.
    Constant(String),
    /// `Foo.class`
    ClassLiteral(TypeRef),
    /// A bare or qualified field name, e.g. `MAX` or `Limits.MAX`.
    FieldRef {
        name: String,
        context: Option<EntityRef>,
    },
    List(Vec<AnnotationValue>),
}

impl Annotation {
    pub fn new(ty: TypeRef, elements: IndexMap<String, AnnotationValue>, line: usize) -> Self {
        Self {
            ty,
            elements,
            context: None,
            line,
        }
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.ty
    }

    /// Element values in declaration order.
    pub fn elements(&self) -> &IndexMap<String, AnnotationValue> {
        &self.elements
    }

    pub fn element(&self, name: &str) -> Option<&AnnotationValue> {
        self.elements.get(name)
    }

    /// The entity this annotation (or the annotation enclosing it) is attached to.
    pub fn context(&self) -> Option<EntityRef> {
        self.context
    }

    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Bind this annotation and every nested value to `context`.
    pub(crate) fn bind_context(&mut self, context: EntityRef) {
        self.context = Some(context);
        for value in self.elements.values_mut() {
            value.bind_context(context);
        }
    }
}

impl AnnotationValue {
    fn bind_context(&mut self, entity: EntityRef) {
        match self {
            AnnotationValue::Annotation(annotation) => annotation.bind_context(entity),
            AnnotationValue::FieldRef { context, .. } => *context = Some(entity),
            AnnotationValue::List(values) => {
                for value in values {
                    value.bind_context(entity);
                }
            }
            AnnotationValue::Constant(_) | AnnotationValue::ClassLiteral(_) => {}
        }
    }

    pub fn as_constant(&self) -> Option<&str> {
        match self {
            AnnotationValue::Constant(text) => Some(text),
            _ => None,
        }
    }
}

impl Model {
    /// The field a `FieldRef` element names, looked up from the annotated entity.
    ///
    /// `NAME` is searched in the context class and its enclosing classes;
    /// `Type.NAME` resolves `Type` first.
    pub fn field_ref_target(&self, context: EntityRef, name: &str) -> Option<FieldId> {
        let scope = self.scope_of(context);
        match name.rsplit_once('.') {
            None => {
                let mut class = self.scope_class(scope);
                while let Some(id) = class {
                    if let Some(field) = self.field_by_name(id, name) {
                        return Some(field);
                    }
                    class = self.class(id).parent();
                }
                None
            }
            Some((type_name, field_name)) => {
                let fqn = self.resolve_type(scope, type_name)?;
                let class = self.class_by_name(&fqn)?;
                self.field_by_name(class, field_name)
            }
        }
    }
}
