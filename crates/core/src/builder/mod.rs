//! Assembles the model from a flat stream of parse events.
//!
//! The builder keeps an explicit stack of open classes, at most one open
//! method, and two pending buffers (javadoc, annotations) that attach to the
//! next entity the stream declares.

pub mod defs;
pub mod event;

pub use defs::{
    AnnoDef, ClassDef, ElemValueDef, FieldDef, MethodDef, PackageDef, ParameterDef, TagDef,
    TypeDef, TypeVariableDef,
};
pub use event::{Builder, BuilderEvent};

use crate::error::{BuilderError, Result};
use crate::model::{
    Annotation, AnnotationValue, Checkpoint, ClassId, DefaultDocletTagFactory, DocletTagFactory,
    Documentation, EntityRef, JavaClass, JavaField, JavaMethod, JavaPackage, JavaParameter,
    JavaSource, MethodId, Model, Modifiers, ScopeId, SourceId, TypeRef, TypeVariable,
};
use srcmodel_api::ClassKind;
use std::sync::Arc;
use tracing::{debug, warn};

struct PendingDoc {
    text: String,
    tags: Vec<TagDef>,
    line: usize,
}

/// Builds one compilation unit into a [`Model`].
pub struct ModelBuilder<'m> {
    model: &'m mut Model,
    checkpoint: Checkpoint,
    source: SourceId,
    classes: Vec<ClassId>,
    method: Option<MethodId>,
    pending_doc: Option<PendingDoc>,
    pending_annotations: Vec<AnnoDef>,
    tag_factory: Arc<dyn DocletTagFactory>,
}

impl<'m> ModelBuilder<'m> {
    /// Start a new compilation unit in `model`.
    pub fn new(model: &'m mut Model) -> Self {
        let checkpoint = model.checkpoint();
        let source = model.alloc_source(JavaSource::default());
        Self {
            model,
            checkpoint,
            source,
            classes: Vec::new(),
            method: None,
            pending_doc: None,
            pending_annotations: Vec::new(),
            tag_factory: Arc::new(DefaultDocletTagFactory),
        }
    }

    pub fn with_tag_factory(mut self, factory: Arc<dyn DocletTagFactory>) -> Self {
        self.tag_factory = factory;
        self
    }

    /// Record where the events came from.
    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        self.model.source_mut(self.source).origin = Some(origin.into());
        self
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    /// Number of classes currently open.
    pub fn depth(&self) -> usize {
        self.classes.len()
    }

    pub fn replay<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = BuilderEvent>,
    {
        events
            .into_iter()
            .try_for_each(|event| event.apply(self))
    }

    /// Close the unit. Open classes or an open method mean the stream was cut short.
    /// Close the compilation unit.
    ///
    /// A unit left with open classes or an open method is rolled back, so
    /// nothing it allocated stays in the model.
    pub fn finish(self) -> Result<SourceId> {
        if let Err(err) = self.ensure_finished() {
            self.discard();
            return Err(err);
        }
        self.flush_dangling();
        debug!(source = ?self.source, "finished source");
        Ok(self.source)
    }

    /// Replay a whole unit and close it, rolling back on the first error.
    pub fn build<I>(mut self, events: I) -> Result<SourceId>
    where
        I: IntoIterator<Item = BuilderEvent>,
    {
        match self.replay(events) {
            Ok(()) => self.finish(),
            Err(err) => {
                self.discard();
                Err(err)
            }
        }
    }

    /// Remove the unit and everything built into it so far.
    pub fn discard(self) {
        warn!(source = ?self.source, "discarding partially built source");
        self.model.rollback(self.checkpoint);
    }

    fn ensure_finished(&self) -> Result<()> {
        if !self.classes.is_empty() || self.method.is_some() {
            return Err(BuilderError::Unterminated {
                open_classes: self.classes.len(),
                method_open: self.method.is_some(),
            }
            .into());
        }
        Ok(())
    }

    fn flush_dangling(&self) {
        if self.pending_doc.is_some() {
            warn!(source = ?self.source, "discarding javadoc with nothing to attach to");
        }
        if !self.pending_annotations.is_empty() {
            warn!(
                source = ?self.source,
                count = self.pending_annotations.len(),
                "discarding annotations with nothing to attach to"
            );
        }
    }

    fn current_class(&self, event: &'static str, line: usize) -> Result<ClassId> {
        self.classes
            .last()
            .copied()
            .ok_or_else(|| BuilderError::NoOpenClass { event, line }.into())
    }

    fn ensure_no_method(&self, event: &'static str, line: usize) -> Result<()> {
        match self.method {
            Some(_) => Err(BuilderError::MethodStillOpen { event, line }.into()),
            None => Ok(()),
        }
    }

    fn create_type(&self, def: &TypeDef, extra_dimensions: usize, scope: ScopeId) -> TypeRef {
        let arguments = def
            .arguments
            .iter()
            .map(|arg| self.create_type(arg, 0, scope))
            .collect();
        TypeRef::unresolved(def.name.as_str(), def.dimensions + extra_dimensions, scope)
            .with_arguments(arguments)
    }

    fn create_type_variables(&self, defs: &[TypeVariableDef], scope: ScopeId) -> Vec<TypeVariable> {
        defs.iter()
            .map(|def| {
                let bounds = def
                    .bounds
                    .iter()
                    .map(|bound| self.create_type(bound, 0, scope))
                    .collect();
                TypeVariable::new(def.name.as_str(), bounds)
            })
            .collect()
    }

    /// Move the pending javadoc onto `entity`.
    fn take_documentation(&mut self, entity: EntityRef) -> Documentation {
        let Some(doc) = self.pending_doc.take() else {
            return Documentation::default();
        };
        let tags = doc
            .tags
            .iter()
            .map(|tag| {
                self.tag_factory
                    .create_tag(&tag.name, &tag.text, entity, tag.line)
            })
            .collect();
        Documentation {
            comment: Some(doc.text),
            tags,
        }
    }

    /// Move the pending annotations onto `entity`, binding every nested value to it.
    fn take_annotations(&mut self, entity: EntityRef) -> Vec<Annotation> {
        let scope = self.model.scope_of(entity);
        std::mem::take(&mut self.pending_annotations)
            .iter()
            .map(|def| {
                let mut annotation = self.create_annotation(def, scope);
                annotation.bind_context(entity);
                annotation
            })
            .collect()
    }

    fn create_annotation(&self, def: &AnnoDef, scope: ScopeId) -> Annotation {
        let elements = def
            .args
            .iter()
            .map(|(name, value)| (name.clone(), self.create_annotation_value(value, scope)))
            .collect();
        Annotation::new(self.create_type(&def.type_def, 0, scope), elements, def.line)
    }

    fn create_annotation_value(&self, def: &ElemValueDef, scope: ScopeId) -> AnnotationValue {
        match def {
            ElemValueDef::Annotation(anno) => {
                AnnotationValue::Annotation(self.create_annotation(anno, scope))
            }
            ElemValueDef::Constant { value } => AnnotationValue::Constant(value.clone()),
            ElemValueDef::FieldRef { name } => AnnotationValue::FieldRef {
                name: name.clone(),
                context: None,
            },
            ElemValueDef::ClassLiteral { type_def } => {
                AnnotationValue::ClassLiteral(self.create_type(type_def, 0, scope))
            }
            ElemValueDef::List { values } => AnnotationValue::List(
                values
                    .iter()
                    .map(|value| self.create_annotation_value(value, scope))
                    .collect(),
            ),
        }
    }
}

impl Builder for ModelBuilder<'_> {
    fn add_package(&mut self, def: PackageDef) -> Result<()> {
        let source = self.model.source(self.source);
        if source.package.is_some() || !source.classes.is_empty() || !self.classes.is_empty() {
            return Err(BuilderError::LatePackage { line: def.line }.into());
        }
        debug!(package = %def.name, "package");
        let entity = EntityRef::Package(self.source);
        let documentation = self.take_documentation(entity);
        let annotations = self.take_annotations(entity);
        self.model.source_mut(self.source).package = Some(JavaPackage {
            name: def.name,
            annotations,
            documentation,
            line: def.line,
        });
        Ok(())
    }

    fn add_import(&mut self, name: &str, _line: usize) -> Result<()> {
        self.model
            .source_mut(self.source)
            .imports
            .push(name.to_string());
        Ok(())
    }

    fn add_java_doc(&mut self, text: &str, line: usize) -> Result<()> {
        if let Some(previous) = self.pending_doc.take() {
            debug!(line = previous.line, "dropping unattached javadoc");
        }
        self.pending_doc = Some(PendingDoc {
            text: text.to_string(),
            tags: Vec::new(),
            line,
        });
        Ok(())
    }

    fn add_java_doc_tag(&mut self, tag: TagDef) -> Result<()> {
        match self.pending_doc.as_mut() {
            Some(doc) => {
                doc.tags.push(tag);
                Ok(())
            }
            None => Err(BuilderError::OrphanDocTag { line: tag.line }.into()),
        }
    }

    fn begin_class(&mut self, def: ClassDef) -> Result<()> {
        self.ensure_no_method("beginClass", def.line)?;
        let parent = self.classes.last().copied();
        let mut class = JavaClass::new(def.name.as_str(), def.kind, self.source, parent, def.line);
        class.modifiers = Modifiers::new(def.modifiers);
        let id = self.model.alloc_class(class);
        debug!(class = %self.model.fully_qualified_name(id), kind = %def.kind, "begin class");

        // supertypes are written inside the class header and see its type parameters
        let scope = ScopeId::Class(id);
        let type_parameters = self.create_type_variables(&def.type_params, scope);
        let extends: Vec<TypeRef> = def
            .extends
            .iter()
            .map(|ty| self.create_type(ty, 0, scope))
            .collect();
        let implements: Vec<TypeRef> = def
            .implements
            .iter()
            .map(|ty| self.create_type(ty, 0, scope))
            .collect();

        let entity = EntityRef::Class(id);
        let documentation = self.take_documentation(entity);
        let annotations = self.take_annotations(entity);

        let (superclass, implements) = match def.kind {
            ClassKind::Class | ClassKind::Enum => (extends.into_iter().next(), implements),
            ClassKind::Interface | ClassKind::Annotation => {
                (None, extends.into_iter().chain(implements).collect())
            }
        };

        let class = self.model.class_mut(id);
        class.type_parameters = type_parameters;
        class.implements = implements;
        class.documentation = documentation;
        class.annotations = annotations;
        if superclass.is_some() {
            self.model.set_superclass(id, superclass)?;
        }

        self.classes.push(id);
        Ok(())
    }

    fn end_class(&mut self, line: usize) -> Result<()> {
        self.ensure_no_method("endClass", line)?;
        match self.classes.pop() {
            Some(id) => {
                debug!(class = %self.model.fully_qualified_name(id), "end class");
                Ok(())
            }
            None => Err(BuilderError::UnbalancedEndClass { line }.into()),
        }
    }

    fn begin_method(&mut self, line: usize) -> Result<()> {
        self.ensure_no_method("beginMethod", line)?;
        let class = self.current_class("beginMethod", line)?;
        let method = self.model.alloc_method(JavaMethod::open(class, line));
        let annotations = self.take_annotations(EntityRef::Method(method));
        self.model.method_mut(method).annotations = annotations;
        self.method = Some(method);
        Ok(())
    }

    fn end_method(&mut self, def: MethodDef) -> Result<()> {
        let Some(method) = self.method else {
            return Err(BuilderError::NoOpenMethod {
                event: "endMethod",
                line: def.line,
            }
            .into());
        };
        let scope = ScopeId::Method(method);
        let documentation = self.take_documentation(EntityRef::Method(method));

        // type parameters first: the return type may mention them
        let type_parameters = self.create_type_variables(&def.type_params, scope);
        self.model.method_mut(method).type_parameters = type_parameters;

        let return_type = if def.constructor {
            None
        } else {
            def.return_type
                .as_ref()
                .map(|ty| self.create_type(ty, def.dimensions, scope))
        };
        let exceptions = def
            .exceptions
            .iter()
            .map(|ty| self.create_type(ty, 0, scope))
            .collect();

        let m = self.model.method_mut(method);
        m.name = def.name;
        m.modifiers = Modifiers::new(def.modifiers);
        m.return_type = return_type;
        m.exceptions = exceptions;
        m.constructor = def.constructor;
        m.source_code = def.body;
        m.documentation = documentation;
        debug!(method = %m.name, line = m.line, "end method");

        self.model.attach_method(method);
        self.method = None;
        Ok(())
    }

    fn add_field(&mut self, def: FieldDef) -> Result<()> {
        self.ensure_no_method("addField", def.line)?;
        let class = self.current_class("addField", def.line)?;
        let ty = self.create_type(&def.ty, def.dimensions, ScopeId::Class(class));
        let field = self.model.alloc_field(JavaField {
            name: def.name,
            parent: class,
            ty,
            modifiers: Modifiers::new(def.modifiers),
            initializer: def.body,
            documentation: Documentation::default(),
            annotations: Vec::new(),
            line: def.line,
        });
        let entity = EntityRef::Field(field);
        let documentation = self.take_documentation(entity);
        let annotations = self.take_annotations(entity);
        let f = self.model.field_mut(field);
        f.documentation = documentation;
        f.annotations = annotations;
        Ok(())
    }

    fn add_parameter(&mut self, def: ParameterDef) -> Result<()> {
        let Some(method) = self.method else {
            return Err(BuilderError::NoOpenMethod {
                event: "addParameter",
                line: def.line,
            }
            .into());
        };
        let position = self.model.method(method).parameters.len();
        let ty = self.create_type(&def.ty, def.dimensions, ScopeId::Method(method));
        let annotations = self.take_annotations(EntityRef::Parameter(method, position));
        self.model.method_mut(method).parameters.push(JavaParameter {
            name: def.name,
            ty,
            varargs: def.varargs,
            annotations,
            line: def.line,
        });
        Ok(())
    }

    fn add_annotation(&mut self, def: AnnoDef) -> Result<()> {
        self.pending_annotations.push(def);
        Ok(())
    }
}
