use crate::jdk::JdkClassLibrary;
use crate::loader::ClassLoaderChain;
use srcmodel_api::ClassLibraryPtr;
use srcmodel_core::model::DocletTagFactory;
use srcmodel_core::{
    BuilderEvent, ClassId, JavaClass, Model, ModelBuilder, ModelConfig, Result, SourceId,
};
use std::path::Path;
use std::sync::Arc;

/// Entry point for building a model out of many compilation units.
///
/// Every source shares one model and one class-loader chain. The chain
/// starts with the built-in JDK table; loaders added later are consulted
/// after it, in the order they were added.
pub struct JavaProjectBuilder {
    model: Model,
    loaders: Arc<ClassLoaderChain>,
    tag_factory: Option<Arc<dyn DocletTagFactory>>,
}

impl Default for JavaProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaProjectBuilder {
    pub fn new() -> Self {
        Self::with_config(ModelConfig::default())
    }

    pub fn with_config(config: ModelConfig) -> Self {
        let loaders = Arc::new(ClassLoaderChain::new().with_loader(Arc::new(JdkClassLibrary)));
        let library: ClassLibraryPtr = loaders.clone();
        Self {
            model: Model::with_config(library, config),
            loaders,
            tag_factory: None,
        }
    }

    /// Javadoc tags of sources added from now on are created by `factory`.
    pub fn with_tag_factory(mut self, factory: Arc<dyn DocletTagFactory>) -> Self {
        self.tag_factory = Some(factory);
        self
    }

    /// Append a library to the chain. Names already resolved keep their answer.
    pub fn add_class_loader(&self, loader: ClassLibraryPtr) {
        self.loaders.add(loader);
    }

    pub fn class_library(&self) -> &Arc<ClassLoaderChain> {
        &self.loaders
    }

    /// Build one compilation unit from its parse events.
    ///
    /// A unit rejected by the builder leaves no trace in the model.
    pub fn add_source<I>(&mut self, events: I) -> Result<SourceId>
    where
        I: IntoIterator<Item = BuilderEvent>,
    {
        self.add_source_with_origin(events, None)
    }

    /// Same as [`Self::add_source`], remembering where the unit came from.
    pub fn add_named_source<I>(&mut self, origin: &str, events: I) -> Result<SourceId>
    where
        I: IntoIterator<Item = BuilderEvent>,
    {
        self.add_source_with_origin(events, Some(origin))
    }

    /// Build one compilation unit from a JSON array of events.
    pub fn add_source_json(&mut self, json: &str) -> Result<SourceId> {
        let events = BuilderEvent::parse_stream(json)?;
        self.add_source(events)
    }

    /// Build one compilation unit from a file holding a JSON array of events.
    pub fn add_source_file(&mut self, path: &Path) -> Result<SourceId> {
        let json = std::fs::read_to_string(path)?;
        let events = BuilderEvent::parse_stream(&json)?;
        self.add_source_with_origin(events, Some(&path.display().to_string()))
    }

    fn add_source_with_origin<I>(&mut self, events: I, origin: Option<&str>) -> Result<SourceId>
    where
        I: IntoIterator<Item = BuilderEvent>,
    {
        let mut builder = ModelBuilder::new(&mut self.model);
        if let Some(factory) = &self.tag_factory {
            builder = builder.with_tag_factory(Arc::clone(factory));
        }
        if let Some(origin) = origin {
            builder = builder.with_origin(origin);
        }
        let source = builder.build(events)?;
        tracing::debug!(
            source = source.index(),
            origin = origin.unwrap_or("<memory>"),
            "source added"
        );
        Ok(source)
    }

    pub fn sources(&self) -> Vec<SourceId> {
        self.model.source_ids().collect()
    }

    /// Every parsed class, nested ones included.
    pub fn classes(&self) -> Vec<ClassId> {
        self.model.class_ids().collect()
    }

    pub fn class_by_name(&self, name: &str) -> Option<ClassId> {
        self.model.class_by_name(name)
    }

    pub fn search<F>(&self, predicate: F) -> Vec<ClassId>
    where
        F: Fn(ClassId, &JavaClass) -> bool,
    {
        self.model.search(predicate)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn into_model(self) -> Model {
        self.model
    }
}
