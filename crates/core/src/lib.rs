pub mod builder;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod library;
pub mod logging;
pub mod model;
pub mod naming;
pub mod resolver;

pub use builder::{Builder, BuilderEvent, ModelBuilder};
pub use config::{LoggingConfig, ModelConfig};
pub use error::{BuilderError, ModelError, Result};
pub use hierarchy::{BeanProperty, BoundClass, MethodQuery};
pub use library::InMemoryClassLibrary;
pub use model::{
    ClassId, EntityRef, FieldId, JavaClass, JavaField, JavaMethod, JavaModel, MethodId, Model,
    ScopeId, SourceId, TypeRef, TypeView,
};
