//! Queries over the class graph once it is built.

pub mod bean;
pub mod signature;
pub mod substitution;
pub mod subtyping;

pub use bean::BeanProperty;
pub use signature::MethodQuery;
pub use subtyping::BoundClass;
