//! Java platform pieces for the source model: a built-in JDK class table,
//! pluggable class loaders and a multi-source project facade.

pub mod jdk;
pub mod loader;
pub mod project;

pub use jdk::JdkClassLibrary;
pub use loader::{ClassLoaderChain, FnClassLoader};
pub use project::JavaProjectBuilder;
