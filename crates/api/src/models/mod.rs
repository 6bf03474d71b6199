pub mod class;

pub use class::*;
