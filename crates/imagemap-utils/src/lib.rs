pub mod args;
pub mod assets;
pub mod tracing;
