pub mod error;
pub mod imagemap;
