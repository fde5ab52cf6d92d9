pub mod answer;
pub mod header;
pub mod imagemap;
pub mod page;
