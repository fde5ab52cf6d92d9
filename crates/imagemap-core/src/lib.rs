pub mod imagemap;
