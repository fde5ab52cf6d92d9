pub mod assets;
pub mod db;
