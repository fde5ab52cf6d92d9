pub mod assessment_log;
pub mod question;
pub mod schema;
pub mod util;

pub use sea_orm;
