pub mod assessment_log;
pub mod question;
