pub mod area;
pub mod error;
pub mod question;
pub mod submission;
pub mod working_time;
