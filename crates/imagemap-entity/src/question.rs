pub mod answer_imagemap;
pub mod page;
pub mod question;
pub mod question_imagemap;
