use imagemap_db::question::header::{self, QuestionHeader};
use imagemap_entity::question::question::Model as QuestionModel;
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub fn test_header() -> QuestionHeader {
    QuestionHeader {
        pool_id: 7,
        title: "Harbour".to_owned(),
        comment: String::new(),
        author: "Tester".to_owned(),
        owner: 3,
        question_text: "Where are the boats?".to_owned(),
        working_time: "00:01:30".to_owned(),
        points: 4.0,
        complete: true,
    }
}

#[allow(dead_code)]
pub async fn create_test_question(db: &DatabaseConnection) -> QuestionModel {
    header::Mutation::create(db, test_header(), None).await.unwrap()
}
