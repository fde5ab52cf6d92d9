use imagemap_entity::question::question::{self, Model as QuestionModel, QuestionType};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};
use std::error::Error;

/// Column values of the question header that are written on every save.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionHeader {
    pub pool_id: i32,
    pub title: String,
    pub comment: String,
    pub author: String,
    pub owner: i32,
    pub question_text: String,
    pub working_time: String,
    pub points: f64,
    pub complete: bool,
}

impl QuestionHeader {
    fn into_active_model(self, id: i32) -> question::ActiveModel {
        question::ActiveModel {
            id: Set(id),
            pool_id: Set(self.pool_id),
            question_type: NotSet,
            title: Set(self.title),
            comment: Set(self.comment),
            author: Set(self.author),
            owner: Set(self.owner),
            question_text: Set(self.question_text),
            working_time: Set(self.working_time),
            points: Set(self.points),
            complete: Set(self.complete),
            created_at: NotSet,
            original_id: NotSet,
        }
    }
}

pub struct Mutation;

impl Mutation {
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        header: QuestionHeader,
        original_id: Option<i32>,
    ) -> Result<QuestionModel, DbErr> {
        let question = question::ActiveModel {
            id: NotSet,
            pool_id: Set(header.pool_id),
            question_type: Set(QuestionType::ImageMap),
            title: Set(header.title),
            comment: Set(header.comment),
            author: Set(header.author),
            owner: Set(header.owner),
            question_text: Set(header.question_text),
            working_time: Set(header.working_time),
            points: Set(header.points),
            complete: Set(header.complete),
            created_at: Set(chrono::Utc::now().naive_utc()),
            original_id: Set(original_id),
        };
        question
            .insert(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create question"))
    }

    pub async fn update<C: ConnectionTrait>(
        conn: &C,
        question_id: i32,
        header: QuestionHeader,
    ) -> Result<QuestionModel, DbErr> {
        header.into_active_model(question_id).update(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %question_id, "failed to update question"),
        )
    }

    /// Writes the header of a test copy onto its pool template. The template keeps its pool and
    /// owner.
    pub async fn update_template<C: ConnectionTrait>(
        conn: &C,
        original_id: i32,
        header: QuestionHeader,
    ) -> Result<QuestionModel, DbErr> {
        let mut question = header.into_active_model(original_id);
        question.pool_id = NotSet;
        question.owner = NotSet;
        question.update(conn).await.inspect_err(
            |error| tracing::error!(error = error as &dyn Error, %original_id, "failed to update question template"),
        )
    }
}
