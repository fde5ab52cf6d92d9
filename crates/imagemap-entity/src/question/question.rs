use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum QuestionType {
    ImageMap = 6,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pool_id: i32,
    pub question_type: QuestionType,
    pub title: String,
    pub comment: String,
    pub author: String,
    pub owner: i32,
    pub question_text: String,
    pub working_time: String,
    pub points: f64,
    pub complete: bool,
    pub created_at: DateTime,
    pub original_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::question_imagemap::Entity")]
    Imagemap,
    #[sea_orm(has_many = "super::answer_imagemap::Entity")]
    Answers,
}

impl Related<super::question_imagemap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Imagemap.def()
    }
}

impl Related<super::answer_imagemap::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
