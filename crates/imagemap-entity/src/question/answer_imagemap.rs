use sea_orm::entity::prelude::*;

/// Shape of a clickable area, stored with its html image map name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Area {
    #[sea_orm(string_value = "rect")]
    Rect,
    #[sea_orm(string_value = "circle")]
    Circle,
    #[sea_orm(string_value = "poly")]
    Poly,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "answer_imagemap")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question_id: i32,
    pub answer_text: String,
    pub points: f64,
    pub aorder: i32,
    pub correctness: bool,
    pub coords: String,
    pub area: Area,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id"
    )]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
