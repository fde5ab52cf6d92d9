use crate::convert::{FromDbModel, FromModel, TryFromModel};
use crate::error::Error;
use imagemap_db::question::answer::AreaAnswer;
use imagemap_entity::question::answer_imagemap::{Area, Model as AnswerModel};
use imagemap_model::area::{AnswerArea, AnswerAreas, AreaShape};

impl FromDbModel<Area> for AreaShape {
    fn from_db_model(model: Area) -> Self {
        match model {
            Area::Rect => AreaShape::Rectangle,
            Area::Circle => AreaShape::Ellipse,
            Area::Poly => AreaShape::Polygon,
        }
    }
}

impl FromModel<AreaShape> for Area {
    fn from_model(model: AreaShape) -> Self {
        match model {
            AreaShape::Rectangle => Area::Rect,
            AreaShape::Ellipse => Area::Circle,
            AreaShape::Polygon => Area::Poly,
        }
    }
}

/// The stored order is dropped, [`AnswerAreas`] assigns it from the row position.
impl FromDbModel<AnswerModel> for AnswerArea {
    fn from_db_model(model: AnswerModel) -> Self {
        AnswerArea::new(
            model.answer_text,
            model.points,
            FromDbModel::from_db_model(model.area),
            model.coords,
        )
        .with_correct(model.correctness)
    }
}

/// Rows must be ordered by `aorder`.
impl FromDbModel<Vec<AnswerModel>> for AnswerAreas {
    fn from_db_model(model: Vec<AnswerModel>) -> Self {
        model.into_iter().map(FromDbModel::from_db_model).collect()
    }
}

impl TryFromModel<&AnswerArea> for AreaAnswer {
    type Error = Error;

    fn try_from_model(model: &AnswerArea) -> Result<Self, Self::Error> {
        Ok(Self {
            answer_text: model.text.clone(),
            points: model.points,
            aorder: i32::try_from(model.order()).map_err(|_| Error::NumConversion)?,
            correctness: model.correct,
            coords: model.coords.to_string(),
            area: FromModel::from_model(model.shape),
        })
    }
}

impl TryFromModel<&AnswerAreas> for Vec<AreaAnswer> {
    type Error = Error;

    fn try_from_model(model: &AnswerAreas) -> Result<Self, Self::Error> {
        model.iter().map(TryFromModel::try_from_model).collect()
    }
}
