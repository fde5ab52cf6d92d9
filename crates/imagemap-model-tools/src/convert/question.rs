use crate::convert::{FromModel, IntoModel, TryFromDbModel};
use crate::error::Error;
use imagemap_db::question::header::QuestionHeader;
use imagemap_entity::question::answer_imagemap::Model as AnswerModel;
use imagemap_entity::question::question::Model as QuestionModel;
use imagemap_entity::question::question_imagemap::Model as ImagemapModel;
use imagemap_model::question::ImageMapQuestion;

/// Rows making up one image map question.
#[derive(Debug, Clone)]
pub struct StoredQuestion {
    pub question: QuestionModel,
    pub imagemap: ImagemapModel,
    /// Ordered by `aorder`.
    pub answers: Vec<AnswerModel>,
}

impl TryFromDbModel<StoredQuestion> for ImageMapQuestion {
    type Error = Error;

    fn try_from_db_model(model: StoredQuestion) -> Result<Self, Self::Error> {
        let StoredQuestion {
            question,
            imagemap,
            answers,
        } = model;

        let mut result = ImageMapQuestion::new(question.pool_id);
        result.id = Some(question.id);
        result.title = question.title;
        result.comment = question.comment;
        result.author = question.author;
        result.owner = question.owner;
        result.question_text = question.question_text;
        result.working_time = question.working_time.parse()?;
        result.original_id = question.original_id;
        result.created_at = Some(question.created_at);
        result.set_image_filename(&imagemap.image_file);
        result.areas = answers.into_model();
        Ok(result)
    }
}

/// Header columns of the question. `points` and `complete` are derived from the areas.
impl FromModel<&ImageMapQuestion> for QuestionHeader {
    fn from_model(model: &ImageMapQuestion) -> Self {
        Self {
            pool_id: model.pool_id,
            title: model.title.clone(),
            comment: model.comment.clone(),
            author: model.author.clone(),
            owner: model.owner,
            question_text: model.question_text.clone(),
            working_time: model.working_time.to_string(),
            points: model.max_points(),
            complete: model.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{IntoDbModel, TryIntoDbModel, TryIntoModel};
    use imagemap_db::question::answer::AreaAnswer;
    use imagemap_entity::question::answer_imagemap::Area;
    use imagemap_entity::question::question::QuestionType;
    use imagemap_model::area::AreaShape;

    fn stored() -> StoredQuestion {
        let answer = |id: i32, aorder: i32, area: Area| AnswerModel {
            id,
            question_id: 5,
            answer_text: format!("area {aorder}"),
            points: f64::from(aorder + 1),
            aorder,
            correctness: aorder == 0,
            coords: "1,2,3,4".to_owned(),
            area,
        };
        StoredQuestion {
            question: QuestionModel {
                id: 5,
                pool_id: 2,
                question_type: QuestionType::ImageMap,
                title: "Harbour".to_owned(),
                comment: "c".to_owned(),
                author: "Tester".to_owned(),
                owner: 9,
                question_text: "Where?".to_owned(),
                working_time: "00:02:00".to_owned(),
                points: 2.0,
                complete: true,
                created_at: chrono::NaiveDateTime::default(),
                original_id: Some(1),
            },
            imagemap: ImagemapModel {
                question_id: 5,
                image_file: "harbour.png".to_owned(),
            },
            answers: vec![answer(11, 0, Area::Rect), answer(12, 1, Area::Poly)],
        }
    }

    #[test]
    fn test_load_question() {
        let question: ImageMapQuestion = stored().try_into_model().unwrap();

        assert_eq!(question.id, Some(5));
        assert_eq!(question.original_id, Some(1));
        assert_eq!(question.working_time.to_string(), "00:02:00");
        assert_eq!(question.image_filename(), "harbour.png");
        assert_eq!(question.areas.len(), 2);

        let first = question.areas.get(0).unwrap();
        assert_eq!(first.shape, AreaShape::Rectangle);
        assert!(first.correct);
        let second = question.areas.get(1).unwrap();
        assert_eq!(second.order(), 1);
        assert_eq!(second.shape, AreaShape::Polygon);
        assert!(!second.correct);
    }

    #[test]
    fn test_invalid_working_time() {
        let mut rows = stored();
        rows.question.working_time = "soon".to_owned();

        let res: Result<ImageMapQuestion, Error> = rows.try_into_model();
        assert!(matches!(res, Err(Error::Model(_))));
    }

    #[test]
    fn test_store_question() {
        let question: ImageMapQuestion = stored().try_into_model().unwrap();

        let header: QuestionHeader = (&question).into_db_model();
        assert!((header.points - 2.0).abs() < f64::EPSILON);
        assert!(header.complete);
        assert_eq!(header.working_time, "00:02:00");

        let answers: Vec<AreaAnswer> = (&question.areas).try_into_db_model().unwrap();
        let orders: Vec<_> = answers.iter().map(|answer| answer.aorder).collect();
        assert_eq!(orders, [0, 1]);
        assert_eq!(answers[1].area, Area::Poly);
    }
}
