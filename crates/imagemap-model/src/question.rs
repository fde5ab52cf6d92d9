use crate::area::AnswerAreas;
use crate::working_time::WorkingTime;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ImageMapQuestion {
    /// `None` until the question is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub pool_id: i32,
    pub title: String,
    #[serde(default)]
    pub comment: String,
    pub author: String,
    pub owner: i32,
    pub question_text: String,
    #[serde(default, deserialize_with = "deserialize_filename")]
    image_filename: String,
    #[serde(default)]
    pub working_time: WorkingTime,
    /// Pool template this question was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_id: Option<i32>,
    /// Test the question is created for. Only read when the question is first persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::NaiveDateTime>,
    #[serde(default)]
    pub areas: AnswerAreas,
}

fn normalize_filename(filename: &str) -> String {
    filename.replace(' ', "_")
}

fn deserialize_filename<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    String::deserialize(deserializer).map(|filename| normalize_filename(&filename))
}

impl ImageMapQuestion {
    /// An empty, unsaved question in the given pool.
    #[must_use]
    pub fn new(pool_id: i32) -> Self {
        Self {
            id: None,
            pool_id,
            title: String::new(),
            comment: String::new(),
            author: String::new(),
            owner: 0,
            question_text: String::new(),
            image_filename: String::new(),
            working_time: WorkingTime::default(),
            original_id: None,
            test_id: None,
            created_at: None,
            areas: AnswerAreas::new(),
        }
    }

    #[must_use]
    pub fn image_filename(&self) -> &str {
        &self.image_filename
    }

    /// Sets the background image. Spaces become underscores.
    pub fn set_image_filename(&mut self, filename: &str) {
        self.image_filename = normalize_filename(filename);
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.author.is_empty()
            && !self.question_text.is_empty()
            && !self.image_filename.is_empty()
            && !self.areas.is_empty()
            && self.max_points() > 0.0
    }

    /// Points of the best area. A learner can only pick one area, so this is not a sum.
    #[must_use]
    pub fn max_points(&self) -> f64 {
        self.areas.max_points()
    }

    /// Sums the points of the areas whose order is in `orders`. Unknown orders count 0.
    #[must_use]
    pub fn points_for_selections(&self, orders: &[usize]) -> f64 {
        self.areas
            .iter()
            .filter(|area| orders.contains(&area.order()))
            .map(|area| area.points)
            .sum()
    }
}
