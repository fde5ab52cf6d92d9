use crate::error::{AreaError, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaShape {
    Rectangle,
    Ellipse,
    Polygon,
}

impl AreaShape {
    /// Name of the shape in html `<area shape="..">` attributes.
    #[must_use]
    pub fn html_name(self) -> &'static str {
        match self {
            AreaShape::Rectangle => "rect",
            AreaShape::Ellipse => "circle",
            AreaShape::Polygon => "poly",
        }
    }

    /// Name of the shape in QTI `rarea` and `areatype` attributes.
    #[must_use]
    pub fn qti_name(self) -> &'static str {
        match self {
            AreaShape::Rectangle => "Rectangle",
            AreaShape::Ellipse => "Ellipse",
            AreaShape::Polygon => "Bounded",
        }
    }
}

impl fmt::Display for AreaShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.html_name())
    }
}

impl FromStr for AreaShape {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => Ok(AreaShape::Rectangle),
            "circle" | "ellipse" => Ok(AreaShape::Ellipse),
            "poly" | "polygon" => Ok(AreaShape::Polygon),
            _ => Err(ModelError::UnknownShape(s.to_owned())),
        }
    }
}

/// Comma separated coordinate text of an area, kept exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinates(String);

impl Coordinates {
    pub fn new(coords: impl Into<String>) -> Self {
        Self(coords.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn values(&self) -> Result<Vec<f64>, ModelError> {
        self.0
            .split(',')
            .map(str::trim)
            .map(|value| {
                value
                    .parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .ok_or_else(|| ModelError::InvalidCoordinate(value.to_owned()))
            })
            .collect()
    }

    /// Whether every value is numeric and the value count fits `shape`.
    #[must_use]
    pub fn is_valid_for(&self, shape: AreaShape) -> bool {
        let Ok(values) = self.values() else {
            return false;
        };
        match shape {
            AreaShape::Rectangle => values.len() == 4,
            AreaShape::Ellipse => matches!(values.len(), 3 | 4),
            AreaShape::Polygon => values.len() >= 6 && values.len() % 2 == 0,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Coordinates {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Coordinates {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnswerArea {
    pub text: String,
    pub points: f64,
    #[serde(default)]
    order: usize,
    pub shape: AreaShape,
    pub coords: Coordinates,
    /// Whether clicking this area counts as a correct answer.
    #[serde(default = "default_correct")]
    pub correct: bool,
}

fn default_correct() -> bool {
    true
}

impl AnswerArea {
    pub fn new(text: impl Into<String>, points: f64, shape: AreaShape, coords: impl Into<Coordinates>) -> Self {
        Self {
            text: text.into(),
            points,
            order: 0,
            shape,
            coords: coords.into(),
            correct: default_correct(),
        }
    }

    #[must_use]
    pub fn with_correct(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }

    /// Position of the area within its question. Assigned by [`AnswerAreas`].
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }
}

/// The areas of a question, ordered densely from 0.
///
/// Every mutation keeps `area.order() == index` for all contained areas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AnswerArea>", into = "Vec<AnswerArea>")]
pub struct AnswerAreas(Vec<AnswerArea>);

impl AnswerAreas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `area` at `order`, moving every area at or behind it one position back.
    /// Orders past the end append. Returns the order the area received.
    pub fn insert_at(&mut self, order: usize, mut area: AnswerArea) -> usize {
        if order >= self.0.len() {
            return self.push(area);
        }
        area.order = order;
        self.0.insert(order, area);
        self.renumber_from(order + 1);
        order
    }

    pub fn push(&mut self, mut area: AnswerArea) -> usize {
        let order = self.0.len();
        area.order = order;
        self.0.push(area);
        order
    }

    pub fn remove_at(&mut self, index: usize) -> Result<AnswerArea, AreaError> {
        let len = self.0.len();
        if index >= len {
            return Err(AreaError::IndexOutOfRange { index, len });
        }
        let area = self.0.remove(index);
        self.renumber_from(index);
        Ok(area)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnswerArea> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut AnswerArea> {
        self.0.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnswerArea> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Points of the best area, 0 without areas.
    #[must_use]
    pub fn max_points(&self) -> f64 {
        self.0
            .iter()
            .map(|area| area.points)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    fn renumber_from(&mut self, start: usize) {
        for (order, area) in self.0.iter_mut().enumerate().skip(start) {
            area.order = order;
        }
    }
}

impl From<Vec<AnswerArea>> for AnswerAreas {
    /// Sorts by the order the areas carry and renumbers them densely.
    fn from(mut areas: Vec<AnswerArea>) -> Self {
        areas.sort_by_key(|area| area.order);
        let mut areas = Self(areas);
        areas.renumber_from(0);
        areas
    }
}

impl From<AnswerAreas> for Vec<AnswerArea> {
    fn from(areas: AnswerAreas) -> Self {
        areas.0
    }
}

impl FromIterator<AnswerArea> for AnswerAreas {
    /// Collects areas in iteration order.
    fn from_iter<T: IntoIterator<Item = AnswerArea>>(iter: T) -> Self {
        let mut areas = Self::new();
        for area in iter {
            areas.push(area);
        }
        areas
    }
}

impl<'a> IntoIterator for &'a AnswerAreas {
    type Item = &'a AnswerArea;
    type IntoIter = std::slice::Iter<'a, AnswerArea>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
