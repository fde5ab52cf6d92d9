use imagemap_model::area::{AnswerArea, AreaShape, Coordinates};
use imagemap_model::question::ImageMapQuestion;
use quick_xml::escape::escape;
use regex::Regex;
use std::sync::LazyLock;

static AREA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<area(.+?)>").expect("area regex is invalid"));
static ALT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)alt\s*=\s*"([^"]*)""#).expect("alt regex is invalid"));
static COORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)coords\s*=\s*"([^"]*)""#).expect("coords regex is invalid"));
static SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)shape\s*=\s*"([^"]*)""#).expect("shape regex is invalid"));

fn attribute<'a>(regex: &Regex, tag: &'a str) -> Option<&'a str> {
    regex
        .captures(tag)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str())
}

/// Appends one area with 0 points for every usable `<area>` of an html image map.
/// Returns the number of imported areas.
pub fn import_image_map(question: &mut ImageMapQuestion, contents: &str) -> usize {
    let mut imported = 0;
    for (index, captures) in AREA.captures_iter(contents).enumerate() {
        let Some(tag) = captures.get(1).map(|tag| tag.as_str()) else {
            continue;
        };
        let (Some(alt), Some(coords), Some(shape)) =
            (attribute(&ALT, tag), attribute(&COORDS, tag), attribute(&SHAPE, tag))
        else {
            tracing::warn!(index, "skipping area with missing attributes");
            continue;
        };
        let shape = match shape.parse::<AreaShape>() {
            Ok(shape) => shape,
            Err(error) => {
                tracing::warn!(index, error = &error as &dyn std::error::Error, "skipping area");
                continue;
            }
        };
        let coords = Coordinates::new(coords.trim());
        if !coords.is_valid_for(shape) {
            tracing::warn!(index, %coords, %shape, "skipping area with malformed coordinates");
            continue;
        }

        question.areas.push(AnswerArea::new(alt, 0.0, shape, coords));
        imported += 1;
    }
    tracing::debug!(imported, "imported image map");
    imported
}

/// Renders the areas as an html image map linking to `{href}&selimage={order}`.
#[must_use]
pub fn image_map_html(question: &ImageMapQuestion, href: &str) -> String {
    let mut html = format!("<map name=\"{}\"> ", escape(question.title.as_str()));
    for area in &question.areas {
        let link = format!("{href}&selimage={}", area.order());
        html.push_str(&format!(
            "<area alt=\"{}\" shape=\"{}\" coords=\"{}\" href=\"{}\" /> ",
            escape(area.text.as_str()),
            area.shape.html_name(),
            escape(area.coords.as_str()),
            escape(link.as_str()),
        ));
    }
    html.push_str("</map>");
    html
}
