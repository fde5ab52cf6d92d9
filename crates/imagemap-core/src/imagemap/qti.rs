use crate::imagemap::error::ImageMapError;
use crate::imagemap::{ImageMapService, image_location};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use imagemap_config::imagemap::ImageMapConfig;
use imagemap_model::area::AnswerArea;
use imagemap_model::question::ImageMapQuestion;
use imagemap_utils::assets::AssetStore;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::instrument;
use url::Url;

pub const QUESTION_TYPE_IDENTIFIER: &str = "IMAGE MAP QUESTION";
const RESPONSE_IDENT: &str = "IM";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QtiExportOptions {
    /// Start the document with an xml declaration.
    pub include_header: bool,
    /// Ship the image with the item, embedded or by reference.
    pub include_binary: bool,
    /// Reference the image by its web url instead of embedding it.
    pub force_image_reference: bool,
}

impl Default for QtiExportOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            include_binary: true,
            force_image_reference: false,
        }
    }
}

/// Content of the `matimage` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatImage {
    Empty,
    Embedded(String),
    Reference(Url),
}

fn image_type(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, extension)| extension) {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "image/jpeg",
    }
}

struct ItemWriter {
    writer: Writer<Vec<u8>>,
}

impl ItemWriter {
    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), ImageMapError> {
        let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), ImageMapError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<(), ImageMapError> {
        if !text.is_empty() {
            self.writer.write_event(Event::Text(BytesText::new(text)))?;
        }
        Ok(())
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), ImageMapError> {
        let empty = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Empty(empty))?;
        Ok(())
    }

    fn element(&mut self, name: &str, attributes: &[(&str, &str)], text: &str) -> Result<(), ImageMapError> {
        self.start(name, attributes)?;
        self.text(text)?;
        self.end(name)
    }

    fn metadata_field(&mut self, label: &str, entry: &str) -> Result<(), ImageMapError> {
        self.start("qtimetadatafield", &[])?;
        self.element("fieldlabel", &[], label)?;
        self.element("fieldentry", &[], entry)?;
        self.end("qtimetadatafield")
    }

    fn mattext(&mut self, text: &str) -> Result<(), ImageMapError> {
        self.start("material", &[])?;
        self.element("mattext", &[], text)?;
        self.end("material")
    }

    fn matimage(&mut self, filename: &str, image: &MatImage) -> Result<(), ImageMapError> {
        let mut attributes = vec![("imagtype", image_type(filename)), ("label", filename)];
        self.start("material", &[])?;
        match image {
            MatImage::Empty => self.empty("matimage", &attributes)?,
            MatImage::Reference(uri) => {
                attributes.push(("uri", uri.as_str()));
                self.empty("matimage", &attributes)?;
            }
            MatImage::Embedded(base64) => {
                attributes.push(("embedded", "base64"));
                self.element("matimage", &attributes, base64)?;
            }
        }
        self.end("material")
    }

    fn response_label(&mut self, index: &str, area: &AnswerArea) -> Result<(), ImageMapError> {
        self.start("response_label", &[("ident", index), ("rarea", area.shape.qti_name())])?;
        self.text(area.coords.as_str())?;
        self.mattext(&area.text)?;
        self.end("response_label")
    }

    fn respcondition(&mut self, index: &str, area: &AnswerArea) -> Result<(), ImageMapError> {
        self.start("respcondition", &[("continue", "Yes")])?;
        self.start("conditionvar", &[])?;
        if !area.correct {
            self.start("not", &[])?;
        }
        self.element(
            "varinside",
            &[("respident", RESPONSE_IDENT), ("areatype", area.shape.qti_name())],
            area.coords.as_str(),
        )?;
        if !area.correct {
            self.end("not")?;
        }
        self.end("conditionvar")?;
        self.element("setvar", &[("action", "Add")], &area.points.to_string())?;
        let link = format!("response_{index}");
        self.empty(
            "displayfeedback",
            &[("feedbacktype", "Response"), ("linkrefid", link.as_str())],
        )?;
        self.end("respcondition")
    }

    fn itemfeedback(&mut self, index: &str) -> Result<(), ImageMapError> {
        let ident = format!("response_{index}");
        self.start("itemfeedback", &[("ident", ident.as_str()), ("view", "All")])?;
        self.start("flow_mat", &[])?;
        self.start("material", &[])?;
        self.empty("mattext", &[])?;
        self.end("material")?;
        self.end("flow_mat")?;
        self.end("itemfeedback")
    }
}

/// Serializes the question as a QTI `questestinterop` document holding a single `item`.
pub fn write_item(
    question: &ImageMapQuestion,
    question_id: i32,
    config: &ImageMapConfig,
    image: &MatImage,
    include_header: bool,
) -> Result<String, ImageMapError> {
    let mut w = ItemWriter {
        writer: Writer::new(Vec::new()),
    };
    if include_header {
        w.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    }

    let ident = format!("il_{}_qst_{question_id}", config.installation_id);
    w.start("questestinterop", &[])?;
    w.start("item", &[("ident", ident.as_str()), ("title", question.title.as_str())])?;
    w.element("qticomment", &[], &question.comment)?;
    w.element("duration", &[], &question.working_time.to_qti_duration())?;

    w.start("itemmetadata", &[])?;
    w.start("qtimetadata", &[])?;
    w.metadata_field("ILIAS_VERSION", &config.platform_version)?;
    w.metadata_field("QUESTIONTYPE", QUESTION_TYPE_IDENTIFIER)?;
    w.metadata_field("AUTHOR", &question.author)?;
    w.end("qtimetadata")?;
    w.end("itemmetadata")?;

    w.start("presentation", &[("label", question.title.as_str())])?;
    w.start("flow", &[])?;
    w.mattext(&question.question_text)?;
    w.start("response_xy", &[("ident", RESPONSE_IDENT), ("rcardinality", "Single")])?;
    w.start("render_hotspot", &[])?;
    w.matimage(question.image_filename(), image)?;
    for (index, area) in question.areas.iter().enumerate() {
        w.response_label(&index.to_string(), area)?;
    }
    w.end("render_hotspot")?;
    w.end("response_xy")?;
    w.end("flow")?;
    w.end("presentation")?;

    w.start("resprocessing", &[])?;
    w.start("outcomes", &[])?;
    w.element("decvar", &[], "")?;
    w.end("outcomes")?;
    for (index, area) in question.areas.iter().enumerate() {
        w.respcondition(&index.to_string(), area)?;
    }
    w.end("resprocessing")?;

    for index in 0..question.areas.len() {
        w.itemfeedback(&index.to_string())?;
    }

    w.end("item")?;
    w.end("questestinterop")?;
    Ok(String::from_utf8(w.writer.into_inner())?)
}

impl<A: AssetStore + Sync> ImageMapService<A> {
    /// Exports a persisted question. Embedding the image fails if it cannot be read.
    #[instrument(skip_all, fields(question_id = ?question.id))]
    pub async fn export_qti(
        &self,
        question: &ImageMapQuestion,
        options: QtiExportOptions,
    ) -> Result<String, ImageMapError> {
        let location = image_location(question).ok_or(ImageMapError::NotPersisted)?;
        let image = if !options.include_binary {
            MatImage::Empty
        } else if options.force_image_reference {
            MatImage::Reference(self.assets.web_url(&location)?)
        } else {
            let bytes = self.assets.load(&location).await.inspect_err(|error| {
                tracing::error!(error = error as &dyn std::error::Error, ?location, "failed to read image for export");
            })?;
            MatImage::Embedded(STANDARD.encode(bytes))
        };

        write_item(question, location.question_id, &self.config, &image, options.include_header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagemap_model::area::AreaShape;
    use imagemap_model::working_time::WorkingTime;

    fn question() -> ImageMapQuestion {
        let mut question = ImageMapQuestion::new(2);
        question.title = "Harbour".to_owned();
        question.comment = "Find <things>".to_owned();
        question.author = "Tester".to_owned();
        question.question_text = "Where is the lighthouse?".to_owned();
        question.working_time = WorkingTime::new(0, 2, 30).unwrap();
        question.set_image_filename("harbour.png");
        question
            .areas
            .push(AnswerArea::new("Lighthouse", 3.0, AreaShape::Rectangle, "10,10,50,50"));
        question
    }

    fn config() -> ImageMapConfig {
        ImageMapConfig {
            installation_id: 7,
            platform_version: "3.4.0".to_owned(),
            assessment_logging: false,
        }
    }

    #[test]
    fn test_single_rectangle() {
        let xml = write_item(&question(), 12, &config(), &MatImage::Empty, false).unwrap();

        assert!(xml.starts_with(r#"<questestinterop><item ident="il_7_qst_12" title="Harbour">"#));
        assert!(xml.contains("<qticomment>Find &lt;things&gt;</qticomment>"));
        assert!(xml.contains("<duration>P0Y0M0DT0H2M30S</duration>"));
        assert!(xml.contains(
            "<qtimetadatafield><fieldlabel>QUESTIONTYPE</fieldlabel><fieldentry>IMAGE MAP QUESTION</fieldentry></qtimetadatafield>"
        ));
        assert!(xml.contains("<fieldentry>3.4.0</fieldentry>"));
        assert!(xml.contains(r#"<matimage imagtype="image/png" label="harbour.png"/>"#));
        assert!(xml.contains(
            r#"<response_label ident="0" rarea="Rectangle">10,10,50,50<material><mattext>Lighthouse</mattext></material></response_label>"#
        ));
        assert_eq!(xml.matches("<respcondition").count(), 1);
        assert!(xml.contains(concat!(
            r#"<respcondition continue="Yes"><conditionvar>"#,
            r#"<varinside respident="IM" areatype="Rectangle">10,10,50,50</varinside>"#,
            r#"</conditionvar><setvar action="Add">3</setvar>"#,
            r#"<displayfeedback feedbacktype="Response" linkrefid="response_0"/></respcondition>"#
        )));
        assert!(xml.contains(
            r#"<itemfeedback ident="response_0" view="All"><flow_mat><material><mattext/></material></flow_mat></itemfeedback>"#
        ));
        assert!(xml.ends_with("</item></questestinterop>"));
    }

    #[test]
    fn test_header_and_incorrect_area() {
        let mut question = question();
        question.areas.push(
            AnswerArea::new("Sea", -1.5, AreaShape::Polygon, "0,0,4,0,4,4").with_correct(false),
        );
        let xml = write_item(&question, 12, &config(), &MatImage::Empty, true).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(xml.contains(
            r#"<not><varinside respident="IM" areatype="Bounded">0,0,4,0,4,4</varinside></not>"#
        ));
        assert!(xml.contains(r#"<setvar action="Add">-1.5</setvar>"#));
        assert!(xml.contains(r#"linkrefid="response_1""#));
    }

    #[test]
    fn test_image_variants() {
        let embedded = write_item(
            &question(),
            12,
            &config(),
            &MatImage::Embedded("aGVsbG8=".to_owned()),
            false,
        )
        .unwrap();
        assert!(embedded.contains(
            r#"<matimage imagtype="image/png" label="harbour.png" embedded="base64">aGVsbG8=</matimage>"#
        ));

        let uri = Url::parse("https://lms.example.org/data/2/12/images/harbour.png").unwrap();
        let referenced = write_item(&question(), 12, &config(), &MatImage::Reference(uri), false).unwrap();
        assert!(referenced.contains(
            r#"<matimage imagtype="image/png" label="harbour.png" uri="https://lms.example.org/data/2/12/images/harbour.png"/>"#
        ));
    }

    #[test]
    fn test_image_type() {
        assert_eq!(image_type("a.png"), "image/png");
        assert_eq!(image_type("a.gif"), "image/gif");
        assert_eq!(image_type("a.jpg"), "image/jpeg");
        assert_eq!(image_type("png"), "image/jpeg");
    }
}
