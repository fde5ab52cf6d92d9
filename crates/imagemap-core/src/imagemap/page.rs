use regex::Regex;
use std::sync::LazyLock;

static QUESTION_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"QRef="il_\d*_qst_\d+""#).expect("question ref regex is invalid"));

/// Page content of a newly created question.
#[must_use]
pub fn default_content(question_id: i32) -> String {
    format!(r#"<PageObject><PageContent><Question QRef="il__qst_{question_id}"/></PageContent></PageObject>"#)
}

/// Points every question reference in `content` to `question_id`.
#[must_use]
pub fn rewrite_question_ref(content: &str, question_id: i32) -> String {
    QUESTION_REF
        .replace_all(content, format!(r#"QRef="il__qst_{question_id}""#).as_str())
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_question_ref() {
        let content = r#"<PageObject><PageContent><Paragraph>Look</Paragraph><Question QRef="il_7_qst_12"/></PageContent></PageObject>"#;
        assert_eq!(
            rewrite_question_ref(content, 40),
            r#"<PageObject><PageContent><Paragraph>Look</Paragraph><Question QRef="il__qst_40"/></PageContent></PageObject>"#
        );
        assert_eq!(rewrite_question_ref(&default_content(3), 4), default_content(4));
    }
}
