use serde::{Deserialize, Serialize};

/// A learner's answer to an image map question in one pass of a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Submission {
    pub active_id: i32,
    /// Resolved to the current pass of the test run when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<i32>,
    /// Order of the clicked area, `None` if the learner did not click anything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_area: Option<usize>,
}
