use serde::{Deserialize, Serialize};
use crate::structs::review_points::ReviewPoints;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAnalysis {
    pub path: String,
    pub good: Vec<String>,
    pub bad: Vec<String>,
    pub improvements: Vec<String>,
    pub deep_analysis_pending: bool,
}

impl FileAnalysis {
    pub fn from_review(path: &str, review: ReviewPoints) -> Self {
        Self {
            path: path.to_string(),
            good: review.good,
            bad: review.bad,
            improvements: review.improvements,
            deep_analysis_pending: false,
        }
    }

    /// Entry used when the completion call or its parsing failed.
    pub fn empty(path: &str) -> Self {
        Self::from_review(path, ReviewPoints::default())
    }
}
