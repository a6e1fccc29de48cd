use serde::{Deserialize, Serialize};

/// Lifecycle of an `AnalysisReport`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// Metadata and hygiene are ready, per-file reviews are still running.
    Pending,
    Completed,
    Failed,
}
