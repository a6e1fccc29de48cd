use uuid::Uuid;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::stored_report::StoredReport;

/// Latest analysis per `owner/repo`.
pub trait ReportStore: Send + Sync {

    fn latest(&self, key: &str) -> Option<StoredReport>;

    /// Unconditionally makes `report` the latest for `key`.
    fn record(&self, key: &str, run_id: Uuid, report: AnalysisReport);

    /// Replaces the stored report only if it still belongs to `run_id`.
    /// Returns false when a newer run has taken over the key.
    fn complete(&self, key: &str, run_id: Uuid, report: AnalysisReport) -> bool;
}
