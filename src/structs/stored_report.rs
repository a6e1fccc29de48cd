use uuid::Uuid;
use crate::structs::analysis_report::AnalysisReport;

/// A report plus the id of the analysis run that produced it.
#[derive(Debug, Clone)]
pub struct StoredReport {
    pub run_id: Uuid,
    pub report: AnalysisReport,
}
