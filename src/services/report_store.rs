use std::sync::Arc;
use dashmap::DashMap;
use uuid::Uuid;
use crate::structs::analysis_report::AnalysisReport;
use crate::structs::stored_report::StoredReport;
use crate::traits::report_store::ReportStore;

#[derive(Default, Clone)]
pub struct InMemoryReportStore {
    reports: Arc<DashMap<String, StoredReport>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportStore for InMemoryReportStore {
    fn latest(&self, key: &str) -> Option<StoredReport> {
        self.reports.get(key).map(|entry| entry.value().clone())
    }

    fn record(&self, key: &str, run_id: Uuid, report: AnalysisReport) {
        self.reports.insert(key.to_string(), StoredReport { run_id, report });
    }

    fn complete(&self, key: &str, run_id: Uuid, report: AnalysisReport) -> bool {
        // get_mut holds the shard lock, so the id check and the write are atomic
        match self.reports.get_mut(key) {
            Some(mut entry) if entry.run_id == run_id => {
                entry.report = report;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::analysis_status::AnalysisStatus;
    use crate::structs::basic_info::BasicInfo;
    use crate::structs::hygiene_findings::HygieneFindings;

    fn report() -> AnalysisReport {
        let info = BasicInfo {
            name: "hello".to_string(),
            description: None,
            stars: 1,
            forks: 2,
            open_issues: 3,
            language: Some("Rust".to_string()),
            is_private: false,
        };
        AnalysisReport::new(info, HygieneFindings::default())
    }

    #[test]
    fn unknown_key_has_no_report() {
        let store = InMemoryReportStore::new();
        store.record("octo/world", Uuid::new_v4(), report());
        assert!(store.latest("octo/hello").is_none());
    }

    #[test]
    fn completion_applies_only_to_owning_run() {
        let store = InMemoryReportStore::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        store.record("octo/hello", first, report().pending());
        store.record("octo/hello", second, report().pending());

        assert!(!store.complete("octo/hello", first, report()));
        assert_eq!(store.latest("octo/hello").unwrap().report.status, AnalysisStatus::Pending);

        assert!(store.complete("octo/hello", second, report()));
        let stored = store.latest("octo/hello").unwrap();
        assert_eq!(stored.run_id, second);
        assert_eq!(stored.report.status, AnalysisStatus::Completed);
    }

    #[test]
    fn completion_without_record_is_ignored() {
        let store = InMemoryReportStore::new();
        assert!(!store.complete("octo/hello", Uuid::new_v4(), report()));
        assert!(store.latest("octo/hello").is_none());
    }
}
