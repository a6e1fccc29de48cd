use serde::{Deserialize, Serialize};
use crate::enums::analysis_status::AnalysisStatus;
use crate::structs::basic_info::BasicInfo;
use crate::structs::file_analysis::FileAnalysis;
use crate::structs::hygiene_findings::HygieneFindings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub basic_info: BasicInfo,
    pub file_analyses: Vec<FileAnalysis>,
    pub suggestions: Vec<String>,
    pub vulnerabilities: Vec<String>,
    pub status: AnalysisStatus,
}

impl AnalysisReport {
    pub fn new(basic_info: BasicInfo, findings: HygieneFindings) -> Self {
        Self {
            basic_info,
            file_analyses: Vec::new(),
            suggestions: findings.suggestions,
            vulnerabilities: findings.vulnerabilities,
            status: AnalysisStatus::Completed,
        }
    }

    pub fn pending(mut self) -> Self {
        self.status = AnalysisStatus::Pending;
        self
    }

    pub fn completed_with(mut self, file_analyses: Vec<FileAnalysis>) -> Self {
        self.file_analyses = file_analyses;
        self.status = AnalysisStatus::Completed;
        self
    }

    pub fn failed(mut self) -> Self {
        self.status = AnalysisStatus::Failed;
        self
    }
}
