pub mod ai;
pub mod analysis_report;
pub mod analyze_request;
pub mod basic_info;
pub mod cli;
pub mod config;
pub mod file_analysis;
pub mod file_record;
pub mod github;
pub mod hygiene_findings;
pub mod repo_ref;
pub mod review_points;
pub mod stored_report;
