pub mod ai_provider;
pub mod report_store;
pub mod source_host;
