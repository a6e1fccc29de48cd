pub mod ai_provider_error;
pub mod analysis_status;
pub mod commands;
pub mod content_kind;
