pub mod ai_providers;
pub mod file_commentary;
pub mod github_client;
pub mod hygiene_checker;
pub mod rate_limiter;
pub mod report_store;
pub mod repository_analyzer;
pub mod tree_walker;
pub mod url_resolver;
