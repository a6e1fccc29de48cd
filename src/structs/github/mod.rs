pub mod content_entry;
pub mod content_listing;
pub mod file_content;
pub mod repo_metadata;
