use async_trait::async_trait;
use crate::errors::AnalyzerResult;
use crate::structs::github::content_entry::ContentEntry;
use crate::structs::github::repo_metadata::RepoMetadata;
use crate::structs::repo_ref::RepoRef;

/// Read-only view of a repository hosting API.
///
/// `token` is forwarded verbatim to the host's authentication; `None` means
/// anonymous access to public data only.
#[async_trait]
pub trait SourceHost: Send + Sync {

    async fn repository(&self, repo: &RepoRef, token: Option<&str>) -> AnalyzerResult<RepoMetadata>;

    /// Entries directly under `path`; the empty path is the repository root.
    async fn list_directory(&self, repo: &RepoRef, path: &str, token: Option<&str>) -> AnalyzerResult<Vec<ContentEntry>>;

    /// Decoded text of the file at `path`, `None` when the host returned no content.
    async fn file_content(&self, repo: &RepoRef, path: &str, token: Option<&str>) -> AnalyzerResult<Option<String>>;
}
