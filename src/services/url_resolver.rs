use reqwest::Url;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::repo_ref::RepoRef;

/// Extracts `owner/repo` from a repository URL.
///
/// Only the first two non-empty path segments are used, so links such as
/// `https://github.com/owner/repo/tree/main/src` resolve to the repository
/// itself. A trailing `.git` on the repository segment is dropped.
pub fn resolve_repository(repo_url: &str) -> AnalyzerResult<RepoRef> {
    let url = Url::parse(repo_url.trim()).map_err(|e| AnalyzerError::InvalidUrl {
        url: repo_url.to_string(),
        reason: e.to_string(),
    })?;

    let mut segments = url.path().split('/').filter(|segment| !segment.is_empty());

    let owner = segments.next();
    let repo = segments
        .next()
        .map(|repo| repo.strip_suffix(".git").unwrap_or(repo))
        .filter(|repo| !repo.is_empty());

    match (owner, repo) {
        (Some(owner), Some(repo)) => Ok(RepoRef::new(owner, repo)),
        _ => Err(AnalyzerError::MissingPathSegments {
            url: repo_url.to_string(),
        }),
    }
}
