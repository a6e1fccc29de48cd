use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::constants::{timeout_duration_secs, GITHUB_ACCEPT_HEADER};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::github_config::GithubConfig;
use crate::structs::github::content_entry::ContentEntry;
use crate::structs::github::content_listing::ContentListing;
use crate::structs::github::file_content::FileContent;
use crate::structs::github::repo_metadata::RepoMetadata;
use crate::structs::repo_ref::RepoRef;
use crate::traits::source_host::SourceHost;

/// GitHub REST v3 client for the repository and contents endpoints.
#[derive(Clone)]
pub struct GithubClient {
    base_url: Url,
    client: Client,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> AnalyzerResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(timeout_duration_secs(config.timeout_secs))
            .build()?;

        let base_url = Url::parse(config.api_base_url.trim_end_matches('/'))
            .map_err(|e| AnalyzerError::config_error(&format!("invalid api_base_url '{}': {}", config.api_base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AnalyzerError::config_error(&format!("api_base_url '{}' is not a base URL", config.api_base_url)));
        }

        Ok(Self { base_url, client })
    }

    /// Appends `segments` to the API base, percent-encoding each one.
    fn api_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> AnalyzerResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AnalyzerError::config_error(&format!("api_base_url '{}' is not a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn repository_url(&self, repo: &RepoRef) -> AnalyzerResult<Url> {
        self.api_url(["repos", repo.owner.as_str(), repo.repo.as_str()])
    }

    fn contents_url(&self, repo: &RepoRef, path: &str) -> AnalyzerResult<Url> {
        let path_segments = path.split('/').filter(|segment| !segment.is_empty());
        self.api_url(
            ["repos", repo.owner.as_str(), repo.repo.as_str(), "contents"]
                .into_iter()
                .chain(path_segments),
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, repo: &RepoRef, token: Option<&str>) -> AnalyzerResult<T> {
        log::debug!("GET {}", url);

        let mut request = self.client
            .get(url.clone())
            .header("Accept", GITHUB_ACCEPT_HEADER);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let response = Self::check_status(response, repo).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| AnalyzerError::upstream(None, &format!("unexpected response from {}: {}", url, e)))
    }

    async fn check_status(response: Response, repo: &RepoRef) -> AnalyzerResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(map_status(status.as_u16(), &body, repo))
    }
}

/// Maps a non-success GitHub status onto the analyzer's error taxonomy.
pub fn map_status(status: u16, body: &str, repo: &RepoRef) -> AnalyzerError {
    let repository = repo.key();
    match status {
        404 => AnalyzerError::RepositoryNotFound { repository },
        401 => AnalyzerError::InvalidCredential { repository },
        403 => AnalyzerError::AccessDenied { repository },
        _ => AnalyzerError::upstream(Some(status), &github_message(body)),
    }
}

fn github_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.to_string())
}

/// Decodes the `content` field of a contents response.
/// GitHub wraps base64 at 60 columns, so embedded newlines are removed first.
pub fn decode_content(file: &FileContent) -> AnalyzerResult<Option<String>> {
    let Some(content) = file.content.as_deref().filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    match file.encoding.as_deref() {
        Some("base64") | None => {}
        Some(other) => {
            return Err(AnalyzerError::upstream(None, &format!("unsupported content encoding: {}", other)));
        }
    }

    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AnalyzerError::upstream(None, &format!("invalid base64 content: {}", e)))?;

    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

#[async_trait]
impl SourceHost for GithubClient {
    async fn repository(&self, repo: &RepoRef, token: Option<&str>) -> AnalyzerResult<RepoMetadata> {
        let url = self.repository_url(repo)?;
        self.get_json::<RepoMetadata>(url, repo, token).await
    }

    async fn list_directory(&self, repo: &RepoRef, path: &str, token: Option<&str>) -> AnalyzerResult<Vec<ContentEntry>> {
        let url = self.contents_url(repo, path)?;
        let listing = self.get_json::<ContentListing>(url, repo, token).await?;
        Ok(listing.into_entries())
    }

    async fn file_content(&self, repo: &RepoRef, path: &str, token: Option<&str>) -> AnalyzerResult<Option<String>> {
        let url = self.contents_url(repo, path)?;
        let file = self.get_json::<FileContent>(url, repo, token).await?;
        decode_content(&file)
    }
}
