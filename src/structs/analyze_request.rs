use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub repo_url: String,

    #[serde(default)]
    pub token: Option<String>,

    /// Return right after the hygiene pass and finish file reviews in the background.
    #[serde(default)]
    pub deferred: bool,
}

impl AnalyzeRequest {
    pub fn new(repo_url: &str, token: Option<String>) -> Self {
        Self {
            repo_url: repo_url.to_string(),
            token,
            deferred: false,
        }
    }

    /// The credential to forward upstream. Blank tokens count as absent.
    pub fn credential(&self) -> Option<&str> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
