use serde::{Deserialize, Serialize};
use crate::structs::github::repo_metadata::RepoMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub is_private: bool,
}

impl From<&RepoMetadata> for BasicInfo {
    fn from(metadata: &RepoMetadata) -> Self {
        Self {
            name: metadata.name.clone(),
            description: metadata.description.clone(),
            stars: metadata.stargazers_count,
            forks: metadata.forks_count,
            open_issues: metadata.open_issues_count,
            language: metadata.language.clone(),
            is_private: metadata.private,
        }
    }
}
