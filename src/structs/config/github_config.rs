use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GithubConfig {
    #[serde(default = "ConfigHelper::default_github_api_url")]
    pub api_base_url: String,

    #[serde(default = "ConfigHelper::default_user_agent")]
    pub user_agent: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extensions (without the dot) of files sent for review.
    #[serde(default = "ConfigHelper::default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Directories whose path contains any of these names are not walked.
    #[serde(default = "ConfigHelper::default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,

    #[serde(default = "ConfigHelper::default_max_files")]
    pub max_files: usize,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base_url: ConfigHelper::default_github_api_url(),
            user_agent: ConfigHelper::default_user_agent(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            source_extensions: ConfigHelper::default_source_extensions(),
            excluded_dirs: ConfigHelper::default_excluded_dirs(),
            max_files: ConfigHelper::default_max_files(),
        }
    }
}
