use crate::config::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_EXCLUDED_DIRS, DEFAULT_GITHUB_API_URL, DEFAULT_MAX_FILES,
    DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_REVIEW_MAX_TOKENS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, DEFAULT_SOURCE_EXTENSIONS, DEFAULT_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_github_api_url() -> String {
        DEFAULT_GITHUB_API_URL.to_string()
    }

    pub fn default_user_agent() -> String {
        format!("repolyzer/{}", env!("CARGO_PKG_VERSION"))
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_source_extensions() -> Vec<String> {
        DEFAULT_SOURCE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
    }

    pub fn default_excluded_dirs() -> Vec<String> {
        DEFAULT_EXCLUDED_DIRS.iter().map(|dir| dir.to_string()).collect()
    }

    pub fn default_max_files() -> usize {
        DEFAULT_MAX_FILES
    }

    pub fn default_ai_enabled() -> bool {
        true
    }

    pub fn default_provider() -> String {
        "openai".to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_REVIEW_MAX_TOKENS
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_openai_base_url() -> String {
        DEFAULT_OPENAI_BASE_URL.to_string()
    }

    pub fn default_rate_limit_per_minute() -> u32 {
        50
    }

    pub fn default_burst_per_second() -> u32 {
        5
    }
}
