use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_ai_enabled")]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_openai_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_rate_limit_per_minute")]
    pub rate_limit_per_minute: u32,

    #[serde(default = "ConfigHelper::default_burst_per_second")]
    pub burst_per_second: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: ConfigHelper::default_ai_enabled(),
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            max_tokens: ConfigHelper::default_max_tokens(),
            temperature: None,
            api_key_env: ConfigHelper::default_api_key_env(),
            base_url: ConfigHelper::default_openai_base_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
            rate_limit_per_minute: ConfigHelper::default_rate_limit_per_minute(),
            burst_per_second: ConfigHelper::default_burst_per_second(),
        }
    }
}

impl AiConfig {
    /// Reads the completion API key from the configured environment variable.
    /// `None` disables the per-file review stage.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
