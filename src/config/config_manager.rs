use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Repolyzer configuration

[server]
host = "127.0.0.1"
port = 8080

[github]
api_base_url = "https://api.github.com"
timeout_secs = 60
# Files with these extensions are sent for review
source_extensions = ["js", "ts", "py", "java", "cpp", "c", "cs", "rb", "php"]
# Directories whose path contains one of these names are skipped
excluded_dirs = ["node_modules", "target"]
# Upper bound on files reviewed per repository
max_files = 200

[ai]
# Per-file review is skipped when disabled or when the key variable is unset
enabled = true
provider = "openai"
model = "gpt-4o-mini"
max_tokens = 500
api_key_env = "OPENAI_API_KEY"
base_url = "https://api.openai.com/v1"
timeout_secs = 60

# Shared across all requests served by this process
rate_limit_per_minute = 50
burst_per_second = 5
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads the configuration from `path`, or from the default location.
    /// A missing file yields the defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> AnalyzerResult<Config> {
        let explicit = path.is_some();
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !config_path.exists() {
            if explicit {
                return Err(AnalyzerError::config_error(&format!(
                    "config file not found: {}",
                    config_path.display()
                )));
            }
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config() -> AnalyzerResult<PathBuf> {
        let config_file_path = Self::default_path();
        Self::write_sample_config(&config_file_path)?;
        Ok(config_file_path)
    }

    pub fn write_sample_config(path: &Path) -> AnalyzerResult<()> {
        if path.exists() {
            return Err(AnalyzerError::config_error(&format!(
                "refusing to overwrite existing config at {}",
                path.display()
            )));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push("server.port must be greater than 0".to_string());
        }

        if config.github.source_extensions.is_empty() {
            errors.push("github.source_extensions must list at least one extension".to_string());
        }

        if config.github.max_files == 0 {
            errors.push("github.max_files must be greater than 0".to_string());
        }

        if config.ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than 0".to_string());
        }

        if config.ai.provider != "openai" {
            errors.push(format!("ai.provider '{}' is not supported (expected 'openai')", config.ai.provider));
        }

        if config.ai.rate_limit_per_minute == 0 || config.ai.burst_per_second == 0 {
            errors.push("ai rate limits must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
