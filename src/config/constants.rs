use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const CONFIG_DIR_NAME: &str = "repolyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_REVIEW_MAX_TOKENS: u32 = 500;

pub const DEFAULT_MAX_FILES: usize = 200;
pub const FILE_FETCH_CONCURRENCY: usize = 8;

pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &[
    "js", "ts", "py", "java", "cpp", "c", "cs", "rb", "php",
];

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "target"];

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub const MAX_REQUEST_BODY_BYTES: u64 = 64 * 1024;
