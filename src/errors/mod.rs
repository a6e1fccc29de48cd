use thiserror::Error;
use warp::http::StatusCode;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    // Request errors
    #[error("invalid repository URL '{url}': {reason}")]
    InvalidUrl {
        url: String,
        reason: String,
    },
    #[error("repository URL '{url}' must include owner and repository name")]
    MissingPathSegments {
        url: String,
    },

    // Source host errors
    #[error("repository '{repository}' not found")]
    RepositoryNotFound {
        repository: String,
    },
    #[error("credential rejected while accessing '{repository}'")]
    InvalidCredential {
        repository: String,
    },
    #[error("access denied to '{repository}'")]
    AccessDenied {
        repository: String,
    },
    #[error("upstream request failed{}: {message}", status_suffix(.status))]
    UpstreamFailure {
        status: Option<u16>,
        message: String,
    },

    // Completion errors (recovered per file)
    #[error("could not parse review for '{path}': {reason}")]
    CompletionParseFailure {
        path: String,
        reason: String,
    },

    // Configuration errors
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
    },

    #[error("unhandled failure during {operation}: {reason}")]
    Unhandled {
        operation: String,
        reason: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (HTTP {})", code)).unwrap_or_default()
}

impl AnalyzerError {
    pub fn upstream(status: Option<u16>, message: &str) -> Self {
        Self::UpstreamFailure {
            status,
            message: message.to_string(),
        }
    }

    pub fn config_error(message: &str) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }

    pub fn unhandled(operation: &str, reason: &str) -> Self {
        Self::Unhandled {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status returned to the caller of the analysis endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. } | Self::MissingPathSegments { .. } => StatusCode::BAD_REQUEST,
            Self::RepositoryNotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidCredential { .. } => StatusCode::UNAUTHORIZED,
            Self::AccessDenied { .. } => StatusCode::FORBIDDEN,
            Self::UpstreamFailure { .. }
            | Self::CompletionParseFailure { .. }
            | Self::Configuration { .. }
            | Self::Unhandled { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Static, user-facing message. Internal detail stays in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => {
                "Invalid URL format. Please provide a valid GitHub repository URL (e.g., https://github.com/owner/repo)."
            }
            Self::MissingPathSegments { .. } => {
                "URL must include owner and repository name (e.g., https://github.com/owner/repo)."
            }
            Self::RepositoryNotFound { .. } => {
                "Repository not found. Please check the URL and ensure it points to a valid public repository."
            }
            Self::InvalidCredential { .. } => "Invalid GitHub token provided.",
            Self::AccessDenied { .. } => {
                "This is a private repository. Please provide a valid GitHub token to access it."
            }
            _ => "Failed to analyze repository. Please check the URL and try again.",
        }
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

impl From<reqwest::Error> for AnalyzerError {
    fn from(error: reqwest::Error) -> Self {
        AnalyzerError::UpstreamFailure {
            status: error.status().map(|s| s.as_u16()),
            message: error.to_string(),
        }
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(error: std::io::Error) -> Self {
        AnalyzerError::unhandled("I/O operation", &error.to_string())
    }
}

impl From<toml::de::Error> for AnalyzerError {
    fn from(error: toml::de::Error) -> Self {
        AnalyzerError::Configuration {
            message: error.message().to_string(),
        }
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(error: serde_json::Error) -> Self {
        AnalyzerError::unhandled("JSON serialization", &error.to_string())
    }
}
