use thiserror::Error;

use crate::models::ErrorBody;

/// Normalized failure record surfaced to the user after any fetch failure.
///
/// `status` is `None` when the request never produced a response (DNS or
/// connection failure, or a failure before the status line was available);
/// it renders as "Unknown".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ErrorInfo {
    pub status: Option<u16>,
    pub message: String,
    pub documentation_url: Option<String>,
}

const GENERIC_MESSAGE: &str =
    "An unexpected error occurred while fetching data from GitHub API.";

impl ErrorInfo {
    /// Failure arm for a non-2xx response. The parsed body wins; a missing
    /// `message` falls back to the status line.
    pub fn from_response(status: reqwest::StatusCode, body: ErrorBody) -> Self {
        let message = body.message.unwrap_or_else(|| {
            format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        });

        Self {
            status: Some(status.as_u16()),
            message,
            documentation_url: body.documentation_url,
        }
    }

    /// Failure arm for a request that never completed.
    pub fn from_transport(err: reqwest::Error) -> Self {
        Self {
            status: None,
            message: err.to_string(),
            documentation_url: None,
        }
    }

    /// Fallback used when not even the transport layer gave us words.
    pub fn generic() -> Self {
        Self {
            status: None,
            message: GENERIC_MESSAGE.to_string(),
            documentation_url: None,
        }
    }

    /// Status code as shown to the user.
    pub fn status_display(&self) -> String {
        match self.status {
            Some(code) => code.to_string(),
            None => "Unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_error_prefers_api_message() {
        let body = ErrorBody {
            message: Some("API rate limit exceeded".to_string()),
            documentation_url: Some("https://docs.github.com/rest".to_string()),
        };

        let info = ErrorInfo::from_response(reqwest::StatusCode::FORBIDDEN, body);

        assert_eq!(info.status, Some(403));
        assert_eq!(info.message, "API rate limit exceeded");
        assert_eq!(
            info.documentation_url.as_deref(),
            Some("https://docs.github.com/rest")
        );
    }

    #[test]
    fn response_error_falls_back_to_status_line() {
        let info =
            ErrorInfo::from_response(reqwest::StatusCode::SERVICE_UNAVAILABLE, ErrorBody::default());

        assert_eq!(info.status, Some(503));
        assert_eq!(info.message, "HTTP 503: Service Unavailable");
        assert_eq!(info.documentation_url, None);
    }

    #[test]
    fn unknown_status_renders_as_unknown() {
        assert_eq!(ErrorInfo::generic().status_display(), "Unknown");

        let info = ErrorInfo::from_response(reqwest::StatusCode::NOT_FOUND, ErrorBody::default());
        assert_eq!(info.status_display(), "404");
    }
}
