use thiserror::Error;

/// Failure of a backend call.
///
/// Transport problems and non-2xx answers are equally "rejected"; callers
/// are not expected to branch on the variant, only to display it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("Server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn from_transport(err: gloo_net::Error, timed_out: bool, timeout_ms: u32) -> Self {
        if timed_out {
            return Self::Timeout(timeout_ms);
        }
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }

    /// A failed body read is a decode problem unless the timer aborted it.
    pub(crate) fn from_body_read(err: gloo_net::Error, timed_out: bool, timeout_ms: u32) -> Self {
        match Self::from_transport(err, timed_out, timeout_ms) {
            Self::Network(msg) => Self::Decode(msg),
            other => other,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// FastAPI wraps errors as `{"detail": "..."}`; show just the detail when present.
pub(crate) fn extract_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        })
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_wins_over_transport_error() {
        let err = ApiError::from_transport(
            gloo_net::Error::GlooError("The user aborted a request".into()),
            true,
            10_000,
        );
        assert_eq!(err, ApiError::Timeout(10_000));
        assert_eq!(err.to_string(), "Request timed out after 10000 ms");
    }

    #[test]
    fn test_body_read_aborted_by_timer_is_timeout() {
        let err = ApiError::from_body_read(
            gloo_net::Error::GlooError("The user aborted a request".into()),
            true,
            10_000,
        );
        assert_eq!(err, ApiError::Timeout(10_000));

        let err = ApiError::from_body_read(
            gloo_net::Error::GlooError("body stream interrupted".into()),
            false,
            10_000,
        );
        assert_eq!(err, ApiError::Decode("body stream interrupted".into()));
    }

    #[test]
    fn test_transport_error_is_network() {
        let err = ApiError::from_transport(
            gloo_net::Error::GlooError("connection refused".into()),
            false,
            10_000,
        );
        assert_eq!(err, ApiError::Network("connection refused".into()));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(extract_detail(r#"{"detail":"Rule not found"}"#), "Rule not found");
        assert_eq!(
            extract_detail(r#"{"detail":[{"loc":["body"]}]}"#),
            r#"[{"loc":["body"]}]"#
        );
        assert_eq!(extract_detail(" Internal Server Error\n"), "Internal Server Error");
    }
}
