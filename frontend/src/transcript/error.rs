use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `detail` is what the backend reported, or the
    /// operation's fallback message when it reported nothing usable.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    Client,
}

impl ErrorKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorKind::Network => "Connection problem",
            ErrorKind::Server => "Backend error",
            ErrorKind::Client => "Unexpected response",
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Request(_) | ApiError::Decode(_) => ErrorKind::Client,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_display_the_detail_verbatim() {
        let err = ApiError::Server {
            status: 404,
            detail: "Transcripts are disabled for this video".to_string(),
        };
        assert_eq!(err.to_string(), "Transcripts are disabled for this video");
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn network_and_server_failures_are_distinct_kinds() {
        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.kind(), ErrorKind::Network);
        assert_eq!(network.to_string(), "Network error: connection refused");
        assert_ne!(network.kind().display_name(), ErrorKind::Server.display_name());

        assert_eq!(
            ApiError::Decode("missing field `summary`".to_string()).kind(),
            ErrorKind::Client
        );
    }
}
