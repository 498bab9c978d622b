//! Error taxonomy for everything that talks to the backend.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// Caught on the client before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered, but with a failure status or an error body.
    #[error("server error {status}: {}", .message.as_deref().unwrap_or("<no detail>"))]
    Server { status: u16, message: Option<String> },

    /// The request never reached the server or never came back.
    #[error("{0}")]
    Network(String),

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Text shown to the user.  Server-supplied messages are passed through
    /// verbatim; otherwise the caller's generic `fallback` is used.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            GatewayError::Validation(msg) => msg.clone(),
            GatewayError::Server { message: Some(msg), .. } => msg.clone(),
            GatewayError::Server { message: None, .. } => fallback.to_string(),
            GatewayError::Network(detail) => format!("Network error: {}", detail),
            GatewayError::Decode(_) => fallback.to_string(),
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, GatewayError::Network(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("No database selected")]
    NoActiveDatabase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_passed_through() {
        let err = GatewayError::Server { status: 401, message: Some("bad credentials".into()) };
        assert_eq!(err.user_message("Login failed"), "bad credentials");
    }

    #[test]
    fn missing_server_message_uses_fallback() {
        let err = GatewayError::Server { status: 500, message: None };
        assert_eq!(err.user_message("Login failed"), "Login failed");
        assert_eq!(
            GatewayError::Decode("eof".into()).user_message("Login failed"),
            "Login failed"
        );
    }

    #[test]
    fn network_errors_are_prefixed() {
        let err = GatewayError::Network("Failed to fetch".into());
        assert!(err.is_network());
        assert_eq!(err.user_message("x"), "Network error: Failed to fetch");
    }
}
