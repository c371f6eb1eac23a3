//! Error taxonomy shared by the API client and the UI controller.

use thiserror::Error;

/// Every way a user action can fail.
///
/// The `Display` output is what the UI shows to the user, so the variants
/// carry the message verbatim (server text for `Auth` and `Application`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required field is missing. Raised client-side; no request is sent.
    #[error("{0}")]
    Validation(String),
    /// The server rejected the credentials or the bearer token (HTTP 401).
    #[error("{0}")]
    Auth(String),
    /// The server answered `success: false` with a business message.
    #[error("{0}")]
    Application(String),
    /// The request never produced a usable answer.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl Error {
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// The bare message without the `Connection error:` prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::Validation(m) | Error::Auth(m) | Error::Application(m) | Error::Connection(m) => m,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Connection(e.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_ui_text() {
        assert_eq!(
            Error::Application("Person not found".into()).to_string(),
            "Person not found"
        );
        assert_eq!(
            Error::Connection("connection refused".into()).to_string(),
            "Connection error: connection refused"
        );
        assert_eq!(Error::Connection("timeout".into()).message(), "timeout");
    }

    #[test]
    fn test_is_auth() {
        assert!(Error::Auth("Authentication required".into()).is_auth());
        assert!(!Error::Application("nope".into()).is_auth());
    }
}
