//! Error types for the admin API client.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when talking to the admin backend.
#[derive(Debug, Error)]
pub enum Error {
    /// Connection error (network failure, DNS resolution, timeout, etc.).
    #[error("connection error: {0}")]
    Connection(String),

    /// Non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the status reason.
        message: String,
    },

    /// Application-level failure reported inside a 2xx envelope
    /// (`success: false` or an `error` field).
    #[error("API error: {message}")]
    Api {
        /// Error message.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("failed to deserialize response: {0}")]
    Deserialization(String),

    /// Client configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A file attached to a form could not be read.
    #[error("cannot read attachment {}: {message}", path.display())]
    Attachment {
        /// Path the user selected.
        path: PathBuf,
        /// Underlying IO error.
        message: String,
    },

    /// The backend exposes no endpoint for this operation.
    #[error("{operation} is not supported for {resource}")]
    Unsupported {
        /// Resource label.
        resource: String,
        /// Operation name.
        operation: &'static str,
    },
}

impl Error {
    /// Returns `true` if this is a connection error.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    pub(crate) fn unsupported(resource: backoffice_core::Resource, operation: &'static str) -> Self {
        Self::Unsupported {
            resource: resource.label().to_string(),
            operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_is_detected() {
        let err = Error::Connection("timeout".to_string());
        assert!(err.is_connection_error());
        assert!(!Error::Http {
            status: 502,
            message: "Bad Gateway".to_string(),
        }
        .is_connection_error());
    }

    #[test]
    fn http_error_shows_status_and_message() {
        let err = Error::Http {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn attachment_error_names_path() {
        let err = Error::Attachment {
            path: PathBuf::from("/tmp/missing.png"),
            message: "not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot read attachment /tmp/missing.png: not found"
        );
    }

    #[test]
    fn unsupported_names_resource() {
        let err = Error::unsupported(backoffice_core::Resource::Services, "update");
        assert_eq!(err.to_string(), "update is not supported for Certifications");
    }
}
