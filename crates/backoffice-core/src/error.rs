//! Application error types
//!
//! Network failures have their own type in `backoffice-client` and never
//! leave the background task that hit them; they are reported to the UI as
//! messages. This type covers what can stop the binary itself: terminal
//! setup, configuration, local IO and bad command-line input.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A backend call made outside the interactive loop failed
    #[error("Backend request failed: {message}")]
    Api { message: String },

    /// A name typed by the user or read from a payload matched nothing known
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    Parse {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn parse<'a>(
        kind: &'static str,
        value: impl Into<String>,
        expected: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::Parse {
            kind,
            value: value.into(),
            expected: expected.into_iter().collect::<Vec<_>>().join(", "),
        }
    }
}

/// Log an error with a description of what was being attempted, keeping the
/// error itself unchanged for the caller
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {}", f(), err);
            err
        })
    }
}
