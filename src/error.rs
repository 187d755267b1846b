//! Error types for local setup failures.
//!
//! Network and HTTP failures never surface here: they are folded into an
//! [`Answer`](crate::Answer). A [`MastoError`] means the request could not be
//! configured at all (bad URI, unreadable upload, header value the transport
//! refuses, runtime that failed to start). Retrying the same call will not
//! help.

use crate::transport::TransportCode;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MastoError>;

/// A local configuration or setup failure.
#[derive(Debug, Error)]
pub enum MastoError {
    /// The shared transport runtime or a client handle could not be created.
    #[error("failed to initialize transport: {0}")]
    Init(String),

    /// A transfer option (proxy, token, CA bundle, user agent) was rejected.
    #[error("failed to set {option}: {message}")]
    Option {
        /// Name of the option that was being set.
        option: &'static str,
        /// Why the transport refused it.
        message: String,
    },

    /// The target URI could not be parsed.
    #[error("failed to set URI `{uri}`: {message}")]
    Uri {
        /// The URI after placeholder substitution and query encoding.
        uri: String,
        /// Parser message.
        message: String,
    },

    /// The multipart form could not be built.
    #[error("could not build HTTP form: {0}")]
    Form(String),

    /// A `@file:` upload could not be read.
    #[error("could not read upload `{}`: {source}", .path.display())]
    Upload {
        /// Path taken from the parameter value.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl MastoError {
    /// Transport code that best describes this failure.
    pub fn code(&self) -> TransportCode {
        match self {
            MastoError::Init(_) => TransportCode::FAILED_INIT,
            MastoError::Option { .. } => TransportCode::BAD_FUNCTION_ARGUMENT,
            MastoError::Uri { .. } => TransportCode::URL_MALFORMAT,
            MastoError::Form(_) => TransportCode::BAD_FUNCTION_ARGUMENT,
            MastoError::Upload { .. } => TransportCode::READ_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(MastoError::Init("x".into()).code(), TransportCode::FAILED_INIT);
        let err = MastoError::Uri {
            uri: "::".into(),
            message: "relative URL without a base".into(),
        };
        assert_eq!(err.code(), TransportCode::URL_MALFORMAT);
        assert_eq!(err.code().as_u8(), 3);
    }

    #[test]
    fn test_upload_error_message() {
        let err = MastoError::Upload {
            path: PathBuf::from("/nonexistent/cat.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("/nonexistent/cat.png"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
