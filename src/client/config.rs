//! Client configuration.
//!
//! A [`ClientConfig`] is copied into every [`Session`](crate::Session) at
//! creation time. Changing an [`Instance`](crate::Instance) afterwards does
//! not reach sessions that already exist: configure first, then create
//! connections.
//!
//! The struct deserializes with `serde`, so it can be read from whatever
//! configuration file the application already has; missing fields take their
//! defaults.
//!
//! # Examples
//!
//! ```
//! use masto_http::client::ClientConfig;
//!
//! let config = ClientConfig {
//!     proxy: Some("socks4a://127.0.0.1:9050".into()),
//!     ..Default::default()
//! };
//! assert_eq!(config.scheme, "https");
//! assert_eq!(config.max_redirects, 10);
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connection properties shared by an instance and its sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// OAuth 2.0 bearer token. `None` sends unauthenticated requests.
    pub access_token: Option<String>,
    /// Proxy URI, e.g. `socks4a://127.0.0.1:9050` or `http://[::1]:3128`.
    pub proxy: Option<String>,
    /// PEM bundle replacing the built-in root certificates.
    pub ca_info: Option<PathBuf>,
    /// `User-Agent` header. `None` uses `masto_http/<version>`.
    pub user_agent: Option<String>,
    /// Scheme used to build the instance base URI.
    pub scheme: String,
    /// Redirects followed before giving up.
    pub max_redirects: usize,
    /// How often a running transfer checks for cancellation.
    pub progress_interval_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            access_token: None,
            proxy: None,
            ca_info: None,
            user_agent: None,
            scheme: "https".to_string(),
            max_redirects: 10,
            progress_interval_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.access_token.is_none());
        assert_eq!(config.scheme, "https");
        assert_eq!(config.progress_interval_ms, 100);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"access_token": "abc123", "scheme": "http"}"#).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("abc123"));
        assert_eq!(config.scheme, "http");
        assert_eq!(config.max_redirects, 10);
    }
}
