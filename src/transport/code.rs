//! Transport-level outcome codes.
//!
//! Codes keep libcurl's numbering so that callers comparing against the
//! familiar values (`42` for a cancelled stream, `6` for an unresolvable
//! host) keep working regardless of which HTTP engine performs the transfer.

use std::error::Error as _;
use std::fmt;

/// A transport-level result code. Zero means the transfer itself succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TransportCode(u8);

impl TransportCode {
    /// No transport error.
    pub const OK: TransportCode = TransportCode(0);
    /// The URI scheme is not supported.
    pub const UNSUPPORTED_PROTOCOL: TransportCode = TransportCode(1);
    /// The transport could not be initialized.
    pub const FAILED_INIT: TransportCode = TransportCode(2);
    /// The URI is malformed.
    pub const URL_MALFORMAT: TransportCode = TransportCode(3);
    /// The proxy host could not be resolved.
    pub const COULDNT_RESOLVE_PROXY: TransportCode = TransportCode(5);
    /// The remote host could not be resolved.
    pub const COULDNT_RESOLVE_HOST: TransportCode = TransportCode(6);
    /// Connecting to the remote host or proxy failed.
    pub const COULDNT_CONNECT: TransportCode = TransportCode(7);
    /// A local file could not be read.
    pub const READ_ERROR: TransportCode = TransportCode(26);
    /// The transfer timed out.
    pub const OPERATION_TIMEDOUT: TransportCode = TransportCode(28);
    /// The TLS handshake failed.
    pub const SSL_CONNECT_ERROR: TransportCode = TransportCode(35);
    /// The transfer was stopped through the cancellation flag.
    pub const ABORTED_BY_CALLBACK: TransportCode = TransportCode(42);
    /// An option was given a value the transport refuses.
    pub const BAD_FUNCTION_ARGUMENT: TransportCode = TransportCode(43);
    /// The redirect limit was hit.
    pub const TOO_MANY_REDIRECTS: TransportCode = TransportCode(47);
    /// Sending the request failed.
    pub const SEND_ERROR: TransportCode = TransportCode(55);
    /// Receiving the response failed.
    pub const RECV_ERROR: TransportCode = TransportCode(56);

    /// Wrap a raw code.
    pub const fn new(code: u8) -> Self {
        TransportCode(code)
    }

    /// Raw numeric value.
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// `true` for [`TransportCode::OK`].
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            0 => "no error",
            1 => "unsupported protocol",
            2 => "failed initialization",
            3 => "URL using bad/illegal format",
            5 => "couldn't resolve proxy name",
            6 => "couldn't resolve host name",
            7 => "couldn't connect to server",
            26 => "failed reading local data",
            28 => "timeout was reached",
            35 => "SSL connect error",
            42 => "operation was aborted by an application callback",
            43 => "a libcurl function was given a bad argument",
            47 => "number of redirects hit maximum amount",
            55 => "failed sending data to the peer",
            56 => "failure when receiving data from the peer",
            _ => return None,
        })
    }

    /// Classify a `reqwest` failure and render its full cause chain.
    pub(crate) fn classify(error: &reqwest::Error) -> (TransportCode, String) {
        let mut message = error.to_string();
        let mut chain = String::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push_str(&cause.to_string().to_lowercase());
            chain.push(' ');
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        let code = if error.is_timeout() {
            TransportCode::OPERATION_TIMEDOUT
        } else if error.is_redirect() {
            TransportCode::TOO_MANY_REDIRECTS
        } else if error.is_builder() {
            TransportCode::URL_MALFORMAT
        } else if chain.contains("dns error") || chain.contains("failed to lookup address") {
            TransportCode::COULDNT_RESOLVE_HOST
        } else if chain.contains("certificate") || chain.contains("tls") || chain.contains("ssl") {
            TransportCode::SSL_CONNECT_ERROR
        } else if error.is_connect() {
            TransportCode::COULDNT_CONNECT
        } else if error.is_body() || error.is_decode() {
            TransportCode::RECV_ERROR
        } else if error.is_request() {
            TransportCode::SEND_ERROR
        } else {
            TransportCode::RECV_ERROR
        };

        (code, message)
    }
}

impl From<TransportCode> for u8 {
    fn from(code: TransportCode) -> u8 {
        code.0
    }
}

impl fmt::Display for TransportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", self.0, name),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_matches_curl() {
        assert_eq!(TransportCode::ABORTED_BY_CALLBACK.as_u8(), 42);
        assert_eq!(TransportCode::COULDNT_RESOLVE_HOST.as_u8(), 6);
        assert!(TransportCode::OK.is_ok());
        assert!(!TransportCode::COULDNT_CONNECT.is_ok());
        assert_eq!(TransportCode::default(), TransportCode::OK);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TransportCode::ABORTED_BY_CALLBACK.to_string(),
            "42 (operation was aborted by an application callback)"
        );
        assert_eq!(TransportCode::new(99).to_string(), "99");
    }
}
