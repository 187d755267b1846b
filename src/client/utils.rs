//! String helpers for building requests and reading statuses.
//!
//! - [`escape_url`] / [`unescape_url`] - percent-encoding for values put
//!   into `GET` parameters, which are sent as given
//! - [`unescape_html`] - decode character references in status content
//!
//! # Examples
//!
//! ```
//! use masto_http::client::{escape_url, unescape_html, unescape_url};
//!
//! assert_eq!(escape_url("#rust & c++"), "%23rust%20%26%20c%2B%2B");
//! assert_eq!(unescape_url("%23rust"), "#rust");
//! assert_eq!(unescape_html("2&euro; = 2&#8364;"), "2€ = 2€");
//! ```

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `url` for use as a single URI component.
pub fn escape_url(url: &str) -> String {
    utf8_percent_encode(url, URL_COMPONENT).to_string()
}

/// Decode percent-encoded `url`.
///
/// Sequences that do not decode to valid UTF-8 become U+FFFD.
pub fn unescape_url(url: &str) -> String {
    percent_decode_str(url).decode_utf8_lossy().into_owned()
}

/// Replace named, decimal and hexadecimal character references.
///
/// Unknown references are left as they are.
pub fn unescape_html(html: &str) -> String {
    html_escape::decode_html_entities(html).into_owned()
}
