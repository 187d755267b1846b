//! Lookup in raw header blocks and `Link` pagination parsing.
//!
//! Answers keep their headers as the unparsed block received from the
//! server. These helpers read single values out of it.
//!
//! # Header Formats
//!
//! | Header | Format | Example |
//! |--------|--------|---------|
//! | any | `Name: value` per line | `Content-Type: application/json` |
//! | Link | `<uri>; rel="next", <uri>; rel="prev"` | see [`parse_pagination`] |
//!
//! # Examples
//!
//! ```
//! use masto_http::protocol::{find_header, parse_pagination};
//!
//! let block = "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\r\n";
//! assert_eq!(find_header(block, "Content-Type"), "application/json");
//!
//! let link = r#"<https://example.com/api/v1/timelines/home?max_id=7>; rel="next""#;
//! let next = parse_pagination(link, true);
//! assert_eq!(next.len(), 1);
//! ```

use super::params::{ParamValue, Parameters};
use once_cell::sync::Lazy;
use regex::Regex;

static LINK_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<([^>]*)>\s*;\s*rel="?(next|prev)"?"#).expect("Invalid regex")
});

/// Value of `field` in a raw header block, empty if absent.
///
/// Names are compared ASCII-case-insensitively; surrounding whitespace and
/// the trailing `\r` are stripped from the value.
pub fn find_header<'a>(block: &'a str, field: &str) -> &'a str {
    for line in block.lines() {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case(field) {
                return value.trim();
            }
        }
    }
    ""
}

/// Query parameters of the `rel="next"` (or `rel="prev"`) entry of a
/// `Link` header value.
///
/// Returns an empty set if the header is empty or has no such entry.
pub fn parse_pagination(link: &str, next: bool) -> Parameters {
    let wanted = if next { "next" } else { "prev" };
    let mut parameters = Parameters::new();

    let Some(target) = LINK_ENTRY
        .captures_iter(link)
        .find(|caps| &caps[2] == wanted)
        .map(|caps| caps[1].to_string())
    else {
        return parameters;
    };

    let Some((_, query)) = target.split_once('?') else {
        return parameters;
    };
    tracing::debug!("Found parameters in Link header: {}", query);

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        parameters.insert(name.to_string(), ParamValue::Single(value.to_string()));
    }
    parameters
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINK: &str = concat!(
        r#"<https://example.com/api/v1/timelines/home?limit=2&max_id=105>; rel="next", "#,
        r#"<https://example.com/api/v1/timelines/home?limit=2&min_id=107>; rel="prev""#
    );

    #[test]
    fn test_find_header_case_insensitive() {
        let block = "HTTP/2 200\r\nLink: <x>\r\nX-RateLimit-Limit: 300\r\n\r\n";
        assert_eq!(find_header(block, "link"), "<x>");
        assert_eq!(find_header(block, "x-ratelimit-limit"), "300");
    }

    #[test]
    fn test_find_header_absent() {
        assert_eq!(find_header("HTTP/1.1 200 OK\r\n\r\n", "Link"), "");
        assert_eq!(find_header("", "Link"), "");
    }

    #[test]
    fn test_parse_next() {
        let next = parse_pagination(LINK, true);
        assert_eq!(next.len(), 2);
        assert_eq!(next["max_id"], ParamValue::Single("105".into()));
        assert_eq!(next["limit"], ParamValue::Single("2".into()));
    }

    #[test]
    fn test_parse_prev() {
        let prev = parse_pagination(LINK, false);
        assert_eq!(prev["min_id"], ParamValue::Single("107".into()));
        assert!(!prev.contains_key("max_id"));
    }

    #[test]
    fn test_parse_missing_direction() {
        let link = r#"<https://example.com/api/v1/blocks?max_id=3>; rel="next""#;
        assert!(parse_pagination(link, false).is_empty());
        assert!(parse_pagination("", true).is_empty());
    }
}
