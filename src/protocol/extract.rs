//! Tolerant field scanner for the few values the crate reads from bodies.
//!
//! This is not a JSON parser. It finds `key: value` pairs by pattern,
//! accepting single, double or missing quotes around the key and any
//! whitespace around the colon. Callers that need structured data should
//! parse the body themselves.

use regex::Regex;

fn key_pattern(key: &str) -> String {
    format!(r#"["']?\b{}\b["']?\s*:\s*"#, regex::escape(key))
}

fn unescape(raw: &str) -> String {
    raw.replace("\\/", "/").replace("\\\"", "\"").replace("\\\\", "\\")
}

/// First unsigned integer stored under `key`. Quoted numbers are accepted.
pub fn number_field(body: &str, key: &str) -> Option<u64> {
    let re = Regex::new(&format!(r#"{}"?(\d+)"#, key_pattern(key))).ok()?;
    re.captures(body)?.get(1)?.as_str().parse().ok()
}

/// First string stored under `key`.
pub fn string_field(body: &str, key: &str) -> Option<String> {
    string_fields(body, key).into_iter().next()
}

/// Every string stored under `key`, in document order.
pub fn string_fields(body: &str, key: &str) -> Vec<String> {
    let Ok(re) = Regex::new(&format!(r#"{}"((?:[^"\\]|\\.)*)""#, key_pattern(key))) else {
        return Vec::new();
    };
    re.captures_iter(body)
        .map(|caps| unescape(&caps[1]))
        .collect()
}

/// Strings in the array stored under `key`, `None` if there is no such array.
pub fn string_list_field(body: &str, key: &str) -> Option<Vec<String>> {
    let re = Regex::new(&format!(r#"{}\[([^\]]*)\]"#, key_pattern(key))).ok()?;
    let items = re.captures(body)?.get(1)?.as_str().to_string();
    let item = Regex::new(r#""((?:[^"\\]|\\.)*)""#).ok()?;
    Some(item.captures_iter(&items).map(|caps| unescape(&caps[1])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_field() {
        assert_eq!(number_field(r#"{"max_toot_chars":500}"#, "max_toot_chars"), Some(500));
        assert_eq!(number_field(r#"{ "max_toot_chars" : 5000 , "x": 1}"#, "max_toot_chars"), Some(5000));
        assert_eq!(number_field(r#"{max_toot_chars: "42"}"#, "max_toot_chars"), Some(42));
        assert_eq!(number_field(r#"{"uri":"example.com"}"#, "max_toot_chars"), None);
    }

    #[test]
    fn test_number_field_requires_whole_key() {
        assert_eq!(number_field(r#"{"max_toot_chars_total":9}"#, "max_toot_chars"), None);
    }

    #[test]
    fn test_string_field() {
        let body = r#"{"id":"1","client_id":"abc","client_secret":"s\/e\"c"}"#;
        assert_eq!(string_field(body, "client_id").as_deref(), Some("abc"));
        assert_eq!(string_field(body, "client_secret").as_deref(), Some("s/e\"c"));
        assert_eq!(string_field(body, "access_token"), None);
    }

    #[test]
    fn test_string_fields() {
        let body = r#"{"links":[{"rel":"a","href":"https://x/2.0"},{"rel":"b", "href" : "https://x/2.1"}]}"#;
        assert_eq!(string_fields(body, "href"), vec!["https://x/2.0", "https://x/2.1"]);
    }

    #[test]
    fn test_string_list_field() {
        let body = r#"{"metadata":{"postFormats":["text/plain","text/html", "text/markdown"],"x":1}}"#;
        assert_eq!(
            string_list_field(body, "postFormats"),
            Some(vec!["text/plain".into(), "text/html".into(), "text/markdown".into()])
        );
        assert_eq!(string_list_field(r#"{"postFormats":[]}"#, "postFormats"), Some(vec![]));
        assert_eq!(string_list_field("{}", "postFormats"), None);
    }
}
