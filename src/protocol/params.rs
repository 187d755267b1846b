//! Parameter sets and their encodings.
//!
//! A [`Parameters`] set is used three ways:
//!
//! 1. **Placeholder substitution** - reserved names (`id`, `account_id`, ...)
//!    replace their `<ID>`-style placeholder in the URI template and are
//!    removed from the set.
//! 2. **Query string** for `GET`: `?name=value&list[]=a&list[]=b`.
//! 3. **Multipart form** for every other verb: one part per value, list
//!    values as repeated `name[]` parts, `@file:<path>` values uploaded from
//!    disk.
//!
//! Values are not percent-encoded here. Escape them with
//! [`escape_url`](crate::client::escape_url) before putting anything that
//! needs it into a `GET` parameter.
//!
//! # Examples
//!
//! ```
//! use masto_http::params;
//! use masto_http::protocol::{substitute, to_query_string};
//!
//! let parameters = params! {
//!     "id" => "42",
//!     "limit" => "4",
//! };
//! let (uri, remaining) = substitute("/api/v1/accounts/<ID>/followers", &parameters);
//! assert_eq!(uri, "/api/v1/accounts/42/followers");
//! assert_eq!(to_query_string(&remaining), "?limit=4");
//! ```

use crate::error::{MastoError, Result};
use reqwest::multipart::{Form, Part};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Prefix marking a value as "upload this local file".
pub const FILE_MARKER: &str = "@file:";

/// Parameter names that may fill a URI placeholder.
pub const PLACEHOLDER_NAMES: [&str; 11] = [
    "id",
    "nickname",
    "nickname_or_id",
    "account_id",
    "list_id",
    "hashtag",
    "permission_group",
    "instance",
    "report_id",
    "name",
    "emoji",
];

/// A parameter value: one string or an ordered list of strings.
///
/// Arrays must always be lists, even with a single element, so the server
/// sees `name[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Sent as `name`.
    Single(String),
    /// Sent as repeated `name[]`.
    List(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Single(value.clone())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::List(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        ParamValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Parameters of one call, ordered by name.
pub type Parameters = BTreeMap<String, ParamValue>;

/// Build a [`Parameters`] set.
///
/// ```
/// use masto_http::{params, ParamValue};
///
/// let parameters = params! {
///     "status" => "How is the weather?",
///     "poll[options]" => ["Sunny", "Rainy"],
///     "poll[expires_in]" => "86400",
/// };
/// assert_eq!(
///     parameters["poll[options]"],
///     ParamValue::List(vec!["Sunny".into(), "Rainy".into()])
/// );
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Parameters::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut parameters = $crate::Parameters::new();
        $(
            parameters.insert(::std::string::String::from($key), $crate::ParamValue::from($value));
        )+
        parameters
    }};
}

fn find_placeholder(uri: &str, name: &str) -> Option<usize> {
    let needle = format!("<{}>", name);
    uri.as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Fill placeholders in `uri` and return the parameters left to encode.
///
/// Only reserved names with a single value are substituted, and only when
/// their placeholder actually occurs in `uri`; everything else is returned
/// unchanged.
pub fn substitute(uri: &str, parameters: &Parameters) -> (String, Parameters) {
    let mut uri = uri.to_string();
    let mut remaining = Parameters::new();

    for (name, value) in parameters {
        if let ParamValue::Single(text) = value {
            if PLACEHOLDER_NAMES.contains(&name.as_str()) {
                if let Some(pos) = find_placeholder(&uri, name) {
                    uri.replace_range(pos..pos + name.len() + 2, text);
                    tracing::debug!("Replaced <{}> in URI with {}", name.to_uppercase(), text);
                    continue;
                }
            }
        }
        remaining.insert(name.clone(), value.clone());
    }

    (uri, remaining)
}

fn push_pair(query: &mut String, name: &str, value: &str) {
    query.push(if query.is_empty() { '?' } else { '&' });
    query.push_str(name);
    query.push('=');
    query.push_str(value);
}

/// Encode `parameters` as a query string with a leading `?`.
///
/// Returns an empty string for an empty set. Lists become repeated
/// `name[]=value` pairs in list order; empty lists are skipped.
pub fn to_query_string(parameters: &Parameters) -> String {
    let mut query = String::new();
    for (name, value) in parameters {
        match value {
            ParamValue::Single(text) => push_pair(&mut query, name, text),
            ParamValue::List(items) => {
                let name = format!("{}[]", name);
                for item in items {
                    push_pair(&mut query, &name, item);
                }
            }
        }
    }
    query
}

/// Content of one form part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldContent {
    /// Literal text.
    Text(String),
    /// Contents of a local file.
    File(PathBuf),
}

/// One part of a multipart form, before any file is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Part name, `name[]` for list elements.
    pub name: String,
    /// What the part carries.
    pub content: FieldContent,
}

fn field_content(value: &str) -> FieldContent {
    match value.strip_prefix(FILE_MARKER) {
        Some(path) => FieldContent::File(PathBuf::from(path)),
        None => FieldContent::Text(value.to_string()),
    }
}

/// Lay out `parameters` as form parts.
pub fn form_fields(parameters: &Parameters) -> Vec<FormField> {
    let mut fields = Vec::new();
    for (name, value) in parameters {
        match value {
            ParamValue::Single(text) => fields.push(FormField {
                name: name.clone(),
                content: field_content(text),
            }),
            ParamValue::List(items) => {
                let name = format!("{}[]", name);
                fields.extend(items.iter().map(|item| FormField {
                    name: name.clone(),
                    content: field_content(item),
                }));
            }
        }
    }
    fields
}

/// Build the multipart body, reading every file part from disk.
pub fn into_multipart(fields: Vec<FormField>) -> Result<Form> {
    tracing::debug!("Building HTTP form with {} parts", fields.len());
    let mut form = Form::new();

    for field in fields {
        if field.name.is_empty() {
            return Err(MastoError::Form("form part without a name".into()));
        }

        let part = match field.content {
            FieldContent::Text(text) => {
                tracing::debug!("Set form part: {} = {}", field.name, text);
                Part::text(text)
            }
            FieldContent::File(path) => {
                let data = std::fs::read(&path).map_err(|source| MastoError::Upload {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!("Set form part: {} = <{}>", field.name, path.display());
                let mut part = Part::bytes(data);
                if let Some(file_name) = path.file_name() {
                    part = part.file_name(file_name.to_string_lossy().into_owned());
                }
                part
            }
        };
        form = form.part(field.name, part);
    }

    Ok(form)
}
