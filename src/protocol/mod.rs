//! Wire-level encodings shared by every request.
//!
//! - **params** - parameter sets, placeholder substitution, query strings,
//!   multipart form layout
//! - **headers** - header lookup in raw blocks, `Link` pagination
//! - **extract** - tolerant `key: value` scanner for bootstrap fields

pub mod extract;
pub mod headers;
pub mod params;

pub use headers::{find_header, parse_pagination};
pub use params::{
    form_fields, into_multipart, substitute, to_query_string, FieldContent, FormField,
    ParamValue, Parameters, FILE_MARKER, PLACEHOLDER_NAMES,
};
