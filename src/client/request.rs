//! Turning a route and parameters into one transfer.
//!
//! | Verb | Parameters go into |
//! |------|--------------------|
//! | `GET` | query string |
//! | `POST`, `PATCH`, `PUT`, `DELETE` | multipart form (empty body if none remain) |
//!
//! Placeholder parameters are substituted into the URI first and never reach
//! the query string or the form.

use crate::api::{Endpoint, OAuth, PleromaAdmin, PleromaV1, V1, V2};
use crate::error::Result;
use crate::protocol::{form_fields, into_multipart, substitute, to_query_string, Parameters};
use crate::transport::Session;
use crate::types::{Answer, HttpMethod};

/// Target of a request: a known endpoint or a free-form path.
///
/// Paths starting with `http://` or `https://` are used as they are, which
/// is how pagination links and non-API documents are fetched. Anything else
/// is appended to the instance base URI.
///
/// # Examples
///
/// ```
/// use masto_http::api::V1;
/// use masto_http::Route;
///
/// let base = "https://example.com";
/// assert_eq!(Route::from(V1::Instance).resolve(base), "https://example.com/api/v1/instance");
/// assert_eq!(Route::from("/.well-known/nodeinfo").resolve(base), "https://example.com/.well-known/nodeinfo");
/// assert_eq!(Route::from("https://other.example/x").resolve(base), "https://other.example/x");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// A registry endpoint.
    Endpoint(Endpoint),
    /// A path below the base URI, or an absolute URI.
    Path(String),
}

impl Route {
    /// Absolute URI template for this route.
    pub fn resolve(&self, base_uri: &str) -> String {
        match self {
            Route::Endpoint(endpoint) => format!("{}{}", base_uri, endpoint.template()),
            Route::Path(path) if is_absolute(path) => path.clone(),
            Route::Path(path) => format!("{}{}", base_uri, path),
        }
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("https://") || path.starts_with("http://")
}

impl From<Endpoint> for Route {
    fn from(endpoint: Endpoint) -> Self {
        Route::Endpoint(endpoint)
    }
}

macro_rules! route_from_area {
    ($($area:ident),+) => {
        $(
            impl From<$area> for Route {
                fn from(endpoint: $area) -> Self {
                    Route::Endpoint(endpoint.into())
                }
            }
        )+
    };
}

route_from_area!(V1, V2, OAuth, PleromaV1, PleromaAdmin);

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Route::Path(path.to_string())
    }
}

impl From<String> for Route {
    fn from(path: String) -> Self {
        Route::Path(path)
    }
}

impl Session {
    /// Encode `parameters` for `method` and perform the request on `uri`.
    ///
    /// `uri` is an absolute URI template; its placeholders are filled from
    /// `parameters` first.
    pub fn call(&self, method: HttpMethod, uri: &str, parameters: &Parameters) -> Result<Answer> {
        let (mut uri, remaining) = substitute(uri, parameters);

        let form = match method {
            HttpMethod::Get => {
                uri.push_str(&to_query_string(&remaining));
                None
            }
            _ if remaining.is_empty() => None,
            _ => Some(into_multipart(form_fields(&remaining))?),
        };

        self.perform(method, &uri, form)
    }
}
