//! Client side of the API: instances, connections and token acquisition.
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config     - Connection properties shared by instance and sessions
//! ├── instance   - Per-server descriptor and metadata discovery
//! ├── connection - Requests and streams against one instance
//! ├── request    - Route resolution and parameter encoding per verb
//! ├── oauth      - Two-step OAuth 2.0 token acquisition
//! ├── parser     - Incremental streaming event parser
//! └── utils      - URL and HTML escaping helpers
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Instance`] | Hostname, configuration, cached character limit and post formats |
//! | [`Connection`] | Makes requests, drains and cancels streams |
//! | [`ObtainToken`] | Registers an application and exchanges the authorization code |
//! | [`Route`] | Endpoint or free-form path to request |
//! | [`ClientConfig`] | Token, proxy, CA bundle, user agent |
//!
//! # Examples
//!
//! ## Making Requests
//!
//! ```no_run
//! use masto_http::api::V1;
//! use masto_http::{params, Connection, Instance};
//!
//! let instance = Instance::new("example.com", "token")?;
//! let connection = Connection::new(&instance)?;
//!
//! let answer = connection.get(V1::AccountsIdStatuses, &params! {
//!     "id" => "1",
//!     "limit" => "4",
//!     "exclude_reblogs" => "true",
//! })?;
//! if answer.is_success() {
//!     println!("{}", answer);
//!     let older = connection.get(V1::AccountsIdStatuses, &answer.next())?;
//! }
//! # Ok::<(), masto_http::MastoError>(())
//! ```
//!
//! ## Posting With an Attachment
//!
//! ```no_run
//! use masto_http::api::{V1, V2};
//! use masto_http::{params, Connection, Instance};
//!
//! let instance = Instance::new("example.com", "token")?;
//! let connection = Connection::new(&instance)?;
//!
//! let media = connection.post(V2::Media, &params! {
//!     "file" => "@file:/tmp/cat.png",
//!     "description" => "A cat",
//! })?;
//! # Ok::<(), masto_http::MastoError>(())
//! ```

mod config;
mod connection;
mod instance;
mod oauth;
pub mod parser;
mod request;
mod utils;

pub use config::ClientConfig;
pub use connection::Connection;
pub use instance::Instance;
pub use oauth::{ObtainToken, REDIRECT_URI};
pub use parser::EventParser;
pub use request::Route;
pub use utils::{escape_url, unescape_html, unescape_url};
