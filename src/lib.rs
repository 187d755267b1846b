#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! ## Overview
//!
//! The crate maps the REST and streaming API of Mastodon-compatible servers
//! onto plain calls. Response bodies are handed back as strings; interpreting
//! them is up to the caller.
//!
//! 1. **Endpoints** - every known path is an enum variant with a URI template
//! 2. **Parameters** - filled into placeholders, then sent as query string or
//!    multipart form depending on the verb
//! 3. **Answers** - HTTP errors and network failures come back as values,
//!    only local setup failures are `Err`
//! 4. **Streams** - a long-running `GET` fills a buffer that another thread
//!    drains into events
//!
//! ## Module Structure
//!
//! - **[api]** - Endpoint registry
//! - **[client]** - Instance, Connection, token acquisition, event parser
//! - **[protocol]** - Parameter encodings, header lookup, field extraction
//! - **[transport]** - Sessions and the shared transport runtime
//! - **[types]** - Answer, HTTP method, stream events
//! - **[error]** - Setup errors

pub mod api;
pub mod client;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod types;

pub use api::Endpoint;
pub use client::{ClientConfig, Connection, Instance, ObtainToken, Route};
pub use error::{MastoError, Result};
pub use protocol::{ParamValue, Parameters};
pub use transport::{lifecycle_stats, LifecycleStats, Session, TransportCode};
pub use types::{Answer, Event, EventKind, HttpMethod};
