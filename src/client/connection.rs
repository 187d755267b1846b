//! Requests against one instance.
//!
//! A [`Connection`] owns its own [`Session`], created from the instance's
//! configuration at the time [`Connection::new`] is called. For streaming,
//! run a `get` on a separate thread and drain or cancel it from another:
//!
//! ```no_run
//! use masto_http::api::V1;
//! use masto_http::{params, Connection, Instance};
//! use std::time::Duration;
//!
//! let instance = Instance::new("example.com", "")?;
//! let connection = Connection::new(&instance)?;
//!
//! std::thread::scope(|s| {
//!     let stream = s.spawn(|| connection.get(V1::StreamingPublic, &params! {}));
//!     for _ in 0..5 {
//!         std::thread::sleep(Duration::from_secs(2));
//!         for event in connection.drain_events() {
//!             println!("{}: {}", event.kind, event.data);
//!         }
//!     }
//!     connection.cancel_stream();
//!     stream.join().expect("stream thread panicked")
//! })?;
//! # Ok::<(), masto_http::MastoError>(())
//! ```
//!
//! # Panics
//!
//! Requests block the calling thread on the crate's shared runtime. Calling
//! them from inside an async context (for example an `async fn` running on
//! tokio) panics; use `tokio::task::spawn_blocking` there.

use super::instance::Instance;
use super::request::Route;
use crate::error::Result;
use crate::protocol::Parameters;
use crate::transport::Session;
use crate::types::{Answer, Event, HttpMethod};

/// Makes requests to the instance it was created from.
#[derive(Debug)]
pub struct Connection {
    session: Session,
    base_uri: String,
}

impl Connection {
    /// Create a connection carrying a copy of `instance`'s configuration.
    pub fn new(instance: &Instance) -> Result<Self> {
        Ok(Connection {
            session: Session::with_config(instance.config().clone())?,
            base_uri: instance.base_uri().to_string(),
        })
    }

    /// Base URI relative routes are resolved against.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The transport session of this connection.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Make a request with any method.
    pub fn call(
        &self,
        method: HttpMethod,
        route: impl Into<Route>,
        parameters: &Parameters,
    ) -> Result<Answer> {
        let uri = route.into().resolve(&self.base_uri);
        self.session.call(method, &uri, parameters)
    }

    /// Make a `GET` request. Parameters go into the query string.
    pub fn get(&self, route: impl Into<Route>, parameters: &Parameters) -> Result<Answer> {
        self.call(HttpMethod::Get, route, parameters)
    }

    /// Make a `POST` request. Parameters go into a multipart form.
    pub fn post(&self, route: impl Into<Route>, parameters: &Parameters) -> Result<Answer> {
        self.call(HttpMethod::Post, route, parameters)
    }

    /// Make a `PATCH` request.
    pub fn patch(&self, route: impl Into<Route>, parameters: &Parameters) -> Result<Answer> {
        self.call(HttpMethod::Patch, route, parameters)
    }

    /// Make a `PUT` request.
    pub fn put(&self, route: impl Into<Route>, parameters: &Parameters) -> Result<Answer> {
        self.call(HttpMethod::Put, route, parameters)
    }

    /// Make a `DELETE` request.
    pub fn delete(&self, route: impl Into<Route>, parameters: &Parameters) -> Result<Answer> {
        self.call(HttpMethod::Delete, route, parameters)
    }

    /// Stop the running transfer, usually a stream.
    pub fn cancel_stream(&self) {
        self.session.cancel_stream();
    }

    /// Complete events received since the last drain.
    pub fn drain_events(&self) -> Vec<Event> {
        self.session.drain_events()
    }

    /// Everything received since the last drain, unparsed.
    pub fn drain_raw(&self) -> String {
        self.session.drain_raw()
    }

    /// Set the bearer token of this connection only.
    pub fn set_access_token(&self, access_token: &str) -> Result<()> {
        self.session.set_access_token(access_token)
    }

    /// Set the proxy of this connection only.
    pub fn set_proxy(&self, proxy: &str) -> Result<()> {
        self.session.set_proxy(proxy)
    }

    /// Set the CA bundle of this connection only.
    pub fn set_cainfo(&self, path: &str) -> Result<()> {
        self.session.set_cainfo(path)
    }

    /// Set the `User-Agent` of this connection only.
    pub fn set_useragent(&self, useragent: &str) -> Result<()> {
        self.session.set_useragent(useragent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_copies_instance_config() {
        let mut instance = Instance::new("example.com", "first").unwrap();
        let before = Connection::new(&instance).unwrap();
        instance.set_access_token("second").unwrap();
        let after = Connection::new(&instance).unwrap();

        assert_eq!(before.session().config().access_token.as_deref(), Some("first"));
        assert_eq!(after.session().config().access_token.as_deref(), Some("second"));
        assert_eq!(after.base_uri(), "https://example.com");
    }

    #[test]
    fn test_connection_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Connection>();
    }
}
