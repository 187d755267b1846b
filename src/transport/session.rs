//! One transport handle with its configuration and response buffers.
//!
//! # Transfers
//!
//! [`Session::perform`] blocks the calling thread while the shared runtime
//! drives the request. The response body is appended chunk by chunk to a
//! shared buffer, so a second thread can drain a long-lived streaming
//! response while it is still arriving:
//!
//! ```ignore
//! use masto_http::{HttpMethod, Session};
//!
//! let session = Session::new()?;
//! std::thread::scope(|s| {
//!     s.spawn(|| session.perform(HttpMethod::Get, "https://example.com/api/v1/streaming/public", None));
//!     std::thread::sleep(std::time::Duration::from_secs(2));
//!     for event in session.drain_events() {
//!         println!("{}: {}", event.kind, event.data);
//!     }
//!     session.cancel_stream();
//! });
//! ```
//!
//! # Cancellation
//!
//! The transfer checks the cancellation flag every
//! `progress_interval_ms`. Once set, the transfer stops with
//! [`TransportCode::ABORTED_BY_CALLBACK`], which [`settle`] turns into a
//! regular answer carrying whatever status, headers and body had arrived.

use super::buffer::StreamBuffer;
use super::global::RuntimeGuard;
use super::TransportCode;
use crate::client::parser::EventParser;
use crate::client::ClientConfig;
use crate::error::{MastoError, Result};
use crate::types::{Answer, Event, HttpMethod};
use futures::StreamExt;
use http::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use parking_lot::{Mutex, RwLock};
use reqwest::multipart::Form;
use reqwest::{Certificate, Proxy, RequestBuilder, Response};
use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Owns one transport handle exclusively.
///
/// A session is never shared by aliasing: [`Session::try_clone`] builds a
/// brand-new handle carrying a copy of the configuration.
#[derive(Debug)]
pub struct Session {
    config: Mutex<ClientConfig>,
    client: RwLock<reqwest::Client>,
    buffer: Arc<StreamBuffer>,
    reader: Mutex<EventParser>,
    cancelled: Arc<AtomicBool>,
    // Declared last so the handle above is dropped before the runtime.
    runtime: RuntimeGuard,
}

impl Session {
    /// Create a session with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a session with `config` applied.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let runtime = RuntimeGuard::acquire()?;
        let client = build_client(&config)?;

        Ok(Session {
            config: Mutex::new(config),
            client: RwLock::new(client),
            buffer: Arc::new(StreamBuffer::new()),
            reader: Mutex::new(EventParser::new()),
            cancelled: Arc::new(AtomicBool::new(false)),
            runtime,
        })
    }

    /// Build a new, independent session with the same configuration.
    pub fn try_clone(&self) -> Result<Self> {
        Self::with_config(self.config())
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.config.lock().clone()
    }

    /// Set the proxy, e.g. `socks4a://127.0.0.1:9050` or `http://[::1]:3128`.
    pub fn set_proxy(&self, proxy: &str) -> Result<()> {
        self.reconfigure(|config| config.proxy = Some(proxy.to_string()))?;
        tracing::debug!("Set proxy to: {}", proxy);
        Ok(())
    }

    /// Set the OAuth 2.0 bearer token sent with every request.
    pub fn set_access_token(&self, access_token: &str) -> Result<()> {
        self.reconfigure(|config| config.access_token = Some(access_token.to_string()))?;
        tracing::debug!("Set authorization token");
        Ok(())
    }

    /// Use the PEM bundle at `path` instead of the built-in root certificates.
    pub fn set_cainfo(&self, path: &str) -> Result<()> {
        self.reconfigure(|config| config.ca_info = Some(path.into()))?;
        tracing::debug!("Set CA info to: {}", path);
        Ok(())
    }

    /// Set the `User-Agent` header.
    pub fn set_useragent(&self, useragent: &str) -> Result<()> {
        self.reconfigure(|config| config.user_agent = Some(useragent.to_string()))?;
        tracing::debug!("Set User-Agent to: {}", useragent);
        Ok(())
    }

    fn reconfigure(&self, change: impl FnOnce(&mut ClientConfig)) -> Result<()> {
        let mut config = self.config.lock();
        let mut updated = config.clone();
        change(&mut updated);
        let client = build_client(&updated)?;
        *self.client.write() = client;
        *config = updated;
        Ok(())
    }

    /// Ask the running transfer to stop. Safe to call from any thread.
    pub fn cancel_stream(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Everything received since the last drain, as text.
    ///
    /// A multi-byte character split across chunks is held back until its
    /// remaining bytes arrive.
    pub fn drain_raw(&self) -> String {
        let bytes = self.buffer.take();
        self.reader.lock().take_text(&bytes)
    }

    /// Complete stream events received since the last drain.
    ///
    /// An unterminated trailing record stays pending for the next call.
    pub fn drain_events(&self) -> Vec<Event> {
        let bytes = self.buffer.take();
        self.reader.lock().feed(&bytes)
    }

    /// Perform one transfer and block until it finishes or is cancelled.
    ///
    /// `uri` must be absolute. Returns an error only if the transfer could
    /// not be set up; network and HTTP failures are reported in the
    /// [`Answer`].
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context,
    /// since the transfer blocks on the shared runtime.
    pub fn perform(&self, method: HttpMethod, uri: &str, form: Option<Form>) -> Result<Answer> {
        self.cancelled.store(false, Ordering::SeqCst);
        self.buffer.clear();
        self.reader.lock().reset();

        let url = Url::parse(uri).map_err(|e| MastoError::Uri {
            uri: uri.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!("Making {} request to: {}", method, url);

        let client = self.client.read().clone();
        let mut request = client.request(method.into(), url);
        request = match form {
            Some(form) => request.multipart(form),
            None if method == HttpMethod::Post => request.body(Vec::new()),
            None => request,
        };

        let interval = Duration::from_millis(self.config.lock().progress_interval_ms.max(1));
        let buffer = Arc::clone(&self.buffer);
        let cancelled = Arc::clone(&self.cancelled);

        let (status, failure) = self.runtime.handle().block_on(async move {
            let status = Cell::new(0u16);
            let result = tokio::select! {
                result = transfer(request, &buffer, &status) => result,
                _ = watch_cancellation(&cancelled, interval) => Err((
                    TransportCode::ABORTED_BY_CALLBACK,
                    "Callback aborted".to_string(),
                )),
            };
            (status.get(), result.err())
        });

        let outcome = TransferOutcome {
            status,
            headers: self.buffer.headers(),
            body: self.buffer.body_snapshot(),
            failure,
        };
        Ok(settle(outcome, self.cancelled.load(Ordering::SeqCst)))
    }
}

/// What the transport reported for one transfer.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransferOutcome {
    pub(crate) status: u16,
    pub(crate) headers: String,
    pub(crate) body: String,
    pub(crate) failure: Option<(TransportCode, String)>,
}

/// Turn a transfer outcome into an [`Answer`].
///
/// An abort counts as a normal response only when it was requested through
/// the cancellation flag. Any other transport failure leaves the HTTP status
/// at zero.
pub(crate) fn settle(outcome: TransferOutcome, cancel_requested: bool) -> Answer {
    match outcome.failure {
        Some((code, message)) if !(code == TransportCode::ABORTED_BY_CALLBACK && cancel_requested) => {
            tracing::warn!("Transport error {}: {}", code, message);
            Answer {
                transport_code: code,
                error_message: message,
                ..Answer::default()
            }
        }
        _ => {
            tracing::debug!("HTTP status code: {}", outcome.status);
            Answer {
                http_status: outcome.status,
                headers: outcome.headers,
                body: outcome.body,
                ..Answer::default()
            }
        }
    }
}

async fn transfer(
    request: RequestBuilder,
    buffer: &StreamBuffer,
    status: &Cell<u16>,
) -> std::result::Result<(), (TransportCode, String)> {
    let response = request.send().await.map_err(|e| TransportCode::classify(&e))?;
    status.set(response.status().as_u16());
    buffer.set_headers(header_block(&response));

    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| TransportCode::classify(&e))?;
        buffer.append(&chunk);
    }
    Ok(())
}

async fn watch_cancellation(flag: &AtomicBool, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    loop {
        ticker.tick().await;
        if flag.load(Ordering::SeqCst) {
            return;
        }
    }
}

/// Render status line and headers the way they appeared on the wire.
fn header_block(response: &Response) -> String {
    let mut block = format!("{:?} {}\r\n", response.version(), response.status());
    for (name, value) in response.headers() {
        block.push_str(name.as_str());
        block.push_str(": ");
        block.push_str(&String::from_utf8_lossy(value.as_bytes()));
        block.push_str("\r\n");
    }
    block.push_str("\r\n");
    block
}

fn default_user_agent() -> String {
    format!("masto_http/{}", env!("CARGO_PKG_VERSION"))
}

fn build_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let useragent = config.user_agent.clone().unwrap_or_else(default_user_agent);
    let useragent = HeaderValue::from_str(&useragent).map_err(|e| MastoError::Option {
        option: "User-Agent",
        message: e.to_string(),
    })?;

    let mut builder = reqwest::Client::builder()
        .user_agent(useragent)
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects));

    if let Some(token) = config.access_token.as_deref().filter(|t| !t.is_empty()) {
        let mut value =
            HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| MastoError::Option {
                option: "authorization token",
                message: e.to_string(),
            })?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        builder = builder.default_headers(headers);
    }

    if let Some(proxy) = config.proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = Proxy::all(proxy).map_err(|e| MastoError::Option {
            option: "proxy",
            message: e.to_string(),
        })?;
        builder = builder.proxy(proxy);
    }

    if let Some(path) = &config.ca_info {
        let pem = std::fs::read(path).map_err(|e| MastoError::Option {
            option: "CA info",
            message: format!("{}: {}", path.display(), e),
        })?;
        let certificates = Certificate::from_pem_bundle(&pem).map_err(|e| MastoError::Option {
            option: "CA info",
            message: e.to_string(),
        })?;
        builder = builder.tls_built_in_root_certs(false);
        for certificate in certificates {
            builder = builder.add_root_certificate(certificate);
        }
    }

    builder.build().map_err(|e| MastoError::Init(e.to_string()))
}
