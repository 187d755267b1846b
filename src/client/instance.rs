//! Per-server configuration and metadata discovery.

use super::config::ClientConfig;
use super::request::Route;
use crate::api::V1;
use crate::error::Result;
use crate::protocol::{extract, Parameters};
use crate::transport::Session;
use crate::types::{Answer, HttpMethod};
use parking_lot::Mutex;

const DEFAULT_MAX_CHARS: u64 = 500;
const DEFAULT_POST_FORMAT: &str = "text/plain";
const NODEINFO_DISCOVERY: &str = "/.well-known/nodeinfo";

/// One server and the connection properties used to reach it.
///
/// Every [`Connection`](crate::Connection) created from an instance copies
/// its configuration at creation time. Setters change the instance and its
/// own session only.
///
/// # Examples
///
/// ```
/// use masto_http::Instance;
///
/// let instance = Instance::new("example.com", "")?;
/// assert_eq!(instance.base_uri(), "https://example.com");
/// assert_eq!(instance.access_token(), "");
/// # Ok::<(), masto_http::MastoError>(())
/// ```
#[derive(Debug)]
pub struct Instance {
    hostname: String,
    base_uri: String,
    config: ClientConfig,
    /// `0` until fetched.
    max_chars: Mutex<u64>,
    /// Empty until fetched.
    post_formats: Mutex<Vec<String>>,
    session: Session,
}

impl Instance {
    /// Create an instance for `hostname`; an empty token means none.
    pub fn new(hostname: &str, access_token: &str) -> Result<Self> {
        let config = ClientConfig {
            access_token: Some(access_token.to_string()).filter(|t| !t.is_empty()),
            ..ClientConfig::default()
        };
        Self::with_config(hostname, config)
    }

    /// Create an instance for `hostname` with a full configuration.
    pub fn with_config(hostname: &str, config: ClientConfig) -> Result<Self> {
        let session = Session::with_config(config.clone())?;
        let base_uri = format!("{}://{}", config.scheme, hostname);
        tracing::debug!("New instance with base URI {}", base_uri);

        Ok(Instance {
            hostname: hostname.to_string(),
            base_uri,
            config,
            max_chars: Mutex::new(0),
            post_formats: Mutex::new(Vec::new()),
            session,
        })
    }

    /// Copy the descriptor, including cached metadata, with a fresh session.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Instance {
            hostname: self.hostname.clone(),
            base_uri: self.base_uri.clone(),
            config: self.config.clone(),
            max_chars: Mutex::new(*self.max_chars.lock()),
            post_formats: Mutex::new(self.post_formats.lock().clone()),
            session: self.session.try_clone()?,
        })
    }

    /// Hostname, possibly with a port.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Scheme and hostname, e.g. `https://example.com`.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The bearer token, empty if none is set.
    pub fn access_token(&self) -> &str {
        self.config.access_token.as_deref().unwrap_or_default()
    }

    /// Configuration copied into new connections.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Set the bearer token used by this instance and future connections.
    pub fn set_access_token(&mut self, access_token: &str) -> Result<()> {
        self.session.set_access_token(access_token)?;
        self.config.access_token = Some(access_token.to_string());
        Ok(())
    }

    /// Set the proxy used by this instance and future connections.
    pub fn set_proxy(&mut self, proxy: &str) -> Result<()> {
        self.session.set_proxy(proxy)?;
        self.config.proxy = Some(proxy.to_string());
        Ok(())
    }

    /// Set the CA bundle used by this instance and future connections.
    pub fn set_cainfo(&mut self, path: &str) -> Result<()> {
        self.session.set_cainfo(path)?;
        self.config.ca_info = Some(path.into());
        Ok(())
    }

    /// Set the `User-Agent` used by this instance and future connections.
    pub fn set_useragent(&mut self, useragent: &str) -> Result<()> {
        self.session.set_useragent(useragent)?;
        self.config.user_agent = Some(useragent.to_string());
        Ok(())
    }

    /// Maximum number of characters per post.
    ///
    /// Fetched once from `/api/v1/instance` and cached. Any failure yields
    /// 500 without caching, so a later call tries again.
    pub fn max_chars(&self) -> u64 {
        let mut cached = self.max_chars.lock();
        if *cached != 0 {
            return *cached;
        }

        tracing::debug!("Querying {} for max_toot_chars", self.hostname);
        let answer = match self.get(V1::Instance) {
            Ok(answer) if answer.is_success() => answer,
            Ok(answer) => {
                tracing::debug!("Could not get instance info: {}", answer.http_status);
                return DEFAULT_MAX_CHARS;
            }
            Err(e) => {
                tracing::debug!("Could not get instance info: {}", e);
                return DEFAULT_MAX_CHARS;
            }
        };

        let found = extract::number_field(&answer.body, "max_toot_chars")
            .or_else(|| extract::number_field(&answer.body, "max_characters"))
            .filter(|&n| n != 0);
        match found {
            Some(max_chars) => {
                tracing::debug!("Set max_chars to: {}", max_chars);
                *cached = max_chars;
                max_chars
            }
            None => {
                tracing::debug!("max_toot_chars not found");
                DEFAULT_MAX_CHARS
            }
        }
    }

    /// Fetch the NodeInfo document.
    ///
    /// Reads the discovery document at `/.well-known/nodeinfo`, sorts the
    /// linked URIs and fetches the last one. If the discovery request fails
    /// or links nothing, its answer is returned as is.
    pub fn nodeinfo(&self) -> Result<Answer> {
        tracing::debug!("Finding location of NodeInfo on {}", self.hostname);
        let answer = self.get(NODEINFO_DISCOVERY)?;
        if !answer.is_success() {
            tracing::debug!("NodeInfo not found");
            return Ok(answer);
        }

        let mut hrefs = extract::string_fields(&answer.body, "href");
        hrefs.sort();
        match hrefs.pop() {
            Some(href) => {
                tracing::debug!("Selecting href: {}", href);
                self.get(href)
            }
            None => {
                tracing::debug!("No NodeInfo link in discovery document");
                Ok(answer)
            }
        }
    }

    /// Formats accepted for the `content_type` of a post.
    ///
    /// Read from `metadata.postFormats` of the NodeInfo document and cached.
    /// Any failure yields `["text/plain"]` without caching.
    pub fn post_formats(&self) -> Vec<String> {
        let mut cached = self.post_formats.lock();
        if !cached.is_empty() {
            return cached.clone();
        }

        tracing::debug!("Querying {} for postFormats", self.hostname);
        let formats = match self.nodeinfo() {
            Ok(answer) if answer.is_success() => {
                extract::string_list_field(&answer.body, "postFormats").unwrap_or_default()
            }
            _ => Vec::new(),
        };

        if formats.is_empty() {
            tracing::debug!("Couldn't find metadata.postFormats");
            return vec![DEFAULT_POST_FORMAT.to_string()];
        }
        tracing::debug!("Found postFormats: {:?}", formats);
        *cached = formats.clone();
        formats
    }

    fn get(&self, route: impl Into<Route>) -> Result<Answer> {
        let uri = route.into().resolve(&self.base_uri);
        self.session.call(HttpMethod::Get, &uri, &Parameters::new())
    }
}
