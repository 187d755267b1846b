//! OAuth 2.0 token acquisition with the out-of-band redirect.
//!
//! # Flow
//!
//! | Step | Request | Answer body on success |
//! |------|---------|------------------------|
//! | [`register_application`](ObtainToken::register_application) | `POST /api/v1/apps` | URI the user visits to authorize |
//! | [`exchange_code`](ObtainToken::exchange_code) | `POST /oauth/token` | the access token |
//!
//! The second step also stores the token in the [`Instance`].
//!
//! # Examples
//!
//! ```no_run
//! use masto_http::{Instance, ObtainToken};
//!
//! let mut instance = Instance::new("example.com", "")?;
//! let mut token = ObtainToken::new(&mut instance)?;
//!
//! let answer = token.register_application("Testclient", "read write:favourites", "https://example.com/")?;
//! println!("Please visit {} and paste the code here:", answer);
//! let mut code = String::new();
//! std::io::stdin().read_line(&mut code).expect("no code");
//!
//! let answer = token.exchange_code(code.trim())?;
//! println!("Your access token is: {}", answer);
//! # Ok::<(), masto_http::MastoError>(())
//! ```

use super::instance::Instance;
use super::request::Route;
use super::utils::escape_url;
use crate::api::{OAuth, V1};
use crate::error::Result;
use crate::protocol::{extract, Parameters};
use crate::transport::Session;
use crate::types::{Answer, HttpMethod};

/// Redirect URI telling the server to display the code to the user.
pub const REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

const DEFAULT_SCOPES: &str = "read";

/// Two-step token acquisition for one [`Instance`].
///
/// [`exchange_code`](ObtainToken::exchange_code) uses the credentials
/// obtained by [`register_application`](ObtainToken::register_application);
/// calling it first sends empty credentials.
#[derive(Debug)]
pub struct ObtainToken<'a> {
    instance: &'a mut Instance,
    session: Session,
    scopes: String,
    client_id: String,
    client_secret: String,
}

impl<'a> ObtainToken<'a> {
    /// Prepare the flow for `instance`.
    pub fn new(instance: &'a mut Instance) -> Result<Self> {
        let session = Session::with_config(instance.config().clone())?;
        Ok(ObtainToken {
            instance,
            session,
            scopes: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
        })
    }

    /// Register an application and build the authorization URI.
    ///
    /// `scopes` defaults to `read` when empty; `website` is optional. On
    /// success the answer body is the URI the user has to visit.
    pub fn register_application(
        &mut self,
        client_name: &str,
        scopes: &str,
        website: &str,
    ) -> Result<Answer> {
        self.scopes = if scopes.is_empty() {
            DEFAULT_SCOPES.to_string()
        } else {
            scopes.to_string()
        };

        let mut parameters = Parameters::new();
        parameters.insert("client_name".into(), client_name.into());
        parameters.insert("redirect_uris".into(), REDIRECT_URI.into());
        parameters.insert("scopes".into(), self.scopes.as_str().into());
        if !website.is_empty() {
            parameters.insert("website".into(), website.into());
        }

        let mut answer = self.post(V1::Apps, &parameters)?;
        if !answer.is_success() {
            return Ok(answer);
        }

        self.client_id = extract::string_field(&answer.body, "client_id").unwrap_or_default();
        self.client_secret =
            extract::string_field(&answer.body, "client_secret").unwrap_or_default();
        tracing::debug!("Registered application with client_id {}", self.client_id);

        let mut uri = format!(
            "{}?scope={}&response_type=code&redirect_uri={}&client_id={}",
            Route::from(OAuth::Authorize).resolve(self.instance.base_uri()),
            escape_url(&self.scopes),
            escape_url(REDIRECT_URI),
            self.client_id
        );
        if !website.is_empty() {
            uri.push_str("&website=");
            uri.push_str(&escape_url(website));
        }
        answer.body = uri;

        Ok(answer)
    }

    /// Exchange the authorization `code` for an access token.
    ///
    /// On success the answer body is the token, and the token is set on the
    /// instance. A token the instance rejects as a header value is still
    /// returned in the body, with the instance left unchanged.
    pub fn exchange_code(&mut self, code: &str) -> Result<Answer> {
        let mut parameters = Parameters::new();
        parameters.insert("client_id".into(), self.client_id.as_str().into());
        parameters.insert("client_secret".into(), self.client_secret.as_str().into());
        parameters.insert("redirect_uri".into(), REDIRECT_URI.into());
        parameters.insert("code".into(), code.into());
        parameters.insert("grant_type".into(), "authorization_code".into());
        if !self.scopes.is_empty() {
            parameters.insert("scope".into(), self.scopes.as_str().into());
        }

        let mut answer = self.post(OAuth::Token, &parameters)?;
        if !answer.is_success() {
            return Ok(answer);
        }

        if let Some(access_token) = extract::string_field(&answer.body, "access_token") {
            tracing::debug!("Got access token");
            if let Err(e) = self.instance.set_access_token(&access_token) {
                tracing::warn!("Could not store access token: {}", e);
            }
            answer.body = access_token;
        }

        Ok(answer)
    }

    /// Alias of [`register_application`](ObtainToken::register_application).
    pub fn step_1(&mut self, client_name: &str, scopes: &str, website: &str) -> Result<Answer> {
        self.register_application(client_name, scopes, website)
    }

    /// Alias of [`exchange_code`](ObtainToken::exchange_code).
    pub fn step_2(&mut self, code: &str) -> Result<Answer> {
        self.exchange_code(code)
    }

    fn post(&self, route: impl Into<Route>, parameters: &Parameters) -> Result<Answer> {
        let uri = route.into().resolve(self.instance.base_uri());
        self.session.call(HttpMethod::Post, &uri, parameters)
    }
}
