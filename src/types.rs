//! Core value types: HTTP verbs, answers and stream events.

use crate::protocol::{self, Parameters};
use crate::transport::TransportCode;
use std::fmt;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`, parameters go into the query string.
    Get,
    /// `POST`, parameters go into a multipart form.
    Post,
    /// `PATCH`, parameters go into a multipart form.
    Patch,
    /// `PUT`, parameters go into a multipart form.
    Put,
    /// `DELETE`, parameters go into a multipart form.
    Delete,
}

impl HttpMethod {
    /// Upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

/// Normalized outcome of one request.
///
/// HTTP errors are not Rust errors: a `404` arrives here with its body and
/// headers intact and [`Answer::is_success`] returning `false`. Transport
/// failures set [`Answer::transport_code`] and leave `http_status` at zero.
///
/// # Examples
///
/// ```
/// use masto_http::{Answer, TransportCode};
///
/// let answer = Answer {
///     http_status: 404,
///     body: r#"{"error":"Record not found"}"#.into(),
///     ..Default::default()
/// };
/// assert!(!answer.is_success());
/// assert_eq!(answer.transport_code, TransportCode::OK);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answer {
    /// Transport-level result, [`TransportCode::OK`] if the transfer worked.
    pub transport_code: TransportCode,
    /// Human-readable transport error, empty on success.
    pub error_message: String,
    /// HTTP status, `0` if no response was received.
    pub http_status: u16,
    /// Raw header block, one `Name: value` per line.
    pub headers: String,
    /// Raw response body.
    pub body: String,
}

impl Answer {
    /// `true` iff the transfer worked and the status is `200`.
    pub fn is_success(&self) -> bool {
        self.transport_code.is_ok() && self.http_status == 200
    }

    /// Value of header `field`, matched case-insensitively; empty if absent.
    pub fn header(&self, field: &str) -> &str {
        protocol::find_header(&self.headers, field)
    }

    /// Parameters for the next page, taken from the `Link` header.
    pub fn next(&self) -> Parameters {
        protocol::parse_pagination(self.header("Link"), true)
    }

    /// Parameters for the previous page, taken from the `Link` header.
    pub fn prev(&self) -> Parameters {
        protocol::parse_pagination(self.header("Link"), false)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

impl AsRef<str> for Answer {
    fn as_ref(&self) -> &str {
        &self.body
    }
}

/// Event names sent by the streaming API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A new status.
    Update,
    /// A new notification.
    Notification,
    /// A status was deleted; the payload is its id.
    Delete,
    /// The user's filters changed.
    FiltersChanged,
    /// A direct conversation was updated.
    Conversation,
    /// An announcement was published.
    Announcement,
    /// Someone reacted to an announcement.
    AnnouncementReaction,
    /// An announcement was deleted.
    AnnouncementDelete,
    /// A status was edited.
    StatusUpdate,
    /// An encrypted message arrived.
    EncryptedMessage,
    /// Any name this crate does not know.
    Other(String),
}

impl EventKind {
    /// Wire name of the event.
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Update => "update",
            EventKind::Notification => "notification",
            EventKind::Delete => "delete",
            EventKind::FiltersChanged => "filters_changed",
            EventKind::Conversation => "conversation",
            EventKind::Announcement => "announcement",
            EventKind::AnnouncementReaction => "announcement.reaction",
            EventKind::AnnouncementDelete => "announcement.delete",
            EventKind::StatusUpdate => "status.update",
            EventKind::EncryptedMessage => "encrypted_message",
            EventKind::Other(name) => name,
        }
    }
}

impl From<&str> for EventKind {
    fn from(name: &str) -> Self {
        match name {
            "update" => EventKind::Update,
            "notification" => EventKind::Notification,
            "delete" => EventKind::Delete,
            "filters_changed" => EventKind::FiltersChanged,
            "conversation" => EventKind::Conversation,
            "announcement" => EventKind::Announcement,
            "announcement.reaction" => EventKind::AnnouncementReaction,
            "announcement.delete" => EventKind::AnnouncementDelete,
            "status.update" => EventKind::StatusUpdate,
            "encrypted_message" => EventKind::EncryptedMessage,
            other => EventKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record from a streaming response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The `event:` line.
    pub kind: EventKind,
    /// The `data:` payload, usually JSON.
    pub data: String,
}
