//! Transport sessions on top of `reqwest`.
//!
//! # Module Organization
//!
//! ```text
//! transport/
//! ├── code    - TransportCode, libcurl-compatible outcome codes
//! ├── global  - reference-counted shared runtime
//! ├── buffer  - body/header buffers shared with the transfer task
//! └── session - Session, one handle plus configuration
//! ```
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Session`] | One transport handle, blocking `perform`, stream drains |
//! | [`TransportCode`] | Transport-level result code carried by answers |
//! | [`LifecycleStats`] | Counters of the shared runtime lifecycle |

mod buffer;
mod code;
mod global;
mod session;

pub use code::TransportCode;
pub use global::{lifecycle_stats, LifecycleStats};
pub use session::Session;
