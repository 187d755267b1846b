//! Process-wide transport lifecycle.
//!
//! Every [`Session`](super::Session) holds a [`RuntimeGuard`]. The first guard
//! starts the shared `tokio` runtime that drives all transfers, the last one
//! shuts it down. The live count is atomic so it can be read without the
//! lock; the 0→1 and 1→0 transitions are serialized by the runtime slot's
//! mutex so an initialization can never race a teardown.

use crate::error::{MastoError, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::{Builder, Handle, Runtime};

static RUNTIME: Mutex<Option<Runtime>> = Mutex::new(None);
static ACTIVE: AtomicUsize = AtomicUsize::new(0);
static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);
static TEARDOWNS: AtomicUsize = AtomicUsize::new(0);

/// Counters describing the shared transport runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleStats {
    /// How many times the runtime has been started.
    pub initializations: usize,
    /// How many times the runtime has been shut down.
    pub teardowns: usize,
    /// Sessions currently alive.
    pub active_sessions: usize,
}

/// Snapshot of the lifecycle counters.
pub fn lifecycle_stats() -> LifecycleStats {
    LifecycleStats {
        initializations: INITIALIZATIONS.load(Ordering::SeqCst),
        teardowns: TEARDOWNS.load(Ordering::SeqCst),
        active_sessions: ACTIVE.load(Ordering::SeqCst),
    }
}

/// One reference on the shared runtime, released on drop.
#[derive(Debug)]
pub(crate) struct RuntimeGuard {
    handle: Handle,
}

impl RuntimeGuard {
    pub(crate) fn acquire() -> Result<Self> {
        let mut slot = RUNTIME.lock();
        if slot.is_none() {
            let runtime = Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("masto-transport")
                .enable_all()
                .build()
                .map_err(|e| MastoError::Init(e.to_string()))?;
            *slot = Some(runtime);
            INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
            tracing::debug!("Started transport runtime");
        }

        let handle = match slot.as_ref() {
            Some(runtime) => runtime.handle().clone(),
            None => return Err(MastoError::Init("transport runtime missing".into())),
        };
        let count = ACTIVE.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("Transport sessions: {} (+1)", count);

        Ok(RuntimeGuard { handle })
    }

    pub(crate) fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Drop for RuntimeGuard {
    fn drop(&mut self) {
        let mut slot = RUNTIME.lock();
        let count = ACTIVE.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::debug!("Transport sessions: {} (-1)", count);
        if count == 0 {
            if let Some(runtime) = slot.take() {
                // Never blocks, so dropping a session inside async code is fine.
                runtime.shutdown_background();
                TEARDOWNS.fetch_add(1, Ordering::SeqCst);
                tracing::debug!("Shut down transport runtime");
            }
        }
    }
}
