//! Two-input readiness join.
//!
//! The contact map needs two independent one-shot signals: the site
//! document has loaded, and the client map library has loaded. Either may
//! arrive first, either may repeat. The join fires exactly once, on the
//! call that completes the pair.

use std::sync::atomic::{AtomicBool, Ordering};

/// The two inputs of the join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    DocumentLoaded,
    MapLibraryReady,
}

/// Result of one arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The other input has not arrived yet.
    Pending,
    /// This arrival completed the join; run the continuation now.
    Fired,
    /// The join fired on an earlier arrival.
    AlreadyFired,
}

#[derive(Debug, Default)]
pub struct ReadinessJoin {
    document: AtomicBool,
    library: AtomicBool,
    fired: AtomicBool,
}

impl ReadinessJoin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a signal and report whether the join fired on this call.
    ///
    /// Safe to call from any thread, any number of times.
    pub fn arrive(&self, signal: Signal) -> JoinOutcome {
        let flag = match signal {
            Signal::DocumentLoaded => &self.document,
            Signal::MapLibraryReady => &self.library,
        };
        flag.store(true, Ordering::SeqCst);

        if !(self.document.load(Ordering::SeqCst) && self.library.load(Ordering::SeqCst)) {
            return JoinOutcome::Pending;
        }

        match self
            .fired
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        {
            Ok(_) => JoinOutcome::Fired,
            Err(_) => JoinOutcome::AlreadyFired,
        }
    }

    pub fn is_ready(&self, signal: Signal) -> bool {
        match signal {
            Signal::DocumentLoaded => self.document.load(Ordering::SeqCst),
            Signal::MapLibraryReady => self.library.load(Ordering::SeqCst),
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}
