//! Auth-gate state for the admin section.
//!
//! SYSTEM CONTEXT
//! ==============
//! The admin shell owns one `GatePhase` per mount. `MountGuard` tracks whether
//! that mount is still live so late query results can be dropped.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::AuthError;
use crate::net::types::Session;

/// Where the admin gate is in its single-query lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GatePhase {
    /// Waiting on the session query.
    #[default]
    Loading,
    /// No session; the user is being sent to the public root.
    Redirecting,
    /// Signed in; the admin chrome may render.
    Authenticated(Session),
}

impl GatePhase {
    /// Phase reached once the session query settles.
    ///
    /// Failures collapse into `Redirecting`, same as an absent session.
    pub fn settle(result: Result<Option<Session>, AuthError>) -> Self {
        match result {
            Ok(Some(session)) => Self::Authenticated(session),
            Ok(None) | Err(_) => Self::Redirecting,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Whether the admin chrome may be shown.
    pub fn shows_chrome(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Liveness flag for one mounted view.
///
/// Clones share the flag. `dispose` is one-way.
#[derive(Clone, Debug)]
pub struct MountGuard {
    live: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    pub fn dispose(&self) {
        self.live.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot latch for the logout action.
///
/// Only the first `try_begin` across all clones returns `true`.
#[derive(Clone, Debug, Default)]
pub struct SignOutLatch {
    started: Arc<AtomicBool>,
}

impl SignOutLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_begin(&self) -> bool {
        !self.started.swap(true, Ordering::AcqRel)
    }
}
