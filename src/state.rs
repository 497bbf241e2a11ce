//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It only
//! carries the auth relay; the host keeps no per-user state of its own.

use std::sync::Arc;

use crate::services::auth_relay::AuthUpstream;

/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// `None` if `AUTH_SERVICE_URL` is not configured.
    pub auth: Option<Arc<dyn AuthUpstream>>,
}

impl AppState {
    #[must_use]
    pub fn new(auth: Option<Arc<dyn AuthUpstream>>) -> Self {
        Self { auth }
    }
}
