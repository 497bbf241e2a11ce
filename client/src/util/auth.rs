//! Admin gate orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AdminShell` drives one `GateDriver` per mount. The driver issues the single
//! session query, applies the resulting phase, and performs the root redirect.
//! It is generic over the collaborator and the navigation hook so the control
//! flow can run without a browser or a reactive runtime.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::AuthClient;
use crate::state::auth::{GatePhase, MountGuard};

/// Public landing page for signed-out users.
pub const ROOT_PATH: &str = "/";

pub struct GateDriver<C, N, P> {
    client: C,
    guard: MountGuard,
    navigate: N,
    apply: P,
}

impl<C, N, P> GateDriver<C, N, P>
where
    C: AuthClient,
    N: Fn(&str),
    P: Fn(GatePhase),
{
    /// `navigate` receives redirect targets, `apply` receives phase changes.
    pub fn new(client: C, guard: MountGuard, navigate: N, apply: P) -> Self {
        Self { client, guard, navigate, apply }
    }

    /// Run the mount's session query and apply the settled phase.
    ///
    /// Returns `None` when the mount was disposed before the query settled;
    /// in that case nothing is applied and no redirect happens.
    pub async fn check(&self) -> Option<GatePhase> {
        let result = self.client.current_session().await;
        if !self.guard.is_live() {
            leptos::logging::log!("admin gate disposed before session query settled; dropping result");
            return None;
        }
        if let Err(e) = &result {
            leptos::logging::warn!("session query failed: {e}");
        }

        let phase = GatePhase::settle(result);
        (self.apply)(phase.clone());
        if phase == GatePhase::Redirecting {
            (self.navigate)(ROOT_PATH);
        }
        Some(phase)
    }

    /// Log the user out, then send them to the public root.
    ///
    /// Navigation happens whatever the logout outcome.
    pub async fn sign_out(&self) {
        if let Err(e) = self.client.logout().await {
            leptos::logging::warn!("logout failed: {e}");
        }
        if self.guard.is_live() {
            (self.apply)(GatePhase::Redirecting);
        }
        (self.navigate)(ROOT_PATH);
    }
}
