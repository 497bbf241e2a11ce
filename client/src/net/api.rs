//! REST helpers for the auth collaborator.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): calls report `AuthError::Unavailable`, since the session
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `AuthError`. The gate decides policy; this
//! module only classifies responses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Session;

pub const SESSION_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Failure talking to the auth collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response.
    #[error("auth request failed: {0}")]
    Request(String),
    /// The response carried a status the client does not understand.
    #[error("auth request failed: status {0}")]
    Status(u16),
    /// The session body could not be decoded.
    #[error("session decode failed: {0}")]
    Decode(String),
    /// No browser environment to issue the request from.
    #[error("auth service unavailable outside the browser")]
    Unavailable,
}

/// External authentication service consumed by the admin gate.
#[allow(async_fn_in_trait)]
pub trait AuthClient {
    /// Query the current session. `Ok(None)` means nobody is signed in.
    async fn current_session(&self) -> Result<Option<Session>, AuthError>;

    /// Clear the session on the auth service.
    async fn logout(&self) -> Result<(), AuthError>;
}

/// `AuthClient` backed by the host's `/api/auth/*` relay.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthClient;

impl AuthClient for HttpAuthClient {
    async fn current_session(&self) -> Result<Option<Session>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
                .send()
                .await
                .map_err(|e| AuthError::Request(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| AuthError::Request(e.to_string()))?;
            interpret_session_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(LOGOUT_ENDPOINT)
                .send()
                .await
                .map_err(|e| AuthError::Request(e.to_string()))?;
            interpret_logout_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }
}

/// Classify a `/api/auth/me` response.
///
/// 200 with a session body is signed in, 200 with `null` or 401 is signed
/// out, anything else is a failure.
pub fn interpret_session_response(status: u16, body: &str) -> Result<Option<Session>, AuthError> {
    match status {
        200 => serde_json::from_str::<Option<Session>>(body).map_err(|e| AuthError::Decode(e.to_string())),
        401 => Ok(None),
        other => Err(AuthError::Status(other)),
    }
}

/// Classify a `/api/auth/logout` response status.
pub fn interpret_logout_status(status: u16) -> Result<(), AuthError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(AuthError::Status(status)) }
}
