//! Relay to the external auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Session lookups and logouts are
//! forwarded upstream with the caller's `Cookie` header, and upstream
//! `Set-Cookie` headers are handed back untouched. This host never decides
//! who is signed in.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as `AuthRelayError`; HTTP statuses from the
//! upstream are data, classified by `classify_session_reply`.

#[cfg(test)]
#[path = "auth_relay_test.rs"]
mod auth_relay_test;

use std::time::Duration;

use async_trait::async_trait;
use client::net::types::Session;

use crate::config::AuthRelayConfig;

pub const UPSTREAM_SESSION_PATH: &str = "/me";
pub const UPSTREAM_LOGOUT_PATH: &str = "/logout";

#[derive(Debug, thiserror::Error)]
pub enum AuthRelayError {
    /// The HTTP request to the auth service failed.
    #[error("auth service request failed: {0}")]
    Request(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Raw upstream answer, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
    pub set_cookies: Vec<String>,
}

/// What a session lookup means for the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    SignedIn(Session),
    SignedOut,
    /// 200 with a body that is not a session.
    Malformed(String),
    /// Any status the relay does not pass through as signed in/out.
    Failed(u16),
}

/// Upstream auth service operations.
#[async_trait]
pub trait AuthUpstream: Send + Sync {
    /// Look up the session identified by `cookie`.
    async fn current_session(&self, cookie: Option<&str>) -> Result<UpstreamReply, AuthRelayError>;

    /// End the session identified by `cookie`.
    async fn logout(&self, cookie: Option<&str>) -> Result<UpstreamReply, AuthRelayError>;
}

/// `reqwest`-backed auth service client.
pub struct HttpAuthUpstream {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthUpstream {
    /// Build a client for `config.base_url` with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ClientBuild` if the HTTP client cannot be constructed.
    pub fn new(config: &AuthRelayConfig) -> Result<Self, AuthRelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AuthRelayError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        cookie: Option<&str>,
    ) -> Result<UpstreamReply, AuthRelayError> {
        let request = match cookie {
            Some(cookie) => request.header(reqwest::header::COOKIE, cookie),
            None => request,
        };
        let resp = request.send().await.map_err(|e| AuthRelayError::Request(e.to_string()))?;

        let status = resp.status().as_u16();
        let set_cookies = resp
            .headers()
            .get_all(reqwest::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_owned)
            .collect();
        let body = resp.text().await.map_err(|e| AuthRelayError::Request(e.to_string()))?;

        Ok(UpstreamReply { status, body, set_cookies })
    }
}

#[async_trait]
impl AuthUpstream for HttpAuthUpstream {
    async fn current_session(&self, cookie: Option<&str>) -> Result<UpstreamReply, AuthRelayError> {
        let url = upstream_url(&self.base_url, UPSTREAM_SESSION_PATH);
        self.send(self.http.get(url), cookie).await
    }

    async fn logout(&self, cookie: Option<&str>) -> Result<UpstreamReply, AuthRelayError> {
        let url = upstream_url(&self.base_url, UPSTREAM_LOGOUT_PATH);
        self.send(self.http.post(url), cookie).await
    }
}

pub(crate) fn upstream_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Classify a session lookup reply.
///
/// 200 with a session is signed in; 200 with `null` and 401/403/404 are
/// signed out.
#[must_use]
pub fn classify_session_reply(reply: &UpstreamReply) -> SessionOutcome {
    match reply.status {
        200 => match serde_json::from_str::<Option<Session>>(&reply.body) {
            Ok(Some(session)) => SessionOutcome::SignedIn(session),
            Ok(None) => SessionOutcome::SignedOut,
            Err(e) => SessionOutcome::Malformed(e.to_string()),
        },
        401 | 403 | 404 => SessionOutcome::SignedOut,
        other => SessionOutcome::Failed(other),
    }
}
