//! Auth routes: same-origin relay of session lookup and logout.

use axum::extract::State;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{AppendHeaders, IntoResponse, Json, Response};

use crate::services::auth_relay::{SessionOutcome, UpstreamReply, classify_session_reply};
use crate::state::AppState;

fn forwarded_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Upstream `Set-Cookie` values that are valid header values.
fn relayed_cookies(reply: &UpstreamReply) -> AppendHeaders<Vec<(HeaderName, HeaderValue)>> {
    AppendHeaders(
        reply
            .set_cookies
            .iter()
            .filter_map(|c| HeaderValue::from_str(c).ok())
            .map(|v| (SET_COOKIE, v))
            .collect(),
    )
}

fn not_configured() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, "auth service not configured").into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me` — current session, or 401 when signed out.
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(upstream) = &state.auth else {
        return not_configured();
    };

    let cookie = forwarded_cookie(&headers);
    let reply = match upstream.current_session(cookie.as_deref()).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "session lookup failed");
            return (StatusCode::BAD_GATEWAY, "auth service unreachable").into_response();
        }
    };

    let cookies = relayed_cookies(&reply);
    match classify_session_reply(&reply) {
        SessionOutcome::SignedIn(session) => (cookies, Json(session)).into_response(),
        SessionOutcome::SignedOut => (cookies, StatusCode::UNAUTHORIZED).into_response(),
        SessionOutcome::Malformed(e) => {
            tracing::warn!(error = %e, "auth service returned malformed session");
            (StatusCode::BAD_GATEWAY, "malformed session").into_response()
        }
        SessionOutcome::Failed(status) => {
            tracing::warn!(status, "auth service rejected session lookup");
            (StatusCode::BAD_GATEWAY, "session lookup failed").into_response()
        }
    }
}

/// `POST /api/auth/logout` — end the session upstream.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(upstream) = &state.auth else {
        return not_configured();
    };

    let cookie = forwarded_cookie(&headers);
    let reply = match upstream.logout(cookie.as_deref()).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "logout failed");
            return (StatusCode::BAD_GATEWAY, "auth service unreachable").into_response();
        }
    };

    let cookies = relayed_cookies(&reply);
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    if status.is_success() {
        (cookies, StatusCode::NO_CONTENT).into_response()
    } else {
        tracing::warn!(status = reply.status, "auth service rejected logout");
        (cookies, status).into_response()
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
