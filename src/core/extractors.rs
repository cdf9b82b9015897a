//! Axum extractors for the browser session
//!
//! The session token travels in a cookie whose name comes from
//! [`SessionConfig`](crate::config::SessionConfig). Extraction resolves the
//! token against the injected provider, so handlers receive a ready
//! [`SessionState`].

use crate::core::error::DashboardError;
use crate::core::session::SessionState;
use crate::server::handlers::AppState;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};

/// The viewer's session as resolved for the current request
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn page(session: CurrentSession) -> Html<String> {
///     match session.state {
///         SessionState::Loading => ...,
///         SessionState::Unauthenticated => ...,
///         SessionState::Authenticated(user) => ...,
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession {
    /// Raw token from the cookie, if the request carried one
    pub token: Option<String>,
    pub state: SessionState,
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = DashboardError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers, &state.config.session.cookie_name);
        let session = state.auth.resolve(token.as_deref()).await?;

        Ok(Self {
            token,
            state: session,
        })
    }
}

/// Find the value of cookie `cookie_name` in the request headers
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value carrying a session token
pub fn session_cookie(cookie_name: &str, token: &str) -> String {
    format!("{cookie_name}={token}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value that removes the session cookie
pub fn clear_session_cookie(cookie_name: &str) -> String {
    format!("{cookie_name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
