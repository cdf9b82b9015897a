//! HTTP handlers of the dashboard
//!
//! Every page path goes through the session gate in [`render_page`]:
//! loading shows the indicator, no identity shows the sign-in form, and an
//! identity gets the layout shell around the routed page.

use crate::config::DashboardConfig;
use crate::core::error::{DashboardError, RequestError, SessionError};
use crate::core::events::{EventBus, SessionEvent};
use crate::core::extractors::{CurrentSession, clear_session_cookie, session_cookie};
use crate::core::session::{AuthProvider, SessionState, SignedIn};
use crate::server::router;
use crate::views::Renderer;
use crate::views::auth::{LoadingView, SignInView};
use crate::views::layout::{LayoutShell, MENU_OPEN};
use axum::{
    Form,
    extract::{Query, State},
    http::{Method, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use validator::{Validate, ValidationErrors};

/// Shared state of the dashboard handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DashboardConfig>,
    pub auth: Arc<dyn AuthProvider>,
    pub renderer: Arc<Renderer>,
    /// Optional event bus notified of session changes
    pub event_bus: Option<Arc<EventBus>>,
}

impl AppState {
    fn publish(&self, event: SessionEvent) {
        if let Some(bus) = &self.event_bus {
            bus.publish(event);
        }
    }

    fn sign_in_page(&self, status: StatusCode, email: &str, error: Option<String>) -> Result<Response, DashboardError> {
        let view = SignInView {
            app_name: self.config.branding.app_name.clone(),
            email: email.to_string(),
            error,
        };
        let html = self.renderer.render_sign_in(&view)?;
        Ok((status, Html(html)).into_response())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` shows the overlay navigation
    pub menu: Option<String>,
}

/// Session gate followed by the page for the request path
pub async fn render_page(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    Query(query): Query<PageQuery>,
    session: CurrentSession,
) -> Result<Response, DashboardError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(RequestError::MethodNotAllowed {
            method: method.to_string(),
            path: uri.path().to_string(),
        }
        .into());
    }

    let branding = &state.config.branding;
    match session.state {
        SessionState::Loading => {
            let view = LoadingView {
                app_name: branding.app_name.clone(),
                refresh_secs: state.config.session.loading_refresh_secs,
            };
            Ok(Html(state.renderer.render_loading(&view)?).into_response())
        }
        SessionState::Unauthenticated => state.sign_in_page(StatusCode::OK, "", None),
        SessionState::Authenticated(user) => {
            let path = uri.path();
            let page = router::resolve(path);
            let content = state.renderer.render_page(page, branding)?;

            let menu_open = query.menu.as_deref() == Some(MENU_OPEN);
            let shell = LayoutShell::new(branding, &user, path, page.title(), menu_open);
            Ok(Html(state.renderer.render_shell(&shell, &content)?).into_response())
        }
    }
}

/// Sign-in form fields
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SignInForm {
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Enter your password"))]
    pub password: String,
}

/// POST /auth/sign-in
pub async fn sign_in(State(state): State<AppState>, Form(form): Form<SignInForm>) -> Result<Response, DashboardError> {
    if let Err(errors) = form.validate() {
        let err = RequestError::InvalidForm {
            message: first_message(&errors),
        };
        return state.sign_in_page(err.status_code(), &form.email, Some(err.to_string()));
    }

    match state.auth.sign_in(&form.email, &form.password).await {
        Ok(SignedIn { token, user }) => {
            tracing::info!(user_id = %user.id, email = %user.email, "signed in");
            state.publish(SessionEvent::SignedIn {
                user_id: user.id,
                email: user.email.clone(),
            });

            let cookie = session_cookie(&state.config.session.cookie_name, &token);
            Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
        }
        Err(err @ (SessionError::InvalidCredentials | SessionError::NotReady)) => {
            tracing::warn!(email = %form.email, error = %err, "sign-in rejected");
            state.sign_in_page(err.status_code(), &form.email, Some(err.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

/// Messages of the first failing field, email before password
fn first_message(errors: &ValidationErrors) -> String {
    let fields = errors.field_errors();
    ["email", "password"]
        .iter()
        .filter_map(|field| fields.get(*field))
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Check the form and try again".to_string())
}

#[derive(Debug, Default, Deserialize)]
pub struct SignOutForm {
    /// Page to go back to if signing out fails
    #[serde(default)]
    pub return_to: String,
}

/// POST /auth/sign-out
///
/// Never fails: a provider error is logged and published, and the viewer
/// lands back on the page they came from with the session untouched.
pub async fn sign_out(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(form): Form<SignOutForm>,
) -> Response {
    let Some(token) = session.token.as_deref() else {
        return Redirect::to("/").into_response();
    };
    let user = session.state.identity();

    match state.auth.sign_out(token).await {
        Ok(()) => {
            if let Some(user) = user {
                tracing::info!(user_id = %user.id, email = %user.email, "signed out");
                state.publish(SessionEvent::SignedOut {
                    user_id: user.id,
                    email: user.email.clone(),
                });
            }

            let cookie = clear_session_cookie(&state.config.session.cookie_name);
            ([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "error signing out");
            state.publish(SessionEvent::SignOutFailed {
                user_id: user.map(|u| u.id),
                message: err.to_string(),
            });
            Redirect::to(local_path(&form.return_to)).into_response()
        }
    }
}

/// `path` if it stays on this site and fits in a `Location` header, `/` otherwise
fn local_path(path: &str) -> &str {
    if path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && path.bytes().all(|b| b.is_ascii_graphic())
    {
        path
    } else {
        "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path() {
        assert_eq!(local_path("/orders"), "/orders");
        assert_eq!(local_path("/orders?menu=open"), "/orders?menu=open");
        assert_eq!(local_path(""), "/");
        assert_eq!(local_path("https://evil.example"), "/");
        assert_eq!(local_path("//evil.example"), "/");
        assert_eq!(local_path("/\\evil.example"), "/");
        assert_eq!(local_path("/orders\r\nX-Injected: 1"), "/");
        assert_eq!(local_path("/orders page"), "/");
        assert_eq!(local_path("/rapport-é"), "/");
    }

    #[test]
    fn test_sign_in_form_validation() {
        let form = SignInForm {
            email: "demo@erp.local".to_string(),
            password: "demo123".to_string(),
        };
        assert!(form.validate().is_ok());

        let form = SignInForm {
            email: "not-an-email".to_string(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(first_message(&errors), "Enter a valid email address");

        let form = SignInForm {
            email: "demo@erp.local".to_string(),
            password: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(first_message(&errors), "Enter your password");
    }
}
