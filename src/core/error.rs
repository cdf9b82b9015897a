//! Typed error handling for the dashboard
//!
//! Errors are grouped by category so handlers can match on the specific
//! failure instead of a generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`SessionError`]: session resolution, sign-in and sign-out failures
//! - [`ConfigError`]: configuration parsing and validation
//! - [`RenderError`]: template rendering failures
//! - [`RequestError`]: malformed or unsupported requests
//!
//! # Example
//!
//! ```rust,ignore
//! match provider.sign_out(&token).await {
//!     Ok(()) => { /* clear cookie */ }
//!     Err(SessionError::Backend { message }) => tracing::error!(%message, "Error signing out"),
//!     Err(e) => tracing::error!(error = %e, "Error signing out"),
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::fmt;

/// The main error type of the dashboard
#[derive(Debug)]
pub enum DashboardError {
    /// Session resolution / authentication errors
    Session(SessionError),

    /// Configuration errors
    Config(ConfigError),

    /// Template rendering errors
    Render(RenderError),

    /// HTTP/Request errors
    Request(RequestError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Session(e) => write!(f, "{}", e),
            DashboardError::Config(e) => write!(f, "{}", e),
            DashboardError::Render(e) => write!(f, "{}", e),
            DashboardError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::Session(e) => Some(e),
            DashboardError::Config(e) => Some(e),
            DashboardError::Render(e) => Some(e),
            DashboardError::Request(e) => Some(e),
        }
    }
}

impl DashboardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Session(e) => e.status_code(),
            DashboardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Request(e) => e.status_code(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Session(e) => e.error_code(),
            DashboardError::Config(_) => "CONFIG_ERROR",
            DashboardError::Render(_) => "RENDER_ERROR",
            DashboardError::Request(e) => e.error_code(),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }

        let body = format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{status}</title></head>\
             <body><main class=\"error\"><h1>{status}</h1><p>{code}</p><p>{message}</p></main></body></html>",
            status = status,
            code = self.error_code(),
            message = escape_html(&self.to_string()),
        );
        (status, Html(body)).into_response()
    }
}

/// HTML escaping for text nodes and quoted attribute values
///
/// Also installed as the Tera escape function, so paths and dates keep
/// their slashes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// =============================================================================
// Session Errors
// =============================================================================

/// Errors raised by an [`AuthProvider`](crate::core::session::AuthProvider)
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Email/password pair did not match any account
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The provider has not finished resolving sessions yet
    #[error("Session resolution is still in progress")]
    NotReady,

    /// The token does not refer to an active session
    #[error("Session '{token}' is not active")]
    UnknownSession { token: String },

    /// The backing authentication service failed
    #[error("Authentication backend error: {message}")]
    Backend { message: String },
}

impl SessionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            SessionError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            SessionError::UnknownSession { .. } => StatusCode::UNAUTHORIZED,
            SessionError::Backend { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::InvalidCredentials => "INVALID_CREDENTIALS",
            SessionError::NotReady => "SESSION_NOT_READY",
            SessionError::UnknownSession { .. } => "UNKNOWN_SESSION",
            SessionError::Backend { .. } => "AUTH_BACKEND_ERROR",
        }
    }
}

impl From<SessionError> for DashboardError {
    fn from(err: SessionError) -> Self {
        DashboardError::Session(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    /// Failed to parse the configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Two demo accounts share an email
    #[error("Duplicate account email: {email}")]
    DuplicateAccount { email: String },

    /// A field holds an unusable value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        DashboardError::Config(err)
    }
}

// =============================================================================
// Render Errors
// =============================================================================

/// Errors raised while rendering a view
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template failed to parse when the renderer was built
    #[error("Failed to load template '{name}': {message}")]
    Template { name: String, message: String },

    /// Template failed to render
    #[error("Failed to render '{name}': {message}")]
    Render { name: String, message: String },
}

impl RenderError {
    /// Wrap a Tera error, flattening its source chain into the message
    pub fn from_tera(name: &str, err: &tera::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(err);
        while let Some(inner) = source {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            source = inner.source();
        }
        RenderError::Render {
            name: name.to_string(),
            message,
        }
    }
}

impl From<RenderError> for DashboardError {
    fn from(err: RenderError) -> Self {
        DashboardError::Render(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// HTTP request-level errors
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Method is not supported on page routes
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Submitted form failed validation
    #[error("Invalid form: {message}")]
    InvalidForm { message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::InvalidForm { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            RequestError::InvalidForm { .. } => "INVALID_FORM",
        }
    }
}

impl From<RequestError> for DashboardError {
    fn from(err: RequestError) -> Self {
        DashboardError::Request(err)
    }
}

/// Result type alias using DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_status_codes() {
        assert_eq!(
            DashboardError::from(SessionError::InvalidCredentials).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            DashboardError::from(SessionError::NotReady).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            DashboardError::from(SessionError::Backend {
                message: "timeout".to_string()
            })
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_error_codes() {
        let err = DashboardError::from(RequestError::MethodNotAllowed {
            method: "DELETE".to_string(),
            path: "/invoices".to_string(),
        });
        assert_eq!(err.error_code(), "METHOD_NOT_ALLOWED");
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        let err = DashboardError::from(ConfigError::DuplicateAccount {
            email: "a@b.co".to_string(),
        });
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_delegates_to_inner_error() {
        let err = DashboardError::from(SessionError::UnknownSession {
            token: "abc".to_string(),
        });
        assert_eq!(err.to_string(), "Session 'abc' is not active");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_parse_error_display() {
        let with_file = ConfigError::ParseError {
            file: Some("dashboard.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            with_file.to_string(),
            "Failed to parse config file 'dashboard.yaml': bad indent"
        );

        let without_file = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(without_file.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_into_response_escapes_message() {
        let err = DashboardError::from(RenderError::Render {
            name: "<script>".to_string(),
            message: "missing variable".to_string(),
        });
        assert!(escape_html(&err.to_string()).contains("&lt;script&gt;"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
