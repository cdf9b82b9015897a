//! Screens shown before the layout: loading indicator and sign-in form

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LoadingView {
    pub app_name: String,
    /// Seconds before the page reloads itself
    pub refresh_secs: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SignInView {
    pub app_name: String,
    /// Email to pre-fill after a failed attempt
    pub email: String,
    pub error: Option<String>,
}
