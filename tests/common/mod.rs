//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::{TestResponse, TestServer};
use erp::prelude::*;
use std::sync::Arc;

pub const DEMO_EMAIL: &str = "demo@erp.local";
pub const DEMO_PASSWORD: &str = "demo123";

/// Server over the demo configuration with the default provider
pub fn demo_server() -> TestServer {
    let app = ServerBuilder::new()
        .with_config(DashboardConfig::default_config())
        .build()
        .expect("Failed to build app");
    TestServer::new(app)
}

/// Server plus a handle to its event bus
pub fn server_with_events(provider: Arc<dyn AuthProvider>) -> (TestServer, Arc<EventBus>) {
    let host = ServerBuilder::new()
        .with_config(DashboardConfig::default_config())
        .with_shared_auth_provider(provider)
        .with_event_bus(16)
        .build_host()
        .expect("Failed to build host");
    let bus = host.event_bus().cloned().expect("event bus configured");

    let app = WebExposure::build_router(Arc::new(host), vec![]).expect("Failed to build router");
    (TestServer::new(app), bus)
}

/// Sign in and return the `name=value` cookie pair to send back
pub async fn sign_in(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/auth/sign-in")
        .form(&[("email", email), ("password", password)])
        .await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("sign-in sets the session cookie")
        .to_str()
        .unwrap()
        .to_string();
    set_cookie.split(';').next().unwrap().to_string()
}

/// GET `path` carrying `cookie`
pub async fn get_with_cookie(server: &TestServer, path: &str, cookie: &str) -> TestResponse {
    server
        .get(path)
        .add_header(header::COOKIE, HeaderValue::from_str(cookie).unwrap())
        .await
}

pub fn location(response: &TestResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect has a location")
        .to_str()
        .unwrap()
        .to_string()
}

/// Markers of the three mutually exclusive screens
pub fn has_layout(html: &str) -> bool {
    html.contains("id=\"side-nav\"")
}

pub fn has_sign_in_form(html: &str) -> bool {
    html.contains("id=\"sign-in\"")
}

pub fn has_loading_indicator(html: &str) -> bool {
    html.contains("id=\"loading\"")
}
