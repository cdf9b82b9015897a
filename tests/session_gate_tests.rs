//! Session gate, sign-in and sign-out over HTTP

mod common;

use async_trait::async_trait;
use axum::http::{HeaderValue, StatusCode, header};
use common::*;
use erp::core::error::SessionError;
use erp::prelude::*;
use std::sync::Arc;

// =============================================================================
// Gate
// =============================================================================

mod gate_tests {
    use super::*;

    #[tokio::test]
    async fn test_loading_shows_only_the_indicator() {
        let provider = Arc::new(InMemoryAuthProvider::loading());
        let (server, _) = server_with_events(provider);

        let response = server.get("/").await;
        response.assert_status_ok();

        let html = response.text();
        assert!(has_loading_indicator(&html));
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(!has_sign_in_form(&html));
        assert!(!has_layout(&html));
    }

    #[tokio::test]
    async fn test_loading_finishes_into_sign_in_form() {
        let provider = Arc::new(InMemoryAuthProvider::loading());
        let (server, _) = server_with_events(provider.clone());

        provider
            .finish_loading(&DashboardConfig::default_config().accounts)
            .await;

        let html = server.get("/orders").await.text();
        assert!(has_sign_in_form(&html));
        assert!(!has_layout(&html));
        assert!(!has_loading_indicator(&html));
    }

    #[tokio::test]
    async fn test_no_identity_shows_sign_in_form_on_every_path() {
        let server = demo_server();

        for path in ["/", "/invoices", "/settings", "/reports"] {
            let html = server.get(path).await.text();
            assert!(has_sign_in_form(&html), "path {}", path);
            assert!(!has_layout(&html), "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthenticated() {
        let server = demo_server();

        let html = get_with_cookie(&server, "/", "erp_session=not-a-session").await.text();
        assert!(has_sign_in_form(&html));
    }

    #[tokio::test]
    async fn test_identity_shows_layout_and_greeting() {
        let server = demo_server();
        let cookie = sign_in(&server, DEMO_EMAIL, DEMO_PASSWORD).await;

        let html = get_with_cookie(&server, "/", &cookie).await.text();
        assert!(has_layout(&html));
        assert!(!has_sign_in_form(&html));
        assert!(html.contains("Welcome back, Demo User"));
        assert!(html.contains(DEMO_EMAIL));
    }
}

// =============================================================================
// Sign-in
// =============================================================================

mod sign_in_tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_sets_cookie_and_redirects_home() {
        let server = demo_server();

        let response = server
            .post("/auth/sign-in")
            .form(&[("email", DEMO_EMAIL), ("password", DEMO_PASSWORD)])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let cookie = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with("erp_session="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[tokio::test]
    async fn test_email_is_case_insensitive() {
        let server = demo_server();
        let cookie = sign_in(&server, "Demo@ERP.local", DEMO_PASSWORD).await;

        let html = get_with_cookie(&server, "/", &cookie).await.text();
        assert!(has_layout(&html));
    }

    #[tokio::test]
    async fn test_wrong_password_rerenders_form_with_401() {
        let server = demo_server();

        let response = server
            .post("/auth/sign-in")
            .form(&[("email", DEMO_EMAIL), ("password", "wrong")])
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let html = response.text();
        assert!(has_sign_in_form(&html));
        assert!(html.contains("Invalid email or password"));
        assert!(html.contains("value=\"demo@erp.local\""));
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_invalid_form_rerenders_with_422() {
        let server = demo_server();

        let response = server
            .post("/auth/sign-in")
            .form(&[("email", "not-an-email"), ("password", "")])
            .await;

        assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.text().contains("Enter a valid email address"));
    }

    #[tokio::test]
    async fn test_sign_in_while_loading_is_503() {
        let (server, _) = server_with_events(Arc::new(InMemoryAuthProvider::loading()));

        let response = server
            .post("/auth/sign-in")
            .form(&[("email", DEMO_EMAIL), ("password", DEMO_PASSWORD)])
            .await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_sign_in_publishes_event() {
        let provider = Arc::new(InMemoryAuthProvider::new(
            &DashboardConfig::default_config().accounts,
        ));
        let (server, bus) = server_with_events(provider);
        let mut rx = bus.subscribe();

        sign_in(&server, DEMO_EMAIL, DEMO_PASSWORD).await;

        let envelope = rx.try_recv().unwrap();
        assert_eq!(envelope.event.action(), "signed_in");
        match envelope.event {
            SessionEvent::SignedIn { email, .. } => assert_eq!(email, DEMO_EMAIL),
            other => panic!("unexpected event {:?}", other),
        }
    }
}

// =============================================================================
// Sign-out
// =============================================================================

mod sign_out_tests {
    use super::*;

    /// Resolves and signs in like the demo provider, but cannot end sessions
    struct BrokenSignOut {
        inner: InMemoryAuthProvider,
    }

    #[async_trait]
    impl AuthProvider for BrokenSignOut {
        async fn resolve(&self, token: Option<&str>) -> Result<SessionState, SessionError> {
            self.inner.resolve(token).await
        }

        async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, SessionError> {
            self.inner.sign_in(email, password).await
        }

        async fn sign_out(&self, _token: &str) -> Result<(), SessionError> {
            Err(SessionError::Backend {
                message: "connection reset".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_sign_out_clears_session() {
        let provider = Arc::new(InMemoryAuthProvider::new(
            &DashboardConfig::default_config().accounts,
        ));
        let (server, bus) = server_with_events(provider.clone());
        let cookie = sign_in(&server, DEMO_EMAIL, DEMO_PASSWORD).await;
        let mut rx = bus.subscribe();

        let response = server
            .post("/auth/sign-out")
            .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
            .form(&[("return_to", "/orders")])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        let cleared = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cleared.contains("Max-Age=0"));

        assert_eq!(provider.active_sessions().await, 0);
        assert_eq!(rx.try_recv().unwrap().event.action(), "signed_out");

        let html = get_with_cookie(&server, "/", &cookie).await.text();
        assert!(has_sign_in_form(&html));
    }

    #[tokio::test]
    async fn test_sign_out_failure_keeps_app_mounted() {
        let provider = Arc::new(BrokenSignOut {
            inner: InMemoryAuthProvider::new(&DashboardConfig::default_config().accounts),
        });
        let (server, bus) = server_with_events(provider);
        let cookie = sign_in(&server, DEMO_EMAIL, DEMO_PASSWORD).await;
        let mut rx = bus.subscribe();

        let response = server
            .post("/auth/sign-out")
            .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
            .form(&[("return_to", "/orders")])
            .await;

        // The failure is absorbed: back to the page, cookie untouched.
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/orders");
        assert!(response.headers().get(header::SET_COOKIE).is_none());

        let envelope = rx.try_recv().unwrap();
        match envelope.event {
            SessionEvent::SignOutFailed { user_id, message } => {
                assert!(user_id.is_some());
                assert!(message.contains("connection reset"));
            }
            other => panic!("unexpected event {:?}", other),
        }

        let html = get_with_cookie(&server, "/orders", &cookie).await.text();
        assert!(has_layout(&html));
        assert!(html.contains("id=\"orders\""));
    }

    #[tokio::test]
    async fn test_sign_out_failure_ignores_foreign_return_path() {
        let provider = Arc::new(BrokenSignOut {
            inner: InMemoryAuthProvider::new(&DashboardConfig::default_config().accounts),
        });
        let (server, _) = server_with_events(provider);
        let cookie = sign_in(&server, DEMO_EMAIL, DEMO_PASSWORD).await;

        let response = server
            .post("/auth/sign-out")
            .add_header(header::COOKIE, HeaderValue::from_str(&cookie).unwrap())
            .form(&[("return_to", "https://evil.example/")])
            .await;

        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_sign_out_failure_with_unprintable_return_path_redirects_home() {
        let server = demo_server();

        // Unknown token, so the provider refuses to end the session.
        let response = server
            .post("/auth/sign-out")
            .add_header(header::COOKIE, HeaderValue::from_static("erp_session=stale"))
            .form(&[("return_to", "/orders\r\nX-Injected: 1")])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
        assert!(response.headers().get("x-injected").is_none());

        let html = server.get("/").await.text();
        assert!(has_sign_in_form(&html));
    }

    #[tokio::test]
    async fn test_sign_out_without_session_redirects_home() {
        let server = demo_server();

        let response = server
            .post("/auth/sign-out")
            .form(&[("return_to", "/invoices")])
            .await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }
}
