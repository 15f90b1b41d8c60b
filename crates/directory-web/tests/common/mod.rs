//! Common test utilities and fixtures for integration tests

#![allow(dead_code, clippy::unwrap_used, clippy::missing_panics_doc)]

pub mod fixtures;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use directory_core::Config;
use directory_web::store::{MemoryPreferences, PreferenceStore};
use directory_web::{AppState, build_app_with_state};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;
use wiremock::MockServer;

pub use fixtures::*;

/// Application under test wired to a mock remote API
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub remote: MockServer,
}

/// Collected response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// `directory_session=<id>` pair from `Set-Cookie`, if one was issued
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with("directory_session="))
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    /// Redirect target
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

/// Configuration pointing at `remote`
pub fn test_config(remote: &MockServer) -> Config {
    let mut config = Config::default();
    config.remote_api.base_url = remote.uri();
    config.remote_api.request_timeout_secs = Some(5);
    config
}

impl TestApp {
    /// App over in-memory preferences; the caller mounts remote fixtures
    pub async fn start() -> Self {
        Self::with_preferences(Arc::new(MemoryPreferences::new())).await
    }

    /// App over `preferences`
    pub async fn with_preferences(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self::configured(preferences, |_| {}).await
    }

    /// App over in-memory preferences with `adjust` applied to the test configuration
    pub async fn with_config(adjust: impl FnOnce(&mut Config)) -> Self {
        Self::configured(Arc::new(MemoryPreferences::new()), adjust).await
    }

    async fn configured(preferences: Arc<dyn PreferenceStore>, adjust: impl FnOnce(&mut Config)) -> Self {
        let remote = MockServer::start().await;
        let mut config = test_config(&remote);
        adjust(&mut config);
        let state = Arc::new(AppState::with_preferences(config, preferences).unwrap());
        Self {
            router: build_app_with_state(Arc::clone(&state)),
            state,
            remote,
        }
    }

    /// Issue a GET, optionally with a session cookie
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    /// Issue a form POST, optionally with a session cookie
    pub async fn post_form(&self, uri: &str, cookie: Option<&str>, form: &str) -> TestResponse {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(form.to_string())).unwrap()).await
    }

    /// Open a session by loading the dashboard and return its cookie
    pub async fn open_session(&self) -> String {
        self.get("/dashboard", None).await.session_cookie().unwrap()
    }

    /// Identifier inside a `directory_session=<id>` cookie
    pub fn session_id(cookie: &str) -> Uuid {
        Uuid::parse_str(cookie.trim_start_matches("directory_session=")).unwrap()
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
