//! Session middleware binding each request to its UI state

use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Cookie carrying the session identifier
pub const SESSION_COOKIE: &str = "directory_session";

/// Resolve the session from the cookie and expose it as a request extension
///
/// New sessions get a fresh cookie on the response. Health probes bypass
/// the middleware so they never open sessions.
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    if request.uri().path().starts_with("/health") {
        return next.run(request).await;
    }

    let requested = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());
    let (session, created) = state.sessions.open(requested);
    let id = session.id();

    request.extensions_mut().insert(session);
    let response = next.run(request).await;

    if created {
        debug!("Issuing session cookie {}", id);
        (jar.add(session_cookie(id)), response).into_response()
    } else {
        response
    }
}

fn session_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::days(365))
        .build()
}
