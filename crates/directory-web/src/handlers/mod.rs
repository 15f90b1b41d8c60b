//! Request handlers

pub mod dashboard;
pub mod employees;
pub mod health;
pub mod session;

use crate::pages::{render_not_found, render_page};
use crate::store::{Session, UiState};
use axum::{
    Extension,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// Render `body` inside the shell for `session`, consuming its pending flash
pub(crate) fn page(session: &Session, title: &str, uri: &Uri, body: &str) -> Html<String> {
    let flash = session.take_flash();
    Html(render_page(
        title,
        &session.store().snapshot(),
        flash.as_deref(),
        current_path(uri),
        body,
    ))
}

/// Path and query of `uri`, used as the theme toggle's return target
pub(crate) fn current_path(uri: &Uri) -> &str {
    uri.path_and_query().map_or("/", |pq| pq.as_str())
}

/// Fallback for unknown routes
pub async fn not_found(session: Option<Extension<Arc<Session>>>, uri: Uri) -> Response {
    let body = render_not_found();
    let html = match session {
        Some(Extension(session)) => page(&session, "Page Not Found", &uri, body),
        None => Html(render_page(
            "Page Not Found",
            &UiState::default(),
            None,
            current_path(&uri),
            body,
        )),
    };
    (StatusCode::NOT_FOUND, html).into_response()
}
