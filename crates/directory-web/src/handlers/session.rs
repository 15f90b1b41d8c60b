//! Login, logout and theme handlers

use super::page;
use crate::pages::render_login;
use crate::store::Session;
use axum::{
    Extension, Form,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Login form submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    /// Name to greet the user with
    pub name: String,
}

/// Theme toggle submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeToggle {
    /// Local path to return to
    pub return_to: String,
}

/// Login page
pub async fn login_page(Extension(session): Extension<Arc<Session>>, uri: Uri) -> Html<String> {
    let name = session.store().snapshot().user_name;
    page(&session, "Login", &uri, &render_login(&name, None))
}

/// Log in with a non-blank name
pub async fn login(
    Extension(session): Extension<Arc<Session>>,
    uri: Uri,
    Form(form): Form<LoginForm>,
) -> Response {
    let name = form.name.trim();
    if name.is_empty() {
        let body = render_login(&form.name, Some("Please enter your name"));
        return (StatusCode::UNPROCESSABLE_ENTITY, page(&session, "Login", &uri, &body)).into_response();
    }

    info!("Session {} logged in as {}", session.id(), name);
    session.store().set_user_name(name);
    session.store().set_logged_in(true);
    Redirect::to("/dashboard").into_response()
}

/// Log out and forget the name
pub async fn logout(Extension(session): Extension<Arc<Session>>) -> Redirect {
    session.store().set_logged_in(false);
    session.store().set_user_name(String::new());
    Redirect::to("/dashboard")
}

/// Flip the theme and go back where the toggle was pressed
pub async fn toggle_theme(
    Extension(session): Extension<Arc<Session>>,
    Form(form): Form<ThemeToggle>,
) -> Redirect {
    let theme = session.store().snapshot().theme.toggled();
    let writer = Arc::clone(&session);
    if let Err(e) = tokio::task::spawn_blocking(move || writer.store().set_theme(theme)).await {
        error!("Theme update task failed: {}", e);
    }

    Redirect::to(safe_return_path(&form.return_to))
}

/// `target` when it is a local path, otherwise the dashboard
fn safe_return_path(target: &str) -> &str {
    if target.starts_with('/') && !target.starts_with("//") && !target.contains('\\') {
        target
    } else {
        "/dashboard"
    }
}
