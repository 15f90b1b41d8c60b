//! Route definitions for the web interface

use crate::{
    handlers::{dashboard, employees, health, not_found, session},
    state::AppState,
};
use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use std::sync::Arc;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        // Dashboard
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/random-employee", get(dashboard::random_employee))
        .route("/dashboard/department", post(dashboard::select_department))
        // Employees
        .route("/employees", get(employees::list_employees))
        .route("/employees/department", post(employees::select_department))
        .route("/employees/:id", get(employees::employee_detail))
        .route(
            "/employees/:id/edit",
            get(employees::edit_employee_form).post(employees::submit_employee_edit),
        )
        .route("/employees/:id/delete", post(employees::delete_employee))
        // Session
        .route("/login", get(session::login_page))
        .route("/session/login", post(session::login))
        .route("/session/logout", post(session::logout))
        .route("/session/theme", post(session::toggle_theme))
        // Health check
        .route("/health", get(health::health_check))
        .fallback(not_found)
}
