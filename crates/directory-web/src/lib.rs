//! Employee directory web interface
//!
//! Server-rendered pages over the remote demo API: a dashboard, a searchable
//! and filterable employee listing, and per-employee detail pages. Each
//! browser session gets its own UI state; the theme is persisted.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod components;
pub mod extractors;
pub mod handlers;
pub mod html;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

// Re-export the main functions
pub use api_client::{ApiClient, FetchError};
pub use server::{build_app_with_state, spawn_session_sweeper};
pub use state::AppState;
