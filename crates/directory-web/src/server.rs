//! Web server setup and configuration

use crate::{middleware::session_middleware, routes::build_routes, state::AppState};
use axum::{Router, middleware::from_fn_with_state};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::info;

/// Periodically drop sessions that outlived the idle timeout
#[must_use]
pub fn spawn_session_sweeper(state: Arc<AppState>) -> JoinHandle<()> {
    let period = Duration::from_secs(state.config.sessions.sweep_interval_secs.max(1));
    info!("Sweeping idle sessions every {:?}", period);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            state.sessions.evict_idle(Instant::now());
        }
    })
}

/// Build the application around prepared state
pub fn build_app_with_state(state: Arc<AppState>) -> Router {
    build_routes()
        .layer(from_fn_with_state(Arc::clone(&state), session_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
