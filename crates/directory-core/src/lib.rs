//! Core types and utilities for the employee directory

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{Config, LoggingConfig, SessionConfig};
pub use error::{Error, Result};
pub use types::{Address, Company, Department, Employee, EmployeeId, EmployeePage, Slug, Theme};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level. The format is JSON
/// unless `logging.format` is `text`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if logging.format.eq_ignore_ascii_case("text") {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    };

    installed.map_err(|e| Error::Configuration {
        message: format!("failed to install logging subscriber: {e}"),
    })
}
