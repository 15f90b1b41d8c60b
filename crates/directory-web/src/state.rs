//! Application state management

use crate::api_client::ApiClient;
use crate::store::{JsonFilePreferences, PreferenceStore, SessionRegistry};
use directory_core::{Config, Error, Result};
use directory_query::{IncrementalCursor, Paginator};
use std::sync::Arc;

/// Application state holding configuration, clients and sessions
#[derive(Debug)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// Client for the remote directory API
    pub api_client: ApiClient,
    /// Live browser sessions
    pub sessions: SessionRegistry,
    /// Listing page windowing
    pub listing_pages: Paginator,
    /// Listing incremental cursor at its initial position
    pub listing_batch: IncrementalCursor,
    /// Dashboard catalog windowing, `None` when pagination is disabled
    pub catalog_pages: Option<Paginator>,
}

impl AppState {
    /// Create state with the file-backed preference store from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file cannot be read or the
    /// configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let preferences = JsonFilePreferences::open(&config.storage.preferences_path)
            .map_err(|e| Error::Configuration {
                message: format!(
                    "cannot open preferences at {}: {e}",
                    config.storage.preferences_path.display()
                ),
            })?;
        Self::with_preferences(config, Arc::new(preferences))
    }

    /// Create state over an explicit preference store
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be built.
    pub fn with_preferences(config: Config, preferences: Arc<dyn PreferenceStore>) -> Result<Self> {
        config.validate()?;

        let api_client = ApiClient::new(&config.remote_api).map_err(|e| Error::Configuration {
            message: e.to_string(),
        })?;
        let listing_pages =
            Paginator::new(config.listing.page_size).map_err(|e| invalid("listing.page_size", &e))?;
        let listing_batch = IncrementalCursor::with_batch(config.listing.incremental_batch)
            .map_err(|e| invalid("listing.incremental_batch", &e))?;
        let catalog_pages = match config.dashboard.category_page_size {
            0 => None,
            size => Some(Paginator::new(size).map_err(|e| invalid("dashboard.category_page_size", &e))?),
        };

        let sessions = SessionRegistry::with_retention(preferences, &config.sessions);

        Ok(Self {
            config,
            api_client,
            sessions,
            listing_pages,
            listing_batch,
            catalog_pages,
        })
    }
}

fn invalid(field: &str, err: &impl std::fmt::Display) -> Error {
    Error::Validation {
        field: field.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used, clippy::field_reassign_with_default)]
mod tests {
    use super::*;
    use crate::store::MemoryPreferences;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_builds_state() {
        let state = AppState::with_preferences(Config::default(), Arc::new(MemoryPreferences::new())).unwrap();

        assert_eq!(state.listing_pages.page_size(), 10);
        assert_eq!(state.listing_batch.visible(), 20);
        assert_eq!(state.catalog_pages.map(|p| p.page_size()), Some(6));
        assert!(state.sessions.is_empty());
        assert_eq!(state.api_client.base_url(), "https://dummyjson.com");
    }

    #[test]
    fn test_zero_catalog_page_size_disables_pagination() {
        let mut config = Config::default();
        config.dashboard.category_page_size = 0;

        let state = AppState::with_preferences(config, Arc::new(MemoryPreferences::new())).unwrap();
        assert!(state.catalog_pages.is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.listing.page_size = 0;

        let err = AppState::with_preferences(config, Arc::new(MemoryPreferences::new())).unwrap_err();
        assert!(err.to_string().contains("listing.page_size"));
    }
}
