//! Per-session UI state shared by every page

use crate::store::preferences::{PreferenceStore, theme_key};
use directory_core::{Department, Slug, Theme};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, warn};

/// Snapshot of the shared UI state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Active colour theme
    pub theme: Theme,
    /// Whether a name has been entered
    pub is_logged_in: bool,
    /// Name entered at login
    pub user_name: String,
    /// Selected department slug, empty for none
    pub selected_department: Slug,
}

/// Observable UI state for one session
///
/// Every setter publishes a new snapshot to subscribers. Only the theme is
/// persisted; it is written to the preference store on each change and read
/// back when the store is opened.
#[derive(Debug)]
pub struct UiStore {
    client_id: String,
    state: watch::Sender<UiState>,
    preferences: Arc<dyn PreferenceStore>,
}

impl UiStore {
    /// Open the store for `client_id`, restoring its persisted theme
    pub fn open(client_id: impl Into<String>, preferences: Arc<dyn PreferenceStore>) -> Self {
        let client_id = client_id.into();
        let theme = load_theme(&client_id, preferences.as_ref());
        let (state, _) = watch::channel(UiState {
            theme,
            ..UiState::default()
        });

        Self {
            client_id,
            state,
            preferences,
        }
    }

    /// Identifier the persisted values are keyed by
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Current state
    #[must_use]
    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Change the theme and persist it
    pub fn set_theme(&self, theme: Theme) {
        self.state.send_modify(|state| state.theme = theme);

        let key = theme_key(&self.client_id);
        if let Err(e) = self.preferences.set(&key, theme.as_str()) {
            error!("Failed to persist theme for {}: {}", self.client_id, e);
        }
    }

    /// Change the login flag
    pub fn set_logged_in(&self, logged_in: bool) {
        self.state.send_modify(|state| state.is_logged_in = logged_in);
    }

    /// Change the user name
    pub fn set_user_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.state.send_modify(|state| state.user_name = name);
    }

    /// Change the selected department (empty clears it)
    pub fn set_selected_department(&self, slug: impl Into<Slug>) {
        let slug = slug.into();
        self.state.send_modify(|state| state.selected_department = slug);
    }

    /// Clear the selection if `catalog` no longer contains it
    ///
    /// Returns whether the selection was cleared.
    pub fn reconcile_department(&self, catalog: &[Department]) -> bool {
        self.state.send_if_modified(|state| {
            let stale = !state.selected_department.is_empty()
                && !catalog.iter().any(|d| d.slug == state.selected_department);
            if stale {
                debug!("Clearing stale department '{}'", state.selected_department);
                state.selected_department.clear();
            }
            stale
        })
    }
}

fn load_theme(client_id: &str, preferences: &dyn PreferenceStore) -> Theme {
    match preferences.get(&theme_key(client_id)) {
        Ok(Some(value)) => value.parse().unwrap_or_else(|e| {
            warn!("Stored theme for {} is invalid ({}), using light", client_id, e);
            Theme::Light
        }),
        Ok(None) => Theme::Light,
        Err(e) => {
            error!("Failed to read theme for {}: {}", client_id, e);
            Theme::Light
        }
    }
}
