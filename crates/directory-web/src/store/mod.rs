//! Session-scoped and durable state

pub mod preferences;
pub mod sessions;
pub mod ui_state;

pub use preferences::{
    JsonFilePreferences, MemoryPreferences, PreferenceError, PreferenceStore, THEME_KEY, theme_key,
};
pub use sessions::{Session, SessionRegistry};
pub use ui_state::{UiState, UiStore};
