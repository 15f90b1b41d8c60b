//! Browser sessions and their resident directory snapshots

use crate::store::preferences::PreferenceStore;
use crate::store::ui_state::UiStore;
use dashmap::DashMap;
use directory_core::{Department, SessionConfig};
use directory_query::{Directory, FilteredView, ViewMemo, ViewQuery};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

/// Everything the server keeps for one browser session
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    store: UiStore,
    catalog: Mutex<Vec<Department>>,
    directory: Mutex<Option<Directory>>,
    memo: Mutex<ViewMemo>,
    flash: Mutex<Option<String>>,
    last_seen: Mutex<Instant>,
}

impl Session {
    fn new(id: Uuid, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            id,
            store: UiStore::open(id.to_string(), preferences),
            catalog: Mutex::new(Vec::new()),
            directory: Mutex::new(None),
            memo: Mutex::new(ViewMemo::new()),
            flash: Mutex::new(None),
            last_seen: Mutex::new(Instant::now()),
        }
    }

    fn touch(&self, now: Instant) {
        *self.last_seen.lock() = now;
    }

    /// When the session last served a request
    #[must_use]
    pub fn last_seen(&self) -> Instant {
        *self.last_seen.lock()
    }

    /// Session identifier carried by the cookie
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Shared UI state
    #[must_use]
    pub const fn store(&self) -> &UiStore {
        &self.store
    }

    /// Record a freshly fetched catalog and drop a selection it no longer contains
    pub fn replace_catalog(&self, catalog: Vec<Department>) {
        self.store.reconcile_department(&catalog);
        *self.catalog.lock() = catalog;
    }

    /// Whether `slug` is in the last fetched catalog
    #[must_use]
    pub fn knows_department(&self, slug: &str) -> bool {
        self.catalog.lock().iter().any(|d| d.slug == slug)
    }

    /// Resident directory snapshot, if one was loaded
    #[must_use]
    pub fn directory(&self) -> Option<Directory> {
        self.directory.lock().clone()
    }

    /// Replace the resident directory snapshot
    pub fn replace_directory(&self, directory: Directory) {
        *self.directory.lock() = Some(directory);
    }

    /// Filtered view of `directory`, memoized across requests
    pub fn view(&self, directory: &Directory, query: &ViewQuery) -> FilteredView {
        self.memo.lock().view(directory, query)
    }

    /// Number of views actually computed for this session
    #[must_use]
    pub fn view_recomputations(&self) -> u64 {
        self.memo.lock().recomputations()
    }

    /// Queue a one-shot acknowledgement for the next page
    pub fn set_flash(&self, message: impl Into<String>) {
        *self.flash.lock() = Some(message.into());
    }

    /// Take the pending acknowledgement, if any
    #[must_use]
    pub fn take_flash(&self) -> Option<String> {
        self.flash.lock().take()
    }
}

/// All live sessions keyed by cookie value
///
/// Sessions idle longer than the configured timeout are dropped by
/// [`SessionRegistry::evict_idle`], and the registry never holds more than
/// `max_sessions`. A dropped session loses its snapshot and login name; its
/// theme is persisted and comes back when the cookie returns.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: DashMap<Uuid, Arc<Session>>,
    preferences: Arc<dyn PreferenceStore>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    /// Create an empty registry over `preferences` with default retention
    #[must_use]
    pub fn new(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self::with_retention(preferences, &SessionConfig::default())
    }

    /// Create an empty registry with explicit retention limits
    #[must_use]
    pub fn with_retention(preferences: Arc<dyn PreferenceStore>, retention: &SessionConfig) -> Self {
        Self {
            sessions: DashMap::new(),
            preferences,
            idle_timeout: Duration::from_secs(retention.idle_timeout_secs),
            max_sessions: retention.max_sessions.max(1),
        }
    }

    /// Session for `requested`, creating it when unknown
    ///
    /// A known identifier that is not resident (for example after a restart
    /// or an eviction) is reopened under the same identifier so its persisted
    /// preferences apply. The flag is `true` when the session was created by
    /// this call.
    pub fn open(&self, requested: Option<Uuid>) -> (Arc<Session>, bool) {
        let now = Instant::now();
        if let Some(id) = requested
            && let Some(session) = self.sessions.get(&id)
        {
            session.touch(now);
            return (Arc::clone(session.value()), false);
        }

        if self.sessions.len() >= self.max_sessions {
            self.make_room(now);
        }

        let id = requested.unwrap_or_else(Uuid::new_v4);
        let entry = self.sessions.entry(id).or_insert_with(|| {
            info!("Opening session {}", id);
            Arc::new(Session::new(id, Arc::clone(&self.preferences)))
        });
        entry.touch(now);
        (Arc::clone(entry.value()), true)
    }

    /// Drop every session idle for longer than the timeout as of `now`
    ///
    /// Returns the number of sessions removed.
    pub fn evict_idle(&self, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| now.saturating_duration_since(session.last_seen()) <= self.idle_timeout);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            debug!("Evicted {} idle sessions", evicted);
        }
        evicted
    }

    /// Free one slot: idle sessions first, then the least recently seen
    fn make_room(&self, now: Instant) {
        if self.evict_idle(now) > 0 {
            return;
        }
        let oldest = self
            .sessions
            .iter()
            .min_by_key(|entry| entry.value().last_seen())
            .map(|entry| *entry.key());
        if let Some(id) = oldest {
            self.sessions.remove(&id);
            debug!("Session limit reached, evicted {}", id);
        }
    }

    /// Number of resident sessions
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is resident
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::store::preferences::MemoryPreferences;
    use directory_core::{Employee, Theme};
    use pretty_assertions::assert_eq;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(Arc::new(MemoryPreferences::new()))
    }

    fn department(slug: &str) -> Department {
        Department {
            slug: slug.to_string(),
            ..Department::default()
        }
    }

    #[test]
    fn test_open_without_cookie_creates_session() {
        let registry = registry();
        let (session, created) = registry.open(None);

        assert!(created);
        assert_eq!(registry.len(), 1);

        let (again, created) = registry.open(Some(session.id()));
        assert!(!created);
        assert!(Arc::ptr_eq(&session, &again));
    }

    #[test]
    fn test_unknown_cookie_reopens_with_persisted_theme() {
        let preferences: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferences::new());
        let id = Uuid::new_v4();

        let before_restart = SessionRegistry::new(Arc::clone(&preferences));
        let (session, _) = before_restart.open(Some(id));
        session.store().set_theme(Theme::Dark);

        let after_restart = SessionRegistry::new(preferences);
        let (session, created) = after_restart.open(Some(id));
        assert!(created);
        assert_eq!(session.id(), id);
        assert_eq!(session.store().snapshot().theme, Theme::Dark);
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let registry = registry();
        let (stale, _) = registry.open(None);
        let (fresh, _) = registry.open(None);
        let later = Instant::now() + Duration::from_secs(3600);
        fresh.touch(later);

        assert_eq!(registry.evict_idle(later), 1);
        assert_eq!(registry.len(), 1);

        let (kept, created) = registry.open(Some(fresh.id()));
        assert!(!created);
        assert!(Arc::ptr_eq(&kept, &fresh));
        let (_, created) = registry.open(Some(stale.id()));
        assert!(created);
    }

    #[test]
    fn test_recent_sessions_survive_sweep() {
        let registry = registry();
        registry.open(None);
        registry.open(None);

        assert_eq!(registry.evict_idle(Instant::now()), 0);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_cookieless_requests_are_capped() {
        let retention = SessionConfig {
            max_sessions: 3,
            ..SessionConfig::default()
        };
        let registry = SessionRegistry::with_retention(Arc::new(MemoryPreferences::new()), &retention);
        let (first, _) = registry.open(None);
        first.touch(Instant::now().checked_sub(Duration::from_secs(1)).unwrap());
        for _ in 0..10 {
            registry.open(None);
        }

        assert_eq!(registry.len(), 3);
        let (_, created) = registry.open(Some(first.id()));
        assert!(created);
    }

    #[test]
    fn test_flash_is_shown_once() {
        let (session, _) = registry().open(None);
        session.set_flash("Employee deleted");

        assert_eq!(session.take_flash().as_deref(), Some("Employee deleted"));
        assert_eq!(session.take_flash(), None);
    }

    #[test]
    fn test_replace_catalog_reconciles_selection() {
        let (session, _) = registry().open(None);
        session.replace_catalog(vec![department("a"), department("b")]);
        session.store().set_selected_department("b");
        assert!(session.knows_department("b"));

        session.replace_catalog(vec![department("a")]);
        assert!(!session.knows_department("b"));
        assert_eq!(session.store().snapshot().selected_department, "");
    }

    #[test]
    fn test_view_is_memoized_per_snapshot() {
        let (session, _) = registry().open(None);
        let directory = Directory::new(
            vec![Employee {
                id: 1,
                first_name: "Alice".to_string(),
                ..Employee::default()
            }],
            Vec::new(),
        );
        session.replace_directory(directory);

        let query = ViewQuery::new("ali", "");
        for _ in 0..3 {
            let resident = session.directory().unwrap_or_default();
            assert_eq!(session.view(&resident, &query).len(), 1);
        }
        assert_eq!(session.view_recomputations(), 1);
    }
}
