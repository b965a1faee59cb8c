//! Resolving, applying, persisting and toggling the display mode.

use log::{debug, warn};

use super::detect::detect_system_preference;
use super::marker::{DocumentRoot, MarkerStyle};
use super::mode::ThemeMode;
use crate::config::PreferenceConfig;
use crate::storage::{PreferenceStore, StorageError};

type Listener = Box<dyn FnMut(ThemeMode)>;

/// Owns the page's display mode.
///
/// The live mode is held by the [`DocumentRoot`] marker; the store holds the
/// persisted copy. Every public mutator ([`initialize`](Self::initialize),
/// [`set_mode`](Self::set_mode), [`toggle`](Self::toggle)) applies and then
/// persists, so the two always agree unless the store is unavailable. In that
/// case the session keeps working and only cross-session persistence is lost.
///
/// Storage failures are never returned to the caller. Reads fall through to
/// the next precedence tier and writes become no-ops, both with a log line.
///
/// # Example
///
/// ```rust
/// use portfolio::{MarkerStyle, MemoryStore, PreferenceConfig, ThemeMode, ThemePreference};
///
/// let store = MemoryStore::with_item("theme", "dark");
/// let mut pref = ThemePreference::new(store, PreferenceConfig::default(), MarkerStyle::DarkClass);
///
/// assert_eq!(pref.initialize(), ThemeMode::Dark);
/// assert_eq!(pref.root().toggle_glyph(), "🌞");
///
/// assert_eq!(pref.toggle(), ThemeMode::Light);
/// assert_eq!(pref.persisted_mode().unwrap(), Some(ThemeMode::Light));
/// ```
pub struct ThemePreference<S> {
    store: S,
    config: PreferenceConfig,
    root: DocumentRoot,
    listeners: Vec<Listener>,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Creates a preference over `store`. The root starts without a marker
    /// until [`initialize`](Self::initialize) runs.
    pub fn new(store: S, config: PreferenceConfig, marker: MarkerStyle) -> Self {
        Self {
            store,
            config,
            root: DocumentRoot::new(marker),
            listeners: Vec::new(),
        }
    }

    /// Determines the mode to start with.
    ///
    /// Precedence, highest first: a valid persisted choice, the system
    /// color-scheme preference, the configured default. Nothing is written.
    pub fn resolve_initial_mode(&self) -> ThemeMode {
        match self.store.get_item(&self.config.storage_key) {
            Ok(Some(stored)) => match stored.parse::<ThemeMode>() {
                Ok(mode) => {
                    debug!("using persisted theme {mode}");
                    return mode;
                }
                Err(e) => debug!("ignoring persisted value: {e}"),
            },
            Ok(None) => debug!("no persisted theme under {:?}", self.config.storage_key),
            Err(e) => warn!("could not read theme preference: {e}"),
        }

        if let Some(mode) = detect_system_preference() {
            debug!("using system color scheme {mode}");
            return mode;
        }

        debug!("using default theme {}", self.config.default_mode);
        self.config.default_mode
    }

    /// Sets the root marker and toggle glyph for `mode` and notifies
    /// listeners. Does not persist; callers pair it with [`persist`](Self::persist).
    fn apply_mode(&mut self, mode: ThemeMode) {
        self.root.set_mode(mode);
        for listener in &mut self.listeners {
            listener(mode);
        }
    }

    /// Writes `mode` to the store. Failures are logged and dropped.
    fn persist(&mut self, mode: ThemeMode) {
        if let Err(e) = self.store.set_item(&self.config.storage_key, mode.as_str()) {
            warn!("could not persist theme {mode}: {e}");
        }
    }

    /// Flips the live mode, applies and persists it, and returns it.
    ///
    /// The current mode is read from the root marker rather than the store,
    /// so an unavailable store cannot make the toggle drift.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.root.mode().opposite();
        self.apply_mode(next);
        self.persist(next);
        next
    }

    /// Page-load entry point: resolve, apply and persist the initial mode.
    pub fn initialize(&mut self) -> ThemeMode {
        let mode = self.resolve_initial_mode();
        self.set_mode(mode);
        mode
    }

    /// Applies and persists an explicit mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.apply_mode(mode);
        self.persist(mode);
    }

    /// Removes the persisted choice so the next load falls back to the
    /// system preference. Failures are logged and dropped.
    pub fn clear_persisted(&mut self) {
        if let Err(e) = self.store.remove_item(&self.config.storage_key) {
            warn!("could not clear theme preference: {e}");
        }
    }

    /// Reads the persisted choice. Invalid values read as `None`.
    pub fn persisted_mode(&self) -> Result<Option<ThemeMode>, StorageError> {
        Ok(self
            .store
            .get_item(&self.config.storage_key)?
            .and_then(|value| value.parse().ok()))
    }

    /// Registers a listener called with the new mode after every apply.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// The live mode, read from the root marker.
    pub fn mode(&self) -> ThemeMode {
        self.root.mode()
    }

    pub fn root(&self) -> &DocumentRoot {
        &self.root
    }

    pub fn config(&self) -> &PreferenceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the preference and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S> std::fmt::Debug for ThemePreference<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("config", &self.config)
            .field("root", &self.root)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
