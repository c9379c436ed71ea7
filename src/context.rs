//! The shared theme state holder.
//!
//! A [`ThemeContext`] is created once at application start, owned by the
//! application state and handed by reference to every rendering surface that
//! needs theme awareness. Surfaces either read [`ThemeContext::mode`] each frame or
//! subscribe for change notifications.
//!
//! Persistence is best effort. When the store fails the context logs a warning,
//! detaches the store and carries on in memory for the rest of the session.

use crate::mode::{Mode, ResolvedMode};
use crate::store::{PreferenceStore, StoreError};
use tracing::{debug, info, warn};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Construction options for a [`ThemeContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    /// Key the preference is stored under
    pub storage_key: String,
    /// Mode used when nothing valid is stored
    pub default_mode: Mode,
    /// Mode applied regardless of the stored preference
    pub forced_mode: Option<Mode>,
    /// When false, `system` resolves to light even if the OS preference is known
    pub enable_system: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_mode: Mode::System,
            forced_mode: None,
            enable_system: true,
        }
    }
}

/// Snapshot delivered to subscribers after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChange {
    /// The stored preference
    pub mode: Mode,
    /// The variant surfaces should render with
    pub resolved: ResolvedMode,
}

/// Identifier returned by [`ThemeContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ThemeChange)>;

/// Process-wide theme preference with persistence and change notification.
pub struct ThemeContext {
    mode: Mode,
    system_mode: Option<ResolvedMode>,
    options: ThemeOptions,
    store: Option<Box<dyn PreferenceStore>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription_id: u64,
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("mode", &self.mode)
            .field("system_mode", &self.system_mode)
            .field("options", &self.options)
            .field("persistent", &self.store.is_some())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ThemeContext {
    /// Creates a context whose initial mode is read from `store`.
    ///
    /// A missing or unparsable value falls back to `options.default_mode`. A read
    /// error also detaches the store so the session runs in memory only.
    pub fn initialize(store: Box<dyn PreferenceStore>, options: ThemeOptions) -> Self {
        let mut store = Some(store);
        let key = options.storage_key.as_str();

        let read = store.as_deref().map(|s| s.get_string(key));
        let stored = match read {
            Some(Ok(value)) => value,
            Some(Err(e)) => {
                warn!(error = %e, key, "Theme preference unreadable, continuing without persistence");
                store = None;
                None
            }
            None => None,
        };

        let mode = match stored.as_deref().map(str::parse::<Mode>) {
            Some(Ok(mode)) => {
                debug!(%mode, key, "Loaded stored theme preference");
                mode
            }
            Some(Err(e)) => {
                warn!(error = %e, key, "Ignoring invalid stored theme preference");
                options.default_mode
            }
            None => options.default_mode,
        };

        info!(%mode, persistent = store.is_some(), "Theme context initialized");

        Self {
            mode,
            system_mode: None,
            options,
            store,
            listeners: Vec::new(),
            next_subscription_id: 1,
        }
    }

    /// Creates a context with no durable storage.
    pub fn in_memory(options: ThemeOptions) -> Self {
        let mode = options.default_mode;
        Self {
            mode,
            system_mode: None,
            options,
            store: None,
            listeners: Vec::new(),
            next_subscription_id: 1,
        }
    }

    // ===== Queries =====

    /// Returns the stored preference.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the variant surfaces should render with.
    pub fn resolved(&self) -> ResolvedMode {
        let effective = self.options.forced_mode.unwrap_or(self.mode);
        let hint = if self.options.enable_system {
            self.system_mode
        } else {
            None
        };
        effective.resolve(hint)
    }

    pub fn forced_mode(&self) -> Option<Mode> {
        self.options.forced_mode
    }

    /// Whether a durable store is still attached.
    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub fn snapshot(&self) -> ThemeChange {
        ThemeChange {
            mode: self.mode,
            resolved: self.resolved(),
        }
    }

    // ===== Mutations =====

    /// Replaces the preference, persists it and notifies subscribers.
    ///
    /// Setting the current value again persists but does not notify.
    pub fn set_mode(&mut self, next: Mode) {
        let previous = self.mode;
        self.mode = next;
        self.persist();

        if previous != next {
            info!(from = %previous, to = %next, "Theme mode changed");
            self.notify();
        }
    }

    /// Flips between light and dark. `system` lands on light.
    pub fn toggle(&mut self) -> Mode {
        let next = self.mode.toggled();
        self.set_mode(next);
        next
    }

    /// Records the OS preference. Subscribers are notified only when the resolved
    /// variant changes as a result.
    pub fn set_system_mode(&mut self, system_mode: Option<ResolvedMode>) {
        if self.system_mode == system_mode {
            return;
        }
        let before = self.resolved();
        self.system_mode = system_mode;
        debug!(?system_mode, "System theme preference observed");

        if self.resolved() != before {
            self.notify();
        }
    }

    // ===== Subscriptions =====

    /// Registers a listener called after every change, in registration order.
    ///
    /// Listeners must not hold on to the context; they receive a snapshot.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ThemeChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id.0, "Theme listener registered");
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(subscription = id.0, "Theme listener removed");
        }
        removed
    }

    fn notify(&mut self) {
        let change = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };

        let key = self.options.storage_key.as_str();
        let result: Result<(), StoreError> = store
            .set_string(key, self.mode.as_str().to_string())
            .and_then(|()| store.flush());

        if let Err(e) = result {
            warn!(error = %e, key, "Theme preference could not be saved, continuing in memory");
            self.store = None;
        }
    }
}
