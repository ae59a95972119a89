//! Session façade for EmuBrowser.
//!
//! `BrowserSession` wires the tab registry, navigation controller, and load
//! scheduler together and exposes the engine's public surface: user
//! actions, the deterministic time hook, snapshots, and state-change
//! subscriptions.

use crate::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use crate::services::navigation::NavigationController;
use crate::services::scheduler::LoadScheduler;
use crate::types::errors::{NavigationError, TabError};
use crate::types::personality::BrowserPersonality;
use crate::types::session::{SessionSnapshot, TabSnapshot};
use crate::types::settings::SessionSettings;
use crate::types::tab::TabId;

/// Callback invoked with a fresh snapshot after every applied mutation.
pub type SnapshotListener = Box<dyn FnMut(&SessionSnapshot)>;

/// One browsing session: a set of tabs, their navigation state, and a
/// virtual clock.
///
/// Single logical thread of control: every method is one atomic transform
/// of registry state, and deferred load completions only fire inside
/// `advance_time`. Consumers never hold tab references — they observe via
/// `snapshot()` or a subscribed listener and re-read by id after each
/// action.
pub struct BrowserSession {
    registry: TabRegistry,
    controller: NavigationController,
    scheduler: LoadScheduler,
    personality: &'static BrowserPersonality,
    settings: SessionSettings,
    listeners: Vec<SnapshotListener>,
}

impl BrowserSession {
    /// Creates a session from settings.
    ///
    /// The personality key is resolved against the built-in table; an
    /// unknown key degrades to the default personality (the settings
    /// engine validates keys at write time, so a well-driven config never
    /// hits this). The home URL is the personality's unless overridden.
    pub fn new(settings: SessionSettings) -> Self {
        let personality = BrowserPersonality::by_key(&settings.personality)
            .unwrap_or_else(BrowserPersonality::default_personality);
        let home_url = settings
            .home_url_override
            .clone()
            .unwrap_or_else(|| personality.home_url.to_string());

        Self {
            registry: TabRegistry::new(&home_url),
            controller: NavigationController::from_settings(&settings, &home_url),
            scheduler: LoadScheduler::new(),
            personality,
            settings,
            listeners: Vec::new(),
        }
    }

    /// Creates a session with default settings whose single starting tab
    /// (and home) is `initial_url`.
    pub fn with_initial_url(initial_url: &str) -> Self {
        let settings = SessionSettings {
            home_url_override: Some(initial_url.to_string()),
            ..SessionSettings::default()
        };
        Self::new(settings)
    }

    pub fn personality(&self) -> &'static BrowserPersonality {
        self.personality
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn active_tab_id(&self) -> TabId {
        self.registry.active_tab_id()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Registers a listener invoked with a fresh snapshot after every
    /// applied mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Navigates a tab to raw address-bar input.
    pub fn navigate(&mut self, tab_id: TabId, text: &str) -> Result<(), NavigationError> {
        self.controller
            .navigate(&mut self.registry, &mut self.scheduler, tab_id, text)?;
        self.notify();
        Ok(())
    }

    /// Moves a tab back in history. Returns whether the move was legal;
    /// unknown tabs report `false`.
    pub fn back(&mut self, tab_id: TabId) -> bool {
        let moved = self
            .controller
            .back(&mut self.registry, &mut self.scheduler, tab_id)
            .unwrap_or(false);
        if moved {
            self.notify();
        }
        moved
    }

    /// Moves a tab forward in history. Returns whether the move was legal.
    pub fn forward(&mut self, tab_id: TabId) -> bool {
        let moved = self
            .controller
            .forward(&mut self.registry, &mut self.scheduler, tab_id)
            .unwrap_or(false);
        if moved {
            self.notify();
        }
        moved
    }

    /// Reloads a tab with the short delay; URL, history, and settled title
    /// are unchanged.
    pub fn refresh(&mut self, tab_id: TabId) -> Result<(), NavigationError> {
        self.controller
            .refresh(&mut self.registry, &mut self.scheduler, tab_id)?;
        self.notify();
        Ok(())
    }

    /// Navigates a tab to the session's home URL.
    pub fn home(&mut self, tab_id: TabId) -> Result<(), NavigationError> {
        self.controller
            .home(&mut self.registry, &mut self.scheduler, tab_id)?;
        self.notify();
        Ok(())
    }

    /// Opens a new tab at the home URL and makes it active.
    pub fn new_tab(&mut self) -> TabId {
        let url = self.controller.home_url().to_string();
        let id = self.registry.create_tab(&url);
        self.notify();
        id
    }

    /// Closes a tab. Closing the last open tab resets the session to one
    /// fresh default tab.
    pub fn close_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        self.registry.close_tab(tab_id)?;
        self.notify();
        Ok(())
    }

    /// Switches the active tab. Unknown ids are a reported no-op.
    pub fn set_active_tab(&mut self, tab_id: TabId) -> bool {
        if self.registry.set_active(tab_id).is_err() {
            return false;
        }
        self.notify();
        true
    }

    /// Advances the virtual clock, firing every load completion that comes
    /// due. Stale completions (superseded navigations, closed tabs) are
    /// discarded silently.
    pub fn advance_time(&mut self, ms: u64) {
        let completions = self.scheduler.advance(ms);
        let mut applied = false;
        for completion in completions {
            applied |= self.controller.complete_load(&mut self.registry, completion);
        }
        if applied {
            self.notify();
        }
    }

    /// Deep-copy dump of the current session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            tabs: self.registry.tabs().iter().map(TabSnapshot::from).collect(),
            active_tab_id: self.registry.active_tab_id(),
            now_ms: self.scheduler.now_ms(),
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
