use crate::types::errors::TabError;
use crate::types::tab::{Tab, TabId};

/// Id assigned to the first tab, and again whenever closing the last tab
/// resets the registry.
pub const INITIAL_TAB_ID: TabId = TabId(1);

/// Trait defining the tab registry interface.
pub trait TabRegistryTrait {
    fn create_tab(&mut self, url: &str) -> TabId;
    fn close_tab(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn set_active(&mut self, tab_id: TabId) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: TabId) -> Option<&Tab>;
    fn active_tab(&self) -> Option<&Tab>;
    fn active_tab_id(&self) -> TabId;
    fn tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
}

/// In-memory registry owning every tab record.
///
/// The `Vec` is both storage and display order (tabs are never reordered).
/// Invariants: the registry is never empty, and `active_tab_id` always
/// resolves to exactly one open tab.
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active_tab_id: TabId,
    default_url: String,
}

impl TabRegistry {
    /// Creates a registry holding one fresh tab at `default_url`, which is
    /// also the URL used when closing the last tab forces a reset.
    pub fn new(default_url: &str) -> Self {
        Self {
            tabs: vec![Tab::new(INITIAL_TAB_ID, default_url)],
            active_tab_id: INITIAL_TAB_ID,
            default_url: default_url.to_string(),
        }
    }

    /// Mutable access for the navigation controller. Not part of the trait:
    /// read-side consumers go through snapshots.
    pub fn tab_mut(&mut self, tab_id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }

    fn next_id(&self) -> TabId {
        TabId(self.tabs.iter().map(|t| t.id.0).max().unwrap_or(0) + 1)
    }

    fn find_index(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl TabRegistryTrait for TabRegistry {
    /// Appends a new tab at `url` and makes it active. Returns the new id
    /// (`max(existing ids) + 1`).
    fn create_tab(&mut self, url: &str) -> TabId {
        let id = self.next_id();
        self.tabs.push(Tab::new(id, url));
        self.active_tab_id = id;
        id
    }

    /// Closes a tab.
    ///
    /// Closing the only open tab replaces the whole registry with one fresh
    /// default tab (id reset to the initial id) — the registry never holds
    /// zero tabs. Otherwise the tab is removed; if it was active, the first
    /// tab remaining in display order becomes active.
    fn close_tab(&mut self, tab_id: TabId) -> Result<(), TabError> {
        let idx = self.find_index(tab_id).ok_or(TabError::NotFound(tab_id))?;

        if self.tabs.len() == 1 {
            self.tabs.clear();
            self.tabs.push(Tab::new(INITIAL_TAB_ID, &self.default_url));
            self.active_tab_id = INITIAL_TAB_ID;
            return Ok(());
        }

        self.tabs.remove(idx);
        if self.active_tab_id == tab_id {
            self.active_tab_id = self.tabs[0].id;
        }
        Ok(())
    }

    /// Makes the given tab active. Unknown ids are reported and leave the
    /// registry untouched.
    fn set_active(&mut self, tab_id: TabId) -> Result<(), TabError> {
        if self.find_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id));
        }
        self.active_tab_id = tab_id;
        Ok(())
    }

    fn get_tab(&self, tab_id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn active_tab(&self) -> Option<&Tab> {
        self.get_tab(self.active_tab_id)
    }

    fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    /// All tabs in display order.
    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
