use serde::{Deserialize, Serialize};

use crate::types::tab::{Tab, TabId};

/// Read-only copy of a single tab's state.
///
/// Snapshots are deep copies: no component holds a live `Tab` reference
/// across a mutation, consumers re-read after each action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub url: String,
    pub title: String,
    pub history: Vec<String>,
    pub history_index: usize,
    pub loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl From<&Tab> for TabSnapshot {
    fn from(tab: &Tab) -> Self {
        Self {
            id: tab.id,
            url: tab.url.clone(),
            title: tab.title.clone(),
            history: tab.history.entries().to_vec(),
            history_index: tab.history.index(),
            loading: tab.loading,
            can_go_back: tab.history.can_go_back(),
            can_go_forward: tab.history.can_go_forward(),
        }
    }
}

/// Read-only state dump of a whole session, for rendering and tests.
///
/// Tabs appear in display order. `active_tab_id` always resolves to exactly
/// one entry of `tabs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tabs: Vec<TabSnapshot>,
    pub active_tab_id: TabId,
    pub now_ms: u64,
}

impl SessionSnapshot {
    /// Convenience lookup by tab id.
    pub fn tab(&self, id: TabId) -> Option<&TabSnapshot> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// The snapshot of the active tab.
    pub fn active_tab(&self) -> Option<&TabSnapshot> {
        self.tab(self.active_tab_id)
    }
}
