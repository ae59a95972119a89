use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::history::HistoryStack;

/// Title given to freshly created tabs before their first navigation settles.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// Unique tab identifier.
///
/// Ids are integers, unique among currently-open tabs: a fresh id is
/// `max(existing ids) + 1`, and the id space resets to the initial id when
/// closing the last tab resets the registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A browser tab with its navigation state.
///
/// `url` mirrors `history.current()` at rest; the `about:invalid` error
/// display is the one sanctioned divergence (failed input is never recorded
/// in history). `pending_load` carries the generation of the most recently
/// scheduled load completion so stale completions can be detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
    pub title: String,
    pub history: HistoryStack,
    pub loading: bool,
    pub pending_load: Option<u64>,
}

impl Tab {
    /// Creates a tab at `url` with a single-entry history.
    pub fn new(id: TabId, url: &str) -> Self {
        Self {
            id,
            url: url.to_string(),
            title: NEW_TAB_TITLE.to_string(),
            history: HistoryStack::new(url),
            loading: false,
            pending_load: None,
        }
    }
}
