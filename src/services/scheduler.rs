//! Deterministic load scheduler: a virtual clock plus a queue of pending
//! load completions.
//!
//! Nothing here touches the wall clock or spawns threads — time only moves
//! when `advance` is called, so tests fire timers deterministically instead
//! of sleeping.

use crate::types::tab::TabId;

/// A deferred load completion, delivered once the virtual clock passes its
/// due time. The generation ties the completion to the navigation that
/// scheduled it; the controller discards mismatches as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadCompletion {
    pub tab_id: TabId,
    pub generation: u64,
}

#[derive(Debug)]
struct PendingLoad {
    due_ms: u64,
    seq: u64,
    completion: LoadCompletion,
}

/// Virtual-clock one-shot timer queue.
#[derive(Debug, Default)]
pub struct LoadScheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingLoad>,
}

impl LoadScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Schedules a completion `delay_ms` from now. Entries are never
    /// cancelled here; superseded or closed-tab completions are filtered at
    /// fire time by the controller's generation check.
    pub fn schedule(&mut self, delay_ms: u64, completion: LoadCompletion) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(PendingLoad {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            completion,
        });
    }

    /// Moves the clock forward by `ms` and returns every completion that
    /// came due, ordered by (due time, scheduling order).
    pub fn advance(&mut self, ms: u64) -> Vec<LoadCompletion> {
        self.now_ms = self.now_ms.saturating_add(ms);
        let now = self.now_ms;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_ms <= now {
                due.push(self.pending.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.completion).collect()
    }
}
