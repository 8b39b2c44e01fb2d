//! Detail Cache
//!
//! Append-only map from reference url to the fetch state of its detail
//! record. Grows monotonically within a session; a `Resolved` entry is
//! never overwritten or removed. The absence of a key means the detail
//! was never requested, which keeps "never requested", "in flight" and
//! "failed" distinguishable.

use std::collections::HashMap;

use crate::models::Pokemon;

/// Per-reference fetch state.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Request issued, response pending.
    InFlight,
    /// Detail fetch completed successfully.
    Resolved(Pokemon),
    /// Detail fetch failed; the reference stays out of derived views.
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailCache {
    entries: HashMap<String, DetailState>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch state for a reference url; `None` = never requested.
    pub fn state(&self, url: &str) -> Option<&DetailState> {
        self.entries.get(url)
    }

    /// Resolved record for a reference url, if its fetch has completed.
    pub fn record(&self, url: &str) -> Option<&Pokemon> {
        match self.entries.get(url) {
            Some(DetailState::Resolved(pokemon)) => Some(pokemon),
            _ => None,
        }
    }

    /// Claim a reference for fetching. Returns `false` when the url was
    /// already claimed (in flight, resolved, or failed), which is the
    /// duplicate-fetch guard: callers only spawn a request on `true`.
    pub fn begin_fetch(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_string(), DetailState::InFlight);
        true
    }

    /// Record a completed detail fetch. Idempotent: a previously resolved
    /// entry is kept as-is, so late duplicates cannot replace it.
    pub fn resolve(&mut self, url: String, pokemon: Pokemon) {
        match self.entries.get(&url) {
            Some(DetailState::Resolved(_)) => {}
            _ => {
                self.entries.insert(url, DetailState::Resolved(pokemon));
            }
        }
    }

    /// Record a failed detail fetch. Never downgrades a resolved entry.
    pub fn fail(&mut self, url: &str, reason: String) {
        match self.entries.get(url) {
            Some(DetailState::Resolved(_)) => {}
            _ => {
                self.entries.insert(url.to_string(), DetailState::Failed(reason));
            }
        }
    }

    /// Number of resolved records.
    pub fn resolved_count(&self) -> usize {
        self.entries
            .values()
            .filter(|s| matches!(s, DetailState::Resolved(_)))
            .count()
    }
}
