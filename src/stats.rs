#![cfg(feature = "std")]

//! Win statistics, decoupled from in-match state.
//!
//! The scoreboard is an owned handle constructed by the host and passed
//! where needed; there is no process-wide stats state.

use std::collections::HashMap;

/// Win ledger keyed by player name.
#[derive(Debug, Default, Clone)]
pub struct Scoreboard {
    wins: HashMap<String, u32>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit one win to `name`.
    pub fn record_win(&mut self, name: &str) {
        *self.wins.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Wins recorded for `name`.
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// All entries, in arbitrary order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.wins.iter().map(|(name, wins)| (name.as_str(), *wins))
    }
}
