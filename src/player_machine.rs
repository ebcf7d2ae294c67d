//! Machine-controlled attack source.

use crate::ai::TargetingAi;
use crate::attack::{Attack, AttackKind, AttackOutcome};
use crate::common::GameError;
use crate::player::Player;
use crate::tracking::TrackingGrid;

/// Attack source driven by the hunt/target AI. Fires point shots only.
#[derive(Debug, Default)]
pub struct MachinePlayer {
    ai: TargetingAi,
}

impl MachinePlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ai(&self) -> &TargetingAi {
        &self.ai
    }

    /// Forget all search state, e.g. for a rematch.
    pub fn reset(&mut self) {
        self.ai.reset();
    }
}

impl Player for MachinePlayer {
    fn make_attack(&mut self, view: &TrackingGrid) -> Result<Attack, GameError> {
        let (row, col) = self.ai.choose_next_cell(view);
        Ok(Attack::new(AttackKind::Point, row, col))
    }

    fn handle_attack_outcome(&mut self, outcome: &AttackOutcome, view: &TrackingGrid) {
        for ((row, col), cell) in outcome.cells() {
            self.ai.observe((*row, *col), *cell, view);
        }
    }
}
