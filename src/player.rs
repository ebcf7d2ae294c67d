//! The attack-decision capability implemented by each side.

use crate::attack::{Attack, AttackOutcome};
use crate::common::GameError;
use crate::tracking::TrackingGrid;

/// Interface implemented by the two attack sources: a human-supplied
/// coordinate queue and the machine's targeting AI. The match selects one
/// per side at construction time.
pub trait Player {
    /// Produce the next attack given this side's view of the opponent.
    fn make_attack(&mut self, view: &TrackingGrid) -> Result<Attack, GameError>;

    /// Report the outcome of this side's own attack. `view` already
    /// reflects the attack's resolved cells.
    fn handle_attack_outcome(&mut self, _outcome: &AttackOutcome, _view: &TrackingGrid) {}
}
