//! Human-controlled attack source.

use crate::arsenal::Arsenal;
use crate::attack::Attack;
use crate::common::GameError;
use crate::player::Player;
use crate::tracking::TrackingGrid;

/// Attack source fed coordinates by the presentation layer.
///
/// The presentation layer queues exactly one attack, then the session asks
/// for it on the human's turn. Asking with nothing queued is a recoverable
/// rejection.
#[derive(Debug, Default)]
pub struct HumanPlayer {
    queued: Option<Attack>,
    arsenal: Arsenal,
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next attack, replacing any previous one.
    pub fn queue_attack(&mut self, attack: Attack) {
        self.queued = Some(attack);
    }

    pub fn arsenal(&self) -> &Arsenal {
        &self.arsenal
    }

    pub fn arsenal_mut(&mut self) -> &mut Arsenal {
        &mut self.arsenal
    }
}

impl Player for HumanPlayer {
    fn make_attack(&mut self, _view: &TrackingGrid) -> Result<Attack, GameError> {
        self.queued.take().ok_or(GameError::NoAttackQueued)
    }
}
