//! Match orchestration: two sides, turn alternation, win detection.

use alloc::string::{String, ToString};

use crate::attack::{Attack, AttackOutcome};
use crate::common::{GameError, Verdict};
use crate::grid::Grid;
use crate::tracking::TrackingGrid;

/// Identifies one of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SideId {
    Human,
    Machine,
}

impl SideId {
    pub const fn opponent(self) -> SideId {
        match self {
            SideId::Human => SideId::Machine,
            SideId::Machine => SideId::Human,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            SideId::Human => 0,
            SideId::Machine => 1,
        }
    }
}

/// One seat: its own battlefield, its view of the opponent, and its win
/// counter across rematches.
pub struct Side {
    name: String,
    wins: u32,
    board: Grid,
    tracking: TrackingGrid,
}

impl Side {
    fn new(name: &str) -> Self {
        Side {
            name: name.to_string(),
            wins: 0,
            board: Grid::new(),
            tracking: TrackingGrid::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn board(&self) -> &Grid {
        &self.board
    }

    pub fn tracking(&self) -> &TrackingGrid {
        &self.tracking
    }
}

/// A match between two sides. The human seat always opens.
///
/// Attacks are accepted only from the side holding the turn; the turn
/// passes on a Miss verdict and stays on Hit or Sunk.
pub struct Match {
    sides: [Side; 2],
    turn: SideId,
    finished: bool,
    winner: Option<SideId>,
}

impl Match {
    /// Create a match between `player_name` and the machine.
    pub fn new(player_name: &str) -> Self {
        Self::with_names(player_name, "Machine")
    }

    /// Create a match with explicit names for both seats.
    pub fn with_names(first: &str, second: &str) -> Self {
        Match {
            sides: [Side::new(first), Side::new(second)],
            turn: SideId::Human,
            finished: false,
            winner: None,
        }
    }

    pub fn side(&self, id: SideId) -> &Side {
        &self.sides[id.index()]
    }

    /// Mutable access to a side's battlefield, for fleet deployment.
    pub fn board_mut(&mut self, id: SideId) -> &mut Grid {
        &mut self.sides[id.index()].board
    }

    pub fn turn(&self) -> SideId {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn winner(&self) -> Option<SideId> {
        self.winner
    }

    /// Check that `attacker` may open an attack at (`row`, `col`) right now.
    ///
    /// Verifies, in order: the match is still running, the attacker holds
    /// the turn, the origin is on the grid, and the origin has not been
    /// resolved. Leaves all state untouched.
    pub fn validate_shot(
        &self,
        attacker: SideId,
        row: usize,
        col: usize,
    ) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::MatchFinished);
        }
        if attacker != self.turn {
            return Err(GameError::OutOfTurn);
        }
        if !Grid::in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        let target = &self.sides[attacker.opponent().index()].board;
        if !target.is_legal_shot(row, col) {
            return Err(GameError::AlreadyResolved { row, col });
        }
        Ok(())
    }

    /// Apply `attack` from `attacker` to the opponent battlefield.
    ///
    /// On success the outcome is recorded on the attacker's tracking grid,
    /// win detection runs, and the turn passes iff the verdict is a Miss.
    /// Rejections leave the match untouched.
    pub fn execute_attack(
        &mut self,
        attack: &Attack,
        attacker: SideId,
    ) -> Result<AttackOutcome, GameError> {
        let (row, col) = attack.origin();
        self.validate_shot(attacker, row, col)?;

        let defender = attacker.opponent();
        let outcome = attack.apply(&mut self.sides[defender.index()].board);
        self.sides[attacker.index()].tracking.record(&outcome);
        log::debug!(
            "{} fires {} -> {}",
            self.sides[attacker.index()].name,
            attack,
            outcome
        );

        if self.sides[defender.index()].board.all_sunk() {
            self.finish(attacker);
        } else if self.sides[attacker.index()].board.all_sunk() {
            self.finish(defender);
        } else if outcome.verdict() == Verdict::Miss {
            self.turn = defender;
        }

        Ok(outcome)
    }

    fn finish(&mut self, winner: SideId) {
        self.finished = true;
        self.winner = Some(winner);
        self.sides[winner.index()].wins += 1;
        log::info!("match over, {} wins", self.sides[winner.index()].name);
    }

    /// Clear boards and shot history for a rematch. Win counters persist;
    /// the human seat opens again.
    pub fn reset(&mut self) {
        for side in &mut self.sides {
            side.board.reset();
            side.tracking.reset();
        }
        self.turn = SideId::Human;
        self.finished = false;
        self.winner = None;
    }
}
