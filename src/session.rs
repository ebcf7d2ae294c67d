//! Game session: the orchestration boundary between the presentation layer
//! and the combat core.
//!
//! All user-facing gameplay failures (bad coordinates, re-shot cells, spent
//! charges, acting out of turn) surface here as [`GameError`] values; the
//! session never panics on user input.

use rand::rngs::SmallRng;

use crate::arsenal::Arsenal;
use crate::attack::{Attack, AttackKind, AttackOutcome};
use crate::common::{GameError, SetupError};
use crate::fleet::FleetSpec;
use crate::game::{Match, SideId};
use crate::grid::GridSnapshot;
use crate::player::Player;
use crate::player_human::HumanPlayer;
use crate::player_machine::MachinePlayer;

/// What one executed attack did to the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub attacker: SideId,
    pub outcome: AttackOutcome,
    pub finished: bool,
    pub winner: Option<SideId>,
}

/// A human-versus-machine session: match state, both attack sources and the
/// RNG used for deployment.
pub struct GameSession {
    match_state: Match,
    human: HumanPlayer,
    machine: MachinePlayer,
    fleet: FleetSpec,
    rng: SmallRng,
}

impl GameSession {
    /// Start a session: fresh match, both fleets randomly deployed.
    ///
    /// Deployment failure is fatal; the caller may retry with a fresh
    /// attempt.
    pub fn new(player_name: &str, fleet: FleetSpec, mut rng: SmallRng) -> Result<Self, SetupError> {
        let mut match_state = Match::new(player_name);
        fleet.deploy(&mut rng, match_state.board_mut(SideId::Human))?;
        fleet.deploy(&mut rng, match_state.board_mut(SideId::Machine))?;
        Ok(GameSession {
            match_state,
            human: HumanPlayer::new(),
            machine: MachinePlayer::new(),
            fleet,
            rng,
        })
    }

    /// Execute a human attack of `kind` at (`row`, `col`).
    ///
    /// The origin is validated before any charge is spent, so a rejected
    /// attack never costs a munition.
    pub fn human_attack(
        &mut self,
        kind: AttackKind,
        row: usize,
        col: usize,
    ) -> Result<TurnReport, GameError> {
        self.match_state.validate_shot(SideId::Human, row, col)?;
        self.human.arsenal_mut().try_spend(kind)?;
        self.human.queue_attack(Attack::new(kind, row, col));
        self.take_turn(SideId::Human)
    }

    /// Let the machine take one attack. Callers loop while the machine
    /// holds the turn (it shoots again after a hit).
    pub fn machine_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.match_state.is_finished() {
            return Err(GameError::MatchFinished);
        }
        if self.match_state.turn() != SideId::Machine {
            return Err(GameError::OutOfTurn);
        }
        self.take_turn(SideId::Machine)
    }

    fn take_turn(&mut self, side: SideId) -> Result<TurnReport, GameError> {
        let attack = {
            let view = self.match_state.side(side).tracking();
            let player: &mut dyn Player = match side {
                SideId::Human => &mut self.human,
                SideId::Machine => &mut self.machine,
            };
            player.make_attack(view)?
        };

        let outcome = self.match_state.execute_attack(&attack, side)?;

        // Notify with the post-attack view so freshly resolved cells are
        // not re-targeted.
        let view = self.match_state.side(side).tracking();
        let player: &mut dyn Player = match side {
            SideId::Human => &mut self.human,
            SideId::Machine => &mut self.machine,
        };
        player.handle_attack_outcome(&outcome, view);

        Ok(TurnReport {
            attacker: side,
            outcome,
            finished: self.match_state.is_finished(),
            winner: self.match_state.winner(),
        })
    }

    /// Reset the match and redeploy both fleets for a rematch. Win
    /// counters persist.
    pub fn rematch(&mut self) -> Result<(), SetupError> {
        self.match_state.reset();
        self.machine.reset();
        self.human.arsenal_mut().reset();
        self.fleet
            .deploy(&mut self.rng, self.match_state.board_mut(SideId::Human))?;
        self.fleet
            .deploy(&mut self.rng, self.match_state.board_mut(SideId::Machine))?;
        Ok(())
    }

    pub fn match_state(&self) -> &Match {
        &self.match_state
    }

    pub fn is_finished(&self) -> bool {
        self.match_state.is_finished()
    }

    pub fn winner(&self) -> Option<SideId> {
        self.match_state.winner()
    }

    /// Name of the winning seat, once the match is over.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner().map(|id| self.match_state.side(id).name())
    }

    /// The human's remaining special-attack charges.
    pub fn arsenal(&self) -> &Arsenal {
        self.human.arsenal()
    }

    /// Snapshot of the human's own battlefield (vessels revealed).
    pub fn own_board(&self) -> GridSnapshot {
        self.match_state.side(SideId::Human).board().snapshot()
    }

    /// Snapshot of the human's attack-tracking board.
    pub fn tracking_board(&self) -> GridSnapshot {
        self.match_state.side(SideId::Human).tracking().snapshot()
    }
}
