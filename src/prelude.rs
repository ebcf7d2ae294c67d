//! Commonly used types and utilities for ease of import.

pub use crate::{
    Attack, AttackKind, AttackOutcome, FleetSpec, GameError, GameSession, Grid, MachinePlayer,
    Match, Player, SideId, TargetingAi, Verdict, VesselClass,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_coord, render_board, Scoreboard};
