//! Shared result and error types for the combat core.

use crate::arsenal::Munition;
use crate::bitgrid::BitGridError;
use crate::vessel::VesselClass;

/// A board coordinate as (row, column).
pub type Coord = (usize, usize);

/// Result of resolving a single shot against a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot struck an undamaged segment of a vessel.
    Hit,
    /// Shot struck the last remaining segment of a vessel.
    Sunk,
    /// Shot landed in open water.
    Miss,
    /// Cell was resolved by an earlier shot; nothing changed.
    AlreadyResolved,
}

/// Per-cell entry in an [`AttackOutcome`](crate::AttackOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellOutcome {
    Hit,
    Sunk,
    Miss,
    AlreadyResolved,
}

impl From<ShotResult> for CellOutcome {
    fn from(res: ShotResult) -> Self {
        match res {
            ShotResult::Hit => CellOutcome::Hit,
            ShotResult::Sunk => CellOutcome::Sunk,
            ShotResult::Miss => CellOutcome::Miss,
            ShotResult::AlreadyResolved => CellOutcome::AlreadyResolved,
        }
    }
}

/// Highest-severity result of an attack, used for turn continuation.
///
/// Ordering follows severity: `Miss < Hit < Sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    Miss,
    Hit,
    Sunk,
}

impl Verdict {
    /// Severity contribution of one resolved cell.
    pub fn from_cell(cell: CellOutcome) -> Self {
        match cell {
            CellOutcome::Sunk => Verdict::Sunk,
            CellOutcome::Hit => Verdict::Hit,
            CellOutcome::Miss | CellOutcome::AlreadyResolved => Verdict::Miss,
        }
    }
}

/// Observable state of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Occupied,
    Miss,
    Hit,
}

/// Recoverable gameplay errors. Operations that return these are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Cell was already resolved by an earlier shot.
    AlreadyResolved { row: usize, col: usize },
    /// Vessel run would leave the grid.
    PlacementOutOfBounds,
    /// Vessel run crosses a cell another vessel occupies.
    PlacementOverlap,
    /// Occupancy index had no owner for a cell marked occupied.
    UnknownVesselHit,
    /// The match is over; no further attacks are accepted.
    MatchFinished,
    /// The attacking side does not hold the turn.
    OutOfTurn,
    /// A human attack was requested before coordinates were supplied.
    NoAttackQueued,
    /// No charges remain for the requested special attack.
    NoCharges(Munition),
    /// Underlying bit-grid failure.
    Mask(BitGridError),
}

impl From<BitGridError> for GameError {
    fn from(err: BitGridError) -> Self {
        GameError::Mask(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the grid", row, col)
            }
            GameError::AlreadyResolved { row, col } => {
                write!(f, "cell ({}, {}) was already shot", row, col)
            }
            GameError::PlacementOutOfBounds => write!(f, "vessel placement leaves the grid"),
            GameError::PlacementOverlap => write!(f, "vessel placement overlaps another vessel"),
            GameError::UnknownVesselHit => write!(f, "occupied cell has no owning vessel"),
            GameError::MatchFinished => write!(f, "the match is already over"),
            GameError::OutOfTurn => write!(f, "it is not that side's turn"),
            GameError::NoAttackQueued => write!(f, "no attack coordinates queued"),
            GameError::NoCharges(m) => write!(f, "no {} charges remaining", m.name()),
            GameError::Mask(e) => write!(f, "bit-grid error: {}", e),
        }
    }
}

/// Fatal failures while setting up a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A vessel could not be placed within the retry budget.
    UnplaceableVessel(VesselClass),
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::UnplaceableVessel(class) => {
                write!(f, "could not place {} within the retry budget", class.name())
            }
        }
    }
}
