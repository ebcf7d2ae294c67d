//! Battlefield grid: vessel occupancy, damage and shot bookkeeping.

use alloc::vec::Vec;
use core::fmt;

use crate::bitgrid::BitGrid;
use crate::common::{CellState, GameError, ShotResult};
use crate::config::{COLS, ROWS};
use crate::vessel::{Orientation, Vessel, VesselClass, VesselStatus};

/// Mask type sized for the standard battlefield.
pub type Mask = BitGrid<u128, ROWS, COLS>;

/// Vessel type placed on the standard battlefield.
pub type PlacedVessel = Vessel<u128, ROWS, COLS>;

/// One side's battlefield: placed vessels plus hit and miss masks.
///
/// A cell is resolved at most once; the occupancy index maps each occupied
/// cell to its owning vessel.
pub struct Grid {
    vessels: Vec<PlacedVessel>,
    owner: [[Option<u8>; COLS]; ROWS],
    occupied: Mask,
    hits: Mask,
    misses: Mask,
}

impl Grid {
    /// Create an empty grid with no vessels placed.
    pub fn new() -> Self {
        Grid {
            vessels: Vec::new(),
            owner: [[None; COLS]; ROWS],
            occupied: Mask::new(),
            hits: Mask::new(),
            misses: Mask::new(),
        }
    }

    /// True when (`row`, `col`) lies on the grid.
    pub const fn in_bounds(row: usize, col: usize) -> bool {
        row < ROWS && col < COLS
    }

    /// Place a vessel of `class` at (`row`, `col`) with `orientation`.
    ///
    /// Fails without mutation when the run leaves the grid or crosses an
    /// occupied cell.
    pub fn place(
        &mut self,
        class: VesselClass,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        let vessel = PlacedVessel::new(class, orientation, row, col)?;
        if !(self.occupied & vessel.mask()).is_empty() {
            return Err(GameError::PlacementOverlap);
        }
        let idx = self.vessels.len() as u8;
        for (r, c) in vessel.cells() {
            self.owner[r][c] = Some(idx);
        }
        self.occupied |= vessel.mask();
        self.vessels.push(vessel);
        Ok(())
    }

    /// True when the cell has been resolved (hit or miss) already.
    pub fn is_resolved(&self, row: usize, col: usize) -> bool {
        self.hits.get(row, col).unwrap_or(false) || self.misses.get(row, col).unwrap_or(false)
    }

    /// True iff the cell is on the grid and has not been fired upon.
    pub fn is_legal_shot(&self, row: usize, col: usize) -> bool {
        Self::in_bounds(row, col) && !self.is_resolved(row, col)
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// Occupied cells become hits and damage the owning vessel; empty cells
    /// become misses. A cell resolved earlier reports
    /// [`ShotResult::AlreadyResolved`] and nothing changes.
    pub fn resolve_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.is_resolved(row, col) {
            return Ok(ShotResult::AlreadyResolved);
        }
        if self.occupied.get(row, col)? {
            self.hits.set(row, col)?;
            let idx = self.owner[row][col].ok_or(GameError::UnknownVesselHit)?;
            let vessel = self
                .vessels
                .get_mut(idx as usize)
                .ok_or(GameError::UnknownVesselHit)?;
            vessel.register_hit(row, col);
            if vessel.is_sunk() {
                Ok(ShotResult::Sunk)
            } else {
                Ok(ShotResult::Hit)
            }
        } else {
            self.misses.set(row, col)?;
            Ok(ShotResult::Miss)
        }
    }

    /// True when at least one vessel is placed and every vessel has sunk.
    pub fn all_sunk(&self) -> bool {
        !self.vessels.is_empty() && self.vessels.iter().all(|v| v.is_sunk())
    }

    /// Number of vessels still afloat.
    pub fn remaining_vessel_count(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_sunk()).count()
    }

    /// Vessels placed on this grid.
    pub fn vessels(&self) -> &[PlacedVessel] {
        &self.vessels
    }

    /// Status summaries of every placed vessel.
    pub fn vessel_statuses(&self) -> Vec<VesselStatus> {
        self.vessels.iter().map(|v| v.status()).collect()
    }

    /// Occupancy mask of all vessels.
    pub fn occupied_mask(&self) -> Mask {
        self.occupied
    }

    /// Observable state of one cell.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        if !Self::in_bounds(row, col) {
            return Err(GameError::OutOfBounds { row, col });
        }
        Ok(self.state_unchecked(row, col))
    }

    fn state_unchecked(&self, row: usize, col: usize) -> CellState {
        if self.hits.get(row, col).unwrap_or(false) {
            CellState::Hit
        } else if self.misses.get(row, col).unwrap_or(false) {
            CellState::Miss
        } else if self.occupied.get(row, col).unwrap_or(false) {
            CellState::Occupied
        } else {
            CellState::Empty
        }
    }

    /// Defensive cell-state copy for the presentation layer.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut cells = [[CellState::Empty; COLS]; ROWS];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.state_unchecked(r, c);
            }
        }
        GridSnapshot { cells }
    }

    /// Reset to an empty grid: no vessels, no shots.
    pub fn reset(&mut self) {
        self.vessels.clear();
        self.owner = [[None; COLS]; ROWS];
        self.occupied.clear_all();
        self.hits.clear_all();
        self.misses.clear_all();
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ vessels: {:?},\n  occupied: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.vessels, self.occupied, self.hits, self.misses
        )
    }
}

/// Immutable cell-state copy of a grid, safe to hand to the presentation
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    cells: [[CellState; COLS]; ROWS],
}

impl GridSnapshot {
    /// Build a snapshot from a raw cell matrix.
    pub fn from_cells(cells: [[CellState; COLS]; ROWS]) -> Self {
        GridSnapshot { cells }
    }

    /// Cell state at (`row`, `col`), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellState> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows of the snapshot, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState; COLS]> {
        self.cells.iter()
    }
}
