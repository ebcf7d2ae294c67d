//! Vessel definitions and placement geometry.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitgrid::BitGrid;
use crate::common::{Coord, GameError};

/// Orientation of a vessel run on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The closed set of vessel classes. Class determines length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselClass {
    Carrier,
    Cruiser,
    Destroyer,
    Submarine,
}

impl VesselClass {
    /// Length of the run this class occupies.
    pub const fn length(self) -> usize {
        match self {
            VesselClass::Carrier => 6,
            VesselClass::Cruiser => 4,
            VesselClass::Destroyer => 3,
            VesselClass::Submarine => 2,
        }
    }

    /// Display name of the class.
    pub const fn name(self) -> &'static str {
        match self {
            VesselClass::Carrier => "Carrier",
            VesselClass::Cruiser => "Cruiser",
            VesselClass::Destroyer => "Destroyer",
            VesselClass::Submarine => "Submarine",
        }
    }
}

/// Status summary of one vessel, for HUD display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselStatus {
    pub class: VesselClass,
    pub hp: usize,
    pub sunk: bool,
}

/// A vessel placed on an `R`×`C` grid, with damage tracked in a [`BitGrid`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Vessel<T, const R: usize, const C: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    class: VesselClass,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitGrid<T, R, C>,
    hits: BitGrid<T, R, C>,
}

impl<T, const R: usize, const C: usize> Vessel<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Place a vessel of `class` at (`row`, `col`) with `orientation`.
    ///
    /// Fails without side effects when the run would leave the grid.
    pub fn new(
        class: VesselClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, GameError> {
        let len = class.length();
        match orientation {
            Orientation::Horizontal => {
                if row >= R || col + len > C {
                    return Err(GameError::PlacementOutOfBounds);
                }
            }
            Orientation::Vertical => {
                if col >= C || row + len > R {
                    return Err(GameError::PlacementOutOfBounds);
                }
            }
        }

        let cells = (0..len).map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        });
        let mask = BitGrid::from_cells(cells)?;

        Ok(Vessel {
            class,
            orientation,
            row,
            col,
            mask,
            hits: BitGrid::new(),
        })
    }

    /// Register a hit at (`row`, `col`).
    ///
    /// Returns true when the cell belongs to this vessel and it was still
    /// afloat. A sunk vessel ignores further hits.
    pub fn register_hit(&mut self, row: usize, col: usize) -> bool {
        if self.is_sunk() || !self.contains(row, col) {
            return false;
        }
        let _ = self.hits.set(row, col);
        true
    }

    /// Remaining hit points: undamaged segments.
    pub fn hp(&self) -> usize {
        self.class.length() - self.hits.count_ones()
    }

    /// True once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.class.length()
    }

    /// True when (`row`, `col`) is one of this vessel's cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// The cells this vessel occupies, bow to stern.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.class.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    pub fn class(&self) -> VesselClass {
        self.class
    }

    pub fn origin(&self) -> Coord {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of this vessel on the grid.
    pub fn mask(&self) -> BitGrid<T, R, C> {
        self.mask
    }

    /// Status summary for HUD display.
    pub fn status(&self) -> VesselStatus {
        VesselStatus {
            class: self.class,
            hp: self.hp(),
            sunk: self.is_sunk(),
        }
    }
}

impl<T, const R: usize, const C: usize> fmt::Debug for Vessel<T, R, C>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ class: {}, origin: ({}, {}), orientation: {:?}, hp: {}/{} }}",
            self.class.name(),
            self.row,
            self.col,
            self.orientation,
            self.hp(),
            self.class.length(),
        )
    }
}
