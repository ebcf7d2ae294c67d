//! Attack patterns: footprint enumeration and resolution against a grid.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{CellOutcome, Coord, Verdict};
use crate::config::{COLS, ROWS};
use crate::grid::Grid;

/// Axis a line attack sweeps along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The origin's entire row.
    Row,
    /// The origin's entire column.
    Column,
}

/// The pattern an attack projects onto the target grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    /// The origin cell alone.
    Point,
    /// Origin plus its four orthogonal neighbors.
    Cross,
    /// Every cell in the origin's row or column.
    Line(Axis),
    /// The 3×3 area centered on the origin.
    Block,
}

/// An attack: an origin cell and a pattern.
///
/// The origin must be a legal shot on the target grid before construction;
/// footprint cells derived from it are governed only by bounds and
/// already-resolved checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attack {
    kind: AttackKind,
    row: usize,
    col: usize,
}

impl Attack {
    pub fn new(kind: AttackKind, row: usize, col: usize) -> Self {
        Attack { kind, row, col }
    }

    pub fn kind(&self) -> AttackKind {
        self.kind
    }

    pub fn origin(&self) -> Coord {
        (self.row, self.col)
    }

    /// The footprint as signed coordinates, in deterministic order. Entries
    /// may lie outside the grid; [`Attack::apply`] skips those silently.
    fn footprint(&self) -> Vec<(isize, isize)> {
        let (r, c) = (self.row as isize, self.col as isize);
        match self.kind {
            AttackKind::Point => [(r, c)].into_iter().collect(),
            AttackKind::Cross => [(r, c), (r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
                .into_iter()
                .collect(),
            AttackKind::Block => [
                (r - 1, c - 1),
                (r - 1, c),
                (r - 1, c + 1),
                (r, c - 1),
                (r, c),
                (r, c + 1),
                (r + 1, c - 1),
                (r + 1, c),
                (r + 1, c + 1),
            ]
            .into_iter()
            .collect(),
            AttackKind::Line(Axis::Row) => (0..COLS as isize).map(|cc| (r, cc)).collect(),
            AttackKind::Line(Axis::Column) => (0..ROWS as isize).map(|rr| (rr, c)).collect(),
        }
    }

    /// Resolve the attack against `grid` and aggregate the results.
    ///
    /// Footprint cells outside the grid are skipped, not errors: an attack
    /// near an edge simply covers fewer cells. Cells resolved by earlier
    /// shots are reported per cell but count toward neither hits nor misses.
    pub fn apply(&self, grid: &mut Grid) -> AttackOutcome {
        let mut cells = Vec::new();
        let mut hits = 0;
        let mut misses = 0;
        let mut skipped = 0;
        let mut verdict = Verdict::Miss;

        for (r, c) in self.footprint() {
            if r < 0 || c < 0 || r as usize >= ROWS || c as usize >= COLS {
                skipped += 1;
                continue;
            }
            let (row, col) = (r as usize, c as usize);
            let outcome = match grid.resolve_shot(row, col) {
                Ok(res) => CellOutcome::from(res),
                // Bounds were checked above; treat a refused cell as skipped.
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            match outcome {
                CellOutcome::Hit | CellOutcome::Sunk => hits += 1,
                CellOutcome::Miss => misses += 1,
                CellOutcome::AlreadyResolved => {}
            }
            verdict = verdict.max(Verdict::from_cell(outcome));
            cells.push(((row, col), outcome));
        }

        AttackOutcome {
            origin: (self.row, self.col),
            kind: self.kind,
            cells,
            hits,
            misses,
            skipped,
            verdict,
        }
    }
}

impl fmt::Display for Attack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AttackKind::Point => write!(f, "shot at ({}, {})", self.row, self.col),
            AttackKind::Cross => write!(f, "cross bomb at ({}, {})", self.row, self.col),
            AttackKind::Line(Axis::Row) => write!(f, "torpedo along row {}", self.row),
            AttackKind::Line(Axis::Column) => write!(f, "torpedo along column {}", self.col),
            AttackKind::Block => write!(f, "nuke at ({}, {})", self.row, self.col),
        }
    }
}

/// Aggregated result of applying one [`Attack`] to a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    origin: Coord,
    kind: AttackKind,
    cells: Vec<(Coord, CellOutcome)>,
    hits: usize,
    misses: usize,
    skipped: usize,
    verdict: Verdict,
}

impl AttackOutcome {
    /// Per-cell results for every in-bounds footprint cell, in footprint
    /// order.
    pub fn cells(&self) -> &[(Coord, CellOutcome)] {
        &self.cells
    }

    /// Result recorded for `cell`, if it was part of the resolved footprint.
    pub fn outcome_at(&self, cell: Coord) -> Option<CellOutcome> {
        self.cells
            .iter()
            .find(|(coord, _)| *coord == cell)
            .map(|(_, outcome)| *outcome)
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn kind(&self) -> AttackKind {
        self.kind
    }

    /// Fresh hits, sinking shots included.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Fresh misses.
    pub fn misses(&self) -> usize {
        self.misses
    }

    /// Footprint cells discarded for falling outside the grid.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Highest-severity verdict: `Sunk > Hit > Miss`.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

impl fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}: {} hits, {} misses",
            self.verdict, self.hits, self.misses
        )
    }
}
