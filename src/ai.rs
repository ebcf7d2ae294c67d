//! Hunt/target search strategy for the machine side.
//!
//! The AI works purely from its own shot history ([`TrackingGrid`]); it is
//! told the outcome of each shot through [`TargetingAi::observe`] and never
//! inspects the opponent grid.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::common::{CellOutcome, Coord};
use crate::config::{COLS, ROWS};
use crate::tracking::TrackingGrid;

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Search state of the AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiMode {
    /// No live lead; sweep the board for a first hit.
    Hunt,
    /// At least one unresolved hit is being pursued.
    Target,
}

/// Checkerboard hunter with adjacency targeting and linear continuation.
#[derive(Debug, Clone)]
pub struct TargetingAi {
    mode: AiMode,
    target_queue: VecDeque<Coord>,
    hit_history: Vec<Coord>,
}

impl TargetingAi {
    pub fn new() -> Self {
        TargetingAi {
            mode: AiMode::Hunt,
            target_queue: VecDeque::new(),
            hit_history: Vec::new(),
        }
    }

    pub fn mode(&self) -> AiMode {
        self.mode
    }

    /// Queued candidate cells, front first.
    pub fn queued_targets(&self) -> impl Iterator<Item = Coord> + '_ {
        self.target_queue.iter().copied()
    }

    /// Confirmed hits on the vessel currently being pursued.
    pub fn hit_history(&self) -> &[Coord] {
        &self.hit_history
    }

    /// Update state from the outcome of one of our shots.
    ///
    /// `view` must already reflect the shot, so that cells resolved by it
    /// are not re-enqueued.
    pub fn observe(&mut self, cell: Coord, outcome: CellOutcome, view: &TrackingGrid) {
        match outcome {
            CellOutcome::Hit => {
                self.mode = AiMode::Target;
                self.hit_history.push(cell);
                self.enqueue_neighbors(cell, view);
            }
            CellOutcome::Sunk => {
                // The rest of a sunk vessel's footprint is irrelevant.
                self.hit_history.clear();
                self.target_queue.clear();
                self.mode = AiMode::Hunt;
            }
            CellOutcome::Miss | CellOutcome::AlreadyResolved => {}
        }
    }

    fn enqueue_neighbors(&mut self, (row, col): Coord, view: &TrackingGrid) {
        for (dr, dc) in ORTHOGONAL {
            let (nr, nc) = (row as isize + dr, col as isize + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let cell = (nr as usize, nc as usize);
            if view.is_unresolved(cell.0, cell.1) && !self.target_queue.contains(&cell) {
                self.target_queue.push_back(cell);
            }
        }
    }

    /// Choose the next cell to attack.
    ///
    /// Target mode tries linear continuation of the two most recent hits,
    /// then drains the target queue; when the queue runs dry the call falls
    /// back to hunt selection so a usable cell is always returned.
    ///
    /// # Panics
    ///
    /// Panics if no legal cell remains; win detection should have ended the
    /// match before that state is reachable.
    pub fn choose_next_cell(&mut self, view: &TrackingGrid) -> Coord {
        if self.mode == AiMode::Target {
            if let Some(cell) = self.linear_continuation(view) {
                self.target_queue.retain(|c| *c != cell);
                return cell;
            }
            while let Some(cell) = self.target_queue.pop_front() {
                // Cells may have been resolved since they were enqueued.
                if view.is_unresolved(cell.0, cell.1) {
                    return cell;
                }
            }
        }
        self.hunt(view)
    }

    /// Extend the axis implied by the two most recent hits: first past the
    /// newest hit, then past the opposite end.
    fn linear_continuation(&self, view: &TrackingGrid) -> Option<Coord> {
        let n = self.hit_history.len();
        if n < 2 {
            return None;
        }
        let (lr, lc) = self.hit_history[n - 1];
        let (sr, sc) = self.hit_history[n - 2];
        let dr = lr as isize - sr as isize;
        let dc = lc as isize - sc as isize;
        // Only a unit step along exactly one axis implies an orientation.
        if dr.abs() + dc.abs() != 1 {
            return None;
        }
        let forward = (lr as isize + dr, lc as isize + dc);
        let backward = (sr as isize - dr, sc as isize - dc);
        for (r, c) in [forward, backward] {
            if r >= 0 && c >= 0 && view.is_unresolved(r as usize, c as usize) {
                return Some((r as usize, c as usize));
            }
        }
        None
    }

    /// Checkerboard sweep: every vessel spans at least two cells, so
    /// even-parity coverage intersects every placement. Falls back to any
    /// legal cell late in the game.
    fn hunt(&self, view: &TrackingGrid) -> Coord {
        for row in 0..ROWS {
            for col in 0..COLS {
                if (row + col) % 2 == 0 && view.is_unresolved(row, col) {
                    return (row, col);
                }
            }
        }
        for row in 0..ROWS {
            for col in 0..COLS {
                if view.is_unresolved(row, col) {
                    return (row, col);
                }
            }
        }
        panic!("no legal shots remain while the match is unfinished");
    }

    /// Forget all search state, returning to hunt mode.
    pub fn reset(&mut self) {
        self.mode = AiMode::Hunt;
        self.target_queue.clear();
        self.hit_history.clear();
    }
}

impl Default for TargetingAi {
    fn default() -> Self {
        Self::new()
    }
}
