//! Fleet composition and random deployment.

use alloc::vec::Vec;
use rand::Rng;

use crate::common::SetupError;
use crate::config::{COLS, MAX_PLACEMENT_ATTEMPTS, ROWS, STANDARD_FLEET};
use crate::grid::Grid;
use crate::vessel::{Orientation, VesselClass};

/// Fleet composition as counts per vessel class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetSpec {
    counts: Vec<(VesselClass, usize)>,
}

impl FleetSpec {
    /// The standard fleet.
    pub fn standard() -> Self {
        FleetSpec {
            counts: STANDARD_FLEET.to_vec(),
        }
    }

    /// A custom composition from (class, count) pairs.
    pub fn custom(counts: &[(VesselClass, usize)]) -> Self {
        FleetSpec {
            counts: counts.to_vec(),
        }
    }

    /// Every vessel class in the fleet, one entry per hull.
    pub fn classes(&self) -> impl Iterator<Item = VesselClass> + '_ {
        self.counts
            .iter()
            .flat_map(|(class, count)| core::iter::repeat(*class).take(*count))
    }

    /// Number of hulls in the fleet.
    pub fn vessel_count(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Number of grid cells the fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.counts
            .iter()
            .map(|(class, count)| class.length() * count)
            .sum()
    }

    /// Randomly place the whole fleet onto `grid`.
    ///
    /// Each vessel gets a bounded number of placement attempts; exhausting
    /// the budget is fatal to match setup.
    pub fn deploy<R: Rng>(&self, rng: &mut R, grid: &mut Grid) -> Result<(), SetupError> {
        for class in self.classes() {
            place_randomly(rng, grid, class)?;
        }
        log::debug!("deployed {} vessels", self.vessel_count());
        Ok(())
    }
}

fn place_randomly<R: Rng>(
    rng: &mut R,
    grid: &mut Grid,
    class: VesselClass,
) -> Result<(), SetupError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        // Bound the origin so the run always fits; only overlap can fail.
        let (max_row, max_col) = match orientation {
            Orientation::Horizontal => (ROWS - 1, COLS - class.length()),
            Orientation::Vertical => (ROWS - class.length(), COLS - 1),
        };
        let row = rng.random_range(0..=max_row);
        let col = rng.random_range(0..=max_col);
        if grid.place(class, row, col, orientation).is_ok() {
            return Ok(());
        }
    }
    Err(SetupError::UnplaceableVessel(class))
}
