//! Special-attack charges.

use crate::attack::AttackKind;
use crate::common::GameError;
use crate::config::{INITIAL_CROSS_BOMBS, INITIAL_NUKES, INITIAL_TORPEDOES};

/// The expendable munition kinds. Point shots are always free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Munition {
    CrossBomb,
    Torpedo,
    Nuke,
}

impl Munition {
    /// Munition a pattern consumes, if any.
    pub fn required_for(kind: AttackKind) -> Option<Munition> {
        match kind {
            AttackKind::Point => None,
            AttackKind::Cross => Some(Munition::CrossBomb),
            AttackKind::Line(_) => Some(Munition::Torpedo),
            AttackKind::Block => Some(Munition::Nuke),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Munition::CrossBomb => "cross bomb",
            Munition::Torpedo => "torpedo",
            Munition::Nuke => "nuke",
        }
    }
}

/// Per-side stock of special-attack charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arsenal {
    cross_bombs: u8,
    torpedoes: u8,
    nukes: u8,
}

impl Arsenal {
    /// Standard starting stock.
    pub fn new() -> Self {
        Arsenal {
            cross_bombs: INITIAL_CROSS_BOMBS,
            torpedoes: INITIAL_TORPEDOES,
            nukes: INITIAL_NUKES,
        }
    }

    pub fn with_counts(cross_bombs: u8, torpedoes: u8, nukes: u8) -> Self {
        Arsenal { cross_bombs, torpedoes, nukes }
    }

    /// Charges remaining for `munition`.
    pub fn remaining(&self, munition: Munition) -> u8 {
        match munition {
            Munition::CrossBomb => self.cross_bombs,
            Munition::Torpedo => self.torpedoes,
            Munition::Nuke => self.nukes,
        }
    }

    /// Spend the charge an attack of `kind` requires.
    ///
    /// Free patterns always succeed; an empty stock is a recoverable
    /// rejection and nothing is spent.
    pub fn try_spend(&mut self, kind: AttackKind) -> Result<(), GameError> {
        let Some(munition) = Munition::required_for(kind) else {
            return Ok(());
        };
        let slot = match munition {
            Munition::CrossBomb => &mut self.cross_bombs,
            Munition::Torpedo => &mut self.torpedoes,
            Munition::Nuke => &mut self.nukes,
        };
        if *slot == 0 {
            return Err(GameError::NoCharges(munition));
        }
        *slot -= 1;
        Ok(())
    }

    /// Restore the standard starting stock.
    pub fn reset(&mut self) {
        *self = Arsenal::new();
    }
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::new()
    }
}
