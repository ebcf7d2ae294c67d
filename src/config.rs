use crate::vessel::VesselClass;

pub const ROWS: usize = 10;
pub const COLS: usize = 10;

/// Standard fleet composition as (class, count) pairs.
pub const STANDARD_FLEET: [(VesselClass, usize); 4] = [
    (VesselClass::Carrier, 2),
    (VesselClass::Cruiser, 2),
    (VesselClass::Destroyer, 3),
    (VesselClass::Submarine, 3),
];

/// Random placement attempts per vessel before setup is declared failed.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Starting charges for the special attacks.
pub const INITIAL_CROSS_BOMBS: u8 = 2;
pub const INITIAL_TORPEDOES: u8 = 2;
pub const INITIAL_NUKES: u8 = 1;
