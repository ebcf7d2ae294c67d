use broadside::{GameError, Orientation, Vessel, VesselClass};

type TestVessel = Vessel<u32, 5, 5>;

#[test]
fn class_lengths() {
    assert_eq!(VesselClass::Carrier.length(), 6);
    assert_eq!(VesselClass::Cruiser.length(), 4);
    assert_eq!(VesselClass::Destroyer.length(), 3);
    assert_eq!(VesselClass::Submarine.length(), 2);
}

#[test]
fn placement_builds_contiguous_run() -> Result<(), GameError> {
    let vessel = TestVessel::new(VesselClass::Destroyer, Orientation::Horizontal, 2, 1)?;
    let cells: Vec<_> = vessel.cells().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);
    for (r, c) in cells {
        assert!(vessel.contains(r, c));
    }
    assert!(!vessel.contains(2, 4));
    assert_eq!(vessel.mask().count_ones(), 3);
    Ok(())
}

#[test]
fn placement_rejects_runs_leaving_the_grid() {
    assert_eq!(
        TestVessel::new(VesselClass::Destroyer, Orientation::Horizontal, 0, 3),
        Err(GameError::PlacementOutOfBounds)
    );
    assert_eq!(
        TestVessel::new(VesselClass::Cruiser, Orientation::Vertical, 2, 0),
        Err(GameError::PlacementOutOfBounds)
    );
    // A run that exactly touches the edge fits.
    assert!(TestVessel::new(VesselClass::Destroyer, Orientation::Vertical, 2, 4).is_ok());
}

#[test]
fn hits_decrement_hp_until_sunk() -> Result<(), GameError> {
    let mut vessel = TestVessel::new(VesselClass::Submarine, Orientation::Vertical, 1, 1)?;
    assert_eq!(vessel.hp(), 2);
    assert!(!vessel.is_sunk());

    assert!(vessel.register_hit(1, 1));
    assert_eq!(vessel.hp(), 1);
    assert!(!vessel.is_sunk());

    // A cell outside the hull is not a hit.
    assert!(!vessel.register_hit(0, 0));
    assert_eq!(vessel.hp(), 1);

    assert!(vessel.register_hit(2, 1));
    assert_eq!(vessel.hp(), 0);
    assert!(vessel.is_sunk());

    // Sunk vessels ignore further hits.
    assert!(!vessel.register_hit(1, 1));
    assert_eq!(vessel.hp(), 0);
    Ok(())
}

#[test]
fn status_reports_class_hp_and_sunk() -> Result<(), GameError> {
    let mut vessel = TestVessel::new(VesselClass::Submarine, Orientation::Horizontal, 0, 0)?;
    vessel.register_hit(0, 0);
    let status = vessel.status();
    assert_eq!(status.class, VesselClass::Submarine);
    assert_eq!(status.hp, 1);
    assert!(!status.sunk);
    Ok(())
}
