use broadside::{Arsenal, AttackKind, Axis, GameError, Munition};

#[test]
fn standard_stock() {
    let arsenal = Arsenal::new();
    assert_eq!(arsenal.remaining(Munition::CrossBomb), 2);
    assert_eq!(arsenal.remaining(Munition::Torpedo), 2);
    assert_eq!(arsenal.remaining(Munition::Nuke), 1);
}

#[test]
fn point_shots_are_free() {
    let mut arsenal = Arsenal::with_counts(0, 0, 0);
    for _ in 0..5 {
        arsenal.try_spend(AttackKind::Point).unwrap();
    }
}

#[test]
fn charges_deplete_and_reject() {
    let mut arsenal = Arsenal::new();
    arsenal.try_spend(AttackKind::Block).unwrap();
    assert_eq!(arsenal.remaining(Munition::Nuke), 0);
    assert_eq!(
        arsenal.try_spend(AttackKind::Block),
        Err(GameError::NoCharges(Munition::Nuke))
    );

    arsenal.try_spend(AttackKind::Line(Axis::Row)).unwrap();
    arsenal.try_spend(AttackKind::Line(Axis::Column)).unwrap();
    assert_eq!(
        arsenal.try_spend(AttackKind::Line(Axis::Row)),
        Err(GameError::NoCharges(Munition::Torpedo))
    );
    // Cross bombs are unaffected by the other stocks.
    assert_eq!(arsenal.remaining(Munition::CrossBomb), 2);
}

#[test]
fn reset_restores_the_standard_stock() {
    let mut arsenal = Arsenal::new();
    arsenal.try_spend(AttackKind::Cross).unwrap();
    arsenal.try_spend(AttackKind::Block).unwrap();
    arsenal.reset();
    assert_eq!(arsenal.remaining(Munition::CrossBomb), 2);
    assert_eq!(arsenal.remaining(Munition::Nuke), 1);
}
