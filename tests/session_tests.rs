use broadside::{
    AttackKind, Axis, CellState, FleetSpec, GameError, GameSession, Munition, SideId,
    TurnReport, Verdict, VesselClass, COLS, ROWS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn seeded_session(seed: u64) -> GameSession {
    GameSession::new("Ada", FleetSpec::standard(), SmallRng::seed_from_u64(seed)).unwrap()
}

/// Run machine attacks until the turn returns to the human or the match
/// ends.
fn drain_machine(session: &mut GameSession) {
    while !session.is_finished() && session.match_state().turn() == SideId::Machine {
        session.machine_turn().unwrap();
    }
}

/// Fire human point shots row-major until one resolves, skipping cells the
/// session rejects as already resolved.
fn human_any_shot(session: &mut GameSession) -> TurnReport {
    for row in 0..ROWS {
        for col in 0..COLS {
            match session.human_attack(AttackKind::Point, row, col) {
                Ok(report) => return report,
                Err(GameError::AlreadyResolved { .. }) => continue,
                Err(err) => panic!("unexpected rejection: {}", err),
            }
        }
    }
    panic!("no legal human shot left");
}

#[test]
fn setup_deploys_both_fleets() {
    let session = seeded_session(42);
    let fleet = FleetSpec::standard();
    for side in [SideId::Human, SideId::Machine] {
        let board = session.match_state().side(side).board();
        assert_eq!(board.vessels().len(), fleet.vessel_count());
        assert_eq!(board.occupied_mask().count_ones(), fleet.total_cells());
        assert_eq!(board.remaining_vessel_count(), fleet.vessel_count());
    }
}

#[test]
fn setup_fails_when_the_fleet_cannot_fit() {
    // Forty carriers need 240 cells; the grid has 100.
    let fleet = FleetSpec::custom(&[(VesselClass::Carrier, 40)]);
    let result = GameSession::new("Ada", fleet, SmallRng::seed_from_u64(1));
    assert!(result.is_err());
}

#[test]
fn out_of_bounds_attack_is_a_recoverable_rejection() {
    let mut session = seeded_session(7);
    assert_eq!(
        session.human_attack(AttackKind::Point, ROWS, 0),
        Err(GameError::OutOfBounds { row: ROWS, col: 0 })
    );
    // The session is untouched: a normal attack still works.
    assert!(session.human_attack(AttackKind::Point, 0, 0).is_ok());
}

#[test]
fn machine_cannot_move_on_the_human_turn() {
    let mut session = seeded_session(7);
    assert_eq!(session.machine_turn(), Err(GameError::OutOfTurn));
}

#[test]
fn charges_are_spent_and_run_out() {
    let mut session = seeded_session(11);
    assert_eq!(session.arsenal().remaining(Munition::CrossBomb), 2);

    let origins = [(0, 0), (0, 5), (5, 0)];
    let mut fired = 0;
    for (row, col) in origins {
        match session.human_attack(AttackKind::Cross, row, col) {
            Ok(report) => {
                fired += 1;
                if fired == 3 {
                    panic!("third cross bomb should have been rejected");
                }
                if report.outcome.verdict() == Verdict::Miss {
                    drain_machine(&mut session);
                }
            }
            Err(err) => {
                assert_eq!(err, GameError::NoCharges(Munition::CrossBomb));
                assert_eq!(fired, 2);
            }
        }
    }
    assert_eq!(session.arsenal().remaining(Munition::CrossBomb), 0);
}

#[test]
fn rejected_attacks_do_not_spend_charges() {
    let mut session = seeded_session(13);
    session.human_attack(AttackKind::Point, 4, 4).unwrap();
    drain_machine(&mut session);
    // Same origin again: rejected before the nuke charge is touched.
    assert_eq!(
        session.human_attack(AttackKind::Block, 4, 4),
        Err(GameError::AlreadyResolved { row: 4, col: 4 })
    );
    assert_eq!(session.arsenal().remaining(Munition::Nuke), 1);
}

#[test]
fn torpedo_spends_a_torpedo_charge() {
    let mut session = seeded_session(17);
    session
        .human_attack(AttackKind::Line(Axis::Row), 3, 3)
        .unwrap();
    assert_eq!(session.arsenal().remaining(Munition::Torpedo), 1);
    assert_eq!(session.arsenal().remaining(Munition::CrossBomb), 2);
}

#[test]
fn snapshots_reflect_both_boards() {
    let mut session = seeded_session(19);
    let own = session.own_board();
    let occupied = own
        .rows()
        .flatten()
        .filter(|cell| **cell == CellState::Occupied)
        .count();
    assert_eq!(occupied, FleetSpec::standard().total_cells());

    let report = session.human_attack(AttackKind::Point, 0, 0).unwrap();
    let tracking = session.tracking_board();
    let expected = match report.outcome.verdict() {
        Verdict::Miss => CellState::Miss,
        _ => CellState::Hit,
    };
    assert_eq!(tracking.cell(0, 0), Some(expected));
}

#[test]
fn full_game_runs_to_completion() {
    let mut session = seeded_session(23);
    let mut guard = 0;
    while !session.is_finished() {
        guard += 1;
        assert!(guard < 500, "game did not terminate");
        match session.match_state().turn() {
            SideId::Human => {
                human_any_shot(&mut session);
            }
            SideId::Machine => {
                session.machine_turn().unwrap();
            }
        }
    }
    let winner = session.winner().unwrap();
    let loser = winner.opponent();
    assert!(session.match_state().side(loser).board().all_sunk());
    assert!(!session.match_state().side(winner).board().all_sunk());
    assert_eq!(session.match_state().side(winner).wins(), 1);
    assert!(session.winner_name().is_some());
}

#[test]
fn rematch_redeploys_and_keeps_wins() {
    let mut session = seeded_session(29);
    let mut guard = 0;
    while !session.is_finished() {
        guard += 1;
        assert!(guard < 500);
        match session.match_state().turn() {
            SideId::Human => {
                human_any_shot(&mut session);
            }
            SideId::Machine => {
                session.machine_turn().unwrap();
            }
        }
    }
    let winner = session.winner().unwrap();
    let wins_before = session.match_state().side(winner).wins();

    session.rematch().unwrap();
    assert!(!session.is_finished());
    assert_eq!(session.winner(), None);
    assert_eq!(session.match_state().turn(), SideId::Human);
    assert_eq!(session.match_state().side(winner).wins(), wins_before);
    assert_eq!(session.arsenal().remaining(Munition::Nuke), 1);
    let board = session.match_state().side(SideId::Human).board();
    assert_eq!(board.vessels().len(), FleetSpec::standard().vessel_count());
    assert!(!board.all_sunk());
}
