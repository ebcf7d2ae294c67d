use broadside::{
    Attack, AttackKind, FleetSpec, Grid, Orientation, ShotResult, Verdict, VesselClass, COLS,
    ROWS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn deployed_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    FleetSpec::standard().deploy(&mut rng, &mut grid).unwrap();
    grid
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn occupied_cells_never_miss(seed in any::<u64>()) {
        let mut grid = deployed_grid(seed);
        let cells: Vec<_> = grid.occupied_mask().iter_set().collect();
        for (row, col) in cells {
            let before = grid
                .vessels()
                .iter()
                .find(|v| v.contains(row, col))
                .map(|v| v.hp())
                .unwrap();
            let result = grid.resolve_shot(row, col).unwrap();
            prop_assert!(matches!(result, ShotResult::Hit | ShotResult::Sunk));
            let after = grid
                .vessels()
                .iter()
                .find(|v| v.contains(row, col))
                .map(|v| v.hp())
                .unwrap();
            prop_assert_eq!(after, before - 1);
        }
        prop_assert!(grid.all_sunk());
    }

    #[test]
    fn second_shot_is_inert(seed in any::<u64>(), row in 0..ROWS, col in 0..COLS) {
        let mut grid = deployed_grid(seed);
        grid.resolve_shot(row, col).unwrap();
        let snapshot = grid.snapshot();
        let statuses = grid.vessel_statuses();

        let result = grid.resolve_shot(row, col).unwrap();
        prop_assert_eq!(result, ShotResult::AlreadyResolved);
        prop_assert_eq!(grid.snapshot(), snapshot);
        prop_assert_eq!(grid.vessel_statuses(), statuses);
    }

    #[test]
    fn vessel_sinks_after_exactly_its_length(
        class in prop_oneof![
            Just(VesselClass::Carrier),
            Just(VesselClass::Cruiser),
            Just(VesselClass::Destroyer),
            Just(VesselClass::Submarine),
        ],
        row in 0..4usize,
        col in 0..4usize,
        vertical in any::<bool>(),
    ) {
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let mut grid = Grid::new();
        grid.place(class, row, col, orientation).unwrap();
        let cells: Vec<_> = grid.vessels()[0].cells().collect();

        for (i, (r, c)) in cells.iter().enumerate() {
            let result = grid.resolve_shot(*r, *c).unwrap();
            if i + 1 < class.length() {
                prop_assert_eq!(result, ShotResult::Hit);
            } else {
                prop_assert_eq!(result, ShotResult::Sunk);
            }
        }
    }

    #[test]
    fn pattern_aggregates_match_footprint(
        seed in any::<u64>(),
        row in 0..ROWS,
        col in 0..COLS,
        kind in prop_oneof![
            Just(AttackKind::Point),
            Just(AttackKind::Cross),
            Just(AttackKind::Block),
            Just(AttackKind::Line(broadside::Axis::Row)),
            Just(AttackKind::Line(broadside::Axis::Column)),
        ],
    ) {
        // Fresh board: no cell is already resolved, so every in-bounds
        // footprint cell counts as a hit or a miss.
        let mut grid = deployed_grid(seed);
        let occupied = grid.occupied_mask();
        let outcome = Attack::new(kind, row, col).apply(&mut grid);

        prop_assert_eq!(outcome.hits() + outcome.misses(), outcome.cells().len());
        let expected_hits = outcome
            .cells()
            .iter()
            .filter(|((r, c), _)| occupied.get(*r, *c).unwrap())
            .count();
        prop_assert_eq!(outcome.hits(), expected_hits);

        // Never resolves outside the grid.
        for ((r, c), _) in outcome.cells() {
            prop_assert!(*r < ROWS && *c < COLS);
        }

        if outcome.hits() > 0 {
            // At least Hit; Sunk only when a vessel was finished.
            prop_assert!(outcome.verdict() >= Verdict::Hit);
        } else {
            prop_assert_eq!(outcome.verdict(), Verdict::Miss);
        }
    }
}
