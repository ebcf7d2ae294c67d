//! Headless seeded AI-vs-AI match emitting a JSON summary.

use broadside::{FleetSpec, MachinePlayer, Match, Player, SideId};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let fleet = FleetSpec::standard();
    let mut game = Match::with_names("north", "south");
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    fleet
        .deploy(&mut rng1, game.board_mut(SideId::Human))
        .map_err(|e| anyhow::anyhow!(e))?;
    fleet
        .deploy(&mut rng2, game.board_mut(SideId::Machine))
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut players = [MachinePlayer::new(), MachinePlayer::new()];
    let mut attacks = [0usize; 2];

    while !game.is_finished() {
        let side = game.turn();
        let attack = {
            let view = game.side(side).tracking();
            players[side.index()]
                .make_attack(view)
                .map_err(|e| anyhow::anyhow!(e))?
        };
        let outcome = game
            .execute_attack(&attack, side)
            .map_err(|e| anyhow::anyhow!(e))?;
        players[side.index()].handle_attack_outcome(&outcome, game.side(side).tracking());
        attacks[side.index()] += 1;
    }

    let winner = game.winner().map(|id| game.side(id).name().to_string());
    let result = json!({
        "north": {
            "attacks": attacks[SideId::Human.index()],
            "vessels_left": game.side(SideId::Human).board().remaining_vessel_count(),
        },
        "south": {
            "attacks": attacks[SideId::Machine.index()],
            "vessels_left": game.side(SideId::Machine).board().remaining_vessel_count(),
        },
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
