#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    coord_label, init_logging, parse_coord, render_board, Attack, AttackKind, Axis, FleetSpec,
    GameSession, MachinePlayer, Match, Munition, Player, Scoreboard, SideId, TurnReport, Verdict,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against the machine.
    Play {
        #[arg(long, default_value = "Player")]
        name: String,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch the targeting AI fight itself.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { name, seed } => play(&name, seed),
        Commands::Auto { seed } => auto(seed),
    }
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn play(name: &str, seed: Option<u64>) -> anyhow::Result<()> {
    let mut scoreboard = Scoreboard::new();
    let mut session = GameSession::new(name, FleetSpec::standard(), make_rng(seed))
        .map_err(|e| anyhow::anyhow!("could not start game: {}", e))?;

    println!("Broadside! Sink the machine's fleet before it sinks yours.");
    println!("Commands: B4 | cross B4 | row B4 | col B4 | nuke B4 | boards | quit");

    loop {
        print_boards(&session);
        if !human_turns(&mut session)? {
            break;
        }
        if !session.is_finished() {
            machine_turns(&mut session)?;
        }
        if session.is_finished() {
            let winner = session.winner_name().unwrap_or("nobody").to_string();
            println!("\n=== {} wins! ===", winner);
            scoreboard.record_win(&winner);
            for (player, wins) in scoreboard.entries() {
                println!("{}: {} win(s)", player, wins);
            }
            if prompt("Play again? (y/n) ")?.trim().eq_ignore_ascii_case("y") {
                session
                    .rematch()
                    .map_err(|e| anyhow::anyhow!("could not restart game: {}", e))?;
            } else {
                break;
            }
        }
    }
    Ok(())
}

/// Run human attacks until a Miss passes the turn, the match ends, or the
/// player quits. Returns false when the player quit.
#[cfg(feature = "std")]
fn human_turns(session: &mut GameSession) -> anyhow::Result<bool> {
    loop {
        let line = prompt("your shot> ")?;
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "q" => return Ok(false),
            "boards" => {
                print_boards(session);
                continue;
            }
            _ => {}
        }
        let Some((kind, coord)) = parse_command(line) else {
            println!("Unrecognized command. Try: B4, cross B4, row B4, col B4, nuke B4");
            continue;
        };
        match session.human_attack(kind, coord.0, coord.1) {
            Ok(report) => {
                describe(&report);
                if report.finished {
                    return Ok(true);
                }
                if report.outcome.verdict() == Verdict::Miss {
                    return Ok(true);
                }
                println!("You hit -- shoot again!");
            }
            Err(err) => println!("Rejected: {}", err),
        }
    }
}

/// Run machine attacks until it misses or the match ends.
#[cfg(feature = "std")]
fn machine_turns(session: &mut GameSession) -> anyhow::Result<()> {
    while !session.is_finished() && session.match_state().turn() == SideId::Machine {
        let report = session
            .machine_turn()
            .map_err(|e| anyhow::anyhow!("machine turn failed: {}", e))?;
        let origin = coord_label(report.outcome.origin());
        println!(
            "Machine fires at {}: {:?}",
            origin,
            report.outcome.verdict()
        );
    }
    Ok(())
}

#[cfg(feature = "std")]
fn parse_command(line: &str) -> Option<(AttackKind, (usize, usize))> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?;
    let (kind, coord_token) = match parts.next() {
        None => (AttackKind::Point, first),
        Some(coord) => {
            let kind = match first.to_ascii_lowercase().as_str() {
                "fire" => AttackKind::Point,
                "cross" => AttackKind::Cross,
                "row" => AttackKind::Line(Axis::Row),
                "col" | "column" => AttackKind::Line(Axis::Column),
                "nuke" => AttackKind::Block,
                _ => return None,
            };
            (kind, coord)
        }
    };
    Some((kind, parse_coord(coord_token)?))
}

#[cfg(feature = "std")]
fn describe(report: &TurnReport) {
    let origin = coord_label(report.outcome.origin());
    println!(
        "{} at {} -> {:?} ({} hit(s), {} miss(es))",
        match report.outcome.kind() {
            AttackKind::Point => "Shot",
            AttackKind::Cross => "Cross bomb",
            AttackKind::Line(_) => "Torpedo",
            AttackKind::Block => "Nuke",
        },
        origin,
        report.outcome.verdict(),
        report.outcome.hits(),
        report.outcome.misses()
    );
}

#[cfg(feature = "std")]
fn print_boards(session: &GameSession) {
    println!();
    print!("{}", render_board(&session.own_board(), "Your fleet"));
    println!();
    print!(
        "{}",
        render_board(&session.tracking_board(), "Your shots")
    );
    let arsenal = session.arsenal();
    println!(
        "Charges: cross bombs {}, torpedoes {}, nukes {}",
        arsenal.remaining(Munition::CrossBomb),
        arsenal.remaining(Munition::Torpedo),
        arsenal.remaining(Munition::Nuke)
    );
    let state = session.match_state();
    println!(
        "Vessels afloat: you {}, machine {}",
        state.side(SideId::Human).board().remaining_vessel_count(),
        state.side(SideId::Machine).board().remaining_vessel_count()
    );
}

#[cfg(feature = "std")]
fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

/// AI-versus-AI spectator game, driven straight on the match.
#[cfg(feature = "std")]
fn auto(seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = make_rng(seed);
    let fleet = FleetSpec::standard();
    let mut game = Match::with_names("North", "South");
    fleet
        .deploy(&mut rng, game.board_mut(SideId::Human))
        .map_err(|e| anyhow::anyhow!("could not start game: {}", e))?;
    fleet
        .deploy(&mut rng, game.board_mut(SideId::Machine))
        .map_err(|e| anyhow::anyhow!("could not start game: {}", e))?;
    let mut players = [MachinePlayer::new(), MachinePlayer::new()];

    let mut attacks = 0usize;
    while !game.is_finished() {
        let side = game.turn();
        let attack: Attack = {
            let view = game.side(side).tracking();
            players[side.index()]
                .make_attack(view)
                .map_err(|e| anyhow::anyhow!(e))?
        };
        let outcome = game
            .execute_attack(&attack, side)
            .map_err(|e| anyhow::anyhow!("attack rejected: {}", e))?;
        players[side.index()].handle_attack_outcome(&outcome, game.side(side).tracking());
        attacks += 1;
        println!(
            "{:>3}. {} fires at {} -> {:?}",
            attacks,
            game.side(side).name(),
            coord_label(outcome.origin()),
            outcome.verdict()
        );
    }

    let winner = game
        .winner()
        .ok_or_else(|| anyhow::anyhow!("finished match has no winner"))?;
    println!(
        "{} wins after {} attacks",
        game.side(winner).name(),
        attacks
    );
    Ok(())
}
