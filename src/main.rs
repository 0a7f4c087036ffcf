use std::io::{self, Write};

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::ui::{greeting, write_boards, ConsoleReporter};
use seabattle::{
    init_logging, AutomatedCombatant, ConsoleInput, HumanCombatant, MatchController, MatchError,
    MatchObserver, MatchState, NullObserver, Side, BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = BOARD_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new()
            .range(MIN_BOARD_SIZE as u64..=MAX_BOARD_SIZE as u64),
        help = "Board side length"
    )]
    size: usize,
    #[arg(long, help = "Let the computer play both sides")]
    autoplay: bool,
    #[arg(long, requires = "autoplay", help = "Only print the result of an autoplay match")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    if cli.autoplay {
        autoplay(cli.size, rng, cli.quiet)
    } else {
        play(cli.size, rng)
    }
}

/// Human (first, moves first) against the computer.
fn play(size: usize, rng: SmallRng) -> anyhow::Result<()> {
    println!("{}", greeting());
    let human = HumanCombatant::new(ConsoleInput::stdio());
    let mut controller = MatchController::with_random_fleets(
        Box::new(human),
        Box::new(AutomatedCombatant::new()),
        size,
        rng,
    );
    let mut reporter = ConsoleReporter::with_names(io::stdout(), "You", "Computer");

    controller.start();
    loop {
        show_boards(&controller, "Your board", "Computer's board")?;
        match controller.step(&mut reporter) {
            Ok(MatchState::Finished { .. }) => break,
            Ok(_) => {}
            Err(MatchError::InputClosed) => {
                println!("Input closed, leaving the game.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }
    if let Some(e) = reporter.take_error() {
        return Err(e.into());
    }
    Ok(())
}

/// Computer against computer.
fn autoplay(size: usize, rng: SmallRng, quiet: bool) -> anyhow::Result<()> {
    let mut controller = MatchController::with_random_fleets(
        Box::new(AutomatedCombatant::new()),
        Box::new(AutomatedCombatant::new()),
        size,
        rng,
    );

    let winner = if quiet {
        controller.run(&mut NullObserver)?
    } else {
        let mut reporter = ConsoleReporter::with_names(io::stdout(), "Computer 1", "Computer 2");
        let winner = run_shown(&mut controller, &mut reporter)?;
        if let Some(e) = reporter.take_error() {
            return Err(e.into());
        }
        winner
    };

    let name = match winner {
        Side::First => "Computer 1",
        Side::Second => "Computer 2",
    };
    println!("{} won after {} shots", name, controller.shots());
    Ok(())
}

fn run_shown(
    controller: &mut MatchController,
    observer: &mut dyn MatchObserver,
) -> anyhow::Result<Side> {
    controller.start();
    loop {
        show_boards(controller, "Computer 1", "Computer 2")?;
        if let MatchState::Finished { winner } = controller.step(observer)? {
            return Ok(winner);
        }
    }
}

fn show_boards(controller: &MatchController, first: &str, second: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_boards(
        &mut out,
        (first, controller.board(Side::First)),
        (second, controller.board(Side::Second)),
    )?;
    out.flush()
}
