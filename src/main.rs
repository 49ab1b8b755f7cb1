#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    cli::{gallery, run_interactive, write_board},
    config::{DEFAULT_BOARD_SIZE, DEFAULT_FLEET},
    init_logging, Coordinate, FleetBuilder, GameSession, RenderOptions,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Instant;

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
    /// Fire along the main diagonal of a standard board and show the result.
    Demo {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play a game from the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, value_delimiter = ',', help = "Ship lengths, e.g. --ships 5,4,4,2")]
        ships: Option<Vec<usize>>,
        #[arg(long, help = "Show ship positions on the board")]
        reveal: bool,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Print a mosaic of freshly generated boards.
    Gallery {
        #[arg(long, default_value_t = 20)]
        rows: usize,
        #[arg(long, default_value_t = 20)]
        cols: usize,
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (boards will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { seed } => {
            let mut rng = make_rng(seed);
            let builder = FleetBuilder::default().with_ships(DEFAULT_FLEET);
            let mut game = GameSession::new(&builder, &mut rng)?;
            for i in 0..DEFAULT_BOARD_SIZE {
                game.shoot(Coordinate::new(i, i))?;
            }
            println!("{}", game.remaining_ships());
            print!("{}", game.render(RenderOptions::REVEAL));
        }
        Commands::Play {
            size,
            ships,
            reveal,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let lengths = ships.unwrap_or_else(|| DEFAULT_FLEET.to_vec());
            let builder = FleetBuilder::new(size).with_ships(lengths);
            let mut game = GameSession::new(&builder, &mut rng)?;
            let skipped = game.fleet().skipped();
            if !skipped.is_empty() {
                println!("Could not fit ships of length {:?}; playing without them.", skipped);
            }
            let options = RenderOptions {
                reveal_ships: reveal,
            };
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_interactive(&mut game, stdin.lock(), &mut stdout, options)?;
            if !game.is_over() {
                println!("Final board:");
                write_board(&mut stdout, game.grid(), RenderOptions::REVEAL)?;
            }
        }
        Commands::Gallery { rows, cols, seed } => {
            let mut rng = make_rng(seed);
            let builder = FleetBuilder::default().with_ships(DEFAULT_FLEET);
            let started = Instant::now();
            let mosaic = gallery(&builder, rows, cols, &mut rng)?;
            let elapsed = started.elapsed();
            print!("{}", mosaic);
            println!("{} boards in {} ms", rows * cols, elapsed.as_millis());
        }
    }
    Ok(())
}
