use battleships::{config::DEFAULT_FLEET, render, FleetBuilder, RenderOptions};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <seed> [size] [length...]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => battleships::config::DEFAULT_BOARD_SIZE,
    };
    let lengths: Vec<usize> = if args.len() > 3 {
        args[3..].iter().map(|s| s.parse()).collect::<Result<_, _>>()?
    } else {
        DEFAULT_FLEET.to_vec()
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let builder = FleetBuilder::new(size).with_ships(lengths);
    let (grid, fleet) = builder.build(&mut rng)?;

    let board: Vec<String> = render(&grid, RenderOptions::REVEAL)
        .lines()
        .map(str::to_string)
        .collect();
    let result = json!({
        "seed": seed,
        "size": size,
        "requested": builder.requested(),
        "placed": fleet.len(),
        "skipped": fleet.skipped(),
        "ships": fleet.ships(),
        "board": board,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
