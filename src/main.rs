use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use guess_the_number::{play, GameConfig};

/// Guess the secret number in as few tries as possible.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Lowest possible number
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i64,

    /// Highest possible number
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    max: i64,

    /// Seed for a reproducible secret number
    #[arg(long)]
    seed: Option<u64>,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run<R: BufRead, W: Write>(args: &Args, input: R, output: W) -> Result<()> {
    let mut config = GameConfig::new(args.min, args.max).context("Cannot start game")?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    play(&config, input, output).context("Game ended before the number was guessed")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args, io::stdin().lock(), io::stdout().lock())
}
