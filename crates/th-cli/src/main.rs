//! Terminal frontend for Treasure Hunter.

mod logging;
mod play;
mod render;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "treasure-hunter",
    about = "Treasure Hunter: roam from town to town in search of treasure",
    version
)]
struct Cli {
    /// RNG seed for a reproducible game (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(rand::random);

    let result = logging::init(cli.log_file.as_deref()).and_then(|()| {
        log::info!("starting game with seed {seed}");
        play::run(io::stdin().lock(), io::stdout(), seed)
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
