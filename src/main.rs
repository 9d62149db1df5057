#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use mastermind::{init_logging, session, Outcome, TerminalConsole};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, IsTerminal};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for a reproducible secret code (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Print messages without terminal colors")]
    no_color: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        log::info!("Using fixed seed: {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let color = !cli.no_color && io::stdout().is_terminal();
    let mut console = TerminalConsole::stdio(color);
    let outcome = session::run(&mut console, &mut rng).context("terminal input failed")?;

    match outcome {
        Some(Outcome::Won) | Some(Outcome::Lost) => {}
        Some(Outcome::Aborted) | None => log::info!("Exiting on end of input"),
    }
    Ok(())
}
