use anyhow::{ensure, Context, Result};
use clap::Parser;
use seating_planner::core::repeats::{neighbour_repeats, MAX_SEATS};
use seating_planner::utils::logger;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "neighbour-odds")]
#[command(about = "Chance that a reshuffled row seats former neighbours together again")]
struct Args {
    /// Largest row length to tabulate
    #[arg(long, default_value = "10")]
    max: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    ensure!(args.max >= 2, "--max must be at least 2");
    ensure!(
        args.max <= MAX_SEATS,
        "--max must be at most {} (larger rows overflow the permutation count)",
        MAX_SEATS
    );
    if args.max > 12 {
        tracing::warn!("Exact counts beyond 12 seats take a long time");
    }

    for n in 2..=args.max {
        let start = Instant::now();
        let stats = neighbour_repeats(n)
            .with_context(|| format!("{}! does not fit in the permutation counter", n))?;
        let elapsed = start.elapsed();

        println!("N = {:>2} | {:.5} seconds", n, elapsed.as_secs_f64());
        println!(
            "{:<30} | {:<6}",
            format!("{} / {}", stats.repeats, stats.total),
            format!("{:.2}%", stats.percent())
        );
        println!();
    }

    Ok(())
}
