mod branching;
mod collector;
mod plot;
mod report;
mod stats;

use crate::branching::BranchingSimulator;
use crate::collector::CollectorSimulator;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// Directory where plot artifacts are written.
    #[arg(long, default_value = "plots")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the coupon-collector sweep (k = 8..=16, n = 2^k).
    Coupons,

    /// Run the branching-process sweep over the three offspring distributions.
    Branching {
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {:?}", args.out_dir))?;

    match args.command {
        Command::Coupons => run_coupons(&args.out_dir)?,
        Command::Branching { seed } => run_branching(&args.out_dir, seed)?,
    }

    Ok(())
}

fn run_coupons(out_dir: &Path) -> Result<()> {
    let mut sim = CollectorSimulator::from_os_rng().context("failed to construct simulator")?;

    let points = sim.run_sweep().context("failed to run coupon sweep")?;

    report::print_coupon_table(&points);

    let file = out_dir.join("coupon_collector.png");
    plot::render_coupon_chart(&points, &file).context("failed to render coupon chart")?;
    log::info!("wrote {file:?}");

    // Fixed-workload timing probe: 100 trials with 10000 coupon types.
    let start = Instant::now();
    sim.average_over_trials(10_000, 100)
        .context("failed to run timing workload")?;
    let seconds = start.elapsed().as_secs_f64();
    println!("\nTime taken for 100 trials with 10000 coupons: {seconds:.2} seconds");

    Ok(())
}

fn run_branching(out_dir: &Path, seed: u64) -> Result<()> {
    let mut sim = BranchingSimulator::from_seed(seed);

    let series = sim.run_sweep();

    let file = out_dir.join("branching_process.png");
    plot::render_branching_chart(&series, &file).context("failed to render branching chart")?;
    log::info!("wrote {file:?}");

    Ok(())
}
