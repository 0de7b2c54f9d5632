//! The console program: one trial, then a batch of draws.
//!
//! Results are printed to stdout; diagnostics (per-trial roll counts, batch
//! mean) go through `tracing`.

use anyhow::Result;
use sixsim_domain::{draw_batch, first_six};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::random::ThreadDie;

pub fn run() -> Result<()> {
    tracing::info!("Starting SixSim");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Draws: {}", config.draws);

    let die = ThreadDie::new();

    println!("Simulating the first entree time of rolling a six:");
    let first = first_six(&die);
    tracing::debug!("Counted executions: {}", first.attempts());
    println!("First entree time of rolling a six: {first}");

    let n = config.draws;
    println!();
    println!("Simulating {n} draws of the first entree time of rolling a six:");
    let batch = draw_batch(&die, n);
    if let Some(mean) = batch.mean_attempts() {
        tracing::debug!("Batch finished: outcomes {}, mean {:.2}", batch, mean);
    }
    println!("Results of {n} draws: {batch}");

    Ok(())
}
