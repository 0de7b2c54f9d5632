//! SixSim - first entree time of rolling a six.
//!
//! This crate is the *composition root*: it wires the thread-RNG die adapter
//! to the domain simulation and runs the console program.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod infrastructure;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging. Diagnostics go to stderr so the printed results
    // stay clean on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sixsim_runner=debug,sixsim_domain=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    app::run()
}
