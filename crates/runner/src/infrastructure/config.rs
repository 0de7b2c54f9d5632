//! Application configuration

use std::env;

use anyhow::{Context, Result};
use sixsim_domain::DrawCount;

/// Batch size when `SIXSIM_DRAWS` is unset.
const DEFAULT_DRAWS: i64 = 10;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Number of draws the batch run performs
    pub draws: DrawCount,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let draws = parse_draws(env::var("SIXSIM_DRAWS").ok().as_deref())?;
        Ok(Self { draws })
    }
}

fn parse_draws(raw: Option<&str>) -> Result<DrawCount> {
    let n: i64 = match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("SIXSIM_DRAWS must be an integer, got '{raw}'"))?,
        None => DEFAULT_DRAWS,
    };
    DrawCount::new(n).context("SIXSIM_DRAWS must be non-negative")
}
