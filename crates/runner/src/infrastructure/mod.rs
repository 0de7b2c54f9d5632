//! Infrastructure adapters: the production die and env-based configuration.

pub mod config;
pub mod random;
