//! Configuration module

use std::env;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Number of records to seed the store with at startup
    pub seed_records: usize,

    /// RNG seed for the deterministic bulk batch
    pub rng_seed: u64,

    /// Directory CSV exports are written into
    pub export_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            seed_records: env::var("SEED_RECORDS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5000),

            rng_seed: env::var("RNG_SEED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(42),

            export_dir: env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("exports")),
        }
    }
}
