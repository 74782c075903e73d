use crate::core::cli::Cli;
use anyhow::{bail, Result};
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub first_path: Option<String>,
    pub last_path: Option<String>,
    pub count: usize,
    pub format: String,
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Pure constructor for testing
    pub fn new(
        first_path: Option<String>,
        last_path: Option<String>,
        count: usize,
        format: String,
        seed: Option<u64>,
    ) -> Self {
        Self {
            first_path,
            last_path,
            count,
            format,
            seed,
        }
    }

    /// CLI flags win; DECOY_FIRST_NAMES / DECOY_LAST_NAMES fill the gaps.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        dotenv::dotenv().ok();

        let first_path = cli
            .first
            .clone()
            .or_else(|| env::var("DECOY_FIRST_NAMES").ok());
        let last_path = cli
            .last
            .clone()
            .or_else(|| env::var("DECOY_LAST_NAMES").ok());

        if first_path.is_some() != last_path.is_some() {
            bail!("first and last name list paths must be provided together");
        }

        match cli.format.as_str() {
            "text" | "json" => {}
            other => bail!("unknown output format: {}", other),
        }

        Ok(Self::new(
            first_path,
            last_path,
            cli.count,
            cli.format.clone(),
            cli.seed,
        ))
    }
}
