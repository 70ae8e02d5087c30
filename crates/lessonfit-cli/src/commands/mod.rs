pub mod budget;
pub mod config;
pub mod fit;
pub mod parse;
pub mod plan;
pub mod schedule;

use std::future::Future;

use clap::Args;
use lessonfit_core::{Config, Planner};

/// Oracle switches shared by every command that may consult it.
#[derive(Args, Debug, Clone)]
pub struct OracleArgs {
    /// Skip the oracle and use the deterministic engine only
    #[arg(long)]
    pub offline: bool,
    /// Oracle base URL, overriding the configured one
    #[arg(long, value_name = "URL")]
    pub oracle_url: Option<String>,
}

impl OracleArgs {
    pub fn planner(&self) -> Result<Planner, Box<dyn std::error::Error>> {
        let mut config = Config::load_or_default();
        if self.offline {
            config.oracle.enabled = false;
        }
        if let Some(url) = &self.oracle_url {
            config.oracle.base_url = url.clone();
        }
        Ok(Planner::from_config(&config)?)
    }
}

/// Run a future to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output, Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
