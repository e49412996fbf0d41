//! # Ledger Runtime
//!
//! Runs the demo flow once: two mined transfers, chain validation, and one
//! order lifecycle. Prints the report as JSON on stdout and exits non-zero
//! when the chain fails validation.
//!
//! Configuration comes from `LEDGER_DIFFICULTY` and `LEDGER_LOG`;
//! `RUST_LOG` takes precedence over `LEDGER_LOG` when set.

use anyhow::{bail, Context, Result};
use ledger_runtime::{load_config, LedgerRuntime};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration; warnings go to a bootstrap subscriber
    let bootstrap = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, load_config);

    // Initialize logging
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = config
        .log_filter(rust_log.as_deref())
        .context("Invalid log filter")?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let runtime = LedgerRuntime::new(config)?;
    info!(
        difficulty = runtime.config().chain.difficulty,
        "Ledger runtime started"
    );

    let report = runtime.run_demo().await?;
    for (index, block) in report.blocks.iter().enumerate() {
        info!(index, hash = %block.hash, prev = %block.prev_hash, "Block");
    }

    let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
    println!("{json}");

    if !report.chain_valid {
        bail!("Chain failed validation");
    }
    Ok(())
}
