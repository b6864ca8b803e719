//! # Guardian Bridge Node
//!
//! Reads hex-encoded VAAs from stdin, one per line, and executes each
//! against the node's state. Every outcome is logged; the process exits on
//! end of input or Ctrl+C.
//!
//! ## Environment Variables
//!
//! - `BRIDGE_CONFIG`: JSON config file, loaded before the overrides below
//! - `BRIDGE_CHAIN_ID`, `BRIDGE_GOVERNANCE_CHAIN`, `BRIDGE_GOVERNANCE_EMITTER`
//! - `BRIDGE_GUARDIANS`, `BRIDGE_GUARDIAN_SET_EXPIRY_SECS`
//! - `BRIDGE_TOKEN_BRIDGE_EMITTER`, `BRIDGE_RELAYER`
//! - `BRIDGE_LOG_LEVEL` / `RUST_LOG`, `BRIDGE_JSON_LOGS`

use std::sync::Arc;

use anyhow::{Context, Result};
use bridge_runtime::{BridgeConfig, BridgeNode};
use bridge_telemetry::{gather_metrics, init_telemetry};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BridgeConfig::load().context("Failed to load bridge configuration")?;
    init_telemetry(&config.telemetry).context("Failed to initialize telemetry")?;

    let relayer = config.relayer()?;
    let node = Arc::new(BridgeNode::new(config).context("Failed to build bridge node")?);
    info!(
        chain = %node.config().chain(),
        guardian_set = node.active_guardian_set(),
        "bridge node ready, reading VAAs from stdin"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut submitted = 0u64;
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("Failed to read stdin")?,
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                break;
            }
        };
        let Some(line) = line else { break };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let bytes = match hex::decode(line.strip_prefix("0x").unwrap_or(line)) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("skipping line that is not hex: {e}");
                continue;
            }
        };

        submitted += 1;
        let worker = node.clone();
        let outcome = tokio::task::spawn_blocking(move || worker.submit_vaa(&bytes, relayer))
            .await
            .context("Submit task panicked")?;
        match outcome {
            Ok(outcome) => info!(kind = outcome.kind(), "VAA executed: {outcome:?}"),
            Err(e) => warn!(disposition = %e.disposition(), "VAA rejected: {e}"),
        }
    }

    info!(submitted, claims = node.ledger().len(), "bridge node stopped");
    match gather_metrics() {
        Ok(metrics) => debug!("final metrics:\n{metrics}"),
        Err(e) => error!("failed to gather metrics: {e}"),
    }
    Ok(())
}
