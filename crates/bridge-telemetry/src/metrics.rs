//! Prometheus metrics for Guardian Bridge.
//!
//! All metrics follow the naming convention: `gb_<area>_<metric>_total`

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Opts, Registry, TextEncoder};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // VERIFICATION
    // =========================================================================

    /// VAAs that passed quorum verification
    pub static ref VAAS_VERIFIED: Counter = Counter::new(
        "gb_vaa_verified_total",
        "Total number of VAAs that passed verification"
    ).expect("metric creation failed");

    /// Rejected VAAs by reason
    pub static ref VAAS_REJECTED: CounterVec = CounterVec::new(
        Opts::new("gb_vaa_rejected_total", "VAAs rejected during parse or verification"),
        &["reason"]  // reason: malformed/expired_set/invalid_signature/...
    ).expect("metric creation failed");

    // =========================================================================
    // REPLAY PROTECTION
    // =========================================================================

    /// Claims committed
    pub static ref CLAIMS_RECORDED: Counter = Counter::new(
        "gb_claims_recorded_total",
        "Total number of VAAs executed and claimed"
    ).expect("metric creation failed");

    /// Resubmissions of already executed VAAs
    pub static ref REPLAYS_REJECTED: Counter = Counter::new(
        "gb_replays_rejected_total",
        "Total number of already executed VAAs rejected"
    ).expect("metric creation failed");

    // =========================================================================
    // EFFECTS
    // =========================================================================

    /// Governance actions executed by module
    pub static ref GOVERNANCE_ACTIONS: CounterVec = CounterVec::new(
        Opts::new("gb_governance_actions_total", "Governance actions executed"),
        &["module"]  // module: Core/TokenBridge
    ).expect("metric creation failed");

    /// Token bridge VAAs redeemed by payload kind
    pub static ref TRANSFERS_COMPLETED: CounterVec = CounterVec::new(
        Opts::new("gb_transfers_completed_total", "Token bridge VAAs redeemed"),
        &["kind"]  // kind: transfer/transfer_with_payload/wrapped_created/wrapped_updated
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry. Idempotent.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(VAAS_VERIFIED.clone()),
        Box::new(VAAS_REJECTED.clone()),
        Box::new(CLAIMS_RECORDED.clone()),
        Box::new(REPLAYS_REJECTED.clone()),
        Box::new(GOVERNANCE_ACTIONS.clone()),
        Box::new(TRANSFERS_COMPLETED.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
}

/// Encode all metrics as Prometheus text format.
pub fn gather_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}
