//! # Node Configuration
//!
//! Defaults, then an optional JSON file (`BRIDGE_CONFIG`), then environment
//! overrides. Addresses are hex strings (optional `0x` prefix); 32-byte
//! addresses may be given shorter and are left-padded.
//!
//! ## Security Requirements
//!
//! - The governance emitter and the token bridge emitter MUST NOT be zero
//! - The initial guardian set must pass the same checks as a rotation

use std::path::{Path, PathBuf};
use std::{env, fs};

use bridge_telemetry::TelemetryConfig;
use bridge_types::{left_pad_address, ChainId, Emitter, ExternalAddress, GuardianAddress};
use gb_01_guardian_sets::{validate_guardians, GuardianSetError, DEFAULT_EXPIRY_SECS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Devnet guardian used when no guardian set is configured.
const DEVNET_GUARDIAN: &str = "befa429d57cd18b7f8a4d91a2da9ab4af05d0fbe";

/// Complete node configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Chain this node executes on.
    pub chain_id: u16,
    pub governance: GovernanceConfig,
    pub guardians: GuardianConfig,
    pub token_bridge: TokenBridgeConfig,
    pub telemetry: TelemetryConfig,
}

/// Source of governance VAAs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    pub chain: u16,
    pub emitter: String,
}

/// Genesis guardian set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardianConfig {
    /// Guardian addresses (20 bytes each) in index order.
    pub initial: Vec<String>,
    /// Grace period of a superseded set, in seconds.
    pub expiry_secs: u32,
}

/// Token bridge of this chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenBridgeConfig {
    /// Emitter address of outbound token bridge messages.
    pub emitter: String,
    /// Account credited with relayer fees of VAAs this node submits.
    pub relayer: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            chain_id: ChainId::ETHEREUM.value(),
            governance: GovernanceConfig::default(),
            guardians: GuardianConfig::default(),
            token_bridge: TokenBridgeConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            chain: ChainId::SOLANA.value(),
            emitter: "0000000000000000000000000000000000000000000000000000000000000004".into(),
        }
    }
}

impl Default for GuardianConfig {
    fn default() -> Self {
        Self {
            initial: vec![DEVNET_GUARDIAN.to_string()],
            expiry_secs: DEFAULT_EXPIRY_SECS,
        }
    }
}

impl Default for TokenBridgeConfig {
    fn default() -> Self {
        Self {
            emitter: "0000000000000000000000000000000000000000000000000000000000000002".into(),
            relayer: "00".into(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid environment variable {var}={value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Invalid initial guardian set: {0}")]
    Guardians(#[from] GuardianSetError),
}

impl BridgeConfig {
    /// Defaults, `BRIDGE_CONFIG` file, environment overrides; validated.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env::var("BRIDGE_CONFIG") {
            Ok(path) => Self::from_json_file(path)?,
            Err(_) => Self::default(),
        };
        let config = base.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides, not validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Read a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Apply `BRIDGE_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let mut config = self.with_overrides(|var| env::var(var).ok())?;
        config.telemetry = config.telemetry.with_env_overrides();
        Ok(config)
    }

    /// Apply `BRIDGE_*` overrides from `lookup`.
    ///
    /// # Environment Variables
    ///
    /// - `BRIDGE_CHAIN_ID`: host chain id
    /// - `BRIDGE_GOVERNANCE_CHAIN`: governance emitter chain
    /// - `BRIDGE_GOVERNANCE_EMITTER`: governance emitter address
    /// - `BRIDGE_GUARDIANS`: comma separated guardian addresses
    /// - `BRIDGE_GUARDIAN_SET_EXPIRY_SECS`: superseded set grace period
    /// - `BRIDGE_TOKEN_BRIDGE_EMITTER`: this chain's token bridge emitter
    /// - `BRIDGE_RELAYER`: relayer fee account
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("BRIDGE_CHAIN_ID") {
            self.chain_id = parse_env("BRIDGE_CHAIN_ID", value)?;
        }
        if let Some(value) = lookup("BRIDGE_GOVERNANCE_CHAIN") {
            self.governance.chain = parse_env("BRIDGE_GOVERNANCE_CHAIN", value)?;
        }
        if let Some(value) = lookup("BRIDGE_GOVERNANCE_EMITTER") {
            self.governance.emitter = value;
        }
        if let Some(value) = lookup("BRIDGE_GUARDIANS") {
            self.guardians.initial = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(value) = lookup("BRIDGE_GUARDIAN_SET_EXPIRY_SECS") {
            self.guardians.expiry_secs = parse_env("BRIDGE_GUARDIAN_SET_EXPIRY_SECS", value)?;
        }
        if let Some(value) = lookup("BRIDGE_TOKEN_BRIDGE_EMITTER") {
            self.token_bridge.emitter = value;
        }
        if let Some(value) = lookup("BRIDGE_RELAYER") {
            self.token_bridge.relayer = value;
        }
        Ok(self)
    }

    /// Check every field a node needs before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id == 0 {
            return Err(ConfigError::InvalidField {
                field: "chain_id",
                reason: "chain 0 is the governance wildcard".into(),
            });
        }
        if self.governance.chain == 0 {
            return Err(ConfigError::InvalidField {
                field: "governance.chain",
                reason: "must be non-zero".into(),
            });
        }
        if self.governance_emitter()?.address == [0u8; 32] {
            return Err(ConfigError::InvalidField {
                field: "governance.emitter",
                reason: "must be non-zero".into(),
            });
        }
        validate_guardians(&self.initial_guardians()?)?;
        if self.token_bridge_emitter()? == [0u8; 32] {
            return Err(ConfigError::InvalidField {
                field: "token_bridge.emitter",
                reason: "must be non-zero".into(),
            });
        }
        self.relayer()?;
        Ok(())
    }

    pub fn chain(&self) -> ChainId {
        ChainId(self.chain_id)
    }

    pub fn governance_emitter(&self) -> Result<Emitter, ConfigError> {
        let address = decode_address("governance.emitter", &self.governance.emitter)?;
        Ok(Emitter::new(ChainId(self.governance.chain), address))
    }

    pub fn initial_guardians(&self) -> Result<Vec<GuardianAddress>, ConfigError> {
        self.guardians
            .initial
            .iter()
            .map(|g| decode_hex::<20>("guardians.initial", g))
            .collect()
    }

    pub fn token_bridge_emitter(&self) -> Result<ExternalAddress, ConfigError> {
        decode_address("token_bridge.emitter", &self.token_bridge.emitter)
    }

    pub fn relayer(&self) -> Result<ExternalAddress, ConfigError> {
        decode_address("token_bridge.relayer", &self.token_bridge.relayer)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

fn strip_hex(value: &str) -> &str {
    let value = value.trim();
    value.strip_prefix("0x").unwrap_or(value)
}

fn decode_hex<const N: usize>(field: &'static str, value: &str) -> Result<[u8; N], ConfigError> {
    let bytes = hex::decode(strip_hex(value)).map_err(|e| ConfigError::InvalidField {
        field,
        reason: format!("{value:?}: {e}"),
    })?;
    bytes.try_into().map_err(|bytes: Vec<u8>| ConfigError::InvalidField {
        field,
        reason: format!("expected {N} bytes, got {}", bytes.len()),
    })
}

/// Up to 32 bytes, left-padded.
fn decode_address(field: &'static str, value: &str) -> Result<ExternalAddress, ConfigError> {
    let bytes = hex::decode(strip_hex(value)).map_err(|e| ConfigError::InvalidField {
        field,
        reason: format!("{value:?}: {e}"),
    })?;
    left_pad_address(&bytes).ok_or_else(|| ConfigError::InvalidField {
        field,
        reason: format!("expected at most 32 bytes, got {}", bytes.len()),
    })
}
