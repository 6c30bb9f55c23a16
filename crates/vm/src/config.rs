//! Oracle server configuration and the per-game inputs it is combined with.

use crate::ConfigurationError;
use alloy_primitives::{B256, U256};

/// Static configuration for launching an oracle server.
///
/// The executors only ever read a [Config]; it is never modified while a command is built.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Config {
    /// L1 JSON-RPC endpoint.
    pub l1: String,
    /// L1 beacon API endpoint.
    pub l1_beacon: String,
    /// L2 JSON-RPC endpoints. The first entry is the primary source.
    pub l2s: Vec<String>,
    /// Path to the oracle server executable.
    pub server: String,
    /// Named network presets.
    pub networks: Vec<String>,
    /// Paths to rollup configuration files.
    pub rollup_config_paths: Vec<String>,
    /// Paths to L2 genesis files.
    pub l2_genesis_paths: Vec<String>,
    /// Whether the L2 chain is a custom chain unknown to the server.
    pub l2_custom: bool,
}

impl Config {
    /// Checks that every required endpoint and the server path are present.
    ///
    /// `networks`, `rollup_config_paths` and `l2_genesis_paths` are independently optional and
    /// are not checked against each other.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.l1.trim().is_empty() {
            return Err(ConfigurationError::MissingL1);
        }
        if self.l1_beacon.trim().is_empty() {
            return Err(ConfigurationError::MissingL1Beacon);
        }
        if self.l2s.is_empty() {
            return Err(ConfigurationError::MissingL2);
        }
        if let Some(index) = self.l2s.iter().position(|l2| l2.trim().is_empty()) {
            return Err(ConfigurationError::EmptyL2 { index });
        }
        if self.server.trim().is_empty() {
            return Err(ConfigurationError::MissingServer);
        }
        Ok(())
    }

    /// Returns the primary L2 endpoint, if any.
    pub fn primary_l2(&self) -> Option<&str> {
        self.l2s.first().map(String::as_str)
    }
}

/// The local inputs of a single dispute game, provided by the game itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LocalGameInputs {
    /// Hash of the L1 head block.
    pub l1_head: B256,
    /// Hash of the agreed upon L2 block.
    pub l2_head: B256,
    /// Agreed L2 output root to start from.
    pub l2_output_root: B256,
    /// Claimed L2 output root to validate.
    pub l2_claim: B256,
    /// Number of the L2 block that the claim commits to.
    pub l2_block_number: U256,
}
