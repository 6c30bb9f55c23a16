//! Error types for oracle command construction.

use alloy_primitives::U256;
use thiserror::Error;

/// A [Result] type for the [OracleCommandError].
pub type OracleResult<T> = Result<T, OracleCommandError>;

/// An error returned while building an oracle server command. No partial argument list is ever
/// returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleCommandError {
    /// The [Config] or data directory is missing a required value.
    ///
    /// [Config]: crate::Config
    #[error("Invalid oracle configuration: {0}")]
    Configuration(#[from] ConfigurationError),
    /// The logger's severity could not be mapped to a server log level.
    #[error("Log level mapping error: {0}")]
    LevelMapping(#[from] LevelMappingError),
}

/// A required field of the oracle configuration is empty or malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// No L1 RPC endpoint.
    #[error("missing L1 RPC endpoint")]
    MissingL1,
    /// No L1 beacon endpoint.
    #[error("missing L1 beacon endpoint")]
    MissingL1Beacon,
    /// No L2 RPC endpoints.
    #[error("at least one L2 RPC endpoint is required")]
    MissingL2,
    /// An L2 RPC endpoint in the list is blank.
    #[error("L2 RPC endpoint at index {index} is empty")]
    EmptyL2 {
        /// Position of the blank entry.
        index: usize,
    },
    /// No server executable.
    #[error("missing oracle server path")]
    MissingServer,
    /// No data directory.
    #[error("missing data directory")]
    MissingDataDir,
    /// The network name is neither a chain ID nor a known preset.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    /// Neither a network nor a rollup config path to identify the L2 chain.
    #[error("either a network or a rollup config path is required")]
    MissingChainConfig,
    /// The server only accepts 64-bit block numbers.
    #[error("L2 block number {0} does not fit in 64 bits")]
    BlockNumberOverflow(U256),
}

/// A severity outside of the six levels the oracle servers understand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelMappingError {
    /// A numeric severity with no matching level.
    #[error("unsupported log severity: {0}")]
    Severity(i32),
    /// A level name that could not be parsed.
    #[error("unsupported log level name: {0}")]
    Name(String),
}
