//! The `kona-host` server executor.

use crate::{
    Config, ConfigurationError, LocalGameInputs, LogLevel, OracleArgs, OracleCommand,
    OracleLogger, OracleResult, OracleServerExecutor,
};

/// Named networks `kona-host` can resolve through the superchain registry, by L2 chain ID.
const KNOWN_NETWORKS: [(&str, u64); 4] = [
    ("op-mainnet", 10),
    ("op-sepolia", 11_155_420),
    ("base-mainnet", 8453),
    ("base-sepolia", 84_532),
];

/// `-v` flags indexed by [LogLevel::host_verbosity].
const VERBOSITY_FLAGS: [&str; 5] = ["", "-v", "-vv", "-vvv", "-vvvv"];

/// Resolves a network name to its L2 chain ID. Decimal chain IDs are accepted as is.
pub fn chain_id_for_network(network: &str) -> Result<u64, ConfigurationError> {
    if let Ok(chain_id) = network.parse::<u64>() {
        return Ok(chain_id);
    }
    KNOWN_NETWORKS
        .iter()
        .find(|(name, _)| *name == network)
        .map(|(_, chain_id)| *chain_id)
        .ok_or_else(|| ConfigurationError::UnknownNetwork(network.to_string()))
}

/// An [OracleServerExecutor] for `kona-host` in single-chain mode.
///
/// In server mode the host serves preimages out of the data directory to a client program run
/// by the fault proof VM. In native mode it runs the client program itself.
#[derive(Debug, Clone, Default)]
pub struct KonaHostExecutor<L> {
    logger: L,
    native: bool,
}

impl<L: OracleLogger> KonaHostExecutor<L> {
    /// Creates a new [KonaHostExecutor] in server mode.
    pub const fn new(logger: L) -> Self {
        Self { logger, native: false }
    }

    /// Creates a new [KonaHostExecutor] that runs the client program natively.
    pub const fn native(logger: L) -> Self {
        Self { logger, native: true }
    }
}

impl<L: OracleLogger> OracleServerExecutor for KonaHostExecutor<L> {
    fn oracle_command(
        &self,
        cfg: &Config,
        data_dir: &str,
        inputs: &LocalGameInputs,
    ) -> OracleResult<OracleCommand> {
        cfg.validate()?;
        if !self.native && data_dir.trim().is_empty() {
            return Err(ConfigurationError::MissingDataDir.into());
        }
        let level = LogLevel::try_from(self.logger.severity())?;
        let block_number = u64::try_from(inputs.l2_block_number)
            .map_err(|_| ConfigurationError::BlockNumberOverflow(inputs.l2_block_number))?;
        let l2 = cfg.primary_l2().ok_or(ConfigurationError::MissingL2)?;
        // `--rollup-config-path` and `--l2-chain-id` are mutually exclusive; exactly one is set.
        let rollup_config = cfg.rollup_config_paths.first();
        let chain_id = match (rollup_config, cfg.networks.first()) {
            (Some(_), _) => None,
            (None, Some(network)) => Some(chain_id_for_network(network)?),
            (None, None) => return Err(ConfigurationError::MissingChainConfig.into()),
        };

        // `-v` belongs to the top-level command, ahead of the `single` subcommand.
        let verbosity = VERBOSITY_FLAGS[level.host_verbosity() as usize];
        let mut args = OracleArgs::new()
            .bare_if(!verbosity.is_empty(), verbosity)
            .bare("single")
            .flag("--l1-node-address", &cfg.l1)
            .flag("--l1-beacon-address", &cfg.l1_beacon)
            .flag("--l2-node-address", l2)
            .flag("--l1-head", inputs.l1_head)
            .flag("--agreed-l2-head-hash", inputs.l2_head)
            .flag("--agreed-l2-output-root", inputs.l2_output_root)
            .flag("--claimed-l2-output-root", inputs.l2_claim)
            .flag("--claimed-l2-block-number", block_number);

        args = if self.native {
            args.bare("--native")
        } else {
            args.bare("--server").flag("--data-dir", data_dir)
        };
        args = match (rollup_config, chain_id) {
            (Some(path), _) => args.flag("--rollup-config-path", path),
            (None, Some(chain_id)) => args.flag("--l2-chain-id", chain_id),
            (None, None) => args,
        };

        let cmd = OracleCommand { program: cfg.server.clone(), args };
        self.logger.log(level, &format!("Built kona-host command: {cmd}"));
        Ok(cmd)
    }
}
