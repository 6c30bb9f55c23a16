//! The [OracleServerExecutor] trait and the `op-program` server executor.

use crate::{
    Config, ConfigurationError, LocalGameInputs, LogLevel, OracleArgs, OracleCommand,
    OracleLogger, OracleResult,
};

/// Builds the command used to launch an oracle server for a single dispute game.
pub trait OracleServerExecutor: Send + Sync {
    /// Returns the command that runs the server against `data_dir` for the given game inputs.
    ///
    /// Building a command performs no I/O; `data_dir` is passed through as is.
    fn oracle_command(
        &self,
        cfg: &Config,
        data_dir: &str,
        inputs: &LocalGameInputs,
    ) -> OracleResult<OracleCommand>;
}

/// An [OracleServerExecutor] for `op-program` running in server mode.
#[derive(Debug, Clone, Default)]
pub struct OpProgramExecutor<L> {
    logger: L,
}

impl<L: OracleLogger> OpProgramExecutor<L> {
    /// Creates a new [OpProgramExecutor] that logs to `logger`. The logger's severity also sets
    /// the server's `--log.level`.
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }
}

impl<L: OracleLogger> OracleServerExecutor for OpProgramExecutor<L> {
    fn oracle_command(
        &self,
        cfg: &Config,
        data_dir: &str,
        inputs: &LocalGameInputs,
    ) -> OracleResult<OracleCommand> {
        build_oracle_command(&self.logger, cfg, data_dir, inputs)
    }
}

/// Builds the `op-program` server command.
///
/// Flags are emitted in a fixed order:
///
/// `--server`, `--l1`, `--l1.beacon`, `--l2`, `--datadir`, `--l1.head`, `--l2.head`,
/// `--l2.outputroot`, `--l2.claim`, `--l2.blocknumber`, `--log.level`, then `--network`,
/// `--rollup.config` and `--l2.genesis` when their lists are non-empty, and finally the bare
/// `--l2.custom` flag when [Config::l2_custom] is set.
///
/// List values are joined with `,` in their configured order. Either the full command is
/// returned, or an error and nothing else.
pub fn build_oracle_command<L: OracleLogger + ?Sized>(
    logger: &L,
    cfg: &Config,
    data_dir: &str,
    inputs: &LocalGameInputs,
) -> OracleResult<OracleCommand> {
    cfg.validate()?;
    if data_dir.trim().is_empty() {
        return Err(ConfigurationError::MissingDataDir.into());
    }
    let level = LogLevel::try_from(logger.severity())?;

    let args = OracleArgs::new()
        .flag("--server", &cfg.server)
        .flag("--l1", &cfg.l1)
        .flag("--l1.beacon", &cfg.l1_beacon)
        .joined_flag("--l2", &cfg.l2s)
        .flag("--datadir", data_dir)
        .flag("--l1.head", inputs.l1_head)
        .flag("--l2.head", inputs.l2_head)
        .flag("--l2.outputroot", inputs.l2_output_root)
        .flag("--l2.claim", inputs.l2_claim)
        .flag("--l2.blocknumber", inputs.l2_block_number)
        .flag("--log.level", level.oracle_token())
        .joined_flag("--network", &cfg.networks)
        .joined_flag("--rollup.config", &cfg.rollup_config_paths)
        .joined_flag("--l2.genesis", &cfg.l2_genesis_paths)
        .bare_if(cfg.l2_custom, "--l2.custom");

    let cmd = OracleCommand { program: cfg.server.clone(), args };
    logger.log(level, &format!("Built op-program server command: {cmd}"));
    Ok(cmd)
}
