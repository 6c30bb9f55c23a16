//! This module contains all CLI-specific code for the oracle command builder.

use alloy_primitives::{B256, U256};
use anyhow::{anyhow, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use kona_vm::{
    Config, KonaHostExecutor, LocalGameInputs, LogLevel, OpProgramExecutor, OracleCommand,
    OracleServerExecutor, Severity, TracingLogger,
};
use serde::Serialize;
use std::path::PathBuf;

mod parser;
pub(crate) use parser::{parse_b256, parse_u256};

mod tracing_util;
pub use tracing_util::init_tracing_subscriber;
pub(crate) use tracing_util::{cli_styles, verbosity_level};

const ABOUT: &str = "
kona-oracle builds the command a fault dispute game challenger uses to launch an oracle server.
The server replays part of the L2 chain to verify a claimed output root, reading L1 and L2 data
from the configured endpoints and storing preimages in the data directory. The command is
printed, never executed.
";

/// The oracle binary CLI application arguments.
#[derive(Parser, Clone, Debug)]
#[command(about = ABOUT, version, styles = cli_styles())]
pub struct OracleCli {
    /// Verbosity level (0-4)
    #[arg(long, short, help = "Verbosity level (0-4)", action = ArgAction::Count)]
    pub v: u8,
    /// The oracle server to build a command for.
    #[clap(subcommand)]
    pub mode: OracleMode,
}

/// The supported oracle servers.
#[derive(Subcommand, Clone, Debug)]
pub enum OracleMode {
    /// Build an `op-program` server command.
    OpProgram(CommandArgs),
    /// Build a `kona-host single` command.
    KonaHost(KonaHostArgs),
}

/// Arguments specific to `kona-host`.
#[derive(Args, Clone, Debug)]
pub struct KonaHostArgs {
    /// Run the client program natively instead of serving preimages to a fault proof VM.
    #[clap(long)]
    pub native: bool,
    /// Shared arguments.
    #[command(flatten)]
    pub common: CommandArgs,
}

/// Arguments shared by every oracle server.
#[derive(Args, Clone, Debug)]
pub struct CommandArgs {
    /// Server configuration.
    #[command(flatten)]
    pub config: ConfigArgs,
    /// Dispute game inputs.
    #[command(flatten)]
    pub game: GameArgs,
    /// The data directory handed to the server. Not created or checked.
    #[clap(long, visible_alias = "datadir", env)]
    pub data_dir: Option<String>,
    /// Log level passed to the server. Defaults to the level selected with `-v`.
    #[clap(long, env)]
    pub oracle_log_level: Option<LogLevel>,
    /// Print the command as a JSON object instead of a shell command line.
    #[clap(long)]
    pub json: bool,
}

/// Oracle server configuration. Values given on the command line override the `--config` file.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Path to a JSON file holding the server configuration.
    #[clap(long, env = "ORACLE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Address of the L1 JSON-RPC endpoint to use.
    #[clap(long, visible_alias = "l1", env)]
    pub l1_node_address: Option<String>,
    /// Address of the L1 Beacon API endpoint to use.
    #[clap(long, visible_alias = "beacon", env)]
    pub l1_beacon_address: Option<String>,
    /// Addresses of the L2 JSON-RPC endpoints to use, primary first.
    #[clap(long, visible_alias = "l2", value_delimiter = ',', env)]
    pub l2_node_address: Vec<String>,
    /// Path to the oracle server executable.
    #[clap(long, visible_alias = "server", env)]
    pub server_path: Option<String>,
    /// Named networks the server should load.
    #[clap(long, value_delimiter = ',', env)]
    pub network: Vec<String>,
    /// Paths to rollup configuration files.
    #[clap(long, alias = "rollup-cfg", value_delimiter = ',', env)]
    pub rollup_config_path: Vec<String>,
    /// Paths to L2 genesis files.
    #[clap(long, value_delimiter = ',', env)]
    pub l2_genesis_path: Vec<String>,
    /// The L2 chain is a custom chain unknown to the server.
    #[clap(long)]
    pub l2_custom: bool,
}

impl ConfigArgs {
    /// Reads the `--config` file, if any, and applies the command line overrides to it.
    pub fn resolve(&self) -> Result<Config> {
        let mut cfg = match self.config.as_ref() {
            Some(path) => {
                let ser_config = std::fs::read_to_string(path)
                    .map_err(|e| anyhow!("Error reading config file: {e}"))?;
                serde_json::from_str(&ser_config)
                    .map_err(|e| anyhow!("Error deserializing config: {e}"))?
            }
            None => Config::default(),
        };

        if let Some(l1) = &self.l1_node_address {
            cfg.l1 = l1.clone();
        }
        if let Some(l1_beacon) = &self.l1_beacon_address {
            cfg.l1_beacon = l1_beacon.clone();
        }
        if !self.l2_node_address.is_empty() {
            cfg.l2s = self.l2_node_address.clone();
        }
        if let Some(server) = &self.server_path {
            cfg.server = server.clone();
        }
        if !self.network.is_empty() {
            cfg.networks = self.network.clone();
        }
        if !self.rollup_config_path.is_empty() {
            cfg.rollup_config_paths = self.rollup_config_path.clone();
        }
        if !self.l2_genesis_path.is_empty() {
            cfg.l2_genesis_paths = self.l2_genesis_path.clone();
        }
        cfg.l2_custom |= self.l2_custom;

        Ok(cfg)
    }
}

/// The local inputs of the dispute game.
#[derive(Args, Clone, Debug)]
pub struct GameArgs {
    /// Hash of the L1 head block.
    #[clap(long, value_parser = parse_b256, env)]
    pub l1_head: B256,
    /// Hash of the agreed upon L2 block.
    #[clap(long, value_parser = parse_b256, env)]
    pub l2_head: B256,
    /// Agreed L2 output root to start from.
    #[clap(long, value_parser = parse_b256, env)]
    pub l2_output_root: B256,
    /// Claimed L2 output root to validate.
    #[clap(long, value_parser = parse_b256, env)]
    pub l2_claim: B256,
    /// Number of the L2 block that the claim commits to.
    #[clap(long, value_parser = parse_u256, env)]
    pub l2_block_number: U256,
}

impl From<&GameArgs> for LocalGameInputs {
    fn from(args: &GameArgs) -> Self {
        Self {
            l1_head: args.l1_head,
            l2_head: args.l2_head,
            l2_output_root: args.l2_output_root,
            l2_claim: args.l2_claim,
            l2_block_number: args.l2_block_number,
        }
    }
}

/// A built command in its JSON output form.
#[derive(Serialize, Debug)]
struct CommandOutput {
    program: String,
    args: Vec<String>,
}

impl OracleCli {
    /// Returns the severity the oracle server should log at.
    pub fn severity(&self) -> Severity {
        self.common()
            .oracle_log_level
            .map(Severity::from)
            .unwrap_or_else(|| Severity::from(verbosity_level(self.v)))
    }

    /// Returns the arguments shared by every mode.
    pub const fn common(&self) -> &CommandArgs {
        match &self.mode {
            OracleMode::OpProgram(args) => args,
            OracleMode::KonaHost(args) => &args.common,
        }
    }

    /// Builds the oracle server command selected on the command line.
    pub fn build(&self) -> Result<OracleCommand> {
        let logger = TracingLogger::new(self.severity());
        let common = self.common();
        let cfg = common.config.resolve()?;
        let inputs = LocalGameInputs::from(&common.game);
        let data_dir = common.data_dir.as_deref().unwrap_or_default();

        let executor: Box<dyn OracleServerExecutor> = match &self.mode {
            OracleMode::OpProgram(_) => Box::new(OpProgramExecutor::new(logger)),
            OracleMode::KonaHost(args) if args.native => {
                Box::new(KonaHostExecutor::native(logger))
            }
            OracleMode::KonaHost(_) => Box::new(KonaHostExecutor::new(logger)),
        };
        Ok(executor.oracle_command(&cfg, data_dir, &inputs)?)
    }

    /// Renders a built command for printing.
    pub fn render(&self, cmd: OracleCommand) -> Result<String> {
        if !self.common().json {
            return Ok(cmd.to_string());
        }
        let output = CommandOutput { program: cmd.program.clone(), args: cmd.into_args() };
        serde_json::to_string_pretty(&output).map_err(|e| anyhow!(e))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use kona_vm::{ConfigurationError, OracleArg, OracleCommandError};

    fn default_flags(mode: &'static str) -> Vec<String> {
        let zero_hash_str = B256::ZERO.to_string();
        [
            "oracle",
            mode,
            "--l1-head",
            &zero_hash_str,
            "--l2-head",
            &zero_hash_str,
            "--l2-output-root",
            &zero_hash_str,
            "--l2-claim",
            &zero_hash_str,
            "--l2-block-number",
            "3333",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn endpoint_flags() -> Vec<String> {
        [
            "--l1-node-address",
            "http://localhost:8888",
            "--l1-beacon-address",
            "http://localhost:9000",
            "--l2-node-address",
            "http://localhost:9999,http://localhost:9999/two",
            "--server-path",
            "./bin/mockserver",
            "--data-dir",
            "mockdir",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn parse(mode: &'static str, extra: &[&str]) -> Result<OracleCli, clap::Error> {
        let args = default_flags(mode)
            .into_iter()
            .chain(endpoint_flags())
            .chain(extra.iter().map(|s| s.to_string()))
            .collect::<Vec<_>>();
        OracleCli::try_parse_from(args)
    }

    #[test]
    fn test_flags() {
        let cases = [
            // valid
            ("op-program", [].as_slice(), true),
            ("kona-host", ["--native"].as_slice(), true),
            ("op-program", ["--network", "op-test,op-other", "--l2-custom"].as_slice(), true),
            ("op-program", ["--oracle-log-level", "crit"].as_slice(), true),
            ("op-program", ["--rollup-cfg", "rollup.json"].as_slice(), true),
            // invalid
            ("op-program", ["--oracle-log-level", "fatal"].as_slice(), false),
            ("op-program", ["--native"].as_slice(), false),
            ("op-program", ["--l2-custom", "true"].as_slice(), false),
            ("unknown", [].as_slice(), false),
        ];

        for (mode, extra, valid) in cases {
            assert_eq!(parse(mode, extra).is_ok(), valid, "{mode} {extra:?}");
        }
    }

    #[test]
    fn test_missing_game_input() {
        let args = ["oracle", "op-program", "--l1-head", &B256::ZERO.to_string()];
        assert!(OracleCli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_build_op_program() {
        let cli = parse("op-program", &["--network", "op-test,op-other", "--l2-custom"]).unwrap();
        let args = cli.build().unwrap().args;

        assert_eq!(args.value_of("--server"), Some("./bin/mockserver"));
        assert_eq!(args.value_of("--l2"), Some("http://localhost:9999,http://localhost:9999/two"));
        assert_eq!(args.value_of("--network"), Some("op-test,op-other"));
        assert_eq!(args.value_of("--l2.blocknumber"), Some("3333"));
        assert_eq!(args.value_of("--log.level"), Some("ERROR"));
        assert!(args.get("--l2.custom").unwrap().is_bare());
    }

    #[test]
    fn test_severity_from_verbosity_and_override() {
        let mut cli = parse("op-program", &[]).unwrap();
        cli.v = 2;
        assert_eq!(cli.severity(), Severity::INFO);
        cli.v = 7;
        assert_eq!(cli.severity(), Severity::TRACE);

        let cli = parse("op-program", &["--oracle-log-level", "crit"]).unwrap();
        assert_eq!(cli.severity(), Severity::CRIT);
        assert_eq!(cli.build().unwrap().args.value_of("--log.level"), Some("CRIT"));
    }

    #[test]
    fn test_build_kona_host_native() {
        let cli = parse("kona-host", &["--native", "--network", "op-sepolia"]).unwrap();
        let cmd = cli.build().unwrap();

        assert_eq!(cmd.program, "./bin/mockserver");
        assert!(cmd.args.contains("--native"));
        assert!(!cmd.args.contains("--data-dir"));
        assert_eq!(cmd.args.value_of("--l2-chain-id"), Some("11155420"));
    }

    #[test]
    fn test_build_kona_host_rollup_config() {
        let cli = parse("kona-host", &["--network", "op-test", "--rollup-cfg", "rollup.json"])
            .unwrap();
        let cmd = cli.build().unwrap();

        assert_eq!(cmd.args.value_of("--rollup-config-path"), Some("rollup.json"));
        assert!(!cmd.args.contains("--l2-chain-id"));
        assert_eq!(cmd.args.iter().next().map(OracleArg::name), Some("single"));
    }

    #[test]
    fn test_build_missing_endpoint() {
        let mut cli = OracleCli::try_parse_from(default_flags("op-program")).unwrap();
        // Drop anything clap picked up from the environment.
        if let OracleMode::OpProgram(args) = &mut cli.mode {
            args.config = ConfigArgs::default();
            args.data_dir = None;
        }
        let err = cli.build().unwrap_err();

        assert_eq!(
            err.downcast_ref::<OracleCommandError>(),
            Some(&OracleCommandError::Configuration(ConfigurationError::MissingL1))
        );
    }

    #[test]
    fn test_config_file_with_overrides() {
        let path = std::env::temp_dir().join(format!("kona-oracle-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{
                "l1": "http://file:8888",
                "l1Beacon": "http://file:9000",
                "l2s": ["http://file:9999"],
                "server": "./bin/fileserver",
                "rollupConfigPaths": ["rollup.config.json"]
            }"#,
        )
        .unwrap();

        let args = ConfigArgs {
            config: Some(path.clone()),
            l1_node_address: Some("http://flag:8888".to_string()),
            ..Default::default()
        };
        let cfg = args.resolve().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(cfg.l1, "http://flag:8888");
        assert_eq!(cfg.l1_beacon, "http://file:9000");
        assert_eq!(cfg.l2s, vec!["http://file:9999".to_string()]);
        assert_eq!(cfg.server, "./bin/fileserver");
        assert_eq!(cfg.rollup_config_paths, vec!["rollup.config.json".to_string()]);
        assert!(!cfg.l2_custom);
    }

    #[test]
    fn test_missing_config_file() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/nonexistent/kona-oracle.json")),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_render_json() {
        let cli = parse("op-program", &["--json"]).unwrap();
        let rendered = cli.render(cli.build().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["program"], "./bin/mockserver");
        assert_eq!(value["args"][0], "--server");
        assert_eq!(value["args"][1], "./bin/mockserver");
    }
}
