#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/op-rs/kona/main/assets/square.png",
    html_favicon_url = "https://raw.githubusercontent.com/op-rs/kona/main/assets/favicon.ico"
)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod args;
pub use args::{OracleArg, OracleArgs, OracleCommand};

mod config;
pub use config::{Config, LocalGameInputs};

mod errors;
pub use errors::{ConfigurationError, LevelMappingError, OracleCommandError, OracleResult};

mod level;
pub use level::{LogLevel, Severity};

mod logger;
pub use logger::{NoopLogger, OracleLogger, TracingLogger};

mod executor;
pub use executor::{build_oracle_command, OpProgramExecutor, OracleServerExecutor};

mod kona;
pub use kona::{chain_id_for_network, KonaHostExecutor};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
