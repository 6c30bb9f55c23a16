//! Main entrypoint for the oracle command builder binary.

#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

use anyhow::Result;
use clap::Parser;
use kona_oracle::{init_tracing_subscriber, OracleCli};
use tracing::debug;

fn main() -> Result<()> {
    let cfg = OracleCli::parse();
    init_tracing_subscriber(cfg.v)?;

    let cmd = cfg.build()?;
    println!("{}", cfg.render(cmd)?);

    debug!(target: "kona_oracle", "Exiting oracle command builder.");
    Ok(())
}
