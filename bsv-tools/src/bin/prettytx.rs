//! Pretty-print a raw transaction.

use std::process::ExitCode;

use anyhow::Result;
use bsv_pick::{Renderer, TxBreakdown};
use bsv_primitives::Network;
use bsv_tools::input::{positional_or_stdin, require_hex, resolve_source};
use bsv_tools::{exit, logging};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "prettytx",
    version,
    about = "Display a raw BSV transaction in a readable, colored layout"
)]
struct Args {
    /// Raw transaction hex, file://path or http(s):// URL
    rawtx: Option<String>,

    #[clap(short, long, help = "Raw transaction hex to parse")]
    raw: Option<String>,

    #[clap(long = "no-color", help = "Disable colored output")]
    no_color: bool,

    #[clap(short, long, help = "Show testnet addresses")]
    testnet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup(false);
    exit::finish(run(args).await)
}

async fn run(args: Args) -> Result<()> {
    let raw = match positional_or_stdin(args.rawtx, args.raw)? {
        Some(source) => Some(resolve_source(source).await?),
        None => None,
    };
    let raw = require_hex(raw, "transaction")?;

    let breakdown = TxBreakdown::from_hex(&raw, Network::from_testnet_flag(args.testnet))?;
    print!("{}", Renderer::new(!args.no_color).render(&breakdown));
    Ok(())
}
