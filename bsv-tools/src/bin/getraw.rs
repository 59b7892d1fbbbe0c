//! Fetch a transaction's raw hex from WhatsOnChain.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bsv_primitives::Network;
use bsv_tools::input::{positional_or_stdin, require_hex};
use bsv_tools::{exit, logging, Config};
use bsv_woc::WocClient;
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "getraw",
    version,
    about = "Get raw transaction data from WhatsOnChain. Accepts txid as argument or from stdin"
)]
struct Args {
    /// Transaction ID
    txid: Option<String>,

    #[clap(short = 'i', long = "txid", help = "Transaction ID to retrieve")]
    txid_flag: Option<String>,

    #[clap(short, long, help = "Use testnet instead of mainnet")]
    testnet: bool,

    #[clap(long, help = "Path to config.yaml (for a WhatsOnChain base URL override)")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup(false);
    exit::finish(run(args).await)
}

async fn run(args: Args) -> Result<()> {
    let txid = require_hex(positional_or_stdin(args.txid, args.txid_flag)?, "txid")?;

    let network = Network::from_testnet_flag(args.testnet);
    let config = Config::load_or_default(args.config.as_deref())?;
    let client = WocClient::new(config.woc_client(network))?;
    tracing::debug!(%network, base_url = %client.config().base_url, "querying WhatsOnChain");

    let raw = client
        .raw_transaction(&txid)
        .await
        .context("getting raw transaction")?;
    println!("{}", raw);
    Ok(())
}
