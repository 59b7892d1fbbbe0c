//! Query ARC for a transaction's status.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bsv_arc::ArcClient;
use bsv_primitives::Network;
use bsv_tools::input::{positional_or_stdin, require_hex};
use bsv_tools::watch::{status_report, watch, DEFAULT_POLL_RATE};
use bsv_tools::{exit, logging, Config};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "txstatus",
    version,
    about = "Check transaction status on ARC. Accepts txid as argument or from stdin"
)]
struct Args {
    /// Transaction ID
    txid: Option<String>,

    #[clap(short = 'i', long = "txid", help = "Transaction ID to check")]
    txid_flag: Option<String>,

    #[clap(short, long, help = "Monitor transaction status until final state")]
    monitor: bool,

    #[clap(
        short,
        long = "poll-rate",
        value_name = "SECONDS",
        help = "Polling rate in seconds for monitoring [default: 5]"
    )]
    poll_rate: Option<u64>,

    #[clap(short, long, help = "Use testnet configuration from config.yaml")]
    testnet: bool,

    #[clap(long, help = "Path to config.yaml")]
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

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let network = Network::from_testnet_flag(args.testnet);
    let client = ArcClient::new(config.arc_client(network)?)?;
    println!("Using {} configuration", network);

    if args.monitor {
        let interval = config.poll_rate(args.poll_rate, DEFAULT_POLL_RATE)?;
        watch(&client, &txid, interval).await;
        return Ok(());
    }

    println!("Checking status for transaction: {}\n", txid);
    let status = client.status(&txid).await.context("getting transaction status")?;
    print!("{}", status_report(&status));
    Ok(())
}
