//! Submit a raw transaction to ARC.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bsv_arc::ArcClient;
use bsv_primitives::Network;
use bsv_tools::input::{positional_or_stdin, require_hex};
use bsv_tools::watch::{broadcast_report, watch, DEFAULT_POLL_RATE};
use bsv_tools::{exit, logging, Config};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "broadcast",
    version,
    about = "Broadcast a raw BSV transaction to ARC",
    long_about = r#"Reads a raw transaction from --raw or stdin and submits it to the ARC
endpoint configured in config.yaml. With --monitor, polls the transaction
until it is mined or rejected."#
)]
struct Args {
    #[clap(short, long, help = "Raw transaction hex to broadcast")]
    raw: Option<String>,

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
    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let network = Network::from_testnet_flag(args.testnet);
    let arc_config = config.arc_client(network)?;

    let raw = require_hex(positional_or_stdin(None, args.raw)?, "transaction")?;
    println!("Transaction hex: {}", raw);
    println!("Using {} configuration", network);

    let client = ArcClient::new(arc_config)?;
    println!("Broadcasting transaction to ARC...");
    let response = client.broadcast(&raw).await.context("broadcasting transaction")?;
    print!("{}", broadcast_report(&response));

    if args.monitor || config.targets.wait_for_mining {
        let interval = config.poll_rate(args.poll_rate, DEFAULT_POLL_RATE)?;
        println!();
        watch(&client, &response.txid, interval).await;
    }
    Ok(())
}
