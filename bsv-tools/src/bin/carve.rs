//! Build and sign a transaction that pays an address from a WIF's coins.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use bsv_carve::{carve, parse_wif, CarveOptions};
use bsv_primitives::Network;
use bsv_tools::{exit, logging, Config};
use bsv_woc::WocClient;
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "carve",
    version,
    about = "Build a signed BSV transaction from the UTXOs of a WIF key",
    long_about = r#"Fetches the unspent outputs of the key's address from WhatsOnChain, picks the
fewest coins that cover the amount plus fee, and prints the signed raw
transaction hex on stdout. With --sats 0 every coin is sent to the destination."#
)]
struct Args {
    #[clap(short, long, help = "Source WIF private key")]
    wif: String,

    #[clap(short, long, help = "Destination address")]
    address: String,

    #[clap(
        short,
        long,
        default_value_t = 0,
        help = "Amount in satoshis to send (0 = send all minus fees)"
    )]
    sats: u64,

    #[clap(
        short = 'n',
        long,
        default_value_t = 1,
        help = "Number of equal outputs to split the amount into"
    )]
    split: u32,

    #[clap(short, long, help = "Use testnet")]
    testnet: bool,

    #[clap(
        short,
        long = "fee-per-kb",
        default_value_t = 100,
        help = "Fee per kilobyte in satoshis"
    )]
    fee_per_kb: u64,

    #[clap(long, help = "Enable debug logging")]
    debug: bool,

    #[clap(long, help = "Path to config.yaml (for a WhatsOnChain base URL override)")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup(args.debug);
    exit::finish(run(args).await)
}

async fn run(args: Args) -> Result<()> {
    let network = Network::from_testnet_flag(args.testnet);
    let options = CarveOptions {
        amount: args.sats,
        split: args.split,
        fee_per_kb: args.fee_per_kb,
    };
    options.validate()?;

    let wif = parse_wif(&args.wif)?;
    let config = Config::load_or_default(args.config.as_deref())?;
    let provider = WocClient::new(config.woc_client(network))?;

    let carved = carve(&provider, &wif, network, &args.address, &options).await?;
    tracing::debug!(
        txid = %carved.transaction.tx_id_hex(),
        total_input = carved.total_input,
        fee = carved.fee,
        change = carved.change,
        "transaction built"
    );
    println!("{}", carved.transaction.to_hex());
    Ok(())
}
