//! Generate BSV key pairs.

use std::process::ExitCode;

use anyhow::Result;
use bsv_primitives::Network;
use bsv_tools::keys::{generate, render_key_pairs};
use bsv_tools::{exit, logging};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "keygen",
    version,
    about = "Generate BSV key pairs",
    long_about = r#"Generates Bitcoin SV private keys with their public keys, WIFs and
addresses, using the operating system's secure random number generator."#
)]
struct Args {
    #[clap(short, long, help = "Generate testnet keys (default: mainnet)")]
    testnet: bool,

    #[clap(short, long, help = "Generate uncompressed keys (default: compressed)")]
    uncompressed: bool,

    #[clap(short, long, default_value_t = 1, help = "Number of key pairs to generate (1-100)")]
    count: u32,

    #[clap(short, long, help = "Output in JSON format")]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup(false);
    exit::finish(run(args))
}

fn run(args: Args) -> Result<()> {
    let network = Network::from_testnet_flag(args.testnet);
    let pairs = generate(args.count, network, !args.uncompressed)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&pairs)?);
    } else {
        print!("{}", render_key_pairs(&pairs));
    }
    Ok(())
}
