//! Show what a WIF key means on mainnet and testnet.

use std::process::ExitCode;

use anyhow::{Context, Result};
use bsv_tools::input::{positional_or_stdin, InputError};
use bsv_tools::keys::WifInfo;
use bsv_tools::{exit, logging};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "wifinfo",
    version,
    about = "Display mainnet and testnet details for a BSV private key in WIF format"
)]
struct Args {
    /// WIF private key
    wif: Option<String>,

    #[clap(short = 'w', long = "wif", help = "WIF private key to analyze")]
    wif_flag: Option<String>,

    #[clap(short, long, help = "Output in JSON format")]
    json: bool,

    #[clap(short, long, help = "Include uncompressed keys, WIFs, and addresses")]
    uncompressed: bool,

    #[clap(long = "no-color", help = "Disable colored output")]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup(false);
    exit::finish(run(args))
}

fn run(args: Args) -> Result<()> {
    let wif = positional_or_stdin(args.wif, args.wif_flag)?.ok_or(InputError::Missing("WIF"))?;
    let info = WifInfo::from_wif(&wif, args.uncompressed).context("failed to parse WIF")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", info.render(!args.no_color));
    }
    Ok(())
}
