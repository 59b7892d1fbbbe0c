//! Print selected fields of a raw transaction as hex, one per line.

use std::process::ExitCode;

use anyhow::Result;
use bsv_pick::{extract_hex, FieldSelector, PickError};
use bsv_tools::input::{positional_or_stdin, require_hex, resolve_source};
use bsv_tools::{exit, logging};
use clap::Parser;

#[derive(Debug, Parser)]
#[clap(
    name = "pick",
    about = "Extract fields from a raw BSV transaction",
    long_about = r#"Parses a raw transaction and prints the selected elements as hex, one line
per selector: transaction fields first, then outputs, then inputs, then the
locktime. The transaction comes from the argument, --raw, or stdin, and may
be given as file://path or an http(s):// URL."#
)]
struct Args {
    /// Raw transaction hex, file://path or http(s):// URL
    rawtx: Option<String>,

    #[clap(short, long, help = "Raw transaction hex")]
    raw: Option<String>,

    #[clap(
        short = 'o',
        long = "output",
        value_name = "N",
        value_delimiter = ',',
        help = "Complete serialized output at index (repeatable)"
    )]
    outputs: Vec<usize>,

    #[clap(
        long = "output-script",
        value_name = "N",
        value_delimiter = ',',
        help = "Output locking script at index (repeatable)"
    )]
    output_scripts: Vec<usize>,

    #[clap(
        long = "output-value",
        value_name = "N",
        value_delimiter = ',',
        help = "Output value at index (repeatable)"
    )]
    output_values: Vec<usize>,

    #[clap(
        short = 'i',
        long = "input",
        value_name = "N",
        value_delimiter = ',',
        help = "Complete serialized input at index (repeatable)"
    )]
    inputs: Vec<usize>,

    #[clap(
        long = "input-script",
        value_name = "N",
        value_delimiter = ',',
        help = "Input unlocking script at index (repeatable)"
    )]
    input_scripts: Vec<usize>,

    #[clap(
        long = "input-prevtxid",
        value_name = "N",
        value_delimiter = ',',
        help = "Input previous txid at index (repeatable)"
    )]
    input_prev_txids: Vec<usize>,

    #[clap(
        long = "input-prevout",
        value_name = "N",
        value_delimiter = ',',
        help = "Input previous output index at index (repeatable)"
    )]
    input_prev_outs: Vec<usize>,

    #[clap(
        long = "input-sequence",
        value_name = "N",
        value_delimiter = ',',
        help = "Input sequence number at index (repeatable)"
    )]
    input_sequences: Vec<usize>,

    #[clap(short = 'v', long, help = "Transaction version (4-byte LE hex)")]
    version: bool,

    #[clap(short = 'l', long, help = "Transaction locktime (4-byte LE hex)")]
    locktime: bool,

    #[clap(long, help = "Transaction ID")]
    txid: bool,
}

impl Args {
    fn selectors(&self) -> Vec<FieldSelector> {
        let mut selectors = Vec::new();
        if self.version {
            selectors.push(FieldSelector::Version);
        }
        if self.txid {
            selectors.push(FieldSelector::TxId);
        }
        let indexed: [(&[usize], fn(usize) -> FieldSelector); 8] = [
            (self.outputs.as_slice(), FieldSelector::Output),
            (self.output_scripts.as_slice(), FieldSelector::OutputScript),
            (self.output_values.as_slice(), FieldSelector::OutputValue),
            (self.inputs.as_slice(), FieldSelector::Input),
            (self.input_scripts.as_slice(), FieldSelector::InputScript),
            (self.input_prev_txids.as_slice(), FieldSelector::InputPrevTxid),
            (self.input_prev_outs.as_slice(), FieldSelector::InputPrevOut),
            (self.input_sequences.as_slice(), FieldSelector::InputSequence),
        ];
        for (indices, make) in indexed {
            selectors.extend(indices.iter().copied().map(make));
        }
        if self.locktime {
            selectors.push(FieldSelector::Locktime);
        }
        selectors
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup(false);
    exit::finish(run(args).await)
}

async fn run(args: Args) -> Result<()> {
    let selectors = args.selectors();
    if selectors.is_empty() {
        return Err(PickError::NoSelectorSpecified.into());
    }

    let raw = match positional_or_stdin(args.rawtx, args.raw)? {
        Some(source) => Some(resolve_source(source).await?),
        None => None,
    };
    let raw = require_hex(raw, "transaction")?;

    for field in extract_hex(&raw, &selectors)? {
        println!("{}", field);
    }
    Ok(())
}
