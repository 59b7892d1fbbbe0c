//! The one place errors become process exit codes.
//!
//! | code | meaning                         |
//! |------|---------------------------------|
//! | 1    | anything else                   |
//! | 2    | usage or selector errors        |
//! | 3    | insufficient funds / no UTXOs   |
//! | 4    | provider or network failures    |
//! | 5    | malformed input                 |

use std::error::Error as StdError;
use std::process::ExitCode;

use bsv_arc::ArcError;
use bsv_carve::CarveError;
use bsv_pick::PickError;
use bsv_primitives::PrimitivesError;
use bsv_script::ScriptError;
use bsv_transaction::TransactionError;
use bsv_woc::WocError;

use crate::input::InputError;

pub const GENERIC: u8 = 1;
pub const USAGE: u8 = 2;
pub const FUNDS: u8 = 3;
pub const PROVIDER: u8 = 4;
pub const MALFORMED_INPUT: u8 = 5;

/// Exit code for `err`, taken from the first cause in its chain that has a
/// known kind.
pub fn code_for(err: &anyhow::Error) -> u8 {
    err.chain().find_map(classify).unwrap_or(GENERIC)
}

fn classify(cause: &(dyn StdError + 'static)) -> Option<u8> {
    if let Some(e) = cause.downcast_ref::<CarveError>() {
        return Some(match e {
            CarveError::NoUtxosAvailable | CarveError::InsufficientFunds { .. } => FUNDS,
            CarveError::ProviderError(_) => PROVIDER,
            CarveError::InvalidSelectorCombination(_) => USAGE,
            CarveError::InvalidAddress(_) | CarveError::InvalidKey(_) => MALFORMED_INPUT,
            CarveError::SigningFailed(_) => GENERIC,
        });
    }
    if let Some(e) = cause.downcast_ref::<PickError>() {
        return Some(match e {
            PickError::MalformedTransaction(_) => MALFORMED_INPUT,
            PickError::NoSelectorSpecified
            | PickError::IndexOutOfRange { .. }
            | PickError::InvalidSelector(_) => USAGE,
        });
    }
    if let Some(e) = cause.downcast_ref::<InputError>() {
        return Some(match e {
            InputError::Missing(_) => USAGE,
            InputError::InvalidHex { .. } => MALFORMED_INPUT,
            InputError::Fetch(_) | InputError::HttpStatus(_) => PROVIDER,
            InputError::Io(_) | InputError::File { .. } => GENERIC,
        });
    }
    if cause.is::<ArcError>() || cause.is::<WocError>() || cause.is::<reqwest::Error>() {
        return Some(PROVIDER);
    }
    if cause.is::<TransactionError>()
        || cause.is::<ScriptError>()
        || cause.is::<PrimitivesError>()
    {
        return Some(MALFORMED_INPUT);
    }
    None
}

/// Print `Error: <message>` to stderr and return the matching exit code.
pub fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {:#}", err);
    ExitCode::from(code_for(err))
}

/// Run a tool body and turn its outcome into an exit code.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}
