//! End-to-end carving: key, provider, selection, assembly.

use bsv_primitives::ec::{DecodedWif, PrivateKey};
use bsv_primitives::Network;
use bsv_script::Address;

use crate::assemble::{build, CarveOptions, CarvedTransaction};
use crate::error::CarveError;
use crate::select::select;
use crate::utxo::UtxoProvider;

/// Decode a WIF private key.
pub fn parse_wif(wif: &str) -> Result<DecodedWif, CarveError> {
    PrivateKey::from_wif(wif).map_err(|e| CarveError::InvalidKey(e.to_string()))
}

/// The P2PKH address the key's coins live at on `network`, in the key
/// form (compressed or not) the WIF declares.
pub fn source_address(wif: &DecodedWif, network: Network) -> Address {
    Address::from_public_key(&wif.key.pub_key(), wif.compressed, network)
}

/// Fetch the source's coins from `provider`, choose which to spend, and
/// build the signed transaction.
pub async fn carve<P>(
    provider: &P,
    wif: &DecodedWif,
    network: Network,
    destination: &str,
    options: &CarveOptions,
) -> Result<CarvedTransaction, CarveError>
where
    P: UtxoProvider,
{
    options.validate()?;
    Address::from_string(destination).map_err(|e| CarveError::InvalidAddress(e.to_string()))?;

    let source = source_address(wif, network);
    tracing::debug!(%network, source = %source, "derived source address");
    if wif.network != network {
        tracing::debug!(wif_network = %wif.network, "WIF was encoded for a different network");
    }

    let utxos = provider
        .unspent(&source)
        .await
        .map_err(|e| CarveError::ProviderError(e.to_string()))?;
    if utxos.is_empty() {
        return Err(CarveError::NoUtxosAvailable);
    }
    tracing::debug!(count = utxos.len(), "found UTXOs");

    let selected = if options.is_send_all() {
        tracing::debug!("sending all available funds");
        utxos
    } else {
        select(&utxos, options.amount, options.fee_per_kb)?
    };

    build(wif, &source, destination, &selected, options)
}
