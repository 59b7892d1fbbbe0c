//! Polling a transaction until it reaches a final status.

use std::time::Duration;

use crate::client::ArcClient;
use crate::error::ArcError;
use crate::types::TxStatusResponse;

/// Something observed while polling.
#[derive(Debug)]
pub enum PollEvent<'a> {
    /// A status was fetched.
    Status(&'a TxStatusResponse),
    /// A poll failed; polling continues.
    Error(&'a ArcError),
}

/// Poll `txid` every `interval` until its status is final, reporting each
/// poll to `on_event`, and return the final status.
///
/// Failed polls are logged and retried after the same interval. There is
/// no overall deadline; stop the process to cancel.
pub async fn monitor<F>(
    client: &ArcClient,
    txid: &str,
    interval: Duration,
    mut on_event: F,
) -> TxStatusResponse
where
    F: FnMut(PollEvent<'_>),
{
    loop {
        match client.status(txid).await {
            Ok(status) => {
                on_event(PollEvent::Status(&status));
                if status.tx_status.is_final() {
                    tracing::debug!(%txid, status = %status.tx_status, "reached final status");
                    return status;
                }
            }
            Err(e) => {
                tracing::warn!(%txid, error = %e, "error getting transaction status");
                on_event(PollEvent::Error(&e));
            }
        }
        tokio::time::sleep(interval).await;
    }
}
