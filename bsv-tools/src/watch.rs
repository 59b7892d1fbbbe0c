//! Status reporting shared by `broadcast` and `txstatus`.

use std::fmt::Write;
use std::time::Duration;

use bsv_arc::{monitor, ArcClient, BroadcastResponse, PollEvent, TxStatusResponse};

/// Poll interval when neither `--poll-rate` nor `polling.interval` is set.
pub const DEFAULT_POLL_RATE: Duration = Duration::from_secs(5);

fn clock() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// One timestamped monitor line, with block details once mined.
pub fn status_line(clock: &str, status: &TxStatusResponse) -> String {
    let mut line = format!(
        "[{}] Status: {} - {}",
        clock,
        status.tx_status,
        status.tx_status.description()
    );
    if let Some((hash, height)) = status.block() {
        let _ = write!(line, "\n         Block Hash: {}\n         Block Height: {}", hash, height);
    }
    line
}

/// Full report of a single status query.
pub fn status_report(status: &TxStatusResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Status: {}", status.tx_status);
    let _ = writeln!(out, "Description: {}", status.tx_status.description());
    if let Some(info) = status.extra_info.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "Info: {}", info);
    }
    if let Some(timestamp) = status.timestamp.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "Timestamp: {}", timestamp);
    }
    if let Some((hash, height)) = status.block() {
        let _ = writeln!(out, "Block Hash: {}", hash);
        let _ = writeln!(out, "Block Height: {}", height);
    }
    if status.tx_status.is_final() {
        out.push_str("\n✓ Transaction is in final state\n");
    } else {
        out.push_str("\n⏳ Transaction is still pending (use --monitor to watch for changes)\n");
    }
    out
}

/// Report of an accepted broadcast.
pub fn broadcast_report(response: &BroadcastResponse) -> String {
    let mut out = String::from("✓ Transaction broadcast successful!\n");
    let _ = writeln!(out, "  TxID: {}", response.txid);
    let _ = writeln!(out, "  Status: {}", response.tx_status);
    let _ = writeln!(out, "  Description: {}", response.tx_status.description());
    if let Some(info) = response.extra_info.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "  Info: {}", info);
    }
    out
}

/// Print status changes for `txid` until it reaches a final state.
pub async fn watch(client: &ArcClient, txid: &str, interval: Duration) -> TxStatusResponse {
    println!("Monitoring transaction: {}", txid);
    println!("Polling every {:?}...", interval);
    println!("Press Ctrl+C to stop monitoring");
    println!();

    let mut polls = 0usize;
    let last = monitor(client, txid, interval, |event| {
        polls += 1;
        // Failed polls are already logged by the monitor.
        if let PollEvent::Status(status) = event {
            println!("{}", status_line(&clock(), status));
        }
    })
    .await;

    if polls == 1 {
        println!("\n✓ Transaction is already in final state: {}", last.tx_status);
    } else {
        println!("\n✓ Transaction reached final state: {}", last.tx_status);
    }
    last
}
