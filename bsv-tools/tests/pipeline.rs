//! carve -> pick -> prettytx against a mocked WhatsOnChain.

use bsv_carve::{carve, parse_wif, CarveError, CarveOptions};
use bsv_pick::{extract_hex, FieldSelector, TxBreakdown};
use bsv_primitives::Network;
use bsv_tools::config::{Config, WocSection};
use bsv_tools::exit;
use bsv_woc::WocClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SOURCE_WIF: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
const SOURCE_ADDRESS: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
const DESTINATION: &str = "1E7ucTTWRTahCyViPhxSMor2pj4VGQdFMr";
const DESTINATION_SCRIPT: &str = "76a9148fe80c75c9560e8b56ed64ea3c26e18d2c52211b88ac";

async fn mock_woc() -> MockServer {
    let server = MockServer::start().await;
    let unspent = serde_json::json!({
        "address": SOURCE_ADDRESS,
        "script": "",
        "result": [
            { "height": 800000, "tx_pos": 0, "tx_hash": "aa".repeat(32), "value": 5000, "isSpentInMempoolTx": false, "status": "confirmed" },
            { "height": 800001, "tx_pos": 1, "tx_hash": "bb".repeat(32), "value": 20000, "isSpentInMempoolTx": false, "status": "confirmed" },
            { "height": 800001, "tx_pos": 1, "tx_hash": "bb".repeat(32), "value": 20000, "isSpentInMempoolTx": false, "status": "confirmed" },
            { "height": 0, "tx_pos": 0, "tx_hash": "cc".repeat(32), "value": 100000, "isSpentInMempoolTx": true, "status": "unconfirmed" }
        ],
        "error": ""
    });
    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/main/address/{}/unspent/all", SOURCE_ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(unspent))
        .mount(&server)
        .await;
    server
}

fn provider(server: &MockServer) -> WocClient {
    let config = Config {
        woc: WocSection { base_url: Some(server.uri()) },
        ..Config::default()
    };
    WocClient::new(config.woc_client(Network::Mainnet)).unwrap()
}

#[tokio::test]
async fn test_carved_transaction_picks_back_apart() {
    let server = mock_woc().await;
    let wif = parse_wif(SOURCE_WIF).unwrap();
    let options = CarveOptions { amount: 10_000, split: 1, fee_per_kb: 100 };

    let carved = carve(&provider(&server), &wif, Network::Mainnet, DESTINATION, &options)
        .await
        .unwrap();
    assert_eq!(carved.total_input, 20_000);
    assert_eq!(carved.fee, 100);
    assert_eq!(carved.change, 9_900);

    let raw = carved.transaction.to_hex();
    let fields = extract_hex(
        &raw,
        &[
            FieldSelector::InputPrevOut(0),
            FieldSelector::OutputValue(1),
            FieldSelector::OutputScript(0),
            FieldSelector::TxId,
            FieldSelector::OutputValue(0),
            FieldSelector::InputPrevTxid(0),
        ],
    )
    .unwrap();
    assert_eq!(
        fields,
        vec![
            carved.transaction.tx_id_hex(),
            DESTINATION_SCRIPT.to_string(),
            "ac26000000000000".to_string(),
            "1027000000000000".to_string(),
            "bb".repeat(32),
            "01000000".to_string(),
        ]
    );

    let breakdown = TxBreakdown::from_hex(&raw, Network::Mainnet).unwrap();
    assert_eq!(breakdown.inputs.len(), 1);
    assert_eq!(breakdown.inputs[0].address.as_deref(), Some(SOURCE_ADDRESS));
    assert_eq!(breakdown.outputs[0].address.as_deref(), Some(DESTINATION));
    assert_eq!(breakdown.outputs[1].address.as_deref(), Some(SOURCE_ADDRESS));
    let values: Vec<u64> = breakdown.outputs.iter().map(|o| o.satoshis).collect();
    assert_eq!(values, vec![10_000, 9_900]);
}

#[tokio::test]
async fn test_insufficient_funds_exit_code() {
    let server = mock_woc().await;
    let wif = parse_wif(SOURCE_WIF).unwrap();
    let options = CarveOptions { amount: 1_000_000, ..CarveOptions::default() };

    let err = carve(&provider(&server), &wif, Network::Mainnet, DESTINATION, &options)
        .await
        .unwrap_err();
    assert!(matches!(err, CarveError::InsufficientFunds { available: 25_000, .. }));
    assert_eq!(exit::code_for(&anyhow::Error::new(err)), exit::FUNDS);
}

#[tokio::test]
async fn test_provider_failure_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let wif = parse_wif(SOURCE_WIF).unwrap();

    let err = carve(&provider(&server), &wif, Network::Mainnet, DESTINATION, &CarveOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CarveError::ProviderError(_)));
    assert_eq!(exit::code_for(&anyhow::Error::new(err)), exit::PROVIDER);
}
