//! Tests for the WhatsOnChain client.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bsv_carve::{Utxo, UtxoProvider};
use bsv_primitives::Network;
use bsv_script::Address;

use crate::client::WocClient;
use crate::error::WocError;
use crate::types::{UnspentAllResponse, WocConfig};

const ADDRESS: &str = "mtdruWYVEV1wz5yL7GvpBj4MgifCB7yhPd";

fn test_config(base_url: &str) -> WocConfig {
    WocConfig {
        base_url: base_url.to_string(),
        network: Network::Testnet,
        ..WocConfig::default()
    }
}

fn client(server: &MockServer) -> WocClient {
    WocClient::new(test_config(&server.uri())).unwrap()
}

fn unspent(tx_hash: &str, tx_pos: u32, value: u64, spent: bool) -> serde_json::Value {
    serde_json::json!({
        "height": 1600000,
        "tx_pos": tx_pos,
        "tx_hash": tx_hash,
        "value": value,
        "isSpentInMempoolTx": spent,
        "status": "confirmed"
    })
}

async fn mount_unspent(server: &MockServer, result: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/unspent/all", ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": ADDRESS,
            "script": "76a9148fe80c75c9560e8b56ed64ea3c26e18d2c52211b88ac",
            "result": result,
            "error": ""
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_unspent_success() {
    let server = MockServer::start().await;
    mount_unspent(&server, vec![unspent("aa", 0, 5000, false), unspent("bb", 1, 3000, false)]).await;

    let utxos = client(&server).unspent(ADDRESS).await.unwrap();
    assert_eq!(utxos, vec![Utxo::new("aa", 0, 5000), Utxo::new("bb", 1, 3000)]);
}

#[tokio::test]
async fn test_unspent_filters_mempool_spent_and_duplicates() {
    let server = MockServer::start().await;
    mount_unspent(
        &server,
        vec![
            unspent("aa", 0, 5000, false),
            unspent("bb", 0, 9000, true),
            unspent("aa", 0, 5000, false),
            unspent("aa", 1, 700, false),
        ],
    )
    .await;

    let utxos = client(&server).unspent(ADDRESS).await.unwrap();
    assert_eq!(utxos, vec![Utxo::new("aa", 0, 5000), Utxo::new("aa", 1, 700)]);
}

#[tokio::test]
async fn test_unspent_all_spent_is_empty() {
    let server = MockServer::start().await;
    mount_unspent(&server, vec![unspent("aa", 0, 5000, true)]).await;
    assert!(client(&server).unspent(ADDRESS).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unspent_api_error_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/unspent/all", ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": ADDRESS,
            "result": [],
            "error": "address is invalid"
        })))
        .mount(&server)
        .await;

    let err = client(&server).unspent(ADDRESS).await.unwrap_err();
    assert!(matches!(err, WocError::ApiError(ref m) if m == "address is invalid"));
}

#[tokio::test]
async fn test_unspent_null_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/unspent/all", ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": ADDRESS,
            "script": null,
            "result": [unspent("aa", 0, 5000, false)],
            "error": null
        })))
        .mount(&server)
        .await;

    let utxos = client(&server).unspent(ADDRESS).await.unwrap();
    assert_eq!(utxos, vec![Utxo::new("aa", 0, 5000)]);
}

#[test]
fn test_null_result_is_empty() {
    let response: UnspentAllResponse =
        serde_json::from_str(r#"{"result":null,"error":null}"#).unwrap();
    assert!(response.result.is_empty());
    assert!(response.error.is_empty());
}

#[tokio::test]
async fn test_server_error_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/unspent/all", ADDRESS)))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let err = client(&server).unspent(ADDRESS).await.unwrap_err();
    assert_eq!(err.to_string(), "WhatsOnChain API error (status 429): rate limited");
}

#[tokio::test]
async fn test_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/bsv/test/address/{}/unspent/all", ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_string("[not json"))
        .mount(&server)
        .await;

    let err = client(&server).unspent(ADDRESS).await.unwrap_err();
    assert!(matches!(err, WocError::SerializationError(_)));
}

#[tokio::test]
async fn test_provider_trait_uses_address_string() {
    let server = MockServer::start().await;
    mount_unspent(&server, vec![unspent("cc", 2, 1234, false)]).await;

    let address = Address::from_string(ADDRESS).unwrap();
    let utxos = UtxoProvider::unspent(&client(&server), &address).await.unwrap();
    assert_eq!(utxos, vec![Utxo::new("cc", 2, 1234)]);
}

#[tokio::test]
async fn test_raw_transaction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/bsv/main/tx/abc123/hex"))
        .respond_with(ResponseTemplate::new(200).set_body_string("01000000000000000000\n"))
        .mount(&server)
        .await;

    let client = WocClient::new(WocConfig {
        base_url: format!("{}/", server.uri()),
        ..WocConfig::default()
    })
    .unwrap();
    assert_eq!(client.raw_transaction("abc123").await.unwrap(), "01000000000000000000");
}

#[tokio::test]
async fn test_raw_transaction_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/bsv/test/tx/missing/hex"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = client(&server).raw_transaction("missing").await.unwrap_err();
    assert!(matches!(err, WocError::NotFound));
}

#[test]
fn test_config_for_network() {
    let config = WocConfig::for_network(Network::Testnet);
    assert_eq!(config.network, Network::Testnet);
    assert_eq!(config.base_url, "https://api.whatsonchain.com");
}
