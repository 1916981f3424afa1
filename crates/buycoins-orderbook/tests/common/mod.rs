/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for buycoins-orderbook tests

#![allow(dead_code)]

use buycoins_orderbook::{BuycoinsClient, ClientConfig, Credentials};
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GRAPHQL_PATH: &str = "/api/graphql";
pub const PUBLIC_KEY: &str = "pub";
pub const SECRET_KEY: &str = "sec";
/// base64url("pub:sec")
pub const AUTH_HEADER: &str = "Basic cHViOnNlYw==";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server's GraphQL path
pub fn client_for(server: &MockServer) -> BuycoinsClient {
    client_with_config(server, ClientConfig::default())
}

pub fn client_with_config(server: &MockServer, config: ClientConfig) -> BuycoinsClient {
    BuycoinsClient::with_config_and_endpoint(
        Credentials::new(PUBLIC_KEY, SECRET_KEY),
        config,
        &format!("{}{}", server.uri(), GRAPHQL_PATH),
    )
    .expect("client init")
}

/// Mock builder matching an authenticated POST carrying `field` in its query
pub fn graphql_call(field: &str) -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(header("authorization", AUTH_HEADER))
        .and(body_string_contains(field))
}

/// 200 response with `{"data": {field: value}}`
pub fn data_response(field: &str, value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": { field: value } }))
}

/// 200 response carrying a GraphQL error array and null data
pub fn graphql_error_response(field: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": { field: null },
        "errors": [{ "message": message, "path": [field] }]
    }))
}

/// A pro order as the server renders it
pub fn order_json(id: &str, price: &str, status: &str) -> Value {
    json!({
        "id": id,
        "pair": "BTC_USD",
        "price": price,
        "side": "buy",
        "status": status,
        "timeInForce": "good_til_cancelled",
        "orderType": "market_order",
        "fees": "0.00150000",
        "filled": "1.0",
        "total": price,
        "initialBaseQuantity": "1.0",
        "initialQuoteQuantity": price,
        "remainingBaseQuantity": "0.0",
        "remainingQuoteQuantity": "0.00",
        "meanExecutionPrice": price,
        "engineMessage": null
    })
}
