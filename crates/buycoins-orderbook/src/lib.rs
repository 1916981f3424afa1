/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public BuyCoins order book client surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Typed async client for the BuyCoins pro order book GraphQL API.
//!
//! ```no_run
//! # async fn run() -> buycoins_orderbook::Result<()> {
//! use buycoins_orderbook::BuycoinsClient;
//! use rust_decimal::Decimal;
//!
//! let client = BuycoinsClient::new("public-key", "secret-key")?;
//! let order = client
//!     .place_market_order("btc_usdt", Decimal::new(1, 2), "buy")
//!     .await?;
//! println!("{} {}", order.id, order.status);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod http;
pub mod orderbook;
pub mod types;

pub use auth::Credentials;

// Re-export commonly used types from http
pub use http::{
    BuycoinsClient,
    BuycoinsError,
    ClientConfig,
    GRAPHQL_ENDPOINT,
    GraphQlError,
    Result,
};

pub use orderbook::OrderBook;

// Re-export all types
pub use types::*;
