/*
[INPUT]:  Order book operations exposed by an exchange client
[OUTPUT]: Object-safe async trait over the operation surface
[POS]:    Crate seam - lets callers swap the live client for a fake
[UPDATE]: When operations are added to or removed from the client
*/

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::http::{BuycoinsClient, Result};
use crate::types::{DepositLink, Order, OrderFeeQuote, OrderPage};

/// Trait for order book operations
///
/// Implemented by [`BuycoinsClient`]. Code that trades against the exchange
/// can take `&dyn OrderBook` and be exercised with an in-memory fake.
#[async_trait]
pub trait OrderBook: Send + Sync {
    /// Supported pairs as an indented JSON array
    async fn list_pairs(&self) -> Result<String>;

    async fn get_orders(&self, pair: &str, status: &str, side: &str) -> Result<OrderPage>;

    async fn cancel_order(&self, id: &str) -> Result<Order>;

    async fn get_order_fees(
        &self,
        order_type: &str,
        pair: &str,
        side: &str,
        amount: Decimal,
    ) -> Result<OrderFeeQuote>;

    async fn place_market_order(&self, pair: &str, quantity: Decimal, side: &str)
    -> Result<Order>;

    async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: &str,
        time_in_force: &str,
    ) -> Result<Order>;

    async fn get_deposit_link(&self, amount: Decimal) -> Result<DepositLink>;
}

#[async_trait]
impl OrderBook for BuycoinsClient {
    async fn list_pairs(&self) -> Result<String> {
        BuycoinsClient::list_pairs(self).await
    }

    async fn get_orders(&self, pair: &str, status: &str, side: &str) -> Result<OrderPage> {
        BuycoinsClient::get_orders(self, pair, status, side).await
    }

    async fn cancel_order(&self, id: &str) -> Result<Order> {
        BuycoinsClient::cancel_order(self, id).await
    }

    async fn get_order_fees(
        &self,
        order_type: &str,
        pair: &str,
        side: &str,
        amount: Decimal,
    ) -> Result<OrderFeeQuote> {
        BuycoinsClient::get_order_fees(self, order_type, pair, side, amount).await
    }

    async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: &str,
    ) -> Result<Order> {
        BuycoinsClient::place_market_order(self, pair, quantity, side).await
    }

    async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: &str,
        time_in_force: &str,
    ) -> Result<Order> {
        BuycoinsClient::place_limit_order(self, pair, quantity, price, side, time_in_force).await
    }

    async fn get_deposit_link(&self, amount: Decimal) -> Result<DepositLink> {
        BuycoinsClient::get_deposit_link(self, amount).await
    }
}
