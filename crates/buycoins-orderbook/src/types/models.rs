/*
[INPUT]:  GraphQL schema definitions and serde requirements
[OUTPUT]: Typed Rust records for orders, fee quotes and deposit links
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of one pro order at the time it was queried.
///
/// Returned by order listing, cancellation and both placement calls.
/// Monetary and quantity fields keep the exact decimal text sent by the
/// server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub pair: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub price: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub side: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub status: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub time_in_force: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub order_type: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub fees: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub filled: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub total: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub initial_base_quantity: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub initial_quote_quantity: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub remaining_base_quantity: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub remaining_quote_quantity: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub mean_execution_price: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub engine_message: String,
}

/// Connection wrapper around a listed order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEdge {
    pub node: Order,
}

/// One page of orders as returned by `getProOrders`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPage {
    #[serde(default)]
    pub edges: Vec<OrderEdge>,
}

impl OrderPage {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Orders in the order the server returned them
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.edges.iter().map(|edge| &edge.node)
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// Estimated cost of a hypothetical order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFeeQuote {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub fee: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub base_currency_total: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub quote_currency_total: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub price: String,
}

/// A generated one-time deposit (payment) link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositLink {
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub amount: String,
    /// Unix epoch seconds, 0 when the server omits it
    #[serde(default, deserialize_with = "serde_helpers::deserialize_epoch")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub fee: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub id: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub link: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub reference: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub status: String,
    #[serde(default, deserialize_with = "serde_helpers::deserialize_text")]
    pub total_amount: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "serde_helpers::deserialize_text"
    )]
    pub kind: String,
}

impl DepositLink {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }
}

mod serde_helpers {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Text field that may arrive as a string, a bare number, or null.
    pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(String::new()),
            Value::String(raw) => Ok(raw),
            Value::Number(number) => Ok(number.to_string()),
            Value::Bool(flag) => Ok(flag.to_string()),
            other => Err(serde::de::Error::custom(format!(
                "expected text value, got {other}"
            ))),
        }
    }

    pub fn deserialize_epoch<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json() -> serde_json::Value {
        json!({
            "id": "UHJvT3JkZXItMQ==",
            "pair": "btc_usdt",
            "price": "1000000.00",
            "side": "buy",
            "status": "active",
            "timeInForce": "good_til_cancelled",
            "orderType": "limit_order",
            "fees": "0.00000000",
            "filled": "0.0",
            "total": "1000000.00",
            "initialBaseQuantity": "1.00000000",
            "initialQuoteQuantity": "1000000.00",
            "remainingBaseQuantity": "1.00000000",
            "remainingQuoteQuantity": "1000000.00",
            "meanExecutionPrice": null,
            "engineMessage": null
        })
    }

    #[test]
    fn order_keeps_decimal_text() {
        let order: Order = serde_json::from_value(order_json()).expect("order should deserialize");

        assert_eq!(order.price, "1000000.00");
        assert_eq!(order.fees, "0.00000000");
        assert_eq!(order.time_in_force, "good_til_cancelled");
        assert_eq!(order.initial_base_quantity, "1.00000000");
    }

    #[test]
    fn order_null_fields_become_empty() {
        let order: Order = serde_json::from_value(order_json()).expect("order should deserialize");

        assert_eq!(order.mean_execution_price, "");
        assert_eq!(order.engine_message, "");
    }

    #[test]
    fn order_page_preserves_edge_order() {
        let mut second = order_json();
        second["id"] = json!("UHJvT3JkZXItMg==");
        let page: OrderPage = serde_json::from_value(json!({
            "edges": [{ "node": order_json() }, { "node": second }]
        }))
        .expect("page should deserialize");

        let ids: Vec<&str> = page.orders().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["UHJvT3JkZXItMQ==", "UHJvT3JkZXItMg=="]);
        assert_eq!(page.into_orders().len(), 2);
    }

    #[test]
    fn fee_quote_numeric_field_kept_as_text() {
        let quote: OrderFeeQuote = serde_json::from_value(json!({
            "fee": "0.0015",
            "baseCurrencyTotal": "1.0015",
            "quoteCurrencyTotal": 4200,
            "price": "4200.00"
        }))
        .expect("quote should deserialize");

        assert_eq!(quote.fee, "0.0015");
        assert_eq!(quote.quote_currency_total, "4200");
    }

    #[test]
    fn fee_quote_fractional_numbers_keep_every_digit() {
        let quote: OrderFeeQuote = serde_json::from_str(
            r#"{
                "fee": 0.00150000,
                "baseCurrencyTotal": 1.00150000,
                "quoteCurrencyTotal": 1000000.00,
                "price": 0.1
            }"#,
        )
        .expect("quote should deserialize");

        assert_eq!(quote.fee, "0.00150000");
        assert_eq!(quote.base_currency_total, "1.00150000");
        assert_eq!(quote.quote_currency_total, "1000000.00");
        assert_eq!(quote.price, "0.1");
    }

    #[test]
    fn order_numeric_price_survives_value_round_trip() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{ "price": 995000.50, "fees": 0.00000000 }"#)
                .expect("value should parse");
        let order: Order = serde_json::from_value(value).expect("order should deserialize");

        assert_eq!(order.price, "995000.50");
        assert_eq!(order.fees, "0.00000000");
    }

    #[test]
    fn deposit_link_missing_created_at_is_zero() {
        let null_created: DepositLink = serde_json::from_value(json!({
            "amount": "50.0",
            "createdAt": null,
            "id": "dep-2",
            "link": "https://pay.example/def"
        }))
        .expect("null createdAt should deserialize");
        assert_eq!(null_created.created_at, 0);
        assert_eq!(null_created.id, "dep-2");

        let absent: DepositLink = serde_json::from_value(json!({ "id": "dep-3" }))
            .expect("absent createdAt should deserialize");
        assert_eq!(absent.created_at, 0);
    }

    #[test]
    fn deposit_link_created_at_is_integer() {
        let link: DepositLink = serde_json::from_value(json!({
            "amount": "50.0",
            "createdAt": 1_700_000_000,
            "fee": "0.5",
            "id": "dep-1",
            "link": "https://pay.example/abc",
            "reference": "REF-1",
            "status": "pending",
            "totalAmount": "50.5",
            "type": "sendcash_pay"
        }))
        .expect("deposit link should deserialize");

        assert_eq!(link.created_at, 1_700_000_000);
        assert_eq!(link.kind, "sendcash_pay");
        assert_eq!(
            link.created_at_utc().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
    }
}
