/*
[INPUT]:  Caller-supplied operation arguments
[OUTPUT]: GraphQL variable objects with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::Serialize;

// Quantities go out as JSON numbers carrying the exact decimal digits, matching
// the BigDecimal scalar inputs.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetOrdersVariables<'a> {
    pub pair: &'a str,
    pub status: &'a str,
    pub side: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancelOrderVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFeesVariables<'a> {
    pub order_type: &'a str,
    pub pair: &'a str,
    pub side: &'a str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOrderVariables<'a> {
    pub pair: &'a str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub quantity: Decimal,
    pub side: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderVariables<'a> {
    pub pair: &'a str,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub side: &'a str,
    pub time_in_force: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepositLinkVariables {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_order_variables_use_schema_names() {
        let variables = LimitOrderVariables {
            pair: "btc_usdt",
            quantity: Decimal::new(5, 1),
            price: Decimal::new(420_000, 1),
            side: "sell",
            time_in_force: "fill_or_kill",
        };

        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({
                "pair": "btc_usdt",
                "quantity": 0.5,
                "price": 42000.0,
                "side": "sell",
                "timeInForce": "fill_or_kill"
            })
        );
    }

    #[test]
    fn fee_variables_send_amount_as_number() {
        let variables = OrderFeesVariables {
            order_type: "market_order",
            pair: "eth_ngnt",
            side: "buy",
            amount: Decimal::new(25, 2),
        };

        let value = serde_json::to_value(&variables).unwrap();
        assert_eq!(value["orderType"], json!("market_order"));
        assert!(value["amount"].is_number());
        assert_eq!(value["amount"].as_f64(), Some(0.25));
    }
}
