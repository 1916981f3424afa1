/*
[INPUT]:  Order parameters (pair, quantity, price, side, time in force)
[OUTPUT]: Order state after placement or cancellation
[POS]:    HTTP layer - trading mutations
[UPDATE]: When adding new trading mutations or changing order flow
*/

use rust_decimal::Decimal;

use crate::http::{BuycoinsClient, Operation, Result};
use crate::types::{CancelOrderVariables, LimitOrderVariables, MarketOrderVariables, Order};

pub(crate) const CANCEL_ORDER: Operation = Operation {
    name: "Cancel Order",
    field: "cancelOrder",
    query: concat!(
        "mutation ($id: ID!) { cancelOrder(proOrder: $id) { ",
        order_fields!(),
        " } }"
    ),
};

pub(crate) const POST_MARKET_ORDER: Operation = Operation {
    name: "Post Pro Market Order",
    field: "postProMarketOrder",
    query: concat!(
        "mutation ($pair: Pair!, $quantity: BigDecimal!, $side: OrderSide!) { ",
        "postProMarketOrder(pair: $pair, quantity: $quantity, side: $side) { ",
        order_fields!(),
        " } }"
    ),
};

pub(crate) const POST_LIMIT_ORDER: Operation = Operation {
    name: "Post Pro Limit Order",
    field: "postProLimitOrder",
    query: concat!(
        "mutation ($pair: Pair!, $quantity: BigDecimal!, $price: BigDecimal!, ",
        "$side: OrderSide!, $timeInForce: TimeInForce!) { ",
        "postProLimitOrder(pair: $pair, quantity: $quantity, price: $price, ",
        "side: $side, timeInForce: $timeInForce) { ",
        order_fields!(),
        " } }"
    ),
};

impl BuycoinsClient {
    /// Cancel a live order. The server decides the resulting status.
    ///
    /// mutation cancelOrder(proOrder: $id)
    pub async fn cancel_order(&self, id: &str) -> Result<Order> {
        self.execute(CANCEL_ORDER, CancelOrderVariables { id }).await
    }

    /// Place a market order, executed immediately at the best available price
    ///
    /// mutation postProMarketOrder(pair, quantity, side)
    pub async fn place_market_order(
        &self,
        pair: &str,
        quantity: Decimal,
        side: &str,
    ) -> Result<Order> {
        let variables = MarketOrderVariables {
            pair,
            quantity,
            side,
        };
        self.execute(POST_MARKET_ORDER, variables).await
    }

    /// Place a resting limit order
    ///
    /// mutation postProLimitOrder(pair, quantity, price, side, timeInForce)
    pub async fn place_limit_order(
        &self,
        pair: &str,
        quantity: Decimal,
        price: Decimal,
        side: &str,
        time_in_force: &str,
    ) -> Result<Order> {
        let variables = LimitOrderVariables {
            pair,
            quantity,
            price,
            side,
            time_in_force,
        };
        self.execute(POST_LIMIT_ORDER, variables).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_mutations_select_every_order_field() {
        for op in [CANCEL_ORDER, POST_MARKET_ORDER, POST_LIMIT_ORDER] {
            assert!(op.query.contains(op.field), "{} missing root field", op.name);
            assert!(op.query.contains("remainingQuoteQuantity meanExecutionPrice engineMessage"));
            assert!(op.query.starts_with("mutation"));
        }
    }
}
