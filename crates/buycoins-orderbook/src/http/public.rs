/*
[INPUT]:  Pair and order parameters for read-only queries
[OUTPUT]: Supported trading pairs and fee quotes
[POS]:    HTTP layer - market queries without side effects
[UPDATE]: When adding new query operations or changing response format
*/

use rust_decimal::Decimal;

use crate::http::{BuycoinsClient, BuycoinsError, NoVariables, Operation, Result};
use crate::types::{OrderFeeQuote, OrderFeesVariables};

pub(crate) const GET_PAIRS: Operation = Operation {
    name: "Get Pairs",
    field: "getPairs",
    query: "query { getPairs }",
};

pub(crate) const GET_ORDER_FEES: Operation = Operation {
    name: "Get Pro Order Fees",
    field: "getProOrderFees",
    query: "query ($orderType: OrderMatchingEngineOrder!, $pair: Pair!, $side: OrderSide!, \
            $amount: BigDecimal!) { \
            getProOrderFees(orderType: $orderType, pair: $pair, side: $side, amount: $amount) { \
            fee baseCurrencyTotal quoteCurrencyTotal price } }",
};

impl BuycoinsClient {
    /// List supported trading pairs
    ///
    /// query { getPairs }
    pub async fn get_pairs(&self) -> Result<Vec<String>> {
        self.execute(GET_PAIRS, NoVariables {}).await
    }

    /// List supported trading pairs as an indented JSON array
    pub async fn list_pairs(&self) -> Result<String> {
        let pairs = self.get_pairs().await?;
        serde_json::to_string_pretty(&pairs)
            .map_err(|e| BuycoinsError::from(e).in_operation(GET_PAIRS.name))
    }

    /// Quote the fee and totals for a hypothetical order. No side effect.
    ///
    /// query getProOrderFees(orderType, pair, side, amount)
    pub async fn get_order_fees(
        &self,
        order_type: &str,
        pair: &str,
        side: &str,
        amount: Decimal,
    ) -> Result<OrderFeeQuote> {
        let variables = OrderFeesVariables {
            order_type,
            pair,
            side,
            amount,
        };
        self.execute(GET_ORDER_FEES, variables).await
    }
}
