/*
[INPUT]:  Order filters and deposit amounts
[OUTPUT]: Account data (order pages, deposit links)
[POS]:    HTTP layer - account-scoped operations
[UPDATE]: When adding new account operations or changing filters
*/

use rust_decimal::Decimal;

use crate::http::{BuycoinsClient, Operation, Result};
use crate::types::{DepositLink, DepositLinkVariables, GetOrdersVariables, OrderPage};

pub(crate) const GET_ORDERS: Operation = Operation {
    name: "Get Orders",
    field: "getProOrders",
    query: concat!(
        "query ($pair: Pair!, $status: ProOrderStatus!, $side: OrderSide!) { ",
        "getProOrders(pair: $pair, status: $status, side: $side) { edges { node { ",
        order_fields!(),
        " } } } }"
    ),
};

pub(crate) const CREATE_DEPOSIT_LINK: Operation = Operation {
    name: "Get Deposit Link",
    field: "createSendCashPayDeposit",
    query: "mutation ($amount: BigDecimal!) { createSendCashPayDeposit(amount: $amount) { \
            amount createdAt fee id link reference status totalAmount type } }",
};

impl BuycoinsClient {
    /// Query orders filtered by pair, status and side.
    ///
    /// Returns a single page as sent by the server; no cursor is followed.
    ///
    /// query getProOrders(pair, status, side)
    pub async fn get_orders(&self, pair: &str, status: &str, side: &str) -> Result<OrderPage> {
        let variables = GetOrdersVariables { pair, status, side };
        self.execute(GET_ORDERS, variables).await
    }

    /// Generate a one-time SendCash Pay deposit link
    ///
    /// mutation createSendCashPayDeposit(amount)
    pub async fn get_deposit_link(&self, amount: Decimal) -> Result<DepositLink> {
        self.execute(CREATE_DEPOSIT_LINK, DepositLinkVariables { amount })
            .await
    }
}
