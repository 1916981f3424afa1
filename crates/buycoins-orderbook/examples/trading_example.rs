/*
[INPUT]:  BUYCOINS_PUBLIC_KEY / BUYCOINS_SECRET_KEY environment variables
[OUTPUT]: Order placement, listing and cancellation results
[POS]:    Examples - trading operations
[UPDATE]: When trading operations change
*/

use buycoins_orderbook::{BuycoinsClient, OrderBook};
use rust_decimal::Decimal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Example: rest a limit order, list it, then cancel it.
///
/// Works against any `OrderBook` implementation.
async fn rest_and_cancel(book: &dyn OrderBook) -> buycoins_orderbook::Result<()> {
    let order = book
        .place_limit_order(
            "btc_usdt",
            Decimal::new(1, 3),
            Decimal::new(10_000, 0),
            "buy",
            "good_til_cancelled",
        )
        .await?;
    info!(id = %order.id, status = %order.status, price = %order.price, "limit order placed");

    let page = book.get_orders("btc_usdt", "active", "buy").await?;
    for open in page.orders() {
        info!(id = %open.id, remaining = %open.remaining_base_quantity, "open order");
    }

    match book.cancel_order(&order.id).await {
        Ok(cancelled) => info!(id = %cancelled.id, status = %cancelled.status, "order cancelled"),
        Err(err) => warn!(error = %err, "cancel failed"),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> buycoins_orderbook::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = BuycoinsClient::from_env()?;
    rest_and_cancel(&client).await?;

    let link = client.get_deposit_link(Decimal::new(5_000, 0)).await?;
    info!(link = %link.link, created_at = ?link.created_at_utc(), "deposit link created");

    Ok(())
}
