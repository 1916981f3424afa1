/*
[INPUT]:  BUYCOINS_PUBLIC_KEY / BUYCOINS_SECRET_KEY environment variables
[OUTPUT]: Supported trading pairs printed to stdout
[POS]:    Examples - read-only queries
[UPDATE]: When query operations change
*/

use buycoins_orderbook::BuycoinsClient;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> buycoins_orderbook::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = BuycoinsClient::from_env()?;

    let pairs = client.list_pairs().await?;
    println!("Supported pairs:\n{pairs}");

    let quote = client
        .get_order_fees("market_order", "btc_usdt", "buy", Decimal::new(1, 2))
        .await?;
    println!(
        "Fee for 0.01 btc_usdt: {} (quote total {})",
        quote.fee, quote.quote_currency_total
    );

    Ok(())
}
