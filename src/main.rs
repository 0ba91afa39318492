use order_tracker::ledger::{LedgerError, OrderLedger};
use order_tracker::lifecycle::setup_tracing;
use order_tracker::model::OrderConfig;
use order_tracker::registry::OrderRegistry;
use tracing::info;

fn main() -> Result<(), LedgerError> {
    setup_tracing();

    info!("Starting order tracker demo");

    // Bare issuance: numbers only, no records attached.
    let span = tracing::info_span!("issuance");
    let issued = span.in_scope(|| -> Result<_, LedgerError> {
        let mut registry = OrderRegistry::new();
        for _ in 0..3 {
            registry.add_order()?;
        }
        Ok(registry.issued().to_vec())
    })?;
    info!(count = issued.len(), "Issued bare order numbers");

    let orders_to_place = [
        OrderConfig::builder()
            .asset_name("Bitcoin")
            .asset_type("Crypto")
            .asset_pair("BTC/USD")
            .quantity(2.5)
            .order_price(41000.0)
            .base_currency("USD")
            .build(),
        OrderConfig::builder()
            .asset_name("Ether")
            .asset_type("Crypto")
            .asset_pair("ETH/USD")
            .quantity(10.0)
            .order_price(2200.0)
            .base_currency("USD")
            .build(),
        OrderConfig::builder()
            .asset_name("Apple")
            .asset_type("Equity")
            .asset_pair("AAPL/USD")
            .quantity(15.0)
            .order_price(189.5)
            .base_currency("USD")
            .build(),
    ];

    let _guard = tracing::info_span!("ledger").entered();
    let mut ledger = OrderLedger::new();
    for config in orders_to_place {
        ledger.place(config)?;
    }

    for order in ledger.orders() {
        info!(
            order_number = %order.order_number(),
            asset = order.asset_name(),
            pair = order.asset_pair(),
            quantity = order.quantity(),
            price = order.order_price(),
            currency = order.base_currency(),
            "Order"
        );
    }

    info!("Order tracker demo completed");
    Ok(())
}
