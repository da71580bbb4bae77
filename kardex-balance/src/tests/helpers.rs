use rust_decimal::Decimal;
use time::Date;
use tracing_subscriber::EnvFilter;

use crate::{stock_evolution, BalanceSnapshot, LedgerRow, Movement, MovementKind, Period, Stock};

pub(crate) fn mov(
    item: &str,
    kind: MovementKind,
    date: Date,
    quantity: Decimal,
    value: Decimal,
) -> Movement {
    Movement {
        item: item.to_string(),
        kind,
        date,
        amount: Stock::new(quantity, value),
    }
}

pub(crate) fn snap(
    item: &str,
    period_start: Date,
    period_end: Date,
    opening: (Decimal, Decimal),
    closing: (Decimal, Decimal),
) -> BalanceSnapshot {
    BalanceSnapshot {
        item: item.to_string(),
        period_start,
        period_end,
        opening: Stock::new(opening.0, opening.1),
        closing: Stock::new(closing.0, closing.1),
    }
}

/// Resolve the period from the balance table and evolve the ledger.
pub(crate) fn evolve(
    movements: Vec<Movement>,
    balances: &[BalanceSnapshot],
) -> (Vec<LedgerRow>, Period) {
    init_tracing();

    let period = Period::resolve(balances).unwrap();
    let rows = stock_evolution(movements, balances, &period);
    (rows, period)
}

/// The single row for an item on a day, failing the test when absent.
pub(crate) fn row<'a>(rows: &'a [LedgerRow], item: &str, date: Date) -> &'a LedgerRow {
    rows.iter()
        .find(|row| row.item == item && row.date == date)
        .unwrap_or_else(|| panic!("no ledger row for {item} on {date}"))
}

pub(crate) fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber).unwrap();
    });
}
