use rust_decimal::Decimal;

pub(crate) fn default_movements_table() -> &'static str {
    "MovtoITEM.csv"
}

pub(crate) fn default_balances_table() -> &'static str {
    "SaldoITEM.csv"
}

pub(crate) fn default_ledger_table() -> &'static str {
    "BalncITEM.csv"
}

pub(crate) fn default_balance_tolerance() -> Decimal {
    Decimal::new(1, 3) // 0.001
}
