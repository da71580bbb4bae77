use rust_decimal::Decimal;
use std::path::PathBuf;

/// Where the tables live and how strictly closing balances are checked.
#[derive(Clone, Debug)]
pub(crate) struct Options {
    pub(crate) movements: PathBuf,
    pub(crate) balances: PathBuf,
    pub(crate) ledger: PathBuf,
    pub(crate) balance_tolerance: Decimal,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            movements: defaults::default_movements_table().into(),
            balances: defaults::default_balances_table().into(),
            ledger: defaults::default_ledger_table().into(),
            balance_tolerance: defaults::default_balance_tolerance(),
        }
    }
}

pub(crate) mod defaults;
