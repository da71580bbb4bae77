mod aggregate;
pub use aggregate::{opening_movements, window_movements};
pub(crate) use aggregate::{daily_flows, flow_on};

mod balance;
pub use balance::stock_evolution;

mod check;
pub use check::{
    check_closing_balances, duplicated_snapshot_items, snapshot_item_mismatch, CheckReport,
    ItemMismatch,
};

mod errors;
pub use errors::LedgerError;

mod grid;
pub use grid::ledger_grid;

mod period;
pub use period::Period;

mod public_types;
pub use public_types::{BalanceSnapshot, DailyFlow, LedgerRow, Movement, MovementKind, Stock};
