use rust_decimal::Decimal;
use std::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Sub},
};
use strum_macros::Display;
use time::Date;

/// Direction of a stock movement.
#[derive(PartialEq, Eq, Clone, Copy, Display, Debug)]
pub enum MovementKind {
    Entry,
    Exit,
}

/// A quantity together with its monetary value, the unit of account
/// for everything in this crate.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct Stock {
    pub quantity: Decimal,
    pub value: Decimal,
}

impl Stock {
    pub const ZERO: Stock = Stock {
        quantity: Decimal::ZERO,
        value: Decimal::ZERO,
    };

    pub fn new(quantity: Decimal, value: Decimal) -> Self {
        Stock { quantity, value }
    }
}

impl Display for Stock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", &self.quantity, &self.value)
    }
}

impl Add for Stock {
    type Output = Stock;

    fn add(self, rhs: Stock) -> Self::Output {
        Stock {
            quantity: self.quantity + rhs.quantity,
            value: self.value + rhs.value,
        }
    }
}

impl AddAssign for Stock {
    fn add_assign(&mut self, rhs: Stock) {
        self.quantity += rhs.quantity;
        self.value += rhs.value;
    }
}

impl Sub for Stock {
    type Output = Stock;

    fn sub(self, rhs: Stock) -> Self::Output {
        Stock {
            quantity: self.quantity - rhs.quantity,
            value: self.value - rhs.value,
        }
    }
}

/// A dated change to one item's stock.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Movement {
    pub item: String,
    pub kind: MovementKind,
    pub date: Date,
    pub amount: Stock,
}

/// Externally declared opening and closing stock for one item over
/// its reporting period.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct BalanceSnapshot {
    pub item: String,
    pub period_start: Date,
    pub period_end: Date,
    pub opening: Stock,
    pub closing: Stock,
}

/// Entry and exit totals for one item on one day.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct DailyFlow {
    pub entry: Stock,
    pub exit: Stock,
}

impl DailyFlow {
    pub const ZERO: DailyFlow = DailyFlow {
        entry: Stock::ZERO,
        exit: Stock::ZERO,
    };

    pub(crate) fn accumulate(&mut self, kind: MovementKind, amount: Stock) {
        use MovementKind::*;

        match kind {
            Entry => self.entry += amount,
            Exit => self.exit += amount,
        }
    }

    /// Entries less exits.
    pub fn net(&self) -> Stock {
        self.entry - self.exit
    }
}

/// One row of the output ledger: what moved for an item on a day, and
/// the balances either side of it.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct LedgerRow {
    pub item: String,
    pub date: Date,
    pub flow: DailyFlow,
    pub opening: Stock,
    pub closing: Stock,
}
