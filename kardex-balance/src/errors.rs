use std::{
    error::Error,
    fmt::{Debug, Display},
};

use time::Date;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum LedgerError {
    NoBalances,
    NoReferenceDay(Date),
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use LedgerError::*;

        match self {
            NoBalances => f.write_str("balance table is empty, no period to reconcile"),
            NoReferenceDay(start) => {
                write!(f, "no calendar day exists before period start {start}")
            }
        }
    }
}

impl Error for LedgerError {}
