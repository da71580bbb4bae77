use time::Date;

use crate::{BalanceSnapshot, LedgerError};

/// The reconciliation window derived from the balance table, together
/// with the reference day seeded with opening balances.
///
/// The reference day is the day before `start`, so the ledger can carry
/// each item's opening balance into the first day of the window.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Period {
    pub start: Date,
    pub end: Date,
    pub reference: Date,
}

impl Period {
    /// The window every snapshot covers: earliest declared start to
    /// earliest declared end.
    pub fn resolve(balances: &[BalanceSnapshot]) -> Result<Period, LedgerError> {
        use LedgerError::*;

        let start = balances
            .iter()
            .map(|balance| balance.period_start)
            .min()
            .ok_or(NoBalances)?;
        let end = balances
            .iter()
            .map(|balance| balance.period_end)
            .min()
            .ok_or(NoBalances)?;
        let reference = start.previous_day().ok_or(NoReferenceDay(start))?;

        tracing::debug!("resolved period {start} to {end}, reference day {reference}");

        Ok(Period {
            start,
            end,
            reference,
        })
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day from the reference day through the end of the window,
    /// ascending. Empty when the window ends before it starts.
    pub fn days_from_reference(&self) -> Vec<Date> {
        let mut days = Vec::default();
        let mut day = Some(self.reference);
        while let Some(d) = day {
            if d > self.end {
                break;
            }
            days.push(d);
            day = d.next_day();
        }
        days
    }
}
