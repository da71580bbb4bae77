use hashbrown::HashMap;
use time::Date;

use crate::{BalanceSnapshot, DailyFlow, Movement, MovementKind, Period};

/// Entry and exit totals per item per day.
pub(crate) type DailyFlows = HashMap<String, HashMap<Date, DailyFlow>>;

/// Keep only movements dated inside the window.
pub fn window_movements(mut movements: Vec<Movement>, period: &Period) -> Vec<Movement> {
    let before = movements.len();
    movements.retain(|movement| period.contains(movement.date));

    tracing::debug!(
        "{} of {before} movements fall within the window",
        movements.len()
    );

    movements
}

/// One synthetic entry per snapshot row, dated on the reference day,
/// carrying the declared opening balance into the ledger.
///
/// An item with several snapshot rows gets one seed per row, so its
/// seeded opening balance is their sum.
pub fn opening_movements(balances: &[BalanceSnapshot], period: &Period) -> Vec<Movement> {
    balances
        .iter()
        .map(|balance| Movement {
            item: balance.item.clone(),
            kind: MovementKind::Entry,
            date: period.reference,
            amount: balance.opening,
        })
        .collect()
}

pub(crate) fn daily_flows<'a>(movements: impl Iterator<Item = &'a Movement>) -> DailyFlows {
    use hashbrown::hash_map::Entry::*;

    let mut flows = DailyFlows::default();
    for movement in movements {
        tracing::debug!(
            "accumulate {} {} {} {}",
            movement.kind,
            movement.item,
            movement.date,
            movement.amount
        );

        let per_day = match flows.entry(movement.item.clone()) {
            Occupied(per_day) => per_day.into_mut(),
            Vacant(per_day) => per_day.insert(HashMap::default()),
        };
        match per_day.entry(movement.date) {
            Occupied(flow) => flow.into_mut().accumulate(movement.kind, movement.amount),
            Vacant(flow) => {
                let mut accumulated = DailyFlow::ZERO;
                accumulated.accumulate(movement.kind, movement.amount);
                flow.insert(accumulated);
            }
        }
    }
    flows
}

/// The flow for one grid cell, zero when nothing moved.
pub(crate) fn flow_on(flows: &DailyFlows, item: &str, date: Date) -> DailyFlow {
    flows
        .get(item)
        .and_then(|per_day| per_day.get(&date))
        .copied()
        .unwrap_or(DailyFlow::ZERO)
}
