use time::Date;

use crate::{Movement, Period};

/// Distinct item identifiers across `movements`, sorted.
fn distinct_items(movements: &[Movement]) -> Vec<String> {
    let mut items = movements
        .iter()
        .map(|movement| movement.item.clone())
        .collect::<Vec<_>>();
    items.sort();
    items.dedup();
    items
}

/// Every cell the ledger must cover: each item with movements in the
/// window, crossed with each day from the reference day through the end
/// of the window, ordered by item then day.
///
/// Items without a movement on a given day still get a cell, so the
/// ledger carries their balance across quiet days.
pub fn ledger_grid(movements: &[Movement], period: &Period) -> Vec<(String, Date)> {
    let items = distinct_items(movements);
    let days = period.days_from_reference();

    tracing::debug!("grid of {} items over {} days", items.len(), days.len());

    let mut cells = Vec::with_capacity(items.len() * days.len());
    for item in &items {
        for day in &days {
            cells.push((item.clone(), *day));
        }
    }
    cells
}
