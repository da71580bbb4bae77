use crate::{
    daily_flows, flow_on, ledger_grid, opening_movements, window_movements, BalanceSnapshot,
    LedgerRow, Movement, Period, Stock,
};

/// Build the daily ledger for the window.
///
/// Movements outside the window are discarded, the rest are totalled
/// per item per day over the full item-by-day grid, and each item's
/// balance is folded forward from its seeded opening on the reference
/// day. The reference day itself only seeds the fold, it gets no row.
/// Rows come back ordered by date then item.
pub fn stock_evolution(
    movements: Vec<Movement>,
    balances: &[BalanceSnapshot],
    period: &Period,
) -> Vec<LedgerRow> {
    let movements = window_movements(movements, period);
    let seeds = opening_movements(balances, period);
    let flows = daily_flows(movements.iter().chain(seeds.iter()));
    let grid = ledger_grid(&movements, period);

    let mut rows = Vec::with_capacity(grid.len());
    let mut current: Option<String> = None;
    let mut closing = Stock::ZERO;
    for (item, day) in grid {
        if current.as_deref() != Some(item.as_str()) {
            closing = Stock::ZERO;
            current = Some(item.clone());
        }

        let flow = flow_on(&flows, &item, day);
        let opening = closing;
        closing += flow.net();

        // the reference day only establishes the opening balance
        if day == period.reference {
            continue;
        }

        rows.push(LedgerRow {
            item,
            date: day,
            flow,
            opening,
            closing,
        });
    }

    rows.sort_by(|a, b| (a.date, &a.item).cmp(&(b.date, &b.item)));

    tracing::debug!("evolved {} ledger rows", rows.len());

    rows
}
