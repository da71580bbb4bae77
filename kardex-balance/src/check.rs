use hashbrown::{HashMap, HashSet};
use rust_decimal::Decimal;

use crate::{BalanceSnapshot, LedgerRow, Movement, Period};

/// How many declared closing balances the computed ledger failed to
/// reproduce on the final day of the window.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug)]
pub struct CheckReport {
    pub wrong_quantities: usize,
    pub wrong_values: usize,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.wrong_quantities == 0 && self.wrong_values == 0
    }
}

/// Compare each snapshot's declared closing balance against the
/// computed balance on the final day of the window.
///
/// Quantity and value are checked independently, each passing when its
/// absolute difference stays below `tolerance`. A snapshot whose item
/// has no ledger row on the final day is skipped.
pub fn check_closing_balances(
    rows: &[LedgerRow],
    balances: &[BalanceSnapshot],
    period: &Period,
    tolerance: Decimal,
) -> CheckReport {
    let computed = rows
        .iter()
        .filter(|row| row.date == period.end)
        .map(|row| (row.item.as_str(), row))
        .collect::<HashMap<_, _>>();

    let mut report = CheckReport::default();
    for balance in balances {
        let Some(row) = computed.get(balance.item.as_str()) else {
            continue;
        };

        let quantity_off = (balance.closing.quantity - row.closing.quantity).abs();
        let value_off = (balance.closing.value - row.closing.value).abs();

        tracing::debug!(
            "{}: declared closing {}, computed {}, off by {quantity_off} ({value_off})",
            balance.item,
            balance.closing,
            row.closing
        );

        if quantity_off >= tolerance {
            report.wrong_quantities += 1;
        }
        if value_off >= tolerance {
            report.wrong_values += 1;
        }
    }
    report
}

/// Items declared more than once in the balance table, sorted.
pub fn duplicated_snapshot_items(balances: &[BalanceSnapshot]) -> Vec<String> {
    use hashbrown::hash_map::Entry::*;

    let mut counts: HashMap<&str, usize> = HashMap::default();
    for balance in balances {
        match counts.entry(balance.item.as_str()) {
            Occupied(count) => *count.into_mut() += 1,
            Vacant(count) => {
                count.insert(1);
            }
        }
    }

    let mut duplicated = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(item, _)| item.to_string())
        .collect::<Vec<_>>();
    duplicated.sort();
    duplicated
}

/// Items present on one side but not the other, each sorted.
#[derive(PartialEq, Eq, Default, Clone, Debug)]
pub struct ItemMismatch {
    pub only_in_movements: Vec<String>,
    pub only_in_balances: Vec<String>,
}

impl ItemMismatch {
    pub fn is_empty(&self) -> bool {
        self.only_in_movements.is_empty() && self.only_in_balances.is_empty()
    }
}

/// Compare the items seen in the movement table against those declared
/// in the balance table.
pub fn snapshot_item_mismatch(movements: &[Movement], balances: &[BalanceSnapshot]) -> ItemMismatch {
    let movement_items = movements
        .iter()
        .map(|movement| movement.item.as_str())
        .collect::<HashSet<_>>();
    let balance_items = balances
        .iter()
        .map(|balance| balance.item.as_str())
        .collect::<HashSet<_>>();

    let mut only_in_movements = movement_items
        .difference(&balance_items)
        .map(|item| item.to_string())
        .collect::<Vec<_>>();
    only_in_movements.sort();

    let mut only_in_balances = balance_items
        .difference(&movement_items)
        .map(|item| item.to_string())
        .collect::<Vec<_>>();
    only_in_balances.sort();

    ItemMismatch {
        only_in_movements,
        only_in_balances,
    }
}
