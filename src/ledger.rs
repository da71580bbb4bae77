use color_eyre::eyre::{Result, WrapErr};
use kardex_balance::{
    check_closing_balances, duplicated_snapshot_items, snapshot_item_mismatch, stock_evolution,
    window_movements, Period,
};
use std::{fs::File, io::Write};

use crate::{format::write_ledger_as_csv, ingest, options::Options};

/// Run the whole pipeline: read both tables, evolve the ledger over the
/// reconciliation window, verify the declared closing balances, and
/// write the ledger table.
///
/// Balance verification never fails the run, it is reported on `out_w`.
pub(crate) fn write_ledger_from<W1, W2>(
    options: &Options,
    mut out_w: W1,
    mut error_w: W2,
) -> Result<()>
where
    W1: Write + Copy,
    W2: Write + Copy,
{
    let movements = ingest::movements_from_path(&options.movements)?;
    let balances = ingest::balances_from_path(&options.balances)?;

    let period = Period::resolve(&balances)?;
    let movements = window_movements(movements, &period);

    let duplicated = duplicated_snapshot_items(&balances);
    if !duplicated.is_empty() {
        tracing::debug!("duplicated balance items: {}", duplicated.join(", "));
        writeln!(error_w, "{DUPLICATED_ITEMS_WARNING}")?;
    }

    let mismatch = snapshot_item_mismatch(&movements, &balances);
    if !mismatch.is_empty() {
        tracing::debug!(
            "items only in movement table: [{}], only in balance table: [{}]",
            mismatch.only_in_movements.join(", "),
            mismatch.only_in_balances.join(", ")
        );
        writeln!(error_w, "{ITEM_MISMATCH_WARNING}")?;
    }

    let rows = stock_evolution(movements, &balances, &period);
    let report = check_closing_balances(&rows, &balances, &period, options.balance_tolerance);

    writeln!(
        out_w,
        "There are {} wrong quantities in final date balance.",
        report.wrong_quantities
    )?;
    writeln!(
        out_w,
        "There are {} wrong values in final date balance.",
        report.wrong_values
    )?;

    let ledger_file =
        File::create(&options.ledger).wrap_err(format!("failed to write {:?}", options.ledger))?;
    write_ledger_as_csv(&rows, ledger_file)
}

const DUPLICATED_ITEMS_WARNING: &str = "There are duplicated items in balance table.";
const ITEM_MISMATCH_WARNING: &str =
    "The items from balance table are different from movement table items.";

#[cfg(test)]
mod tests;
