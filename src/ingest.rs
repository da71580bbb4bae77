use color_eyre::eyre::{Result, WrapErr};
use kardex_balance::{BalanceSnapshot, Movement};
use std::path::Path;

/// Read the movement table from a CSV file.
pub(crate) fn movements_from_path(path: &Path) -> Result<Vec<Movement>> {
    let file = std::fs::File::open(path).wrap_err(format!("failed to read {path:?}"))?;
    let movements = csv::movements(file)?;

    tracing::debug!("read {} movements from {path:?}", movements.len());

    Ok(movements)
}

/// Read the balance snapshot table from a CSV file.
pub(crate) fn balances_from_path(path: &Path) -> Result<Vec<BalanceSnapshot>> {
    let file = std::fs::File::open(path).wrap_err(format!("failed to read {path:?}"))?;
    let balances = csv::balances(file)?;

    tracing::debug!("read {} balance snapshots from {path:?}", balances.len());

    Ok(balances)
}

pub(crate) mod csv;
