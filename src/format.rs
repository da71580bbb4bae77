use color_eyre::eyre::Result;
use kardex_balance::LedgerRow;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::DATE_FORMAT;

/// Fixed column set of the ledger table, in output order.
pub(crate) const LEDGER_COLUMNS: [&str; 10] = [
    "item",
    "data_lancamento",
    "quantidade_entrada",
    "valor_entrada",
    "quantidade_saida",
    "valor_saida",
    "saldo_inicial_quantidade",
    "saldo_inicial_valor",
    "saldo_final_quantidade",
    "saldo_final_valor",
];

/// One ledger row flattened onto the output columns.
#[derive(Serialize, Debug)]
struct LedgerRecord<'a> {
    item: &'a str,
    data_lancamento: String,
    quantidade_entrada: Decimal,
    valor_entrada: Decimal,
    quantidade_saida: Decimal,
    valor_saida: Decimal,
    saldo_inicial_quantidade: Decimal,
    saldo_inicial_valor: Decimal,
    saldo_final_quantidade: Decimal,
    saldo_final_valor: Decimal,
}

impl<'a> TryFrom<&'a LedgerRow> for LedgerRecord<'a> {
    type Error = time::error::Format;

    fn try_from(row: &'a LedgerRow) -> Result<Self, Self::Error> {
        Ok(LedgerRecord {
            item: &row.item,
            data_lancamento: row.date.format(DATE_FORMAT)?,
            quantidade_entrada: row.flow.entry.quantity,
            valor_entrada: row.flow.entry.value,
            quantidade_saida: row.flow.exit.quantity,
            valor_saida: row.flow.exit.value,
            saldo_inicial_quantidade: row.opening.quantity,
            saldo_inicial_valor: row.opening.value,
            saldo_final_quantidade: row.closing.quantity,
            saldo_final_valor: row.closing.value,
        })
    }
}

/// Write the ledger as CSV under the fixed header, header included even
/// when there are no rows.
pub(crate) fn write_ledger_as_csv<W>(rows: &[LedgerRow], out_w: W) -> Result<()>
where
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out_w);

    wtr.write_record(LEDGER_COLUMNS)?;
    for row in rows {
        wtr.serialize(LedgerRecord::try_from(row)?)?;
    }
    wtr.flush()?;

    Ok(())
}
