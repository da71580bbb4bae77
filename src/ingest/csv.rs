use csv::StringRecord;
use kardex_balance::{BalanceSnapshot, Movement, MovementKind, Stock};
use rust_decimal::Decimal;
use slugify::slugify;
use std::{
    collections::HashMap,
    error::Error,
    fmt::{Debug, Display},
    io::Read,
};
use time::Date;

use crate::DATE_FORMAT;

/// A failure to understand one of the input tables.
#[derive(Debug)]
pub(crate) enum IngestError {
    Csv(csv::Error),
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    Field {
        table: &'static str,
        record: usize,
        column: &'static str,
        raw: String,
    },
}

impl Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IngestError::*;

        match self {
            Csv(e) => write!(f, "{e}"),
            MissingColumn { table, column } => {
                write!(f, "{table} table is missing required column {column}")
            }
            Field {
                table,
                record,
                column,
                raw,
            } => {
                write!(f, "{table} table record {record} has unreadable {column} {raw:?}")
            }
        }
    }
}

impl Error for IngestError {}

impl From<csv::Error> for IngestError {
    fn from(value: csv::Error) -> Self {
        IngestError::Csv(value)
    }
}

/// Read movements from CSV with columns `item`, `tipo_movimento`,
/// `data_lancamento`, `quantidade`, `valor`. Extra columns are ignored.
pub(crate) fn movements<R>(reader: R) -> Result<Vec<Movement>, IngestError>
where
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let columns = Columns::from_headers(MOVEMENT_TABLE, rdr.headers()?);
    let item = columns.require("item")?;
    let kind = columns.require("tipo_movimento")?;
    let date = columns.require("data_lancamento")?;
    let quantity = columns.require("quantidade")?;
    let value = columns.require("valor")?;

    let mut movements = Vec::default();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let fields = Fields {
            table: MOVEMENT_TABLE,
            record: i + 1,
            record_fields: &record,
        };

        movements.push(Movement {
            item: fields.text(&item),
            kind: fields.movement_kind(&kind)?,
            date: fields.date(&date)?,
            amount: Stock::new(fields.decimal(&quantity)?, fields.decimal(&value)?),
        });
    }
    Ok(movements)
}

/// Read balance snapshots from CSV with columns `item`, `data_inicio`,
/// `data_final`, `qtd_inicio`, `valor_inicio`, `qtd_final`,
/// `valor_final`. Extra columns are ignored.
pub(crate) fn balances<R>(reader: R) -> Result<Vec<BalanceSnapshot>, IngestError>
where
    R: Read,
{
    let mut rdr = csv::Reader::from_reader(reader);
    let columns = Columns::from_headers(BALANCE_TABLE, rdr.headers()?);
    let item = columns.require("item")?;
    let period_start = columns.require("data_inicio")?;
    let period_end = columns.require("data_final")?;
    let opening_quantity = columns.require("qtd_inicio")?;
    let opening_value = columns.require("valor_inicio")?;
    let closing_quantity = columns.require("qtd_final")?;
    let closing_value = columns.require("valor_final")?;

    let mut balances = Vec::default();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let fields = Fields {
            table: BALANCE_TABLE,
            record: i + 1,
            record_fields: &record,
        };

        balances.push(BalanceSnapshot {
            item: fields.text(&item),
            period_start: fields.date(&period_start)?,
            period_end: fields.date(&period_end)?,
            opening: Stock::new(
                fields.decimal(&opening_quantity)?,
                fields.decimal(&opening_value)?,
            ),
            closing: Stock::new(
                fields.decimal(&closing_quantity)?,
                fields.decimal(&closing_value)?,
            ),
        });
    }
    Ok(balances)
}

/// Header lookup with names slugged, so casing, whitespace and accents
/// in the file don't matter.
struct Columns {
    table: &'static str,
    by_name: HashMap<String, usize>,
}

impl Columns {
    fn from_headers(table: &'static str, headers: &StringRecord) -> Self {
        let by_name = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (slugify(name, "", "_", None), idx))
            .collect();
        Columns { table, by_name }
    }

    fn require(&self, name: &'static str) -> Result<Column, IngestError> {
        self.by_name
            .get(name)
            .map(|idx| Column { name, idx: *idx })
            .ok_or(IngestError::MissingColumn {
                table: self.table,
                column: name,
            })
    }
}

struct Column {
    name: &'static str,
    idx: usize,
}

/// One record of a table, with enough context to locate a bad field.
struct Fields<'a> {
    table: &'static str,
    record: usize,
    record_fields: &'a StringRecord,
}

impl Fields<'_> {
    fn raw(&self, column: &Column) -> &str {
        self.record_fields.get(column.idx).unwrap_or_default().trim()
    }

    fn text(&self, column: &Column) -> String {
        self.raw(column).to_string()
    }

    fn movement_kind(&self, column: &Column) -> Result<MovementKind, IngestError> {
        use MovementKind::*;

        let raw = self.raw(column);
        match raw {
            ENTRY_TOKEN => Ok(Entry),
            EXIT_TOKEN => Ok(Exit),
            _ => Err(self.error(column, raw)),
        }
    }

    fn date(&self, column: &Column) -> Result<Date, IngestError> {
        let raw = self.raw(column);
        Date::parse(raw, DATE_FORMAT).map_err(|_| self.error(column, raw))
    }

    fn decimal(&self, column: &Column) -> Result<Decimal, IngestError> {
        let raw = self.raw(column);
        raw.parse().map_err(|_| self.error(column, raw))
    }

    fn error(&self, column: &Column, raw: &str) -> IngestError {
        IngestError::Field {
            table: self.table,
            record: self.record,
            column: column.name,
            raw: raw.to_string(),
        }
    }
}

pub(crate) const MOVEMENT_TABLE: &str = "movement";
pub(crate) const BALANCE_TABLE: &str = "balance";

const ENTRY_TOKEN: &str = "Ent";
const EXIT_TOKEN: &str = "Sai";
