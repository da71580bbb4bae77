use kardex_balance::{
    check_closing_balances, stock_evolution, window_movements, CheckReport, LedgerRow, Period,
};
use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
};

use super::write_ledger_from;
use crate::{format::write_ledger_as_csv, ingest, options::Options};

const MOVEMENTS_CSV: &str = "\
item,tipo_movimento,data_lancamento,quantidade,valor
bolt,Ent,2023-01-10,5,50.00
bolt,Sai,2023-01-11,3,30.00
nut,Ent,2023-01-12,7,70.00
bolt,Ent,2023-02-01,99,999.00
";

const BALANCES_CSV: &str = "\
item,data_inicio,data_final,qtd_inicio,valor_inicio,qtd_final,valor_final
bolt,2023-01-10,2023-01-12,10,100.00,12,120.00
nut,2023-01-10,2023-01-12,0,0,7,70.00
";

fn evolve_tables(balances_csv: &str) -> (Vec<LedgerRow>, CheckReport) {
    let movements = ingest::csv::movements(MOVEMENTS_CSV.as_bytes()).unwrap();
    let balances = ingest::csv::balances(balances_csv.as_bytes()).unwrap();

    let period = Period::resolve(&balances).unwrap();
    let movements = window_movements(movements, &period);
    let rows = stock_evolution(movements, &balances, &period);
    let tolerance = Options::default().balance_tolerance;
    let report = check_closing_balances(&rows, &balances, &period, tolerance);
    (rows, report)
}

fn ledger_csv(rows: &[LedgerRow]) -> Vec<u8> {
    let mut out = Vec::new();
    write_ledger_as_csv(rows, &mut out).unwrap();
    out
}

/// In-memory stand-in for the stdout/stderr handles the binary passes in.
#[derive(Default)]
struct Sink(RefCell<Vec<u8>>);

impl Sink {
    fn into_string(self) -> String {
        String::from_utf8(self.0.into_inner()).unwrap()
    }
}

impl Write for &Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn tables_in_ledger_out() {
    let (rows, report) = evolve_tables(BALANCES_CSV);

    let written = String::from_utf8(ledger_csv(&rows)).unwrap();
    assert_eq!(
        written,
        "\
item,data_lancamento,quantidade_entrada,valor_entrada,quantidade_saida,valor_saida,saldo_inicial_quantidade,saldo_inicial_valor,saldo_final_quantidade,saldo_final_valor
bolt,2023-01-10,5,50.00,0,0,10,100.00,15,150.00
nut,2023-01-10,0,0,0,0,0,0,0,0
bolt,2023-01-11,0,0,3,30.00,15,150.00,12,120.00
nut,2023-01-11,0,0,0,0,0,0,0,0
bolt,2023-01-12,0,0,0,0,12,120.00,12,120.00
nut,2023-01-12,7,70.00,0,0,0,0,7,70.00
"
    );
    assert!(report.is_clean());
}

#[test]
fn declared_closings_off_by_more_than_tolerance_are_counted() {
    let dirty = BALANCES_CSV.replace("12,120.00", "13,120.00");

    let (_, report) = evolve_tables(&dirty);

    assert_eq!(
        report,
        CheckReport {
            wrong_quantities: 1,
            wrong_values: 0,
        }
    );
}

#[test]
fn rewriting_the_same_tables_is_byte_identical() {
    let (first, _) = evolve_tables(BALANCES_CSV);
    let (second, _) = evolve_tables(BALANCES_CSV);

    assert_eq!(ledger_csv(&first), ledger_csv(&second));
}

#[test]
fn diagnostics_route_to_their_writers() {
    let dir = std::env::temp_dir().join(format!("kardex-ledger-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let options = Options {
        movements: dir.join("MovtoITEM.csv"),
        balances: dir.join("SaldoITEM.csv"),
        ledger: dir.join("BalncITEM.csv"),
        ..Options::default()
    };
    fs::write(
        &options.movements,
        "\
item,tipo_movimento,data_lancamento,quantidade,valor
bolt,Ent,2023-01-10,5,50
washer,Ent,2023-01-10,1,1
",
    )
    .unwrap();
    fs::write(
        &options.balances,
        "\
item,data_inicio,data_final,qtd_inicio,valor_inicio,qtd_final,valor_final
bolt,2023-01-10,2023-01-10,0,0,5,50
bolt,2023-01-10,2023-01-10,0,0,1,1
",
    )
    .unwrap();

    let out = Sink::default();
    let error = Sink::default();
    write_ledger_from(&options, &out, &error).unwrap();

    let written = fs::read_to_string(&options.ledger).unwrap();
    fs::remove_dir_all(&dir).unwrap();

    assert_eq!(
        out.into_string(),
        "\
There are 1 wrong quantities in final date balance.
There are 1 wrong values in final date balance.
"
    );
    assert_eq!(
        error.into_string(),
        "\
There are duplicated items in balance table.
The items from balance table are different from movement table items.
"
    );
    assert!(written.ends_with(
        "\
bolt,2023-01-10,5,50,0,0,0,0,5,50
washer,2023-01-10,1,1,0,0,0,0,1,1
"
    ));
}
