use std::io::Write;

use crate::domain::balance::{BalanceReport, BalanceRow, SplitRow};

#[derive(serde::Serialize)]
struct SplitOutputRow<'a> {
    member: &'a str,
    split: String,
    paid: String,
}

#[derive(serde::Serialize)]
struct BalanceOutputRow<'a> {
    member: &'a str,
    balance: String,
}

/// Writes a balance report as CSV.
///
/// A split-and-paid report is written as `member,split,paid` rows followed
/// by a two-field `total_paid,<amount>` footer record. Net reports are
/// written as `member,balance` rows. Rows keep the report's member order and
/// amounts are formatted with two decimals.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use split_ledger::common::money::Money;
/// use split_ledger::domain::balance::{BalanceReport, BalanceRow};
/// use split_ledger::io::writer::write_report;
///
/// let report = BalanceReport::Net(vec![BalanceRow {
///     member: "alice".into(),
///     balance: Money::new(500_000),
/// }]);
///
/// let mut out = Vec::new();
/// write_report(&mut out, &report).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "member,balance\nalice,50.00\n");
/// ```
pub fn write_report<W: Write>(writer: W, report: &BalanceReport) -> Result<(), csv::Error> {
    // the split-and-paid footer is shorter than its rows
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_writer(writer);

    match report {
        BalanceReport::SplitAndPaid { rows, total_paid } => {
            write_split_rows(&mut wtr, rows)?;
            wtr.write_record(["total_paid", total_paid.to_string_2dp().as_str()])?;
        }
        BalanceReport::Net(rows) => write_balance_rows(&mut wtr, rows)?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_split_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[SplitRow]) -> csv::Result<()> {
    if rows.is_empty() {
        wtr.write_record(["member", "split", "paid"])?;
    }
    for row in rows {
        wtr.serialize(SplitOutputRow {
            member: &row.member,
            split: row.split.to_string_2dp(),
            paid: row.paid.to_string_2dp(),
        })?;
    }
    Ok(())
}

fn write_balance_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[BalanceRow]) -> csv::Result<()> {
    if rows.is_empty() {
        wtr.write_record(["member", "balance"])?;
    }
    for row in rows {
        wtr.serialize(BalanceOutputRow {
            member: &row.member,
            balance: row.balance.to_string_2dp(),
        })?;
    }
    Ok(())
}
