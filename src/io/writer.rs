use std::io::Write;

use crate::domain::projection::Projection;

/// Outcome of one replayed command.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: usize,
    pub command: &'static str,
    /// `ok` or the error kind.
    pub status: &'static str,
    pub projection: Option<Projection>,
}

#[derive(serde::Serialize)]
/// Internal CSV output row for the step report.
///
/// Headers written (in this order):
/// `step,command,status,owner,balance,deposits,withdrawals,interest`.
/// Account columns are empty while nobody is signed in.
struct ReportRow<'a> {
    step: usize,
    command: &'a str,
    status: &'a str,
    owner: Option<&'a str>,
    balance: Option<String>,
    deposits: Option<String>,
    withdrawals: Option<String>,
    interest: Option<String>,
}

#[derive(serde::Serialize)]
struct MovementCsvRow<'a> {
    index: usize,
    kind: &'a str,
    amount: String,
}

/// Writes one row per replayed command.
///
/// # Examples
///
/// ```
/// use bankist::io::writer::{write_report, StepReport};
///
/// let steps = vec![StepReport { step: 1, command: "sort", status: "no_active_session", projection: None }];
/// let mut out = Vec::new();
/// write_report(&mut out, &steps).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("step,command,status,owner,balance,deposits,withdrawals,interest\n"));
/// assert!(s.contains("\n1,sort,no_active_session,,,,,\n"));
/// ```
pub fn write_report<W: Write>(writer: W, steps: &[StepReport]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for s in steps {
        let p = s.projection.as_ref();
        let row = ReportRow {
            step: s.step,
            command: s.command,
            status: s.status,
            owner: p.map(|p| p.owner.as_str()),
            balance: p.map(|p| p.balance.to_string_2dp()),
            deposits: p.map(|p| p.total_deposits.to_string_2dp()),
            withdrawals: p.map(|p| p.total_withdrawals.to_string_2dp()),
            interest: p.map(|p| p.qualifying_interest.to_string_2dp()),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the movement list of a projection in its projected order.
/// Only the header is written when there is no projection.
pub fn write_movements<W: Write>(
    writer: W,
    projection: Option<&Projection>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["index", "kind", "amount"])?;

    for m in projection.map(|p| p.movements.as_slice()).unwrap_or_default() {
        wtr.serialize(MovementCsvRow {
            index: m.index,
            kind: m.kind.as_str(),
            amount: m.amount.to_string_2dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
