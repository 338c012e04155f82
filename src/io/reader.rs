use crate::{
    common::{command::SessionCommand, money::Money},
    domain::account::Pin,
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the script headers. Columns a
/// command does not use stay empty.
struct CsvRow {
    command: String,
    handle: Option<String>,
    pin: Option<String>,
    amount: Option<String>,
}

/// Reads and validates a session script from a CSV reader.
///
/// Supported headers: `command,handle,pin,amount`. The command name is
/// case-insensitive; errors name the 1-based data row they came from.
///
/// # Examples
///
/// ```
/// use bankist::io::reader::read_commands;
/// use bankist::common::command::SessionCommand;
/// use csv::ReaderBuilder;
///
/// let data = "command,handle,pin,amount\n\
/// login,js,1111,\n\
/// loan,,,1000\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(SessionCommand::Login { .. })));
/// assert!(matches!(commands[1], Ok(SessionCommand::Loan { .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<SessionCommand, String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(i, res)| decode(i + 1, res.map_err(|e| e.to_string())?))
}

fn decode(row: usize, r: CsvRow) -> Result<SessionCommand, String> {
    let kind = r.command.trim().to_ascii_lowercase();

    match kind.as_str() {
        "login" => Ok(SessionCommand::Login {
            handle: required(row, "login", "handle", r.handle)?,
            pin: parse_pin(row, "login", r.pin)?,
        }),
        "logout" => Ok(SessionCommand::Logout),
        "transfer" => Ok(SessionCommand::Transfer {
            to: required(row, "transfer", "handle", r.handle)?,
            amount: parse_amount(row, "transfer", r.amount)?,
        }),
        "loan" => Ok(SessionCommand::Loan {
            amount: parse_amount(row, "loan", r.amount)?,
        }),
        "close" => Ok(SessionCommand::Close {
            handle: required(row, "close", "handle", r.handle)?,
            pin: parse_pin(row, "close", r.pin)?,
        }),
        "sort" => Ok(SessionCommand::Sort),
        other => Err(format!("unknown command: {other} on row {row}")),
    }
}

fn required(
    row: usize,
    command: &str,
    field: &str,
    value: Option<String>,
) -> Result<String, String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("{command} missing {field} on row {row}"))
}

fn parse_pin(row: usize, command: &str, value: Option<String>) -> Result<Pin, String> {
    let raw = required(row, command, "pin", value)?;
    Pin::from_str(&raw).map_err(|e| format!("{command} has invalid pin {raw:?} on row {row}: {e}"))
}

fn parse_amount(row: usize, command: &str, value: Option<String>) -> Result<Money, String> {
    let raw = required(row, command, "amount", value)?;
    Money::from_str(&raw)
        .map_err(|e| format!("{command} has invalid amount {raw:?} on row {row}: {e}"))
}
