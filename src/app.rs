use std::{
    io::{BufWriter, Read, stdout},
    path::PathBuf,
};

use clap::Parser;

use crate::{
    common::error::AppError,
    domain::bank::Bank,
    io::{
        reader,
        writer::{self, StepReport},
    },
    worker::processor::Processor,
};

/// Replays a CSV session script against the demo bank.
#[derive(Parser, Debug)]
#[command(name = "bankist", version)]
pub struct Cli {
    /// Script with headers `command,handle,pin,amount`.
    pub script: PathBuf,
    /// Also write the final movement list to this CSV file.
    #[arg(long, value_name = "PATH")]
    pub movements: Option<PathBuf>,
    /// Log filter (e.g. `info`, `bankist=debug`); `RUST_LOG` wins if set.
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let cli = Cli::try_parse_from(args)?;
    execute(&cli)
}

pub fn execute(cli: &Cli) -> Result<(), AppError> {
    let file = std::fs::File::open(&cli.script)?;
    let mut bank = Bank::seeded()?;
    let steps = replay(file, &mut bank)?;

    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    writer::write_report(out, &steps)?;

    if let Some(path) = &cli.movements {
        let file = std::fs::File::create(path)?;
        writer::write_movements(BufWriter::new(file), bank.projection().as_ref())?;
    }

    Ok(())
}

/// Runs every command of a script in order. Rejected commands are reported
/// and the replay continues; a malformed row aborts it.
pub fn replay<R: Read>(input: R, bank: &mut Bank) -> Result<Vec<StepReport>, AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let mut processor = Processor::new();
    let mut steps = Vec::new();

    for (i, command) in reader::read_commands(&mut rdr).enumerate() {
        let command = command.map_err(AppError::Parse)?;
        let name = command.name();

        let status = match processor.process(bank, command) {
            Ok(_) => "ok",
            Err(e) => e.kind(),
        };
        steps.push(StepReport {
            step: i + 1,
            command: name,
            status,
            projection: bank.projection(),
        });
    }

    tracing::info!(steps = steps.len(), "script replayed");
    Ok(steps)
}
