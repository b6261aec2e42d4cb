use std::{
    io::{stdout, BufWriter, Read, Write},
    path::PathBuf,
};

use crate::{
    common::error::AppError,
    domain::{balance::BalancePolicy, ledger::Ledger},
    io::{reader, writer},
    worker::processor::Processor,
};

/// Replays a CSV of ledger actions and prints the resulting balances as CSV.
#[derive(Debug, clap::Parser)]
#[command(name = "split_ledger", version)]
pub struct Cli {
    /// Input CSV with `type,name,amount,participants,payer` headers
    pub input: PathBuf,

    /// How balances are derived from the recorded expenses
    #[arg(short, long, value_enum, default_value_t = PolicyArg::SplitAndPaid)]
    pub policy: PolicyArg,
}

/// Command-line names for [`BalancePolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Shares owed and amounts paid per member, plus the grand total
    SplitAndPaid,
    /// Accumulated share total per member
    Accumulated,
    /// Accumulated share total minus the mean across members
    MeanDeviation,
}

impl From<PolicyArg> for BalancePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::SplitAndPaid => BalancePolicy::SplitAndPaid,
            PolicyArg::Accumulated => BalancePolicy::Accumulated,
            PolicyArg::MeanDeviation => BalancePolicy::MeanDeviation,
        }
    }
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    tracing::info!(input = %cli.input.display(), policy = ?cli.policy, "replaying ledger");
    let file = std::fs::File::open(&cli.input)?;

    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    replay(file, writer, cli.policy.into())
}

/// Replays every action from `input` against a fresh ledger and writes the
/// balance report for `policy` to `output`. Stops at the first malformed row.
pub fn replay<R: Read, W: Write>(
    input: R,
    output: W,
    policy: BalancePolicy,
) -> Result<(), AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut ledger = Ledger::new();
    let processor = Processor::new(policy);

    for event in reader::read_events(&mut reader) {
        let event = event.map_err(AppError::Parse)?;
        processor.process(&mut ledger, event)?;
    }
    tracing::info!(
        members = ledger.members().len(),
        expenses = ledger.expenses().len(),
        "ledger replayed"
    );

    let report = processor.balances(&ledger);
    writer::write_report(output, &report)?;

    Ok(())
}
