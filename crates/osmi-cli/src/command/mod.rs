use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, audit::AuditArg, proportions::ProportionsArg};

mod analyze;
mod audit;
mod proportions;

/// Where a command writes its result.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum OutputFormat {
    /// Human-readable summary, tables, and charts.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Bootstrap prevalence analysis for one or more disorders
    Analyze(#[clap(flatten)] AnalyzeArg),
    /// Null-answer and duplicate-row audit of a records file
    Audit(#[clap(flatten)] AuditArg),
    /// Answer proportions per survey year for selected questions
    Proportions(#[clap(flatten)] ProportionsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Analyze(arg) => analyze::run(&arg),
        Mode::Audit(arg) => audit::run(&arg),
        Mode::Proportions(arg) => proportions::run(&arg),
    }
}
