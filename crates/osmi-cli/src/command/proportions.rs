use std::path::PathBuf;

use osmi_analysis::proportions;

use crate::{command::OutputFormat, util, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ProportionsArg {
    /// Survey records JSON file
    data: PathBuf,
    /// Question text to tabulate; repeat for several questions
    #[arg(long = "question", required = true)]
    questions: Vec<String>,
    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ProportionsArg) -> anyhow::Result<()> {
    let dataset = util::read_records_file(&arg.data)?;
    let questions = arg
        .questions
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>();
    let shares = proportions::by_survey_year(&dataset, &questions);

    if shares.is_empty() {
        log::warn!("no rows matched the selected questions");
    }

    match arg.format {
        OutputFormat::Text => {
            let rendered = view::render_shares(&shares);
            util::save_text(&rendered, arg.output.as_ref())?;
        }
        OutputFormat::Json => util::save_json(&shares, arg.output.as_ref())?,
    }
    Ok(())
}
