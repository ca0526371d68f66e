use std::path::PathBuf;

use osmi_analysis::quality::{self, QualityAudit, QuestionNullStats};
use serde::Serialize;

use crate::{command::OutputFormat, util, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AuditArg {
    /// Survey records JSON file
    data: PathBuf,
    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct AuditReport {
    audit: QualityAudit,
    questions: Vec<QuestionNullStats>,
}

pub(crate) fn run(arg: &AuditArg) -> anyhow::Result<()> {
    let dataset = util::read_records_file(&arg.data)?;
    let audit = quality::audit(&dataset);
    let questions = quality::null_analysis(&dataset);

    if audit.has_null_answers() {
        log::warn!("{} null answers in {}", audit.null_answer_rows, arg.data.display());
    }
    if audit.has_duplicates() {
        log::warn!("{} duplicate rows in {}", audit.duplicate_rows, arg.data.display());
    }

    match arg.format {
        OutputFormat::Text => {
            let rendered = view::render_audit(&audit, &questions);
            util::save_text(&rendered, arg.output.as_ref())?;
        }
        OutputFormat::Json => {
            let report = AuditReport { audit, questions };
            util::save_json(&report, arg.output.as_ref())?;
        }
    }
    Ok(())
}
