use std::{collections::BTreeMap, path::PathBuf};

use osmi_analysis::{BootstrapConfig, DEFAULT_COHORT, analyze_disorder_prevalence};

use crate::{command::OutputFormat, report::LogReporter, util, view};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Survey records JSON file
    data: PathBuf,
    /// Answer text of a disorder to analyze, e.g.
    /// "Anxiety Disorder (Generalized, Social, Phobia, etc)";
    /// repeat to compare several disorders
    #[arg(long = "disorder", required = true)]
    disorders: Vec<String>,
    /// Number of bootstrap iterations
    #[arg(long, default_value_t = 1000)]
    iterations: usize,
    /// Size of each bootstrap sample (defaults to each partition's row count)
    #[arg(long)]
    sample_size: Option<usize>,
    /// Confidence level of the interval, in (0, 1)
    #[arg(long, default_value_t = 0.95)]
    confidence: f64,
    /// Seed for the resampling generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Survey year to analyze
    #[arg(long, default_value_t = DEFAULT_COHORT)]
    cohort: i32,
    /// Number of chart bins
    #[arg(long, default_value_t = 20)]
    bins: usize,
    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let dataset = util::read_records_file(&arg.data)?;
    let config = BootstrapConfig {
        n_iterations: arg.iterations,
        sample_size: arg.sample_size,
        confidence_level: arg.confidence,
        random_state: arg.seed,
        cohort: arg.cohort,
    };

    // Every disorder runs against the same configuration and seed, so the
    // intervals are comparable across disorders.
    let results = arg
        .disorders
        .iter()
        .map(|disorder| {
            let analysis = analyze_disorder_prevalence(&dataset, disorder, &config, &LogReporter);
            (disorder.clone(), analysis)
        })
        .collect::<Vec<_>>();

    match arg.format {
        OutputFormat::Text => {
            let rendered = if let [(_, analysis)] = results.as_slice() {
                view::render_distribution(analysis, arg.bins, arg.confidence)
            } else {
                view::render_comparison(&results, arg.confidence)
            };
            util::save_text(&rendered, arg.output.as_ref())?;
        }
        OutputFormat::Json => {
            let report = results
                .iter()
                .map(|(disorder, analysis)| (disorder.as_str(), analysis))
                .collect::<BTreeMap<_, _>>();
            util::save_json(&report, arg.output.as_ref())?;
        }
    }
    Ok(())
}
