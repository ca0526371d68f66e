//! Bootstrap confidence intervals for prevalence estimates.
//!
//! The engine resamples the two cohort partitions (main-question rows and
//! follow-up rows) with replacement, recomputes the prevalence estimate on
//! each resample through the exact same path as the original estimate, and
//! summarizes the resulting empirical distribution as a percentile interval
//! and a standard error.
//!
//! Reproducibility: one generator is seeded once from
//! [`BootstrapConfig::random_state`] and threaded through both draws of every
//! iteration. It is never re-seeded, so a fixed seed yields a reproducible
//! but non-repeating draw sequence across the whole run.

use osmi_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};
use osmi_survey::{Dataset, FOLLOW_UP_QUESTION, MAIN_QUESTION};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use serde::Serialize;

use crate::{
    prevalence::{DEFAULT_COHORT, disorder_prevalence},
    reporter::{Reporter, WarningsOnly},
};

/// Parameters of a bootstrap analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BootstrapConfig {
    /// Number of bootstrap iterations.
    pub n_iterations: usize,
    /// Size of each with-replacement sample. `None` uses each partition's
    /// own row count.
    pub sample_size: Option<usize>,
    /// Confidence level of the percentile interval, in `(0, 1)`.
    pub confidence_level: f64,
    /// Seed for the resampling generator.
    pub random_state: u64,
    /// Survey year the analysis is restricted to.
    pub cohort: i32,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            n_iterations: 1000,
            sample_size: None,
            confidence_level: 0.95,
            random_state: 42,
            cohort: DEFAULT_COHORT,
        }
    }
}

/// The summarized outcome of a bootstrap analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootstrapAnalysis {
    /// Prevalence rate of the original (unresampled) dataset.
    pub original_rate: f64,
    /// One recomputed rate per bootstrap iteration, in draw order.
    pub bootstrap_rates: Vec<f64>,
    /// Percentile confidence interval, `lower <= upper`.
    pub confidence_interval: (f64, f64),
    /// Population standard deviation of the bootstrap rates.
    pub standard_error: f64,
}

/// Resamples the cohort and recomputes the prevalence rate per iteration.
///
/// Returns the original rate and the bootstrap rates; the latter has exactly
/// `config.n_iterations` entries. Each iteration draws one sample from the
/// main-question rows and one from the follow-up rows, concatenates them,
/// and recomputes the estimate on the combined rows through
/// [`disorder_prevalence`], so the resampled path is identical to the
/// original one.
#[must_use]
pub fn bootstrap_prevalence_rate(
    dataset: &Dataset,
    disorder_name: &str,
    config: &BootstrapConfig,
    reporter: &dyn Reporter,
) -> (f64, Vec<f64>) {
    let original_rate = disorder_prevalence(dataset, disorder_name, config.cohort, reporter);

    // The partitions are fixed for the whole run; only the draws vary.
    let cohort_rows = dataset.survey(config.cohort);
    let main_question_rows = cohort_rows.question(MAIN_QUESTION);
    let follow_up_rows = cohort_rows.question(FOLLOW_UP_QUESTION);

    let mut rng = Pcg64::seed_from_u64(config.random_state);
    let mut bootstrap_rates = Vec::with_capacity(config.n_iterations);
    for _ in 0..config.n_iterations {
        let main_sample = main_question_rows.sample_with_replacement(
            config.sample_size.unwrap_or(main_question_rows.len()),
            &mut rng,
        );
        let follow_up_sample = follow_up_rows.sample_with_replacement(
            config.sample_size.unwrap_or(follow_up_rows.len()),
            &mut rng,
        );
        let resampled = main_sample.concat(&follow_up_sample);
        bootstrap_rates.push(disorder_prevalence(
            &resampled,
            disorder_name,
            config.cohort,
            reporter,
        ));
    }

    (original_rate, bootstrap_rates)
}

/// Computes the percentile confidence interval of the bootstrap rates.
///
/// The bounds are the empirical percentiles at `(1 - confidence_level) / 2`
/// and its mirror, with linear interpolation between order statistics.
///
/// Precondition: `bootstrap_rates` is non-empty; an empty input yields NaN
/// bounds.
#[must_use]
pub fn confidence_interval(bootstrap_rates: &[f64], confidence_level: f64) -> (f64, f64) {
    let lower_percentile = (1.0 - confidence_level) / 2.0;
    let upper_percentile = 1.0 - lower_percentile;

    let percentiles = Percentiles::new(
        bootstrap_rates,
        &[lower_percentile * 100.0, upper_percentile * 100.0],
    );
    // One entry per requested point, in request order.
    let bounds = percentiles.as_slice();
    (bounds[0].1, bounds[1].1)
}

/// Runs the complete bootstrap analysis for one disorder.
///
/// The resampling loop runs quietly: per-iteration count and rate events are
/// dropped, so a thousand-iteration run does not produce a thousand count
/// reports, but data-quality findings still pass through to `reporter`. The
/// final summary is emitted through `reporter` as well.
#[must_use]
pub fn analyze_disorder_prevalence(
    dataset: &Dataset,
    disorder_name: &str,
    config: &BootstrapConfig,
    reporter: &dyn Reporter,
) -> BootstrapAnalysis {
    let (original_rate, bootstrap_rates) =
        bootstrap_prevalence_rate(dataset, disorder_name, config, &WarningsOnly::new(reporter));
    let interval = confidence_interval(&bootstrap_rates, config.confidence_level);
    let standard_error = DescriptiveStats::new(bootstrap_rates.iter().copied())
        .map_or(0.0, |stats| stats.std_dev);

    let analysis = BootstrapAnalysis {
        original_rate,
        bootstrap_rates,
        confidence_interval: interval,
        standard_error,
    };
    reporter.bootstrap_summary(&analysis);
    analysis
}
