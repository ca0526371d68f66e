use osmi_analysis::{BootstrapAnalysis, PrevalenceCounts, Reporter};

/// Routes analysis events to the `log` facade.
///
/// The analysis crate itself stays logger-free; this adapter is the only
/// place the binary's logging backend and the analyses meet.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LogReporter;

impl Reporter for LogReporter {
    fn counts(&self, counts: &PrevalenceCounts) {
        log::info!("population: {}", counts.population);
        log::info!("diagnosed cases: {}", counts.diagnosed_cases);
        log::info!("condition reports: {}", counts.total_condition_reports);
        log::info!(
            "specific condition reports: {}",
            counts.specific_condition_count
        );
    }

    fn rates(&self, diagnosis_rate: f64, condition_rate: f64, prevalence_rate: f64) {
        log::info!("diagnosis rate: {diagnosis_rate:.5}");
        log::info!("condition rate: {condition_rate:.5}");
        log::info!("prevalence rate: {prevalence_rate:.5}");
    }

    fn data_quality(&self, message: &str) {
        log::warn!("{message}");
    }

    fn bootstrap_summary(&self, analysis: &BootstrapAnalysis) {
        let (lower, upper) = analysis.confidence_interval;
        log::info!("original prevalence rate: {:.4}", analysis.original_rate);
        log::info!("confidence interval: ({lower:.4}, {upper:.4})");
        log::info!("standard error: {:.4}", analysis.standard_error);
    }
}
