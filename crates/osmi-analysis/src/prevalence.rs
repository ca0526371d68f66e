//! Point prevalence estimation for a named mental-health condition.
//!
//! The estimate combines two ratios derived from a survey cohort: the share
//! of respondents reporting any disorder (diagnosis rate) and the share of
//! condition reports naming the condition of interest (condition rate). The
//! prevalence rate is their product.

use osmi_survey::{Dataset, FOLLOW_UP_QUESTION, MAIN_QUESTION};
use serde::Serialize;

use crate::reporter::Reporter;

/// Survey year the original analyses were run against. Cohort selection is a
/// parameter everywhere; this is only the default.
pub const DEFAULT_COHORT: i32 = 2016;

/// The four counts a prevalence estimate is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrevalenceCounts {
    /// Respondents who answered the main disorder question.
    pub population: usize,
    /// Respondents who answered the main disorder question with "Yes".
    pub diagnosed_cases: usize,
    /// All condition reports from the follow-up question. A respondent may
    /// report several conditions, so this can exceed the population.
    pub total_condition_reports: usize,
    /// Condition reports naming the condition under analysis.
    pub specific_condition_count: usize,
}

impl PrevalenceCounts {
    /// Derives the four counts for `disorder_name` from the `cohort` survey
    /// year of `dataset`.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset, disorder_name: &str, cohort: i32) -> Self {
        let cohort_rows = dataset.survey(cohort);
        let main_question_rows = cohort_rows.question(MAIN_QUESTION);
        let follow_up_rows = cohort_rows.question(FOLLOW_UP_QUESTION);

        Self {
            population: main_question_rows.len(),
            diagnosed_cases: main_question_rows.count(|r| r.answer_text == "Yes"),
            total_condition_reports: follow_up_rows.len(),
            specific_condition_count: follow_up_rows.count(|r| r.answer_text == disorder_name),
        }
    }
}

/// An immutable prevalence estimate: the four input counts plus the derived
/// rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrevalenceEstimate {
    /// Respondents who answered the main disorder question.
    pub population: usize,
    /// Respondents who answered the main disorder question with "Yes".
    pub diagnosed_cases: usize,
    /// All condition reports from the follow-up question.
    pub total_condition_reports: usize,
    /// Condition reports naming the condition under analysis.
    pub specific_condition_count: usize,
    /// The derived prevalence rate, in `[0, 1]`.
    pub rate: f64,
}

impl PrevalenceEstimate {
    /// Computes the full estimate for `disorder_name` from the `cohort`
    /// survey year of `dataset`.
    #[must_use]
    pub fn compute(
        dataset: &Dataset,
        disorder_name: &str,
        cohort: i32,
        reporter: &dyn Reporter,
    ) -> Self {
        let counts = PrevalenceCounts::from_dataset(dataset, disorder_name, cohort);
        reporter.counts(&counts);
        Self::from_counts(counts, reporter)
    }

    /// Builds an estimate from already-derived counts.
    #[must_use]
    pub fn from_counts(counts: PrevalenceCounts, reporter: &dyn Reporter) -> Self {
        let PrevalenceCounts {
            population,
            diagnosed_cases,
            total_condition_reports,
            specific_condition_count,
        } = counts;
        let rate = prevalence_rate(
            population,
            diagnosed_cases,
            total_condition_reports,
            specific_condition_count,
            reporter,
        );
        Self {
            population,
            diagnosed_cases,
            total_condition_reports,
            specific_condition_count,
            rate,
        }
    }
}

/// Calculates the prevalence rate from the four counts.
///
/// `diagnosis_rate = diagnosed_cases / population` and `condition_rate =
/// specific_condition_count / total_condition_reports`; the result is their
/// product. A zero population short-circuits to `0.0`, and zero condition
/// reports make the condition rate `0.0`, so no input combination divides by
/// zero or panics.
///
/// Diagnosed cases exceeding the population is reported as a data-quality
/// warning and the computation proceeds on the counts as given, without
/// clamping.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn prevalence_rate(
    population: usize,
    diagnosed_cases: usize,
    total_condition_reports: usize,
    specific_condition_count: usize,
    reporter: &dyn Reporter,
) -> f64 {
    if population == 0 {
        reporter.data_quality("population is zero; prevalence rate defaults to 0");
        return 0.0;
    }
    if diagnosed_cases > population {
        reporter.data_quality("diagnosed cases exceed the total population; check data");
    }

    let diagnosis_rate = diagnosed_cases as f64 / population as f64;
    let condition_rate = if total_condition_reports > 0 {
        specific_condition_count as f64 / total_condition_reports as f64
    } else {
        0.0
    };

    let rate = diagnosis_rate * condition_rate;
    reporter.rates(diagnosis_rate, condition_rate, rate);
    rate
}

/// Calculates the prevalence rate for `disorder_name` from the `cohort`
/// survey year of `dataset`.
///
/// Pure with respect to `dataset`: filtering and counting never mutate it.
#[must_use]
pub fn disorder_prevalence(
    dataset: &Dataset,
    disorder_name: &str,
    cohort: i32,
    reporter: &dyn Reporter,
) -> f64 {
    PrevalenceEstimate::compute(dataset, disorder_name, cohort, reporter).rate
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use osmi_survey::Record;

    use super::*;
    use crate::reporter::Silent;

    /// Collects data-quality messages for assertions.
    #[derive(Default)]
    struct Recording {
        warnings: RefCell<Vec<String>>,
    }

    impl Reporter for Recording {
        fn data_quality(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_owned());
        }
    }

    #[test]
    fn test_worked_scenario() {
        let rate = prevalence_rate(100, 40, 50, 10, &Silent);
        assert!((rate - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_zero_population_returns_zero() {
        assert_eq!(prevalence_rate(0, 5, 10, 3, &Silent), 0.0);
    }

    #[test]
    fn test_zero_condition_reports_returns_zero() {
        assert_eq!(prevalence_rate(100, 40, 0, 3, &Silent), 0.0);
    }

    #[test]
    fn test_diagnosed_exceeding_population_warns_but_computes() {
        let reporter = Recording::default();
        let rate = prevalence_rate(10, 20, 10, 5, &reporter);
        assert!((rate - 1.0).abs() < 1e-12);
        assert_eq!(reporter.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_monotone_in_diagnosed_cases_and_condition_count() {
        let mut previous = 0.0;
        for diagnosed in 0..=100 {
            let rate = prevalence_rate(100, diagnosed, 50, 10, &Silent);
            assert!(rate >= previous);
            previous = rate;
        }
        let mut previous = 0.0;
        for count in 0..=50 {
            let rate = prevalence_rate(100, 40, 50, count, &Silent);
            assert!(rate >= previous);
            previous = rate;
        }
    }

    fn cohort_dataset() -> Dataset {
        let mut records = Vec::new();
        for _ in 0..6 {
            records.push(Record::new(2016, MAIN_QUESTION, "Yes"));
        }
        for _ in 0..4 {
            records.push(Record::new(2016, MAIN_QUESTION, "No"));
        }
        for _ in 0..3 {
            records.push(Record::new(2016, FOLLOW_UP_QUESTION, "Anxiety Disorder"));
        }
        for _ in 0..2 {
            records.push(Record::new(2016, FOLLOW_UP_QUESTION, "Mood Disorder"));
        }
        // A different survey year that the cohort filter must exclude.
        records.push(Record::new(2014, MAIN_QUESTION, "Yes"));
        records.push(Record::new(2014, FOLLOW_UP_QUESTION, "Anxiety Disorder"));
        Dataset::new(records)
    }

    #[test]
    fn test_counts_derived_from_cohort_only() {
        let counts = PrevalenceCounts::from_dataset(&cohort_dataset(), "Anxiety Disorder", 2016);
        assert_eq!(
            counts,
            PrevalenceCounts {
                population: 10,
                diagnosed_cases: 6,
                total_condition_reports: 5,
                specific_condition_count: 3,
            }
        );
    }

    #[test]
    fn test_disorder_prevalence_combines_rates() {
        let rate = disorder_prevalence(&cohort_dataset(), "Anxiety Disorder", 2016, &Silent);
        // 6/10 diagnosed * 3/5 anxiety reports
        assert!((rate - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_disorder_yields_zero_rate() {
        let rate = disorder_prevalence(&cohort_dataset(), "No Such Condition", 2016, &Silent);
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_empty_cohort_yields_zero_rate() {
        let rate = disorder_prevalence(&cohort_dataset(), "Anxiety Disorder", 1999, &Silent);
        assert_eq!(rate, 0.0);
    }
}
