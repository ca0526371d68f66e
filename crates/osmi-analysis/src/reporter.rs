//! Observer seam for analysis progress and data-quality findings.
//!
//! Analyses report through a [`Reporter`] passed in by the caller instead of
//! a process-wide logger, so concurrent analyses cannot race on shared
//! logging state and a caller can silence the per-iteration chatter of a
//! bootstrap run without touching global log levels.

use crate::{bootstrap::BootstrapAnalysis, prevalence::PrevalenceCounts};

/// Receives progress events and data-quality findings from an analysis.
///
/// Every method has a no-op default, so an implementation only overrides the
/// events it cares about.
pub trait Reporter {
    /// The four counts derived from the cohort, before the rate is computed.
    fn counts(&self, _counts: &PrevalenceCounts) {}

    /// The component rates and final rate of one prevalence estimate.
    fn rates(&self, _diagnosis_rate: f64, _condition_rate: f64, _prevalence_rate: f64) {}

    /// A non-fatal data-quality finding. The analysis continues with the
    /// data as given.
    fn data_quality(&self, _message: &str) {}

    /// The final summary of a bootstrap analysis.
    fn bootstrap_summary(&self, _analysis: &BootstrapAnalysis) {}
}

/// A reporter that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Reporter for Silent {}

/// Forwards data-quality findings to an inner reporter and discards every
/// other event.
///
/// Used as the quiet window around a bootstrap's resampling loop: a
/// thousand-iteration run should not produce a thousand count reports, but
/// anomalies found along the way must still reach the caller.
#[derive(Clone, Copy)]
pub struct WarningsOnly<'a> {
    inner: &'a dyn Reporter,
}

impl<'a> WarningsOnly<'a> {
    #[must_use]
    pub fn new(inner: &'a dyn Reporter) -> Self {
        Self { inner }
    }
}

impl Reporter for WarningsOnly<'_> {
    fn data_quality(&self, message: &str) {
        self.inner.data_quality(message);
    }
}
