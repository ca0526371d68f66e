//! Prevalence estimation and bootstrap confidence intervals for OSMI
//! mental-health survey data.
//!
//! The crate has two layered components:
//!
//! - **Prevalence estimation** ([`prevalence`]): derives four counts from a
//!   survey cohort (population, diagnosed cases, condition reports, reports of
//!   one specific condition) and combines them into a point prevalence rate.
//! - **Bootstrap confidence intervals** ([`bootstrap`]): resamples the cohort
//!   with replacement, recomputes the prevalence estimate per resample, and
//!   summarizes the empirical distribution as a percentile interval and a
//!   standard error.
//!
//! Supporting modules:
//!
//! - [`quality`]: null-answer and duplicate-row auditing
//! - [`proportions`]: per-survey-year answer proportion tables
//! - [`reporter`]: the observer seam analyses report progress through
//!
//! All numeric edge cases (zero population, zero condition reports) resolve
//! to `0.0` through explicit guards; nothing in this crate panics or returns
//! errors for degenerate survey data. Data-quality anomalies are surfaced as
//! warnings through the [`reporter::Reporter`] passed into each analysis, and
//! computation continues on the data as given.
//!
//! # Examples
//!
//! ```
//! use osmi_analysis::{
//!     bootstrap::{BootstrapConfig, analyze_disorder_prevalence},
//!     reporter::Silent,
//! };
//! use osmi_survey::{Dataset, FOLLOW_UP_QUESTION, MAIN_QUESTION, Record};
//!
//! let dataset = Dataset::new(vec![
//!     Record::new(2016, MAIN_QUESTION, "Yes"),
//!     Record::new(2016, MAIN_QUESTION, "No"),
//!     Record::new(2016, FOLLOW_UP_QUESTION, "Anxiety Disorder"),
//!     Record::new(2016, FOLLOW_UP_QUESTION, "Mood Disorder"),
//! ]);
//!
//! let config = BootstrapConfig {
//!     n_iterations: 100,
//!     ..BootstrapConfig::default()
//! };
//! let analysis = analyze_disorder_prevalence(&dataset, "Anxiety Disorder", &config, &Silent);
//!
//! assert_eq!(analysis.bootstrap_rates.len(), 100);
//! assert!(analysis.confidence_interval.0 <= analysis.confidence_interval.1);
//! ```

pub mod bootstrap;
pub mod prevalence;
pub mod proportions;
pub mod quality;
pub mod reporter;

pub use self::{
    bootstrap::{BootstrapAnalysis, BootstrapConfig, analyze_disorder_prevalence},
    prevalence::{DEFAULT_COHORT, PrevalenceCounts, PrevalenceEstimate},
    reporter::{Reporter, Silent, WarningsOnly},
};
