//! Statistical utilities for the OSMI survey analyses.
//!
//! This crate provides the small statistics toolkit the prevalence analyses
//! are built on:
//!
//! - **Descriptive statistics**: min, max, mean, median, population variance
//!   and standard deviation
//! - **Percentiles**: empirical percentiles with linear interpolation between
//!   order statistics
//! - **Histograms**: fixed-width binning for rendering distributions
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Histogram construction for visualizing distributions
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use osmi_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.variance, 2.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use osmi_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
//! assert_eq!(percentiles.get(50.0), Some(2.5));
//! ```

pub mod descriptive;
pub mod histogram;
pub mod percentiles;
