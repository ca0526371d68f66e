//! Tabular survey data container for the OSMI mental-health survey analyses.
//!
//! This crate provides the in-memory representation of survey responses:
//!
//! - [`Record`]: a single question/answer row
//! - [`Dataset`]: an ordered, non-mutating collection of records with
//!   filtering, counting, concatenation, and with-replacement sampling
//!
//! Datasets are never mutated in place. Filtering and resampling return new
//! datasets, so an analysis can derive as many views as it needs from one
//! loaded dataset.
//!
//! # Examples
//!
//! ```
//! use osmi_survey::{Dataset, MAIN_QUESTION, Record};
//!
//! let dataset = Dataset::new(vec![
//!     Record::new(2016, MAIN_QUESTION, "Yes"),
//!     Record::new(2016, MAIN_QUESTION, "No"),
//!     Record::new(2017, MAIN_QUESTION, "Yes"),
//! ]);
//!
//! let cohort = dataset.survey(2016);
//! assert_eq!(cohort.len(), 2);
//! assert_eq!(cohort.count(|r| r.answer_text == "Yes"), 1);
//! ```

mod dataset;
mod record;

pub use self::{
    dataset::Dataset,
    record::{FOLLOW_UP_QUESTION, MAIN_QUESTION, NULL_ANSWER, Record},
};
