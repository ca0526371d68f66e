//! Data-quality auditing for loaded survey datasets.
//!
//! The survey export encodes missing answers as the literal `"-1"`, so a
//! conventional null check says nothing. These audits count the sentinel
//! answers and exact duplicate rows, and break the null share down per
//! question so the worst-covered questions surface first.

use std::collections::{BTreeMap, HashSet};

use osmi_survey::Dataset;
use serde::Serialize;

/// Dataset-level audit result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityAudit {
    /// Total number of rows audited.
    pub total_rows: usize,
    /// Rows whose answer is the null sentinel.
    pub null_answer_rows: usize,
    /// Rows that are exact duplicates of an earlier row.
    pub duplicate_rows: usize,
}

impl QualityAudit {
    /// Returns `true` if any answer is the null sentinel.
    #[must_use]
    pub fn has_null_answers(&self) -> bool {
        self.null_answer_rows > 0
    }

    /// Returns `true` if any row duplicates an earlier one.
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        self.duplicate_rows > 0
    }
}

/// Audits a dataset for null answers and duplicate rows.
#[must_use]
pub fn audit(dataset: &Dataset) -> QualityAudit {
    let mut seen = HashSet::new();
    let duplicate_rows = dataset.iter().filter(|record| !seen.insert(*record)).count();

    QualityAudit {
        total_rows: dataset.len(),
        null_answer_rows: dataset.count(osmi_survey::Record::is_null_answer),
        duplicate_rows,
    }
}

/// Null-answer statistics for one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionNullStats {
    /// The question text.
    pub question: String,
    /// Rows answering this question with the null sentinel.
    pub null_count: usize,
    /// Rows answering this question with anything else.
    pub other_count: usize,
    /// Total rows answering this question.
    pub total_count: usize,
    /// Share of null answers, in `[0, 1]`; `0.0` for a question with no rows.
    pub null_proportion: f64,
}

/// Breaks the null-answer share down per question.
///
/// Returns one entry per distinct question, sorted by null proportion
/// descending so the worst-covered questions come first. Ties keep the
/// questions' lexicographic order.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn null_analysis(dataset: &Dataset) -> Vec<QuestionNullStats> {
    let mut per_question: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in dataset.iter() {
        let (null_count, other_count) = per_question
            .entry(record.question_text.as_str())
            .or_default();
        if record.is_null_answer() {
            *null_count += 1;
        } else {
            *other_count += 1;
        }
    }

    let mut stats = per_question
        .into_iter()
        .map(|(question, (null_count, other_count))| {
            let total_count = null_count + other_count;
            let null_proportion = if total_count > 0 {
                null_count as f64 / total_count as f64
            } else {
                0.0
            };
            QuestionNullStats {
                question: question.to_owned(),
                null_count,
                other_count,
                total_count,
                null_proportion,
            }
        })
        .collect::<Vec<_>>();
    stats.sort_by(|a, b| f64::total_cmp(&b.null_proportion, &a.null_proportion));
    stats
}

#[cfg(test)]
mod tests {
    use osmi_survey::{NULL_ANSWER, Record};

    use super::*;

    fn noisy_dataset() -> Dataset {
        Dataset::new(vec![
            Record::new(2016, "Q1", "Yes"),
            Record::new(2016, "Q1", "Yes"),
            Record::new(2016, "Q1", NULL_ANSWER),
            Record::new(2016, "Q2", NULL_ANSWER),
            Record::new(2016, "Q2", NULL_ANSWER),
            Record::new(2016, "Q3", "No"),
        ])
    }

    #[test]
    fn test_audit_counts_nulls_and_duplicates() {
        let audit = audit(&noisy_dataset());
        assert_eq!(audit.total_rows, 6);
        assert_eq!(audit.null_answer_rows, 3);
        // "Q1"/"Yes" appears twice; the second occurrence is the duplicate.
        assert_eq!(audit.duplicate_rows, 1);
        assert!(audit.has_null_answers());
        assert!(audit.has_duplicates());
    }

    #[test]
    fn test_clean_dataset_audit() {
        let dataset = Dataset::new(vec![
            Record::new(2016, "Q1", "Yes"),
            Record::new(2016, "Q1", "No"),
        ]);
        let audit = audit(&dataset);
        assert!(!audit.has_null_answers());
        assert!(!audit.has_duplicates());
    }

    #[test]
    fn test_null_analysis_sorted_by_proportion() {
        let stats = null_analysis(&noisy_dataset());
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].question, "Q2");
        assert_eq!(stats[0].null_proportion, 1.0);
        assert_eq!(stats[1].question, "Q1");
        assert!((stats[1].null_proportion - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(stats[2].question, "Q3");
        assert_eq!(stats[2].null_proportion, 0.0);
    }

    #[test]
    fn test_null_analysis_counts() {
        let stats = null_analysis(&noisy_dataset());
        let q1 = stats.iter().find(|s| s.question == "Q1").unwrap();
        assert_eq!(q1.null_count, 1);
        assert_eq!(q1.other_count, 2);
        assert_eq!(q1.total_count, 3);
    }
}
