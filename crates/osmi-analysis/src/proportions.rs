//! Grouped answer-proportion tables.
//!
//! For one or more questions, counts how often each answer was given per
//! survey year and divides by the year's total across the selected
//! questions. This backs the "responses over the years" charts.

use std::collections::BTreeMap;

use osmi_survey::Dataset;
use serde::Serialize;

/// One answer's share within a survey year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerShare {
    /// The survey year the share belongs to.
    pub survey_id: i32,
    /// The answer text.
    pub answer: String,
    /// How often the answer was given in that year.
    pub count: usize,
    /// The answer's share of the year's responses, in `(0, 1]`.
    pub proportion: f64,
}

/// Computes per-year answer proportions for the given questions.
///
/// Rows answering other questions are ignored. The result is ordered by
/// survey year, then answer text. Within one year the proportions sum to 1
/// (up to rounding), since each selected row contributes to exactly one
/// answer's count.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn by_survey_year(dataset: &Dataset, questions: &[&str]) -> Vec<AnswerShare> {
    let mut counts: BTreeMap<(i32, &str), usize> = BTreeMap::new();
    let mut totals: BTreeMap<i32, usize> = BTreeMap::new();
    for record in dataset
        .iter()
        .filter(|record| questions.contains(&record.question_text.as_str()))
    {
        *counts
            .entry((record.survey_id, record.answer_text.as_str()))
            .or_default() += 1;
        *totals.entry(record.survey_id).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((survey_id, answer), count)| AnswerShare {
            survey_id,
            answer: answer.to_owned(),
            count,
            proportion: count as f64 / totals[&survey_id] as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use osmi_survey::{MAIN_QUESTION, Record};

    use super::*;

    fn multi_year_dataset() -> Dataset {
        Dataset::new(vec![
            Record::new(2014, MAIN_QUESTION, "Yes"),
            Record::new(2014, MAIN_QUESTION, "Yes"),
            Record::new(2014, MAIN_QUESTION, "No"),
            Record::new(2016, MAIN_QUESTION, "Yes"),
            Record::new(2016, MAIN_QUESTION, "No"),
            Record::new(2016, "Unrelated question", "Ignored"),
        ])
    }

    #[test]
    fn test_shares_per_year() {
        let shares = by_survey_year(&multi_year_dataset(), &[MAIN_QUESTION]);
        assert_eq!(shares.len(), 4);

        let yes_2014 = shares
            .iter()
            .find(|s| s.survey_id == 2014 && s.answer == "Yes")
            .unwrap();
        assert_eq!(yes_2014.count, 2);
        assert!((yes_2014.proportion - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_proportions_sum_to_one_per_year() {
        let shares = by_survey_year(&multi_year_dataset(), &[MAIN_QUESTION]);
        for year in [2014, 2016] {
            let sum: f64 = shares
                .iter()
                .filter(|s| s.survey_id == year)
                .map(|s| s.proportion)
                .sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unselected_questions_are_ignored() {
        let shares = by_survey_year(&multi_year_dataset(), &[MAIN_QUESTION]);
        assert!(shares.iter().all(|s| s.answer != "Ignored"));
    }

    #[test]
    fn test_no_matching_rows_yields_empty_table() {
        let shares = by_survey_year(&multi_year_dataset(), &["No such question"]);
        assert!(shares.is_empty());
    }
}
