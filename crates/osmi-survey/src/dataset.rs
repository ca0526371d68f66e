use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Record;

/// An ordered collection of survey records.
///
/// All derivation methods (`filter`, `survey`, `question`, `concat`,
/// `sample_with_replacement`) return new datasets and leave the source
/// untouched. Serializes transparently as a plain array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from a vector of records, keeping their order.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of rows in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Returns the rows as a slice.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns a new dataset containing the rows matching `predicate`,
    /// in their original order.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Record) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self { records }
    }

    /// Counts the rows matching `predicate` without building a new dataset.
    #[must_use]
    pub fn count<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Record) -> bool,
    {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .count()
    }

    /// Returns the rows belonging to one survey year.
    #[must_use]
    pub fn survey(&self, survey_id: i32) -> Self {
        self.filter(|record| record.survey_id == survey_id)
    }

    /// Returns the rows answering one question.
    #[must_use]
    pub fn question(&self, question_text: &str) -> Self {
        self.filter(|record| record.question_text == question_text)
    }

    /// Returns a new dataset with `other`'s rows appended after this one's.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut records = Vec::with_capacity(self.len() + other.len());
        records.extend_from_slice(&self.records);
        records.extend_from_slice(&other.records);
        Self { records }
    }

    /// Draws `sample_size` rows uniformly with replacement.
    ///
    /// Consumes exactly `sample_size` draws from `rng`, so a caller threading
    /// one seeded generator through repeated calls gets a reproducible
    /// sequence. An empty dataset yields an empty sample without touching the
    /// generator.
    #[must_use]
    pub fn sample_with_replacement<R>(&self, sample_size: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        if self.records.is_empty() {
            return Self::default();
        }
        let records = (0..sample_size)
            .map(|_| self.records[rng.random_range(0..self.records.len())].clone())
            .collect();
        Self { records }
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
