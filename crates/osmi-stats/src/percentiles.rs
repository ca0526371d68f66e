/// Precomputed percentile values for a dataset.
///
/// Stores percentile-value pairs for lookup of commonly used percentile
/// points, such as the bounds of a confidence interval.
///
/// # Examples
///
/// ```
/// use osmi_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(3.0));
/// assert_eq!(percentiles.get(25.0), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// Percentile-value pairs, in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// The values are sorted internally before computing percentiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use osmi_stats::percentiles::Percentiles;
    ///
    /// let values = vec![5.0, 2.0, 8.0, 1.0, 9.0];
    /// let percentiles = Percentiles::new(&values, &[50.0]);
    ///
    /// assert_eq!(percentiles.get(50.0), Some(5.0));
    /// ```
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Returns all percentile-value pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between order statistics: for n values the
/// percentile p maps to rank `p / 100 * (n - 1)`, and fractional ranks
/// interpolate between the two neighboring values. The 0th percentile is the
/// minimum and the 100th is the maximum.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use osmi_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(compute_percentile(&values, 50.0), 2.5);
/// assert_eq!(compute_percentile(&values, 25.0), 1.75);
/// assert_eq!(compute_percentile(&values, 100.0), 4.0);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let percentile = percentile.clamp(0.0, 100.0);
    let rank = percentile / 100.0 * (sorted_values.len() - 1) as f64;
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;
    let lower = sorted_values[lower_index];
    let upper = sorted_values[upper_index];
    lower + (upper - lower) * (rank - rank.floor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_nan() {
        assert!(compute_percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_single_value_for_all_percentiles() {
        for p in [0.0, 10.0, 50.0, 90.0, 100.0] {
            assert_eq!(compute_percentile(&[0.3], p), 0.3);
        }
    }

    #[test]
    fn test_interpolation_between_order_statistics() {
        let values = [0.1, 0.2, 0.3, 0.4, 0.5];
        assert!((compute_percentile(&values, 10.0) - 0.14).abs() < 1e-12);
        assert!((compute_percentile(&values, 90.0) - 0.46).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_percentiles_hit_min_and_max() {
        let values = [0.1, 0.2, 0.3, 0.4, 0.5];
        assert_eq!(compute_percentile(&values, 0.0), 0.1);
        assert_eq!(compute_percentile(&values, 100.0), 0.5);
    }

    #[test]
    fn test_precomputed_lookup() {
        let percentiles = Percentiles::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.5, 97.5]);
        assert!((percentiles.get(2.5).unwrap() - 1.1).abs() < 1e-12);
        assert!((percentiles.get(97.5).unwrap() - 4.9).abs() < 1e-12);
        assert_eq!(percentiles.get(50.0), None);
    }
}
