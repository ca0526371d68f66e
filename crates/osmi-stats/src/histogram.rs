use std::ops::Range;

/// A histogram representation of a dataset's distribution.
///
/// The histogram divides the data range into equal-width bins and counts the
/// values falling into each. The final bin is inclusive of the maximum, so
/// every value lands in exactly one bin.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending range order.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive
    /// end, except for the final bin which includes its end).
    pub range: Range<f64>,
    /// The number of values falling within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram from unsorted values.
    ///
    /// The values are sorted internally. Bounds default to the data minimum
    /// and maximum; `explicit_min` / `explicit_max` override them, in which
    /// case out-of-range values are counted in the first or last bin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use osmi_stats::histogram::Histogram;
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
    /// let histogram = Histogram::new(values, 3, None, None);
    /// assert_eq!(histogram.bins.len(), 3);
    /// assert_eq!(histogram.bins.iter().map(|b| b.count).sum::<u64>(), 10);
    /// ```
    #[must_use]
    pub fn new<I>(
        values: I,
        num_bins: usize,
        explicit_min: Option<f64>,
        explicit_max: Option<f64>,
    ) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, num_bins, explicit_min, explicit_max)
    }

    /// Creates a histogram from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn from_sorted(
        sorted_values: &[f64],
        num_bins: usize,
        explicit_min: Option<f64>,
        explicit_max: Option<f64>,
    ) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (Some(&data_min), Some(&data_max)) = (sorted_values.first(), sorted_values.last())
        else {
            return Self { bins: Vec::new() };
        };
        let min = explicit_min.unwrap_or(data_min);
        let max = explicit_max.unwrap_or(data_max);

        // Degenerate range: every value falls into one bin.
        if num_bins == 0 || max <= min {
            return Self {
                bins: vec![HistogramBin {
                    range: min..max,
                    count: sorted_values.len() as u64,
                }],
            };
        }

        let bin_width = (max - min) / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|i| {
                let start = min + bin_width * i as f64;
                let end = if i + 1 == num_bins {
                    max
                } else {
                    min + bin_width * (i + 1) as f64
                };
                HistogramBin {
                    range: start..end,
                    count: 0,
                }
            })
            .collect::<Vec<_>>();

        for &value in sorted_values {
            let offset = (value - min) / bin_width;
            let index = if offset < 0.0 {
                0
            } else {
                (offset as usize).min(num_bins - 1)
            };
            bins[index].count += 1;
        }

        Self { bins }
    }

    /// Returns the index of the bin covering `value`, clamped to the first or
    /// last bin for out-of-range values. `None` if the histogram is empty.
    #[must_use]
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if self.bins.is_empty() {
            return None;
        }
        let last = self.bins.len() - 1;
        Some(
            self.bins
                .iter()
                .position(|bin| value < bin.range.end)
                .unwrap_or(last),
        )
    }

    /// Returns the largest bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
