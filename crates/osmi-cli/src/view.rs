//! Text rendering of analysis results: distribution charts and tables.

use osmi_analysis::{
    BootstrapAnalysis,
    proportions::AnswerShare,
    quality::{QualityAudit, QuestionNullStats},
};
use osmi_stats::{descriptive::DescriptiveStats, histogram::Histogram};

const BAR_WIDTH: usize = 40;
const QUESTION_COLUMN_WIDTH: usize = 60;

/// Renders the bootstrap distribution as a histogram chart with markers for
/// the point estimate and both interval bounds, preceded by a summary block.
pub(crate) fn render_distribution(
    analysis: &BootstrapAnalysis,
    num_bins: usize,
    confidence_level: f64,
) -> String {
    let (lower, upper) = analysis.confidence_interval;
    let mut lines = vec![
        format!("Original prevalence rate: {:.4}", analysis.original_rate),
        format!(
            "{:.0}% confidence interval: ({lower:.4}, {upper:.4})",
            confidence_level * 100.0
        ),
        format!("Standard error: {:.4}", analysis.standard_error),
    ];
    if let Some(stats) = DescriptiveStats::new(analysis.bootstrap_rates.iter().copied()) {
        lines.push(format!(
            "Bootstrap rates: mean {:.4}, min {:.4}, max {:.4}",
            stats.mean, stats.min, stats.max
        ));
    }
    lines.push(String::new());

    let histogram = Histogram::new(
        analysis.bootstrap_rates.iter().copied(),
        num_bins,
        None,
        None,
    );
    let max_count = histogram.max_count().max(1);
    let estimate_bin = histogram.bin_index(analysis.original_rate);
    let lower_bin = histogram.bin_index(lower);
    let upper_bin = histogram.bin_index(upper);

    for (index, bin) in histogram.bins.iter().enumerate() {
        #[expect(clippy::cast_possible_truncation)]
        let bar_len = (bin.count * BAR_WIDTH as u64 / max_count) as usize;
        let mut markers = Vec::new();
        if Some(index) == estimate_bin {
            markers.push("point estimate");
        }
        if Some(index) == lower_bin {
            markers.push("lower bound");
        }
        if Some(index) == upper_bin {
            markers.push("upper bound");
        }
        let marker = if markers.is_empty() {
            String::new()
        } else {
            format!("  < {}", markers.join(", "))
        };
        lines.push(format!(
            "[{:.4}, {:.4}) {:<width$} {:>5}{marker}",
            bin.range.start,
            bin.range.end,
            "#".repeat(bar_len),
            bin.count,
            width = BAR_WIDTH,
        ));
    }

    lines.join("\n") + "\n"
}

/// Renders several disorders' bootstrap results side by side: one summary
/// line per disorder and an interval bar on a shared axis, with the interval
/// span and the point estimate marked.
pub(crate) fn render_comparison(
    results: &[(String, BootstrapAnalysis)],
    confidence_level: f64,
) -> String {
    let axis_max = results
        .iter()
        .map(|(_, analysis)| analysis.confidence_interval.1.max(analysis.original_rate))
        .fold(f64::EPSILON, f64::max);
    let mut lines = vec![
        format!("{:.0}% confidence intervals", confidence_level * 100.0),
        format!("axis: 0.0000 to {axis_max:.4}, = interval span, # point estimate"),
        String::new(),
    ];
    for (disorder, analysis) in results {
        let (lower, upper) = analysis.confidence_interval;
        lines.push(format!(
            "{}  rate {:.4}  interval ({lower:.4}, {upper:.4})  se {:.4}",
            truncate(disorder),
            analysis.original_rate,
            analysis.standard_error,
        ));
        lines.push(format!("  |{}|", interval_bar(analysis, axis_max)));
    }
    lines.join("\n") + "\n"
}

fn interval_bar(analysis: &BootstrapAnalysis, axis_max: f64) -> String {
    let (lower, upper) = analysis.confidence_interval;
    let mut cells = vec!['-'; BAR_WIDTH];
    for cell in &mut cells[axis_position(lower, axis_max)..=axis_position(upper, axis_max)] {
        *cell = '=';
    }
    cells[axis_position(analysis.original_rate, axis_max)] = '#';
    cells.into_iter().collect()
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn axis_position(value: f64, axis_max: f64) -> usize {
    let scaled = (value / axis_max * (BAR_WIDTH - 1) as f64).round();
    (scaled.max(0.0) as usize).min(BAR_WIDTH - 1)
}

/// Renders the dataset audit and per-question null table.
pub(crate) fn render_audit(audit: &QualityAudit, questions: &[QuestionNullStats]) -> String {
    let mut lines = vec![
        format!("Total rows: {}", audit.total_rows),
        format!("Null answers: {}", audit.null_answer_rows),
        format!("Duplicate rows: {}", audit.duplicate_rows),
        String::new(),
        format!(
            "{:>7} {:>7} {:>7} {:>10}  {}",
            "null", "other", "total", "null prop", "question"
        ),
    ];
    for stats in questions {
        lines.push(format!(
            "{:>7} {:>7} {:>7} {:>10.4}  {}",
            stats.null_count,
            stats.other_count,
            stats.total_count,
            stats.null_proportion,
            truncate(&stats.question),
        ));
    }
    lines.join("\n") + "\n"
}

/// Renders the per-year answer proportion table.
pub(crate) fn render_shares(shares: &[AnswerShare]) -> String {
    let mut lines = vec![format!(
        "{:>6} {:>7} {:>10}  {}",
        "year", "count", "prop", "answer"
    )];
    for share in shares {
        lines.push(format!(
            "{:>6} {:>7} {:>10.4}  {}",
            share.survey_id,
            share.count,
            share.proportion,
            truncate(&share.answer),
        ));
    }
    lines.join("\n") + "\n"
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= QUESTION_COLUMN_WIDTH {
        text.to_owned()
    } else {
        let kept = text
            .chars()
            .take(QUESTION_COLUMN_WIDTH - 3)
            .collect::<String>();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_analysis() -> BootstrapAnalysis {
        BootstrapAnalysis {
            original_rate: 0.08,
            bootstrap_rates: vec![0.05, 0.06, 0.07, 0.08, 0.08, 0.09, 0.10, 0.11],
            confidence_interval: (0.055, 0.105),
            standard_error: 0.02,
        }
    }

    #[test]
    fn test_distribution_chart_has_summary_and_markers() {
        let rendered = render_distribution(&sample_analysis(), 4, 0.95);
        assert!(rendered.contains("Original prevalence rate: 0.0800"));
        assert!(rendered.contains("95% confidence interval: (0.0550, 0.1050)"));
        assert!(rendered.contains("point estimate"));
        assert!(rendered.contains("lower bound"));
        assert!(rendered.contains("upper bound"));
    }

    #[test]
    fn test_distribution_chart_has_one_line_per_bin() {
        let rendered = render_distribution(&sample_analysis(), 4, 0.95);
        let bin_lines = rendered
            .lines()
            .filter(|line| line.starts_with('['))
            .count();
        assert_eq!(bin_lines, 4);
    }

    fn narrow_analysis() -> BootstrapAnalysis {
        BootstrapAnalysis {
            original_rate: 0.04,
            bootstrap_rates: vec![0.03, 0.04, 0.04, 0.05],
            confidence_interval: (0.03, 0.05),
            standard_error: 0.01,
        }
    }

    #[test]
    fn test_comparison_lists_each_disorder() {
        let results = vec![
            ("Anxiety Disorder".to_owned(), sample_analysis()),
            ("Mood Disorder".to_owned(), narrow_analysis()),
        ];
        let rendered = render_comparison(&results, 0.95);
        assert!(rendered.contains("95% confidence intervals"));
        assert!(rendered.contains("Anxiety Disorder"));
        assert!(rendered.contains("Mood Disorder"));
        let bars = rendered
            .lines()
            .filter(|line| line.starts_with("  |"))
            .count();
        assert_eq!(bars, 2);
    }

    #[test]
    fn test_comparison_bar_marks_estimate_inside_interval() {
        let results = vec![("Anxiety Disorder".to_owned(), sample_analysis())];
        let rendered = render_comparison(&results, 0.95);
        let bar = rendered
            .lines()
            .find(|line| line.starts_with("  |"))
            .unwrap();
        let estimate = bar.find('#').unwrap();
        let span_start = bar.find('=').unwrap();
        let span_end = bar.rfind('=').unwrap();
        assert!(span_start < estimate);
        assert!(estimate < span_end);
    }

    #[test]
    fn test_comparison_bars_share_one_axis() {
        let results = vec![
            ("Anxiety Disorder".to_owned(), sample_analysis()),
            ("Mood Disorder".to_owned(), narrow_analysis()),
        ];
        let rendered = render_comparison(&results, 0.95);
        let bars = rendered
            .lines()
            .filter(|line| line.starts_with("  |"))
            .collect::<Vec<_>>();
        // The widest interval's upper bound sets the axis maximum, so its
        // span reaches the right edge while the narrower one stops short.
        // Cells start after the two-space indent and the left edge.
        let last_cell = 2 + BAR_WIDTH;
        assert_eq!(bars[0].rfind('='), Some(last_cell));
        assert!(bars[1].rfind('=').unwrap() < last_cell);
    }

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate("short"), "short");
        let long = "x".repeat(80);
        let truncated = truncate(&long);
        assert_eq!(truncated.chars().count(), QUESTION_COLUMN_WIDTH);
        assert!(truncated.ends_with("..."));
    }
}
