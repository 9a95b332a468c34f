//! Sensor attribution for extracted intervals.

use std::cmp::Ordering;

use sift_core::{Interval, LossTable, Span, TimeSeries};

/// Build the persisted descriptor for one extracted span: rank sensors by
/// mean loss over the interval window, descending, and keep the top
/// `count_top`. The sort is stable, so ties keep file column order.
pub fn summarize(
    span: Span,
    series: &TimeSeries,
    losses: &LossTable,
    count_top: usize,
) -> Interval {
    let mut means = losses.window_means(span.start, span.end);
    means.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    means.truncate(count_top);

    let (top_sensors, measurement) = means.into_iter().unzip();

    Interval {
        time: (series.label(span.start), series.label(span.end)),
        index: (span.start, span.end),
        length: span.len(),
        top_sensors,
        measurement,
    }
}
