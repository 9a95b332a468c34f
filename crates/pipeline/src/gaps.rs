//! Back-fill of short zero dropouts in the probability series.
//!
//! Truncated model output shows up as runs of exact-zero probability. Left
//! in place they trigger spurious secondary detections on re-entry, so runs
//! shorter than a day of samples are treated as data artifacts and repaired;
//! longer runs are a genuine shutdown and stay zero.

/// Repair runs of exact-zero samples strictly shorter than
/// `max_gap_samples` by back-filling the value immediately preceding the
/// run. A run starting at position 0 has no preceding value and is left
/// alone. A run still open at end-of-data counts as ended there and is
/// repaired under the same rule. Idempotent.
pub fn repair_gaps(values: &mut [f64], max_gap_samples: usize) {
    let mut run_start: Option<usize> = None;
    for i in 0..values.len() {
        if values[i] == 0.0 {
            run_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = run_start.take() {
            fill_run(values, start, i, max_gap_samples);
        }
    }
    if let Some(start) = run_start {
        let end = values.len();
        fill_run(values, start, end, max_gap_samples);
    }
}

fn fill_run(values: &mut [f64], start: usize, end: usize, max_gap_samples: usize) {
    if start == 0 || end - start >= max_gap_samples {
        return;
    }
    let last = values[start - 1];
    for value in &mut values[start..end] {
        *value = last;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_gap_is_backfilled() {
        let mut values = vec![0.5, 0.0, 0.0, 0.7];
        repair_gaps(&mut values, 3);
        assert_eq!(values, vec![0.5, 0.5, 0.5, 0.7]);
    }

    #[test]
    fn gap_of_exactly_max_is_untouched() {
        let mut values = vec![0.5, 0.0, 0.0, 0.0, 0.7];
        repair_gaps(&mut values, 3);
        assert_eq!(values, vec![0.5, 0.0, 0.0, 0.0, 0.7]);
    }

    #[test]
    fn gap_of_max_minus_one_is_fully_repaired() {
        let mut values = vec![0.5, 0.0, 0.0, 0.7];
        repair_gaps(&mut values, 3);
        assert_eq!(values, vec![0.5, 0.5, 0.5, 0.7]);
    }

    #[test]
    fn leading_run_has_no_prior_value_and_is_skipped() {
        let mut values = vec![0.0, 0.0, 0.9, 0.9];
        repair_gaps(&mut values, 10);
        assert_eq!(values, vec![0.0, 0.0, 0.9, 0.9]);
    }

    #[test]
    fn trailing_run_counts_as_ended_at_end_of_data() {
        let mut values = vec![0.9, 0.0, 0.0];
        repair_gaps(&mut values, 5);
        assert_eq!(values, vec![0.9, 0.9, 0.9]);

        let mut long_tail = vec![0.9, 0.0, 0.0, 0.0, 0.0, 0.0];
        repair_gaps(&mut long_tail, 3);
        assert_eq!(long_tail, vec![0.9, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn repair_is_idempotent() {
        let mut once = vec![0.5, 0.0, 0.0, 0.7, 0.0, 0.3];
        repair_gaps(&mut once, 3);
        let mut twice = once.clone();
        repair_gaps(&mut twice, 3);
        assert_eq!(once, twice);
    }
}
