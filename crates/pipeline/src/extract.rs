//! Dual-pass interval extraction over a conditioned probability series.
//!
//! Each pass is one linear scan with purely local state: a candidate opens
//! on the first admitted sample, tolerates a bounded number of consecutive
//! misses, and closes back at its last admitted sample once the tolerance
//! is exhausted. The long pass consults the power gate; the short pass runs
//! ungated but yields to long detections covering the same region.

use sift_core::{PostProcessingConfig, Span};
use tracing::info;

use crate::power::PowerGate;

/// Threshold and qualification parameters for one detection pass.
#[derive(Debug, Clone, Copy)]
pub struct PassParams {
    /// Probability cutoff; samples must exceed it strictly.
    pub threshold: f64,
    /// Minimum span length (exclusive) for a candidate to qualify.
    pub min_len: usize,
    /// Consecutive misses tolerated inside a candidate before it closes.
    pub count_continue: usize,
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    Idle,
    Collecting {
        start: usize,
        last_hit: usize,
        misses: usize,
    },
}

/// Run one detection pass over `values`. `admit` decides whether the sample
/// at a position belongs to a candidate interval; thresholding and any
/// gating live inside it.
///
/// Emitted spans cover `[first admitted, last admitted + 1)` — tolerated
/// misses inside a candidate are counted in its length, but a candidate
/// never starts or ends on one. A candidate still open at end-of-scan has
/// unknown extent and is dropped.
pub fn scan_pass<F>(values: &[f64], params: &PassParams, mut admit: F) -> Vec<Span>
where
    F: FnMut(usize, f64) -> bool,
{
    let mut spans = Vec::new();
    let mut state = ScanState::Idle;

    for (pos, &value) in values.iter().enumerate() {
        if admit(pos, value) {
            state = match state {
                ScanState::Idle => ScanState::Collecting {
                    start: pos,
                    last_hit: pos,
                    misses: 0,
                },
                ScanState::Collecting { start, .. } => ScanState::Collecting {
                    start,
                    last_hit: pos,
                    misses: 0,
                },
            };
            continue;
        }

        if let ScanState::Collecting {
            start,
            last_hit,
            misses,
        } = state
        {
            if misses + 1 > params.count_continue {
                let span = Span {
                    start,
                    end: last_hit + 1,
                };
                if span.len() > params.min_len {
                    spans.push(span);
                }
                state = ScanState::Idle;
            } else {
                state = ScanState::Collecting {
                    start,
                    last_hit,
                    misses: misses + 1,
                };
            }
        }
    }

    spans
}

/// Extract anomalous intervals: the long pass first, gated on power, then
/// the short pass with long-overlap suppression.
///
/// Returns long intervals in scan order followed by surviving short ones in
/// scan order; positions are never re-sorted. The fraction of samples
/// covered by emitted intervals is logged as a diagnostic.
pub fn extract_intervals(
    values: &[f64],
    config: &PostProcessingConfig,
    gate: &PowerGate,
) -> Vec<Span> {
    let long_params = PassParams {
        threshold: config.threshold_long,
        min_len: config.len_long,
        count_continue: config.count_continue_long,
    };
    let short_params = PassParams {
        threshold: config.threshold_short,
        min_len: config.len_short,
        count_continue: config.count_continue_short,
    };

    let long = scan_pass(values, &long_params, |pos, value| {
        value > long_params.threshold && gate.ok(pos)
    });

    // Long detections take precedence: a short candidate whose start falls
    // inside any long interval is dropped.
    let short: Vec<Span> = scan_pass(values, &short_params, |_, value| {
        value > short_params.threshold
    })
    .into_iter()
    .filter(|candidate| !long.iter().any(|l| l.contains(candidate.start)))
    .collect();

    let mut spans = long;
    spans.extend(short);

    if !values.is_empty() {
        let covered: usize = spans.iter().map(Span::len).sum();
        info!(
            covered,
            fraction = covered as f64 / values.len() as f64,
            "anomalous sample coverage"
        );
    }

    spans
}
