//! Trailing moving-average smoothing of the probability series.

/// Smooth `values` with a trailing mean over a window of
/// `roll_in_hours * samples_per_hour` samples ending at and including each
/// position.
///
/// A negative `roll_in_hours` is the "disabled" sentinel and returns the
/// input unchanged, as does a zero-sized window. The first `window`
/// positions keep their raw values: trailing windows are undefined there,
/// and fabricating means from insufficient history would distort the
/// leading region. Output length always equals input length.
pub fn smooth(values: &[f64], roll_in_hours: i64, samples_per_hour: usize) -> Vec<f64> {
    if roll_in_hours < 0 {
        return values.to_vec();
    }
    let window = roll_in_hours as usize * samples_per_hour;
    if window == 0 || values.len() <= window {
        return values.to_vec();
    }

    let mut out = values.to_vec();
    // Running sum of the window-1 samples preceding position `window`.
    let mut sum: f64 = values[1..window].iter().sum();
    for i in window..values.len() {
        sum += values[i];
        out[i] = sum / window as f64;
        sum -= values[i + 1 - window];
    }
    out
}
