//! Operational-power gate for the long detection pass.

/// Answers whether the power signal stays at or above an operational floor
/// in a window around a scan position. The long pass refuses samples where
/// it does not, so shutdown and low-load periods cannot accumulate into
/// sustained false detections.
#[derive(Debug, Clone, Copy)]
pub struct PowerGate<'a> {
    power: &'a [f64],
    limit: f64,
    left_shift: usize,
    right_shift: usize,
}

impl<'a> PowerGate<'a> {
    pub fn new(power: &'a [f64], limit: f64, left_shift: usize, right_shift: usize) -> Self {
        Self {
            power,
            limit,
            left_shift,
            right_shift,
        }
    }

    /// True iff no sample in the half-open window
    /// `[position - left_shift, position + right_shift)` falls strictly
    /// below the limit. Bounds are clamped to the valid index range; an
    /// empty window contributes no failing samples and passes.
    pub fn ok(&self, position: usize) -> bool {
        let lo = position.saturating_sub(self.left_shift).min(self.power.len());
        let hi = position.saturating_add(self.right_shift).min(self.power.len());
        self.power[lo..hi].iter().all(|v| *v >= self.limit)
    }
}
