use chrono::NaiveDateTime;
use indexmap::IndexMap;

/// Per-sensor reconstruction losses, one row per timestamp, one column per
/// sensor. Column order matches the source file; `None` cells mean the
/// sensor reported no value at that timestamp.
#[derive(Debug, Clone, Default)]
pub struct LossTable {
    pub timestamps: Vec<NaiveDateTime>,
    pub columns: IndexMap<String, Vec<Option<f64>>>,
}

impl LossTable {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Column-wise means over rows `[start, end)`.
    ///
    /// Absent cells count as zero: the mean divides by the full window
    /// length, so a sensor with partial coverage is averaged down rather
    /// than collapsing to NaN. Bounds are clamped to the table.
    pub fn window_means(&self, start: usize, end: usize) -> Vec<(String, f64)> {
        let end = end.min(self.len());
        let start = start.min(end);
        let rows = end - start;

        self.columns
            .iter()
            .map(|(name, column)| {
                let mean = if rows == 0 {
                    0.0
                } else {
                    let sum: f64 = column[start..end].iter().map(|c| c.unwrap_or(0.0)).sum();
                    sum / rows as f64
                };
                (name.clone(), mean)
            })
            .collect()
    }
}
