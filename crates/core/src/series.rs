use chrono::NaiveDateTime;

/// On-disk timestamp format shared by every series and table file.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A time-indexed numeric signal with a fixed sampling cadence.
///
/// Timestamps and values are parallel vectors; the cadence itself is given
/// externally as samples per hour and never derived from the data.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    pub fn new(timestamps: Vec<NaiveDateTime>, values: Vec<f64>) -> Self {
        Self { timestamps, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Human-readable label for a sample position. An interval's half-open
    /// end can sit one past the final sample; that position labels as the
    /// last timestamp.
    pub fn label(&self, pos: usize) -> String {
        match self.timestamps.get(pos).or_else(|| self.timestamps.last()) {
            Some(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
            None => String::new(),
        }
    }
}
