use serde::{Deserialize, Serialize};

/// Half-open range of sample positions, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Left-edge-inclusive, right-edge-exclusive membership test.
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }
}

/// A detected anomalous interval with its sensor attribution.
///
/// Field names are the on-disk descriptor contract consumed by the report
/// layer; `top_sensors` and `measurement` are parallel, ordered by
/// descending mean loss over the interval window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interval {
    /// Human-readable start/end timestamps.
    pub time: (String, String),
    /// Half-open sample positions.
    pub index: (usize, usize),
    pub length: usize,
    pub top_sensors: Vec<String>,
    pub measurement: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_membership_is_half_open() {
        let span = Span { start: 3, end: 7 };
        assert!(span.contains(3));
        assert!(span.contains(6));
        assert!(!span.contains(7));
        assert!(!span.contains(2));
        assert_eq!(span.len(), 4);
    }
}
