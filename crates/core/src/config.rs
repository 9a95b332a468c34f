use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SiftError;

fn default_count_continue_long() -> usize {
    15
}

fn default_count_continue_short() -> usize {
    10
}

fn default_power_shift() -> usize {
    15
}

fn default_keep_partial() -> bool {
    true
}

/// Numeric tuning parameters applied uniformly to every object in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostProcessingConfig {
    /// Trailing-mean smoothing window in hours; negative disables smoothing.
    pub roll_in_hours: i64,
    /// Probability cutoff for the long detection pass.
    pub threshold_long: f64,
    /// Probability cutoff for the short detection pass (conventionally below
    /// `threshold_long`).
    pub threshold_short: f64,
    /// Minimum sample count (exclusive) for a long interval to qualify.
    pub len_long: usize,
    /// Minimum sample count (exclusive) for a short interval to qualify.
    pub len_short: usize,
    /// Consecutive below-threshold samples tolerated inside a long candidate.
    #[serde(default = "default_count_continue_long")]
    pub count_continue_long: usize,
    /// Consecutive below-threshold samples tolerated inside a short candidate.
    #[serde(default = "default_count_continue_short")]
    pub count_continue_short: usize,
    /// Sensors retained per interval descriptor.
    pub count_top: usize,
    /// Power-gate window bound, in samples before the scan position.
    #[serde(default = "default_power_shift")]
    pub power_shift_left: usize,
    /// Power-gate window bound, in samples after the scan position.
    #[serde(default = "default_power_shift")]
    pub power_shift_right: usize,
}

/// Per-object overrides and data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectConfig {
    /// Number of sensor groups, i.e. prediction/loss file pairs.
    pub count_of_groups: usize,
    /// Sampling cadence. Accepts the upstream `number_of_sample` key.
    #[serde(alias = "number_of_sample")]
    pub samples_per_hour: usize,
    /// Operational power floor for the long-pass gate.
    pub power_limit: f64,
    /// Reference data CSV carrying the object's power column.
    pub data: PathBuf,
    /// Power column name inside `data`. Accepts the upstream `power_index` key.
    #[serde(alias = "power_index")]
    pub power_column: String,
}

/// Full tuning file for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub post_processing: PostProcessingConfig,
    pub objects: BTreeMap<String, ObjectConfig>,
    /// Keep already-written group artifacts when the batch aborts on a
    /// structural precondition failure.
    #[serde(default = "default_keep_partial")]
    pub keep_partial_outputs: bool,
}

impl BatchConfig {
    pub fn from_yaml(path: &Path) -> Result<Self, SiftError> {
        let raw = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&raw).map_err(|e| SiftError::Yaml(e.to_string()))
    }

    pub fn object(&self, name: &str) -> Result<&ObjectConfig, SiftError> {
        self.objects
            .get(name)
            .ok_or_else(|| SiftError::ObjectNotConfigured(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
post_processing:
  roll_in_hours: 3
  threshold_long: 0.95
  threshold_short: 0.85
  len_long: 72
  len_short: 24
  count_top: 3
objects:
  station_a:
    count_of_groups: 2
    number_of_sample: 12
    power_limit: 20.0
    data: data/station_a.csv
    power_index: N
"#;

    #[test]
    fn defaults_fill_omitted_fields() {
        let config: BatchConfig = serde_yaml::from_str(CONFIG).unwrap();
        assert_eq!(config.post_processing.count_continue_long, 15);
        assert_eq!(config.post_processing.count_continue_short, 10);
        assert_eq!(config.post_processing.power_shift_left, 15);
        assert_eq!(config.post_processing.power_shift_right, 15);
        assert!(config.keep_partial_outputs);
    }

    #[test]
    fn upstream_key_aliases_are_accepted() {
        let config: BatchConfig = serde_yaml::from_str(CONFIG).unwrap();
        let object = config.object("station_a").unwrap();
        assert_eq!(object.samples_per_hour, 12);
        assert_eq!(object.power_column, "N");
    }

    #[test]
    fn unknown_object_is_an_error() {
        let config: BatchConfig = serde_yaml::from_str(CONFIG).unwrap();
        assert!(matches!(
            config.object("station_b"),
            Err(SiftError::ObjectNotConfigured(_))
        ));
    }
}
