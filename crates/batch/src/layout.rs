//! Source and destination directory conventions.
//!
//! Source, per object:
//! ```text
//! <source>/<object>/csv_predict/predict_<group>.csv
//! <source>/<object>/csv_loss/loss_<group>.csv
//! ```
//! Destination, per object:
//! ```text
//! <destination>/objects/<object>/data/csv_roll/roll_<group>.csv
//! <destination>/objects/<object>/data/json_interval/group_<group>.json
//! ```

use std::path::{Path, PathBuf};

pub const OBJECTS_DIR: &str = "objects";
pub const CSV_PREDICT_DIR: &str = "csv_predict";
pub const CSV_LOSS_DIR: &str = "csv_loss";
pub const CSV_ROLL_DIR: &str = "csv_roll";
pub const JSON_INTERVAL_DIR: &str = "json_interval";

/// Read-only experiment tree holding one directory per object.
#[derive(Debug, Clone)]
pub struct SourceLayout {
    root: PathBuf,
}

impl SourceLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn predict_dir(&self, object: &str) -> PathBuf {
        self.root.join(object).join(CSV_PREDICT_DIR)
    }

    pub fn loss_dir(&self, object: &str) -> PathBuf {
        self.root.join(object).join(CSV_LOSS_DIR)
    }

    pub fn predict_file(&self, object: &str, group: usize) -> PathBuf {
        self.predict_dir(object).join(format!("predict_{group}.csv"))
    }

    pub fn loss_file(&self, object: &str, group: usize) -> PathBuf {
        self.loss_dir(object).join(format!("loss_{group}.csv"))
    }
}

/// Output tree for conditioned series and interval descriptors.
#[derive(Debug, Clone)]
pub struct DestinationLayout {
    root: PathBuf,
}

impl DestinationLayout {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.root.join(OBJECTS_DIR)
    }

    pub fn object_dir(&self, object: &str) -> PathBuf {
        self.objects_dir().join(object)
    }

    pub fn data_dir(&self, object: &str) -> PathBuf {
        self.object_dir(object).join("data")
    }

    pub fn roll_dir(&self, object: &str) -> PathBuf {
        self.data_dir(object).join(CSV_ROLL_DIR)
    }

    pub fn interval_dir(&self, object: &str) -> PathBuf {
        self.data_dir(object).join(JSON_INTERVAL_DIR)
    }

    pub fn roll_file(&self, object: &str, group: usize) -> PathBuf {
        self.roll_dir(object).join(format!("roll_{group}.csv"))
    }

    pub fn interval_file(&self, object: &str, group: usize) -> PathBuf {
        self.interval_dir(object).join(format!("group_{group}.json"))
    }

    /// Per-object directories in creation order.
    pub fn object_tree(&self, object: &str) -> Vec<PathBuf> {
        vec![
            self.object_dir(object),
            self.data_dir(object),
            self.roll_dir(object),
            self.interval_dir(object),
        ]
    }
}
