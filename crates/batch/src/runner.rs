//! Batch driver: walks the source tree, runs the pipeline per group, and
//! persists outputs plus a polling-friendly progress artifact.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use sift_core::{BatchConfig, Interval, SiftError, TimeSeries};
use sift_pipeline::{extract_intervals, repair_gaps, smooth, summarize, PowerGate};

use crate::files;
use crate::layout::{DestinationLayout, SourceLayout};
use crate::progress::ProgressFile;

/// Filesystem locations for one run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub config: PathBuf,
    pub progress_file: PathBuf,
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub objects: usize,
    pub groups: usize,
    pub intervals: usize,
}

/// Process every object under the source root.
///
/// Every discovered object must be configured, and each object's prediction
/// and loss file counts must match; either failure aborts the whole batch.
/// The progress artifact is removed when this returns, success or not. On
/// failure, already-written outputs are kept unless the config says
/// otherwise.
pub fn run_batch(options: &BatchOptions) -> Result<BatchSummary, SiftError> {
    let config = BatchConfig::from_yaml(&options.config)?;
    let source = SourceLayout::new(options.source.clone());
    let destination = DestinationLayout::new(options.destination.clone());

    let objects = discover_objects(source.root())?;
    let mut total_groups = 0;
    for name in &objects {
        total_groups += config.object(name)?.count_of_groups;
    }
    info!(objects = objects.len(), groups = total_groups, "starting batch");

    let mut progress = ProgressFile::create(options.progress_file.clone(), total_groups)?;
    ensure_dir(&destination.objects_dir())?;

    let result = process_objects(&config, &source, &destination, &objects, &mut progress);
    if result.is_err() && !config.keep_partial_outputs {
        if let Err(error) = std::fs::remove_dir_all(destination.objects_dir()) {
            warn!(%error, "failed to remove partial outputs");
        }
    }
    result
}

fn process_objects(
    config: &BatchConfig,
    source: &SourceLayout,
    destination: &DestinationLayout,
    objects: &[String],
    progress: &mut ProgressFile,
) -> Result<BatchSummary, SiftError> {
    let mut summary = BatchSummary {
        objects: objects.len(),
        groups: 0,
        intervals: 0,
    };

    for name in objects {
        let (groups, intervals) =
            process_object(config, source, destination, name, progress)?;
        summary.groups += groups;
        summary.intervals += intervals;
        info!(object = %name, groups, intervals, "object complete");
    }

    Ok(summary)
}

fn process_object(
    config: &BatchConfig,
    source: &SourceLayout,
    destination: &DestinationLayout,
    name: &str,
    progress: &mut ProgressFile,
) -> Result<(usize, usize), SiftError> {
    let object = config.object(name)?;
    let tuning = &config.post_processing;

    for dir in destination.object_tree(name) {
        ensure_dir(&dir)?;
    }

    let predicts = count_files(&source.predict_dir(name))?;
    let losses = count_files(&source.loss_dir(name))?;
    if predicts != losses {
        return Err(SiftError::GroupCountMismatch {
            object: name.to_string(),
            predicts,
            losses,
        });
    }

    // One power read serves every group of the object.
    let power = files::read_power_series(&object.data, &object.power_column)?;
    let gate = PowerGate::new(
        &power,
        object.power_limit,
        tuning.power_shift_left,
        tuning.power_shift_right,
    );

    let mut total_intervals = 0;
    for group in 0..object.count_of_groups {
        let raw = files::read_probability_series(&source.predict_file(name, group))?;

        let mut values = smooth(&raw.values, tuning.roll_in_hours, object.samples_per_hour);
        repair_gaps(&mut values, 24 * object.samples_per_hour);
        let conditioned = TimeSeries::new(raw.timestamps, values);
        files::write_roll(&destination.roll_file(name, group), &conditioned)?;

        let table = files::read_loss_table(&source.loss_file(name, group))?;
        let intervals: Vec<Interval> = extract_intervals(&conditioned.values, tuning, &gate)
            .into_iter()
            .map(|span| summarize(span, &conditioned, &table, tuning.count_top))
            .collect();
        files::write_intervals(&destination.interval_file(name, group), &intervals)?;

        total_intervals += intervals.len();
        let percent = progress.complete_one()?;
        info!(
            object = %name,
            group,
            intervals = intervals.len(),
            percent,
            "group complete"
        );
    }

    Ok((object.count_of_groups, total_intervals))
}

/// Immediate subdirectories of the source root, sorted by name.
fn discover_objects(root: &Path) -> Result<Vec<String>, SiftError> {
    let mut objects = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_dir() {
            objects.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(objects)
}

fn count_files(dir: &Path) -> Result<usize, SiftError> {
    let mut count = 0;
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() {
            count += 1;
        }
    }
    Ok(count)
}

/// Like `create_dir` but tolerant of a directory left over from an earlier
/// run. The parent must already exist.
fn ensure_dir(path: &Path) -> io::Result<()> {
    match std::fs::create_dir(path) {
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        other => other,
    }
}
