//! CSV and JSON persistence for series, loss tables, and descriptors.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;

use sift_core::{Interval, LossTable, SiftError, TimeSeries, TIMESTAMP_FORMAT};

pub const TIMESTAMP_COLUMN: &str = "timestamp";
pub const TARGET_COLUMN: &str = "target_value";

fn csv_err(e: csv::Error) -> SiftError {
    SiftError::Csv(e.to_string())
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, SiftError> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|e| SiftError::Timestamp(format!("{:?}: {e}", raw.trim())))
}

/// Empty cells mean the upstream model emitted no value there; they read as
/// 0.0 so the gap repairer can treat them as dropouts.
fn parse_value(raw: &str) -> Result<f64, SiftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>()
        .map_err(|e| SiftError::Csv(format!("bad numeric cell {raw:?}: {e}")))
}

fn column_position(
    headers: &csv::StringRecord,
    column: &str,
    file: &Path,
) -> Result<usize, SiftError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| SiftError::MissingColumn {
            file: file.display().to_string(),
            column: column.to_string(),
        })
}

/// Read a raw probability series (`timestamp,target_value`).
pub fn read_probability_series(path: &Path) -> Result<TimeSeries, SiftError> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let ts_pos = column_position(&headers, TIMESTAMP_COLUMN, path)?;
    let target_pos = column_position(&headers, TARGET_COLUMN, path)?;

    let mut series = TimeSeries::default();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        series
            .timestamps
            .push(parse_timestamp(record.get(ts_pos).unwrap_or(""))?);
        series
            .values
            .push(parse_value(record.get(target_pos).unwrap_or(""))?);
    }
    Ok(series)
}

/// Read a loss table: `timestamp` plus one column per sensor, sensor order
/// preserved from the file. Empty cells stay absent rather than zero; the
/// summarizer decides how to weigh them.
pub fn read_loss_table(path: &Path) -> Result<LossTable, SiftError> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let ts_pos = column_position(&headers, TIMESTAMP_COLUMN, path)?;

    let sensors: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(pos, _)| *pos != ts_pos)
        .map(|(pos, name)| (pos, name.trim().to_string()))
        .collect();

    let mut table = LossTable::default();
    for (_, name) in &sensors {
        table.columns.insert(name.clone(), Vec::new());
    }

    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        table
            .timestamps
            .push(parse_timestamp(record.get(ts_pos).unwrap_or(""))?);
        for (pos, name) in &sensors {
            let cell = record.get(*pos).unwrap_or("").trim();
            let value = if cell.is_empty() {
                None
            } else {
                Some(parse_value(cell)?)
            };
            if let Some(column) = table.columns.get_mut(name) {
                column.push(value);
            }
        }
    }
    Ok(table)
}

/// Read one named column out of an object's reference data CSV. Missing
/// power readings parse as 0.0, which the gate treats as a shutdown.
pub fn read_power_series(path: &Path, column: &str) -> Result<Vec<f64>, SiftError> {
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let pos = column_position(&headers, column, path)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        values.push(parse_value(record.get(pos).unwrap_or(""))?);
    }
    Ok(values)
}

/// Persist the conditioned probability series so downstream chart rendering
/// never re-computes it.
pub fn write_roll(path: &Path, series: &TimeSeries) -> Result<(), SiftError> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer
        .write_record([TIMESTAMP_COLUMN, TARGET_COLUMN])
        .map_err(csv_err)?;
    for (ts, value) in series.timestamps.iter().zip(&series.values) {
        writer
            .write_record([
                ts.format(TIMESTAMP_FORMAT).to_string(),
                value.to_string(),
            ])
            .map_err(csv_err)?;
    }
    writer.flush()?;
    Ok(())
}

/// Persist the ordered interval-descriptor list, pretty-printed.
pub fn write_intervals(path: &Path, intervals: &[Interval]) -> Result<(), SiftError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, intervals)
        .map_err(|e| SiftError::Json(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sift-test-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn empty_probability_cells_read_as_zero() {
        let dir = test_dir();
        let path = dir.join("predict_0.csv");
        std::fs::write(
            &path,
            "timestamp,target_value\n2024-01-01 00:00:00,0.5\n2024-01-01 00:05:00,\n",
        )
        .unwrap();

        let series = read_probability_series(&path).unwrap();
        assert_eq!(series.values, vec![0.5, 0.0]);
        assert_eq!(series.timestamps.len(), 2);
    }

    #[test]
    fn missing_column_is_reported() {
        let dir = test_dir();
        let path = dir.join("predict_0.csv");
        std::fs::write(&path, "timestamp,probability\n2024-01-01 00:00:00,0.5\n").unwrap();

        assert!(matches!(
            read_probability_series(&path),
            Err(SiftError::MissingColumn { .. })
        ));
    }

    #[test]
    fn loss_table_keeps_column_order_and_absent_cells() {
        let dir = test_dir();
        let path = dir.join("loss_0.csv");
        std::fs::write(
            &path,
            "timestamp,s2,s1\n2024-01-01 00:00:00,1.5,\n2024-01-01 00:05:00,2.5,4.0\n",
        )
        .unwrap();

        let table = read_loss_table(&path).unwrap();
        let names: Vec<&String> = table.columns.keys().collect();
        assert_eq!(names, vec!["s2", "s1"]);
        assert_eq!(table.columns["s1"], vec![None, Some(4.0)]);
    }

    #[test]
    fn power_column_is_selected_by_name() {
        let dir = test_dir();
        let path = dir.join("data.csv");
        std::fs::write(
            &path,
            "timestamp,N,T\n2024-01-01 00:00:00,42.0,7.0\n2024-01-01 00:05:00,,8.0\n",
        )
        .unwrap();

        let power = read_power_series(&path, "N").unwrap();
        assert_eq!(power, vec![42.0, 0.0]);
    }

    #[test]
    fn interval_write_reports_a_full_disk() {
        let interval = Interval {
            time: ("2024-01-01 00:00:00".to_string(), "2024-01-01 01:00:00".to_string()),
            index: (0, 12),
            length: 12,
            top_sensors: vec!["sensor_a".to_string()],
            measurement: vec![5.0],
        };

        // A small descriptor fits the write buffer, so only the final flush
        // hits the device; the error must still come back.
        let result = write_intervals(Path::new("/dev/full"), &[interval]);
        assert!(matches!(result, Err(SiftError::Io(_))));
    }

    #[test]
    fn roll_file_round_trips_through_the_reader() {
        let dir = test_dir();
        let path = dir.join("predict_0.csv");
        std::fs::write(
            &path,
            "timestamp,target_value\n2024-01-01 00:00:00,0.25\n2024-01-01 00:05:00,0.75\n",
        )
        .unwrap();

        let series = read_probability_series(&path).unwrap();
        let roll_path = dir.join("roll_0.csv");
        write_roll(&roll_path, &series).unwrap();

        let reread = read_probability_series(&roll_path).unwrap();
        assert_eq!(reread.values, series.values);
        assert_eq!(reread.timestamps, series.timestamps);
    }
}
