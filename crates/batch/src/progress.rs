//! Progress artifact for external supervisors.
//!
//! A single file whose entire content is a percentage like `42%`. A
//! supervisor polls it while the batch runs; the file disappearing means the
//! run ended (successfully or not). Only an external kill leaves it behind.

use std::io;
use std::path::PathBuf;

use tracing::debug;

#[derive(Debug)]
pub struct ProgressFile {
    path: PathBuf,
    total: usize,
    completed: usize,
}

impl ProgressFile {
    /// Create the artifact at 0% (an empty batch starts at 100%).
    pub fn create(path: PathBuf, total: usize) -> io::Result<Self> {
        let progress = Self {
            path,
            total,
            completed: 0,
        };
        progress.write()?;
        Ok(progress)
    }

    pub fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.completed * 100 / self.total
        }
    }

    /// Record one finished unit and rewrite the file.
    pub fn complete_one(&mut self) -> io::Result<usize> {
        self.completed += 1;
        self.write()?;
        Ok(self.percent())
    }

    fn write(&self) -> io::Result<()> {
        std::fs::write(&self.path, format!("{}%", self.percent()))
    }
}

impl Drop for ProgressFile {
    fn drop(&mut self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            debug!(path = %self.path.display(), %error, "progress file not removed");
        }
    }
}
