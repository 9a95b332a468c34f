//! Batch orchestration for anomalous-interval extraction.
//!
//! Turns a directory of per-object prediction/loss CSV files into persisted
//! interval descriptors plus a progress artifact an external supervisor can
//! poll. The entry point is [`runner::run_batch`]; everything below it
//! processes one group at a time and holds no state across groups.

pub mod files;
pub mod layout;
pub mod progress;
pub mod runner;

pub use layout::{DestinationLayout, SourceLayout};
pub use progress::ProgressFile;
pub use runner::{run_batch, BatchOptions, BatchSummary};
