//! Signal conditioning and interval extraction.
//!
//! Components in data-flow order:
//! - [`smooth`] — trailing moving average over the raw probability series
//! - [`gaps`] — back-fill of short zero dropouts
//! - [`power`] — operational-power gate consulted by the long pass
//! - [`extract`] — dual-threshold interval detection with overlap suppression
//! - [`summary`] — per-interval sensor ranking
//!
//! Every component operates on one series/table pair and holds no state
//! across calls; only the batch layer knows about objects and groups.

pub mod extract;
pub mod gaps;
pub mod power;
pub mod smooth;
pub mod summary;

pub use extract::{extract_intervals, scan_pass, PassParams};
pub use gaps::repair_gaps;
pub use power::PowerGate;
pub use smooth::smooth;
pub use summary::summarize;
