pub mod config;
pub mod error;
pub mod interval;
pub mod series;
pub mod table;

pub use config::{BatchConfig, ObjectConfig, PostProcessingConfig};
pub use error::SiftError;
pub use interval::{Interval, Span};
pub use series::{TimeSeries, TIMESTAMP_FORMAT};
pub use table::LossTable;
