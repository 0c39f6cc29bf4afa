mod config;
mod pointer;
pub mod readout;
mod session;

pub use config::{ConfigError, TrackerConfig};
pub use pointer::{offset_from, MapperState, PointerMapper, PointerOffset, PointerUpdate, DEFAULT_SENSITIVITY};
pub use readout::Readout;
pub use session::{Output, Tracker, TrackerState, TrackingMode};
