//! Sensor access layer: the samples a motion/orientation sensor delivers and
//! the capability + permission interface a platform has to provide before it
//! starts delivering them.

mod access;
mod error;
mod motion;
mod orientation;
mod simulated;
mod types;

pub use access::*;
pub use error::*;
pub use motion::*;
pub use orientation::*;
pub use simulated::*;
pub use types::*;
