//! # AHRS - Attitude conversion helpers
//!
//! Orientation math shared by the tracker: quaternions as delivered by an
//! absolute orientation sensor, their conversion into Euler angles, and the
//! angle helpers the conversion relies on.
//!
//! ## Conventions
//!
//! - Quaternions are stored as (x, y, z, w) and are expected to be unit length.
//!   Nothing here renormalizes them.
//! - Euler angles use the aerospace yaw-pitch-roll intrinsic order and are
//!   reported in degrees: pitch in [-90, 90], yaw and roll in (-180, 180].
//!
//! ## Platform Support
//!
//! - **desktop**: enables `std` for nalgebra (default)

pub mod error;
pub mod euler;
pub mod utils;

pub use error::{AhrsError, AhrsResult};
pub use euler::{quaternion_to_euler, EulerAngles, Quaternion};
