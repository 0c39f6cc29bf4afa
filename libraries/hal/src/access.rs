/// Capability query and permission interface
use core::fmt;

use crate::error::{SensorError, SensorResult};

/// Sensor families a platform may expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Rotation rate and acceleration (gyroscope + accelerometer)
    Motion,
    /// Device orientation angles (alpha, beta, gamma)
    Orientation,
    /// Absolute orientation quaternion
    AbsoluteOrientation,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorKind::Motion => write!(f, "motion"),
            SensorKind::Orientation => write!(f, "orientation"),
            SensorKind::AbsoluteOrientation => write!(f, "absolute orientation"),
        }
    }
}

/// Outcome of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Unsupported,
}

/// Platform sensor access.
///
/// Platforms differ in whether they gate sensors behind a permission prompt
/// at all; those without a gate report `Granted` straight away.
pub trait SensorAccess {
    /// Human readable platform name
    fn name(&self) -> &str;

    /// Whether the platform exposes the sensor API for `kind`
    fn is_supported(&self, kind: SensorKind) -> bool;

    /// Ask for access to `kind`
    ///
    /// Returns an error when the request itself fails, e.g. when the platform
    /// refuses to prompt outside a secure context.
    fn request_permission(&mut self, kind: SensorKind) -> SensorResult<PermissionState>;

    /// Query support, then request permission, folding every non-granted
    /// outcome into a `SensorError`.
    fn acquire(&mut self, kind: SensorKind) -> SensorResult<()> {
        if !self.is_supported(kind) {
            return Err(SensorError::Unsupported(kind));
        }
        match self.request_permission(kind)? {
            PermissionState::Granted => Ok(()),
            PermissionState::Denied => Err(SensorError::PermissionDenied(kind)),
            PermissionState::Unsupported => Err(SensorError::Unsupported(kind)),
        }
    }
}
