/// Sensor error taxonomy
use thiserror::Error;

use crate::access::SensorKind;

/// Errors a platform can report while acquiring or running a sensor.
///
/// The messages are meant to be shown to the user in place of the normal
/// readout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// The platform does not expose the sensor API at all
    #[error("This device does not support {0} sensors.")]
    Unsupported(SensorKind),

    /// The user declined access
    #[error("Access to the {0} sensors was not granted.")]
    PermissionDenied(SensorKind),

    /// The sensor is only available over a secure transport
    #[error("Sensor access requires a secure (HTTPS) connection.")]
    InsecureContext,

    /// Error delivered asynchronously by a running sensor
    #[error("Sensor error: {0}")]
    Runtime(String),
}

pub type SensorResult<T> = Result<T, SensorError>;
