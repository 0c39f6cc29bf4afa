/// Events delivered by the sensor layer
use ahrs::Quaternion;

use crate::access::SensorKind;
use crate::motion::MotionSample;
use crate::orientation::OrientationSample;

/// Everything a running sensor can deliver to its listener
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    Motion(MotionSample),
    Orientation(OrientationSample),
    /// Reading from an absolute orientation sensor
    Quaternion(Quaternion),
    /// Asynchronous failure reported by the running sensor
    Error(String),
}

impl SensorEvent {
    /// Sensor family that produced this event, `None` for errors
    pub fn kind(&self) -> Option<SensorKind> {
        match self {
            SensorEvent::Motion(_) => Some(SensorKind::Motion),
            SensorEvent::Orientation(_) => Some(SensorKind::Orientation),
            SensorEvent::Quaternion(_) => Some(SensorKind::AbsoluteOrientation),
            SensorEvent::Error(_) => None,
        }
    }
}
