/// Motion sensor (gyroscope + accelerometer) samples

/// Rotation rate about the device axes, in degrees per second
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationRate {
    /// Rotation about the Z axis
    pub alpha: Option<f64>,
    /// Rotation about the X axis
    pub beta: Option<f64>,
    /// Rotation about the Y axis
    pub gamma: Option<f64>,
}

/// Linear acceleration along the device axes, in m/s²
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Acceleration {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// One motion reading.
///
/// Platforms may omit either half, or single components within a half.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionSample {
    pub rotation_rate: Option<RotationRate>,
    pub acceleration_including_gravity: Option<Acceleration>,
}

impl MotionSample {
    pub fn new(rotation_rate: RotationRate, acceleration_including_gravity: Acceleration) -> Self {
        Self {
            rotation_rate: Some(rotation_rate),
            acceleration_including_gravity: Some(acceleration_including_gravity),
        }
    }
}
