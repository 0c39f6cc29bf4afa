/// Device orientation samples

/// Device orientation angles in degrees, as supplied by the platform.
///
/// Any angle may be absent on a given reading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationSample {
    /// Rotation about the Z axis, [0, 360)
    pub alpha: Option<f64>,
    /// Front-to-back tilt about the X axis, [-180, 180)
    pub beta: Option<f64>,
    /// Left-to-right tilt about the Y axis, [-90, 90)
    pub gamma: Option<f64>,
}

impl OrientationSample {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            alpha: Some(alpha),
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Tilt angles (beta, gamma) if both are present
    pub fn tilt(&self) -> Option<(f64, f64)> {
        Some((self.beta?, self.gamma?))
    }
}
