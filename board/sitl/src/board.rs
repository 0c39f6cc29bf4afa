use ahrs::utils::{angle_diff_degrees, deg_to_rad};
use ahrs::Quaternion;
use hal::{Acceleration, MotionSample, OrientationSample, RotationRate, SensorEvent, SensorKind};
use nalgebra as na;

/// Standard gravity in m/s²
const GRAVITY: f64 = 9.80665;

/// A handheld device whose pose is set from the UI.
///
/// Angles follow the device orientation convention: alpha about Z, then beta
/// about the rotated X, then gamma about the rotated Y.
#[derive(Debug, Clone)]
pub struct SimulatedDevice {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Report gamma in orientation samples; off simulates a platform that
    /// leaves it out
    pub report_gamma: bool,
    last_pose: Option<(f64, f64, f64)>,
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            gamma: 0.0,
            report_gamma: true,
            last_pose: None,
        }
    }
}

impl SimulatedDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attitude(&self) -> na::UnitQuaternion<f64> {
        let z = na::UnitQuaternion::from_axis_angle(&na::Vector3::z_axis(), deg_to_rad(self.alpha));
        let x = na::UnitQuaternion::from_axis_angle(&na::Vector3::x_axis(), deg_to_rad(self.beta));
        let y = na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), deg_to_rad(self.gamma));
        z * x * y
    }

    pub fn orientation(&self) -> OrientationSample {
        OrientationSample {
            alpha: Some(self.alpha),
            beta: Some(self.beta),
            gamma: self.report_gamma.then_some(self.gamma),
        }
    }

    pub fn quaternion(&self) -> Quaternion {
        self.attitude().into()
    }

    /// Motion sample for a step of `dt` seconds since the previous call.
    ///
    /// Rotation rate is the pose change over `dt`; the first call after a
    /// reset has no previous pose and reports no rotation rate.
    pub fn motion(&mut self, dt: f64) -> MotionSample {
        let pose = (self.alpha, self.beta, self.gamma);
        let rotation_rate = match self.last_pose {
            Some((alpha, beta, gamma)) if dt > 0.0 => Some(RotationRate {
                alpha: Some(angle_diff_degrees(pose.0, alpha) / dt),
                beta: Some(angle_diff_degrees(pose.1, beta) / dt),
                gamma: Some(angle_diff_degrees(pose.2, gamma) / dt),
            }),
            _ => None,
        };
        self.last_pose = Some(pose);

        let gravity = self.attitude().inverse() * na::Vector3::new(0.0, 0.0, GRAVITY);
        MotionSample {
            rotation_rate,
            acceleration_including_gravity: Some(Acceleration {
                x: Some(gravity.x),
                y: Some(gravity.y),
                z: Some(gravity.z),
            }),
        }
    }

    /// Forget the previous pose used for rotation rates
    pub fn reset(&mut self) {
        self.last_pose = None;
    }

    /// Sample the sensor of `kind`
    pub fn sample(&mut self, kind: SensorKind, dt: f64) -> SensorEvent {
        match kind {
            SensorKind::Motion => SensorEvent::Motion(self.motion(dt)),
            SensorKind::Orientation => SensorEvent::Orientation(self.orientation()),
            SensorKind::AbsoluteOrientation => SensorEvent::Quaternion(self.quaternion()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_device() {
        let mut device = SimulatedDevice::new();
        assert_eq!(device.quaternion().to_euler(), ahrs::EulerAngles::default());

        let motion = device.motion(0.02);
        assert!(motion.rotation_rate.is_none(), "no rate without a previous pose");
        let accel = motion.acceleration_including_gravity.expect("acceleration is always reported");
        assert!((accel.z.unwrap() - GRAVITY).abs() < 1e-9);
        assert!(accel.x.unwrap().abs() < 1e-9);
    }

    #[test]
    fn test_rotation_rate_from_pose_change() {
        let mut device = SimulatedDevice::new();
        device.alpha = 350.0;
        device.motion(0.1);
        device.alpha = 10.0;
        device.beta = -2.0;
        let rate = device.motion(0.1).rotation_rate.expect("second sample has a rate");
        assert!((rate.alpha.unwrap() - 200.0).abs() < 1e-9, "alpha wraps through 0, got {:?}", rate.alpha);
        assert!((rate.beta.unwrap() + 20.0).abs() < 1e-9);
        assert_eq!(rate.gamma, Some(0.0));
    }

    #[test]
    fn test_missing_gamma() {
        let mut device = SimulatedDevice::new();
        device.report_gamma = false;
        match device.sample(SensorKind::Orientation, 0.02) {
            SensorEvent::Orientation(sample) => assert_eq!(sample.gamma, None),
            other => panic!("Expected an orientation sample, got {:?}", other),
        }
    }

    #[test]
    fn test_beta_tilt_is_roll_about_x() {
        let mut device = SimulatedDevice::new();
        device.beta = 30.0;
        let euler = device.quaternion().to_euler();
        assert!((euler.roll - 30.0).abs() < 1e-9, "beta is a rotation about X, got {:?}", euler);
    }
}
