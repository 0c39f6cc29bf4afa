use nalgebra as na;

use crate::error::{helpers::check_component, AhrsResult, Component};
use crate::utils::{deg_to_rad, normalize_degrees, rad_to_deg};

/// Rotation quaternion as delivered by an absolute orientation sensor.
///
/// Components are stored in (x, y, z, w) order. The sensor is expected to
/// deliver unit quaternions; conversions never renormalize, so a non-unit
/// quaternion yields angles that are finite but physically meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Build a quaternion, rejecting NaN or infinite components
    pub fn try_new(x: f64, y: f64, z: f64, w: f64) -> AhrsResult<Self> {
        check_component(Component::X, x)?;
        check_component(Component::Y, y)?;
        check_component(Component::Z, z)?;
        check_component(Component::W, w)?;
        Ok(Self { x, y, z, w })
    }

    /// Build a quaternion from a `[x, y, z, w]` array, the layout used by
    /// sensor APIs that report orientation as a flat list.
    pub fn try_from_array(values: [f64; 4]) -> AhrsResult<Self> {
        let [x, y, z, w] = values;
        Self::try_new(x, y, z, w)
    }

    /// Build a unit quaternion from Euler angles in degrees (roll about X,
    /// pitch about Y, yaw about Z).
    pub fn from_euler_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        na::UnitQuaternion::from_euler_angles(deg_to_rad(roll), deg_to_rad(pitch), deg_to_rad(yaw))
            .into()
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn to_euler(&self) -> EulerAngles {
        quaternion_to_euler(self)
    }

    /// View as a nalgebra unit quaternion without renormalizing
    pub fn to_nalgebra(&self) -> na::UnitQuaternion<f64> {
        na::UnitQuaternion::new_unchecked(na::Quaternion::new(self.w, self.x, self.y, self.z))
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<na::UnitQuaternion<f64>> for Quaternion {
    fn from(q: na::UnitQuaternion<f64>) -> Self {
        let c = q.into_inner().coords;
        Self {
            x: c.x,
            y: c.y,
            z: c.z,
            w: c.w,
        }
    }
}

/// Orientation as Euler angles in degrees.
///
/// - pitch: [-90, 90]
/// - yaw: (-180, 180]
/// - roll: (-180, 180]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// Convert a quaternion to Euler angles in degrees (yaw-pitch-roll order).
///
/// When `2(wy - zx)` reaches or exceeds ±1 (gimbal lock, or rounding just
/// past it) pitch is pinned to ±90° with the sign of that term instead of
/// going through `asin`, which would return NaN.
pub fn quaternion_to_euler(q: &Quaternion) -> EulerAngles {
    let Quaternion { x, y, z, w } = *q;

    let sinr_cosp = 2.0 * (w * x + y * z);
    let cosr_cosp = 1.0 - 2.0 * (x * x + y * y);
    let roll = rad_to_deg(sinr_cosp.atan2(cosr_cosp));

    let sinp = 2.0 * (w * y - z * x);
    let pitch = if sinp.abs() >= 1.0 {
        90.0_f64.copysign(sinp)
    } else {
        rad_to_deg(sinp.asin())
    };

    let siny_cosp = 2.0 * (w * z + x * y);
    let cosy_cosp = 1.0 - 2.0 * (y * y + z * z);
    let yaw = rad_to_deg(siny_cosp.atan2(cosy_cosp));

    EulerAngles {
        pitch,
        yaw: normalize_degrees(yaw),
        roll: normalize_degrees(roll),
    }
}
