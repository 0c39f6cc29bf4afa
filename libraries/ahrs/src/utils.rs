use core::f64::consts::PI;

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Normalize an angle in degrees to the range (-180, 180]
pub fn normalize_degrees(angle: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let mut result = angle % 360.0;
    if result > 180.0 {
        result -= 360.0;
    }
    if result <= -180.0 {
        result += 360.0;
    }
    result
}

/// Calculate the angular difference between two angles in degrees
pub fn angle_diff_degrees(a: f64, b: f64) -> f64 {
    normalize_degrees(a - b)
}
