/// Tracker configuration with validated setters
use thiserror::Error;

use crate::pointer::DEFAULT_SENSITIVITY;

/// Upper bound for the number of decimals shown in a readout
const MAX_PRECISION: usize = 10;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid sensitivity: {0} must be a positive, finite number")]
    InvalidSensitivity(f64),

    #[error("Invalid precision: {value} decimals exceeds the maximum of {max}")]
    InvalidPrecision { value: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    sensitivity: f64,
    value_precision: usize,
    euler_precision: usize,
    placeholder: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            value_precision: 2,
            euler_precision: 1,
            placeholder: String::from("n/a"),
        }
    }
}

impl TrackerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer displacement in pixels per degree of tilt
    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Decimals for rotation, acceleration, quaternion and angle values
    pub fn value_precision(&self) -> usize {
        self.value_precision
    }

    /// Decimals for Euler angles and pointer offsets
    pub fn euler_precision(&self) -> usize {
        self.euler_precision
    }

    /// Text shown in place of an absent value
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_sensitivity(&mut self, sensitivity: f64) -> Result<&mut Self, ConfigError> {
        self.sensitivity = check_sensitivity(sensitivity)?;
        Ok(self)
    }

    pub fn set_value_precision(&mut self, precision: usize) -> Result<&mut Self, ConfigError> {
        self.value_precision = check_precision(precision)?;
        Ok(self)
    }

    pub fn set_euler_precision(&mut self, precision: usize) -> Result<&mut Self, ConfigError> {
        self.euler_precision = check_precision(precision)?;
        Ok(self)
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Result<Self, ConfigError> {
        self.set_sensitivity(sensitivity)?;
        Ok(self)
    }
}

/// Sensitivity must be positive and finite
pub(crate) fn check_sensitivity(sensitivity: f64) -> Result<f64, ConfigError> {
    if !sensitivity.is_finite() || sensitivity <= 0.0 {
        Err(ConfigError::InvalidSensitivity(sensitivity))
    } else {
        Ok(sensitivity)
    }
}

fn check_precision(precision: usize) -> Result<usize, ConfigError> {
    if precision > MAX_PRECISION {
        Err(ConfigError::InvalidPrecision {
            value: precision,
            max: MAX_PRECISION,
        })
    } else {
        Ok(precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.sensitivity(), 4.0);
        assert_eq!(config.value_precision(), 2);
        assert_eq!(config.euler_precision(), 1);
        assert_eq!(config.placeholder(), "n/a");
    }

    #[test]
    fn test_sensitivity_validation() {
        let mut config = TrackerConfig::new();
        assert!(config.set_sensitivity(0.0).is_err(), "zero sensitivity should be rejected");
        assert!(config.set_sensitivity(-2.0).is_err(), "negative sensitivity should be rejected");
        assert!(config.set_sensitivity(f64::NAN).is_err(), "NaN sensitivity should be rejected");
        assert_eq!(config.sensitivity(), 4.0, "failed setters must not change the value");

        config.set_sensitivity(2.5).expect("2.5 is a valid sensitivity");
        assert_eq!(config.sensitivity(), 2.5);
    }

    #[test]
    fn test_precision_validation() {
        let mut config = TrackerConfig::new();
        config
            .set_value_precision(3)
            .and_then(|c| c.set_euler_precision(0))
            .expect("small precisions are valid");
        assert_eq!(config.value_precision(), 3);
        assert_eq!(config.euler_precision(), 0);

        assert_eq!(
            config.set_value_precision(11).unwrap_err(),
            ConfigError::InvalidPrecision { value: 11, max: 10 }
        );
    }
}
