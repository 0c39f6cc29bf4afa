use thiserror::Error;
use std::fmt;

/// Primary error type for the AHRS crate
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AhrsError {
    /// A quaternion component was NaN or infinite
    #[error("Invalid quaternion: component {component} is {value}")]
    InvalidQuaternion {
        /// Component that failed validation
        component: Component,
        /// The offending value
        value: f64,
    },
}

/// Quaternion components, used to point at the one that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    X,
    Y,
    Z,
    W,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::X => write!(f, "x"),
            Component::Y => write!(f, "y"),
            Component::Z => write!(f, "z"),
            Component::W => write!(f, "w"),
        }
    }
}

/// Helper functions for creating common errors
pub mod helpers {
    use super::*;

    /// Check that a single quaternion component is finite
    pub fn check_component(component: Component, value: f64) -> Result<(), AhrsError> {
        if value.is_nan() || value.is_infinite() {
            Err(AhrsError::InvalidQuaternion { component, value })
        } else {
            Ok(())
        }
    }
}

/// Type alias for Result with AhrsError
pub type AhrsResult<T> = Result<T, AhrsError>;

#[cfg(test)]
mod tests {
    use super::helpers::check_component;
    use super::*;

    #[test]
    fn test_error_message_names_component() {
        let err = check_component(Component::Z, f64::INFINITY).unwrap_err();
        assert_eq!(err.to_string(), "Invalid quaternion: component z is inf");
    }

    #[test]
    fn test_finite_component_passes() {
        assert!(check_component(Component::W, -0.5).is_ok());
        assert!(check_component(Component::X, f64::NAN).is_err());
    }
}
