/// In-process platform with a scripted permission outcome
use std::collections::HashSet;

use crate::access::{PermissionState, SensorAccess, SensorKind};
use crate::error::{SensorError, SensorResult};

/// Sensor platform whose capabilities and permission answer are set up front.
///
/// Used by the desktop board, where a person drives the "device" from the
/// UI, and by tests.
#[derive(Debug, Clone)]
pub struct SimulatedAccess {
    name: String,
    supported: HashSet<SensorKind>,
    outcome: SensorResult<PermissionState>,
    requests: usize,
}

impl SimulatedAccess {
    /// A platform that supports every sensor and grants every request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            supported: [
                SensorKind::Motion,
                SensorKind::Orientation,
                SensorKind::AbsoluteOrientation,
            ]
            .into_iter()
            .collect(),
            outcome: Ok(PermissionState::Granted),
            requests: 0,
        }
    }

    /// Answer every permission request with `state`
    pub fn with_permission(mut self, state: PermissionState) -> Self {
        self.outcome = Ok(state);
        self
    }

    /// Fail every permission request with `error`
    pub fn with_request_error(mut self, error: SensorError) -> Self {
        self.outcome = Err(error);
        self
    }

    /// Remove `kind` from the supported sensor set
    pub fn without(mut self, kind: SensorKind) -> Self {
        self.supported.remove(&kind);
        self
    }

    /// Number of permission requests made so far
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl SensorAccess for SimulatedAccess {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_supported(&self, kind: SensorKind) -> bool {
        self.supported.contains(&kind)
    }

    fn request_permission(&mut self, kind: SensorKind) -> SensorResult<PermissionState> {
        self.requests += 1;
        log::debug!("{}: permission request #{} for {kind} sensors", self.name, self.requests);
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_granted() {
        let mut access = SimulatedAccess::new("sim");
        assert!(access.acquire(SensorKind::Motion).is_ok());
        assert_eq!(access.requests(), 1);
    }

    #[test]
    fn test_acquire_denied() {
        let mut access = SimulatedAccess::new("sim").with_permission(PermissionState::Denied);
        assert_eq!(
            access.acquire(SensorKind::Orientation),
            Err(SensorError::PermissionDenied(SensorKind::Orientation))
        );
    }

    #[test]
    fn test_unsupported_sensor_skips_request() {
        let mut access = SimulatedAccess::new("sim").without(SensorKind::AbsoluteOrientation);
        assert_eq!(
            access.acquire(SensorKind::AbsoluteOrientation),
            Err(SensorError::Unsupported(SensorKind::AbsoluteOrientation))
        );
        assert_eq!(access.requests(), 0, "no prompt for a missing sensor");
    }

    #[test]
    fn test_unsupported_permission_answer() {
        let mut access = SimulatedAccess::new("sim").with_permission(PermissionState::Unsupported);
        assert_eq!(
            access.acquire(SensorKind::Motion),
            Err(SensorError::Unsupported(SensorKind::Motion))
        );
    }

    #[test]
    fn test_request_error_propagates() {
        let mut access = SimulatedAccess::new("sim").with_request_error(SensorError::InsecureContext);
        assert_eq!(access.acquire(SensorKind::Motion), Err(SensorError::InsecureContext));
    }
}
