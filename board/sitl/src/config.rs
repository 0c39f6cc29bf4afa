use std::env;

use anyhow::{bail, Context};
use hal::{PermissionState, SensorError, SimulatedAccess};
use tracker::{TrackerConfig, TrackingMode};

const SENSITIVITY_VAR: &str = "TILT_SENSITIVITY";
const MODE_VAR: &str = "TILT_MODE";
const PERMISSION_VAR: &str = "TILT_PERMISSION";

/// How the simulated platform answers permission requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionAnswer {
    Granted,
    Denied,
    Unsupported,
    /// Refuse to prompt, as a browser does outside a secure context
    Insecure,
}

impl PermissionAnswer {
    pub fn access(self, name: &str) -> SimulatedAccess {
        let access = SimulatedAccess::new(name);
        match self {
            PermissionAnswer::Granted => access,
            PermissionAnswer::Denied => access.with_permission(PermissionState::Denied),
            PermissionAnswer::Unsupported => access.with_permission(PermissionState::Unsupported),
            PermissionAnswer::Insecure => access.with_request_error(SensorError::InsecureContext),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SitlConfig {
    pub tracker: TrackerConfig,
    pub mode: TrackingMode,
    pub permission: PermissionAnswer,
}

impl Default for SitlConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            mode: TrackingMode::Pointer,
            permission: PermissionAnswer::Granted,
        }
    }
}

impl SitlConfig {
    /// Defaults overridden by `TILT_SENSITIVITY`, `TILT_MODE` and
    /// `TILT_PERMISSION`
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(SENSITIVITY_VAR) {
            let sensitivity: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{SENSITIVITY_VAR}={raw:?} is not a number"))?;
            config
                .tracker
                .set_sensitivity(sensitivity)
                .with_context(|| format!("invalid {SENSITIVITY_VAR}"))?;
        }
        if let Some(raw) = lookup(MODE_VAR) {
            config.mode = parse_mode(&raw).with_context(|| format!("invalid {MODE_VAR}"))?;
        }
        if let Some(raw) = lookup(PERMISSION_VAR) {
            config.permission =
                parse_permission(&raw).with_context(|| format!("invalid {PERMISSION_VAR}"))?;
        }

        Ok(config)
    }
}

pub fn parse_mode(raw: &str) -> anyhow::Result<TrackingMode> {
    Ok(match raw.trim().to_ascii_lowercase().as_str() {
        "motion" => TrackingMode::Motion,
        "absolute" | "quaternion" => TrackingMode::AbsoluteOrientation,
        "orientation" => TrackingMode::Orientation,
        "pointer" => TrackingMode::Pointer,
        other => bail!("unknown tracking mode {other:?}"),
    })
}

pub fn parse_permission(raw: &str) -> anyhow::Result<PermissionAnswer> {
    Ok(match raw.trim().to_ascii_lowercase().as_str() {
        "granted" => PermissionAnswer::Granted,
        "denied" => PermissionAnswer::Denied,
        "unsupported" => PermissionAnswer::Unsupported,
        "insecure" => PermissionAnswer::Insecure,
        other => bail!("unknown permission answer {other:?}"),
    })
}
