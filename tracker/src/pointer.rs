use hal::OrientationSample;

use crate::config::{check_sensitivity, ConfigError, TrackerConfig};

/// Pointer displacement in pixels per degree of tilt
pub const DEFAULT_SENSITIVITY: f64 = 4.0;

/// Pixel displacement of the on-screen marker from its rest position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub move_x: f64,
    pub move_y: f64,
}

impl PointerOffset {
    pub const ZERO: Self = Self {
        move_x: 0.0,
        move_y: 0.0,
    };

    /// Both axes are real numbers
    pub fn is_numeric(&self) -> bool {
        self.move_x.is_finite() && self.move_y.is_finite()
    }

    /// The translation to apply, or `None` when either axis is not a number
    pub fn translation(&self) -> Option<(f64, f64)> {
        self.is_numeric().then_some((self.move_x, self.move_y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapperState {
    AwaitingBaseline,
    /// Baseline captured; beta and gamma are always present in it
    Tracking { baseline: OrientationSample },
}

/// Result of feeding one sample to the mapper
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerUpdate {
    /// No usable baseline yet, nothing to show
    Waiting,
    /// This sample became the baseline, nothing to show
    BaselineCaptured(OrientationSample),
    Moved(PointerOffset),
}

/// Maps device tilt relative to a captured baseline onto a pointer offset.
///
/// The first sample carrying both beta and gamma becomes the baseline and
/// stays fixed until [`PointerMapper::restart`]. Every later sample yields
///
/// ```text
/// move_x = -(gamma - baseline.gamma) * sensitivity
/// move_y = -(beta  - baseline.beta)  * sensitivity
/// ```
///
/// so tilting the device one way moves the marker the other way.
#[derive(Debug, Clone)]
pub struct PointerMapper {
    sensitivity: f64,
    state: MapperState,
}

impl Default for PointerMapper {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            state: MapperState::AwaitingBaseline,
        }
    }
}

impl PointerMapper {
    /// Mapper with the given pixels-per-degree; rejects zero, negative and
    /// non-finite values
    pub fn new(sensitivity: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            sensitivity: check_sensitivity(sensitivity)?,
            state: MapperState::AwaitingBaseline,
        })
    }

    /// Mapper using the sensitivity of an already validated config
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            sensitivity: config.sensitivity(),
            state: MapperState::AwaitingBaseline,
        }
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    pub fn state(&self) -> &MapperState {
        &self.state
    }

    pub fn baseline(&self) -> Option<&OrientationSample> {
        match &self.state {
            MapperState::AwaitingBaseline => None,
            MapperState::Tracking { baseline } => Some(baseline),
        }
    }

    /// Forget the baseline; the next complete sample is captured again
    pub fn restart(&mut self) {
        self.state = MapperState::AwaitingBaseline;
    }

    pub fn update(&mut self, sample: &OrientationSample) -> PointerUpdate {
        match self.state {
            MapperState::AwaitingBaseline => {
                if sample.tilt().is_none() {
                    return PointerUpdate::Waiting;
                }
                log::info!(
                    "baseline captured at beta={:?} gamma={:?}",
                    sample.beta,
                    sample.gamma
                );
                self.state = MapperState::Tracking { baseline: *sample };
                PointerUpdate::BaselineCaptured(*sample)
            }
            MapperState::Tracking { baseline } => {
                PointerUpdate::Moved(offset_from(&baseline, sample, self.sensitivity))
            }
        }
    }
}

/// Offset of `sample` relative to `baseline`. An angle missing from either
/// sample turns its axis into NaN.
pub fn offset_from(
    baseline: &OrientationSample,
    sample: &OrientationSample,
    sensitivity: f64,
) -> PointerOffset {
    let delta = |current: Option<f64>, reference: Option<f64>| match (current, reference) {
        (Some(current), Some(reference)) => -(current - reference) * sensitivity,
        _ => f64::NAN,
    };
    PointerOffset {
        move_x: delta(sample.gamma, baseline.gamma),
        move_y: delta(sample.beta, baseline.beta),
    }
}
