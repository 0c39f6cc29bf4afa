use core::fmt;

use hal::{SensorAccess, SensorError, SensorEvent, SensorKind};

use crate::pointer::{PointerMapper, PointerUpdate};
use crate::readout::{self, Readout};
use crate::{PointerOffset, TrackerConfig};

/// What the tracker shows for each sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    /// Rotation rate and acceleration readout
    Motion,
    /// Absolute orientation quaternion plus its Euler angles
    AbsoluteOrientation,
    /// Device orientation angles readout
    Orientation,
    /// Marker moved by tilt relative to a baseline
    Pointer,
}

impl TrackingMode {
    pub const ALL: [TrackingMode; 4] = [
        TrackingMode::Motion,
        TrackingMode::AbsoluteOrientation,
        TrackingMode::Orientation,
        TrackingMode::Pointer,
    ];

    pub fn sensor_kind(&self) -> SensorKind {
        match self {
            TrackingMode::Motion => SensorKind::Motion,
            TrackingMode::AbsoluteOrientation => SensorKind::AbsoluteOrientation,
            TrackingMode::Orientation | TrackingMode::Pointer => SensorKind::Orientation,
        }
    }
}

impl fmt::Display for TrackingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackingMode::Motion => write!(f, "Motion"),
            TrackingMode::AbsoluteOrientation => write!(f, "Absolute orientation"),
            TrackingMode::Orientation => write!(f, "Orientation"),
            TrackingMode::Pointer => write!(f, "Pointer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerState {
    Idle,
    Tracking,
    Failed(SensorError),
}

/// Something for the presentation layer to show
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Replaces the readout area with a message
    Status(String),
    Readout(Readout),
    /// Translate the marker by this offset
    Marker(PointerOffset),
}

/// One tracking session over a sensor platform.
///
/// Errors never leave the tracker: every failure is logged, recorded in
/// [`TrackerState::Failed`] and handed back as a status message.
pub struct Tracker<A: SensorAccess> {
    access: A,
    mode: TrackingMode,
    config: TrackerConfig,
    mapper: PointerMapper,
    state: TrackerState,
}

impl<A: SensorAccess> Tracker<A> {
    pub fn new(access: A, mode: TrackingMode, config: TrackerConfig) -> Self {
        let mapper = PointerMapper::from_config(&config);
        Self {
            access,
            mode,
            config,
            mapper,
            state: TrackerState::Idle,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn mapper(&self) -> &PointerMapper {
        &self.mapper
    }

    pub fn access(&self) -> &A {
        &self.access
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TrackerState::Tracking
    }

    /// Switch to another mode. A running session is stopped, since the new
    /// mode may need a different sensor permission.
    pub fn set_mode(&mut self, mode: TrackingMode) {
        if mode != self.mode {
            self.stop();
            self.mode = mode;
        }
    }

    /// Acquire the sensor for the current mode and begin tracking
    pub fn start(&mut self) -> Output {
        let kind = self.mode.sensor_kind();
        log::info!("{}: starting {} tracking", self.access.name(), self.mode);

        match self.access.acquire(kind) {
            Ok(()) => {
                self.mapper.restart();
                self.state = TrackerState::Tracking;
                Output::Status(String::from("Tracking started..."))
            }
            Err(err) => self.fail(err),
        }
    }

    pub fn stop(&mut self) {
        if self.state != TrackerState::Idle {
            log::info!("{}: tracking stopped", self.access.name());
        }
        self.state = TrackerState::Idle;
        self.mapper.restart();
    }

    /// Process one event from the sensor layer.
    ///
    /// Returns `None` when there is nothing new to show: not tracking, a
    /// sample from another sensor, a pointer still waiting for its baseline,
    /// or a pointer offset that is not a number.
    pub fn handle_event(&mut self, event: &SensorEvent) -> Option<Output> {
        if !self.is_tracking() {
            return None;
        }

        match (self.mode, event) {
            (_, SensorEvent::Error(message)) => Some(self.fail(SensorError::Runtime(message.clone()))),
            (TrackingMode::Motion, SensorEvent::Motion(sample)) => {
                Some(Output::Readout(readout::motion(sample, &self.config)))
            }
            (TrackingMode::AbsoluteOrientation, SensorEvent::Quaternion(q)) => {
                Some(Output::Readout(readout::quaternion(q, &self.config)))
            }
            (TrackingMode::Orientation, SensorEvent::Orientation(sample)) => {
                Some(Output::Readout(readout::orientation(sample, &self.config)))
            }
            (TrackingMode::Pointer, SensorEvent::Orientation(sample)) => match self.mapper.update(sample) {
                PointerUpdate::Moved(offset) if offset.is_numeric() => Some(Output::Marker(offset)),
                PointerUpdate::Moved(offset) => {
                    log::debug!("ignoring non-numeric pointer offset {:?}", offset);
                    None
                }
                PointerUpdate::Waiting | PointerUpdate::BaselineCaptured(_) => None,
            },
            (mode, other) => {
                log::trace!("{mode} tracker ignoring {:?}", other.kind());
                None
            }
        }
    }

    fn fail(&mut self, err: SensorError) -> Output {
        log::warn!("{}: {}", self.access.name(), err);
        let message = err.to_string();
        self.state = TrackerState::Failed(err);
        Output::Status(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahrs::Quaternion;
    use hal::{MotionSample, OrientationSample, PermissionState, SimulatedAccess};

    fn session(access: SimulatedAccess, mode: TrackingMode) -> Tracker<SimulatedAccess> {
        Tracker::new(access, mode, TrackerConfig::default())
    }

    fn tilt(beta: f64, gamma: f64) -> SensorEvent {
        SensorEvent::Orientation(OrientationSample::new(0.0, beta, gamma))
    }

    #[test]
    fn test_start_granted() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Motion);
        assert_eq!(tracker.start(), Output::Status("Tracking started...".into()));
        assert!(tracker.is_tracking());
    }

    #[test]
    fn test_start_denied_reports_status() {
        let access = SimulatedAccess::new("sim").with_permission(PermissionState::Denied);
        let mut tracker = session(access, TrackingMode::Orientation);
        assert_eq!(
            tracker.start(),
            Output::Status("Access to the orientation sensors was not granted.".into())
        );
        assert_eq!(
            *tracker.state(),
            TrackerState::Failed(SensorError::PermissionDenied(SensorKind::Orientation))
        );
        assert_eq!(tracker.handle_event(&tilt(1.0, 2.0)), None, "no output after failure");
    }

    #[test]
    fn test_start_unsupported_and_insecure() {
        let access = SimulatedAccess::new("sim").without(SensorKind::AbsoluteOrientation);
        let mut tracker = session(access, TrackingMode::AbsoluteOrientation);
        tracker.start();
        assert_eq!(
            *tracker.state(),
            TrackerState::Failed(SensorError::Unsupported(SensorKind::AbsoluteOrientation))
        );

        let access = SimulatedAccess::new("sim").with_request_error(SensorError::InsecureContext);
        let mut tracker = session(access, TrackingMode::Motion);
        assert_eq!(
            tracker.start(),
            Output::Status("Sensor access requires a secure (HTTPS) connection.".into())
        );
    }

    #[test]
    fn test_samples_ignored_before_start() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Motion);
        assert_eq!(tracker.handle_event(&SensorEvent::Motion(MotionSample::default())), None);
    }

    #[test]
    fn test_motion_mode_renders_readout() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Motion);
        tracker.start();
        match tracker.handle_event(&SensorEvent::Motion(MotionSample::default())) {
            Some(Output::Readout(readout)) => {
                assert_eq!(readout.value("Acceleration including gravity", "X"), Some("n/a"));
            }
            other => panic!("Expected a readout, got {:?}", other),
        }
        assert_eq!(tracker.handle_event(&tilt(1.0, 1.0)), None, "orientation ignored in motion mode");
    }

    #[test]
    fn test_absolute_orientation_mode() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::AbsoluteOrientation);
        tracker.start();
        let Some(Output::Readout(readout)) = tracker.handle_event(&SensorEvent::Quaternion(Quaternion::IDENTITY))
        else {
            panic!("expected a readout");
        };
        assert_eq!(readout.value("Quaternion", "w"), Some("1.00"));
        assert_eq!(readout.value("Euler angles (degrees)", "yaw"), Some("0.0"));
    }

    #[test]
    fn test_pointer_mode_waits_for_baseline() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Pointer);
        tracker.start();
        assert_eq!(tracker.handle_event(&tilt(10.0, 5.0)), None, "baseline sample shows nothing");
        assert_eq!(
            tracker.handle_event(&tilt(15.0, 5.0)),
            Some(Output::Marker(PointerOffset {
                move_x: 0.0,
                move_y: -20.0
            }))
        );
    }

    #[test]
    fn test_pointer_mode_skips_non_numeric_offset() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Pointer);
        tracker.start();
        tracker.handle_event(&tilt(10.0, 5.0));
        let partial = SensorEvent::Orientation(OrientationSample {
            alpha: None,
            beta: Some(11.0),
            gamma: None,
        });
        assert_eq!(tracker.handle_event(&partial), None);
        assert!(tracker.is_tracking());
    }

    #[test]
    fn test_restart_captures_new_baseline() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Pointer);
        tracker.start();
        tracker.handle_event(&tilt(10.0, 5.0));
        tracker.stop();
        assert!(tracker.mapper().baseline().is_none());

        tracker.start();
        tracker.handle_event(&tilt(0.0, 0.0));
        assert_eq!(
            tracker.handle_event(&tilt(1.0, -1.0)),
            Some(Output::Marker(PointerOffset {
                move_x: 4.0,
                move_y: -4.0
            }))
        );
        assert_eq!(tracker.access().requests(), 2);
    }

    #[test]
    fn test_runtime_error_fails_session() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Orientation);
        tracker.start();
        assert_eq!(
            tracker.handle_event(&SensorEvent::Error("NotReadableError".into())),
            Some(Output::Status("Sensor error: NotReadableError".into()))
        );
        assert_eq!(
            *tracker.state(),
            TrackerState::Failed(SensorError::Runtime("NotReadableError".into()))
        );
    }

    #[test]
    fn test_mode_change_stops_session() {
        let mut tracker = session(SimulatedAccess::new("sim"), TrackingMode::Orientation);
        tracker.start();
        tracker.set_mode(TrackingMode::Pointer);
        assert_eq!(*tracker.state(), TrackerState::Idle);
        assert_eq!(tracker.mode().sensor_kind(), SensorKind::Orientation);
    }
}
