use std::time::{Duration, Instant};

use hal::{SensorEvent, SimulatedAccess};
use tracker::{readout, Output, PointerOffset, Readout, Tracker, TrackerState, TrackingMode};

use crate::board::SimulatedDevice;
use crate::config::SitlConfig;

const MARKER_AREA: f32 = 320.0;
const MARKER_RADIUS: f32 = 12.0;

pub struct SitlApp {
    tracker: Tracker<SimulatedAccess>,
    device: SimulatedDevice,
    status: String,
    readout: Option<Readout>,
    marker: PointerOffset,
    last_sample: Instant,
    inject_error: bool,
}

impl SitlApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: SitlConfig) -> Self {
        let access = config.permission.access("SITL");
        Self {
            tracker: Tracker::new(access, config.mode, config.tracker),
            device: SimulatedDevice::new(),
            status: String::from("Press start to begin tracking."),
            readout: None,
            marker: PointerOffset::ZERO,
            last_sample: Instant::now(),
            inject_error: false,
        }
    }

    fn start(&mut self) {
        self.device.reset();
        self.readout = None;
        self.marker = PointerOffset::ZERO;
        self.last_sample = Instant::now();
        let output = self.tracker.start();
        self.show(output);
    }

    fn stop(&mut self) {
        self.tracker.stop();
        self.status = String::from("Tracking stopped.");
    }

    fn sample(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_sample).as_secs_f64();
        self.last_sample = now;

        let event = if std::mem::take(&mut self.inject_error) {
            SensorEvent::Error(String::from("NotReadableError: sensor stopped responding"))
        } else {
            self.device.sample(self.tracker.mode().sensor_kind(), dt)
        };

        if let Some(output) = self.tracker.handle_event(&event) {
            self.show(output);
        }
    }

    fn show(&mut self, output: Output) {
        match output {
            Output::Status(message) => {
                self.status = message;
                self.readout = None;
            }
            Output::Readout(readout) => self.readout = Some(readout),
            Output::Marker(offset) => {
                self.readout = Some(readout::pointer(&offset, self.tracker.config()));
                self.marker = offset;
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let mut mode = self.tracker.mode();
        egui::ComboBox::from_label("Mode")
            .selected_text(mode.to_string())
            .show_ui(ui, |ui| {
                for candidate in TrackingMode::ALL {
                    ui.selectable_value(&mut mode, candidate, candidate.to_string());
                }
            });
        if mode != self.tracker.mode() {
            self.tracker.set_mode(mode);
            self.readout = None;
            self.status = format!("{mode} selected. Press start to begin tracking.");
        }

        ui.horizontal(|ui| {
            let tracking = self.tracker.is_tracking();
            if ui.add_enabled(!tracking, egui::Button::new("Start")).clicked() {
                self.start();
            }
            if ui.add_enabled(tracking, egui::Button::new("Stop")).clicked() {
                self.stop();
            }
            if ui.add_enabled(tracking, egui::Button::new("Inject sensor error")).clicked() {
                self.inject_error = true;
            }
        });

        ui.separator();
        ui.heading("Device pose");
        ui.add(egui::Slider::new(&mut self.device.alpha, 0.0..=360.0).text("alpha (°)"));
        ui.add(egui::Slider::new(&mut self.device.beta, -180.0..=180.0).text("beta (°)"));
        ui.add(egui::Slider::new(&mut self.device.gamma, -90.0..=90.0).text("gamma (°)"));
        ui.checkbox(&mut self.device.report_gamma, "Report gamma");
        if ui.button("Level").clicked() {
            self.device.beta = 0.0;
            self.device.gamma = 0.0;
        }
    }

    fn marker(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(MARKER_AREA, MARKER_AREA), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(32));

        let (dx, dy) = self.marker.translation().unwrap_or((0.0, 0.0));
        let center = rect.clamp(rect.center() + egui::vec2(dx as f32, dy as f32));
        painter.circle_filled(center, MARKER_RADIUS, egui::Color32::LIGHT_BLUE);
    }
}

impl eframe::App for SitlApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.tracker.is_tracking() {
            self.sample();
            ctx.request_repaint_after(Duration::from_millis(1000 / 50)); // 50 Hz
        }

        egui::SidePanel::left("controls").show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(format!("{} tracking", self.tracker.mode()));
            if let TrackerState::Failed(_) = self.tracker.state() {
                ui.colored_label(egui::Color32::LIGHT_RED, self.status.as_str());
            } else {
                ui.label(self.status.as_str());
            }

            if let Some(readout) = &self.readout {
                ui.monospace(readout.to_string());
            }

            if self.tracker.mode() == TrackingMode::Pointer {
                self.marker(ui);
            }
        });
    }
}
