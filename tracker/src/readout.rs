//! Text rendering of sensor samples.
//!
//! Every tracking mode renders its latest sample as a [`Readout`]: titled
//! sections of `label: value` lines. Readouts can be emitted as HTML (bold
//! section titles) or as plain text through `Display`.

use core::fmt;

use ahrs::{EulerAngles, Quaternion};
use hal::{MotionSample, OrientationSample};

use crate::{PointerOffset, TrackerConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub lines: Vec<Line>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lines: Vec::new(),
        }
    }

    fn line(mut self, label: &str, value: String) -> Self {
        self.lines.push(Line {
            label: label.to_string(),
            value,
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readout {
    pub sections: Vec<Section>,
}

impl Readout {
    /// Look up a value by section title and line label
    pub fn value(&self, title: &str, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|section| section.title == title)?
            .lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                html.push('\n');
            }
            html.push_str(&format!("<b>{}:</b>\n", escape_html(&section.title)));
            for line in &section.lines {
                html.push_str(&format!(
                    "  {}: {}\n",
                    escape_html(&line.label),
                    escape_html(&line.value)
                ));
            }
        }
        html
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}:", section.title)?;
            for line in &section.lines {
                writeln!(f, "  {}: {}", line.label, line.value)?;
            }
        }
        Ok(())
    }
}

/// Format `value` to `precision` decimals, or the configured placeholder
pub fn format_value(value: Option<f64>, precision: usize, placeholder: &str) -> String {
    match value {
        // + 0.0 folds -0.0 into 0.0
        Some(v) => format!("{:.*}", precision, v + 0.0),
        None => placeholder.to_string(),
    }
}

pub fn motion(sample: &MotionSample, config: &TrackerConfig) -> Readout {
    let value = |v: Option<f64>| format_value(v, config.value_precision(), config.placeholder());
    let rotation = sample.rotation_rate.unwrap_or_default();
    let acceleration = sample.acceleration_including_gravity.unwrap_or_default();

    Readout {
        sections: vec![
            Section::new("Rotation rate (gyroscope)")
                .line("alpha (about Z)", value(rotation.alpha))
                .line("beta (about X)", value(rotation.beta))
                .line("gamma (about Y)", value(rotation.gamma)),
            Section::new("Acceleration including gravity")
                .line("X", value(acceleration.x))
                .line("Y", value(acceleration.y))
                .line("Z", value(acceleration.z)),
        ],
    }
}

pub fn quaternion(q: &Quaternion, config: &TrackerConfig) -> Readout {
    let value = |v: f64| format_value(Some(v), config.value_precision(), config.placeholder());
    let angle = |v: f64| format_value(Some(v), config.euler_precision(), config.placeholder());
    let EulerAngles { pitch, yaw, roll } = q.to_euler();

    Readout {
        sections: vec![
            Section::new("Quaternion")
                .line("x", value(q.x))
                .line("y", value(q.y))
                .line("z", value(q.z))
                .line("w", value(q.w)),
            Section::new("Euler angles (degrees)")
                .line("pitch", angle(pitch))
                .line("yaw", angle(yaw))
                .line("roll", angle(roll)),
        ],
    }
}

pub fn orientation(sample: &OrientationSample, config: &TrackerConfig) -> Readout {
    let value = |v: Option<f64>| format_value(v, config.value_precision(), config.placeholder());

    Readout {
        sections: vec![Section::new("Device orientation")
            .line("alpha (about Z)", value(sample.alpha))
            .line("beta (about X)", value(sample.beta))
            .line("gamma (about Y)", value(sample.gamma))],
    }
}

pub fn pointer(offset: &PointerOffset, config: &TrackerConfig) -> Readout {
    let value = |v: f64| {
        let v = v.is_finite().then_some(v);
        format_value(v, config.euler_precision(), config.placeholder())
    };

    Readout {
        sections: vec![Section::new("Pointer offset (px)")
            .line("X", value(offset.move_x))
            .line("Y", value(offset.move_y))],
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
