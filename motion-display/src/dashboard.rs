use std::sync::Arc;

use motion_common::traits::{MotionSink, MotionSource};
use motion_common::types::{AngleType, MotionChannel};

use crate::panel::MotionPanel;
use crate::sinks::ReadoutSink;

/// Tabbed numeric readout over any number of motion sources. Holds the
/// session-wide angle-unit preference, which always opens as degrees.
pub struct Dashboard {
    sink: ReadoutSink,
    tabs: Vec<(MotionChannel, Arc<dyn MotionSource>)>,
    angle_type: AngleType,
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            sink: ReadoutSink::new(),
            tabs: Vec::new(),
            angle_type: AngleType::default(),
        }
    }

    /// Adds a tab fed by `source` and subscribes the readout to it.
    pub fn add_tab(&mut self, channel: MotionChannel, source: Arc<dyn MotionSource>) {
        self.sink.attach_listener(source.as_ref());
        self.tabs.push((channel, source));
    }

    pub fn angle_type(&self) -> AngleType {
        self.angle_type
    }

    pub fn set_angle_type(&mut self, angle_type: AngleType) {
        self.angle_type = angle_type;
    }

    pub fn toggle_angle_type(&mut self) {
        self.angle_type = match self.angle_type {
            AngleType::Degrees => AngleType::Radians,
            AngleType::Radians => AngleType::Degrees,
        };
    }

    /// Renders every tab. A source with no data yet shows placeholders; a
    /// stopped source keeps its last values frozen on screen.
    pub fn render(&self) -> String {
        let unit = match self.angle_type {
            AngleType::Degrees => "deg",
            AngleType::Radians => "rad",
        };

        let mut sections = Vec::with_capacity(self.tabs.len());
        for (channel, source) in &self.tabs {
            let state = if source.is_started() {
                "started"
            } else {
                "stopped"
            };
            let reading = self.sink.latest_for(source.tag());
            sections.push(format!(
                "=== {} [{}] ({})\n{}",
                channel.label(),
                state,
                unit,
                MotionPanel::render(reading.as_ref(), self.angle_type),
            ));
        }
        sections.join("\n\n")
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
