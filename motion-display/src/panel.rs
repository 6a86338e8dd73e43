use motion_common::types::{AngleType, MotionReading};

use crate::format::{format_angle, format_heading, format_value};

/// Row layout for one tab of the readout. A `None` reading renders every
/// row with its placeholder instead of failing.
pub struct MotionPanel;

const ROW_WIDTH: usize = 14;

impl MotionPanel {
    pub fn render(reading: Option<&MotionReading>, angle_type: AngleType) -> String {
        let mut lines = Vec::new();

        lines.push("Attitude".to_string());
        lines.push(row(
            "Pitch",
            format_angle(reading.map(|r| r.attitude().pitch()), angle_type),
        ));
        lines.push(row(
            "Roll",
            format_angle(reading.map(|r| r.attitude().roll()), angle_type),
        ));
        lines.push(row(
            "Yaw",
            format_angle(reading.map(|r| r.attitude().yaw()), angle_type),
        ));

        lines.push("Rotation Rate".to_string());
        lines.push(row("X", format_value(reading.map(|r| r.rotation_rate().x()), 0, "")));
        lines.push(row("Y", format_value(reading.map(|r| r.rotation_rate().y()), 0, "")));
        lines.push(row("Z", format_value(reading.map(|r| r.rotation_rate().z()), 0, "")));

        lines.push("User Acceleration".to_string());
        lines.push(row(
            "X",
            format_value(reading.map(|r| r.user_acceleration().x()), 0, "G"),
        ));
        lines.push(row(
            "Y",
            format_value(reading.map(|r| r.user_acceleration().y()), 0, "G"),
        ));
        lines.push(row(
            "Z",
            format_value(reading.map(|r| r.user_acceleration().z()), 0, "G"),
        ));

        lines.push("Gravity".to_string());
        lines.push(row("X", format_value(reading.map(|r| r.gravity().x()), 1, "G")));
        lines.push(row("Y", format_value(reading.map(|r| r.gravity().y()), 1, "G")));
        lines.push(row("Z", format_value(reading.map(|r| r.gravity().z()), 1, "G")));

        lines.push("Magnetic Field".to_string());
        lines.push(row(
            "Heading",
            format_heading(reading.and_then(|r| r.magnetic_field().heading()), angle_type),
        ));
        lines.push(row(
            "X",
            format_value(reading.map(|r| r.magnetic_field().field().x()), 0, "µT"),
        ));
        lines.push(row(
            "Y",
            format_value(reading.map(|r| r.magnetic_field().field().y()), 0, "µT"),
        ));
        lines.push(row(
            "Z",
            format_value(reading.map(|r| r.magnetic_field().field().z()), 0, "µT"),
        ));

        lines.join("\n")
    }
}

fn row(title: &str, content: String) -> String {
    format!("  {:<width$}{}", title, content, width = ROW_WIDTH)
}
