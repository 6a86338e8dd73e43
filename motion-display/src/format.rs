use motion_common::types::angle::{degrees_to_radians, radians_to_degrees};
use motion_common::types::AngleType;

/// Formats an angle stored in radians for display. Degrees are shown whole,
/// radians with two decimals; a missing angle becomes a placeholder.
pub fn format_angle(angle_radians: Option<f64>, angle_type: AngleType) -> String {
    match (angle_radians, angle_type) {
        (Some(angle), AngleType::Degrees) => format!("{:.0}°", radians_to_degrees(angle)),
        (Some(angle), AngleType::Radians) => format!("{:.2} rad", angle),
        (None, AngleType::Degrees) => "--°".to_string(),
        (None, AngleType::Radians) => "-- rad".to_string(),
    }
}

/// Formats a scalar with a fixed precision and optional unit. A value in
/// (-1, 0) rendered without decimals is clamped to zero so the readout
/// never shows `-0`.
pub fn format_value(value: Option<f64>, precision: usize, unit: &str) -> String {
    match value {
        Some(mut value) => {
            if precision == 0 && value > -1.0 && value < 0.0 {
                value = 0.0;
            }
            if unit.is_empty() {
                format!("{:.*}", precision, value)
            } else {
                format!("{:.*} {}", precision, value, unit)
            }
        }
        None => {
            if unit.is_empty() {
                "--".to_string()
            } else {
                format!("-- {}", unit)
            }
        }
    }
}

/// Formats the compass heading, which the platform delivers in degrees, so
/// that it honors the angle-unit toggle like any other angle.
pub fn format_heading(heading_degrees: Option<f64>, angle_type: AngleType) -> String {
    format_angle(heading_degrees.map(degrees_to_radians), angle_type)
}
