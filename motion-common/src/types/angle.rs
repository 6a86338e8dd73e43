use std::f64::consts::PI;

/// Angle unit used when displaying a reading. A display preference only:
/// stored readings are always in radians and are converted at render time.
///
/// # Examples
///
/// ```
/// use motion_common::types::angle::AngleType;
///
/// let degrees = AngleType::Degrees.from_radians(std::f64::consts::PI);
/// assert!((degrees - 180.0).abs() < 1e-9);
/// assert_eq!(AngleType::Radians.from_radians(1.25), 1.25);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AngleType {
    #[default]
    Degrees,
    Radians,
}

impl AngleType {
    /// Converts a value stored in radians into this unit.
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            AngleType::Degrees => radians_to_degrees(radians),
            AngleType::Radians => radians,
        }
    }
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
