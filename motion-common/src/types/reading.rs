use crate::types::{Attitude, MagneticField, XYZ};

/// An immutable device-motion snapshot as delivered by the platform.
///
/// Units: attitude in radians, rotation rate in rad/s, user acceleration and
/// gravity in g, magnetic field in microteslas, heading in degrees.
///
/// # Examples
///
/// ```
/// use motion_common::types::{Attitude, MagneticField, MotionReading, XYZ};
///
/// let reading = MotionReading::new(
///     12.5,
///     Attitude::new(0.1, 0.2, 0.3),
///     XYZ::new([0.0, 0.0, 0.1]),
///     XYZ::new([0.0, 0.01, 0.0]),
///     XYZ::new([0.0, 0.0, -1.0]),
///     MagneticField::new(XYZ::new([21.0, -4.0, 40.0]), Some(12.0)),
/// );
/// assert_eq!(reading.attitude().yaw(), 0.3);
/// assert_eq!(reading.gravity().z(), -1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MotionReading {
    timestamp: f64,
    attitude: Attitude,
    rotation_rate: XYZ,
    user_acceleration: XYZ,
    gravity: XYZ,
    magnetic_field: MagneticField,
}

impl MotionReading {
    pub fn new(
        timestamp: f64,
        attitude: Attitude,
        rotation_rate: XYZ,
        user_acceleration: XYZ,
        gravity: XYZ,
        magnetic_field: MagneticField,
    ) -> Self {
        Self {
            timestamp,
            attitude,
            rotation_rate,
            user_acceleration,
            gravity,
            magnetic_field,
        }
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn attitude(&self) -> Attitude {
        self.attitude
    }

    /// Angular velocity about each axis, rad/s.
    pub fn rotation_rate(&self) -> XYZ {
        self.rotation_rate
    }

    /// Linear acceleration excluding gravity, in g.
    pub fn user_acceleration(&self) -> XYZ {
        self.user_acceleration
    }

    /// Gravity component of total acceleration, in g.
    pub fn gravity(&self) -> XYZ {
        self.gravity
    }

    pub fn magnetic_field(&self) -> MagneticField {
        self.magnetic_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_accessors() {
        let reading = MotionReading::new(
            1.0,
            Attitude::new(0.5, -0.5, 3.0),
            XYZ::new([1.0, 2.0, 3.0]),
            XYZ::new([0.1, 0.2, 0.3]),
            XYZ::new([0.0, 0.0, -1.0]),
            MagneticField::new(XYZ::new([10.0, 20.0, 30.0]), None),
        );
        assert_eq!(reading.timestamp(), 1.0);
        assert_eq!(reading.attitude().pitch(), 0.5);
        assert_eq!(reading.rotation_rate().inner(), [1.0, 2.0, 3.0]);
        assert_eq!(reading.user_acceleration().y(), 0.2);
        assert_eq!(reading.gravity().z(), -1.0);
        assert_eq!(reading.magnetic_field().heading(), None);
    }
}
