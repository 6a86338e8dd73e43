use crate::types::XYZ;

/// Calibrated magnetic field vector in microteslas, plus the compass heading
/// in degrees. The heading is `None` when the platform cannot provide one,
/// e.g. insufficient calibration or a reference frame without a magnetic
/// north axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MagneticField {
    field: XYZ,
    heading: Option<f64>,
}

impl MagneticField {
    pub fn new(field: XYZ, heading: Option<f64>) -> Self {
        Self { field, heading }
    }

    pub fn field(&self) -> XYZ {
        self.field
    }

    /// Heading relative to magnetic north, in degrees.
    pub fn heading(&self) -> Option<f64> {
        self.heading
    }
}
