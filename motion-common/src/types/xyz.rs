use nalgebra::Vector3;

use crate::constants::N_XYZ_COORDINATES;

/// A 3-axis measurement (rotation rate, acceleration, gravity, magnetic
/// field) in the device's own frame.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct XYZ(Vector3<f64>);

impl XYZ {
    pub fn new(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self(Vector3::new(data[0], data[1], data[2]))
    }

    pub fn from_vec(data: Vec<f64>) -> Option<Self> {
        if data.len() != N_XYZ_COORDINATES {
            return None;
        }
        Some(Self(Vector3::from_vec(data)))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn z(&self) -> f64 {
        self.0.z
    }

    pub fn inner(&self) -> [f64; N_XYZ_COORDINATES] {
        [self.0.x, self.0.y, self.0.z]
    }
}

impl From<[f64; N_XYZ_COORDINATES]> for XYZ {
    fn from(data: [f64; N_XYZ_COORDINATES]) -> Self {
        Self::new(data)
    }
}

impl TryFrom<Vec<f64>> for XYZ {
    type Error = &'static str;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        XYZ::from_vec(value).ok_or("Invalid length of input vector")
    }
}
