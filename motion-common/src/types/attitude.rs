/// Orientation of a device expressed as pitch/roll/yaw angles, in radians,
/// relative to the reference frame the subscription was started with.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Attitude {
    pitch: f64,
    roll: f64,
    yaw: f64,
}

impl Attitude {
    pub fn new(pitch: f64, roll: f64, yaw: f64) -> Self {
        Self { pitch, roll, yaw }
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn roll(&self) -> f64 {
        self.roll
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let attitude = Attitude::new(0.1, -0.2, 1.5);
        assert_eq!(attitude.pitch(), 0.1);
        assert_eq!(attitude.roll(), -0.2);
        assert_eq!(attitude.yaw(), 1.5);
    }
}
