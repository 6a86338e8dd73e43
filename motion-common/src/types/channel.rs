/// Physical sensor channel a source reads from. One source instance exists
/// per channel per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionChannel {
    Device,
    Headphones,
}

impl MotionChannel {
    pub fn label(&self) -> &'static str {
        match self {
            MotionChannel::Device => "Device",
            MotionChannel::Headphones => "Headphones",
        }
    }
}

impl TryFrom<&str> for MotionChannel {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Device" => Ok(Self::Device),
            "Headphones" => Ok(Self::Headphones),
            _ => Err(format!("Unknown motion channel {}", value)),
        }
    }
}
