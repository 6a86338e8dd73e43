/// Coordinate convention used to interpret attitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ReferenceFrame {
    /// Z vertical, X in an arbitrary horizontal direction.
    #[default]
    XArbitraryZVertical,
    /// Z vertical, X aligned to magnetic north. Required for a valid heading.
    XMagneticNorthZVertical,
    /// Z vertical, X aligned to true north.
    XTrueNorthZVertical,
}

impl ReferenceFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceFrame::XArbitraryZVertical => "xArbitraryZVertical",
            ReferenceFrame::XMagneticNorthZVertical => "xMagneticNorthZVertical",
            ReferenceFrame::XTrueNorthZVertical => "xTrueNorthZVertical",
        }
    }
}

impl TryFrom<&str> for ReferenceFrame {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "xArbitraryZVertical" => Ok(Self::XArbitraryZVertical),
            "xMagneticNorthZVertical" => Ok(Self::XMagneticNorthZVertical),
            "xTrueNorthZVertical" => Ok(Self::XTrueNorthZVertical),
            _ => Err(format!("Unknown reference frame {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_round_trip() {
        for frame in [
            ReferenceFrame::XArbitraryZVertical,
            ReferenceFrame::XMagneticNorthZVertical,
            ReferenceFrame::XTrueNorthZVertical,
        ] {
            assert_eq!(ReferenceFrame::try_from(frame.as_str()).unwrap(), frame);
        }
    }

    #[test]
    fn test_unknown_frame() {
        assert!(ReferenceFrame::try_from("yMagneticNorth").is_err());
    }
}
