use serde::Deserialize;
use serde_json::Value;

use motion_common::types::{Attitude, MagneticField, MotionReading, XYZ};

use crate::constants::N_MOTION_VARIABLES;
use crate::models::errors::SensorError;

pub(crate) const TIME_VAR: &str = "motion_time";

/// Bridge buffer names, in the order the reading is assembled.
pub(crate) const MOTION_VARIABLES: [&str; N_MOTION_VARIABLES] = [
    "pitch", "roll", "yaw", "rotX", "rotY", "rotZ", "accX", "accY", "accZ", "gravX", "gravY",
    "gravZ", "magX", "magY", "magZ", "heading",
];

const STATUS: &str = "status";
const BUFFER: &str = "buffer";

#[derive(Deserialize)]
struct BridgeStatus {
    measuring: bool,
}

pub(crate) fn get_status_from_json(data: &Value) -> Result<bool, SensorError> {
    let status: BridgeStatus = serde_json::from_value(data[STATUS].clone()).map_err(|_| {
        SensorError::IncorrectDataFormat("Missing status.measuring".to_string())
    })?;
    Ok(status.measuring)
}

/// Returns the newest value in a named bridge buffer, or `None` when the
/// buffer holds no samples yet.
fn last_value(data: &Value, var: &str) -> Result<Option<f64>, SensorError> {
    let buffer = data
        .get(BUFFER)
        .and_then(|b| b.get(var))
        .and_then(|v| v.get(BUFFER))
        .ok_or(SensorError::IncorrectDataFormat(format!(
            "Missing buffer for {}",
            var
        )))?;
    let values = buffer
        .as_array()
        .ok_or(SensorError::IncorrectDataFormat(format!(
            "Invalid buffer format for {}",
            var
        )))?;
    Ok(values.last().and_then(|v| v.as_f64()))
}

fn required_value(data: &Value, var: &str) -> Result<f64, SensorError> {
    last_value(data, var)?.ok_or(SensorError::IncorrectDataFormat(format!(
        "Empty buffer for {}",
        var
    )))
}

/// Assembles the newest snapshot out of the bridge buffers. Returns
/// `Ok(None)` when no sample has been captured yet. A negative heading
/// means the platform could not derive one and decodes to `None`.
pub(crate) fn parse_reading(data: &Value) -> Result<Option<MotionReading>, SensorError> {
    let timestamp = match last_value(data, TIME_VAR)? {
        Some(t) => t,
        None => return Ok(None),
    };

    let attitude = Attitude::new(
        required_value(data, "pitch")?,
        required_value(data, "roll")?,
        required_value(data, "yaw")?,
    );
    let rotation_rate = XYZ::new([
        required_value(data, "rotX")?,
        required_value(data, "rotY")?,
        required_value(data, "rotZ")?,
    ]);
    let user_acceleration = XYZ::new([
        required_value(data, "accX")?,
        required_value(data, "accY")?,
        required_value(data, "accZ")?,
    ]);
    let gravity = XYZ::new([
        required_value(data, "gravX")?,
        required_value(data, "gravY")?,
        required_value(data, "gravZ")?,
    ]);
    let field = XYZ::new([
        required_value(data, "magX")?,
        required_value(data, "magY")?,
        required_value(data, "magZ")?,
    ]);
    let heading = last_value(data, "heading")?.filter(|h| *h >= 0.0);

    Ok(Some(MotionReading::new(
        timestamp,
        attitude,
        rotation_rate,
        user_acceleration,
        gravity,
        MagneticField::new(field, heading),
    )))
}

pub(crate) fn build_query() -> String {
    let variables: Vec<&str> = std::iter::once(TIME_VAR)
        .chain(MOTION_VARIABLES.iter().copied())
        .collect();
    variables.join("&")
}
