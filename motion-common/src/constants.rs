/// Number of coordinates in a 3-axis measurement.
pub const N_XYZ_COORDINATES: usize = 3;

/// Update interval requested by the device motion variant, in seconds.
pub const DEVICE_UPDATE_INTERVAL_SECS: f64 = 1.0 / 15.0;
