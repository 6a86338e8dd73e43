/// Poll period used when a subscription asks for the platform default
/// interval. Matches the headphone sensor's native delivery rate.
pub(crate) const DEFAULT_POLL_PERIOD_SECS: f64 = 0.04;

/// Reading fields delivered by the bridge, excluding the time variable.
pub(crate) const N_MOTION_VARIABLES: usize = 16;
