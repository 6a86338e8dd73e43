use std::time::Duration;

use crate::constants::DEVICE_UPDATE_INTERVAL_SECS;

/// Requested update period for a motion subscription. The platform treats
/// the interval as a request, not a guarantee.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum UpdateInterval {
    /// Let the platform pick its own delivery rate.
    #[default]
    PlatformDefault,
    Period(Duration),
}

impl UpdateInterval {
    /// The 1/15 s interval requested by the device motion variant.
    pub fn device_default() -> Self {
        Self::Period(Duration::from_secs_f64(DEVICE_UPDATE_INTERVAL_SECS))
    }

    /// Resolves to a concrete period, falling back when the platform default
    /// was requested.
    pub fn period_or(&self, fallback: Duration) -> Duration {
        match self {
            UpdateInterval::PlatformDefault => fallback,
            UpdateInterval::Period(period) => *period,
        }
    }
}
