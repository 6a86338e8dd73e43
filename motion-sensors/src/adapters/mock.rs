// Emulates a motion sensor channel: synthesizes a smooth attitude orbit and
// the matching rotation rate, gravity and magnetic field, with optional
// Gaussian measurement noise. Can be told to fail after a number of samples
// to exercise the error path.

mod gaussian;

use std::f64::consts::PI;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::Notify;

use motion_common::types::{Attitude, Clock, MagneticField, MotionReading, ReferenceFrame, XYZ};

use crate::constants::DEFAULT_POLL_PERIOD_SECS;
use crate::models::errors::SensorError;
use crate::ports::{MotionPort, UpdateOptions};
use crate::services::MotionFeed;

use gaussian::GaussianNoise;

const GAUSSIAN_SENSOR_MEAN: f64 = 0.0;
const GAUSSIAN_SENSOR_STDEV: f64 = 0.02;
/// Horizontal and vertical components of the simulated field, microteslas.
const FIELD_HORIZONTAL_UT: f64 = 22.0;
const FIELD_VERTICAL_UT: f64 = -41.0;

/// Configures mock data acquisition
pub struct MockMotion {
    tag: String,
    capture_period_secs: f64,
    sensor_noise: Option<GaussianNoise>,
    fail_after: Option<usize>,
}

impl MockMotion {
    pub(crate) fn new(
        tag: &str,
        capture_period_millis: f64,
        add_sensor_noise: bool,
        fail_after: Option<usize>,
    ) -> Result<Self, SensorError> {
        if capture_period_millis <= 0.0 {
            return Err(SensorError::Other(format!(
                "Invalid capture period {} ms",
                capture_period_millis
            )));
        }
        Ok(Self {
            tag: tag.to_string(),
            capture_period_secs: capture_period_millis / 1000.0,
            sensor_noise: add_sensor_noise
                .then(|| GaussianNoise::new(GAUSSIAN_SENSOR_MEAN, GAUSSIAN_SENSOR_STDEV)),
            fail_after,
        })
    }

    /// Synthesizes the sample for elapsed time `t` since start.
    fn sample_at(&self, t: f64, frame: ReferenceFrame, rng: &mut StdRng) -> MotionReading {
        let pitch = 0.25 * (0.5 * t).sin();
        let roll = 0.4 * (0.3 * t).sin();
        // Slow turn; keep yaw within [-pi, pi)
        let yaw = (0.2 * t + PI).rem_euclid(2.0 * PI) - PI;
        let attitude = Attitude::new(pitch, roll, yaw);

        let rotation_rate = [
            0.125 * (0.5 * t).cos(),
            0.12 * (0.3 * t).cos(),
            0.2,
        ];
        let user_acceleration = [0.02 * (3.0 * t).sin(), 0.02 * (4.0 * t).cos(), 0.0];
        let gravity = [
            -roll.sin(),
            pitch.sin() * roll.cos(),
            -(pitch.cos() * roll.cos()),
        ];
        let field = [
            FIELD_HORIZONTAL_UT * yaw.cos(),
            -FIELD_HORIZONTAL_UT * yaw.sin(),
            FIELD_VERTICAL_UT,
        ];

        let (rotation_rate, user_acceleration, gravity, field) = match &self.sensor_noise {
            Some(noise) => (
                noise.add_noise_xyz(rng, rotation_rate),
                noise.add_noise_xyz(rng, user_acceleration),
                noise.add_noise_xyz(rng, gravity),
                noise.add_noise_xyz(rng, field),
            ),
            None => (rotation_rate, user_acceleration, gravity, field),
        };

        // A heading only exists when the frame references magnetic north.
        let heading = match frame {
            ReferenceFrame::XMagneticNorthZVertical | ReferenceFrame::XTrueNorthZVertical => {
                Some((-yaw).to_degrees().rem_euclid(360.0))
            }
            ReferenceFrame::XArbitraryZVertical => None,
        };

        MotionReading::new(
            Clock::now().as_secs(),
            attitude,
            XYZ::new(rotation_rate),
            XYZ::new(user_acceleration),
            XYZ::new(gravity),
            MagneticField::new(XYZ::new(field), heading),
        )
    }
}

#[async_trait]
impl MotionPort for MockMotion {
    async fn start_updates(
        &self,
        options: UpdateOptions,
        abort_signal: Arc<Notify>,
        feed: MotionFeed,
    ) -> Result<(), SensorError> {
        let period = options
            .interval
            .period_or(Duration::from_secs_f64(DEFAULT_POLL_PERIOD_SECS))
            .max(Duration::from_secs_f64(self.capture_period_secs));
        let mut rng = StdRng::from_entropy();
        let mut delivered = 0usize;
        let mut elapsed = 0.0;

        loop {
            tokio::select! {
                _ = abort_signal.notified() => {
                    break;
                }

                _ = tokio::time::sleep(period) => {
                    if let Some(fail_after) = self.fail_after {
                        if delivered >= fail_after {
                            return Err(SensorError::Unavailable(
                                "Mock sensor went away".to_string(),
                            ));
                        }
                    }
                    elapsed += period.as_secs_f64();
                    let reading = self.sample_at(elapsed, options.reference_frame, &mut rng);
                    feed.deliver(reading).await;
                    delivered += 1;
                }
            }
        }

        Ok(())
    }

    fn tag(&self) -> &str {
        self.tag.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_period() {
        assert!(MockMotion::new("Test", 0.0, false, None).is_err());
        assert!(MockMotion::new("Test", -5.0, false, None).is_err());
    }

    #[test]
    fn test_sample_gravity_is_unit_length() {
        let mock = MockMotion::new("Test", 10.0, false, None).unwrap();
        let mut rng = StdRng::from_entropy();
        for t in [0.0, 1.3, 7.9, 42.0] {
            let reading = mock.sample_at(t, ReferenceFrame::XArbitraryZVertical, &mut rng);
            let g = reading.gravity();
            let norm = (g.x() * g.x() + g.y() * g.y() + g.z() * g.z()).sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_heading_requires_north_referenced_frame() {
        let mock = MockMotion::new("Test", 10.0, false, None).unwrap();
        let mut rng = StdRng::from_entropy();
        let arbitrary = mock.sample_at(1.0, ReferenceFrame::XArbitraryZVertical, &mut rng);
        assert_eq!(arbitrary.magnetic_field().heading(), None);

        let north = mock.sample_at(1.0, ReferenceFrame::XMagneticNorthZVertical, &mut rng);
        let heading = north.magnetic_field().heading().unwrap();
        assert!((0.0..360.0).contains(&heading));
    }
}
