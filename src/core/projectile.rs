use log::{debug, warn};

use crate::core::error::ProjectileError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
pub const MAX_TRAJECTORY_SAMPLES: usize = 1_000_000;

/// Rounds to two decimal places, ties to even.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Ideal drag-free projectile launched from the origin.
///
/// Speed and gravity are taken as given: a zero or negative speed produces a
/// degenerate or mirrored trajectory, and `gravity == 0` makes the derived
/// scalars divide by zero. Keeping `gravity` positive is up to the caller.
///
/// Every public numeric output is rounded to two decimal places.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    speed_mps: f64,
    angle_rad: f64,
    gravity_mps2: f64,
}

/// One point of a sampled trajectory, as consumed by renderers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub position: (f64, f64),
    pub velocity: (f64, f64),
}

impl Projectile {
    /// Launch at `angle_deg` degrees above the horizontal under Earth gravity.
    pub fn new(speed_mps: f64, angle_deg: f64) -> Self {
        Self::from_radians(speed_mps, angle_deg.to_radians())
    }

    pub fn from_radians(speed_mps: f64, angle_rad: f64) -> Self {
        debug!("projectile: v0={speed_mps} m/s, theta={angle_rad} rad");
        Self {
            speed_mps,
            angle_rad,
            gravity_mps2: EARTH_GRAVITY_MPS2,
        }
    }

    /// Same launch under a different gravitational acceleration.
    pub fn with_gravity(self, gravity_mps2: f64) -> Self {
        if gravity_mps2 <= 0.0 || !gravity_mps2.is_finite() {
            warn!("Gravity of {gravity_mps2} m/s^2 is not positive; derived scalars are undefined");
        }
        Self {
            gravity_mps2,
            ..self
        }
    }

    pub fn initial_speed(&self) -> f64 {
        self.speed_mps
    }

    /// Launch angle in radians.
    pub fn launch_angle(&self) -> f64 {
        self.angle_rad
    }

    pub fn launch_angle_deg(&self) -> f64 {
        self.angle_rad.to_degrees()
    }

    pub fn gravity(&self) -> f64 {
        self.gravity_mps2
    }

    fn velocity_components(&self) -> (f64, f64) {
        let vx = self.speed_mps * self.angle_rad.cos();
        let vy = self.speed_mps * self.angle_rad.sin();
        (vx, vy)
    }

    /// Position `(x, y)` at `time_s`. No bound is enforced on the instant.
    pub fn position(&self, time_s: f64) -> (f64, f64) {
        let (vx, vy) = self.velocity_components();
        let x = vx * time_s;
        let y = (vy * time_s) - (0.5 * self.gravity_mps2 * time_s * time_s);
        (round_to_hundredths(x), round_to_hundredths(y))
    }

    /// Shorthand for [`position`](Self::position).
    pub fn at(&self, time_s: f64) -> (f64, f64) {
        self.position(time_s)
    }

    /// Velocity `(vx, vy)` at `time_s`; `vx` is constant.
    pub fn velocity(&self, time_s: f64) -> (f64, f64) {
        let (vx, vy) = self.velocity_components();
        (
            round_to_hundredths(vx),
            round_to_hundredths(vy - self.gravity_mps2 * time_s),
        )
    }

    pub fn horizontal_range(&self) -> f64 {
        round_to_hundredths(
            (self.speed_mps * self.speed_mps * (2.0 * self.angle_rad).sin()) / self.gravity_mps2,
        )
    }

    pub fn time_of_flight(&self) -> f64 {
        round_to_hundredths((2.0 * self.speed_mps * self.angle_rad.sin()) / self.gravity_mps2)
    }

    /// Instant at which the vertical velocity crosses zero.
    pub fn time_to_apex(&self) -> f64 {
        round_to_hundredths((self.speed_mps * self.angle_rad.sin()) / self.gravity_mps2)
    }

    pub fn maximum_height(&self) -> f64 {
        let sin_theta = self.angle_rad.sin();
        round_to_hundredths(
            (self.speed_mps * self.speed_mps * sin_theta * sin_theta) / (2.0 * self.gravity_mps2),
        )
    }

    /// Fails unless `0 <= time_s <= time_of_flight()`.
    pub fn check_valid_time_instant(&self, time_s: f64) -> Result<(), ProjectileError> {
        let time_of_flight_s = self.time_of_flight();
        if (0.0..=time_of_flight_s).contains(&time_s) {
            Ok(())
        } else {
            Err(ProjectileError::InvalidTimeInstant {
                time_s,
                time_of_flight_s,
            })
        }
    }

    /// Samples the flight every `dt_s` seconds from launch, closing the series
    /// with a sample exactly at `time_of_flight()`.
    ///
    /// Fails when the flight time is not finite (e.g. zero gravity) or would
    /// need more than [`MAX_TRAJECTORY_SAMPLES`] points.
    pub fn sample(&self, dt_s: f64) -> Result<Vec<TrajectorySample>, ProjectileError> {
        if !dt_s.is_finite() || dt_s <= 0.0 {
            return Err(ProjectileError::InvalidTimeStep(dt_s));
        }

        let time_of_flight_s = self.time_of_flight();
        let steps = (time_of_flight_s / dt_s).ceil();
        if !time_of_flight_s.is_finite() || steps > MAX_TRAJECTORY_SAMPLES as f64 {
            return Err(ProjectileError::TooManySamples {
                time_of_flight_s,
                dt_s,
            });
        }

        // Negative flights give a negative step count, which saturates to 0.
        let mut samples: Vec<TrajectorySample> = (0..=steps as u64)
            .map(|i| i as f64 * dt_s)
            .take_while(|t| *t < time_of_flight_s)
            .map(|t| self.sample_at(t))
            .collect();

        if time_of_flight_s > 0.0 {
            samples.push(self.sample_at(time_of_flight_s));
        } else {
            samples = vec![self.sample_at(0.0)];
        }

        debug!(
            "sampled {} points over {time_of_flight_s} s (dt={dt_s})",
            samples.len()
        );
        Ok(samples)
    }

    fn sample_at(&self, time_s: f64) -> TrajectorySample {
        TrajectorySample {
            time_s,
            position: self.position(time_s),
            velocity: self.velocity(time_s),
        }
    }
}
