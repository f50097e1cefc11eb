use std::error::Error;
use std::fmt;

use crate::core::projectile::MAX_TRAJECTORY_SAMPLES;

/// Errors raised by [`Projectile`](crate::core::projectile::Projectile) queries.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectileError {
    /// The requested instant lies outside `[0, time_of_flight]`.
    InvalidTimeInstant { time_s: f64, time_of_flight_s: f64 },
    /// A sampling step that is zero, negative or not finite.
    InvalidTimeStep(f64),
    /// The flight is infinite or too long to sample at the requested step.
    TooManySamples { time_of_flight_s: f64, dt_s: f64 },
}

impl fmt::Display for ProjectileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProjectileError::InvalidTimeInstant {
                time_of_flight_s, ..
            } => write!(f, "Time must be within [0, {time_of_flight_s}] seconds."),
            ProjectileError::InvalidTimeStep(dt) => {
                write!(f, "Time step must be a positive finite number, got {dt}.")
            }
            ProjectileError::TooManySamples {
                time_of_flight_s,
                dt_s,
            } => write!(
                f,
                "Cannot sample a {time_of_flight_s} s flight every {dt_s} s \
                 (at most {MAX_TRAJECTORY_SAMPLES} samples)."
            ),
        }
    }
}

impl Error for ProjectileError {}

#[cfg(test)]
mod tests {
    use super::ProjectileError;

    #[test]
    fn time_instant_message_states_closed_interval() {
        let err = ProjectileError::InvalidTimeInstant {
            time_s: 8.0,
            time_of_flight_s: 7.21,
        };
        assert_eq!(err.to_string(), "Time must be within [0, 7.21] seconds.");
    }

    #[test]
    fn time_step_message_includes_value() {
        let err = ProjectileError::InvalidTimeStep(-0.5);
        assert!(err.to_string().contains("-0.5"));
    }

    #[test]
    fn sample_cap_message_names_flight_and_step() {
        let err = ProjectileError::TooManySamples {
            time_of_flight_s: f64::INFINITY,
            dt_s: 0.01,
        };
        let message = err.to_string();
        assert!(message.contains("inf s flight"));
        assert!(message.contains("every 0.01 s"));
    }
}
