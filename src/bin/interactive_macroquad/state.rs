use projectile_motion::Projectile;

use crate::constants::{
    DEFAULT_ANGLE_DEG, DEFAULT_GRAVITY_MPS2, DEFAULT_SPEED_MPS, MIN_GRAVITY_MPS2,
};
use crate::controls::FrameActions;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LaunchConfig {
    pub(crate) angle_deg: f32,
    pub(crate) speed_mps: f32,
    pub(crate) gravity_mps2: f32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            speed_mps: DEFAULT_SPEED_MPS,
            gravity_mps2: DEFAULT_GRAVITY_MPS2,
        }
    }
}

pub(crate) struct ViewerState {
    pub(crate) config: LaunchConfig,
    pub(crate) time_instant_s: f32,
    pub(crate) playing: bool,
    pub(crate) show_velocity: bool,
    pub(crate) show_components: bool,
}

impl ViewerState {
    pub(crate) fn new() -> Self {
        Self {
            config: LaunchConfig::default(),
            time_instant_s: 0.0,
            playing: false,
            show_velocity: true,
            show_components: true,
        }
    }

    pub(crate) fn projectile(&self) -> Projectile {
        // Sliders can reach the bottom of their range; keep g positive.
        let gravity = self.config.gravity_mps2.max(MIN_GRAVITY_MPS2);
        Projectile::new(f64::from(self.config.speed_mps), f64::from(self.config.angle_deg))
            .with_gravity(f64::from(gravity))
    }

    pub(crate) fn time_of_flight_s(&self) -> f32 {
        self.projectile().time_of_flight().max(0.0) as f32
    }

    /// Highlighted instant in the projectile's own precision.
    pub(crate) fn time_instant(&self, projectile: &Projectile) -> f64 {
        f64::from(self.time_instant_s).clamp(0.0, projectile.time_of_flight().max(0.0))
    }

    /// Keeps the highlighted instant inside `[0, time_of_flight]`.
    pub(crate) fn clamp_time(&mut self) {
        self.time_instant_s = self.time_instant_s.clamp(0.0, self.time_of_flight_s());
    }

    pub(crate) fn advance(&mut self, frame_dt: f32) {
        if !self.playing {
            return;
        }
        let end = self.time_of_flight_s();
        self.time_instant_s += frame_dt;
        if self.time_instant_s >= end {
            self.time_instant_s = end;
            self.playing = false;
        }
    }

    pub(crate) fn apply(&mut self, actions: FrameActions) {
        if actions.reset {
            *self = Self::new();
            return;
        }
        if actions.play_pause {
            if !self.playing && self.time_instant_s >= self.time_of_flight_s() {
                self.time_instant_s = 0.0;
            }
            self.playing = !self.playing;
        }
        if actions.toggle_velocity {
            self.show_velocity = !self.show_velocity;
        }
        if actions.toggle_components {
            self.show_components = !self.show_components;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewerState;
    use crate::controls::FrameActions;

    #[test]
    fn default_launch_matches_reference_shot() {
        let state = ViewerState::new();
        let p = state.projectile();
        assert_eq!(p.time_of_flight(), 7.22);
        assert_eq!(state.time_of_flight_s(), 7.22f64 as f32);
    }

    #[test]
    fn clamped_time_always_passes_instant_check() {
        let mut state = ViewerState::new();
        for t in [-3.0, 0.0, 4.0, 7.22, 100.0] {
            state.time_instant_s = t;
            state.clamp_time();
            let p = state.projectile();
            assert!(p.check_valid_time_instant(state.time_instant(&p)).is_ok());
        }
    }

    #[test]
    fn playback_stops_at_landing() {
        let mut state = ViewerState::new();
        state.apply(FrameActions {
            play_pause: true,
            ..Default::default()
        });
        assert!(state.playing);

        state.advance(5.0);
        assert!(state.playing);
        state.advance(5.0);
        assert!(!state.playing);
        assert_eq!(state.time_instant_s, state.time_of_flight_s());
    }

    #[test]
    fn replay_after_landing_restarts_from_launch() {
        let mut state = ViewerState::new();
        state.time_instant_s = state.time_of_flight_s();
        state.apply(FrameActions {
            play_pause: true,
            ..Default::default()
        });
        assert!(state.playing);
        assert_eq!(state.time_instant_s, 0.0);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = ViewerState::new();
        state.config.angle_deg = 10.0;
        state.show_velocity = false;
        state.apply(FrameActions {
            reset: true,
            ..Default::default()
        });
        assert_eq!(state.config.angle_deg, 45.0);
        assert!(state.show_velocity);
    }

    #[test]
    fn low_gravity_slider_is_floored() {
        let mut state = ViewerState::new();
        state.config.gravity_mps2 = 0.0;
        assert_eq!(state.projectile().gravity(), 0.5);
    }
}
