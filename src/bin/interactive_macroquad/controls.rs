use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::state::ViewerState;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) play_pause: bool,
    pub(crate) reset: bool,
    pub(crate) toggle_velocity: bool,
    pub(crate) toggle_components: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            play_pause: self.play_pause || other.play_pause,
            reset: self.reset || other.reset,
            toggle_velocity: self.toggle_velocity || other.toggle_velocity,
            toggle_components: self.toggle_components || other.toggle_components,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        play_pause: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        toggle_velocity: is_key_pressed(KeyCode::V),
        toggle_components: is_key_pressed(KeyCode::C),
    }
}

pub(crate) fn draw_control_panel(state: &mut ViewerState) -> FrameActions {
    let time_of_flight = state.time_of_flight_s();
    // The slider needs a non-empty range even for a flat launch.
    let time_slider_max = time_of_flight.max(0.01);

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 120.0), vec2(360.0, 330.0))
        .label("Launch")
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Angle (deg)",
                0.0..90.0,
                &mut state.config.angle_deg,
            );
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                1.0..200.0,
                &mut state.config.speed_mps,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                0.5..30.0,
                &mut state.config.gravity_mps2,
            );
            ui.separator();
            ui.slider(
                hash!(),
                "Time (s)",
                0.0..time_slider_max,
                &mut state.time_instant_s,
            );
            ui.separator();
            if ui.button(None, if state.playing { "Pause (Space)" } else { "Play (Space)" }) {
                actions.play_pause = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, "Toggle Velocity (V)") {
                actions.toggle_velocity = true;
            }
            if ui.button(None, "Toggle Components (C)") {
                actions.toggle_components = true;
            }
            ui.label(None, &format!("Time of flight: {time_of_flight:.2} s"));
        });

    actions
}
