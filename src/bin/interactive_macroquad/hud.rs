use macroquad::prelude::*;
use projectile_motion::Projectile;
use projectile_motion::core::window::AxisWindow;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::render::{PlotArea, draw_ui_text, world_to_screen};
use crate::state::ViewerState;

pub(crate) fn draw_hud(
    state: &ViewerState,
    projectile: &Projectile,
    window: &AxisWindow,
    area: PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_range_label(projectile, window, area, font);
    draw_header_block(area, font);
    draw_status_block(state, projectile, area, screen_h, font);
}

fn draw_range_label(
    projectile: &Projectile,
    window: &AxisWindow,
    area: PlotArea,
    font: Option<&Font>,
) {
    let range = projectile.horizontal_range();
    let range_label = format!("{range:.2} m");
    let range_label_size = measure_text(&range_label, font, 18, 1.0);
    let landing_point = world_to_screen((range, 0.0), window, area);
    let min_x = area.left + 4.0;
    let max_x = (area.right - range_label_size.width - 4.0).max(min_x);
    let label_x = (landing_point.x - (range_label_size.width * 0.5)).clamp(min_x, max_x);
    let label_y = (landing_point.y - 12.0).max(area.top + 20.0);
    draw_ui_text(&range_label, label_x, label_y, 18, DARKGRAY, font);
}

fn draw_header_block(area: PlotArea, font: Option<&Font>) {
    draw_ui_text(
        "Projectile Motion Viewer",
        area.left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        "Controls: sliders for launch + time | Space play/pause | R reset | V velocity | C components",
        area.left + 12.0,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn draw_status_block(
    state: &ViewerState,
    projectile: &Projectile,
    area: PlotArea,
    screen_h: f32,
    font: Option<&Font>,
) {
    let t = state.time_instant(projectile);
    let (x, y) = projectile.position(t);
    let (vx, vy) = projectile.velocity(t);

    let lines = [
        format!(
            "v0 = {:.2} m/s | theta = {:.1} deg | g = {:.2} m/s^2",
            projectile.initial_speed(),
            projectile.launch_angle_deg(),
            projectile.gravity()
        ),
        format!(
            "Flight {:.2} s | Range {:.2} m | Max height {:.2} m | Apex at {:.2} s",
            projectile.time_of_flight(),
            projectile.horizontal_range(),
            projectile.maximum_height(),
            projectile.time_to_apex()
        ),
        format!("t = {t:.2} s | position ({x:.2}, {y:.2}) m | velocity ({vx:.2}, {vy:.2}) m/s"),
    ];

    let base_y = (screen_h - 70.0).max(area.bottom + 60.0);
    for (i, line) in lines.iter().enumerate() {
        draw_ui_text(line, area.left, base_y + (i as f32 * 24.0), 20, DARKGRAY, font);
    }
}
