use log::warn;
use macroquad::prelude::*;
use projectile_motion::core::window::AxisWindow;

use crate::constants::{
    BACKGROUND, BOTTOM_MARGIN, GRID_COLOR, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH,
    LEFT_MARGIN, MSAA_SAMPLES, PROJECTILE_COLOR, PROJECTILE_RADIUS, RIGHT_MARGIN, TOP_MARGIN,
    TRAJECTORY_COLOR, TRAJECTORY_DT_S, UI_FONT_PATH, VELOCITY_COLOR, X_VELOCITY_COLOR,
    Y_VELOCITY_COLOR,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{
    PlotArea, draw_arrow, draw_axes, draw_axis_tick_labels, draw_grid, draw_path,
    world_to_screen,
};
use crate::state::ViewerState;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Motion".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = ViewerState::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        state.apply(actions);
        state.advance(frame_dt);
        state.clamp_time();

        let projectile = state.projectile();
        let t = state.time_instant(&projectile);
        let points: Vec<(f64, f64)> = match projectile.sample(TRAJECTORY_DT_S) {
            Ok(samples) => samples.iter().map(|s| s.position).collect(),
            Err(err) => {
                warn!("Could not sample trajectory: {err}");
                Vec::new()
            }
        };
        let position = projectile.position(t);
        let velocity = projectile.velocity(t);

        let mut extent = points.clone();
        if state.show_velocity {
            extent.push((position.0 + velocity.0, position.1 + velocity.1));
        }
        let window = AxisWindow::enclosing(extent);

        clear_background(BACKGROUND);
        draw_grid(area, GRID_COLOR);
        draw_axes(&window, area);
        draw_axis_tick_labels(&window, area, ui_font.as_ref());
        draw_path(&points, &window, area, 2.5, TRAJECTORY_COLOR);

        if state.show_velocity {
            if state.show_components {
                draw_arrow(position, (velocity.0, 0.0), &window, area, X_VELOCITY_COLOR);
                draw_arrow(position, (0.0, velocity.1), &window, area, Y_VELOCITY_COLOR);
            }
            draw_arrow(position, velocity, &window, area, VELOCITY_COLOR);
        }

        let p = world_to_screen(position, &window, area);
        draw_circle(p.x, p.y, PROJECTILE_RADIUS, PROJECTILE_COLOR);
        draw_circle_lines(p.x, p.y, PROJECTILE_RADIUS, 2.0, MAROON);

        draw_hud(&state, &projectile, &window, area, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
