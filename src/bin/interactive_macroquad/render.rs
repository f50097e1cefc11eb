use macroquad::prelude::*;
use projectile_motion::core::window::AxisWindow;

use crate::constants::{ARROW_HEAD_PX, ARROW_THICKNESS, X_GRID_LINES, Y_GRID_LINES};

/// Screen rectangle the data window is mapped onto.
#[derive(Clone, Copy)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }
}

pub(crate) fn world_to_screen(world: (f64, f64), window: &AxisWindow, area: PlotArea) -> Vec2 {
    let span_x = window.x_span().max(1.0);
    let span_y = window.y_span().max(1.0);
    let x = area.left + (((world.0 - window.x_min) / span_x) as f32) * area.width();
    let y = area.bottom - (((world.1 - window.y_min) / span_y) as f32) * area.height();
    vec2(x, y)
}

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axes(window: &AxisWindow, area: PlotArea) {
    let origin = world_to_screen((0.0, 0.0), window, area);
    draw_line(area.left, origin.y, area.right, origin.y, 2.0, DARKGRAY);
    draw_line(origin.x, area.top, origin.x, area.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(window: &AxisWindow, area: PlotArea, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        let value = window.x_min + f64::from(t) * window.x_span();
        let label = format_axis_value(value, window.x_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        let value = window.y_min + f64::from(t) * window.y_span();
        let label = format_axis_value(value, window.y_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text("x (m)", area.right - 60.0, area.bottom + 48.0, 18, label_color, font);
    draw_ui_text("y (m)", area.left + 10.0, area.top - 8.0, 18, label_color, font);
}

pub(crate) fn draw_path(
    points: &[(f64, f64)],
    window: &AxisWindow,
    area: PlotArea,
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let mut prev = world_to_screen(points[0], window, area);
    for point in points.iter().skip(1).copied() {
        let cur = world_to_screen(point, window, area);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

/// Arrow from `from` along `delta`, both in world units.
pub(crate) fn draw_arrow(
    from: (f64, f64),
    delta: (f64, f64),
    window: &AxisWindow,
    area: PlotArea,
    color: Color,
) {
    let start = world_to_screen(from, window, area);
    let end = world_to_screen((from.0 + delta.0, from.1 + delta.1), window, area);
    let shaft = end - start;
    if shaft.length_squared() < 1e-6 {
        return;
    }

    draw_line(start.x, start.y, end.x, end.y, ARROW_THICKNESS, color);
    let dir = shaft.normalize();
    let head = ARROW_HEAD_PX.min(shaft.length() * 0.4);
    let back = end - dir * head;
    let side = vec2(-dir.y, dir.x) * (head * 0.5);
    draw_triangle(end, back + side, back - side, color);
}
