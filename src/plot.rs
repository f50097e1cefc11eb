use std::error::Error;
use std::fmt;
use std::path::Path;

use log::info;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::error::ProjectileError;
use crate::core::projectile::{Projectile, TrajectorySample};
use crate::core::window::AxisWindow;

pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const GRAY: RGBColor = RGBColor(128, 128, 128);

const ARROW_WING_RAD: f64 = 0.45;
const ARROW_HEAD_WINDOW_RATIO: f64 = 0.025;
const PROJECTILE_MARKER_PX: i32 = 8;

#[derive(Debug)]
pub enum PlotError {
    Projectile(ProjectileError),
    UnsupportedFormat(String),
    Drawing(String),
    InvalidColor(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlotError::Projectile(err) => write!(f, "{err}"),
            PlotError::UnsupportedFormat(path) => {
                write!(f, "Unsupported plot format for '{path}'. Use a .png or .svg file.")
            }
            PlotError::Drawing(msg) => write!(f, "Drawing failed: {msg}"),
            PlotError::InvalidColor(name) => write!(
                f,
                "Unknown color '{name}'. Use a color name (e.g. red) or #rrggbb."
            ),
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::Projectile(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProjectileError> for PlotError {
    fn from(err: ProjectileError) -> Self {
        PlotError::Projectile(err)
    }
}

fn drawing_err<E: fmt::Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}

/// What to draw besides the trajectory itself.
#[derive(Clone, Copy, Debug)]
pub struct PlotOptions {
    pub dt_s: f64,
    pub velocity_vector: bool,
    /// Horizontal and vertical velocity arrows; only drawn with `velocity_vector`.
    pub components: bool,
    pub time_instant_s: f64,
    pub projectile_color: RGBColor,
    pub velocity_color: RGBColor,
    pub x_velocity_color: RGBColor,
    pub y_velocity_color: RGBColor,
    pub size: (u32, u32),
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            dt_s: 0.01,
            velocity_vector: true,
            components: true,
            time_instant_s: 0.0,
            projectile_color: RED,
            velocity_color: GREEN,
            x_velocity_color: BLUE,
            y_velocity_color: ORANGE,
            size: (1280, 720),
        }
    }
}

/// Accepts a handful of color names or a `#rrggbb` hex triplet.
pub fn parse_color(value: &str) -> Result<RGBColor, PlotError> {
    let name = value.trim().to_ascii_lowercase();
    let color = match name.as_str() {
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "orange" => ORANGE,
        "black" => BLACK,
        "white" => WHITE,
        "yellow" => YELLOW,
        "cyan" => CYAN,
        "magenta" => MAGENTA,
        "purple" => PURPLE,
        "gray" | "grey" => GRAY,
        hex => parse_hex_color(hex).ok_or_else(|| PlotError::InvalidColor(value.to_string()))?,
    };
    Ok(color)
}

fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Polyline for an arrow from `from` along `delta`: shaft, then both wings.
fn arrow_path(from: (f64, f64), delta: (f64, f64), head_len: f64) -> Vec<(f64, f64)> {
    let to = (from.0 + delta.0, from.1 + delta.1);
    let length = delta.0.hypot(delta.1);
    if length <= f64::EPSILON {
        return vec![from];
    }

    let (ux, uy) = (delta.0 / length, delta.1 / length);
    let head = head_len.min(length * 0.3);
    let (cos_w, sin_w) = (ARROW_WING_RAD.cos(), ARROW_WING_RAD.sin());
    let left = (
        to.0 - head * (ux * cos_w - uy * sin_w),
        to.1 - head * (ux * sin_w + uy * cos_w),
    );
    let right = (
        to.0 - head * (ux * cos_w + uy * sin_w),
        to.1 - head * (uy * cos_w - ux * sin_w),
    );
    vec![from, to, left, to, right]
}

/// Renders the trajectory of `projectile` to `path` (`.png` or `.svg`).
///
/// The instant in `options` is validated before anything is written.
pub fn plot_trajectory<P: AsRef<Path>>(
    projectile: &Projectile,
    options: &PlotOptions,
    path: P,
) -> Result<(), PlotError> {
    projectile.check_valid_time_instant(options.time_instant_s)?;
    let samples = projectile.sample(options.dt_s)?;

    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => {
            let root = BitMapBackend::new(path, options.size).into_drawing_area();
            draw(root, projectile, &samples, options)?;
        }
        Some("svg") => {
            let root = SVGBackend::new(path, options.size).into_drawing_area();
            draw(root, projectile, &samples, options)?;
        }
        _ => return Err(PlotError::UnsupportedFormat(path.display().to_string())),
    }

    info!("Wrote trajectory plot to {}", path.display());
    Ok(())
}

/// Window holding the sampled path, the marker and every arrow drawn at the
/// instant in `options`.
fn plot_window(
    projectile: &Projectile,
    samples: &[TrajectorySample],
    options: &PlotOptions,
) -> AxisWindow {
    let (x, y) = projectile.position(options.time_instant_s);
    let (vx, vy) = projectile.velocity(options.time_instant_s);

    let mut extent: Vec<(f64, f64)> = samples.iter().map(|s| s.position).collect();
    extent.push((x, y));
    if options.velocity_vector {
        extent.push((x + vx, y + vy));
        if options.components {
            extent.push((x + vx, y));
            extent.push((x, y + vy));
        }
    }
    AxisWindow::enclosing(extent)
}

fn draw<DB: DrawingBackend>(
    root: DrawingArea<DB, Shift>,
    projectile: &Projectile,
    samples: &[TrajectorySample],
    options: &PlotOptions,
) -> Result<(), PlotError> {
    root.fill(&WHITE).map_err(drawing_err)?;

    let instant = options.time_instant_s;
    let (x, y) = projectile.position(instant);
    let (vx, vy) = projectile.velocity(instant);

    let window = plot_window(projectile, samples, options);
    let head_len = window.x_span() * ARROW_HEAD_WINDOW_RATIO;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Projectile at t = {instant}s"), ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)
        .map_err(drawing_err)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(drawing_err)?;

    chart
        .draw_series(LineSeries::new(samples.iter().map(|s| s.position), &BLACK))
        .map_err(drawing_err)?
        .label("Trajectory")
        .legend(|(lx, ly)| PathElement::new(vec![(lx, ly), (lx + 20, ly)], BLACK));

    let mut arrows = Vec::new();
    if options.velocity_vector {
        arrows.push((
            "Velocity",
            options.velocity_color,
            arrow_path((x, y), (vx, vy), head_len),
        ));
        if options.components {
            arrows.push((
                "Vx",
                options.x_velocity_color,
                arrow_path((x, y), (vx, 0.0), head_len),
            ));
            arrows.push((
                "Vy",
                options.y_velocity_color,
                arrow_path((x, y), (0.0, vy), head_len),
            ));
        }
    }

    for (label, color, points) in arrows {
        chart
            .draw_series(std::iter::once(PathElement::new(
                points,
                color.stroke_width(2),
            )))
            .map_err(drawing_err)?
            .label(label)
            .legend(move |(lx, ly)| {
                PathElement::new(vec![(lx, ly), (lx + 20, ly)], color.stroke_width(2))
            });
    }

    let projectile_color = options.projectile_color;
    chart
        .draw_series(std::iter::once(Circle::new(
            (x, y),
            PROJECTILE_MARKER_PX,
            projectile_color.filled(),
        )))
        .map_err(drawing_err)?
        .label("Projectile")
        .legend(move |(lx, ly)| Circle::new((lx + 10, ly), 5, projectile_color.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 14))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(drawing_err)?;

    root.present().map_err(drawing_err)?;
    Ok(())
}
