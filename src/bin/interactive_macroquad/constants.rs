use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 130.0;
pub const BOTTOM_MARGIN: f32 = 150.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 88.0;
pub const TRAJECTORY_DT_S: f64 = 0.01;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const DEFAULT_ANGLE_DEG: f32 = 45.0;
pub const DEFAULT_SPEED_MPS: f32 = 50.0;
pub const DEFAULT_GRAVITY_MPS2: f32 = 9.8;
pub const MIN_GRAVITY_MPS2: f32 = 0.5;

pub const PROJECTILE_RADIUS: f32 = 8.0;
pub const ARROW_HEAD_PX: f32 = 14.0;
pub const ARROW_THICKNESS: f32 = 3.0;

pub const BACKGROUND: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const TRAJECTORY_COLOR: Color = Color::new(0.1, 0.1, 0.12, 1.0);
pub const PROJECTILE_COLOR: Color = Color::new(0.86, 0.12, 0.12, 1.0);
pub const VELOCITY_COLOR: Color = Color::new(0.1, 0.6, 0.2, 1.0);
pub const X_VELOCITY_COLOR: Color = Color::new(0.14, 0.35, 0.9, 1.0);
pub const Y_VELOCITY_COLOR: Color = Color::new(0.96, 0.6, 0.05, 1.0);
