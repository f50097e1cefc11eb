use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use log::debug;
use projectile_motion::plot::{PlotOptions, parse_color, plot_trajectory};
use projectile_motion::{EARTH_GRAVITY_MPS2, Projectile};

#[derive(Parser, Debug)]
#[command(name = "projectile_motion")]
#[command(about = "Ideal projectile motion: range, flight time, apex and state at an instant")]
struct Cli {
    /// Launch speed (m/s); prompted for when omitted
    #[arg(short = 'v', long)]
    speed: Option<f64>,

    /// Launch angle above the horizontal (degrees); prompted for when omitted
    #[arg(short = 'a', long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Gravitational acceleration (m/s^2)
    #[arg(short = 'g', long, default_value_t = EARTH_GRAVITY_MPS2)]
    gravity: f64,

    /// Instant to report and highlight (s)
    #[arg(short = 't', long, default_value_t = 0.0, allow_negative_numbers = true)]
    time: f64,

    /// Sampling step for the plotted trajectory (s)
    #[arg(long, default_value_t = 0.01)]
    dt: f64,

    /// Write a plot (.png or .svg); defaults to a timestamped PNG
    #[arg(long, num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,

    /// Leave out the velocity vector
    #[arg(long)]
    no_velocity: bool,

    /// Leave out the velocity components
    #[arg(long)]
    no_components: bool,

    #[arg(long, default_value = "red")]
    projectile_color: String,

    #[arg(long, default_value = "green")]
    velocity_color: String,

    #[arg(long, default_value = "blue")]
    x_velocity_color: String,

    #[arg(long, default_value = "orange")]
    y_velocity_color: String,
}

fn parse_f64(value: &str, label: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid {label}: '{}'. Expected a number.", value.trim()))
}

fn read_f64(prompt: &str, label: &str) -> Result<f64, String> {
    loop {
        print!("{prompt}");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {e}"))?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .map_err(|e| format!("Could not read input: {e}"))?;

        if bytes == 0 {
            return Err("Input ended unexpectedly (EOF).".to_string());
        }

        match parse_f64(&line, label) {
            Ok(v) => return Ok(v),
            Err(err) => eprintln!("{err} Please enter e.g. 45 or 12.5."),
        }
    }
}

fn default_plot_path() -> PathBuf {
    PathBuf::from(format!(
        "trajectory_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn plot_options(cli: &Cli) -> Result<PlotOptions, String> {
    Ok(PlotOptions {
        dt_s: cli.dt,
        velocity_vector: !cli.no_velocity,
        components: !cli.no_components,
        time_instant_s: cli.time,
        projectile_color: parse_color(&cli.projectile_color).map_err(|e| e.to_string())?,
        velocity_color: parse_color(&cli.velocity_color).map_err(|e| e.to_string())?,
        x_velocity_color: parse_color(&cli.x_velocity_color).map_err(|e| e.to_string())?,
        y_velocity_color: parse_color(&cli.y_velocity_color).map_err(|e| e.to_string())?,
        ..PlotOptions::default()
    })
}

fn build_projectile(
    speed_mps: f64,
    angle_deg: f64,
    gravity_mps2: f64,
) -> Result<Projectile, String> {
    if !angle_deg.is_finite() || !speed_mps.is_finite() || !gravity_mps2.is_finite() {
        return Err("Inputs must be finite numbers.".to_string());
    }
    if gravity_mps2 <= 0.0 {
        return Err(format!("Gravity must be positive, got {gravity_mps2} m/s^2."));
    }
    Ok(Projectile::new(speed_mps, angle_deg).with_gravity(gravity_mps2))
}

fn summary(projectile: &Projectile) -> String {
    format!(
        "Time of flight: {:.2} s\n\
         Horizontal range: {:.2} m\n\
         Maximum height: {:.2} m\n\
         Time to apex: {:.2} s",
        projectile.time_of_flight(),
        projectile.horizontal_range(),
        projectile.maximum_height(),
        projectile.time_to_apex(),
    )
}

fn state_at(projectile: &Projectile, time_s: f64) -> Result<String, String> {
    projectile
        .check_valid_time_instant(time_s)
        .map_err(|e| e.to_string())?;

    let (x, y) = projectile.position(time_s);
    let (vx, vy) = projectile.velocity(time_s);
    Ok(format!(
        "At t = {time_s} s: position = ({x:.2}, {y:.2}) m, velocity = ({vx:.2}, {vy:.2}) m/s"
    ))
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    debug!("{cli:?}");

    let angle_deg = match cli.angle {
        Some(angle) => angle,
        None => read_f64("Angle (degrees): ", "angle")?,
    };
    let speed_mps = match cli.speed {
        Some(speed) => speed,
        None => read_f64("Velocity (m/s): ", "velocity")?,
    };

    let projectile = build_projectile(speed_mps, angle_deg, cli.gravity)?;
    println!("\n{}", summary(&projectile));
    println!("{}", state_at(&projectile, cli.time)?);

    if let Some(target) = &cli.plot {
        let path = target.clone().unwrap_or_else(default_plot_path);
        let options = plot_options(&cli)?;
        plot_trajectory(&projectile, &options, &path).map_err(|e| e.to_string())?;
        println!("Plot written to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
