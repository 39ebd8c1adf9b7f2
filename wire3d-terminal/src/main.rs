use anyhow::Result;
use clap::Parser;
use crossterm::terminal;

use wire3d_core::{Camera, Vec3, Wireframe};
use wire3d_terminal::{SpinRates, TerminalApp};

/// Wire3D — spinning wireframe renderer for the terminal.
///
/// Controls:
///   - WASD / Arrow Keys: nudge the rotation
///   - E/R: nudge the roll
///   - Q/ESC: quit
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Screen width in cells. Default: terminal width.
    #[arg(long)]
    width: Option<usize>,

    /// Screen height in cells. Default: terminal height.
    #[arg(long)]
    height: Option<usize>,

    /// Target frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Camera field of view, in degrees (exclusive 0..180).
    #[arg(long, default_value_t = 90.0)]
    fov: f64,

    /// Camera distance from the origin.
    #[arg(long, default_value_t = 4.0)]
    distance: f64,

    /// Edge length of the demo cube.
    #[arg(long, default_value_t = 2.0)]
    cube: f64,

    /// Yaw rate in radians per second.
    #[arg(long, default_value_t = 0.45)]
    yaw_rate: f64,

    /// Pitch rate in radians per second.
    #[arg(long, default_value_t = 2.6)]
    pitch_rate: f64,

    /// Roll rate in radians per second.
    #[arg(long, default_value_t = 0.9)]
    roll_rate: f64,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    if !(cli.fov > 0.0 && cli.fov < 180.0) {
        anyhow::bail!("--fov must be strictly between 0 and 180 degrees");
    }

    let (term_width, term_height) = terminal::size().unwrap_or((80, 40));
    let width = cli.width.unwrap_or(term_width as usize);
    let height = cli.height.unwrap_or(term_height as usize);
    if width == 0 || height == 0 {
        anyhow::bail!("screen dimensions must be positive");
    }

    let camera = Camera::new(
        cli.fov.to_radians(),
        Vec3::new(0.0, 0.0, -cli.distance),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 0.0),
    );
    let scene = Wireframe::cube(cli.cube, 'O');

    log::info!("starting renderer: {width}x{height} at {} fps target", cli.fps);

    let mut app = TerminalApp::new(scene, camera, width, height, cli.fps).with_rates(SpinRates {
        yaw: cli.yaw_rate,
        pitch: cli.pitch_rate,
        roll: cli.roll_rate,
    });
    app.run()?;

    log::info!("renderer stopped");
    Ok(())
}
