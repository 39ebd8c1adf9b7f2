//! Terminal frontend: frame driver, keyboard input, and output sink.

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use wire3d_core::{Camera, Orientation, RenderSchedule, Wireframe};

pub mod renderer;

pub use renderer::WireRenderer;

/// Angular rates around each axis, in radians per second.
#[derive(Debug, Clone, Copy)]
pub struct SpinRates {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Default for SpinRates {
    fn default() -> Self {
        Self {
            yaw: 0.45,
            pitch: 2.6,
            roll: 0.9,
        }
    }
}

/// Main application struct for terminal wireframe rendering.
///
/// Owns all per-frame state; the loop runs until [`stop`](Self::stop) is
/// called, from a key press or by the embedding code.
pub struct TerminalApp {
    scene: Wireframe,
    orientation: Orientation,
    rates: SpinRates,
    camera: Camera,
    renderer: WireRenderer,
    schedule: RenderSchedule,
    target_frame_time: Duration,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f64,
}

impl TerminalApp {
    pub fn new(
        scene: Wireframe,
        camera: Camera,
        width: usize,
        height: usize,
        target_fps: u32,
    ) -> Self {
        Self {
            scene,
            orientation: Orientation::zero(),
            rates: SpinRates::default(),
            camera,
            renderer: WireRenderer::new(width, height),
            schedule: RenderSchedule::new(),
            target_frame_time: Duration::from_millis(1000 / u64::from(target_fps.max(1))),
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        }
    }

    pub fn with_rates(mut self, rates: SpinRates) -> Self {
        self.rates = rates;
        self
    }

    /// Stop the frame loop after the current iteration.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let mut last_tick = Instant::now();

        while self.running {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last_tick).as_secs_f64();
            last_tick = frame_start;

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update(dt);

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = f64::from(self.frame_count) / (now - self.last_frame).as_secs_f64();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.stop();
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.orientation.rotate(0.0, 0.1, 0.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.orientation.rotate(0.0, -0.1, 0.0);
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.orientation.rotate(-0.1, 0.0, 0.0);
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.orientation.rotate(0.1, 0.0, 0.0);
                }
                KeyCode::Char('e') => {
                    self.orientation.rotate(0.0, 0.0, 0.1);
                }
                KeyCode::Char('r') => {
                    self.orientation.rotate(0.0, 0.0, -0.1);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self, dt: f64) {
        self.orientation.rotate(
            self.rates.yaw * dt,
            self.rates.pitch * dt,
            self.rates.roll * dt,
        );
    }

    fn render(&mut self) -> io::Result<()> {
        let rotation = self.orientation.matrix();

        self.schedule.clear();
        if let Err(err) = self.scene.schedule_into(&rotation, &mut self.schedule) {
            // Could not queue the whole scene; draw what made it in.
            log::warn!("dropping part of frame: {err}");
        }

        self.renderer.render(&self.schedule, &self.camera);

        // Output to terminal
        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.renderer.present(&mut stdout)?;

        // Status line overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wire3D | FPS: {:.1} | Controls: WASD/Arrows=Rotate E/R=Roll Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
