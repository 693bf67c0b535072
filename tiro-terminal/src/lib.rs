/// Terminal frontend: fly-camera viewer drawn with an ASCII rasterizer
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tiro_core::{Camera, CameraMovement, Mesh, Projection, ProjectionMode};

pub mod config;
pub mod renderer;

pub use config::Config;
pub use renderer::AsciiRenderer;

/// Look offset per arrow key press, before mouse sensitivity
const LOOK_STEP: f32 = 30.0;
/// Mouse offsets are in cells; scale them up to pixel-like magnitudes
const MOUSE_CELL_SCALE: f32 = 8.0;
/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: u32 = 2;

/// Everything the frame loop mutates: camera, model and timing
pub struct AppState {
    pub camera: Camera,
    pub projection: Projection,
    pub mesh: Mesh,
    pub constrain_pitch: bool,
    pub running: bool,
    /// Seconds between the current frame and the previous one
    pub delta_time: f32,
    last_frame: Instant,
    last_mouse: Option<(u16, u16)>,
    frame_count: u32,
    fps_timer: Instant,
    fps: f32,
}

impl AppState {
    pub fn new(mesh: Mesh, width: u16, height: u16, config: &Config) -> Self {
        let now = Instant::now();
        let mut camera = Camera::default();
        if let Some((min, max)) = mesh.bounds() {
            // Back off far enough to see the whole model
            let center = (min + max) * 0.5;
            let radius = (max - min).length() * 0.5;
            camera.position = center - camera.front() * (radius * 2.5).max(1.0);
        }

        Self {
            camera,
            projection: Projection::new(width as u32, height as u32 * CELL_ASPECT),
            mesh,
            constrain_pitch: config.constrain_pitch,
            running: true,
            delta_time: 1.0 / config.target_fps as f32,
            last_frame: now,
            last_mouse: None,
            frame_count: 0,
            fps_timer: now,
            fps: 0.0,
        }
    }

    /// Advance frame timing; returns the new delta time in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frame_count += 1;
        let elapsed = now - self.fps_timer;
        if elapsed.as_secs() >= 1 {
            self.fps = self.frame_count as f32 / elapsed.as_secs_f32();
            self.frame_count = 0;
            self.fps_timer = now;
        }
        self.delta_time
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        let dt = self.delta_time;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('w') => self.camera.process_movement(CameraMovement::Forward, dt),
            KeyCode::Char('s') => self.camera.process_movement(CameraMovement::Backward, dt),
            KeyCode::Char('a') => self.camera.process_movement(CameraMovement::Left, dt),
            KeyCode::Char('d') => self.camera.process_movement(CameraMovement::Right, dt),
            KeyCode::Char(' ') => self.camera.process_movement(CameraMovement::Up, dt),
            KeyCode::Char('c') => self.camera.process_movement(CameraMovement::Down, dt),
            KeyCode::Up => self.look(0.0, LOOK_STEP),
            KeyCode::Down => self.look(0.0, -LOOK_STEP),
            KeyCode::Left => self.look(-LOOK_STEP, 0.0),
            KeyCode::Right => self.look(LOOK_STEP, 0.0),
            KeyCode::Char('+') | KeyCode::Char('=') => self.camera.process_zoom(1.0),
            KeyCode::Char('-') => self.camera.process_zoom(-1.0),
            KeyCode::Char('p') => {
                self.constrain_pitch = !self.constrain_pitch;
                log::debug!("pitch constraint: {}", self.constrain_pitch);
            }
            KeyCode::Char('o') => self.projection.toggle_mode(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                // First event only latches the position
                let (last_x, last_y) = self.last_mouse.unwrap_or((column, row));
                self.last_mouse = Some((column, row));

                let dx = (column as f32 - last_x as f32) * MOUSE_CELL_SCALE;
                // reversed: rows grow downwards
                let dy = (last_y as f32 - row as f32) * MOUSE_CELL_SCALE;
                if dx != 0.0 || dy != 0.0 {
                    self.look(dx, dy);
                }
            }
            MouseEventKind::ScrollUp => self.camera.process_zoom(1.0),
            MouseEventKind::ScrollDown => self.camera.process_zoom(-1.0),
            _ => {}
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.projection.set_viewport(width as u32, height as u32 * CELL_ASPECT);
    }

    fn look(&mut self, dx: f32, dy: f32) {
        self.camera.process_look(dx, dy, self.constrain_pitch);
    }
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    state: AppState,
    renderer: AsciiRenderer,
    target_frame_time: Duration,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: &Config) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            state: AppState::new(mesh, width, height, config),
            renderer: AsciiRenderer::new(width as usize, height as usize),
            target_frame_time: Duration::from_secs(1) / config.target_fps.max(1),
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide, EnableMouseCapture)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), DisableMouseCapture, terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        while self.state.running {
            let frame_start = Instant::now();
            self.state.tick();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?);
            }

            // Render
            self.render()?;

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent { code, kind, .. }) if kind != KeyEventKind::Release => {
                self.state.handle_key(code);
            }
            Event::Mouse(mouse) => self.state.handle_mouse(mouse.kind, mouse.column, mouse.row),
            Event::Resize(width, height) => {
                log::debug!("terminal resized to {}x{}", width, height);
                self.renderer.resize(width as usize, height as usize);
                self.state.resize(width, height);
            }
            _ => {}
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let camera = &self.state.camera;
        let view_projection = self.state.projection.matrix(camera.zoom) * camera.view_matrix();

        // Clear renderer
        self.renderer.clear();

        // Render mesh, lit from the eye
        self.renderer.render_mesh(&self.state.mesh, &view_projection, -camera.front());

        // Output to terminal
        let mut stdout = stdout();
        self.renderer.draw(&mut stdout)?;

        // Draw UI overlay
        let mode = match self.state.projection.mode {
            ProjectionMode::Perspective => "persp",
            ProjectionMode::Orthographic => "ortho",
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "TIRO | FPS: {:.1} | pos {:.2} | yaw {:.0} pitch {:.0} fov {:.0} {} | WASD move, arrows/mouse look, +/- zoom, Q quit",
                self.state.fps(),
                camera.position,
                camera.yaw,
                camera.pitch,
                camera.zoom,
                mode
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
