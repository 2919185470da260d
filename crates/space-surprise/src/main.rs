use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect, Size},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
};
use surprise_config::Config;
use surprise_core::{Easing, Viewport};

mod logging;
mod scene;

use scene::Scene;

/// Where the link in the corner points.
const REPO_LINK: &str = "github.com/pranavsawant7/space-surprise";

/// One up-and-down bob of the action button.
const BUTTON_BOB_MS: u64 = 2000;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();
    log::info!("starting space-surprise {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load_or_default();
    let terminal = ratatui::init();
    let result = run(config, terminal);
    ratatui::restore();
    result
}

fn run(config: Config, terminal: DefaultTerminal) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    App::new(config, size).run(terminal)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    config: Config,
    /// Stars, objects and the black hole.
    scene: Scene,
    /// Clock origin for every animation.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`] for a terminal of the given size.
    pub fn new(config: Config, size: Size) -> Self {
        let viewport = viewport_for(&config, size.width, size.height);
        Self {
            running: false,
            scene: Scene::new(config.clone(), viewport, 0),
            config,
            started: Instant::now(),
        }
    }

    /// Milliseconds since the app started.
    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Run the application's main loop.
    ///
    /// The scene steps once per frame deadline. Input in between is handled
    /// without stepping it.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut clock = FrameClock::new(self.config.frame_interval_ms(), self.elapsed_ms());
        while self.running {
            let now_ms = self.elapsed_ms();
            if clock.due(now_ms) {
                self.scene.tick(now_ms);
                terminal.draw(|frame| self.render(frame, now_ms))?;
            }
            let timeout = clock.remaining(self.elapsed_ms());
            self.handle_crossterm_events(timeout)?;
        }
        log::info!("shutting down");
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame, now_ms: u64) {
        let area = frame.area();
        self.scene.render(frame, area, now_ms);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Top padding
            Constraint::Length(2), // Link and bobbing button
            Constraint::Fill(1),   // Scene
            Constraint::Length(1), // Help text
        ])
        .split(area);

        // Static link, top left
        let link = Line::from(format!(" {REPO_LINK} "))
            .style(Style::new().fg(Color::White).bg(Color::Rgb(51, 51, 51)));
        let link_area = Rect {
            x: chunks[1].x.saturating_add(2),
            width: chunks[1].width.saturating_sub(2),
            height: 1,
            ..chunks[1]
        };
        frame.render_widget(Paragraph::new(link), link_area);

        self.render_button(frame, chunks[1], now_ms);

        let speed = self.scene.speed().name();
        let help = Line::from(vec![
            "space".bold().fg(Color::Yellow),
            " surprise me  ".dark_gray(),
            "r".bold().fg(Color::Yellow),
            " refresh  ".dark_gray(),
            "s".bold().fg(Color::Yellow),
            format!(" speed: {speed}  ").dark_gray(),
            "q".bold().fg(Color::Yellow),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[3]);
    }

    /// Render the primary or the refresh action in the top right corner.
    fn render_button(&self, frame: &mut Frame, area: Rect, now_ms: u64) {
        let (label, style) = if self.scene.reset_available() {
            (
                " Refresh ",
                Style::new().fg(Color::Black).bg(Color::Rgb(0, 204, 255)).bold(),
            )
        } else if self.scene.mode().is_collapsing() {
            (
                " Sucking... ",
                Style::new()
                    .fg(Color::Rgb(204, 204, 204))
                    .bg(Color::Rgb(102, 102, 102)),
            )
        } else {
            (
                " Surprise Me ",
                Style::new().fg(Color::Black).bg(Color::Rgb(255, 204, 0)).bold(),
            )
        };

        let width = (label.len() as u16).min(area.width);
        let row = if area.height > 1 { 1 - button_lift(now_ms) } else { 0 };
        let button_area = Rect {
            x: area.right().saturating_sub(width + 2),
            y: area.y + row,
            width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(label).style(style), button_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits at most `timeout` so the next frame is not late.
    fn handle_crossterm_events(&mut self, timeout: Duration) -> color_eyre::Result<()> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(columns, rows) => self.on_resize(columns, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let now_ms = self.elapsed_ms();
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char(' ') | KeyCode::Enter) => {
                self.scene.trigger_collapse(now_ms);
            }
            (_, KeyCode::Char('r')) => {
                self.scene.reset(now_ms);
            }
            (_, KeyCode::Char('s')) => self.scene.cycle_speed(),
            _ => {}
        }
    }

    /// Rebuild the scene for the new terminal size.
    fn on_resize(&mut self, columns: u16, rows: u16) {
        let viewport = viewport_for(&self.config, columns, rows);
        self.scene.resize(viewport, self.elapsed_ms());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Frame deadlines for the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameClock {
    interval_ms: u64,
    next_ms: u64,
}

impl FrameClock {
    /// First frame is due at `now_ms`.
    fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_ms: now_ms,
        }
    }

    /// True at most once per deadline. A late frame schedules the next one a
    /// full interval out instead of bursting to catch up.
    fn due(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_ms {
            return false;
        }
        self.next_ms += self.interval_ms;
        if self.next_ms <= now_ms {
            self.next_ms = now_ms + self.interval_ms;
        }
        true
    }

    /// Time left until the next deadline.
    fn remaining(&self, now_ms: u64) -> Duration {
        Duration::from_millis(self.next_ms.saturating_sub(now_ms))
    }
}

/// Surface covering a terminal of `columns x rows`.
fn viewport_for(config: &Config, columns: u16, rows: u16) -> Viewport {
    Viewport::from_cells(columns, rows, config.cell_width, config.cell_height)
}

/// Rows the action button is lifted by: 0 -> 1 -> 0 over one bob.
fn button_lift(now_ms: u64) -> u16 {
    let phase = (now_ms % BUTTON_BOB_MS) as f32 / BUTTON_BOB_MS as f32;
    let lift = if phase < 0.5 {
        Easing::EaseInOut.apply(phase * 2.0)
    } else {
        1.0 - Easing::EaseInOut.apply((phase - 0.5) * 2.0)
    };
    lift.round() as u16
}
