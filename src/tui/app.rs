//! Demo application state and event loop
//!
//! Simulates a finite transfer by pushing progress events into a
//! [`ProgressFeed`] on every tick and renders the configured loader.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    DefaultTerminal, Frame,
};

use crate::progress::{FillPattern, Thickness};
use crate::source::{ProgressEvent, ProgressFeed};

use super::widgets::{Bar, Blocks, Donut, DonutLabel, Grid, LoaderStyle};

/// Simulated transfer size in bytes
const DEMO_TOTAL_BYTES: f64 = 8_388_608.0;
/// Ticks from start to finish
const DEMO_TICKS: f64 = 120.0;

/// Which loader the demo renders, with its settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoaderKind {
    Bar,
    Blocks {
        segments: usize,
        rounded: bool,
        spacing: u16,
    },
    Grid {
        grid_size: usize,
        pattern: FillPattern,
        spin: bool,
        reverse: bool,
        reverse_spin: bool,
        rounded: bool,
    },
    Donut {
        thickness: Thickness,
        label_as_percentage: bool,
    },
}

/// Demo configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoConfig {
    pub loader: LoaderKind,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            loader: LoaderKind::Grid {
                grid_size: 6,
                pattern: FillPattern::default(),
                spin: false,
                reverse: false,
                reverse_spin: false,
                rounded: false,
            },
        }
    }
}

/// Demo application
pub struct App {
    config: DemoConfig,
    style: LoaderStyle,
    feed: ProgressFeed,
    loaded: f64,
    paused: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: DemoConfig, style: LoaderStyle) -> Self {
        Self {
            config,
            style,
            feed: ProgressFeed::new(),
            loaded: 0.0,
            paused: false,
            should_quit: false,
        }
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.should_quit = true;
                    }
                    KeyCode::Char(' ') => {
                        self.paused = !self.paused;
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        self.feed = ProgressFeed::new();
                        self.loaded = 0.0;
                        self.paused = false;
                    }
                    _ => {}
                }
            }
        }
    }

    /// Advance the simulated transfer by one tick
    pub fn tick(&mut self) {
        if self.paused || self.feed.is_complete() {
            return;
        }

        self.loaded += DEMO_TOTAL_BYTES / DEMO_TICKS;
        if self.loaded >= DEMO_TOTAL_BYTES {
            self.feed.apply(ProgressEvent::Complete);
        } else {
            self.feed.apply(ProgressEvent::Progress {
                loaded: self.loaded,
                total: DEMO_TOTAL_BYTES,
                length_computable: true,
            });
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }

    /// Area the loader is drawn into, centered in `area`
    fn loader_area(&self, area: Rect) -> Rect {
        let (width, height) = match self.config.loader {
            LoaderKind::Bar => (area.width.saturating_sub(4).max(1), 1),
            LoaderKind::Blocks {
                segments, spacing, ..
            } => {
                let segments = segments as u16;
                let want = segments
                    .saturating_add(spacing.saturating_mul(segments.saturating_sub(1)))
                    .max(1);
                (want.min(area.width), 1)
            }
            LoaderKind::Grid { grid_size, .. } => {
                let side = (grid_size as u16).max(1);
                ((side * 2).min(area.width), side.min(area.height))
            }
            LoaderKind::Donut { .. } => {
                let diameter = area.height.saturating_sub(2).min(area.width / 2).max(2);
                (diameter * 2, diameter)
            }
        };

        Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y + area.height.saturating_sub(height) / 2,
            width.min(area.width),
            height.min(area.height),
        )
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let progress = self.feed.percentage();
        let target = self.loader_area(area);

        match self.config.loader {
            LoaderKind::Bar => {
                Bar::new(progress).style(self.style).render(target, buf);
            }
            LoaderKind::Blocks {
                segments,
                rounded,
                spacing,
            } => {
                Blocks::new(progress)
                    .segments(segments)
                    .rounded(rounded)
                    .spacing(spacing)
                    .style(self.style)
                    .render(target, buf);
            }
            LoaderKind::Grid {
                grid_size,
                pattern,
                spin,
                reverse,
                reverse_spin,
                rounded,
            } => {
                Grid::new(progress)
                    .grid_size(grid_size)
                    .pattern(pattern)
                    .spin(spin)
                    .reverse(reverse)
                    .reverse_spin(reverse_spin)
                    .rounded(rounded)
                    .style(self.style)
                    .render(target, buf);
            }
            LoaderKind::Donut {
                thickness,
                label_as_percentage,
            } => {
                let range = self.feed.range();
                let label = if label_as_percentage {
                    DonutLabel::Percentage
                } else {
                    DonutLabel::ValueOfFinish {
                        value: range.value.floor() as i64,
                        finish: range.finish.floor() as i64,
                    }
                };
                Donut::new(progress)
                    .thickness(thickness)
                    .label(label)
                    .style(self.style)
                    .render(target, buf);
            }
        }

        // Key hints in the bottom row
        if area.height > 1 {
            let hints = "space pause | r restart | q quit";
            let x = area.x + area.width.saturating_sub(hints.len() as u16) / 2;
            buf.set_string(
                x,
                area.bottom() - 1,
                hints,
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}

/// Run the demo loop until the user quits
pub fn run(config: DemoConfig) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, config);
    ratatui::restore();
    result
}

fn run_app(terminal: &mut DefaultTerminal, config: DemoConfig) -> anyhow::Result<()> {
    let mut app = App::new(config, LoaderStyle::detect());

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        // Poll with 100ms timeout; idle ticks advance the transfer
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        } else {
            app.tick();
        }
    }

    Ok(())
}
