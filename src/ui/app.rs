//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui::{TILE_COUNT, splash_duration, tick_rate};
use crate::ui::components::{footer, header, notifications};
use crate::ui::dashboard::render_dashboard;
use crate::ui::insights::render_insights;
use crate::ui::keymap::{Command, map_key, tile_selection};
use crate::ui::splash::render_splash;
use crate::view::{Action, View, ViewController};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub skip_splash: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool, skip_splash: bool) -> Self {
        Self {
            with_background_color,
            skip_splash,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The dashboard or insights view, whichever the controller is on.
    Main,
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// When the splash screen was first shown.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Owner of the view state, filters and dataset.
    controller: ViewController,

    /// Index of the highlighted dashboard tile.
    focused_tile: usize,

    /// Whether to paint the dark background
    with_background_color: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(controller: ViewController, ui_config: UIConfig) -> Self {
        Self {
            start_time: Instant::now(),
            current_screen: if ui_config.skip_splash {
                Screen::Main
            } else {
                Screen::Splash
            },
            controller,
            focused_tile: 0,
            with_background_color: ui_config.with_background_color,
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    #[cfg(test)]
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    #[cfg(test)]
    pub fn focused_tile(&self) -> usize {
        self.focused_tile
    }

    /// Handles a key press. Returns `true` when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let command = map_key(key, self.controller.state(), self.controller.filters());

        if self.current_screen == Screen::Splash {
            // Any key other than quit skips the splash screen
            if command == Command::Quit {
                return true;
            }
            self.current_screen = Screen::Main;
            return false;
        }

        match command {
            Command::Quit => return true,
            Command::Dispatch(action) => self.controller.dispatch(action),
            Command::FocusNext => self.focused_tile = (self.focused_tile + 1) % TILE_COUNT,
            Command::FocusPrevious => {
                self.focused_tile = (self.focused_tile + TILE_COUNT - 1) % TILE_COUNT
            }
            Command::ActivateFocused => self
                .controller
                .dispatch(Action::SelectKpi(tile_selection(self.focused_tile))),
            Command::Ignore => {}
        }
        false
    }

    /// Moves past the splash screen once it has been shown long enough.
    fn tick(&mut self) {
        if self.current_screen == Screen::Splash && self.start_time.elapsed() >= splash_duration()
        {
            self.current_screen = Screen::Main;
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| render(f, &app))?;

        // Poll for key events
        if event::poll(tick_rate())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Renders the current screen based on the application state.
pub fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Main => render_main(f, app),
    }
}

fn render_main(f: &mut Frame, app: &App) {
    if app.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .margin(1)
        .split(f.area());

    let controller = &app.controller;
    header::render_header(f, main_chunks[0], controller);
    match controller.state().current_view {
        View::Dashboard => render_dashboard(f, main_chunks[1], controller, app.focused_tile),
        View::Insights => render_insights(f, main_chunks[1], controller),
    }
    footer::render_footer(f, main_chunks[2], controller);

    if controller.state().alerts_panel_visible {
        notifications::render_notifications(f, f.area(), controller);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, KpiName};
    use crate::view::{FilterSelection, KpiSelection};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn app(skip_splash: bool) -> App {
        let controller = ViewController::new(Dataset::mock(), FilterSelection::default());
        App::new(controller, UIConfig::new(true, skip_splash))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Draws the app and returns the screen contents one row per line.
    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_any_key_skips_splash() {
        let mut app = app(false);
        assert_eq!(app.current_screen(), Screen::Splash);
        assert!(!press(&mut app, KeyCode::Char('x')));
        assert_eq!(app.current_screen(), Screen::Main);
        // The skipping key is not dispatched
        assert!(app.controller().activity_logs().is_empty());
    }

    #[test]
    fn test_focus_wraps_and_enter_opens_insights() {
        let mut app = app(true);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.focused_tile(), TILE_COUNT - 1);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.focused_tile(), 1);

        press(&mut app, KeyCode::Enter);
        let state = app.controller().state();
        assert_eq!(state.current_view, View::Insights);
        assert_eq!(
            state.selected_kpi,
            Some(KpiSelection::Metric(KpiName::Water))
        );
    }

    #[test]
    fn test_quit_key() {
        let mut app = app(true);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_render_splash() {
        let screen = draw(&app(false));
        assert!(screen.contains("Sustainability Dashboard"));
    }

    #[test]
    fn test_render_dashboard() {
        let screen = draw(&app(true));
        assert!(screen.contains("KEY PERFORMANCE INDICATORS"));
        assert!(screen.contains("1500 kWh"));
        assert!(screen.contains("Over Limit"));
        assert!(screen.contains("High Energy Consumption"));
        assert!(screen.contains("Today"));
        assert!(screen.contains("Sustainability Inc."));
        assert!(screen.contains("Privacy Policy"));
        assert!(screen.contains("Terms of Service"));
    }

    #[test]
    fn test_render_insights() {
        let mut app = app(true);
        press(&mut app, KeyCode::Char('3'));
        let screen = draw(&app);
        assert!(screen.contains("Waste Trend Analysis"));
        assert!(screen.contains("Waste by Department"));
        assert!(screen.contains("Hotspot Identification"));
        assert!(screen.contains("Cost Impact"));
        assert!(screen.contains("Goal Progress"));
    }

    #[test]
    fn test_render_insights_without_series() {
        let mut app = app(true);
        press(&mut app, KeyCode::Char('o'));
        let screen = draw(&app);
        assert!(screen.contains("Overall Trend Analysis"));
        assert!(screen.contains("No trend series"));
    }

    #[test]
    fn test_notifications_overlay_follows_toggle() {
        let mut app = app(true);
        assert!(!draw(&app).contains("NOTIFICATIONS"));
        press(&mut app, KeyCode::Char('a'));
        assert!(draw(&app).contains("NOTIFICATIONS"));
        press(&mut app, KeyCode::Esc);
        assert!(!draw(&app).contains("NOTIFICATIONS"));
    }
}
