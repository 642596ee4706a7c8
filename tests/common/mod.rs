//! Shared test utilities and fixtures

#![allow(dead_code)]

mod virtual_terminal;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use hyperlink_engine::ui::UiOptions;
use hyperlink_engine::{
    App, AppBuildParts, MemoryThemeStore, Route, SimulatedSubmit, SubmitPort, Theme,
    ThemePreference,
};

pub use self::virtual_terminal::VirtualTerminal;

pub const LATENCY: Duration = Duration::from_millis(1500);
pub const CONFIRMATION_WINDOW: Duration = Duration::from_millis(3000);

pub struct AppBuilder {
    route: Route,
    ui_options: UiOptions,
    theme: ThemePreference,
    port: Arc<dyn SubmitPort>,
}

impl AppBuilder {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ui_options: UiOptions {
                reduced_motion: true,
                ..UiOptions::default()
            },
            theme: ThemePreference::load(Box::new(MemoryThemeStore::default()), Theme::Dark),
            port: Arc::new(SimulatedSubmit::new(LATENCY)),
        }
    }

    pub fn theme(mut self, theme: ThemePreference) -> Self {
        self.theme = theme;
        self
    }

    pub fn port(mut self, port: Arc<dyn SubmitPort>) -> Self {
        self.port = port;
        self
    }

    pub fn ui_options(mut self, ui_options: UiOptions) -> Self {
        self.ui_options = ui_options;
        self
    }

    pub fn build(self) -> App {
        App::from_parts(AppBuildParts {
            route: self.route,
            ui_options: self.ui_options,
            theme: self.theme,
            submit_port: self.port,
            confirmation_window: CONFIRMATION_WINDOW,
        })
    }
}

pub fn app_at(route: Route) -> App {
    AppBuilder::new(route).build()
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    hyperlink_tui::apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Tab until `done` holds, at most one full cycle of focus stops.
pub fn tab_until(app: &mut App, done: impl Fn(&App) -> bool) -> bool {
    for _ in 0..64 {
        if done(app) {
            return true;
        }
        press(app, KeyCode::Tab);
    }
    done(app)
}

/// Let spawned tasks run on the paused clock.
pub async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

/// Draw a frame into a virtual terminal. The frame is drawn twice so the
/// second pass uses the scroll range measured by the first.
pub fn render(app: &mut App, width: u16, height: u16) -> Terminal<VirtualTerminal> {
    let mut terminal = Terminal::new(VirtualTerminal::new(width, height)).expect("terminal");
    for _ in 0..2 {
        terminal
            .draw(|frame| hyperlink_tui::draw(frame, app))
            .expect("draw");
    }
    terminal
}

pub fn screen(app: &mut App, width: u16, height: u16) -> String {
    render(app, width, height).backend().contents()
}
