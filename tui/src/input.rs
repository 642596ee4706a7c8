//! Terminal input: a blocking reader thread feeding a bounded channel, and
//! the key map that turns events into `App` actions.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use hyperlink_engine::ui::{Focus, FormSlot};
use hyperlink_engine::{AddressBarAccess, App, Direction, Field, FormAccess};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = Arc::clone(&stop);

        let join = tokio::task::spawn_blocking(move || input_loop(&stop2, &tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        self.rx.close();
        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: &AtomicBool, tx: &mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "reading terminal input failed");
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                tracing::error!(error = %e, "polling terminal input failed");
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain pending input into `app`. Returns whether the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };
        if apply_event(app, ev) {
            return Ok(true);
        }
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Returns whether the app should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            if app.address_bar().is_some() {
                handle_address_bar(app, key);
            } else if app.jump_pending() {
                handle_jump(app, key);
            } else if app.focus().is_text_entry() {
                handle_text_entry(app, key);
            } else {
                handle_browse(app, key);
            }
        }
        Event::Paste(text) => {
            if let AddressBarAccess::Open(mut bar) = app.address_bar_mut() {
                for c in text.chars() {
                    bar.enter_char(c);
                }
            } else if app.focus().is_text_entry()
                && let FormAccess::Active(mut form) = app.form_mut()
            {
                form.enter_text(&text);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn handle_address_bar(app: &mut App, key: KeyEvent) {
    let AddressBarAccess::Open(mut bar) = app.address_bar_mut() else {
        return;
    };
    match key.code {
        KeyCode::Enter => bar.go(),
        KeyCode::Esc => bar.cancel(),
        KeyCode::Backspace => bar.delete_char(),
        KeyCode::Char(c) => bar.enter_char(c),
        _ => {}
    }
}

fn handle_jump(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => {
            app.finish_jump(c);
        }
        _ => app.cancel_jump(),
    }
}

fn handle_text_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Up => app.move_focus(Direction::Up),
        KeyCode::Down => app.move_focus(Direction::Down),
        KeyCode::Enter => app.activate(),
        KeyCode::Esc => app.escape(),
        KeyCode::Backspace => {
            if let FormAccess::Active(mut form) = app.form_mut() {
                form.delete_char();
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let FormAccess::Active(mut form) = app.form_mut() {
                form.enter_char(c);
            }
        }
        _ => {}
    }
}

fn handle_browse(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('m') => app.toggle_mobile_menu(),
        KeyCode::Char('c') => app.toggle_contact_panel(),
        KeyCode::Char('g') => app.start_jump(),
        KeyCode::Char(':') => app.open_address_bar(),
        KeyCode::Char('x') => app.dismiss_toast(),
        KeyCode::Char(' ') if app.focus() == Focus::Form(FormSlot::Field(Field::Consent)) => {
            app.activate();
        }
        KeyCode::Char(c @ '1'..='9') if app.focus() == Focus::Hero => {
            if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                app.carousel_go_to(index);
            }
        }
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Up => app.move_focus(Direction::Up),
        KeyCode::Down => app.move_focus(Direction::Down),
        KeyCode::Left => app.move_focus(Direction::Left),
        KeyCode::Right => app.move_focus(Direction::Right),
        KeyCode::PageUp => app.scroll_page(false),
        KeyCode::PageDown => app.scroll_page(true),
        KeyCode::Enter => app.activate(),
        KeyCode::Esc => app.escape(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use hyperlink_engine::ui::{Focus, FormSlot, UiOptions};
    use hyperlink_engine::{
        App, AppBuildParts, Field, MemoryThemeStore, Route, SimulatedSubmit, Theme,
        ThemePreference,
    };

    use super::apply_event;

    fn app(route: Route) -> App {
        App::from_parts(AppBuildParts {
            route,
            ui_options: UiOptions {
                reduced_motion: true,
                ..UiOptions::default()
            },
            theme: ThemePreference::load(Box::new(MemoryThemeStore::default()), Theme::Dark),
            submit_port: Arc::new(SimulatedSubmit::new(Duration::from_millis(1500))),
            confirmation_window: Duration::from_millis(3000),
        })
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn q_quits_outside_text_entry() {
        let mut app = app(Route::Home);
        assert!(press(&mut app, KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn ctrl_c_always_quits() {
        let mut app = app(Route::Contact);
        app.set_focus(Focus::Form(FormSlot::Field(Field::Name)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(apply_event(&mut app, Event::Key(ctrl_c)));
    }

    #[tokio::test]
    async fn letters_type_into_a_focused_field() {
        let mut app = app(Route::Contact);
        app.set_focus(Focus::Form(FormSlot::Field(Field::Name)));
        type_str(&mut app, "quentin");
        press(&mut app, KeyCode::Backspace);

        assert!(!app.should_quit());
        assert_eq!(app.theme(), Theme::Dark);
        let input = app.submission().expect("contact form").input();
        assert_eq!(input.name, "quenti");
    }

    #[tokio::test]
    async fn space_toggles_consent() {
        let mut app = app(Route::Contact);
        app.set_focus(Focus::Form(FormSlot::Field(Field::Consent)));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.submission().expect("contact form").input().consent);
    }

    #[tokio::test]
    async fn g_then_digit_jumps_to_a_header_entry() {
        let mut app = app(Route::Home);
        type_str(&mut app, "g6");
        assert_eq!(app.route(), &Route::Contact);

        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Down);
        assert!(!app.jump_pending());
        assert_eq!(app.route(), &Route::Contact);
    }

    #[tokio::test]
    async fn colon_opens_the_address_bar() {
        let mut app = app(Route::Home);
        press(&mut app, KeyCode::Char(':'));
        type_str(&mut app, "security");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route(), &Route::Security);
    }

    #[tokio::test]
    async fn digits_pick_a_slide_while_the_hero_has_focus() {
        let mut app = app(Route::Home);
        app.set_focus(Focus::Hero);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.carousel().expect("hero").current_index(), 2);
    }

    #[tokio::test]
    async fn theme_and_panels_toggle_from_letters() {
        let mut app = app(Route::Home);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Light);

        press(&mut app, KeyCode::Char('c'));
        assert!(app.contact_panel_open());
        press(&mut app, KeyCode::Esc);
        assert!(!app.contact_panel_open());

        press(&mut app, KeyCode::Char('m'));
        assert!(app.nav().mobile_menu_open());
    }

    #[tokio::test]
    async fn paste_lands_in_the_focused_field() {
        let mut app = app(Route::Contact);
        app.set_focus(Focus::Form(FormSlot::Field(Field::Email)));
        apply_event(&mut app, Event::Paste("jo@acme.io\n".to_string()));
        assert_eq!(
            app.submission().expect("contact form").input().email,
            "jo@acme.io"
        );
    }
}
