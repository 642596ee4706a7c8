//! The contact form driven through the keyboard, start to finish.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crossterm::event::KeyCode;

use hyperlink_engine::ui::{Focus, FormSlot};
use hyperlink_engine::{
    App, Field, Receipt, Route, SubmissionState, SubmitError, SubmitPort, ToastKind,
};
use hyperlink_types::ValidatedInput;

use crate::common::{
    AppBuilder, CONFIRMATION_WINDOW, LATENCY, app_at, press, screen, settle, type_text,
};

struct Rejecting;

impl SubmitPort for Rejecting {
    fn submit(
        &self,
        _input: ValidatedInput,
    ) -> Pin<Box<dyn Future<Output = Result<Receipt, SubmitError>> + Send>> {
        Box::pin(async {
            Err(SubmitError::Rejected {
                message: "Demo slots are full this week".to_string(),
            })
        })
    }
}

/// Tab into the form and fill it with valid input, leaving focus on Submit.
fn fill_form(app: &mut App) {
    press(app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Form(FormSlot::Field(Field::Name)));
    for value in ["Jo", "jo@x.com", "9999999999", "Ab"] {
        type_text(app, value);
        press(app, KeyCode::Down);
    }
    assert_eq!(app.focus(), Focus::Form(FormSlot::Field(Field::Consent)));
    press(app, KeyCode::Char(' '));
    press(app, KeyCode::Down);
    assert_eq!(app.focus(), Focus::Form(FormSlot::Submit));
}

#[tokio::test(start_paused = true)]
async fn valid_request_is_confirmed_then_the_form_resets() {
    let mut app = app_at(Route::Contact);
    fill_form(&mut app);

    press(&mut app, KeyCode::Enter);
    assert!(screen(&mut app, 100, 40).contains("Submitting..."));

    // A second Enter while pending is swallowed.
    press(&mut app, KeyCode::Enter);
    settle().await;
    tokio::time::advance(LATENCY).await;
    settle().await;
    app.tick();

    let text = screen(&mut app, 100, 40);
    assert!(text.contains("Request Received!"));
    assert!(text.contains("Our team will contact you within 24 hours."));
    assert!(text.contains("Thank you! We'll be in touch shortly."));
    assert_eq!(app.toasts().len(), 1);

    tokio::time::advance(CONFIRMATION_WINDOW).await;
    app.tick();
    let flow = app.submission().expect("contact form");
    assert_eq!(flow.state(), &SubmissionState::Idle);
    assert!(flow.input().is_empty());
    assert!(screen(&mut app, 100, 40).contains("Request Demo"));
}

#[tokio::test(start_paused = true)]
async fn empty_submit_shows_every_error_inline() {
    let mut app = app_at(Route::Contact);
    press(&mut app, KeyCode::Tab);
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.focus(), Focus::Form(FormSlot::Field(Field::Name)));
    let text = screen(&mut app, 110, 60);
    for message in [
        "Name must be at least 2 characters",
        "Please enter a valid email address",
        "Please enter a valid phone number",
        "Company name must be at least 2 characters",
        "You must agree to receive communications",
    ] {
        assert!(text.contains(message), "missing {message:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn one_bad_field_reports_only_that_field() {
    let mut app = app_at(Route::Contact);
    fill_form(&mut app);
    for _ in 0..5 {
        press(&mut app, KeyCode::Up);
    }
    press(&mut app, KeyCode::Backspace);
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);

    let flow = app.submission().expect("contact form");
    assert_eq!(flow.errors().len(), 1);
    assert_eq!(
        flow.error(Field::Name),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(flow.state(), &SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn rejected_request_keeps_the_input_and_allows_retry() {
    let mut app = AppBuilder::new(Route::Contact)
        .port(Arc::new(Rejecting))
        .build();
    fill_form(&mut app);
    press(&mut app, KeyCode::Enter);
    settle().await;
    app.tick();

    let flow = app.submission().expect("contact form");
    assert_eq!(flow.state().failure(), Some("Demo slots are full this week"));
    assert_eq!(flow.input().name, "Jo");
    let toast = app.toasts().latest().expect("error toast");
    assert_eq!(toast.kind, ToastKind::Error);

    press(&mut app, KeyCode::Enter);
    assert!(app.submission().expect("contact form").state().is_submitting());
}

#[tokio::test(start_paused = true)]
async fn service_pages_carry_the_same_form() {
    let mut app = app_at(Route::Otp);
    let mut guard = 0;
    while !matches!(app.focus(), Focus::Form(_)) && guard < 8 {
        press(&mut app, KeyCode::Tab);
        guard += 1;
    }
    type_text(&mut app, "Quinn");
    assert_eq!(app.submission().expect("opt-in form").input().name, "Quinn");
}
