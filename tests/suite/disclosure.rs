//! Legal and flow-step dialogs.

use crossterm::event::KeyCode;

use hyperlink_core::content::LegalDoc;
use hyperlink_engine::ui::{Focus, FocusRegion};
use hyperlink_engine::{FooterLink, Route, footer_links};

use crate::common::{app_at, press, screen, tab_until};

#[tokio::test(start_paused = true)]
async fn footer_legal_link_opens_the_document() {
    let mut app = app_at(Route::Home);
    assert!(tab_until(&mut app, |app| app.focus().region()
        == FocusRegion::Footer));

    let privacy = footer_links()
        .iter()
        .position(|link| *link == FooterLink::Legal(LegalDoc::Privacy))
        .expect("privacy link");
    for _ in 0..privacy {
        press(&mut app, KeyCode::Right);
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.legal_modal().current(), Some(&LegalDoc::Privacy));
    assert_eq!(app.route(), &Route::Home);
    let text = screen(&mut app, 100, 36);
    assert!(text.contains("Privacy Policy"));
    assert!(text.contains("Data protection"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.legal_modal().is_open());
    assert_eq!(app.focus().region(), FocusRegion::Footer);
}

#[tokio::test(start_paused = true)]
async fn opening_another_document_replaces_the_first() {
    let mut app = app_at(Route::Security);
    app.open_legal(LegalDoc::Dlt);
    screen(&mut app, 100, 30);
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.legal_modal().scroll().offset(), 4);

    app.open_legal(LegalDoc::Terms);
    let text = screen(&mut app, 100, 30);
    assert_eq!(app.legal_modal().current(), Some(&LegalDoc::Terms));
    assert_eq!(app.legal_modal().scroll().offset(), 0);
    assert!(text.contains("Terms of Service"));
}

#[tokio::test(start_paused = true)]
async fn long_documents_scroll_inside_the_dialog() {
    let mut app = app_at(Route::Home);
    app.open_legal(LegalDoc::Dlt);
    screen(&mut app, 80, 20);
    assert!(app.legal_modal().scroll().max() > 0);

    press(&mut app, KeyCode::PageDown);
    assert!(app.legal_modal().scroll().offset() > 0);
    assert_eq!(app.view().scroll.offset(), 0);
}

#[tokio::test(start_paused = true)]
async fn flow_step_dialog_walks_the_grid() {
    let mut app = app_at(Route::Otp);
    assert!(tab_until(&mut app, |app| app.focus().region()
        == FocusRegion::Flow));
    press(&mut app, KeyCode::Enter);

    assert_eq!(
        app.flow_modal().current().map(String::as_str),
        Some("api-integration")
    );
    let text = screen(&mut app, 100, 40);
    assert!(text.contains("API Integration"));
    assert!(text.contains("What is this?"));

    press(&mut app, KeyCode::Right);
    assert_eq!(
        app.flow_step_detail().map(|step| step.title.as_str()),
        Some("OTP Template Setup")
    );
    assert_eq!(app.focus(), Focus::Flow { step: 1 });

    press(&mut app, KeyCode::Esc);
    assert!(!app.flow_modal().is_open());
}

#[tokio::test(start_paused = true)]
async fn unknown_step_id_draws_no_dialog() {
    let mut app = app_at(Route::Otp);
    let before = screen(&mut app, 100, 40);
    app.open_flow_step("no-such-step");
    assert!(app.flow_step_detail().is_none());
    assert_eq!(screen(&mut app, 100, 40), before);
}

#[tokio::test(start_paused = true)]
async fn navigation_closes_open_dialogs() {
    let mut app = app_at(Route::Home);
    app.open_legal(LegalDoc::Gdpr);
    app.navigate(Route::Contact);
    assert!(!app.legal_modal().is_open());
    assert!(!screen(&mut app, 100, 40).contains("GDPR Compliance"));
}
