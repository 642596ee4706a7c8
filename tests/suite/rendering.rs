//! Whole-frame rendering through a virtual terminal.

use crossterm::event::KeyCode;

use hyperlink_engine::ui::{FocusRegion, UiOptions};
use hyperlink_engine::{Route, ToastKind};

use crate::common::{AppBuilder, app_at, press, render, screen, tab_until};

#[tokio::test(start_paused = true)]
async fn header_lists_every_entry_and_the_key_hints() {
    let mut app = app_at(Route::Home);
    let terminal = render(&mut app, 110, 30);
    let screen = terminal.backend();

    let header = screen.row(0);
    for label in [
        "Hyperlink",
        "Home",
        "Services",
        "How It Works",
        "Dashboard",
        "Security",
        "Contact",
    ] {
        assert!(header.contains(label), "header missing {label:?}: {header}");
    }
    let hints = screen.row(29);
    assert!(hints.contains("theme"));
    assert!(hints.contains("quit"));
}

#[tokio::test(start_paused = true)]
async fn home_opens_on_the_first_slide() {
    let mut app = app_at(Route::Home);
    let text = screen(&mut app, 100, 30);
    assert!(text.contains("Enterprise-Grade Messaging Infrastructure"));
    assert!(text.contains("1/6"));
}

#[tokio::test(start_paused = true)]
async fn footer_comes_into_view_when_focused() {
    let mut app = app_at(Route::Dashboard);
    assert!(!screen(&mut app, 100, 24).contains("All Systems Operational"));

    assert!(tab_until(&mut app, |app| app.focus().region()
        == FocusRegion::Footer));
    let text = screen(&mut app, 100, 24);
    assert!(text.contains("Bulk SMS"));
    assert!(app.view().scroll.offset() > 0);

    // Leaving the footer keeps the scroll; Page Down runs to the end.
    press(&mut app, KeyCode::Esc);
    for _ in 0..40 {
        press(&mut app, KeyCode::PageDown);
    }
    let text = screen(&mut app, 100, 24);
    assert_eq!(app.view().scroll.offset(), app.view().scroll.max());
    assert!(text.contains("All Systems Operational"));
    assert!(text.contains("Hyperlink. All rights reserved."));
}

#[tokio::test(start_paused = true)]
async fn service_page_draws_the_flow_grid() {
    let mut app = app_at(Route::Otp);
    assert!(tab_until(&mut app, |app| app.focus().region() == FocusRegion::Flow));
    let text = screen(&mut app, 120, 40);
    for title in ["API Integration", "OTP Template Setup", "OTP Generation"] {
        assert!(text.contains(title), "grid missing {title:?}");
    }
    assert!(text.contains("Enter opens the step details"));
}

#[tokio::test(start_paused = true)]
async fn toasts_stack_in_the_corner() {
    let mut app = app_at(Route::Security);
    app.notify("Link copied", ToastKind::Info);
    app.notify("Could not reach the server", ToastKind::Error);
    let text = screen(&mut app, 100, 30);
    assert!(text.contains("Link copied"));
    assert!(text.contains("Could not reach the server"));

    press(&mut app, KeyCode::Char('x'));
    let text = screen(&mut app, 100, 30);
    assert!(text.contains("Link copied"));
    assert!(!text.contains("Could not reach the server"));
}

#[tokio::test(start_paused = true)]
async fn tiny_terminals_still_draw() {
    for route in Route::PAGES {
        let mut app = app_at(route);
        app.open_legal(hyperlink_core::content::LegalDoc::Terms);
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Char('c'));
        app.notify("Saved", ToastKind::Success);
        render(&mut app, 12, 5);
        render(&mut app, 1, 1);
    }
}

#[tokio::test(start_paused = true)]
async fn animations_run_on_ticks_and_settle() {
    let mut app = AppBuilder::new(Route::Home)
        .ui_options(UiOptions::default())
        .build();
    app.open_legal(hyperlink_core::content::LegalDoc::Privacy);
    assert!(app.view().modal_effect.is_some());
    render(&mut app, 100, 30);

    tokio::time::advance(std::time::Duration::from_secs(2)).await;
    app.tick();
    assert!(app.view().modal_effect.is_none());
    assert!(screen(&mut app, 100, 30).contains("Privacy Policy"));
}
