//! Keyboard stand-ins for pointer interaction: header, menus, jumps, hero.

use crossterm::event::KeyCode;

use hyperlink_engine::ui::{Focus, FocusRegion};
use hyperlink_engine::{Route, SERVICES_ITEM, mobile_menu_links};

use crate::common::{app_at, press, screen, tab_until, type_text};

#[tokio::test(start_paused = true)]
async fn services_dropdown_follows_focus_and_navigates() {
    let mut app = app_at(Route::Security);
    assert!(tab_until(&mut app, |app| app.focus().region() == FocusRegion::Nav));
    press(&mut app, KeyCode::Right);

    assert_eq!(
        app.focus(),
        Focus::Nav {
            item: SERVICES_ITEM,
            dropdown: None
        }
    );
    assert!(app.nav().services_dropdown_open());
    assert!(screen(&mut app, 100, 30).contains("High-volume messaging at scale"));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), &Route::Rcs);
    assert!(!app.nav().services_dropdown_open());
    assert!(app.route().in_services());
}

#[tokio::test(start_paused = true)]
async fn moving_off_services_closes_the_dropdown() {
    let mut app = app_at(Route::Home);
    app.set_focus(Focus::Nav {
        item: SERVICES_ITEM,
        dropdown: None,
    });
    press(&mut app, KeyCode::Right);
    assert!(!app.nav().services_dropdown_open());
    assert!(!screen(&mut app, 100, 30).contains(" Services ─"));
}

#[tokio::test(start_paused = true)]
async fn mobile_menu_picks_a_destination() {
    let mut app = app_at(Route::Home);
    press(&mut app, KeyCode::Char('m'));
    assert!(app.nav().mobile_menu_open());
    assert!(screen(&mut app, 100, 30).contains("All Services"));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);

    let expected = Route::parse(mobile_menu_links()[2].href);
    assert_eq!(app.route(), &expected);
    assert!(!app.nav().mobile_menu_open());
}

#[tokio::test(start_paused = true)]
async fn escape_closes_the_mobile_menu_without_navigating() {
    let mut app = app_at(Route::Dashboard);
    press(&mut app, KeyCode::Char('m'));
    press(&mut app, KeyCode::Esc);
    assert!(!app.nav().mobile_menu_open());
    assert_eq!(app.route(), &Route::Dashboard);
}

#[tokio::test(start_paused = true)]
async fn g_jumps_to_header_entries() {
    let mut app = app_at(Route::Home);
    type_text(&mut app, "g3");
    assert_eq!(app.route(), &Route::HowItWorks);
    type_text(&mut app, "g9");
    assert_eq!(app.route(), &Route::HowItWorks);
    assert!(!app.jump_pending());
}

#[tokio::test(start_paused = true)]
async fn unknown_address_shows_not_found_with_a_way_home() {
    let mut app = app_at(Route::Home);
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "pricing");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.route(), &Route::NotFound("/pricing".to_string()));
    let text = screen(&mut app, 100, 30);
    assert!(text.contains("Page not found"));
    assert!(text.contains("/pricing"));
    assert!(text.contains("Go Home"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.route(), &Route::Home);
}

#[tokio::test(start_paused = true)]
async fn address_bar_escape_keeps_the_page() {
    let mut app = app_at(Route::Security);
    press(&mut app, KeyCode::Char(':'));
    assert!(screen(&mut app, 100, 30).contains("Go to"));
    type_text(&mut app, "x");
    press(&mut app, KeyCode::Esc);
    assert!(app.address_bar().is_none());
    assert_eq!(app.route(), &Route::Security);
}

#[tokio::test(start_paused = true)]
async fn hero_arrows_wrap_and_digits_pick_slides() {
    let mut app = app_at(Route::Home);
    assert!(tab_until(&mut app, |app| app.focus() == Focus::Hero));
    let carousel = app.carousel().expect("hero");
    assert!(carousel.is_paused());
    assert!(carousel.arrows_visible());
    let last = carousel.len() - 1;

    press(&mut app, KeyCode::Left);
    assert_eq!(app.carousel().expect("hero").current_index(), last);
    press(&mut app, KeyCode::Right);
    assert_eq!(app.carousel().expect("hero").current_index(), 0);

    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.carousel().expect("hero").current_index(), 3);
    assert!(screen(&mut app, 100, 40).contains("Business messaging automation"));

    press(&mut app, KeyCode::Tab);
    assert!(!app.carousel().expect("hero").is_paused());
}

#[tokio::test(start_paused = true)]
async fn contact_panel_survives_navigation() {
    let mut app = app_at(Route::Home);
    press(&mut app, KeyCode::Char('c'));
    assert!(screen(&mut app, 100, 30).contains("Contact Us"));

    type_text(&mut app, "g5");
    assert_eq!(app.route(), &Route::Security);
    assert!(app.contact_panel_open());
    assert!(screen(&mut app, 100, 30).contains("+919164933933"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.contact_panel_open());
}

#[tokio::test(start_paused = true)]
async fn q_quits_but_types_inside_a_field() {
    let mut app = app_at(Route::Contact);
    press(&mut app, KeyCode::Tab);
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.submission().expect("form").input().name, "q");

    press(&mut app, KeyCode::Esc);
    assert!(press(&mut app, KeyCode::Char('q')));
}
