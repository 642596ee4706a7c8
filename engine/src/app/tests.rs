//! Unit tests for the app state machine.

use std::sync::Arc;
use std::time::Duration;

use hyperlink_core::content::LegalDoc;
use hyperlink_core::{MemoryThemeStore, SimulatedSubmit, SubmitPort, ThemePreference};
use hyperlink_types::{Field, Route, SubmissionState, Theme, ToastKind};

use super::{App, AppBuildParts, Direction, FormAccess, SERVICES_ITEM, footer_links};
use crate::ui::{Focus, FocusRegion, FormSlot, Overlay, UiOptions};

const LATENCY: Duration = Duration::from_millis(1500);
const WINDOW: Duration = Duration::from_millis(3000);

fn app_with(port: Arc<dyn SubmitPort>, ui_options: UiOptions, theme: ThemePreference) -> App {
    App::from_parts(AppBuildParts {
        route: Route::Home,
        ui_options,
        theme,
        submit_port: port,
        confirmation_window: WINDOW,
    })
}

pub(crate) fn test_app() -> App {
    app_with(
        Arc::new(SimulatedSubmit::new(LATENCY)),
        UiOptions::default(),
        ThemePreference::load(Box::new(MemoryThemeStore::default()), Theme::Dark),
    )
}

fn type_into(app: &mut App, field: Field, text: &str) {
    app.set_focus(Focus::Form(FormSlot::Field(field)));
    if let FormAccess::Active(mut form) = app.form_mut() {
        form.enter_text(text);
    }
}

fn fill_contact_form(app: &mut App) {
    type_into(app, Field::Name, "Jo");
    type_into(app, Field::Email, "jo@x.com");
    type_into(app, Field::Phone, "9999999999");
    type_into(app, Field::Company, "Ab");
    app.set_focus(Focus::Form(FormSlot::Field(Field::Consent)));
    app.activate();
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn starts_on_home_with_the_hero_carousel() {
    let app = test_app();
    assert_eq!(app.route(), &Route::Home);
    let carousel = app.carousel().expect("home has a carousel");
    assert_eq!(carousel.len(), 6);
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(app.focus(), Focus::Content);
    assert!(app.current_slide().is_some());
}

#[tokio::test(start_paused = true)]
async fn tab_cycles_the_regions_the_page_offers() {
    let mut app = test_app();
    assert_eq!(
        app.focus_regions(),
        vec![
            FocusRegion::Nav,
            FocusRegion::Hero,
            FocusRegion::Content,
            FocusRegion::Form,
            FocusRegion::Footer,
        ]
    );

    app.focus_next();
    assert_eq!(app.focus().region(), FocusRegion::Form);
    app.focus_next();
    assert_eq!(app.focus().region(), FocusRegion::Footer);
    app.focus_next();
    assert_eq!(app.focus().region(), FocusRegion::Nav);
    app.focus_prev();
    assert_eq!(app.focus().region(), FocusRegion::Footer);
}

#[tokio::test(start_paused = true)]
async fn service_pages_offer_the_flow_grid() {
    let mut app = test_app();
    app.navigate(Route::BulkSms);
    assert!(app.focus_regions().contains(&FocusRegion::Flow));
    assert!(app.carousel().is_none());
}

#[tokio::test(start_paused = true)]
async fn hero_focus_pauses_the_carousel() {
    let mut app = test_app();
    app.set_focus(Focus::Hero);
    assert!(app.carousel().expect("carousel").arrows_visible());

    app.move_focus(Direction::Left);
    assert_eq!(app.carousel().expect("carousel").current_index(), 5);
    app.move_focus(Direction::Right);
    assert_eq!(app.carousel().expect("carousel").current_index(), 0);

    app.set_focus(Focus::Content);
    assert!(!app.carousel().expect("carousel").is_paused());
}

#[tokio::test(start_paused = true)]
async fn carousel_jump_restarts_the_slide_reveal() {
    let mut app = test_app();
    assert!(app.carousel_go_to(3));
    assert!(app.view().reveal.is_some());
    app.carousel_next();
    assert_eq!(app.carousel().expect("carousel").current_index(), 4);
    assert!(!app.carousel_go_to(6));
    assert_eq!(app.carousel().expect("carousel").current_index(), 4);
}

#[tokio::test(start_paused = true)]
async fn services_entry_drives_the_dropdown() {
    let mut app = test_app();
    app.set_focus(Focus::Nav {
        item: 0,
        dropdown: None,
    });
    assert!(!app.nav().services_dropdown_open());

    app.move_focus(Direction::Right);
    assert_eq!(
        app.focus(),
        Focus::Nav {
            item: SERVICES_ITEM,
            dropdown: None
        }
    );
    assert!(app.nav().services_dropdown_open());

    app.move_focus(Direction::Down);
    app.move_focus(Direction::Down);
    app.activate();
    assert_eq!(app.route(), &Route::Rcs);
    assert!(!app.nav().services_dropdown_open());
}

#[tokio::test(start_paused = true)]
async fn leaving_the_services_entry_closes_the_dropdown() {
    let mut app = test_app();
    app.set_focus(Focus::Nav {
        item: SERVICES_ITEM,
        dropdown: None,
    });
    app.move_focus(Direction::Right);
    assert!(!app.nav().services_dropdown_open());
    app.activate();
    assert_eq!(app.route(), &Route::HowItWorks);
}

#[tokio::test(start_paused = true)]
async fn navigation_closes_the_mobile_menu_and_resets_scroll() {
    let mut app = test_app();
    app.page_scroll_mut().set_max(40);
    app.page_scroll_mut().scroll_down(12);
    app.toggle_mobile_menu();
    assert_eq!(app.top_overlay(), Some(Overlay::MobileMenu));

    app.move_focus(Direction::Down);
    app.activate();

    assert_eq!(app.route(), &Route::Services);
    assert!(!app.nav().mobile_menu_open());
    assert_eq!(app.view().scroll.offset(), 0);
}

#[tokio::test(start_paused = true)]
async fn opening_another_legal_doc_replaces_it_at_the_top() {
    let mut app = test_app();
    app.open_legal(LegalDoc::Privacy);
    app.modal_scroll_mut().expect("dialog open").set_max(30);
    app.move_focus(Direction::Down);
    app.move_focus(Direction::Down);
    assert_eq!(app.legal_modal().scroll().offset(), 2);

    app.open_legal(LegalDoc::Dlt);
    assert_eq!(app.legal_modal().current(), Some(&LegalDoc::Dlt));
    assert_eq!(app.legal_modal().scroll().offset(), 0);
}

#[tokio::test(start_paused = true)]
async fn footer_legal_links_open_the_legal_dialog() {
    let mut app = test_app();
    let gdpr = footer_links().len() - 1;
    app.set_focus(Focus::Footer { link: gdpr });
    app.activate();
    assert_eq!(app.legal_modal().current(), Some(&LegalDoc::Gdpr));
    assert_eq!(app.route(), &Route::Home);

    app.escape();
    assert!(!app.legal_modal().is_open());
}

#[tokio::test(start_paused = true)]
async fn flow_grid_opens_step_details() {
    let mut app = test_app();
    app.navigate(Route::Otp);
    app.set_focus(Focus::Flow { step: 0 });
    app.move_focus(Direction::Right);
    app.activate();

    let second = app.flow_step_detail().expect("step detail");
    let page = app.page().expect("otp page");
    assert_eq!(second.id, page.flow[1].id);

    app.move_focus(Direction::Right);
    assert_eq!(
        app.flow_step_detail().expect("step detail").id,
        page.flow[2].id
    );
    assert_eq!(app.focus(), Focus::Flow { step: 2 });
}

#[tokio::test(start_paused = true)]
async fn unknown_flow_step_renders_nothing() {
    let mut app = test_app();
    app.navigate(Route::Voice);
    app.open_flow_step("no-such-step");
    assert!(app.flow_modal().is_open());
    assert!(app.flow_step_detail().is_none());
}

#[tokio::test(start_paused = true)]
async fn escape_closes_overlays_topmost_first() {
    let mut app = test_app();
    app.toggle_contact_panel();
    app.toggle_mobile_menu();
    app.open_legal(LegalDoc::Terms);

    assert_eq!(app.top_overlay(), Some(Overlay::LegalModal));
    app.escape();
    assert_eq!(app.top_overlay(), Some(Overlay::MobileMenu));
    app.escape();
    assert_eq!(app.top_overlay(), Some(Overlay::ContactPanel));
    app.escape();
    assert_eq!(app.top_overlay(), None);
}

#[tokio::test(start_paused = true)]
async fn reduced_motion_opens_dialogs_without_animation() {
    let mut app = app_with(
        Arc::new(SimulatedSubmit::new(LATENCY)),
        UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ThemePreference::load(Box::new(MemoryThemeStore::default()), Theme::Dark),
    );
    app.open_legal(LegalDoc::Privacy);
    assert!(app.view().modal_effect.is_none());
    assert!(app.view().reveal.is_none());

    let mut animated = test_app();
    animated.open_legal(LegalDoc::Privacy);
    assert!(animated.view().modal_effect.is_some());
}

#[tokio::test(start_paused = true)]
async fn contact_form_submission_runs_end_to_end() {
    let mut app = test_app();
    app.navigate(Route::Contact);
    fill_contact_form(&mut app);

    app.set_focus(Focus::Form(FormSlot::Submit));
    app.activate();
    assert!(app.submission().expect("form").state().is_submitting());

    app.activate();
    settle().await;
    tokio::time::advance(LATENCY).await;
    settle().await;
    assert!(app.tick());

    let flow = app.submission().expect("form");
    assert!(flow.state().is_submitted());
    assert!(flow.input().is_empty());
    let toasts: Vec<_> = app.toasts().iter().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Thank you! We'll be in touch shortly.");
    assert_eq!(toasts[0].kind, ToastKind::Success);

    tokio::time::advance(WINDOW).await;
    app.tick();
    assert_eq!(
        app.submission().expect("form").state(),
        &SubmissionState::Idle
    );
}

#[tokio::test(start_paused = true)]
async fn leaving_the_page_abandons_a_pending_submission() {
    let mut app = test_app();
    app.navigate(Route::Contact);
    fill_contact_form(&mut app);
    app.set_focus(Focus::Form(FormSlot::Submit));
    app.activate();
    settle().await;

    app.navigate(Route::Security);
    tokio::time::advance(LATENCY).await;
    settle().await;
    app.tick();

    assert!(app.toasts().is_empty());
    app.navigate(Route::Contact);
    assert_eq!(
        app.submission().expect("form").state(),
        &SubmissionState::Idle
    );
}

#[tokio::test(start_paused = true)]
async fn toasts_expire_on_tick() {
    let mut app = test_app();
    app.notify("Heads up", ToastKind::Info);
    tokio::time::advance(Duration::from_secs(5)).await;
    assert!(app.tick());
    assert!(app.toasts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn theme_toggle_reports_a_failed_save() {
    let mut app = app_with(
        Arc::new(SimulatedSubmit::new(LATENCY)),
        UiOptions::default(),
        ThemePreference::load(Box::new(MemoryThemeStore::read_only(None)), Theme::Dark),
    );
    app.toggle_theme();
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(
        app.toasts().latest().map(|toast| toast.kind),
        Some(ToastKind::Error)
    );

    let mut app = test_app();
    app.toggle_theme();
    assert_eq!(app.theme(), Theme::Light);
    assert!(app.toasts().is_empty());
}

#[tokio::test(start_paused = true)]
async fn jump_keys_pick_header_entries() {
    let mut app = test_app();
    app.start_jump();
    assert!(app.jump_pending());
    assert!(app.finish_jump('6'));
    assert_eq!(app.route(), &Route::Contact);

    app.start_jump();
    assert!(!app.finish_jump('9'));
    assert!(!app.jump_pending());
    assert_eq!(app.route(), &Route::Contact);
}

#[tokio::test(start_paused = true)]
async fn unknown_paths_render_the_not_found_page() {
    let mut app = test_app();
    app.navigate_path("/pricing");
    assert!(app.page().is_err());
    assert_eq!(
        app.focus_regions(),
        vec![FocusRegion::Nav, FocusRegion::Content, FocusRegion::Footer]
    );
    assert!(app.submission().is_none());

    app.activate();
    assert_eq!(app.route(), &Route::Home);
}
