//! Theme preference persistence and display options from config.

use std::fs;

use crossterm::event::KeyCode;

use hyperlink_config::HyperlinkConfig;
use hyperlink_core::FileThemeStore;
use hyperlink_engine::{Route, Theme, ThemePreference, ToastKind};

use crate::common::{AppBuilder, press, screen};

fn file_preference(path: &std::path::Path) -> ThemePreference {
    ThemePreference::load(Box::new(FileThemeStore::new(path)), Theme::Dark)
}

#[tokio::test(start_paused = true)]
async fn toggled_theme_is_remembered_next_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");

    let mut first = AppBuilder::new(Route::Home)
        .theme(file_preference(&path))
        .build();
    assert_eq!(first.theme(), Theme::Dark);
    assert!(screen(&mut first, 100, 30).contains("dark theme"));
    press(&mut first, KeyCode::Char('t'));
    assert_eq!(first.theme(), Theme::Light);
    assert!(first.toasts().is_empty());
    drop(first);

    let mut second = AppBuilder::new(Route::Contact)
        .theme(file_preference(&path))
        .build();
    assert_eq!(second.theme(), Theme::Light);
    assert!(screen(&mut second, 100, 30).contains("light theme"));
}

#[tokio::test(start_paused = true)]
async fn unreadable_preference_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("preferences.json");
    fs::write(&path, "{ not json").expect("seed");

    let app = AppBuilder::new(Route::Home)
        .theme(file_preference(&path))
        .build();
    assert_eq!(app.theme(), Theme::Dark);
}

#[tokio::test(start_paused = true)]
async fn unwritable_preference_still_switches_and_says_so() {
    let dir = tempfile::tempdir().expect("tempdir");
    // A directory where the file should be makes every save fail.
    let path = dir.path().join("preferences.json");
    fs::create_dir(&path).expect("blocker");

    let mut app = AppBuilder::new(Route::Home)
        .theme(file_preference(&path))
        .build();
    press(&mut app, KeyCode::Char('t'));

    assert_eq!(app.theme(), Theme::Light);
    let toast = app.toasts().latest().expect("save failure toast");
    assert_eq!(toast.kind, ToastKind::Error);
}

#[tokio::test(start_paused = true)]
async fn config_display_options_reach_the_screen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[app]\ntheme = \"light\"\nascii_only = true\nreduced_motion = true\n",
    )
    .expect("seed");

    let config = HyperlinkConfig::load_from(&path)
        .expect("valid config")
        .expect("config present");
    let ui_options = hyperlink_config::ui_options(Some(&config), None);
    assert!(ui_options.ascii_only);

    let fallback = config.initial_theme().unwrap_or_default();
    let mut app = AppBuilder::new(Route::Home)
        .ui_options(ui_options)
        .theme(ThemePreference::load(
            Box::new(hyperlink_engine::MemoryThemeStore::default()),
            fallback,
        ))
        .build();

    assert_eq!(app.theme(), Theme::Light);
    let text = screen(&mut app, 100, 30);
    assert!(text.contains("Services v"));
    assert!(!text.contains('▾'));
}
