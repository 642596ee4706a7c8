//! App construction: config, theme preference and the submit port.

use std::sync::Arc;
use std::time::Duration;

use hyperlink_config::{
    ConfigError, DEFAULT_CONFIRMATION_WINDOW, DEFAULT_SUBMIT_LATENCY, HyperlinkConfig,
};
use hyperlink_core::{
    FileThemeStore, MemoryThemeStore, PageError, SimulatedSubmit, SubmitPort, ThemePreference,
    ThemeStore, ToastQueue,
};
use hyperlink_types::{DisclosureHost, NavState, Route, ToastKind};

use super::App;
use crate::ui::{Focus, UiOptions, ViewState};

/// Everything an [`App`] is built from. Tests assemble this directly to
/// inject a deterministic submit port and an in-memory theme store.
pub struct AppBuildParts {
    pub route: Route,
    pub ui_options: UiOptions,
    pub theme: ThemePreference,
    pub submit_port: Arc<dyn SubmitPort>,
    pub confirmation_window: Duration,
}

impl App {
    #[must_use]
    pub fn from_parts(parts: AppBuildParts) -> Self {
        let mut app = App {
            page: Err(PageError::Missing {
                path: parts.route.path().to_string(),
            }),
            route: parts.route,
            nav: NavState::default(),
            focus: Focus::default(),
            mobile_cursor: 0,
            carousel: None,
            submission: None,
            legal: DisclosureHost::new(),
            flow_modal: DisclosureHost::new(),
            contact_panel_open: false,
            address: None,
            pending_jump: false,
            theme: parts.theme,
            toasts: ToastQueue::default(),
            view: ViewState::new(parts.ui_options),
            submit_port: parts.submit_port,
            confirmation_window: parts.confirmation_window,
            should_quit: false,
        };
        app.mount_page();
        app
    }

    /// Build the app from the user's config and stored preferences.
    ///
    /// A config file that can't be read or parsed is reported as a toast and
    /// defaults are used.
    #[must_use]
    pub fn new(route: Route) -> Self {
        let (config, config_error) = match HyperlinkConfig::load() {
            Ok(config) => (config, None),
            Err(err) => {
                tracing::warn!("{err}");
                (None, Some(err))
            }
        };

        let fallback_theme = config
            .as_ref()
            .and_then(HyperlinkConfig::initial_theme)
            .unwrap_or_default();
        let theme = ThemePreference::load(Self::theme_store(), fallback_theme);

        let latency = config
            .as_ref()
            .map_or(DEFAULT_SUBMIT_LATENCY, HyperlinkConfig::submit_latency);
        let confirmation_window = config
            .as_ref()
            .map_or(DEFAULT_CONFIRMATION_WINDOW, HyperlinkConfig::confirmation_window);

        let mut app = Self::from_parts(AppBuildParts {
            route,
            ui_options: hyperlink_config::ui_options_from_env(config.as_ref()),
            theme,
            submit_port: Arc::new(SimulatedSubmit::new(latency)),
            confirmation_window,
        });

        if let Some(err) = config_error {
            app.notify(&config_error_message(&err), ToastKind::Info);
        }
        app
    }

    fn theme_store() -> Box<dyn ThemeStore> {
        match hyperlink_config::preferences_path() {
            Some(path) => Box::new(FileThemeStore::new(path)),
            None => {
                tracing::warn!("No home directory; theme preference won't persist");
                Box::new(MemoryThemeStore::default())
            }
        }
    }
}

pub(crate) fn config_error_message(err: &ConfigError) -> String {
    let path = err.path().display().to_string();
    match err {
        ConfigError::Parse { source, .. } => {
            format!("Couldn't parse {path} ({source}). Using defaults.")
        }
        ConfigError::Read { source, .. } => {
            format!("Couldn't read {path} ({source}). Using defaults.")
        }
    }
}
