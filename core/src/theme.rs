//! Persisted light/dark preference.
//!
//! [`ThemePreference`] holds the active [`Theme`] and broadcasts changes over a
//! `watch` channel so every view redraws from the same value. Persistence goes
//! through a [`ThemeStore`]; a store that can't be read or written degrades to
//! in-memory behavior instead of taking the app down.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use hyperlink_types::Theme;
use hyperlink_utils::{
    AtomicWriteOptions, PersistMode, atomic_write_with_options, recover_bak_file,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::watch;

#[derive(Debug, Error)]
pub enum ThemeStoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("theme store is unavailable")]
    Unavailable,
}

/// Durable home of the theme preference.
pub trait ThemeStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError>;
    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredPreference {
    theme: Theme,
}

/// JSON file store: `{"theme":"dark"}`.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        recover_bak_file(&self.path);
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ThemeStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        let stored: StoredPreference =
            serde_json::from_str(&raw).map_err(|source| ThemeStoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(stored.theme))
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        let bytes = serde_json::to_vec(&StoredPreference { theme }).map_err(|source| {
            ThemeStoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        let options = AtomicWriteOptions {
            mode: PersistMode::OwnerOnly,
            ..AtomicWriteOptions::default()
        };
        atomic_write_with_options(&self.path, &bytes, options).map_err(|source| {
            ThemeStoreError::Io {
                path: self.path.clone(),
                source,
            }
        })
    }
}

/// Process-local store. Can be told to refuse writes.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: Mutex<Option<Theme>>,
    reject_saves: bool,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new(initial: Option<Theme>) -> Self {
        Self {
            saved: Mutex::new(initial),
            reject_saves: false,
        }
    }

    /// A store whose every `save` fails, like a read-only profile directory.
    #[must_use]
    pub fn read_only(initial: Option<Theme>) -> Self {
        Self {
            saved: Mutex::new(initial),
            reject_saves: true,
        }
    }

    #[must_use]
    pub fn saved(&self) -> Option<Theme> {
        self.saved.lock().ok().and_then(|saved| *saved)
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeStoreError> {
        self.saved
            .lock()
            .map(|saved| *saved)
            .map_err(|_| ThemeStoreError::Unavailable)
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        if self.reject_saves {
            return Err(ThemeStoreError::Unavailable);
        }
        let mut saved = self
            .saved
            .lock()
            .map_err(|_| ThemeStoreError::Unavailable)?;
        *saved = Some(theme);
        Ok(())
    }
}

/// The active theme plus its persistence.
pub struct ThemePreference {
    current: watch::Sender<Theme>,
    store: Box<dyn ThemeStore>,
}

impl std::fmt::Debug for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("current", &*self.current.borrow())
            .finish_non_exhaustive()
    }
}

impl ThemePreference {
    /// Read the stored preference, falling back to `fallback` when nothing
    /// is stored or the store can't be read.
    #[must_use]
    pub fn load(store: Box<dyn ThemeStore>, fallback: Theme) -> Self {
        let theme = match store.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => fallback,
            Err(err) => {
                tracing::warn!("Theme preference unreadable, using {fallback}: {err}");
                fallback
            }
        };
        tracing::debug!(theme = theme.as_str(), "theme loaded");
        let (current, _) = watch::channel(theme);
        Self { current, store }
    }

    #[must_use]
    pub fn get(&self) -> Theme {
        *self.current.borrow()
    }

    /// Apply `theme` immediately and persist it.
    ///
    /// The in-memory value changes even when persisting fails; the error is
    /// returned so the caller can tell the user.
    pub fn set(&self, theme: Theme) -> Result<(), ThemeStoreError> {
        self.current.send_if_modified(|current| {
            let changed = *current != theme;
            *current = theme;
            changed
        });
        tracing::info!(theme = theme.as_str(), "theme changed");
        self.store.save(theme).inspect_err(|err| {
            tracing::warn!("Failed to persist theme preference: {err}");
        })
    }

    /// Flip between light and dark. Returns the new theme and the save result.
    pub fn toggle(&self) -> (Theme, Result<(), ThemeStoreError>) {
        let next = self.get().toggled();
        (next, self.set(next))
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.current.subscribe()
    }
}
