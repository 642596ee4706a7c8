//! Host for a disclosure dialog.
//!
//! A host shows at most one content record at a time, keyed by `K`. Opening
//! any key (even the one already shown) resets the body scroll to the top.

use crate::ui::ScrollState;

#[derive(Debug, Clone)]
pub struct DisclosureHost<K> {
    open: Option<K>,
    scroll: ScrollState,
}

impl<K> Default for DisclosureHost<K> {
    fn default() -> Self {
        Self {
            open: None,
            scroll: ScrollState::default(),
        }
    }
}

impl<K> DisclosureHost<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `key`, replacing whatever was open.
    pub fn open(&mut self, key: K) {
        self.open = Some(key);
        self.scroll.to_top();
    }

    pub fn close(&mut self) {
        self.open = None;
        self.scroll.to_top();
    }

    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.open.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}
