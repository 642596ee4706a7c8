//! Scroll position for scrollable regions (pages, dialog bodies).

/// Offset from the top, clamped to the last known content height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u16,
    max: u16,
}

impl ScrollState {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset.min(self.max)
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Record the scrollable range after layout (content height minus viewport).
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset().saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max;
    }
}
