//! Hero carousel state machine.
//!
//! States are the `N` slide positions. Every transition is immediate and the
//! index space is circular: there is no first/last special case and no
//! terminal state.

/// Cyclic slide index with hover state.
///
/// Invariant: `current < len` and `len >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    is_paused: bool,
    /// Bumped whenever a different slide becomes active, so presentation
    /// layers can restart per-slide effects.
    activation: u64,
}

impl CarouselState {
    /// A carousel over `len` slides, starting at slide 0. `None` when empty.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            is_paused: false,
            activation: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[must_use]
    pub fn activation(&self) -> u64 {
        self.activation
    }

    /// Manual arrows are only shown while the pointer is over the carousel.
    #[must_use]
    pub fn arrows_visible(&self) -> bool {
        self.is_paused
    }

    pub fn next(&mut self) {
        self.set_current((self.current + 1) % self.len);
    }

    pub fn prev(&mut self) {
        self.set_current((self.current + self.len - 1) % self.len);
    }

    /// Jump directly to `index`. Out-of-range indices are refused and leave
    /// the state untouched.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.set_current(index);
        true
    }

    pub fn pointer_enter(&mut self) {
        self.is_paused = true;
    }

    pub fn pointer_leave(&mut self) {
        self.is_paused = false;
    }

    fn set_current(&mut self, index: usize) {
        if index != self.current {
            self.current = index;
            self.activation = self.activation.wrapping_add(1);
        }
    }
}
