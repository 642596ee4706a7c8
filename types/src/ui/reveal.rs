//! Staggered text reveal for carousel slides.
//!
//! Each line of a slide starts fading in `stagger` after the previous one.

use std::time::Duration;

use super::animation::{EffectTimer, normalized_progress};

#[derive(Debug, Clone)]
pub struct RevealEffect {
    timer: EffectTimer,
    stagger: Duration,
    line_duration: Duration,
    lines: usize,
}

impl RevealEffect {
    #[must_use]
    pub fn staggered(lines: usize, stagger: Duration, line_duration: Duration) -> Self {
        let last_index = u32::try_from(lines.saturating_sub(1)).unwrap_or(u32::MAX);
        let last_start = stagger.saturating_mul(last_index);
        Self {
            timer: EffectTimer::new(last_start.saturating_add(line_duration)),
            stagger,
            line_duration,
            lines,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    /// Visibility of `line` in `0.0..=1.0`. Lines past the end are fully visible.
    #[must_use]
    pub fn line_progress(&self, line: usize) -> f32 {
        if line >= self.lines {
            return 1.0;
        }
        let start = self
            .stagger
            .saturating_mul(u32::try_from(line).unwrap_or(u32::MAX));
        let since_start = self.timer.elapsed().saturating_sub(start);
        normalized_progress(since_start, self.line_duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
