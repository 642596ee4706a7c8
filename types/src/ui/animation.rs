use std::time::Duration;

/// Where an effect is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    Running { progress: f32 },
    Completed,
}

pub(crate) fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub(crate) struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub(crate) fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub(crate) fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub(crate) fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimPhase, EffectTimer, normalized_progress};
    use std::time::Duration;

    #[test]
    fn progress_is_clamped() {
        let total = Duration::from_millis(100);
        let half = normalized_progress(Duration::from_millis(50), total);
        assert!((half - 0.5).abs() < f32::EPSILON);
        let over = normalized_progress(Duration::from_secs(5), total);
        assert!((over - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn timer_completes_at_duration() {
        let mut timer = EffectTimer::new(Duration::from_millis(100));
        timer.advance(Duration::from_millis(99));
        assert!(matches!(timer.phase(), AnimPhase::Running { .. }));
        timer.advance(Duration::from_millis(1));
        assert_eq!(timer.phase(), AnimPhase::Completed);
    }
}
