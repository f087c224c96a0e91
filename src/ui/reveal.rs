//! # Result Reveal Animation
//!
//! One-shot entrance effects for an externally computed prediction result:
//! a progress bar that fills after a short delay, a card that fades in, and
//! a score counter that counts up from zero. All three are pure functions
//! of the time elapsed since a single start instant, so the event loop only
//! needs to redraw while the animation is live; nothing is scheduled and
//! nothing can be cancelled or replayed.

use std::time::{Duration, Instant};

/// Delay before the progress bar starts filling.
pub const PROGRESS_DELAY: Duration = Duration::from_millis(300);
/// Duration of the progress bar fill once started.
pub const PROGRESS_TRANSITION: Duration = Duration::from_millis(600);
/// Delay before the card entrance fade begins.
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(100);
/// Duration of the card entrance fade.
pub const ENTRANCE_FADE: Duration = Duration::from_millis(600);
/// Interval between counter steps.
pub const COUNTER_STEP: Duration = Duration::from_millis(50);
/// Number of counter steps from zero to the target.
pub const COUNTER_STEPS: u32 = 30;

/// The revealed result and the start instant its animations key off.
#[derive(Debug, Clone)]
pub struct Reveal {
    started_at: Instant,
    score: u16,
    fill_percent: u16,
}

impl Reveal {
    /// Start the reveal now. `fill_percent` is the supplied target width of
    /// the progress bar, usually equal to the score.
    pub fn new(score: u16, fill_percent: u16) -> Self {
        Self::starting_at(Instant::now(), score, fill_percent)
    }

    /// Start the reveal at an explicit instant (used by tests).
    pub fn starting_at(started_at: Instant, score: u16, fill_percent: u16) -> Self {
        Self {
            started_at,
            score,
            fill_percent,
        }
    }

    /// The final score the counter settles on.
    pub fn score(&self) -> u16 {
        self.score
    }

    /// The target fill of the progress bar, in percent.
    pub fn fill_percent(&self) -> u16 {
        self.fill_percent
    }

    /// Current progress bar fill in percent: 0 until the delay passes, then
    /// a linear transition to the target.
    pub fn progress_percent(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < PROGRESS_DELAY {
            return 0.0;
        }
        let t = (elapsed - PROGRESS_DELAY).as_secs_f64() / PROGRESS_TRANSITION.as_secs_f64();
        f64::from(self.fill_percent) * t.min(1.0)
    }

    /// Current card entrance opacity in `[0, 1]`.
    pub fn entrance_opacity(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed < ENTRANCE_DELAY {
            return 0.0;
        }
        let t = (elapsed - ENTRANCE_DELAY).as_secs_f64() / ENTRANCE_FADE.as_secs_f64();
        t.min(1.0)
    }

    /// Current counter value: `score / 30` per elapsed 50ms step, rounded
    /// for display, clamped so it never overshoots the target.
    pub fn counter_value(&self, now: Instant) -> u16 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let steps = (elapsed.as_millis() / COUNTER_STEP.as_millis()) as u32;
        if steps >= COUNTER_STEPS {
            return self.score;
        }
        let increment = f64::from(self.score) / f64::from(COUNTER_STEPS);
        let current = (increment * f64::from(steps)).round();
        (current as u16).min(self.score)
    }

    /// True once all three animations have reached their final values.
    pub fn is_settled(&self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);
        elapsed >= PROGRESS_DELAY + PROGRESS_TRANSITION
            && elapsed >= ENTRANCE_DELAY + ENTRANCE_FADE
            && elapsed >= COUNTER_STEP * COUNTER_STEPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_progress_holds_zero_through_delay() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 90, 90);
        assert_eq!(reveal.progress_percent(at(start, 0)), 0.0);
        assert_eq!(reveal.progress_percent(at(start, 299)), 0.0);
    }

    #[test]
    fn test_progress_reaches_target() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 90, 87);
        let done = at(start, 900);
        assert_eq!(reveal.progress_percent(done), 87.0);
        // And stays there.
        assert_eq!(reveal.progress_percent(at(start, 10_000)), 87.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 90, 90);
        let mut last = 0.0;
        for ms in (0..1200).step_by(37) {
            let v = reveal.progress_percent(at(start, ms));
            assert!(v >= last, "progress went backwards at {ms}ms");
            assert!(v <= 90.0);
            last = v;
        }
    }

    #[test]
    fn test_entrance_fade_window() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 50, 50);
        assert_eq!(reveal.entrance_opacity(at(start, 0)), 0.0);
        assert_eq!(reveal.entrance_opacity(at(start, 99)), 0.0);
        let mid = reveal.entrance_opacity(at(start, 400));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(reveal.entrance_opacity(at(start, 700)), 1.0);
    }

    #[test]
    fn test_counter_never_overshoots() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 90, 90);
        for ms in (0..2500).step_by(10) {
            assert!(reveal.counter_value(at(start, ms)) <= 90);
        }
        assert_eq!(reveal.counter_value(at(start, 1500)), 90);
        assert_eq!(reveal.counter_value(at(start, 60_000)), 90);
    }

    #[test]
    fn test_counter_starts_at_zero() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 90, 90);
        assert_eq!(reveal.counter_value(at(start, 0)), 0);
        assert_eq!(reveal.counter_value(at(start, 49)), 0);
    }

    #[test]
    fn test_counter_steps_advance() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 90, 90);
        // 90 / 30 = 3 per step.
        assert_eq!(reveal.counter_value(at(start, 50)), 3);
        assert_eq!(reveal.counter_value(at(start, 100)), 6);
        assert_eq!(reveal.counter_value(at(start, 750)), 45);
    }

    #[test]
    fn test_counter_zero_target() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 0, 0);
        assert_eq!(reveal.counter_value(at(start, 0)), 0);
        assert_eq!(reveal.counter_value(at(start, 2000)), 0);
    }

    #[test]
    fn test_is_settled() {
        let start = Instant::now();
        let reveal = Reveal::starting_at(start, 90, 90);
        assert!(!reveal.is_settled(at(start, 0)));
        assert!(!reveal.is_settled(at(start, 1000)));
        assert!(reveal.is_settled(at(start, 1500)));
    }
}
