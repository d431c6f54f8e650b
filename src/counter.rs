//! One-shot count-up animation that starts when its element is revealed.
//!
//! `RevealCounter` moves `Idle -> Running -> Done`. The first `true`
//! visibility signal arms it; the first display frame after that fixes the
//! start time, and every later frame interpolates linearly until
//! `duration_ms` has elapsed. Nothing moves it back to `Idle`.

use crate::frame::FrameControl;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CounterPhase {
    Idle,
    /// `started_at` is filled in by the first frame after the trigger.
    Running { started_at: Option<f64> },
    Done,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealCounter {
    target: u32,
    duration_ms: u32,
    value: u32,
    phase: CounterPhase,
}

/// Linear interpolation from 0 to `target` over `duration_ms`.
///
/// Clamped to `[0, target]`; a zero duration jumps straight to `target`.
pub fn interpolate(target: u32, duration_ms: u32, elapsed_ms: f64) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms as f64 {
        return target;
    }
    if elapsed_ms <= 0.0 {
        return 0;
    }
    let value = (target as f64 * elapsed_ms / duration_ms as f64).round() as u32;
    value.min(target)
}

impl RevealCounter {
    pub fn new(target: u32, duration_ms: u32) -> Self {
        Self {
            target,
            duration_ms,
            value: 0,
            phase: CounterPhase::Idle,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// True once the animation has been started, forever after.
    pub fn has_triggered(&self) -> bool {
        self.phase != CounterPhase::Idle
    }

    pub fn is_done(&self) -> bool {
        self.phase == CounterPhase::Done
    }

    /// Feed the visibility signal. Returns `true` only on the edge that
    /// starts the animation, i.e. when the caller must begin driving frames.
    pub fn on_visibility(&mut self, is_visible: bool) -> bool {
        if !is_visible || self.has_triggered() {
            return false;
        }

        if self.target == 0 || self.duration_ms == 0 {
            debug!("Counter to {} completes immediately", self.target);
            self.value = self.target;
            self.phase = CounterPhase::Done;
            return false;
        }

        debug!(
            "Counter to {} triggered ({} ms)",
            self.target, self.duration_ms
        );
        self.phase = CounterPhase::Running { started_at: None };
        true
    }

    /// Advance the animation to `now_ms`.
    pub fn on_frame(&mut self, now_ms: f64) -> FrameControl {
        let started_at = match self.phase {
            CounterPhase::Idle | CounterPhase::Done => return FrameControl::Stop,
            CounterPhase::Running {
                started_at: Some(started_at),
            } => started_at,
            CounterPhase::Running { started_at: None } => {
                self.phase = CounterPhase::Running {
                    started_at: Some(now_ms),
                };
                now_ms
            }
        };

        let elapsed = now_ms - started_at;
        if elapsed >= self.duration_ms as f64 {
            debug!("Counter reached {}", self.target);
            self.value = self.target;
            self.phase = CounterPhase::Done;
            return FrameControl::Stop;
        }

        // Out-of-order timestamps must not move the display backwards.
        self.value = self
            .value
            .max(interpolate(self.target, self.duration_ms, elapsed));
        FrameControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trigger the counter and pin its start time to `start_ms`.
    fn started(target: u32, duration_ms: u32, start_ms: f64) -> RevealCounter {
        let mut counter = RevealCounter::new(target, duration_ms);
        assert!(counter.on_visibility(true));
        assert_eq!(counter.on_frame(start_ms), FrameControl::Continue);
        counter
    }

    #[test]
    fn stays_at_zero_while_hidden() {
        let mut counter = RevealCounter::new(100, 2000);
        for t in (0..=5_000).step_by(16) {
            counter.on_visibility(false);
            assert_eq!(counter.on_frame(t as f64), FrameControl::Stop);
            assert_eq!(counter.value(), 0);
        }
        assert!(!counter.has_triggered());
        assert_eq!(counter.phase(), CounterPhase::Idle);
    }

    #[test]
    fn counts_linearly_then_holds_target() {
        let mut counter = started(100, 2000, 10_000.0);
        assert_eq!(counter.value(), 0);

        counter.on_frame(11_000.0);
        assert!((49..=51).contains(&counter.value()));

        assert_eq!(counter.on_frame(12_000.0), FrameControl::Stop);
        assert_eq!(counter.value(), 100);
        assert!(counter.is_done());

        assert_eq!(counter.on_frame(20_000.0), FrameControl::Stop);
        assert_eq!(counter.value(), 100);
    }

    #[test]
    fn values_never_decrease_during_run() {
        let mut counter = started(37, 1500, 0.0);
        let mut last = 0;
        for t in (0..=1_600).step_by(16) {
            counter.on_frame(t as f64);
            assert!(counter.value() >= last);
            assert!(counter.value() <= 37);
            last = counter.value();
        }
        assert_eq!(last, 37);
    }

    #[test]
    fn visibility_toggle_does_not_restart() {
        let mut counter = started(100, 2000, 0.0);
        counter.on_frame(2_500.0);
        assert_eq!(counter.value(), 100);

        assert!(!counter.on_visibility(false));
        assert!(!counter.on_visibility(true));
        assert_eq!(counter.value(), 100);
        assert!(counter.has_triggered());
        assert_eq!(counter.on_frame(3_000.0), FrameControl::Stop);
        assert_eq!(counter.value(), 100);
    }

    #[test]
    fn repeated_visible_signal_mid_run_is_noop() {
        let mut counter = started(100, 2000, 0.0);
        counter.on_frame(1_000.0);
        let midway = counter.value();

        assert!(!counter.on_visibility(true));
        assert_eq!(
            counter.phase(),
            CounterPhase::Running {
                started_at: Some(0.0)
            }
        );
        counter.on_frame(1_500.0);
        assert!(counter.value() > midway);
    }

    #[test]
    fn zero_target_stays_zero() {
        let mut counter = RevealCounter::new(0, 2000);
        assert!(!counter.on_visibility(true));
        assert!(counter.is_done());
        for t in (0..=4_000).step_by(100) {
            counter.on_frame(t as f64);
            assert_eq!(counter.value(), 0);
        }
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut counter = RevealCounter::new(42, 0);
        assert!(!counter.on_visibility(true));
        assert_eq!(counter.value(), 42);
        assert_eq!(interpolate(42, 0, 0.0), 42);
    }

    #[test]
    fn interpolate_endpoints() {
        assert_eq!(interpolate(100, 2000, 0.0), 0);
        assert_eq!(interpolate(100, 2000, -5.0), 0);
        assert_eq!(interpolate(100, 2000, 1000.0), 50);
        assert_eq!(interpolate(100, 2000, 2000.0), 100);
        assert_eq!(interpolate(100, 2000, 9000.0), 100);
    }
}
