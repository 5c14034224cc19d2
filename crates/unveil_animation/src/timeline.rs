//! One-shot reveal timelines
//!
//! A [`RevealTimeline`] plays a single interpolation from an initial style to
//! a target style over a fixed duration, after an optional delay. Playback is
//! driven by explicit [`tick`](RevealTimeline::tick) calls with a millisecond
//! timestep, so the player has no clock of its own.
//!
//! Two guarantees hold for every run:
//!
//! - While the delay is pending, [`sample`](RevealTimeline::sample) returns
//!   the initial style unchanged; no snapshot ever precedes it.
//! - Once elapsed time crosses `delay + duration`, the timeline is finished
//!   and `sample` returns the target style exactly. There is no float drift
//!   in the final frame; the terminal snapshot is the target by construction.
//!
//! A finished timeline stays finished. `start` on a finished timeline is a
//! no-op; reveals play once.

use unveil_core::Easing;

use crate::style::{Interpolate, RevealStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlayState {
    /// Built but not yet triggered; time does not accrue
    Pending,
    /// Triggered; elapsed time accrues on every tick
    Running,
    /// Ran to completion; terminal
    Finished,
}

/// A finite, non-restartable style interpolation
#[derive(Clone, Debug)]
pub struct RevealTimeline {
    initial: RevealStyle,
    target: RevealStyle,
    duration_ms: f32,
    delay_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    state: PlayState,
}

impl RevealTimeline {
    pub fn new(initial: RevealStyle, target: RevealStyle, duration_ms: f32) -> Self {
        Self {
            initial,
            target,
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing: Easing::default(),
            elapsed_ms: 0.0,
            state: PlayState::Pending,
        }
    }

    /// Delay playback start by `delay_ms` after the trigger
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Begin playback; the delay countdown starts here
    ///
    /// No-op if the timeline is already running or has finished.
    pub fn start(&mut self) {
        if self.state == PlayState::Pending {
            self.state = PlayState::Running;
            if self.total_ms() <= 0.0 {
                // Zero-length reveal lands immediately
                self.state = PlayState::Finished;
            }
        }
    }

    /// Advance by `dt_ms`; returns true while still running
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if self.state != PlayState::Running {
            return false;
        }

        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.total_ms() {
            self.state = PlayState::Finished;
            return false;
        }
        true
    }

    /// Current style snapshot
    pub fn sample(&self) -> RevealStyle {
        match self.state {
            PlayState::Pending => self.initial,
            PlayState::Finished => self.target,
            PlayState::Running => {
                let active_ms = self.elapsed_ms - self.delay_ms;
                if active_ms <= 0.0 {
                    return self.initial;
                }
                let t = if self.duration_ms <= 0.0 {
                    1.0
                } else {
                    (active_ms / self.duration_ms).min(1.0)
                };
                if t >= 1.0 {
                    return self.target;
                }
                self.initial.interpolate(&self.target, self.easing.apply(t))
            }
        }
    }

    /// Normalized playback position in `0.0..=1.0`, excluding the delay,
    /// before easing
    pub fn progress(&self) -> f32 {
        match self.state {
            PlayState::Pending => 0.0,
            PlayState::Finished => 1.0,
            PlayState::Running => {
                if self.duration_ms <= 0.0 {
                    return 1.0;
                }
                ((self.elapsed_ms - self.delay_ms) / self.duration_ms).clamp(0.0, 1.0)
            }
        }
    }

    pub fn has_started(&self) -> bool {
        self.state != PlayState::Pending
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlayState::Finished
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> f32 {
        self.delay_ms
    }

    pub fn initial(&self) -> RevealStyle {
        self.initial
    }

    pub fn target(&self) -> RevealStyle {
        self.target
    }

    fn total_ms(&self) -> f32 {
        self.delay_ms + self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up(duration_ms: f32) -> RevealTimeline {
        RevealTimeline::new(
            RevealStyle::hidden().with_y(20.0),
            RevealStyle::visible(),
            duration_ms,
        )
    }

    #[test]
    fn test_holds_initial_before_start() {
        let mut timeline = fade_up(800.0);
        assert_eq!(timeline.sample(), RevealStyle::hidden().with_y(20.0));

        // Ticking an untriggered timeline accrues nothing
        assert!(!timeline.tick(500.0));
        assert_eq!(timeline.sample(), RevealStyle::hidden().with_y(20.0));
        assert!(!timeline.has_started());
    }

    #[test]
    fn test_holds_initial_during_delay() {
        let mut timeline = fade_up(800.0).with_delay(200.0);
        timeline.start();

        assert!(timeline.tick(100.0));
        assert_eq!(timeline.sample(), RevealStyle::hidden().with_y(20.0));
        assert_eq!(timeline.progress(), 0.0);

        // First frame past the delay starts moving
        assert!(timeline.tick(150.0));
        let sampled = timeline.sample();
        assert!(sampled.opacity > 0.0);
        assert!(sampled.y < 20.0);
    }

    #[test]
    fn test_reaches_target_exactly_at_duration() {
        let mut timeline = fade_up(800.0);
        timeline.start();

        // Uneven frame steps; the last one overshoots 800ms
        let mut elapsed = 0.0;
        while elapsed < 800.0 {
            timeline.tick(16.7);
            elapsed += 16.7;
        }

        assert!(timeline.is_finished());
        assert_eq!(timeline.sample(), RevealStyle::visible());
        assert_eq!(timeline.sample().opacity, 1.0);
        assert_eq!(timeline.sample().y, 0.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut timeline = fade_up(500.0).with_delay(100.0);
        timeline.start();

        let mut prev_progress = timeline.progress();
        let mut prev_opacity = timeline.sample().opacity;
        for _ in 0..80 {
            timeline.tick(10.0);
            let progress = timeline.progress();
            let opacity = timeline.sample().opacity;
            assert!(progress >= prev_progress);
            assert!(opacity >= prev_opacity);
            prev_progress = progress;
            prev_opacity = opacity;
        }
        assert_eq!(prev_progress, 1.0);
    }

    #[test]
    fn test_finished_timeline_does_not_restart() {
        let mut timeline = fade_up(100.0);
        timeline.start();
        while timeline.tick(25.0) {}

        assert!(timeline.is_finished());
        timeline.start();
        assert!(timeline.is_finished());
        assert!(!timeline.tick(25.0));
        assert_eq!(timeline.sample(), RevealStyle::visible());
    }

    #[test]
    fn test_zero_duration_lands_immediately() {
        let mut timeline = fade_up(0.0);
        timeline.start();

        assert!(timeline.is_finished());
        assert_eq!(timeline.sample(), RevealStyle::visible());
    }

    #[test]
    fn test_zero_duration_with_delay_waits_out_the_delay() {
        let mut timeline = fade_up(0.0).with_delay(120.0);
        timeline.start();

        assert!(timeline.is_running());
        assert_eq!(timeline.sample(), RevealStyle::hidden().with_y(20.0));

        assert!(timeline.tick(60.0));
        assert_eq!(timeline.sample(), RevealStyle::hidden().with_y(20.0));

        assert!(!timeline.tick(60.0));
        assert_eq!(timeline.sample(), RevealStyle::visible());
    }

    #[test]
    fn test_overshooting_tick_clamps_to_target() {
        let mut timeline = fade_up(300.0).with_delay(50.0);
        timeline.start();

        assert!(!timeline.tick(10_000.0));
        assert!(timeline.is_finished());
        assert_eq!(timeline.sample(), RevealStyle::visible());
        assert_eq!(timeline.progress(), 1.0);
    }
}
