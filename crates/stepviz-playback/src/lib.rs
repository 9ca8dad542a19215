//! Playback controller for recorded step sequences.
//!
//! [`Playback`] is a cursor over a fixed, precomputed sequence. It is generic
//! over the step type and owns its entire state (cursor, play state,
//! interval, next deadline), so it is testable without a UI harness. The host
//! event loop supplies the clock: call [`Playback::poll`] from a timer
//! callback with the current [`Instant`], and the controller advances at most
//! one step per call. Reaching the last index parks the controller in
//! [`PlayState::Paused`]; playback is terminal, not looping.

use std::time::{Duration, Instant};

/// Fastest auto-advance the UI exposes.
pub const MIN_STEP_INTERVAL: Duration = Duration::from_millis(100);
/// Slowest auto-advance the UI exposes.
pub const MAX_STEP_INTERVAL: Duration = Duration::from_millis(1900);
/// Default auto-advance interval.
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(700);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Playing,
    Paused,
}

/// Cursor over a recorded step sequence.
#[derive(Clone, Debug)]
pub struct Playback<S> {
    steps: Vec<S>,
    cursor: usize,
    state: PlayState,
    interval: Duration,
    next_due: Option<Instant>,
}

impl<S> Playback<S> {
    pub fn new(steps: Vec<S>) -> Self {
        Self::with_interval(steps, DEFAULT_STEP_INTERVAL)
    }

    pub fn with_interval(steps: Vec<S>, interval: Duration) -> Self {
        Self {
            steps,
            cursor: 0,
            state: PlayState::Idle,
            interval: clamp_interval(interval),
            next_due: None,
        }
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// The step under the cursor, `None` only for an empty sequence.
    pub fn current(&self) -> Option<&S> {
        self.steps.get(self.cursor)
    }

    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.steps.len()
    }

    /// Changes the auto-advance interval, clamped to the supported range.
    /// A pending deadline is left as scheduled; the new interval applies
    /// from the next advance.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = clamp_interval(interval);
    }

    /// Starts auto-advance. Already at the last step (including a
    /// single-step sequence) there is nothing to play: the controller goes
    /// straight to `Paused` and no deadline is scheduled.
    pub fn play(&mut self, now: Instant) {
        if self.at_end() {
            self.state = PlayState::Paused;
            self.next_due = None;
            return;
        }
        self.state = PlayState::Playing;
        self.next_due = Some(now + self.interval);
    }

    /// Stops auto-advance, preserving the cursor.
    pub fn pause(&mut self) {
        self.state = PlayState::Paused;
        self.next_due = None;
    }

    /// Advances one step, clamped at the last index. No-op at the boundary.
    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Steps back one, clamped at zero. No-op at the boundary.
    pub fn previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Back to the first step, auto-advance stopped.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = PlayState::Idle;
        self.next_due = None;
    }

    /// Timer tick: advances one step if playing and the deadline has passed.
    /// Returns whether the cursor moved. Reaching the last index pauses.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state != PlayState::Playing {
            return false;
        }
        if self.at_end() {
            self.pause();
            return false;
        }
        let due = self.next_due.expect("playing state has a deadline");
        if now < due {
            return false;
        }
        self.cursor += 1;
        if self.at_end() {
            self.pause();
        } else {
            self.next_due = Some(now + self.interval);
        }
        true
    }
}

fn clamp_interval(interval: Duration) -> Duration {
    interval.clamp(MIN_STEP_INTERVAL, MAX_STEP_INTERVAL)
}
