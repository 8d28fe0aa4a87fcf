//! Single-timer autoplay bookkeeping.
//!
//! The view layer implements a "timer" as a one-shot sleep that reports back
//! with the token it was started with. Every start bumps the generation, so a
//! sleep belonging to an older start is recognised as stale and dropped. That
//! keeps the invariant that at most one timer can ever advance the slider.

/// Identifies one started timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Autoplay {
    interval_ms: u64,
    generation: u64,
    active: Option<TimerToken>,
    paused: bool,
}

impl Autoplay {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            generation: 0,
            active: None,
            paused: false,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Start a fresh timer, cancelling whichever one was active.
    pub fn start(&mut self) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.active = Some(token);
        token
    }

    pub fn stop(&mut self) {
        self.active = None;
    }

    /// Restart after a navigation. While paused the timer stays stopped.
    pub fn reset(&mut self) -> Option<TimerToken> {
        self.stop();
        if self.paused {
            None
        } else {
            Some(self.start())
        }
    }

    /// Pointer entered the slider.
    pub fn pause(&mut self) {
        self.paused = true;
        self.stop();
    }

    /// Pointer left the slider.
    pub fn resume(&mut self) -> TimerToken {
        self.paused = false;
        self.start()
    }

    /// Consume a timer firing. Returns `true` only for the live token; the
    /// timer is spent afterwards and must be restarted by the caller.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.active == Some(token) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
