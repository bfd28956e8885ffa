use super::enums::{Availability, TimerKind};
use chrono::Duration;
use std::time::Instant;

/// A countup stopwatch driven by tick deltas
#[derive(Debug, Clone)]
pub struct Stopwatch {
    /// Total elapsed time accumulated from ticks
    pub elapsed: Duration,
    /// Whether ticks currently accumulate
    pub running: bool,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            elapsed: Duration::zero(),
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Accumulate a tick delta if the stopwatch is running
    pub fn tick(&mut self, delta: std::time::Duration) {
        if self.running {
            self.elapsed = self.elapsed + Duration::from_std(delta).unwrap_or(Duration::zero());
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// The focus / rest stopwatch pair.
///
/// At most one of the two runs at any time. The offsets hold wall-clock time
/// that passed while the process was suspended; they only affect the reported
/// elapsed time, never the stopwatch accumulators.
#[derive(Debug, Clone)]
pub struct TimerPair {
    pub focus: Stopwatch,
    pub rest: Stopwatch,
    pub focus_offset: Duration,
    pub rest_offset: Duration,
    /// Set on the first start, never cleared
    pub started: bool,
    pub suspended_at: Option<Instant>,
}

impl TimerPair {
    pub fn new() -> Self {
        Self {
            focus: Stopwatch::new(),
            rest: Stopwatch::new(),
            focus_offset: Duration::zero(),
            rest_offset: Duration::zero(),
            started: false,
            suspended_at: None,
        }
    }

    fn stopwatch(&self, which: TimerKind) -> &Stopwatch {
        match which {
            TimerKind::Focus => &self.focus,
            TimerKind::Rest => &self.rest,
        }
    }

    fn stopwatch_mut(&mut self, which: TimerKind) -> &mut Stopwatch {
        match which {
            TimerKind::Focus => &mut self.focus,
            TimerKind::Rest => &mut self.rest,
        }
    }

    fn offset_mut(&mut self, which: TimerKind) -> &mut Duration {
        match which {
            TimerKind::Focus => &mut self.focus_offset,
            TimerKind::Rest => &mut self.rest_offset,
        }
    }

    pub fn offset(&self, which: TimerKind) -> Duration {
        match which {
            TimerKind::Focus => self.focus_offset,
            TimerKind::Rest => self.rest_offset,
        }
    }

    pub fn is_running(&self, which: TimerKind) -> bool {
        self.stopwatch(which).running
    }

    /// The currently running stopwatch, if any
    pub fn active(&self) -> Option<TimerKind> {
        if self.focus.running {
            Some(TimerKind::Focus)
        } else if self.rest.running {
            Some(TimerKind::Rest)
        } else {
            None
        }
    }

    /// Reported elapsed time: accumulator plus suspend offset
    pub fn elapsed(&self, which: TimerKind) -> Duration {
        self.stopwatch(which).elapsed + self.offset(which)
    }

    pub fn availability(&self) -> Availability {
        match (self.active(), self.started) {
            (Some(_), _) => Availability::Running,
            (None, true) => Availability::PausedAfterStart,
            (None, false) => Availability::NeverStarted,
        }
    }

    /// Start (or restart) the focus stopwatch.
    ///
    /// Returns false when a stopwatch is already running. Restarting after a
    /// pause always resumes focus, whichever stopwatch ran before the pause.
    pub fn start(&mut self) -> bool {
        if !self.availability().can_start() {
            return false;
        }
        self.started = true;
        self.rest.stop();
        self.focus.start();
        true
    }

    /// Stop the running stopwatch and start the other one
    pub fn toggle_switch(&mut self) -> bool {
        let Some(current) = self.active() else {
            return false;
        };
        self.stopwatch_mut(current).stop();
        self.stopwatch_mut(current.other()).start();
        true
    }

    /// Stop whichever stopwatch is running
    pub fn pause_both(&mut self) -> bool {
        if !self.availability().can_pause() {
            return false;
        }
        self.focus.stop();
        self.rest.stop();
        true
    }

    pub fn tick(&mut self, delta: std::time::Duration) {
        self.focus.tick(delta);
        self.rest.tick(delta);
    }

    pub fn record_suspend(&mut self, now: Instant) {
        self.suspended_at = Some(now);
    }

    /// Credit the suspended gap to the running stopwatch's offset.
    ///
    /// Returns the credited timer and amount, if any.
    pub fn record_resume(&mut self, now: Instant) -> Option<(TimerKind, Duration)> {
        let suspended_at = self.suspended_at.take()?;
        let which = self.active()?;
        let gap = now.saturating_duration_since(suspended_at);
        let gap = Duration::from_std(gap).unwrap_or(Duration::zero());
        let offset = self.offset_mut(which);
        *offset = *offset + gap;
        Some((which, gap))
    }
}

impl Default for TimerPair {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a duration rounded to tenths: `H:MM:SS.t`, `M:SS.t` or `S.t`
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.num_milliseconds().max(0);
    let total_tenths = (millis + 50) / 100;

    let tenths = total_tenths % 10;
    let total_seconds = total_tenths / 10;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}.{}", hours, minutes, seconds, tenths)
    } else if minutes > 0 {
        format!("{}:{:02}.{}", minutes, seconds, tenths)
    } else {
        format!("{}.{}", seconds, tenths)
    }
}
