// File: crates/burnup-core/src/schedule.rs
// Summary: Render triggers (startup, resize, periodic) coalesced into a single pending request.
// Notes:
// - Single-threaded and clock-free: callers pass `Instant`s in, so tests can
//   drive time explicitly.

use std::time::{Duration, Instant};

/// Default periodic redraw interval.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);
/// Delay between a resize signal and its redraw.
pub const RESIZE_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    Startup,
    Resize,
    Interval,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    trigger: Trigger,
    due: Instant,
}

/// At most one unstarted render request; a newer request replaces it.
#[derive(Debug, Default)]
pub struct RenderQueue {
    pending: Option<Pending>,
    superseded: u64,
}

impl RenderQueue {
    pub fn new() -> Self { Self::default() }

    pub fn request(&mut self, trigger: Trigger, due: Instant) {
        if self.pending.replace(Pending { trigger, due }).is_some() {
            self.superseded += 1;
        }
    }

    /// Pop the pending request if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<Trigger> {
        match self.pending {
            Some(p) if p.due <= now => {
                self.pending = None;
                Some(p.trigger)
            }
            _ => None,
        }
    }

    pub fn pending_due(&self) -> Option<Instant> { self.pending.map(|p| p.due) }
    pub fn is_idle(&self) -> bool { self.pending.is_none() }
    /// Requests dropped because a newer one arrived first.
    pub fn superseded(&self) -> u64 { self.superseded }
}

/// Turns startup, resize and timer signals into sequential render cycles.
#[derive(Debug)]
pub struct Scheduler {
    queue: RenderQueue,
    interval: Duration,
    resize_delay: Duration,
    next_tick: Option<Instant>,
}

impl Scheduler {
    pub fn new(interval: Duration, resize_delay: Duration) -> Self {
        Self { queue: RenderQueue::new(), interval, resize_delay, next_tick: None }
    }

    /// Request the initial cycle immediately and arm the periodic timer.
    pub fn start(&mut self, now: Instant) {
        self.queue.request(Trigger::Startup, now);
        self.next_tick = Some(now + self.interval);
    }

    pub fn on_resize(&mut self, now: Instant) {
        self.queue.request(Trigger::Resize, now + self.resize_delay);
    }

    /// Fire the periodic timer if it has elapsed, then return the trigger
    /// of a due request, if any. Call once per loop iteration and run one
    /// cycle per returned trigger.
    pub fn poll(&mut self, now: Instant) -> Option<Trigger> {
        if let Some(tick) = self.next_tick {
            if tick <= now {
                self.queue.request(Trigger::Interval, tick);
                // missed ticks collapse into one
                let mut next = tick + self.interval;
                while next <= now {
                    next += self.interval;
                }
                self.next_tick = Some(next);
            }
        }
        self.queue.take_due(now)
    }

    /// How long the caller may sleep before something can become due.
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        [self.queue.pending_due(), self.next_tick]
            .into_iter()
            .flatten()
            .min()
            .map(|at| at.saturating_duration_since(now))
            .unwrap_or(self.interval)
    }

    pub fn queue(&self) -> &RenderQueue { &self.queue }
}

impl Default for Scheduler {
    fn default() -> Self { Self::new(POLL_INTERVAL, RESIZE_DELAY) }
}
