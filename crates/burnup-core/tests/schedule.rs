// File: crates/burnup-core/tests/schedule.rs
// Purpose: Render requests coalesce and fire in order under an explicit clock.

use std::time::{Duration, Instant};

use burnup_core::{RenderQueue, Scheduler, Trigger};

fn ms(n: u64) -> Duration { Duration::from_millis(n) }

#[test]
fn queue_keeps_only_the_latest_request() {
    let t0 = Instant::now();
    let mut q = RenderQueue::new();
    assert!(q.is_idle());
    q.request(Trigger::Resize, t0 + ms(100));
    q.request(Trigger::Resize, t0 + ms(150));
    assert_eq!(q.superseded(), 1);
    assert_eq!(q.pending_due(), Some(t0 + ms(150)));

    assert_eq!(q.take_due(t0 + ms(120)), None, "not due yet");
    assert_eq!(q.take_due(t0 + ms(150)), Some(Trigger::Resize));
    assert!(q.is_idle());
    assert_eq!(q.take_due(t0 + ms(500)), None);
}

#[test]
fn startup_runs_immediately_then_interval_ticks() {
    let t0 = Instant::now();
    let mut s = Scheduler::new(ms(1000), ms(100));
    s.start(t0);
    assert_eq!(s.poll(t0), Some(Trigger::Startup));
    assert_eq!(s.poll(t0 + ms(500)), None);
    assert_eq!(s.next_wakeup(t0 + ms(500)), ms(500));
    assert_eq!(s.poll(t0 + ms(1000)), Some(Trigger::Interval));
    assert_eq!(s.poll(t0 + ms(1001)), None);
    assert_eq!(s.poll(t0 + ms(2000)), Some(Trigger::Interval));
}

#[test]
fn resize_burst_collapses_into_one_cycle() {
    let t0 = Instant::now();
    let mut s = Scheduler::new(ms(1000), ms(100));
    s.start(t0);
    assert_eq!(s.poll(t0), Some(Trigger::Startup));

    for step in [10, 40, 70] {
        s.on_resize(t0 + ms(step));
        assert_eq!(s.poll(t0 + ms(step)), None);
    }
    assert_eq!(s.queue().superseded(), 2);
    assert_eq!(s.poll(t0 + ms(169)), None, "debounced past the last resize");
    assert_eq!(s.poll(t0 + ms(170)), Some(Trigger::Resize));
    assert_eq!(s.poll(t0 + ms(400)), None);
}

#[test]
fn interval_supersedes_a_pending_resize() {
    let t0 = Instant::now();
    let mut s = Scheduler::new(ms(1000), ms(100));
    s.start(t0);
    s.poll(t0);
    s.on_resize(t0 + ms(950));
    assert_eq!(s.poll(t0 + ms(1000)), Some(Trigger::Interval));
    assert_eq!(s.poll(t0 + ms(1050)), None, "resize already covered");
}

#[test]
fn missed_ticks_fire_once() {
    let t0 = Instant::now();
    let mut s = Scheduler::default();
    s.start(t0);
    s.poll(t0);
    assert_eq!(s.poll(t0 + ms(5500)), Some(Trigger::Interval));
    assert_eq!(s.poll(t0 + ms(5600)), None);
    assert_eq!(s.poll(t0 + ms(6000)), Some(Trigger::Interval));
}
