//! Lifecycle event queue and dispatch.
//!
//! Events are produced by the host input thread (or, on a full rig, the
//! host framework's state machine) and consumed by the main loop, which
//! dispatches them one at a time onto the controller's
//! [`LifecycleHooks`](crate::app::ports::LifecycleHooks). Consumption is
//! strictly sequential, so hook implementations need no locking.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ Host input   │────▶│  Event Queue │────▶│  Dispatch    │
//! │ (producer)   │     │  (lock-free) │     │  (consumer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```

use core::sync::atomic::{AtomicU8, Ordering};

use crate::app::ports::LifecycleHooks;

/// Maximum number of pending events.
/// Power of 2 for efficient ring buffer modulo.
const EVENT_QUEUE_CAP: usize = 16;

/// Lifecycle events delivered by the host framework, ordered by rough
/// priority. Lower discriminant = higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecycleEvent {
    /// The job is disconnecting — tear down and release hardware.
    Disconnect = 0,
    /// The job was put to sleep.
    Sleep = 1,
    /// The job woke from sleep.
    Wake = 2,
    /// An optical-density reading is about to start.
    OdReadingStarting = 3,
    /// The optical-density reading finished.
    OdReadingFinished = 4,
}

/// Map a lifecycle event onto the corresponding hook call.
pub fn dispatch(event: LifecycleEvent, hooks: &mut impl LifecycleHooks) {
    match event {
        LifecycleEvent::Disconnect => hooks.on_teardown(),
        LifecycleEvent::Sleep => hooks.on_sleep(),
        LifecycleEvent::Wake => hooks.on_wake(),
        LifecycleEvent::OdReadingStarting => hooks.before_od_reading(),
        LifecycleEvent::OdReadingFinished => hooks.after_od_reading(),
    }
}

// ── Lock-free SPSC ring buffer ────────────────────────────────
//
// Host input thread writes (produce), dispatch loop reads (consume).
// Uses atomic head/tail indices. The buffer lives in a static so a
// future signal handler can push `Disconnect` without taking a lock.

static EVENT_HEAD: AtomicU8 = AtomicU8::new(0);
static EVENT_TAIL: AtomicU8 = AtomicU8::new(0);
// SAFETY: EVENT_BUFFER is accessed exclusively through push_event
// (single producer) and pop_event (single consumer). The Acquire and
// Release pairs on head/tail order the slot writes; no concurrent
// mutable access to the same slot is possible.
static mut EVENT_BUFFER: [u8; EVENT_QUEUE_CAP] = [0; EVENT_QUEUE_CAP];

/// Push an event into the queue.
/// Lock-free; safe to call from a signal handler.
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: LifecycleEvent) -> bool {
    let head = EVENT_HEAD.load(Ordering::Relaxed);
    let tail = EVENT_TAIL.load(Ordering::Acquire);
    let next_head = (head + 1) % EVENT_QUEUE_CAP as u8;

    if next_head == tail {
        return false; // Queue full — drop event.
    }

    // SAFETY: single producer; the slot at `head` is not visible to the
    // consumer until the Release store below.
    unsafe {
        EVENT_BUFFER[head as usize] = event as u8;
    }

    EVENT_HEAD.store(next_head, Ordering::Release);
    true
}

/// Pop the next event from the queue.
/// Called from the dispatch loop (single consumer).
/// Returns `None` if the queue is empty.
pub fn pop_event() -> Option<LifecycleEvent> {
    let tail = EVENT_TAIL.load(Ordering::Relaxed);
    let head = EVENT_HEAD.load(Ordering::Acquire);

    if tail == head {
        return None; // Empty.
    }

    // SAFETY: single consumer; the Acquire load of head ordered the
    // producer's slot write before this read.
    let raw = unsafe { EVENT_BUFFER[tail as usize] };
    EVENT_TAIL.store((tail + 1) % EVENT_QUEUE_CAP as u8, Ordering::Release);

    event_from_u8(raw)
}

/// Drain all pending events into a callback, in FIFO order.
pub fn drain_events(mut handler: impl FnMut(LifecycleEvent)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

/// Number of pending events.
pub fn queue_len() -> usize {
    let head = EVENT_HEAD.load(Ordering::Relaxed) as usize;
    let tail = EVENT_TAIL.load(Ordering::Relaxed) as usize;
    (head + EVENT_QUEUE_CAP - tail) % EVENT_QUEUE_CAP
}

// ── Internal ──────────────────────────────────────────────────

fn event_from_u8(raw: u8) -> Option<LifecycleEvent> {
    match raw {
        0 => Some(LifecycleEvent::Disconnect),
        1 => Some(LifecycleEvent::Sleep),
        2 => Some(LifecycleEvent::Wake),
        3 => Some(LifecycleEvent::OdReadingStarting),
        4 => Some(LifecycleEvent::OdReadingFinished),
        _ => None,
    }
}
