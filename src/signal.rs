//! Flags shared between the 1 Hz tick producer, the engine and the control loop.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

/// Pending-seconds counter written by the 1 Hz timer interrupt.
///
/// The control loop drains it with [`TickSignal::take`] and applies one engine
/// tick per pending second, so a slow loop iteration delays seconds but never
/// drops them.
#[derive(Debug)]
pub struct TickSignal {
    pending: AtomicU8,
}

impl TickSignal {
    /// Creates a signal with no pending seconds. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            pending: AtomicU8::new(0),
        }
    }

    /// Records one elapsed second. Call from the timer interrupt.
    pub fn fire(&self) {
        // Saturates instead of wrapping back to zero pending seconds.
        let _ = self
            .pending
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_add(1));
    }

    /// Returns the number of pending seconds and resets the count.
    pub fn take(&self) -> u8 {
        self.pending.swap(0, Ordering::AcqRel)
    }

    /// Returns the number of pending seconds without consuming them.
    pub fn pending(&self) -> u8 {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for TickSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot "display should refresh" flag.
///
/// Raised by every engine heartbeat and consumed exactly once per observation.
#[derive(Debug)]
pub struct RefreshFlag {
    raised: AtomicBool,
}

impl RefreshFlag {
    /// Creates a lowered flag.
    pub const fn new() -> Self {
        Self {
            raised: AtomicBool::new(false),
        }
    }

    /// Raises the flag.
    pub fn raise(&self) {
        self.raised.store(true, Ordering::Release);
    }

    /// Returns true if the flag was raised, lowering it.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::AcqRel)
    }

    /// Returns true if the flag is raised, leaving it untouched.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::Acquire)
    }
}

impl Default for RefreshFlag {
    fn default() -> Self {
        Self::new()
    }
}
