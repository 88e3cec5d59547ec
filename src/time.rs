//! Time abstraction traits for platform-agnostic delays.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait for blocking the control loop for a fixed duration.
///
/// Implement this on top of your platform's delay primitive (SysTick busy-wait,
/// `embedded_hal` delay, a timer peripheral). Tests inject a sleeper that only
/// records the requested durations.
pub trait Sleeper {
    /// Duration type accepted by this sleeper.
    type Duration: TimeDuration;

    /// Blocks for the given duration.
    fn sleep(&mut self, duration: Self::Duration);
}
