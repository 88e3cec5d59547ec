//! Core types shared by the engine and the controller.

/// Hours in a day.
pub const HOURS_PER_DAY: u8 = 24;

/// Minutes in an hour.
pub const MINUTES_PER_HOUR: u8 = 60;

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Indicator bank pattern with every LED lit.
pub const INDICATORS_ALL: u8 = 0x0F;

/// Indicator bank pattern with every LED dark.
pub const INDICATORS_OFF: u8 = 0x00;

/// A wall-clock time of day.
///
/// Fields are always normalized: `hour < 24`, `minute < 60`, `second < 60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight, `00:00:00`.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a time of day, wrapping each field into range independently.
    ///
    /// `TimeOfDay::new(25, 61, 60)` is `01:01:00`; overflow does not carry
    /// into the next field.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour: hour % HOURS_PER_DAY,
            minute: minute % MINUTES_PER_HOUR,
            second: second % SECONDS_PER_MINUTE,
        }
    }

    /// Returns the hour (0-23).
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0-59).
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Advances by one second, carrying into minutes and hours and wrapping
    /// at midnight.
    pub fn advance(&mut self) {
        self.second += 1;
        if self.second >= SECONDS_PER_MINUTE {
            self.second = 0;
            self.minute += 1;
        }
        if self.minute >= MINUTES_PER_HOUR {
            self.minute = 0;
            self.hour += 1;
        }
        if self.hour >= HOURS_PER_DAY {
            self.hour = 0;
        }
    }

    /// Increments the hour field only, wrapping 23 -> 0.
    pub fn add_hour(&mut self) {
        self.hour = (self.hour + 1) % HOURS_PER_DAY;
    }

    /// Increments the minute field only, wrapping 59 -> 0 without carry.
    pub fn add_minute(&mut self) {
        self.minute = (self.minute + 1) % MINUTES_PER_HOUR;
    }

    /// Increments the second field only, wrapping 59 -> 0 without carry.
    pub fn add_second(&mut self) {
        self.second = (self.second + 1) % SECONDS_PER_MINUTE;
    }
}

impl core::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Top-level operating mode of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Start-up mode: the user dials in hour and minute before the clock runs.
    #[default]
    TimeSet,

    /// Normal operation: time display, alarm setup, snooze and dismissal.
    Run,
}
