//! Clock and alarm engine.
//!
//! Provides [`ClockEngine`], which owns the time of day, the alarm time, the
//! alarm enable flag and the alarm auto-off counter. The engine never touches
//! hardware: heartbeat operations return an [`AlarmDrive`] request that the
//! controller applies to its [`OutputSink`](crate::OutputSink).

use crate::config::DEFAULT_AUTO_OFF_SECS;
use crate::output::AlarmDrive;
use crate::signal::RefreshFlag;
use crate::types::TimeOfDay;

/// Timekeeping and alarm-match state.
///
/// The auto-off counter re-arms on every tick that the time of day equals the
/// alarm time. It is independent of the controller's edge-latched triggered
/// flag: reaching zero silences the outputs but never ends an alarm episode.
#[derive(Debug)]
pub struct ClockEngine {
    time: TimeOfDay,
    alarm: TimeOfDay,
    alarm_enabled: bool,
    auto_off: u8,
    auto_off_secs: u8,
    refresh: RefreshFlag,
}

impl ClockEngine {
    /// Creates an engine at midnight with the alarm at midnight and enabled.
    pub fn new() -> Self {
        Self::with_auto_off(DEFAULT_AUTO_OFF_SECS)
    }

    /// Creates an engine whose alarm outputs stay asserted for `secs` seconds
    /// after a match.
    pub fn with_auto_off(secs: u8) -> Self {
        let mut engine = Self {
            time: TimeOfDay::MIDNIGHT,
            alarm: TimeOfDay::MIDNIGHT,
            alarm_enabled: true,
            auto_off: 0,
            auto_off_secs: secs,
            refresh: RefreshFlag::new(),
        };
        engine.init();
        engine
    }

    /// Resets time and alarm to `00:00:00`, enables the alarm and clears the
    /// auto-off counter.
    pub fn init(&mut self) {
        self.time = TimeOfDay::MIDNIGHT;
        self.alarm = TimeOfDay::MIDNIGHT;
        self.alarm_enabled = true;
        self.auto_off = 0;
        self.refresh.raise();
    }

    /// Overwrites the time of day; each field wraps into range independently.
    pub fn set_time(&mut self, hour: u8, minute: u8, second: u8) {
        self.time = TimeOfDay::new(hour, minute, second);
        self.refresh.raise();
    }

    /// Advances the time by one second and runs the alarm check.
    ///
    /// This is the per-second heartbeat: the refresh flag is raised on every
    /// call.
    pub fn tick(&mut self) -> Option<AlarmDrive> {
        self.time.advance();
        let drive = self.check_alarm();
        self.refresh.raise();
        drive
    }

    /// Re-arms the auto-off window on a match and counts it down.
    ///
    /// # Returns
    /// * `Some(AlarmDrive::Sound)` - time equals alarm time while enabled
    /// * `Some(AlarmDrive::Silence)` - the auto-off window just ran out
    /// * `None` - no output change
    pub fn check_alarm(&mut self) -> Option<AlarmDrive> {
        let mut drive = None;

        if self.alarm_matches() {
            self.auto_off = self.auto_off_secs;
            drive = Some(AlarmDrive::Sound);
        }

        if self.auto_off > 0 {
            self.auto_off -= 1;
            if self.auto_off == 0 {
                drive = Some(AlarmDrive::Silence);
            }
        }

        drive
    }

    /// Flips the alarm enable flag.
    pub fn toggle_alarm_enabled(&mut self) {
        self.alarm_enabled = !self.alarm_enabled;
    }

    /// Advances the alarm hour, wrapping 23 -> 0.
    pub fn add_alarm_hour(&mut self) {
        self.alarm.add_hour();
    }

    /// Advances the alarm minute, wrapping 59 -> 0 without carry.
    pub fn add_alarm_minute(&mut self) {
        self.alarm.add_minute();
    }

    /// Advances the alarm second, wrapping 59 -> 0 without carry.
    ///
    /// No button is bound to this.
    pub fn add_alarm_second(&mut self) {
        self.alarm.add_second();
    }

    /// Returns true if the alarm is enabled and the time equals the alarm time.
    pub fn alarm_matches(&self) -> bool {
        self.alarm_enabled && self.time == self.alarm
    }

    /// Consumes the "display should refresh" signal.
    pub fn take_refresh(&mut self) -> bool {
        self.refresh.take()
    }

    /// Returns true if a display refresh is pending.
    pub fn refresh_pending(&self) -> bool {
        self.refresh.is_raised()
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    pub fn second(&self) -> u8 {
        self.time.second()
    }

    pub fn alarm(&self) -> TimeOfDay {
        self.alarm
    }

    pub fn alarm_hour(&self) -> u8 {
        self.alarm.hour()
    }

    pub fn alarm_minute(&self) -> u8 {
        self.alarm.minute()
    }

    pub fn alarm_second(&self) -> u8 {
        self.alarm.second()
    }

    pub fn is_alarm_enabled(&self) -> bool {
        self.alarm_enabled
    }

    /// Seconds left before the engine silences the alarm outputs.
    pub fn auto_off_remaining(&self) -> u8 {
        self.auto_off
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_midnight_with_alarm_enabled() {
        let mut engine = ClockEngine::new();
        assert_eq!(engine.time(), TimeOfDay::MIDNIGHT);
        assert_eq!(engine.alarm(), TimeOfDay::MIDNIGHT);
        assert!(engine.is_alarm_enabled());
        assert_eq!(engine.auto_off_remaining(), 0);
        assert!(engine.take_refresh());
        assert!(!engine.take_refresh());
    }

    #[test]
    fn init_restores_defaults() {
        let mut engine = ClockEngine::new();
        engine.set_time(9, 15, 0);
        engine.add_alarm_hour();
        engine.toggle_alarm_enabled();
        engine.take_refresh();

        engine.init();
        assert_eq!(engine.time(), TimeOfDay::MIDNIGHT);
        assert_eq!(engine.alarm(), TimeOfDay::MIDNIGHT);
        assert!(engine.is_alarm_enabled());
        assert!(engine.refresh_pending());
    }

    #[test]
    fn check_alarm_counts_down_and_silences() {
        let mut engine = ClockEngine::with_auto_off(3);
        engine.add_alarm_second();
        engine.set_time(0, 0, 0);

        assert_eq!(engine.tick(), Some(AlarmDrive::Sound));
        assert_eq!(engine.auto_off_remaining(), 2);
        assert_eq!(engine.tick(), None);
        assert_eq!(engine.tick(), Some(AlarmDrive::Silence));
        assert_eq!(engine.auto_off_remaining(), 0);
        assert_eq!(engine.tick(), None);
    }

    #[test]
    fn match_rearms_auto_off_while_held() {
        let mut engine = ClockEngine::new();
        assert_eq!(engine.check_alarm(), Some(AlarmDrive::Sound));
        assert_eq!(engine.auto_off_remaining(), 4);
        assert_eq!(engine.check_alarm(), Some(AlarmDrive::Sound));
        assert_eq!(engine.auto_off_remaining(), 4);
    }
}
