//! Output actuators: indicator bank, alarm signal and the character display.

/// Number of text rows on the display.
pub const DISPLAY_ROWS: u8 = 2;

/// Number of character columns on the display.
pub const DISPLAY_COLUMNS: u8 = 16;

/// Row holding the mode banner ("Set Time Mode", "Digital Clock").
pub const TITLE_ROW: u8 = 0;

/// Row holding the time and transient status messages.
pub const STATUS_ROW: u8 = 1;

/// First column of the snooze countdown field ("CD:NN") on the status row.
pub const COUNTDOWN_COLUMN: u8 = 11;

/// Width of the snooze countdown field.
pub const COUNTDOWN_WIDTH: u8 = 5;

/// Trait for abstracting the clock's output hardware.
///
/// Implement this for your board (GPIO LED bank, buzzer pin, HD44780-style
/// LCD, ...). None of these methods can fail - handle any hardware errors
/// internally.
pub trait OutputSink {
    /// Drives the four-LED indicator bank; bit `n` lights LED `n`.
    fn set_indicators(&mut self, mask: u8);

    /// Asserts or releases the audible/visual alarm signal.
    fn set_alarm_signal(&mut self, on: bool);

    /// Writes `text` starting at `(row, column)`.
    ///
    /// Overwrites exactly `text.len()` cells; callers pad with spaces to clear
    /// stale characters.
    fn display_text(&mut self, row: u8, column: u8, text: &str);
}

/// Request from the engine to change the alarm outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmDrive {
    /// Light the whole indicator bank and assert the alarm signal.
    Sound,

    /// Release the alarm signal and darken the indicator bank.
    Silence,
}
