//! Shared test infrastructure for snooze-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::Cell;
use std::rc::Rc;

use snooze_clock::output::{DISPLAY_ROWS, STATUS_ROW};
use snooze_clock::{
    ButtonEvent, ButtonMailbox, ClockConfig, ClockController, LightSensor, OutputSink, Sleeper,
    TickSignal, TimeDuration,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Sleeper that records requested delays instead of blocking
pub struct MockSleeper {
    slept: Rc<Cell<u64>>,
    calls: Rc<Cell<u32>>,
}

/// Test-side view of a [`MockSleeper`]
#[derive(Clone)]
pub struct SleepLog {
    slept: Rc<Cell<u64>>,
    calls: Rc<Cell<u32>>,
}

impl SleepLog {
    pub fn total_millis(&self) -> u64 {
        self.slept.get()
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

pub fn mock_sleeper() -> (MockSleeper, SleepLog) {
    let slept = Rc::new(Cell::new(0));
    let calls = Rc::new(Cell::new(0));
    (
        MockSleeper {
            slept: slept.clone(),
            calls: calls.clone(),
        },
        SleepLog { slept, calls },
    )
}

impl Sleeper for MockSleeper {
    type Duration = TestDuration;

    fn sleep(&mut self, duration: TestDuration) {
        self.slept.set(self.slept.get() + duration.as_millis());
        self.calls.set(self.calls.get() + 1);
    }
}

// ============================================================================
// Mock Light Sensor
// ============================================================================

/// Light sensor returning a level controlled by the test
pub struct MockSensor {
    level: Rc<Cell<f32>>,
    samples: Rc<Cell<u32>>,
}

/// Test-side handle controlling a [`MockSensor`]
#[derive(Clone)]
pub struct SensorHandle {
    level: Rc<Cell<f32>>,
    samples: Rc<Cell<u32>>,
}

impl SensorHandle {
    pub fn set_level(&self, level: f32) {
        self.level.set(level);
    }

    pub fn samples(&self) -> u32 {
        self.samples.get()
    }
}

pub fn mock_sensor(level: f32) -> (MockSensor, SensorHandle) {
    let level = Rc::new(Cell::new(level));
    let samples = Rc::new(Cell::new(0));
    (
        MockSensor {
            level: level.clone(),
            samples: samples.clone(),
        },
        SensorHandle { level, samples },
    )
}

impl LightSensor for MockSensor {
    fn sample(&mut self) -> f32 {
        self.samples.set(self.samples.get() + 1);
        self.level.get()
    }
}

// ============================================================================
// Mock Output
// ============================================================================

/// Width of the mock character grid; wider than the panel so overlong writes stay visible
pub const GRID_COLUMNS: usize = 20;

/// Mock output hardware that records indicator, alarm and display state
pub struct MockOutput {
    indicators: u8,
    alarm_signal: bool,
    grid: [[char; GRID_COLUMNS]; DISPLAY_ROWS as usize],
    writes: Vec<(u8, u8, String)>,
}

impl MockOutput {
    pub fn new() -> Self {
        Self {
            indicators: 0xAA,
            alarm_signal: true,
            grid: [[' '; GRID_COLUMNS]; DISPLAY_ROWS as usize],
            writes: Vec::new(),
        }
    }

    pub fn indicators(&self) -> u8 {
        self.indicators
    }

    pub fn alarm_signal(&self) -> bool {
        self.alarm_signal
    }

    /// Row contents with trailing blanks removed
    pub fn row_text(&self, row: u8) -> String {
        let text: String = self.grid[row as usize].iter().collect();
        text.trim_end().to_string()
    }

    /// Row contents between two columns, untrimmed
    pub fn row_slice(&self, row: u8, start: usize, end: usize) -> String {
        self.grid[row as usize][start..end].iter().collect()
    }

    pub fn status_text(&self) -> String {
        self.row_text(STATUS_ROW)
    }

    /// Number of display writes whose text contains `needle`
    pub fn count_writes(&self, needle: &str) -> usize {
        self.writes
            .iter()
            .filter(|(_, _, text)| text.contains(needle))
            .count()
    }
}

impl OutputSink for MockOutput {
    fn set_indicators(&mut self, mask: u8) {
        self.indicators = mask;
    }

    fn set_alarm_signal(&mut self, on: bool) {
        self.alarm_signal = on;
    }

    fn display_text(&mut self, row: u8, column: u8, text: &str) {
        if let Some(cells) = self.grid.get_mut(row as usize) {
            for (offset, ch) in text.chars().enumerate() {
                if let Some(cell) = cells.get_mut(column as usize + offset) {
                    *cell = ch;
                }
            }
        }
        self.writes.push((row, column, text.to_string()));
    }
}

// ============================================================================
// Controller Harness
// ============================================================================

pub type TestClock<'a> = ClockController<'a, ButtonMailbox, MockSensor, MockOutput, MockSleeper>;

/// Builds a controller with default configuration and a bright (uncovered) sensor
pub fn new_clock<'a>(
    buttons: &'a ButtonMailbox,
    ticks: &'a TickSignal,
) -> (TestClock<'a>, SensorHandle, SleepLog) {
    new_clock_with_config(ClockConfig::default(), buttons, ticks)
}

pub fn new_clock_with_config<'a>(
    config: ClockConfig,
    buttons: &'a ButtonMailbox,
    ticks: &'a TickSignal,
) -> (TestClock<'a>, SensorHandle, SleepLog) {
    let (sensor, sensor_handle) = mock_sensor(1.0);
    let (sleeper, sleep_log) = mock_sleeper();
    let clock =
        ClockController::with_config(config, buttons, ticks, sensor, MockOutput::new(), sleeper);
    (clock, sensor_handle, sleep_log)
}

/// Posts a press and runs one loop iteration
pub fn press(clock: &mut TestClock<'_>, buttons: &ButtonMailbox, event: ButtonEvent) {
    buttons.post(event);
    clock.poll();
}

/// Posts `count` presses of the same button, one loop iteration each
pub fn press_n(clock: &mut TestClock<'_>, buttons: &ButtonMailbox, event: ButtonEvent, count: u32) {
    for _ in 0..count {
        press(clock, buttons, event);
    }
}

/// Fires one second and runs one loop iteration
pub fn tick(clock: &mut TestClock<'_>, ticks: &TickSignal) {
    ticks.fire();
    clock.poll();
}

pub fn tick_n(clock: &mut TestClock<'_>, ticks: &TickSignal, count: u32) {
    for _ in 0..count {
        tick(clock, ticks);
    }
}

/// Dials in `hour:minute` from the start state and confirms it
pub fn set_clock(clock: &mut TestClock<'_>, buttons: &ButtonMailbox, hour: u8, minute: u8) {
    press_n(clock, buttons, ButtonEvent::Sw2, hour as u32);
    press_n(clock, buttons, ButtonEvent::Sw3, minute as u32);
    press(clock, buttons, ButtonEvent::Sw4);
}

/// Advances the alarm from `00:00` to `hour:minute` in run mode
pub fn set_alarm(clock: &mut TestClock<'_>, buttons: &ButtonMailbox, hour: u8, minute: u8) {
    press_n(clock, buttons, ButtonEvent::Sw2, hour as u32);
    press_n(clock, buttons, ButtonEvent::Sw3, minute as u32);
}
