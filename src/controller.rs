//! Control loop and mode dispatcher.
//!
//! Provides [`ClockController`], which owns the [`ClockEngine`] and routes the
//! 1 Hz heartbeat, button presses and light-sensor readings into it and into
//! the output hardware. The controller is polled cooperatively: the firmware
//! calls [`ClockController::poll`] from its main loop (or [`ClockController::run`]
//! to never return), while interrupt handlers only touch the shared
//! [`TickSignal`] and [`ButtonSource`].

use core::fmt::Write;

use heapless::String;

use crate::button::{ButtonEvent, ButtonSource};
use crate::config::ClockConfig;
use crate::engine::ClockEngine;
use crate::output::{
    AlarmDrive, COUNTDOWN_COLUMN, COUNTDOWN_WIDTH, DISPLAY_COLUMNS, OutputSink, STATUS_ROW,
    TITLE_ROW,
};
use crate::sensor::{LightSensor, is_covered};
use crate::signal::TickSignal;
use crate::time::{Sleeper, TimeDuration};
use crate::types::{INDICATORS_ALL, INDICATORS_OFF, Mode, TimeOfDay};

/// Capacity of the scratch buffer used to format one display write.
const LINE_CAPACITY: usize = 20;

/// Snooze flash/countdown sub-state.
///
/// While active the indicators alternate between a lit flash of
/// `flash_timer` seconds and a dark countdown of `countdown` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SnoozeState {
    active: bool,
    flash_timer: u8,
    countdown: u8,
}

impl SnoozeState {
    const fn idle(countdown: u8) -> Self {
        Self {
            active: false,
            flash_timer: 0,
            countdown,
        }
    }

    /// Returns true while the flash/countdown cycle is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds the indicators remain lit in the current flash.
    pub fn flash_timer(&self) -> u8 {
        self.flash_timer
    }

    /// Seconds until the next flash.
    pub fn countdown(&self) -> u8 {
        self.countdown
    }
}

/// Drives the clock's user interface and alarm episode.
///
/// # Type Parameters
/// * `'a` - Lifetime of the objects shared with interrupt handlers
/// * `B` - Button source (usually a [`ButtonMailbox`](crate::ButtonMailbox))
/// * `L` - Light sensor implementation
/// * `O` - Output hardware implementation
/// * `S` - Sleeper used for the UI settle window
pub struct ClockController<'a, B: ButtonSource, L: LightSensor, O: OutputSink, S: Sleeper> {
    engine: ClockEngine,
    buttons: &'a B,
    ticks: &'a TickSignal,
    sensor: L,
    output: O,
    sleeper: S,
    config: ClockConfig,
    mode: Mode,
    working: TimeOfDay,
    triggered: bool,
    snooze: SnoozeState,
    message_hold: u8,
}

impl<'a, B: ButtonSource, L: LightSensor, O: OutputSink, S: Sleeper>
    ClockController<'a, B, L, O, S>
{
    /// Creates a controller with the default configuration.
    pub fn new(buttons: &'a B, ticks: &'a TickSignal, sensor: L, output: O, sleeper: S) -> Self {
        Self::with_config(ClockConfig::DEFAULT, buttons, ticks, sensor, output, sleeper)
    }

    /// Creates a controller in time-set mode.
    ///
    /// Initializes the engine, drives the indicators and alarm signal off and
    /// draws the start-up banner.
    pub fn with_config(
        config: ClockConfig,
        buttons: &'a B,
        ticks: &'a TickSignal,
        sensor: L,
        output: O,
        sleeper: S,
    ) -> Self {
        let mut controller = Self {
            engine: ClockEngine::with_auto_off(config.auto_off_secs()),
            buttons,
            ticks,
            sensor,
            output,
            sleeper,
            config,
            mode: Mode::TimeSet,
            working: TimeOfDay::MIDNIGHT,
            triggered: false,
            snooze: SnoozeState::idle(config.countdown_secs()),
            message_hold: 0,
        };

        controller.output.set_indicators(INDICATORS_OFF);
        controller.output.set_alarm_signal(false);
        controller.show(TITLE_ROW, 0, format_args!("Digital Clock"), true);
        controller.show(STATUS_ROW, 0, format_args!(""), true);

        info!("clock controller ready, waiting for time set");
        controller
    }

    /// Applies one elapsed second to the engine.
    ///
    /// Must be invoked exactly once per second. [`poll`](Self::poll) does this
    /// for every second recorded in the [`TickSignal`].
    pub fn on_tick(&mut self) {
        match self.engine.tick() {
            Some(AlarmDrive::Sound) => {
                self.output.set_indicators(INDICATORS_ALL);
                self.output.set_alarm_signal(true);
            }
            Some(AlarmDrive::Silence) => {
                self.output.set_alarm_signal(false);
                self.output.set_indicators(INDICATORS_OFF);
            }
            None => {}
        }
    }

    /// Runs one iteration of the control loop.
    pub fn poll(&mut self) {
        for _ in 0..self.ticks.take() {
            self.on_tick();
        }

        match self.mode {
            Mode::TimeSet => self.poll_time_set(),
            Mode::Run => self.poll_run(),
        }
    }

    /// Polls forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    fn poll_time_set(&mut self) {
        self.show(TITLE_ROW, 0, format_args!("Set Time Mode"), true);
        self.show(
            STATUS_ROW,
            0,
            format_args!("SET {:02}:{:02}", self.working.hour(), self.working.minute()),
            false,
        );

        if !self.buttons.has_event() {
            return;
        }

        let event = self.buttons.take_event();
        debug!("time set button {}", event);
        match event {
            ButtonEvent::Sw2 => self.working.add_hour(),
            ButtonEvent::Sw3 => self.working.add_minute(),
            ButtonEvent::Sw4 => {
                self.engine
                    .set_time(self.working.hour(), self.working.minute(), 0);
                self.mode = Mode::Run;
                self.show(TITLE_ROW, 0, format_args!("Digital Clock"), true);
                info!("time set to {}, clock running", self.engine.time());
            }
            ButtonEvent::Sw5 | ButtonEvent::None => {}
        }

        self.sleeper
            .sleep(S::Duration::from_millis(self.config.settle_delay_ms()));
    }

    fn poll_run(&mut self) {
        if self.engine.take_refresh() {
            self.refresh_display();
            if self.snooze.active {
                self.step_snooze();
            }
        }

        if self.engine.alarm_matches() && !self.triggered {
            self.trigger();
        }

        if self.buttons.has_event() {
            let event = self.buttons.take_event();
            self.handle_alarm_button(event);
        }

        if self.engine.is_alarm_enabled() && self.triggered {
            let reading = self.sensor.sample();
            if is_covered(reading, self.config.dismiss_threshold()) {
                self.dismiss();
            }
        }
    }

    fn refresh_display(&mut self) {
        if self.message_hold > 0 {
            self.message_hold -= 1;
            return;
        }

        let time = self.engine.time();
        self.show(
            STATUS_ROW,
            0,
            format_args!(
                "{:02}:{:02}:{:02}",
                time.hour(),
                time.minute(),
                time.second()
            ),
            true,
        );
    }

    fn step_snooze(&mut self) {
        if self.snooze.flash_timer > 0 {
            self.snooze.flash_timer -= 1;
            if self.snooze.flash_timer == 0 {
                self.output.set_indicators(INDICATORS_OFF);
                self.snooze.countdown = self.config.countdown_secs();
                debug!("snooze flash over, counting down");
            }
            return;
        }

        // The field shows the seconds left including the current one.
        let remaining = self.snooze.countdown;
        self.show(
            STATUS_ROW,
            COUNTDOWN_COLUMN,
            format_args!("CD:{:02}", remaining),
            false,
        );
        self.snooze.countdown = remaining.saturating_sub(1);

        if self.snooze.countdown == 0 {
            self.output.set_indicators(INDICATORS_ALL);
            self.snooze.flash_timer = self.config.flash_secs();
            debug!("snooze flash");
        }
    }

    fn trigger(&mut self) {
        self.triggered = true;
        self.snooze.active = true;
        self.snooze.flash_timer = self.config.flash_secs();
        self.output.set_indicators(INDICATORS_ALL);
        self.show(STATUS_ROW, 0, format_args!("** ALARM ACTIVE **"), false);
        info!("alarm triggered at {}", self.engine.time());
    }

    fn handle_alarm_button(&mut self, event: ButtonEvent) {
        debug!("run button {}", event);
        match event {
            ButtonEvent::Sw2 => {
                self.engine.add_alarm_hour();
                self.show_alarm_time();
            }
            ButtonEvent::Sw3 => {
                self.engine.add_alarm_minute();
                self.show_alarm_time();
            }
            ButtonEvent::Sw4 => {
                self.engine.toggle_alarm_enabled();
                let label = if self.engine.is_alarm_enabled() {
                    "Alarm ON"
                } else {
                    "Alarm OFF"
                };
                self.show(STATUS_ROW, 0, format_args!("{}", label), true);
                self.message_hold = self.config.message_hold();
                info!("alarm enabled: {}", self.engine.is_alarm_enabled());
            }
            ButtonEvent::Sw5 | ButtonEvent::None => {}
        }
    }

    fn show_alarm_time(&mut self) {
        let alarm = self.engine.alarm();
        self.show(
            STATUS_ROW,
            0,
            format_args!("ALARM {:02}:{:02}", alarm.hour(), alarm.minute()),
            true,
        );
        self.message_hold = self.config.message_hold();
    }

    fn dismiss(&mut self) {
        self.output.set_alarm_signal(false);
        self.output.set_indicators(INDICATORS_OFF);
        self.show(STATUS_ROW, 0, format_args!("Turned OFF"), true);
        self.message_hold = self.config.message_hold();

        self.triggered = false;
        self.snooze = SnoozeState::idle(self.config.countdown_secs());

        self.show(
            STATUS_ROW,
            COUNTDOWN_COLUMN,
            format_args!("{:1$}", "", COUNTDOWN_WIDTH as usize),
            false,
        );
        info!("alarm dismissed at {}", self.engine.time());
    }

    /// Formats one display write, optionally padding with spaces to the full
    /// row width so stale characters are cleared.
    fn show(&mut self, row: u8, column: u8, args: core::fmt::Arguments<'_>, pad: bool) {
        let mut line: String<LINE_CAPACITY> = String::new();
        // Every message fits in LINE_CAPACITY.
        let _ = line.write_fmt(args);
        if pad {
            while line.len() < DISPLAY_COLUMNS as usize {
                if line.push(' ').is_err() {
                    break;
                }
            }
        }
        self.output.display_text(row, column, &line);
    }

    /// Returns the current operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the engine holding time and alarm state.
    pub fn engine(&self) -> &ClockEngine {
        &self.engine
    }

    /// Returns the snooze sub-state.
    pub fn snooze(&self) -> SnoozeState {
        self.snooze
    }

    /// Returns the hour and minute being dialled in during time-set mode.
    pub fn working_time(&self) -> TimeOfDay {
        self.working
    }

    /// Returns true from the first alarm match until dismissal.
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Remaining display refreshes for which a status message is held.
    pub fn message_hold(&self) -> u8 {
        self.message_hold
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Returns the output hardware.
    pub fn output(&self) -> &O {
        &self.output
    }
}
