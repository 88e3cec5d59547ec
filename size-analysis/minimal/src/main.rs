#![no_std]
#![no_main]

use cortex_m_rt::{entry, exception};
use panic_halt as _;
use snooze_clock::{
    ButtonEvent, ButtonMailbox, ClockController, LightSensor, OutputSink, Sleeper, TickSignal,
    TimeDuration,
};

// ============================================================================
// Shared Interrupt State
// ============================================================================

static BUTTONS: ButtonMailbox = ButtonMailbox::new();
static TICKS: TickSignal = TickSignal::new();

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }
}

/// Busy-wait sleeper assuming an 8 MHz core clock
pub struct CycleSleeper;

impl Sleeper for CycleSleeper {
    type Duration = Duration32;

    fn sleep(&mut self, duration: Duration32) {
        cortex_m::asm::delay(duration.0.saturating_mul(8_000));
    }
}

// ============================================================================
// Minimal Peripheral Implementations
// ============================================================================

/// Zero-size output implementation for measuring library overhead
pub struct MinimalOutput;

impl OutputSink for MinimalOutput {
    fn set_indicators(&mut self, mask: u8) {
        core::hint::black_box(mask);
    }

    fn set_alarm_signal(&mut self, on: bool) {
        core::hint::black_box(on);
    }

    fn display_text(&mut self, row: u8, column: u8, text: &str) {
        core::hint::black_box((row, column, text));
    }
}

pub struct MinimalSensor;

impl LightSensor for MinimalSensor {
    fn sample(&mut self) -> f32 {
        core::hint::black_box(1.0)
    }
}

// ============================================================================
// Interrupt Handlers
// ============================================================================

/// SysTick is assumed to be configured for a 1 Hz period
#[exception]
fn SysTick() {
    TICKS.fire();
}

#[entry]
fn main() -> ! {
    let mut clock =
        ClockController::new(&BUTTONS, &TICKS, MinimalSensor, MinimalOutput, CycleSleeper);

    // Walk through time-set so both modes are linked in
    BUTTONS.post(ButtonEvent::Sw2);
    clock.poll();
    BUTTONS.post(ButtonEvent::Sw4);
    clock.poll();

    clock.run()
}
