#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ClockEngine`**: Owns time of day, alarm time, alarm enable and the alarm auto-off window
//! - **`ClockController`**: Cooperative control loop handling time-set mode, alarm setup, snooze and dismissal
//! - **`TimeOfDay`**: Normalized hour/minute/second with cascading one-second advance
//! - **`ButtonMailbox`**: Latest-wins single-slot mailbox written by the button interrupt
//! - **`TickSignal`**: Pending-seconds counter written by the 1 Hz timer interrupt
//! - **`OutputSink`**: Trait to implement for your indicators, alarm signal and display
//! - **`LightSensor`**: Trait to implement for your light sensor ADC channel
//! - **`Sleeper`**: Trait to implement for your blocking delay
//! - **`ClockConfig`**: Validated timing and threshold settings
//!
//! The engine never touches hardware. Its heartbeat returns an `AlarmDrive`
//! request which the controller applies to the `OutputSink`, so the whole core
//! runs on the host under test with mock peripherals.

#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod button;
pub mod signal;
pub mod sensor;
pub mod output;
pub mod config;
pub mod engine;
pub mod controller;

pub use button::{ButtonEvent, ButtonMailbox, ButtonSource, Debouncer, UnknownButton};
pub use config::{ClockConfig, ConfigBuilder, ConfigError};
pub use controller::{ClockController, SnoozeState};
pub use engine::ClockEngine;
pub use output::{AlarmDrive, OutputSink};
pub use sensor::LightSensor;
pub use signal::{RefreshFlag, TickSignal};
pub use time::{Sleeper, TimeDuration};
pub use types::{INDICATORS_ALL, INDICATORS_OFF, Mode, TimeOfDay};
