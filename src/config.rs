//! Timing and threshold configuration for the controller.

/// Default UI settle window after a time-set button is handled.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 250;

/// Default light level below which the sensor counts as covered.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = 0.06;

/// Default number of seconds the indicators stay lit per snooze flash.
pub const DEFAULT_FLASH_SECS: u8 = 5;

/// Default number of seconds counted down between snooze flashes.
pub const DEFAULT_COUNTDOWN_SECS: u8 = 5;

/// Default number of display refreshes a status message stays visible.
pub const DEFAULT_MESSAGE_HOLD: u8 = 2;

/// Default number of seconds the engine holds the alarm outputs after a match.
pub const DEFAULT_AUTO_OFF_SECS: u8 = 5;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Snooze flash period of zero seconds.
    ZeroFlashPeriod,

    /// Snooze countdown period of zero seconds.
    ZeroCountdownPeriod,

    /// Alarm auto-off window of zero seconds.
    ZeroAutoOff,

    /// Dismissal threshold outside `(0.0, 1.0]`.
    ThresholdOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroFlashPeriod => {
                write!(f, "snooze flash period must be at least one second")
            }
            ConfigError::ZeroCountdownPeriod => {
                write!(f, "snooze countdown period must be at least one second")
            }
            ConfigError::ZeroAutoOff => {
                write!(f, "alarm auto-off window must be at least one second")
            }
            ConfigError::ThresholdOutOfRange => {
                write!(f, "dismissal threshold must be in (0.0, 1.0]")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Controller timing and threshold settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    settle_delay_ms: u64,
    dismiss_threshold: f32,
    flash_secs: u8,
    countdown_secs: u8,
    message_hold: u8,
    auto_off_secs: u8,
}

impl ClockConfig {
    /// Factory settings.
    pub const DEFAULT: Self = Self {
        settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
        flash_secs: DEFAULT_FLASH_SECS,
        countdown_secs: DEFAULT_COUNTDOWN_SECS,
        message_hold: DEFAULT_MESSAGE_HOLD,
        auto_off_secs: DEFAULT_AUTO_OFF_SECS,
    };

    /// Creates a builder starting from the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Settle window after a time-set button, in milliseconds.
    pub fn settle_delay_ms(&self) -> u64 {
        self.settle_delay_ms
    }

    /// Readings strictly below this value dismiss the alarm.
    pub fn dismiss_threshold(&self) -> f32 {
        self.dismiss_threshold
    }

    /// Seconds the indicators stay lit per snooze flash.
    pub fn flash_secs(&self) -> u8 {
        self.flash_secs
    }

    /// Seconds counted down between snooze flashes.
    pub fn countdown_secs(&self) -> u8 {
        self.countdown_secs
    }

    /// Display refreshes a status message stays visible.
    pub fn message_hold(&self) -> u8 {
        self.message_hold
    }

    /// Seconds the engine holds the alarm outputs after a match.
    pub fn auto_off_secs(&self) -> u8 {
        self.auto_off_secs
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`ClockConfig`].
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: ClockConfig,
}

impl ConfigBuilder {
    /// Creates a builder starting from [`ClockConfig::DEFAULT`].
    pub fn new() -> Self {
        Self {
            config: ClockConfig::DEFAULT,
        }
    }

    /// Sets the settle window after a time-set button.
    pub fn settle_delay_ms(mut self, millis: u64) -> Self {
        self.config.settle_delay_ms = millis;
        self
    }

    /// Sets the covered-sensor threshold.
    pub fn dismiss_threshold(mut self, threshold: f32) -> Self {
        self.config.dismiss_threshold = threshold;
        self
    }

    /// Sets the snooze flash period.
    pub fn flash_secs(mut self, secs: u8) -> Self {
        self.config.flash_secs = secs;
        self
    }

    /// Sets the snooze countdown period.
    pub fn countdown_secs(mut self, secs: u8) -> Self {
        self.config.countdown_secs = secs;
        self
    }

    /// Sets how many refreshes a status message is held. Zero disables holding.
    pub fn message_hold(mut self, refreshes: u8) -> Self {
        self.config.message_hold = refreshes;
        self
    }

    /// Sets the engine's alarm auto-off window.
    pub fn auto_off_secs(mut self, secs: u8) -> Self {
        self.config.auto_off_secs = secs;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<ClockConfig, ConfigError> {
        let config = self.config;

        if config.flash_secs == 0 {
            return Err(ConfigError::ZeroFlashPeriod);
        }
        if config.countdown_secs == 0 {
            return Err(ConfigError::ZeroCountdownPeriod);
        }
        if config.auto_off_secs == 0 {
            return Err(ConfigError::ZeroAutoOff);
        }
        // Written so that NaN is rejected as well.
        if !(config.dismiss_threshold > 0.0 && config.dismiss_threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange);
        }

        Ok(config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
