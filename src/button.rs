//! Debounced button events and the single-slot mailbox that carries them.
//!
//! The interrupt handler for the four front-panel switches posts one
//! [`ButtonEvent`] into a [`ButtonMailbox`]; the control loop drains it through
//! the [`ButtonSource`] trait. There is no queue: a newer press overwrites an
//! unread one.

use portable_atomic::{AtomicU8, Ordering};

/// A debounced button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ButtonEvent {
    /// No press pending.
    #[default]
    None = 0,

    /// Advance hour (time-set) / advance alarm hour (run).
    Sw2 = 2,

    /// Advance minute (time-set) / advance alarm minute (run).
    Sw3 = 3,

    /// Confirm time (time-set) / toggle alarm enable (run).
    Sw4 = 4,

    /// Unbound.
    Sw5 = 5,
}

impl ButtonEvent {
    /// Raw code stored in the mailbox.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Hardware settle window applied by the producer after this switch fires.
    pub const fn settle_ms(self) -> u32 {
        match self {
            ButtonEvent::None => 0,
            ButtonEvent::Sw2 | ButtonEvent::Sw3 => 35,
            ButtonEvent::Sw4 => 25,
            ButtonEvent::Sw5 => 30,
        }
    }
}

/// A raw button code that does not name any switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownButton(pub u8);

impl core::fmt::Display for UnknownButton {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown button code {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownButton {}

impl TryFrom<u8> for ButtonEvent {
    type Error = UnknownButton;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ButtonEvent::None),
            2 => Ok(ButtonEvent::Sw2),
            3 => Ok(ButtonEvent::Sw3),
            4 => Ok(ButtonEvent::Sw4),
            5 => Ok(ButtonEvent::Sw5),
            other => Err(UnknownButton(other)),
        }
    }
}

/// Trait for abstracting the debounced button producer.
pub trait ButtonSource {
    /// Returns true if a press is waiting to be read.
    fn has_event(&self) -> bool;

    /// Consumes the pending press, returning [`ButtonEvent::None`] if there is none.
    fn take_event(&self) -> ButtonEvent;
}

/// Latest-wins single-slot mailbox for button events.
///
/// Written by exactly one producer (the GPIO interrupt) and drained by exactly
/// one consumer (the control loop). Reading is a single atomic swap, so no
/// lock or critical section is needed to hand an event across.
#[derive(Debug)]
pub struct ButtonMailbox {
    slot: AtomicU8,
}

impl ButtonMailbox {
    /// Creates an empty mailbox. Usable in `static` items.
    pub const fn new() -> Self {
        Self {
            slot: AtomicU8::new(ButtonEvent::None.code()),
        }
    }

    /// Stores a press, overwriting any unread one.
    pub fn post(&self, event: ButtonEvent) {
        self.slot.store(event.code(), Ordering::Release);
    }

    /// Stores a raw code as read from the producer.
    pub fn post_raw(&self, code: u8) {
        self.slot.store(code, Ordering::Release);
    }

    /// Discards any pending press.
    pub fn clear(&self) {
        self.slot.store(ButtonEvent::None.code(), Ordering::Release);
    }
}

impl Default for ButtonMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonSource for ButtonMailbox {
    fn has_event(&self) -> bool {
        self.slot.load(Ordering::Acquire) != ButtonEvent::None.code()
    }

    fn take_event(&self) -> ButtonEvent {
        let code = self.slot.swap(ButtonEvent::None.code(), Ordering::AcqRel);
        match ButtonEvent::try_from(code) {
            Ok(event) => event,
            Err(_unknown) => {
                warn!("dropping unknown button code {}", _unknown.0);
                ButtonEvent::None
            }
        }
    }
}

/// Edge debouncer for the producer side of a button.
///
/// Reports a press on the transition to pressed, then ignores further presses
/// until `debounce_ms` has elapsed since the last accepted one.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    pressed: bool,
    last_press_ms: Option<u32>,
    debounce_ms: u32,
}

impl Debouncer {
    /// Creates a debouncer with the given minimum interval between presses.
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            pressed: false,
            last_press_ms: None,
            debounce_ms,
        }
    }

    /// Creates a debouncer using the hardware settle window of `event`.
    pub const fn for_button(event: ButtonEvent) -> Self {
        Self::new(event.settle_ms())
    }

    /// Feeds the current pin level; returns true on an accepted press.
    ///
    /// # Arguments
    /// * `is_pressed` - Current logical state of the switch
    /// * `now_ms` - Free-running millisecond counter (may wrap)
    pub fn update(&mut self, is_pressed: bool, now_ms: u32) -> bool {
        if is_pressed && !self.pressed {
            let settled = match self.last_press_ms {
                Some(last) => now_ms.wrapping_sub(last) >= self.debounce_ms,
                None => true,
            };
            if settled {
                self.pressed = true;
                self.last_press_ms = Some(now_ms);
                return true;
            }
        } else if !is_pressed && self.pressed {
            self.pressed = false;
        }
        false
    }
}
