// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status LED.
//!
//! Lit while the glove reports a calibration error. Boards that sink the LED instead of sourcing
//! it are built with the `led-active-low` feature.

use stm32f7xx_hal::gpio::{self, Output, PushPull};

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    /// Level selected at build time.
    pub const BOARD: ActiveLevel = if cfg!(feature = "led-active-low") {
        ActiveLevel::Low
    } else {
        ActiveLevel::High
    };
}

/// LED on any push-pull GPIO that remembers its active level and last known state.
pub struct StatusLed<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
    active: ActiveLevel,
    is_on: bool,
}

impl<const P: char, const N: u8> StatusLed<P, N> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(pin: gpio::Pin<P, N, Output<PushPull>>, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            is_on: true,
        };
        led.drive(false);
        led
    }

    /// Drive the LED logically ON (true) or OFF (false). Repeated calls with the same state do not
    /// touch the pin.
    pub fn set(&mut self, on: bool) {
        if on != self.is_on {
            self.drive(on);
        }
    }

    fn drive(&mut self, on: bool) {
        match (self.active, on) {
            (ActiveLevel::High, true) | (ActiveLevel::Low, false) => self.pin.set_high(),
            (ActiveLevel::High, false) | (ActiveLevel::Low, true) => self.pin.set_low(),
        }
        self.is_on = on;
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }
}
