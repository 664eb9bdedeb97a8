// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Haptic output.
//!
//! Each finger has two opposing vibration motors and each wrist one pair more. Once per timer tick
//! the engine turns the resolved distance of every finger into a software PWM pulse:
//!
//! - on target: both motors, short confirmation buzz
//! - near: the motor on the side to move towards, stronger and faster the closer the target
//! - far: silent; if a whole hand is far, its wrist pulses instead, in the thumb's direction
//!
//! The resulting bits go out through one shift-register chain per hand. The electrical side lives
//! behind [`HapticOutput`].

pub mod channel;
pub mod engine;

pub use channel::{HapticChannel, Zone};
pub use engine::{HapticEngine, ShiftFrame, CHAIN_BITS, PADDING_BITS};

use crate::config::HapticConfig;
use crate::FINGER_COUNT;

/// Something that can put a frame on the motor outputs.
pub trait HapticOutput {
    type Error;

    /// Shift both hands' words in and latch them.
    fn write_frame(&mut self, frame: &ShiftFrame) -> Result<(), Self::Error>;
}

/// Engine plus its output, owned by the timer interrupt.
pub struct HapticDriver<O> {
    engine: HapticEngine,
    output: O,
}

impl<O: HapticOutput> HapticDriver<O> {
    pub fn new(config: HapticConfig, output: O) -> Self {
        Self {
            engine: HapticEngine::new(config),
            output,
        }
    }

    /// One timer tick.
    pub fn tick(&mut self, distances: &[i8; FINGER_COUNT]) -> Result<(), O::Error> {
        let frame = self.engine.tick(distances);
        self.output.write_frame(&frame)
    }

    #[inline]
    pub fn engine(&self) -> &HapticEngine {
        &self.engine
    }

    pub fn free(self) -> O {
        self.output
    }
}
