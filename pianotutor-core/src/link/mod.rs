// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Position sensor link.
//!
//! The camera module streams framed messages over a UART: finger positions, or an error code when
//! it cannot see the keyboard. [`Parser`] frames the byte stream and [`PositionLink`] publishes the
//! result, briefly holding the last known key of a finger the camera loses for a frame or two.

use crate::bus::signal::{ActualFingerPositions, CalibrationError, ErrorCode};
use crate::bus::Reactor;
use crate::config::LinkConfig;
use crate::music::Key;
use crate::FINGER_COUNT;

pub mod messages;
pub mod parser;

pub use messages::SensorMessage;
pub use parser::Parser;

pub struct PositionLink {
    config: LinkConfig,
    /// Last key received for each finger.
    last: [Key; FINGER_COUNT],
    /// Consecutive frames each finger has been standing in with `last`.
    reused: [u8; FINGER_COUNT],
}

impl PositionLink {
    pub fn new(config: LinkConfig) -> Self {
        Self {
            config,
            last: [Key::INVALID; FINGER_COUNT],
            reused: [0; FINGER_COUNT],
        }
    }

    /// No finger has been seen yet.
    pub fn start<R: Reactor>(&mut self, bus: &R) {
        self.forget();
        bus.write::<ActualFingerPositions>(self.last);
    }

    /// Drop every held key. Nothing seen before a fault stands in for a finger after it.
    fn forget(&mut self) {
        self.last = [Key::INVALID; FINGER_COUNT];
        self.reused = [0; FINGER_COUNT];
    }

    pub fn apply<R: Reactor>(&mut self, bus: &R, message: SensorMessage) {
        match message {
            SensorMessage::Error(code) => {
                log::warn!("position sensor error {}", code);
                self.forget();
                bus.write::<ErrorCode>(code);
                bus.write::<CalibrationError>(true);
                bus.write::<ActualFingerPositions>([Key::INVALID; FINGER_COUNT]);
            }
            SensorMessage::Positions(raw) => {
                bus.write::<CalibrationError>(false);
                let positions = self.filter(raw.map(Key::from_raw));
                bus.write::<ActualFingerPositions>(positions);
            }
        }
    }

    fn filter(&mut self, raw: [Key; FINGER_COUNT]) -> [Key; FINGER_COUNT] {
        let mut out = raw;
        for finger in 0..FINGER_COUNT {
            if !raw[finger].is_invalid() {
                self.last[finger] = raw[finger];
                self.reused[finger] = 0;
            } else if self.reused[finger] < self.config.max_position_reuse {
                out[finger] = self.last[finger];
                self.reused[finger] += 1;
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Tutor, TutorConfig};

    #[test]
    fn lost_finger_is_held_for_a_few_frames() {
        let mut link = PositionLink::new(LinkConfig::default());
        let mut seen = [Key::C4; FINGER_COUNT];
        assert_eq!(link.filter(seen), seen);

        seen[3] = Key::INVALID;
        for _ in 0..3 {
            assert_eq!(link.filter(seen)[3], Key::C4);
        }
        assert_eq!(link.filter(seen)[3], Key::INVALID);
        assert_eq!(link.filter(seen)[2], Key::C4);

        // Seeing the finger again restarts the allowance.
        seen[3] = Key::D4;
        link.filter(seen);
        seen[3] = Key::INVALID;
        assert_eq!(link.filter(seen)[3], Key::D4);
    }

    #[test]
    fn sensor_error_drops_held_keys() {
        let tutor = Tutor::new(&[], &TutorConfig::default());
        let mut link = PositionLink::new(LinkConfig::default());
        link.apply(&tutor, SensorMessage::Positions([Key::C4.raw(); FINGER_COUNT]));

        link.apply(&tutor, SensorMessage::Error(3));
        assert!(tutor.read::<CalibrationError>());
        assert_eq!(tutor.read::<ErrorCode>(), 3);

        let mut frame = [Key::D4.raw(); FINGER_COUNT];
        frame[3] = Key::INVALID.raw();
        link.apply(&tutor, SensorMessage::Positions(frame));
        assert!(!tutor.read::<CalibrationError>());
        let seen = tutor.read::<ActualFingerPositions>();
        assert_eq!(seen[3], Key::INVALID);
        assert_eq!(seen[2], Key::D4);
    }

    #[test]
    fn never_seen_finger_stays_invalid() {
        let mut link = PositionLink::new(LinkConfig::default());
        assert_eq!(
            link.filter([Key::INVALID; FINGER_COUNT]),
            [Key::INVALID; FINGER_COUNT]
        );
    }
}
