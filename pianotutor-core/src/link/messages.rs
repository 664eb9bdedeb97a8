// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Sensor link message definitions.

use crate::FINGER_COUNT;

pub const START_BYTE: u8 = 0xA5;

// Message IDs
pub const MSG_POSITIONS: u8 = 0x01;
pub const MSG_ERROR: u8 = 0x02;

/// Longest payload of any message.
pub const MAX_PAYLOAD: usize = FINGER_COUNT;

/// Payload length of a known message ID.
pub const fn payload_len(id: u8) -> Option<usize> {
    match id {
        MSG_POSITIONS => Some(FINGER_COUNT),
        MSG_ERROR => Some(1),
        _ => None,
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SensorMessage {
    /// Raw key under each finger, `Key::INVALID` for fingers the camera lost.
    Positions([u8; FINGER_COUNT]),
    /// Sensor-side fault, e.g. the keyboard is out of view.
    Error(u8),
}
