// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Frame parser for the position sensor link.
//!
//! Frames are `START_BYTE, id, payload.., checksum`, where the checksum is the wrapping sum of the
//! id and payload bytes.

use super::messages::*;

enum State {
    WaitStart,
    WaitId,
    Payload { id: u8, len: usize },
    WaitChecksum { id: u8 },
}

pub struct Parser {
    state: State,
    checksum: u8,
    payload: [u8; MAX_PAYLOAD],
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: State::WaitStart,
            checksum: 0,
            payload: [0; MAX_PAYLOAD],
        }
    }

    /// Process a single incoming byte. Returns `Some(SensorMessage)` if a complete frame is received.
    pub fn push(&mut self, byte: u8) -> Option<SensorMessage> {
        match self.state {
            State::WaitStart => {
                if byte == START_BYTE {
                    self.state = State::WaitId;
                    self.checksum = 0;
                }
            }
            State::WaitId => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.state = match payload_len(byte) {
                    Some(_) => State::Payload { id: byte, len: 0 },
                    // Unknown message ID, reset state
                    None => State::WaitStart,
                };
            }
            State::Payload { id, len } => {
                self.checksum = self.checksum.wrapping_add(byte);
                self.payload[len] = byte;
                let len = len + 1;
                self.state = if Some(len) == payload_len(id) {
                    State::WaitChecksum { id }
                } else {
                    State::Payload { id, len }
                };
            }
            State::WaitChecksum { id } => {
                let valid = byte == self.checksum;
                self.state = State::WaitStart;

                if !valid {
                    log::warn!("sensor frame {:#04x} dropped: bad checksum", id);
                    return None;
                }
                return match id {
                    MSG_POSITIONS => {
                        let mut keys = [0u8; crate::FINGER_COUNT];
                        keys.copy_from_slice(&self.payload[..crate::FINGER_COUNT]);
                        Some(SensorMessage::Positions(keys))
                    }
                    MSG_ERROR => Some(SensorMessage::Error(self.payload[0])),
                    _ => None,
                };
            }
        }
        None
    }
}
