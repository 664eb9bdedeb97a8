// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod key;
pub mod note;
pub mod sequencer;
pub mod songs;

pub use key::{Finger, Hand, Key, Pitch};
pub use note::{Channel, Note, NoteLength, Song, MAX_CHANNELS};
pub use sequencer::Sequencer;
