// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Notes, channels and songs.

use super::key::{Finger, Key};

/// Maximum number of concurrent channels in one song.
pub const MAX_CHANNELS: usize = 8;

/// Note durations in sequencer ticks (one tick is a sixteenth note).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum NoteLength {
    Sixteenth = 1,
    Eighth = 2,
    DottedEighth = 3,
    Quarter = 4,
    DottedQuarter = 6,
    Half = 8,
    DottedHalf = 12,
    Whole = 16,
}

impl NoteLength {
    #[inline]
    pub const fn ticks(self) -> u8 {
        self as u8
    }
}

/// A single note: which key, for how long, played by which finger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub key: Key,
    pub length: NoteLength,
    pub finger: Finger,
}

impl Note {
    pub const fn new(key: Key, length: NoteLength, finger: Finger) -> Self {
        Self {
            key,
            length,
            finger,
        }
    }

    /// A silent slot of the given length.
    pub const fn rest(length: NoteLength, finger: Finger) -> Self {
        Self::new(Key::REST, length, finger)
    }
}

/// One monophonic voice. A channel ends at the end of the slice or at the first note keyed
/// [`Key::INVALID`], whichever comes first.
pub type Channel = &'static [Note];

/// Walk the playable part of a channel.
pub fn notes(channel: Channel) -> impl Iterator<Item = &'static Note> {
    channel.iter().take_while(|n| !n.key.is_invalid())
}

/// Total length of a channel in ticks.
pub fn duration(channel: Channel) -> u32 {
    notes(channel).map(|n| n.length.ticks() as u32).sum()
}

/// An immutable song from the built-in catalogue.
#[derive(Debug)]
pub struct Song {
    pub name: &'static str,
    /// Default tempo in beats per minute.
    pub tempo: u8,
    channels: &'static [Channel],
}

impl Song {
    /// Build a song. Fails to compile when given more than [`MAX_CHANNELS`] channels.
    pub const fn new(name: &'static str, tempo: u8, channels: &'static [Channel]) -> Self {
        assert!(channels.len() <= MAX_CHANNELS, "too many channels");
        Self {
            name,
            tempo,
            channels,
        }
    }

    #[inline]
    pub fn channels(&self) -> &'static [Channel] {
        self.channels
    }
}
