// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tick-based multi-channel sequencer.
//!
//! Time only moves on explicit events (a note heard, a forward/backward press); a tick is one
//! sixteenth-note slot, not wall-clock time. At every position the sequencer publishes which key
//! each finger should be on.
//!
//! Channels may use different note lengths. Advancing always jumps to the nearest upcoming note
//! boundary of *any* channel, so syncopated voices stay in step.

use core::cell::Cell;

use super::key::Key;
use super::note::{notes, Channel, Song};
use crate::bus::signal::{
    DesiredFingerPositions, PreviousNoteLength, SequencerTicks, SongIndex, SystemState,
};
use crate::bus::Reactor;
use crate::playback::State;
use crate::FINGER_COUNT;

/// Index of the note that starts exactly at `ticks`, or `None` when `ticks` falls inside a note
/// or past the end of the channel.
pub fn locate(channel: Channel, ticks: u32) -> Option<usize> {
    let mut start = 0u32;
    for (i, note) in notes(channel).enumerate() {
        if start == ticks {
            return Some(i);
        }
        start += note.length.ticks() as u32;
        if start > ticks {
            return None;
        }
    }
    None
}

/// First note boundary (a note start or the channel's end) strictly after `ticks`.
pub fn next_boundary(channel: Channel, ticks: u32) -> Option<u32> {
    let mut boundary = 0u32;
    for note in notes(channel) {
        boundary += note.length.ticks() as u32;
        if boundary > ticks {
            return Some(boundary);
        }
    }
    None
}

/// Last note start strictly before `ticks`, or 0.
pub fn previous_start(channel: Channel, ticks: u32) -> u32 {
    let mut start = 0u32;
    let mut previous = 0u32;
    for note in notes(channel) {
        if start >= ticks {
            break;
        }
        previous = start;
        start += note.length.ticks() as u32;
    }
    previous
}

/// Desired keys for every finger at `ticks`, and the shortest note starting there.
///
/// The lowest-numbered channel claims a finger when several start a note on it at once. Once
/// every channel has run out the song is over and all fingers read [`Key::INVALID`].
pub fn positions_at(song: &Song, ticks: u32) -> ([Key; FINGER_COUNT], u8) {
    let mut positions = [Key::REST; FINGER_COUNT];
    let mut claimed = [false; FINGER_COUNT];
    let mut shortest: Option<u8> = None;
    let mut finished = true;

    for (c, &channel) in song.channels().iter().enumerate() {
        if next_boundary(channel, ticks).is_some() {
            finished = false;
        }

        let Some(i) = locate(channel, ticks) else {
            continue;
        };
        let note = &channel[i];
        let finger = note.finger.index();
        if claimed[finger] {
            log::debug!("channel {} loses {:?} at tick {}", c, note.finger, ticks);
        } else {
            claimed[finger] = true;
            positions[finger] = note.key;
        }

        let length = note.length.ticks();
        shortest = Some(shortest.map_or(length, |s| s.min(length)));
    }

    if finished {
        positions = [Key::INVALID; FINGER_COUNT];
    }
    (positions, shortest.unwrap_or(0))
}

pub struct Sequencer {
    songs: &'static [Song],
    ticks: Cell<u32>,
    /// Shortest note starting at `ticks`.
    current_note_length: Cell<u8>,
}

impl Sequencer {
    pub fn new(songs: &'static [Song]) -> Self {
        Self {
            songs,
            ticks: Cell::new(0),
            current_note_length: Cell::new(0),
        }
    }

    #[inline]
    pub fn ticks(&self) -> u32 {
        self.ticks.get()
    }

    /// Publish the positions for the current song at tick 0.
    pub fn start<R: Reactor>(&self, bus: &R) {
        self.reset(bus);
    }

    /// Move to the nearest upcoming note boundary across all channels. Only while running.
    pub fn advance<R: Reactor>(&self, bus: &R) {
        if bus.read::<SystemState>() != State::Running {
            return;
        }
        let Some(song) = self.song(bus) else {
            return;
        };

        let from = self.ticks.get();
        let next = song
            .channels()
            .iter()
            .filter_map(|&channel| next_boundary(channel, from))
            .min();

        match next {
            Some(to) => {
                let left_behind = self.current_note_length.get();
                self.ticks.set(to);
                self.publish(bus, song, left_behind);
            }
            None => log::debug!("end of {} reached", song.name),
        }
    }

    /// Move back to the latest note start before the current tick. Only while running.
    pub fn rewind<R: Reactor>(&self, bus: &R) {
        if bus.read::<SystemState>() != State::Running {
            return;
        }
        let Some(song) = self.song(bus) else {
            return;
        };

        let from = self.ticks.get();
        let to = song
            .channels()
            .iter()
            .map(|&channel| previous_start(channel, from))
            .max()
            .unwrap_or(0);

        self.ticks.set(to);
        self.publish(bus, song, 0);
    }

    /// Back to the top of the current song.
    pub fn reset<R: Reactor>(&self, bus: &R) {
        self.ticks.set(0);
        self.current_note_length.set(0);
        match self.song(bus) {
            Some(song) => self.publish(bus, song, 0),
            None => {
                bus.write::<DesiredFingerPositions>([Key::REST; FINGER_COUNT]);
                bus.write::<PreviousNoteLength>(0);
                bus.write::<SequencerTicks>(0);
            }
        }
    }

    /// A system state change; only a return to idle matters here.
    pub fn state_changed<R: Reactor>(&self, bus: &R, state: State) {
        if state == State::Idle {
            self.reset(bus);
        }
    }

    fn song<R: Reactor>(&self, bus: &R) -> Option<&'static Song> {
        let index = bus.read::<SongIndex>() as usize;
        let song = self.songs.get(index);
        if song.is_none() {
            log::warn!("no song at index {}", index);
        }
        song
    }

    fn publish<R: Reactor>(&self, bus: &R, song: &Song, previous_note_length: u8) {
        let ticks = self.ticks.get();
        let (positions, shortest) = positions_at(song, ticks);
        self.current_note_length.set(shortest);

        bus.write::<SequencerTicks>(ticks);
        bus.write::<PreviousNoteLength>(previous_note_length);
        bus.write::<DesiredFingerPositions>(positions);
    }
}
