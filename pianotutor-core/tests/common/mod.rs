// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![allow(dead_code)]

use pianotutor_core::bus::signal::{DesiredFingerPositions, SongIndex, StartButtonSignal};
use pianotutor_core::music::{Channel, Finger, Finger::*, Key, Note, NoteLength::*, Song};
use pianotutor_core::{Reactor, Tutor, TutorConfig, FINGER_COUNT};

pub const RISING: Channel = &[
    Note::new(Key::C4, Quarter, Right1),
    Note::new(Key::D4, Quarter, Right2),
    Note::new(Key::E4, Quarter, Right3),
];

pub const EIGHTHS: Channel = &[
    Note::new(Key::C5, Eighth, Right5),
    Note::new(Key::D5, Eighth, Right5),
    Note::new(Key::E5, Eighth, Right5),
    Note::new(Key::F5, Eighth, Right5),
    Note::new(Key::G5, Eighth, Right5),
    Note::new(Key::F5, Eighth, Right5),
];

pub const BASS_WALK: Channel = &[
    Note::new(Key::C3, Quarter, Left1),
    Note::new(Key::C4, Half, Left1),
    Note::new(Key::C5, Half, Left1),
];

pub const HALVES: Channel = &[
    Note::new(Key::D5, Half, Right5),
    Note::new(Key::F5, Half, Right5),
];

pub const LONG_ENDING: Channel = &[
    Note::new(Key::D5, Half, Right5),
    Note::new(Key::C5, Whole, Right4),
];

pub const LOW_HOLD: Channel = &[Note::new(Key::C3, Half, Left5)];

pub static SONGS: [Song; 5] = [
    Song::new("rising", 60, &[RISING]),
    Song::new("union", 60, &[RISING, EIGHTHS]),
    Song::new("syncopated", 72, &[BASS_WALK, HALVES]),
    Song::new("long ending", 60, &[LONG_ENDING]),
    Song::new("fast", 120, &[LOW_HOLD]),
];

pub fn started() -> Tutor {
    let tutor = Tutor::new(&SONGS, &TutorConfig::default());
    tutor.start().unwrap();
    tutor
}

/// Started tutor with `song` selected and running.
pub fn running(song: u8) -> Tutor {
    let tutor = started();
    tutor.write::<SongIndex>(song);
    tutor.increment::<StartButtonSignal>();
    tutor
}

/// Desired positions with the given fingers set and every other finger resting.
pub fn only(keys: &[(Finger, Key)]) -> [Key; FINGER_COUNT] {
    let mut out = [Key::REST; FINGER_COUNT];
    for &(finger, key) in keys {
        out[finger.index()] = key;
    }
    out
}

pub fn desired(tutor: &Tutor) -> [Key; FINGER_COUNT] {
    tutor.read::<DesiredFingerPositions>()
}
