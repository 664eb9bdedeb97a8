// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Built-in song catalogue.

use super::key::{Finger::*, Key};
use super::note::{Channel, Note, NoteLength::*, Song};

const fn n(key: Key, length: super::NoteLength, finger: super::Finger) -> Note {
    Note::new(key, length, finger)
}

/// Right hand walking up from middle C, one quarter per finger.
pub const SCALE_RIGHT: Channel = &[
    n(Key::C4, Quarter, Right1),
    n(Key::D4, Quarter, Right2),
    n(Key::E4, Quarter, Right3),
    n(Key::F4, Quarter, Right4),
    n(Key::G4, Quarter, Right5),
];

/// Left hand walking down to C3.
pub const SCALE_LEFT: Channel = &[
    n(Key::G3, Quarter, Left1),
    n(Key::F3, Quarter, Left2),
    n(Key::E3, Quarter, Left3),
    n(Key::D3, Quarter, Left4),
    n(Key::C3, Quarter, Left5),
];

const MARY_MELODY: Channel = &[
    n(Key::E4, Quarter, Right3),
    n(Key::D4, Quarter, Right2),
    n(Key::C4, Quarter, Right1),
    n(Key::D4, Quarter, Right2),
    n(Key::E4, Quarter, Right3),
    n(Key::E4, Quarter, Right3),
    n(Key::E4, Half, Right3),
    n(Key::D4, Quarter, Right2),
    n(Key::D4, Quarter, Right2),
    n(Key::D4, Half, Right2),
    n(Key::E4, Quarter, Right3),
    n(Key::G4, Quarter, Right5),
    n(Key::G4, Half, Right5),
];

const MARY_BASS: Channel = &[
    n(Key::C3, Whole, Left5),
    n(Key::C3, Whole, Left5),
    n(Key::G3, Whole, Left1),
    n(Key::C3, Whole, Left5),
];

const ODE_MELODY: Channel = &[
    n(Key::E4, Quarter, Right3),
    n(Key::E4, Quarter, Right3),
    n(Key::F4, Quarter, Right4),
    n(Key::G4, Quarter, Right5),
    n(Key::G4, Quarter, Right5),
    n(Key::F4, Quarter, Right4),
    n(Key::E4, Quarter, Right3),
    n(Key::D4, Quarter, Right2),
    n(Key::C4, Quarter, Right1),
    n(Key::C4, Quarter, Right1),
    n(Key::D4, Quarter, Right2),
    n(Key::E4, Quarter, Right3),
    n(Key::E4, DottedQuarter, Right3),
    n(Key::D4, Eighth, Right2),
    n(Key::D4, Half, Right2),
];

const ODE_BASS: Channel = &[
    n(Key::C3, Whole, Left5),
    n(Key::G3, Half, Left1),
    n(Key::C3, Half, Left5),
    Note::rest(Whole, Left5),
    n(Key::G3, Half, Left1),
    n(Key::G3, Half, Left1),
];

/// Songs selectable with the left/right buttons while idle.
pub static CATALOG: [Song; 4] = [
    Song::new("C major, right hand", 60, &[SCALE_RIGHT]),
    Song::new("C major, both hands", 60, &[SCALE_LEFT, SCALE_RIGHT]),
    Song::new("Mary Had a Little Lamb", 80, &[MARY_MELODY, MARY_BASS]),
    Song::new("Ode to Joy", 90, &[ODE_MELODY, ODE_BASS]),
];
