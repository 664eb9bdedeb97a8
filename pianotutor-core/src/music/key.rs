// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Piano keys and fingers.

use core::fmt;

/// One of the 88 piano keys (`A0` = 0 .. `C8` = 87), or one of two markers.
///
/// [`Key::INVALID`] means "no information" (finger not detected, song finished) and [`Key::REST`]
/// means "no target for this finger".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Key(u8);

/// Pitch class within an octave.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pitch {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

const NAMES: [&str; 12] = ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"];

impl Key {
    pub const A0: Key = Key(0);
    pub const C8: Key = Key(87);
    pub const INVALID: Key = Key(88);
    pub const REST: Key = Key(89);

    pub const C3: Key = Key::new(Pitch::C, 3);
    pub const D3: Key = Key::new(Pitch::D, 3);
    pub const E3: Key = Key::new(Pitch::E, 3);
    pub const F3: Key = Key::new(Pitch::F, 3);
    pub const G3: Key = Key::new(Pitch::G, 3);
    pub const A3: Key = Key::new(Pitch::A, 3);
    pub const B3: Key = Key::new(Pitch::B, 3);
    pub const C4: Key = Key::new(Pitch::C, 4);
    pub const D4: Key = Key::new(Pitch::D, 4);
    pub const E4: Key = Key::new(Pitch::E, 4);
    pub const F4: Key = Key::new(Pitch::F, 4);
    pub const G4: Key = Key::new(Pitch::G, 4);
    pub const A4: Key = Key::new(Pitch::A, 4);
    pub const B4: Key = Key::new(Pitch::B, 4);
    pub const C5: Key = Key::new(Pitch::C, 5);
    pub const D5: Key = Key::new(Pitch::D, 5);
    pub const E5: Key = Key::new(Pitch::E, 5);
    pub const F5: Key = Key::new(Pitch::F, 5);
    pub const G5: Key = Key::new(Pitch::G, 5);

    /// Key for a pitch in scientific octave numbering (`C4` is middle C).
    ///
    /// Panics at compile time when used in a `const` outside `A0..=C8`.
    pub const fn new(pitch: Pitch, octave: u8) -> Self {
        let index = octave as i16 * 12 + pitch as i16 - 9;
        assert!(index >= 0 && index <= 87, "key outside the 88-key range");
        Key(index as u8)
    }

    /// Wrap a raw key byte as received from the sensor link or the bus.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Key(raw)
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// `true` for `A0..=C8`.
    #[inline]
    pub const fn is_pitch(self) -> bool {
        self.0 <= Self::C8.0
    }

    #[inline]
    pub const fn is_rest(self) -> bool {
        self.0 == Self::REST.0
    }

    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }

    /// Signed key distance `self - from`, or `None` when either side is not a real key.
    pub fn offset_from(self, from: Key) -> Option<i8> {
        if self.is_pitch() && from.is_pitch() {
            Some(self.0 as i8 - from.0 as i8)
        } else {
            None
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Key::INVALID => f.write_str("Invalid"),
            Key::REST => f.write_str("Rest"),
            Key(n) if n <= Key::C8.0 => {
                let octave = (n + 9) / 12;
                write!(f, "{}{}", NAMES[(n % 12) as usize], octave)
            }
            Key(n) => write!(f, "?{}", n),
        }
    }
}

/// Finger identifiers, counted from the left pinky with palms down.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Finger {
    Left5 = 0,
    Left4,
    Left3,
    Left2,
    Left1,
    Right1,
    Right2,
    Right3,
    Right4,
    Right5,
}

/// Which hand a finger belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// Finger indices belonging to this hand.
    #[inline]
    pub const fn fingers(self) -> core::ops::Range<usize> {
        match self {
            Hand::Left => 0..5,
            Hand::Right => 5..10,
        }
    }

    /// Index of this hand's thumb.
    #[inline]
    pub const fn thumb(self) -> usize {
        match self {
            Hand::Left => Finger::Left1 as usize,
            Hand::Right => Finger::Right1 as usize,
        }
    }
}

impl Finger {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn hand(self) -> Hand {
        if (self as u8) < Finger::Right1 as u8 {
            Hand::Left
        } else {
            Hand::Right
        }
    }
}
