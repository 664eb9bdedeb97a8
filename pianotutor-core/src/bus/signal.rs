// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The signal table.
//!
//! Every signal is declared once below. The macro expands each row into a [`SignalId`] variant, a
//! typed field in [`Values`] and a marker type implementing [`Signal`], so that
//! `bus.read::<signal::Tempo>()` is checked at compile time while tooling can still walk
//! [`SignalId::ALL`].

use core::cell::Cell;

use super::value::{SignalValue, Value, ValueKind};
use super::{Bus, BusError, Signal, Stored};
use crate::music::Key;
use crate::playback::{Hands, State};
use crate::FINGER_COUNT;

macro_rules! signals {
    ($( $(#[$doc:meta])* $name:ident($field:ident): $ty:ty, )*) => {
        /// Stable identifier of every signal on the bus.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum SignalId {
            $( $name, )*
        }

        impl SignalId {
            /// All signals, in declaration order.
            pub const ALL: &'static [SignalId] = &[ $( SignalId::$name, )* ];
            pub const COUNT: usize = Self::ALL.len();

            pub const fn name(self) -> &'static str {
                match self {
                    $( SignalId::$name => stringify!($name), )*
                }
            }

            /// The fixed value kind of this signal.
            pub const fn kind(self) -> ValueKind {
                match self {
                    $( SignalId::$name => <$ty as SignalValue>::KIND, )*
                }
            }
        }

        /// Backing storage, one cell per signal.
        #[derive(Default)]
        pub struct Values {
            $( $field: Cell<$ty>, )*
        }

        $(
            $(#[$doc])*
            pub struct $name;

            impl Signal for $name {
                const ID: SignalId = SignalId::$name;
                type Value = $ty;

                #[inline]
                fn cell(values: &Values) -> &Cell<$ty> {
                    &values.$field
                }
            }
        )*

        impl<O: Copy + PartialEq> Bus<O> {
            /// Copy out any signal's value by id.
            pub fn read_value(&self, id: SignalId) -> Value {
                match id {
                    $( SignalId::$name => self.read::<$name>().into_value(), )*
                }
            }

            /// Store a value by id. Rejects values of the wrong kind.
            pub fn store_value(
                &self,
                id: SignalId,
                value: Value,
                privileged: bool,
            ) -> Result<Stored, BusError> {
                match id {
                    $(
                        SignalId::$name => {
                            let v = <$ty as SignalValue>::from_value(value)
                                .ok_or(BusError::TypeMismatch(id))?;
                            Ok(self.store::<$name>(v, privileged))
                        }
                    )*
                }
            }
        }
    };
}

signals! {
    /// Incremented by the audio peak detector each time a note is heard.
    SoundDetectedSignal(sound_detected): u8,
    /// Index into the song catalogue.
    SongIndex(song_index): u8,
    SystemState(system_state): State,
    HandedMode(handed_mode): Hands,
    /// Beats per minute.
    Tempo(tempo): u8,

    LeftButtonSignal(left_button): u8,
    RightButtonSignal(right_button): u8,
    ModeButtonSignal(mode_button): u8,
    TempoButtonSignal(tempo_button): u8,
    StartButtonSignal(start_button): u8,
    StopButtonSignal(stop_button): u8,

    /// Set while the position sensor reports a calibration fault.
    CalibrationError(calibration_error): bool,
    /// Last error code reported by the position sensor.
    ErrorCode(error_code): u8,

    NoteForwardSignal(note_forward): u8,
    NoteBackwardSignal(note_backward): u8,

    /// Keys under each finger as seen by the position sensor.
    ActualFingerPositions(actual_positions): [Key; FINGER_COUNT],
    /// Keys each finger should be on, from the sequencer.
    DesiredFingerPositions(desired_positions): [Key; FINGER_COUNT],
    /// `desired - actual` per finger, `Key::REST` when there is no target.
    FingerDistances(finger_distances): [i8; FINGER_COUNT],
    /// Distances after hand-mode, run-state and mute masking. Drives the haptic engine.
    ResolvedFingerDistances(resolved_distances): [i8; FINGER_COUNT],

    /// Shortest note (ticks) that started at the position the sequencer last left.
    PreviousNoteLength(previous_note_length): u8,
    /// Current sequencer position.
    SequencerTicks(sequencer_ticks): u32,

    HapticsMuted(haptics_muted): bool,
    /// Length of the armed mute window, 0 when disarmed.
    MuteWindowMs(mute_window_ms): u16,
}

impl SignalId {
    /// Case-insensitive lookup by name, for the debug console.
    pub fn from_name(name: &str) -> Option<SignalId> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
