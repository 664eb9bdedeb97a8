// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Playback state machine.
//!
//! The machine reacts to button counters and the calibration flag. Which action a trigger causes
//! is a pure function of the current state ([`transition`]); [`PlaybackMachine`] applies the
//! action as bus writes.
//!
//! | State | Left | Right | Mode | Tempo | Start | Stop | Calibration fault |
//! |---|---|---|---|---|---|---|---|
//! | Idle | previous song | next song | cycle hands | → Tempo | → Running | | → CalibrationError |
//! | Running | note backward | note forward | cycle hands | | → Paused | → Idle | → CalibrationError |
//! | Paused | | | cycle hands | → Tempo | → Running | → Idle | → CalibrationError |
//! | Tempo | slower | faster | cycle hands | → previous state | | | → CalibrationError |
//! | CalibrationError | | | | | | | cleared: → Idle |

use core::fmt;

use crate::bus::{SignalValue, Value, ValueKind};
use crate::music::Hand;

pub mod machine;

pub use machine::PlaybackMachine;

/// Top-level system state, carried on the bus as a `u8`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum State {
    #[default]
    Idle = 0,
    Running = 1,
    Paused = 2,
    CalibrationError = 3,
    Tempo = 4,
}

impl State {
    pub const ALL: [State; 5] = [
        State::Idle,
        State::Running,
        State::Paused,
        State::CalibrationError,
        State::Tempo,
    ];

    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(State::Idle),
            1 => Some(State::Running),
            2 => Some(State::Paused),
            3 => Some(State::CalibrationError),
            4 => Some(State::Tempo),
            _ => None,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Idle => "Idle",
            State::Running => "Running",
            State::Paused => "Paused",
            State::CalibrationError => "Calibration error",
            State::Tempo => "Tempo",
        })
    }
}

/// Which hands receive guidance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Hands {
    #[default]
    Left = 0,
    Right = 1,
    Both = 2,
}

impl Hands {
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Hands::Left),
            1 => Some(Hands::Right),
            2 => Some(Hands::Both),
            _ => None,
        }
    }

    /// Left → Right → Both → Left.
    pub const fn next(self) -> Self {
        match self {
            Hands::Left => Hands::Right,
            Hands::Right => Hands::Both,
            Hands::Both => Hands::Left,
        }
    }

    #[inline]
    pub const fn includes(self, hand: Hand) -> bool {
        matches!(
            (self, hand),
            (Hands::Both, _) | (Hands::Left, Hand::Left) | (Hands::Right, Hand::Right)
        )
    }
}

macro_rules! u8_enum_value {
    ($ty:ty) => {
        impl SignalValue for $ty {
            const KIND: ValueKind = ValueKind::U8;

            #[inline]
            fn into_value(self) -> Value {
                Value::U8(self as u8)
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::U8(raw) => Self::from_raw(raw),
                    _ => None,
                }
            }
        }
    };
}

u8_enum_value!(State);
u8_enum_value!(Hands);

/// Something the machine reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    Left,
    Right,
    Mode,
    Tempo,
    Start,
    Stop,
    CalibrationRaised,
    CalibrationCleared,
}

impl Trigger {
    pub const ALL: [Trigger; 8] = [
        Trigger::Left,
        Trigger::Right,
        Trigger::Mode,
        Trigger::Tempo,
        Trigger::Start,
        Trigger::Stop,
        Trigger::CalibrationRaised,
        Trigger::CalibrationCleared,
    ];
}

/// Side effect of a trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Enter(State),
    /// Leave `Tempo` for whatever state it was entered from.
    ReturnToPrevious,
    PreviousSong,
    NextSong,
    CycleHands,
    SlowDown,
    SpeedUp,
    NoteBackward,
    NoteForward,
}

/// The transition table.
pub const fn transition(state: State, trigger: Trigger) -> Action {
    use Action as A;
    use State as S;
    use Trigger as T;

    match (state, trigger) {
        (S::CalibrationError, T::CalibrationCleared) => A::Enter(S::Idle),
        (S::CalibrationError, _) => A::None,
        (_, T::CalibrationRaised) => A::Enter(S::CalibrationError),
        (_, T::CalibrationCleared) => A::None,
        (_, T::Mode) => A::CycleHands,

        (S::Idle, T::Left) => A::PreviousSong,
        (S::Idle, T::Right) => A::NextSong,
        (S::Idle, T::Tempo) => A::Enter(S::Tempo),
        (S::Idle, T::Start) => A::Enter(S::Running),
        (S::Idle, T::Stop) => A::None,

        (S::Running, T::Left) => A::NoteBackward,
        (S::Running, T::Right) => A::NoteForward,
        (S::Running, T::Tempo) => A::None,
        (S::Running, T::Start) => A::Enter(S::Paused),
        (S::Running, T::Stop) => A::Enter(S::Idle),

        (S::Paused, T::Left | T::Right) => A::None,
        (S::Paused, T::Tempo) => A::Enter(S::Tempo),
        (S::Paused, T::Start) => A::Enter(S::Running),
        (S::Paused, T::Stop) => A::Enter(S::Idle),

        (S::Tempo, T::Left) => A::SlowDown,
        (S::Tempo, T::Right) => A::SpeedUp,
        (S::Tempo, T::Tempo) => A::ReturnToPrevious,
        (S::Tempo, T::Start | T::Stop) => A::None,
    }
}
