// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Type-erased signal values, used where a signal is picked at runtime (notifications, debug
//! tooling). Application code goes through the typed accessors instead.

use core::fmt;

use crate::music::Key;
use crate::FINGER_COUNT;

/// The fixed type of a signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ValueKind {
    U8,
    U16,
    U32,
    Bool,
    /// `FINGER_COUNT` x u8 key positions
    Keys,
    /// `FINGER_COUNT` x i8 key distances
    Offsets,
}

impl ValueKind {
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::U8 => "u8",
            ValueKind::U16 => "u16",
            ValueKind::U32 => "u32",
            ValueKind::Bool => "bool",
            ValueKind::Keys => "[u8; 10]",
            ValueKind::Offsets => "[i8; 10]",
        }
    }
}

/// A copied-out signal value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    U16(u16),
    U32(u32),
    Bool(bool),
    Keys([u8; FINGER_COUNT]),
    Offsets([i8; FINGER_COUNT]),
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::Bool(_) => ValueKind::Bool,
            Value::Keys(_) => ValueKind::Keys,
            Value::Offsets(_) => ValueKind::Offsets,
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::U8(v) => write!(f, "{}", v),
            Value::U16(v) => write!(f, "{}", v),
            Value::U32(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Keys(keys) => write_list(f, keys),
            Value::Offsets(offsets) => write_list(f, offsets),
        }
    }
}

/// A Rust type that can be stored in a signal.
pub trait SignalValue: Copy + PartialEq + Default {
    const KIND: ValueKind;

    fn into_value(self) -> Value;

    /// Convert back, or `None` if `value` is of another kind or out of range.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! scalar_value {
    ($ty:ty, $variant:ident) => {
        impl SignalValue for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            #[inline]
            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            #[inline]
            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

scalar_value!(u8, U8);
scalar_value!(u16, U16);
scalar_value!(u32, U32);
scalar_value!(bool, Bool);
scalar_value!([i8; FINGER_COUNT], Offsets);

impl SignalValue for [Key; FINGER_COUNT] {
    const KIND: ValueKind = ValueKind::Keys;

    fn into_value(self) -> Value {
        Value::Keys(self.map(Key::raw))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Keys(raw) => Some(raw.map(Key::from_raw)),
            _ => None,
        }
    }
}
