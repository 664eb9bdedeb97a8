// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Signal bus.
//!
//! A closed set of typed signals (see [`signal`]) with per-signal write gating and a bounded list
//! of observers. Components never talk to each other directly: they write signals, and whoever
//! subscribed to a signal is notified synchronously, in subscription order, when its value
//! actually changes.
//!
//! The bus only stores; routing a notification to an observer is the job of the owning
//! [`Reactor`], which keeps observers as plain `Copy` tags instead of callbacks.
//!
//! Everything takes `&self`, so handlers may write other signals while being notified.

use core::cell::{Cell, RefCell};
use core::fmt;

use heapless::Vec;

pub mod reactor;
pub mod signal;
pub mod value;

pub use reactor::Reactor;
pub use signal::{SignalId, Values};
pub use value::{SignalValue, Value, ValueKind};

/// Maximum number of observers per signal.
pub const MAX_SUBSCRIBERS: usize = 8;

/// Observer list of one signal, copied out before notifying.
pub type Observers<O> = Vec<O, MAX_SUBSCRIBERS>;

/// A signal known at compile time.
pub trait Signal {
    const ID: SignalId;
    type Value: SignalValue;

    fn cell(values: &Values) -> &Cell<Self::Value>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BusError {
    SubscriptionsFull(SignalId),
    NotSubscribed(SignalId),
    TypeMismatch(SignalId),
    UnknownSignal,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::SubscriptionsFull(id) => {
                write!(f, "{}: all {} subscriptions in use", id.name(), MAX_SUBSCRIBERS)
            }
            BusError::NotSubscribed(id) => write!(f, "{}: observer not subscribed", id.name()),
            BusError::TypeMismatch(id) => {
                write!(f, "{}: expected a {} value", id.name(), id.kind().name())
            }
            BusError::UnknownSignal => f.write_str("unknown signal"),
        }
    }
}

/// Outcome of storing a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stored {
    /// Write gate is closed and the write was not privileged.
    Blocked,
    /// Same value as before; nobody needs to hear about it.
    Unchanged,
    Changed,
}

pub struct Bus<O> {
    values: Values,
    write_enable: [Cell<bool>; SignalId::COUNT],
    notifying: [Cell<bool>; SignalId::COUNT],
    observers: [RefCell<Observers<O>>; SignalId::COUNT],
}

impl<O: Copy + PartialEq> Bus<O> {
    /// All signals zeroed, writable, and without observers.
    pub fn new() -> Self {
        Self {
            values: Values::default(),
            write_enable: core::array::from_fn(|_| Cell::new(true)),
            notifying: core::array::from_fn(|_| Cell::new(false)),
            observers: core::array::from_fn(|_| RefCell::new(Vec::new())),
        }
    }

    #[inline]
    pub fn read<S: Signal>(&self) -> S::Value {
        S::cell(&self.values).get()
    }

    /// Store without notifying. `privileged` bypasses the write gate.
    pub fn store<S: Signal>(&self, value: S::Value, privileged: bool) -> Stored {
        if !privileged && !self.write_enabled(S::ID) {
            return Stored::Blocked;
        }

        let cell = S::cell(&self.values);
        if cell.get() == value {
            return Stored::Unchanged;
        }
        cell.set(value);
        Stored::Changed
    }

    /// Open or close the application write path of a signal. Debug writes ignore the gate.
    pub fn set_write_enable(&self, id: SignalId, enabled: bool) {
        self.write_enable[id.index()].set(enabled);
    }

    #[inline]
    pub fn write_enabled(&self, id: SignalId) -> bool {
        self.write_enable[id.index()].get()
    }

    /// Append an observer. The same observer may be registered more than once.
    pub fn subscribe(&self, id: SignalId, observer: O) -> Result<(), BusError> {
        let mut list = self.observers[id.index()].borrow_mut();
        if list.push(observer).is_err() {
            log::warn!("could not subscribe to {}", id.name());
            return Err(BusError::SubscriptionsFull(id));
        }
        Ok(())
    }

    /// Remove the earliest registration of `observer`.
    pub fn unsubscribe(&self, id: SignalId, observer: O) -> Result<(), BusError> {
        let mut list = self.observers[id.index()].borrow_mut();
        match list.iter().position(|o| *o == observer) {
            Some(i) => {
                list.remove(i);
                Ok(())
            }
            None => {
                log::warn!("could not unsubscribe from {}", id.name());
                Err(BusError::NotSubscribed(id))
            }
        }
    }

    /// Snapshot of the observers of a signal.
    pub fn observers(&self, id: SignalId) -> Observers<O> {
        self.observers[id.index()].borrow().clone()
    }

    /// Mark a signal as notifying. Returns `false` if it already is.
    pub(crate) fn begin_notify(&self, id: SignalId) -> bool {
        !self.notifying[id.index()].replace(true)
    }

    pub(crate) fn end_notify(&self, id: SignalId) {
        self.notifying[id.index()].set(false);
    }
}

impl<O: Copy + PartialEq> Default for Bus<O> {
    fn default() -> Self {
        Self::new()
    }
}
