// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Notification routing.
//!
//! A [`Reactor`] owns a [`Bus`] and knows how to deliver a notification to each of its observer
//! tags. Components are written against `R: Reactor`, so they can be driven by the full
//! [`Tutor`](crate::Tutor) network or by a small test harness.

use core::fmt;

use super::{Bus, BusError, Signal, SignalId, SignalValue, Stored, Value};

pub trait Reactor {
    /// Tag identifying who to notify. One variant per known observer.
    type Observer: Copy + PartialEq + fmt::Debug;

    fn bus(&self) -> &Bus<Self::Observer>;

    /// Deliver one notification. `value` is the signal's new value.
    fn react(&self, observer: Self::Observer, id: SignalId, value: Value);

    #[inline]
    fn read<S: Signal>(&self) -> S::Value {
        self.bus().read::<S>()
    }

    /// Application write: dropped while the signal's write gate is closed, and only notifies when
    /// the value changes.
    fn write<S: Signal>(&self, value: S::Value) {
        if self.bus().store::<S>(value, false) == Stored::Changed {
            self.notify(S::ID, value.into_value());
        }
    }

    /// Privileged write for debug tooling; ignores the write gate.
    fn debug_write<S: Signal>(&self, value: S::Value) {
        if self.bus().store::<S>(value, true) == Stored::Changed {
            self.notify(S::ID, value.into_value());
        }
    }

    /// Privileged write of a signal picked at runtime by name.
    fn debug_write_named(&self, name: &str, value: Value) -> Result<(), BusError> {
        let id = SignalId::from_name(name).ok_or(BusError::UnknownSignal)?;
        if self.bus().store_value(id, value, true)? == Stored::Changed {
            self.notify(id, value);
        }
        Ok(())
    }

    /// Bump a counter signal, as a button press or detected sound does.
    fn increment<S: Signal<Value = u8>>(&self) {
        self.write::<S>(self.read::<S>().wrapping_add(1));
    }

    fn subscribe(&self, id: SignalId, observer: Self::Observer) -> Result<(), BusError> {
        self.bus().subscribe(id, observer)
    }

    fn unsubscribe(&self, id: SignalId, observer: Self::Observer) -> Result<(), BusError> {
        self.bus().unsubscribe(id, observer)
    }

    /// Deliver `value` to every observer of `id`, in subscription order.
    ///
    /// A signal that changes again while its own notification is still running keeps the new
    /// value but is not re-announced.
    fn notify(&self, id: SignalId, value: Value) {
        let bus = self.bus();
        if !bus.begin_notify(id) {
            log::warn!("{} changed while notifying, not re-announced", id.name());
            return;
        }

        for observer in bus.observers(id) {
            self.react(observer, id, value);
        }

        bus.end_notify(id);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::bus::signal::{NoteForwardSignal, SongIndex, Tempo};

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Watcher {
        Record(u8),
        /// Writes `Tempo = song index + 100` when notified.
        Echo,
        /// Writes `SongIndex + 1` back into `SongIndex`.
        Feedback,
        /// Unsubscribes `Record(1)` from `SongIndex`.
        Detach,
    }

    struct Harness {
        bus: Bus<Watcher>,
        seen: RefCell<Vec<(Watcher, SignalId, Value)>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                bus: Bus::new(),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<(Watcher, SignalId, Value)> {
            self.seen.borrow().clone()
        }
    }

    impl Reactor for Harness {
        type Observer = Watcher;

        fn bus(&self) -> &Bus<Watcher> {
            &self.bus
        }

        fn react(&self, observer: Watcher, id: SignalId, value: Value) {
            self.seen.borrow_mut().push((observer, id, value));
            match observer {
                Watcher::Record(_) => {}
                Watcher::Echo => self.write::<Tempo>(self.read::<SongIndex>() + 100),
                Watcher::Feedback => self.write::<SongIndex>(self.read::<SongIndex>() + 1),
                Watcher::Detach => {
                    let _ = self.unsubscribe(SignalId::SongIndex, Watcher::Record(1));
                }
            }
        }
    }

    #[test]
    fn observers_run_in_subscription_order_with_new_value() {
        let h = Harness::new();
        h.subscribe(SignalId::SongIndex, Watcher::Record(2)).unwrap();
        h.subscribe(SignalId::SongIndex, Watcher::Record(1)).unwrap();

        h.write::<SongIndex>(3);

        assert_eq!(
            h.seen(),
            vec![
                (Watcher::Record(2), SignalId::SongIndex, Value::U8(3)),
                (Watcher::Record(1), SignalId::SongIndex, Value::U8(3)),
            ]
        );
    }

    #[test]
    fn repeated_value_notifies_once() {
        let h = Harness::new();
        h.subscribe(SignalId::Tempo, Watcher::Record(0)).unwrap();
        h.write::<Tempo>(60);
        h.write::<Tempo>(60);
        assert_eq!(h.seen().len(), 1);
    }

    #[test]
    fn duplicate_subscriptions_each_fire() {
        let h = Harness::new();
        h.subscribe(SignalId::Tempo, Watcher::Record(0)).unwrap();
        h.subscribe(SignalId::Tempo, Watcher::Record(0)).unwrap();
        h.write::<Tempo>(1);
        assert_eq!(h.seen().len(), 2);
    }

    #[test]
    fn gated_writes_are_silent_but_debug_writes_land() {
        let h = Harness::new();
        h.subscribe(SignalId::Tempo, Watcher::Record(0)).unwrap();
        h.bus().set_write_enable(SignalId::Tempo, false);

        h.write::<Tempo>(42);
        assert_eq!(h.read::<Tempo>(), 0);
        assert!(h.seen().is_empty());

        h.debug_write::<Tempo>(42);
        assert_eq!(h.read::<Tempo>(), 42);
        assert_eq!(h.seen().len(), 1);
    }

    #[test]
    fn handlers_may_write_other_signals() {
        let h = Harness::new();
        h.subscribe(SignalId::SongIndex, Watcher::Echo).unwrap();
        h.subscribe(SignalId::Tempo, Watcher::Record(7)).unwrap();

        h.write::<SongIndex>(2);

        assert_eq!(h.read::<Tempo>(), 102);
        assert_eq!(
            h.seen().last(),
            Some(&(Watcher::Record(7), SignalId::Tempo, Value::U8(102)))
        );
    }

    #[test]
    fn self_feedback_stops_after_one_level() {
        let h = Harness::new();
        h.subscribe(SignalId::SongIndex, Watcher::Feedback).unwrap();

        h.write::<SongIndex>(1);

        // The feedback write lands but does not re-enter the chain.
        assert_eq!(h.read::<SongIndex>(), 2);
        assert_eq!(h.seen().len(), 1);

        // The guard is released afterwards.
        h.write::<SongIndex>(10);
        assert_eq!(h.read::<SongIndex>(), 11);
        assert_eq!(h.seen().len(), 2);
    }

    #[test]
    fn unsubscribing_during_notification_takes_effect_next_write() {
        let h = Harness::new();
        h.subscribe(SignalId::SongIndex, Watcher::Detach).unwrap();
        h.subscribe(SignalId::SongIndex, Watcher::Record(1)).unwrap();

        h.write::<SongIndex>(1);
        assert_eq!(h.seen().len(), 2);

        h.write::<SongIndex>(2);
        assert_eq!(h.seen().len(), 3);
    }

    #[test]
    fn counters_wrap() {
        let h = Harness::new();
        h.subscribe(SignalId::NoteForwardSignal, Watcher::Record(0)).unwrap();
        h.debug_write::<NoteForwardSignal>(255);
        h.increment::<NoteForwardSignal>();
        assert_eq!(h.read::<NoteForwardSignal>(), 0);
        assert_eq!(h.seen().len(), 2);
    }

    #[test]
    fn named_debug_writes() {
        let h = Harness::new();
        h.subscribe(SignalId::Tempo, Watcher::Record(0)).unwrap();
        assert_eq!(h.debug_write_named("TEMPO", Value::U8(5)), Ok(()));
        assert_eq!(h.read::<Tempo>(), 5);
        assert_eq!(
            h.debug_write_named("nope", Value::U8(5)),
            Err(BusError::UnknownSignal)
        );
        assert_eq!(
            h.debug_write_named("tempo", Value::U32(5)),
            Err(BusError::TypeMismatch(SignalId::Tempo))
        );
    }
}
