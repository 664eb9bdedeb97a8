// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-safe input events.
//!
//! Interrupt handlers only [`raise`](EventLatch::raise) a flag; the main loop
//! [`drain`](EventLatch::drain)s the latch into the bus, so every bus write happens in one
//! context.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::bus::signal::{
    LeftButtonSignal, ModeButtonSignal, RightButtonSignal, SoundDetectedSignal,
    StartButtonSignal, StopButtonSignal, TempoButtonSignal,
};
use crate::bus::Reactor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Event {
    Left = 0,
    Right,
    Mode,
    Tempo,
    Start,
    Stop,
    /// The audio peak detector heard a note.
    Sound,
}

pub const EVENT_COUNT: usize = 7;

impl Event {
    pub const ALL: [Event; EVENT_COUNT] = [
        Event::Left,
        Event::Right,
        Event::Mode,
        Event::Tempo,
        Event::Start,
        Event::Stop,
        Event::Sound,
    ];
}

/// One pending flag per event. Presses raised faster than the main loop drains coalesce.
pub struct EventLatch {
    pending: [AtomicBool; EVENT_COUNT],
}

impl Default for EventLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLatch {
    pub const fn new() -> Self {
        Self {
            pending: [
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
                AtomicBool::new(false),
            ],
        }
    }

    /// Mark `event` as pending. Safe from any interrupt.
    #[inline]
    pub fn raise(&self, event: Event) {
        self.pending[event as usize].store(true, Ordering::Release);
    }

    /// Take a pending event.
    #[inline]
    pub fn take(&self, event: Event) -> bool {
        self.pending[event as usize].swap(false, Ordering::Acquire)
    }

    /// Bump the counter signal of every pending event.
    pub fn drain<R: Reactor>(&self, bus: &R) {
        for event in Event::ALL {
            if !self.take(event) {
                continue;
            }
            match event {
                Event::Left => bus.increment::<LeftButtonSignal>(),
                Event::Right => bus.increment::<RightButtonSignal>(),
                Event::Mode => bus.increment::<ModeButtonSignal>(),
                Event::Tempo => bus.increment::<TempoButtonSignal>(),
                Event::Start => bus.increment::<StartButtonSignal>(),
                Event::Stop => bus.increment::<StopButtonSignal>(),
                Event::Sound => bus.increment::<SoundDetectedSignal>(),
            }
        }
    }
}

/// Rising-edge detector for a sampled digital input.
#[derive(Default)]
pub struct Edge {
    last: bool,
}

impl Edge {
    /// `true` when `level` goes high.
    #[inline]
    pub fn rose(&mut self, level: bool) -> bool {
        let rose = level && !self.last;
        self.last = level;
        rose
    }
}
