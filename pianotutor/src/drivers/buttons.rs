// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Front panel buttons.
//!
//! Sampled from the haptic tick; at 200 Hz the sample period is longer than the switches' bounce,
//! so a plain rising-edge detector is enough. The audio peak is too short for sampling and comes
//! in on its own EXTI line instead.

use pianotutor_core::input::{Edge, Event, EventLatch};

use crate::hw::pins::ButtonPins;

const BUTTONS: [Event; 6] = [
    Event::Left,
    Event::Right,
    Event::Mode,
    Event::Tempo,
    Event::Start,
    Event::Stop,
];

pub struct Buttons {
    pins: ButtonPins,
    edges: [Edge; BUTTONS.len()],
}

impl Buttons {
    pub fn new(pins: ButtonPins) -> Self {
        Self {
            pins,
            edges: Default::default(),
        }
    }

    fn level(&self, event: Event) -> bool {
        let p = &self.pins;
        match event {
            Event::Left => p.left.is_high(),
            Event::Right => p.right.is_high(),
            Event::Mode => p.mode.is_high(),
            Event::Tempo => p.tempo.is_high(),
            Event::Start => p.start.is_high(),
            Event::Stop => p.stop.is_high(),
            Event::Sound => false,
        }
    }

    /// Read every button once and raise the events whose line just went high.
    pub fn sample(&mut self, latch: &EventLatch) {
        for (i, event) in BUTTONS.into_iter().enumerate() {
            let level = self.level(event);
            if self.edges[i].rose(level) {
                latch.raise(event);
            }
        }
    }
}
