// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Distance resolver.
//!
//! Turns raw finger distances into the distances the haptic engine actually plays: everything
//! rests unless a song is running, the hand-mode masks out the unused hand, and a short mute
//! window follows each correctly played note.

use core::cell::Cell;

use crate::bus::signal::{
    FingerDistances, HandedMode, HapticsMuted, MuteWindowMs, PreviousNoteLength,
    ResolvedFingerDistances, SystemState, Tempo,
};
use crate::bus::Reactor;
use crate::music::Hand;
use crate::playback::{Hands, State};
use crate::FINGER_COUNT;

pub mod distance;
pub mod mute;

pub use distance::{distances, DistanceCalculator, REST_DISTANCE};
pub use mute::MuteWindow;

/// Apply run state, hand mode and mute to raw distances.
pub fn mask(
    distances: &[i8; FINGER_COUNT],
    state: State,
    hands: Hands,
    muted: bool,
) -> [i8; FINGER_COUNT] {
    if state != State::Running || muted {
        return [REST_DISTANCE; FINGER_COUNT];
    }

    let mut out = *distances;
    for hand in [Hand::Left, Hand::Right] {
        if !hands.includes(hand) {
            out[hand.fingers()].fill(REST_DISTANCE);
        }
    }
    out
}

pub struct Resolver {
    ticks_per_beat: u8,
    /// Last time seen by [`Resolver::poll`].
    now_ms: Cell<u32>,
    mute: Cell<MuteWindow>,
}

impl Resolver {
    pub fn new(ticks_per_beat: u8) -> Self {
        Self {
            ticks_per_beat,
            now_ms: Cell::new(0),
            mute: Cell::new(MuteWindow::default()),
        }
    }

    /// Recompute `ResolvedFingerDistances`.
    pub fn resolve<R: Reactor>(&self, bus: &R) {
        let resolved = mask(
            &bus.read::<FingerDistances>(),
            bus.read::<SystemState>(),
            bus.read::<HandedMode>(),
            bus.read::<HapticsMuted>(),
        );
        bus.write::<ResolvedFingerDistances>(resolved);
    }

    pub fn state_changed<R: Reactor>(&self, bus: &R, state: State) {
        if state != State::Running {
            self.cancel_mute(bus);
        }
        self.resolve(bus);
    }

    /// A note was heard: hold guidance back for the length of the note just left. A window still
    /// running from an earlier note is replaced, or dropped when the new note has no length.
    pub fn sound_detected<R: Reactor>(&self, bus: &R) {
        if bus.read::<SystemState>() != State::Running {
            return;
        }

        let duration = MuteWindow::duration_ms(
            bus.read::<PreviousNoteLength>(),
            bus.read::<Tempo>(),
            self.ticks_per_beat,
        );
        if duration == 0 {
            self.cancel_mute(bus);
            return;
        }

        log::debug!("haptics muted for {} ms", duration);
        self.mute.set(MuteWindow::armed(self.now_ms.get(), duration));
        bus.write::<MuteWindowMs>(duration);
        bus.write::<HapticsMuted>(true);
    }

    /// Manual navigation or leaving `Running` re-enables guidance immediately.
    pub fn cancel_mute<R: Reactor>(&self, bus: &R) {
        if self.mute.get().is_active() {
            log::debug!("haptic mute cancelled");
        }
        self.mute.set(MuteWindow::default());
        bus.write::<MuteWindowMs>(0);
        bus.write::<HapticsMuted>(false);
    }

    /// Advance the clock and expire the mute window. Call from the main loop.
    pub fn poll<R: Reactor>(&self, bus: &R, now_ms: u32) {
        self.now_ms.set(now_ms);
        if self.mute.get().expired(now_ms) {
            log::debug!("haptic mute expired");
            self.mute.set(MuteWindow::default());
            bus.write::<MuteWindowMs>(0);
            bus.write::<HapticsMuted>(false);
        }
    }
}
