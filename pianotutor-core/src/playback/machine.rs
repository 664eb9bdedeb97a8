// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Applies [`transition`] results to the bus.

use core::cell::Cell;

use super::{transition, Action, Hands, State, Trigger};
use crate::bus::signal::{
    HandedMode, NoteBackwardSignal, NoteForwardSignal, SongIndex, SystemState, Tempo,
};
use crate::bus::Reactor;
use crate::config::PlaybackConfig;
use crate::music::Song;

pub struct PlaybackMachine {
    songs: &'static [Song],
    config: PlaybackConfig,
    /// State that `Tempo` returns to.
    previous: Cell<State>,
}

impl PlaybackMachine {
    pub fn new(songs: &'static [Song], config: PlaybackConfig) -> Self {
        Self {
            songs,
            config,
            previous: Cell::new(State::Idle),
        }
    }

    /// Publish the power-on state: idle, both hands, first song at its own tempo.
    pub fn start<R: Reactor>(&self, bus: &R) {
        self.previous.set(State::Idle);
        bus.write::<SystemState>(State::Idle);
        bus.write::<HandedMode>(Hands::Both);
        bus.write::<SongIndex>(0);
        bus.write::<Tempo>(self.song_tempo(0));
    }

    #[inline]
    pub fn previous_state(&self) -> State {
        self.previous.get()
    }

    /// React to a button press or calibration change.
    pub fn handle<R: Reactor>(&self, bus: &R, trigger: Trigger) {
        let state = bus.read::<SystemState>();
        let action = transition(state, trigger);
        if action != Action::None {
            log::debug!("{:?} in {}: {:?}", trigger, state, action);
        }

        match action {
            Action::None => {}
            Action::Enter(next) => self.enter(bus, state, next),
            Action::ReturnToPrevious => {
                let back = match self.previous.get() {
                    // Only reachable if the state was forced by debug tooling.
                    State::Tempo => State::Idle,
                    back => back,
                };
                self.enter(bus, state, back);
            }
            Action::PreviousSong => self.select_song(bus, -1),
            Action::NextSong => self.select_song(bus, 1),
            Action::CycleHands => {
                let hands = bus.read::<HandedMode>().next();
                log::debug!("hand mode {:?}", hands);
                bus.write::<HandedMode>(hands);
            }
            Action::SlowDown => {
                let tempo = bus.read::<Tempo>();
                bus.write::<Tempo>(self.config.clamp_tempo(tempo.saturating_sub(1)));
            }
            Action::SpeedUp => {
                let tempo = bus.read::<Tempo>();
                bus.write::<Tempo>(self.config.clamp_tempo(tempo.saturating_add(1)));
            }
            Action::NoteBackward => bus.increment::<NoteBackwardSignal>(),
            Action::NoteForward => bus.increment::<NoteForwardSignal>(),
        }
    }

    /// React to the calibration flag changing to `raised`.
    pub fn calibration_changed<R: Reactor>(&self, bus: &R, raised: bool) {
        let trigger = if raised {
            Trigger::CalibrationRaised
        } else {
            Trigger::CalibrationCleared
        };
        self.handle(bus, trigger);
    }

    fn enter<R: Reactor>(&self, bus: &R, from: State, to: State) {
        self.previous.set(from);
        bus.write::<SystemState>(to);
    }

    fn select_song<R: Reactor>(&self, bus: &R, step: i16) {
        let count = self.songs.len() as i16;
        if count == 0 {
            return;
        }

        let current = bus.read::<SongIndex>() as i16;
        let index = (current + step).rem_euclid(count) as usize;
        log::debug!("song {}: {}", index, self.songs[index].name);
        bus.write::<SongIndex>(index as u8);
        bus.write::<Tempo>(self.song_tempo(index));
    }

    fn song_tempo(&self, index: usize) -> u8 {
        let tempo = self
            .songs
            .get(index)
            .map_or(self.config.default_tempo, |song| song.tempo);
        self.config.clamp_tempo(tempo)
    }
}
