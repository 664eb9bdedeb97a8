// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The wired-up tutor.
//!
//! [`Tutor`] owns the bus and one of each reactive component and routes every notification to the
//! right handler. Subscription order matters where two components watch the same signal: the
//! sequencer always hears a detected sound before the resolver arms its mute window, so the window
//! is sized from the note just played.

use crate::bus::signal::{HandedMode, SongIndex, SystemState, Tempo};
use crate::bus::{Bus, BusError, Reactor, SignalId, Value};
use crate::config::TutorConfig;
use crate::music::{Sequencer, Song};
use crate::playback::{PlaybackMachine, Trigger};
use crate::resolver::{DistanceCalculator, Resolver};

/// Every observer on the bus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Observer {
    Playback(Trigger),
    Calibration,
    Advance,
    Rewind,
    ResetSong,
    SequencerState,
    Distances,
    Resolve,
    ResolverState,
    Mute,
    Unmute,
    Status,
}

pub struct Tutor {
    bus: Bus<Observer>,
    playback: PlaybackMachine,
    sequencer: Sequencer,
    distances: DistanceCalculator,
    resolver: Resolver,
}

impl Tutor {
    pub fn new(songs: &'static [Song], config: &TutorConfig) -> Self {
        Self {
            bus: Bus::new(),
            playback: PlaybackMachine::new(songs, config.playback),
            sequencer: Sequencer::new(songs),
            distances: DistanceCalculator,
            resolver: Resolver::new(config.playback.ticks_per_beat),
        }
    }

    /// Subscribe every component and publish the power-on state. Returns the first subscription
    /// error, if any, after starting anyway.
    pub fn start(&self) -> Result<(), BusError> {
        use Observer::*;
        use SignalId as S;

        let wiring: &[(SignalId, Observer)] = &[
            // sequencer
            (S::SoundDetectedSignal, Advance),
            (S::NoteForwardSignal, Advance),
            (S::NoteBackwardSignal, Rewind),
            (S::SongIndex, ResetSong),
            (S::SystemState, SequencerState),
            // distances
            (S::DesiredFingerPositions, Distances),
            (S::ActualFingerPositions, Distances),
            // resolver
            (S::FingerDistances, Resolve),
            (S::HandedMode, Resolve),
            (S::HapticsMuted, Resolve),
            (S::SystemState, ResolverState),
            (S::SoundDetectedSignal, Mute),
            (S::NoteForwardSignal, Unmute),
            (S::NoteBackwardSignal, Unmute),
            // playback
            (S::LeftButtonSignal, Playback(Trigger::Left)),
            (S::RightButtonSignal, Playback(Trigger::Right)),
            (S::ModeButtonSignal, Playback(Trigger::Mode)),
            (S::TempoButtonSignal, Playback(Trigger::Tempo)),
            (S::StartButtonSignal, Playback(Trigger::Start)),
            (S::StopButtonSignal, Playback(Trigger::Stop)),
            (S::CalibrationError, Calibration),
            // status
            (S::SystemState, Status),
            (S::SongIndex, Status),
            (S::Tempo, Status),
            (S::HandedMode, Status),
        ];
        let mut wired = Ok(());
        for &(id, observer) in wiring {
            if let Err(e) = self.subscribe(id, observer) {
                wired = wired.and(Err(e));
            }
        }

        self.sequencer.start(self);
        self.distances.update(self);
        self.resolver.resolve(self);
        self.playback.start(self);
        wired
    }

    /// Main-loop housekeeping: expires the haptic mute window.
    pub fn poll(&self, now_ms: u32) {
        self.resolver.poll(self, now_ms);
    }

    #[inline]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    #[inline]
    pub fn playback(&self) -> &PlaybackMachine {
        &self.playback
    }

    fn report(&self, id: SignalId) {
        match id {
            SignalId::SystemState => log::info!("state: {}", self.read::<SystemState>()),
            SignalId::SongIndex => log::info!("song: {}", self.read::<SongIndex>()),
            SignalId::Tempo => log::info!("tempo: {} bpm", self.read::<Tempo>()),
            SignalId::HandedMode => log::info!("hands: {:?}", self.read::<HandedMode>()),
            _ => log::info!("{} = {}", id.name(), self.bus.read_value(id)),
        }
    }
}

impl Reactor for Tutor {
    type Observer = Observer;

    #[inline]
    fn bus(&self) -> &Bus<Observer> {
        &self.bus
    }

    fn react(&self, observer: Observer, id: SignalId, value: Value) {
        match observer {
            Observer::Playback(trigger) => self.playback.handle(self, trigger),
            Observer::Calibration => {
                self.playback
                    .calibration_changed(self, value == Value::Bool(true))
            }
            Observer::Advance => self.sequencer.advance(self),
            Observer::Rewind => self.sequencer.rewind(self),
            Observer::ResetSong => self.sequencer.reset(self),
            Observer::SequencerState => {
                self.sequencer.state_changed(self, self.read::<SystemState>())
            }
            Observer::Distances => self.distances.update(self),
            Observer::Resolve => self.resolver.resolve(self),
            Observer::ResolverState => {
                self.resolver.state_changed(self, self.read::<SystemState>())
            }
            Observer::Mute => self.resolver.sound_detected(self),
            Observer::Unmute => self.resolver.cancel_mute(self),
            Observer::Status => self.report(id),
        }
    }
}
