// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

mod common;

use common::*;
use pianotutor_core::bus::signal::{
    CalibrationError, HandedMode, LeftButtonSignal, ModeButtonSignal, NoteBackwardSignal,
    NoteForwardSignal, RightButtonSignal, SongIndex, StartButtonSignal, StopButtonSignal,
    SystemState, Tempo, TempoButtonSignal,
};
use pianotutor_core::playback::{Hands, State};
use pianotutor_core::{Reactor, Tutor};

fn state(t: &Tutor) -> State {
    t.read::<SystemState>()
}

#[test]
fn powers_on_idle_with_both_hands() {
    let t = started();
    assert_eq!(state(&t), State::Idle);
    assert_eq!(t.read::<HandedMode>(), Hands::Both);
    assert_eq!(t.read::<SongIndex>(), 0);
    assert_eq!(t.read::<Tempo>(), 60);
}

#[test]
fn song_selection_wraps_and_loads_song_tempo() {
    let t = started();

    t.increment::<LeftButtonSignal>();
    assert_eq!(t.read::<SongIndex>(), 4);
    assert_eq!(t.read::<Tempo>(), 120);

    t.increment::<RightButtonSignal>();
    assert_eq!(t.read::<SongIndex>(), 0);
    assert_eq!(t.read::<Tempo>(), 60);

    t.increment::<RightButtonSignal>();
    t.increment::<RightButtonSignal>();
    assert_eq!(t.read::<SongIndex>(), 2);
    assert_eq!(t.read::<Tempo>(), 72);
}

#[test]
fn start_toggles_run_and_pause_and_stop_returns_to_idle() {
    let t = started();

    t.increment::<StopButtonSignal>();
    assert_eq!(state(&t), State::Idle);

    t.increment::<StartButtonSignal>();
    assert_eq!(state(&t), State::Running);
    t.increment::<StartButtonSignal>();
    assert_eq!(state(&t), State::Paused);
    t.increment::<StartButtonSignal>();
    assert_eq!(state(&t), State::Running);
    t.increment::<StopButtonSignal>();
    assert_eq!(state(&t), State::Idle);

    t.increment::<StartButtonSignal>();
    t.increment::<StartButtonSignal>();
    t.increment::<StopButtonSignal>();
    assert_eq!(state(&t), State::Idle);
}

#[test]
fn running_buttons_navigate_notes() {
    let t = running(0);
    let song = t.read::<SongIndex>();

    t.increment::<RightButtonSignal>();
    t.increment::<RightButtonSignal>();
    t.increment::<LeftButtonSignal>();
    assert_eq!(t.read::<NoteForwardSignal>(), 2);
    assert_eq!(t.read::<NoteBackwardSignal>(), 1);
    assert_eq!(t.read::<SongIndex>(), song);

    // No tempo changes mid-song.
    t.increment::<TempoButtonSignal>();
    assert_eq!(state(&t), State::Running);
}

#[test]
fn paused_ignores_left_and_right() {
    let t = running(0);
    t.increment::<StartButtonSignal>();
    t.increment::<LeftButtonSignal>();
    t.increment::<RightButtonSignal>();
    assert_eq!(t.read::<NoteForwardSignal>(), 0);
    assert_eq!(t.read::<NoteBackwardSignal>(), 0);
    assert_eq!(t.read::<SongIndex>(), 0);
}

#[test]
fn tempo_mode_returns_where_it_came_from() {
    let t = started();

    t.increment::<TempoButtonSignal>();
    assert_eq!(state(&t), State::Tempo);
    t.increment::<RightButtonSignal>();
    t.increment::<RightButtonSignal>();
    t.increment::<LeftButtonSignal>();
    assert_eq!(t.read::<Tempo>(), 61);
    t.increment::<TempoButtonSignal>();
    assert_eq!(state(&t), State::Idle);

    t.increment::<StartButtonSignal>();
    t.increment::<StartButtonSignal>();
    assert_eq!(state(&t), State::Paused);
    t.increment::<TempoButtonSignal>();
    assert_eq!(state(&t), State::Tempo);
    assert_eq!(t.playback().previous_state(), State::Paused);

    // Start and stop do nothing while adjusting tempo.
    t.increment::<StartButtonSignal>();
    t.increment::<StopButtonSignal>();
    assert_eq!(state(&t), State::Tempo);

    t.increment::<TempoButtonSignal>();
    assert_eq!(state(&t), State::Paused);
}

#[test]
fn tempo_is_clamped() {
    let t = started();
    t.increment::<TempoButtonSignal>();

    t.write::<Tempo>(255);
    t.increment::<RightButtonSignal>();
    assert_eq!(t.read::<Tempo>(), 255);

    t.write::<Tempo>(1);
    t.increment::<LeftButtonSignal>();
    assert_eq!(t.read::<Tempo>(), 1);
}

#[test]
fn mode_cycles_hands_outside_calibration_error() {
    let t = started();
    let expected = [Hands::Left, Hands::Right, Hands::Both];

    for s in [State::Idle, State::Running, State::Paused, State::Tempo] {
        t.debug_write::<SystemState>(s);
        for hands in expected {
            t.increment::<ModeButtonSignal>();
            assert_eq!(t.read::<HandedMode>(), hands, "in {}", s);
        }
    }

    t.debug_write::<SystemState>(State::CalibrationError);
    t.increment::<ModeButtonSignal>();
    assert_eq!(t.read::<HandedMode>(), Hands::Both);
}

#[test]
fn calibration_error_preempts_and_clears_to_idle() {
    let t = running(0);

    t.write::<CalibrationError>(true);
    assert_eq!(state(&t), State::CalibrationError);
    assert_eq!(t.playback().previous_state(), State::Running);

    t.increment::<StartButtonSignal>();
    t.increment::<StopButtonSignal>();
    t.increment::<TempoButtonSignal>();
    t.increment::<RightButtonSignal>();
    assert_eq!(state(&t), State::CalibrationError);
    assert_eq!(t.read::<NoteForwardSignal>(), 0);

    t.write::<CalibrationError>(false);
    assert_eq!(state(&t), State::Idle);
}

#[test]
fn calibration_error_reaches_every_state() {
    for s in [State::Idle, State::Running, State::Paused, State::Tempo] {
        let t = started();
        t.debug_write::<SystemState>(s);
        t.write::<CalibrationError>(true);
        assert_eq!(state(&t), State::CalibrationError, "from {}", s);
        assert_eq!(t.playback().previous_state(), s);
    }
}

#[test]
fn clearing_without_a_fault_changes_nothing() {
    let t = running(0);
    t.debug_write::<CalibrationError>(true);
    t.debug_write::<SystemState>(State::Running);
    t.write::<CalibrationError>(false);
    assert_eq!(state(&t), State::Running);
}

#[test]
fn closed_write_gate_freezes_the_state() {
    let t = started();
    t.bus().set_write_enable(pianotutor_core::SignalId::SystemState, false);
    t.increment::<StartButtonSignal>();
    assert_eq!(state(&t), State::Idle);

    t.bus().set_write_enable(pianotutor_core::SignalId::SystemState, true);
    t.increment::<StartButtonSignal>();
    assert_eq!(state(&t), State::Running);
}
