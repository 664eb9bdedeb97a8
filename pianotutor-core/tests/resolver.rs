// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

mod common;

use common::*;
use pianotutor_core::bus::signal::{
    ActualFingerPositions, FingerDistances, HandedMode, HapticsMuted, ModeButtonSignal,
    MuteWindowMs, NoteForwardSignal, ResolvedFingerDistances, SoundDetectedSignal,
    StartButtonSignal, StopButtonSignal,
};
use pianotutor_core::bus::signal::{PreviousNoteLength, SequencerTicks, SongIndex};
use pianotutor_core::input::{Event, EventLatch};
use pianotutor_core::music::{Channel, Finger::*, Key, Note, NoteLength::*, Song};
use pianotutor_core::playback::Hands;
use pianotutor_core::resolver::REST_DISTANCE;
use pianotutor_core::{Reactor, Tutor, TutorConfig, FINGER_COUNT};

const REST: [i8; FINGER_COUNT] = [REST_DISTANCE; FINGER_COUNT];

/// Every finger two keys below middle C.
fn hover(t: &Tutor) {
    t.write::<ActualFingerPositions>([Key::new(pianotutor_core::music::Pitch::ASharp, 3); FINGER_COUNT]);
}

fn resolved(t: &Tutor) -> [i8; FINGER_COUNT] {
    t.read::<ResolvedFingerDistances>()
}

#[test]
fn silent_until_running() {
    let t = started();
    hover(&t);
    assert_eq!(t.read::<FingerDistances>()[Right1.index()], 2);
    assert_eq!(resolved(&t), REST);

    t.increment::<StartButtonSignal>();
    let mut expected = REST;
    expected[Right1.index()] = 2;
    assert_eq!(resolved(&t), expected);

    t.increment::<StartButtonSignal>();
    assert_eq!(resolved(&t), REST);
}

#[test]
fn hand_mode_masks_the_unused_hand() {
    let t = running(2);
    hover(&t);
    let both = resolved(&t);
    assert_ne!(both[Left1.index()], REST_DISTANCE);
    assert_ne!(both[Right5.index()], REST_DISTANCE);

    // Both -> Left
    t.increment::<ModeButtonSignal>();
    assert_eq!(t.read::<HandedMode>(), Hands::Left);
    let left = resolved(&t);
    assert_eq!(left[Left1.index()], both[Left1.index()]);
    assert_eq!(left[5..], REST[5..]);

    // Left -> Right
    t.increment::<ModeButtonSignal>();
    let right = resolved(&t);
    assert_eq!(right[..5], REST[..5]);
    assert_eq!(right[Right5.index()], both[Right5.index()]);
}

#[test]
fn played_note_mutes_until_its_length_has_passed() {
    let t = running(0);
    hover(&t);
    t.poll(10_000);

    // A quarter note at 60 bpm lasts one second.
    t.increment::<SoundDetectedSignal>();
    assert!(t.read::<HapticsMuted>());
    assert_eq!(t.read::<MuteWindowMs>(), 1000);
    assert_eq!(resolved(&t), REST);

    t.poll(10_999);
    assert!(t.read::<HapticsMuted>());

    t.poll(11_000);
    assert!(!t.read::<HapticsMuted>());
    assert_eq!(t.read::<MuteWindowMs>(), 0);
    // Now guiding towards D4 with the second finger.
    assert_eq!(resolved(&t)[Right2.index()], 4);
}

#[test]
fn manual_navigation_cancels_the_mute() {
    let t = running(0);
    hover(&t);
    t.increment::<SoundDetectedSignal>();
    assert!(t.read::<HapticsMuted>());

    t.increment::<NoteForwardSignal>();
    assert!(!t.read::<HapticsMuted>());
    assert_eq!(resolved(&t)[Right3.index()], 6);
}

#[test]
fn stopping_cancels_the_mute() {
    let t = running(0);
    t.increment::<SoundDetectedSignal>();
    t.increment::<StopButtonSignal>();
    assert!(!t.read::<HapticsMuted>());
}

#[test]
fn sound_while_idle_does_not_mute() {
    let t = started();
    t.increment::<SoundDetectedSignal>();
    assert!(!t.read::<HapticsMuted>());
}

const GRACE: Channel = &[Note::new(Key::C4, Eighth, Right1)];
const HELD: Channel = &[
    Note::new(Key::E4, Half, Right2),
    Note::new(Key::F4, Half, Right2),
];
static GRACE_NOTE: [Song; 1] = [Song::new("grace note", 60, &[GRACE, HELD])];

#[test]
fn sound_inside_a_window_replaces_it() {
    let t = Tutor::new(&GRACE_NOTE, &TutorConfig::default());
    t.start().unwrap();
    t.write::<SongIndex>(0);
    t.increment::<StartButtonSignal>();
    hover(&t);
    t.poll(0);

    // The eighth and the half start together; the eighth sizes the window.
    t.increment::<SoundDetectedSignal>();
    assert_eq!(t.read::<SequencerTicks>(), 2);
    assert_eq!(t.read::<PreviousNoteLength>(), 2);
    assert_eq!(t.read::<MuteWindowMs>(), 500);
    assert!(t.read::<HapticsMuted>());

    // Nothing started at tick 2, so the next sound leaves no window at all.
    t.poll(100);
    t.increment::<SoundDetectedSignal>();
    assert_eq!(t.read::<SequencerTicks>(), 8);
    assert_eq!(t.read::<PreviousNoteLength>(), 0);
    assert!(!t.read::<HapticsMuted>());
    assert_eq!(t.read::<MuteWindowMs>(), 0);
    assert_eq!(resolved(&t)[Right2.index()], 7);
}

#[test]
fn second_note_restarts_the_window() {
    let t = running(0);
    hover(&t);
    t.poll(0);
    t.increment::<SoundDetectedSignal>();

    t.poll(600);
    t.increment::<SoundDetectedSignal>();
    assert!(t.read::<HapticsMuted>());

    // The first window would have closed at 1000 ms.
    t.poll(1_200);
    assert!(t.read::<HapticsMuted>());
    t.poll(1_600);
    assert!(!t.read::<HapticsMuted>());
}

#[test]
fn latched_peak_mutes_after_drain() {
    let t = running(0);
    hover(&t);
    t.poll(0);

    let latch = EventLatch::new();
    latch.raise(Event::Sound);
    assert!(!t.read::<HapticsMuted>());
    latch.drain(&t);
    assert!(t.read::<HapticsMuted>());
    assert_eq!(resolved(&t), REST);

    // A peak seen twice before the loop gets to it is one note.
    let ticks = t.read::<SequencerTicks>();
    latch.raise(Event::Sound);
    latch.raise(Event::Sound);
    latch.drain(&t);
    latch.drain(&t);
    assert!(t.read::<SequencerTicks>() > ticks);
    assert_eq!(t.read::<SoundDetectedSignal>(), 2);
}
