// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Piano Tutor Core
//!
//! Portable logic for the haptic piano tutor: everything that decides *what* the learner's fingers
//! should feel, independent of the STM32 board that drives the motors.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`bus`] | Typed signal store with change notification (the only inter-component channel) |
//! | [`playback`] | Playback state machine (song select, run/pause, tempo, hand mode, errors) |
//! | [`music`] | Keys, notes, songs and the tick-based sequencer |
//! | [`resolver`] | Desired vs. actual finger distance, hand-mode masking, mute window |
//! | [`haptic`] | 200 Hz software PWM engine producing shift-register frames |
//! | [`link`] | Sensor link framing and finger position hold filter |
//! | [`input`] | Interrupt-safe latch for button and sound events |
//! | [`tutor`] | The wired-up reactive network |
//! | [`config`] | Tunables |
//!
//! ## Testing
//!
//! The crate builds for the host under `cfg(test)`:
//!
//! ```bash
//! cargo test
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod haptic;
pub mod input;
pub mod link;
pub mod music;
pub mod playback;
pub mod resolver;
pub mod tutor;

pub use bus::{Reactor, SignalId};
pub use config::TutorConfig;
pub use tutor::Tutor;

/// Number of tracked fingers (two hands of five).
pub const FINGER_COUNT: usize = 10;
