// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Piano Tutor Firmware
//!
//! Board support for the haptic piano tutor on an STM32F767. Everything that decides what a finger
//! should feel lives in `pianotutor-core`; this crate moves bits between that logic and the pins.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around USART, GPIO, timers, etc. |
//! | [`drivers`] | Motor shift chains, buttons |
//! | [`logger`] | `log` output on the debug USART |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc -p pianotutor --no-deps --open --target thumbv7em-none-eabihf
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run -p pianotutor --release --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![no_std]

pub mod drivers;
pub mod hw;
pub mod logger;
