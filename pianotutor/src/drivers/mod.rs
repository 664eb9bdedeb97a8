// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Drivers
//!
//! Drivers that sit above the raw `hw/` layer and below `main`.
//!
//! - [`shift_chain`] – the two bit-banged motor shift-register chains
//! - [`buttons`] – front panel buttons and the audio peak detector

pub mod buttons;
pub mod shift_chain;

pub use buttons::Buttons;
pub use shift_chain::MotorChains;
