// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bit-banged driver for the two motor shift-register chains.
//!
//! Each hand has a chain of 74HC595-style registers (serial data in, shift clock, latch enable,
//! active-low output enable). Both chains share GPIOA, so every edge is one BSRR write and the
//! two hands shift in lockstep.

use core::convert::Infallible;

use pianotutor_core::haptic::{HapticOutput, ShiftFrame};
use stm32f7xx_hal::pac;

use crate::hw::pins::{LeftChainPins, RightChainPins};

/// Data setup before the rising clock edge.
pub const SETUP_NS: u32 = 20;
/// Clock high time.
pub const HOLD_NS: u32 = 20;
/// Latch pulse width.
pub const LATCH_NS: u32 = 20;

const RIGHT_SDI: u32 = 1 << 1;
const RIGHT_CLK: u32 = 1 << 2;
const RIGHT_LE: u32 = 1 << 3;
const RIGHT_OE: u32 = 1 << 4;
const LEFT_SDI: u32 = 1 << 5;
const LEFT_CLK: u32 = 1 << 6;
const LEFT_LE: u32 = 1 << 7;
const LEFT_OE: u32 = 1 << 8;

const SDI: u32 = LEFT_SDI | RIGHT_SDI;
const CLK: u32 = LEFT_CLK | RIGHT_CLK;
const LE: u32 = LEFT_LE | RIGHT_LE;
const OE: u32 = LEFT_OE | RIGHT_OE;

/// Round `ns` up to whole CPU cycles at `sysclk_hz`, at least one.
pub const fn ns_to_cycles(ns: u32, sysclk_hz: u32) -> u32 {
    let cycles = (ns as u64 * sysclk_hz as u64).div_ceil(1_000_000_000);
    if cycles == 0 {
        1
    } else {
        cycles as u32
    }
}

pub struct MotorChains {
    _left: LeftChainPins,
    _right: RightChainPins,
    setup: u32,
    hold: u32,
    latch: u32,
    enabled: bool,
}

impl MotorChains {
    /// Take both chains' pins. Outputs stay disabled until the first frame is latched, so the
    /// motors never see power-on register garbage.
    pub fn new(left: LeftChainPins, right: RightChainPins, sysclk_hz: u32) -> Self {
        let chains = Self {
            _left: left,
            _right: right,
            setup: ns_to_cycles(SETUP_NS, sysclk_hz),
            hold: ns_to_cycles(HOLD_NS, sysclk_hz),
            latch: ns_to_cycles(LATCH_NS, sysclk_hz),
            enabled: false,
        };
        chains.set_reset(OE, SDI | CLK | LE);
        chains
    }

    /// Drive `high` lines high and `low` lines low in one write.
    #[inline(always)]
    fn set_reset(&self, high: u32, low: u32) {
        // SAFETY: `self` owns PA1..PA8 as push-pull outputs, and BSRR writes only touch the bits
        // that are set, so other users of GPIOA are unaffected.
        let gpioa = unsafe { &*pac::GPIOA::ptr() };
        gpioa.bsrr.write(|w| unsafe { w.bits(high | (low << 16)) });
    }

    fn shift(&self, frame: &ShiftFrame) {
        let left = ShiftFrame::bits(frame.left);
        let right = ShiftFrame::bits(frame.right);
        for (l, r) in left.zip(right) {
            let high = if l { LEFT_SDI } else { 0 } | if r { RIGHT_SDI } else { 0 };
            self.set_reset(high, SDI & !high);
            cortex_m::asm::delay(self.setup);
            self.set_reset(CLK, 0);
            cortex_m::asm::delay(self.hold);
            self.set_reset(0, CLK);
        }
    }

    fn latch(&self) {
        self.set_reset(LE, 0);
        cortex_m::asm::delay(self.latch);
        self.set_reset(0, LE);
    }
}

impl HapticOutput for MotorChains {
    type Error = Infallible;

    fn write_frame(&mut self, frame: &ShiftFrame) -> Result<(), Infallible> {
        self.shift(frame);
        self.latch();
        if !self.enabled {
            self.set_reset(0, OE);
            self.enabled = true;
        }
        Ok(())
    }
}
