// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Rising-edge external interrupt on a single GPIO input.
//!
//! This module configures the SYSCFG and EXTI registers directly. The handler for the line's
//! interrupt vector lives in `main` and calls [`RisingEdge::take`].

use stm32f7xx_hal::{
    gpio::{self, Input, PullDown},
    pac,
};

pub struct RisingEdge<const P: char, const N: u8> {
    _pin: gpio::Pin<P, N, Input<PullDown>>,
    exti: pac::EXTI,
}

impl<const P: char, const N: u8> RisingEdge<P, N> {
    const MASK: u32 = 1 << N;

    /// Route the pin to EXTI line `N` and unmask its rising edge. The NVIC line is left masked.
    pub fn new(pin: gpio::Pin<P, N, Input<PullDown>>, exti: pac::EXTI, syscfg: &pac::SYSCFG) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.syscfgen().set_bit());

        // Port select: 0 = A, 1 = B, ...
        let port = (P as u32) - ('A' as u32);
        let shift = (N as u32 % 4) * 4;
        let route = |bits: u32| (bits & !(0xF << shift)) | (port << shift);
        match N / 4 {
            0 => syscfg.exticr1.modify(|r, w| unsafe { w.bits(route(r.bits())) }),
            1 => syscfg.exticr2.modify(|r, w| unsafe { w.bits(route(r.bits())) }),
            2 => syscfg.exticr3.modify(|r, w| unsafe { w.bits(route(r.bits())) }),
            _ => syscfg.exticr4.modify(|r, w| unsafe { w.bits(route(r.bits())) }),
        }

        // Rising edge only
        exti.rtsr.modify(|r, w| unsafe { w.bits(r.bits() | Self::MASK) });
        exti.ftsr.modify(|r, w| unsafe { w.bits(r.bits() & !Self::MASK) });

        // Drop anything pending from before, then unmask
        exti.pr.write(|w| unsafe { w.bits(Self::MASK) });
        exti.imr.modify(|r, w| unsafe { w.bits(r.bits() | Self::MASK) });

        Self { _pin: pin, exti }
    }

    /// Clear the pending flag. Returns whether an edge was pending.
    #[inline]
    pub fn take(&mut self) -> bool {
        let pending = self.exti.pr.read().bits() & Self::MASK != 0;
        if pending {
            self.exti.pr.write(|w| unsafe { w.bits(Self::MASK) });
        }
        pending
    }
}
