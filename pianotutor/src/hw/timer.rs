// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Periodic update interrupt from a general-purpose timer.
//!
//! Drives the haptic tick. This module configures TIM3 registers directly; the interrupt handler
//! itself lives in `main`.

use stm32f7xx_hal::pac;

/// Prescaler and auto-reload that divide `timclk_hz` down to `hz` updates per second, using the
/// smallest prescaler that keeps the reload value within 16 bits.
pub const fn divider(timclk_hz: u32, hz: u32) -> (u16, u16) {
    let hz = if hz == 0 { 1 } else { hz };
    let counts = timclk_hz / hz;
    let counts = if counts < 2 { 2 } else { counts };
    let psc = (counts - 1) / 0x1_0000;
    let arr = counts / (psc + 1) - 1;
    (psc as u16, arr as u16)
}

pub struct TickTimer<TIM> {
    tim: TIM,
}

impl TickTimer<pac::TIM3> {
    /// Configure TIM3 to raise its update interrupt `hz` times per second. The NVIC line is left
    /// masked; unmask `TIM3` once the handler's state is in place.
    pub fn tim3(tim3: pac::TIM3, timclk_hz: u32, hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim3en().set_bit());

        let tim = tim3;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        let (psc, arr) = divider(timclk_hz, hz);
        tim.psc.write(|w| unsafe { w.bits(psc as u32) });
        tim.arr.write(|w| unsafe { w.bits(arr as u32) });

        // Load the prescaler now instead of at the first overflow, then drop the flag that raised
        tim.egr.write(|w| w.ug().set_bit());
        tim.sr.modify(|_, w| w.uif().clear_bit());

        // Interrupt on update
        tim.dier.modify(|_, w| w.uie().set_bit());

        // Enable the counter
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim }
    }

    /// Acknowledge the update interrupt. Call first thing in the handler.
    #[inline]
    pub fn clear_update(&mut self) {
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }
}
