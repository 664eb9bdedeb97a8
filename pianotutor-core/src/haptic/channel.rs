// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-actuator PWM state and the distance → pulse mapping.

use crate::config::{HapticConfig, Pulse};

/// Distance bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Zone {
    OnTarget,
    /// Magnitude `1 .. far_threshold`.
    Near(u8),
    Far,
    /// Rest or invalid marker: no target at all.
    Marker,
}

pub fn zone(distance: i8, config: &HapticConfig) -> Zone {
    let magnitude = distance.unsigned_abs();
    if magnitude == 0 {
        Zone::OnTarget
    } else if magnitude >= config.marker_floor {
        Zone::Marker
    } else if magnitude >= config.far_threshold {
        Zone::Far
    } else {
        Zone::Near(magnitude)
    }
}

fn lerp(x: u8, x0: u8, x1: u8, y0: u8, y1: u8) -> u8 {
    if x1 <= x0 {
        return y0;
    }
    let x = x.clamp(x0, x1) as i32;
    let (x0, x1, y0, y1) = (x0 as i32, x1 as i32, y0 as i32, y1 as i32);
    (y0 + (y1 - y0) * (x - x0) / (x1 - x0)) as u8
}

/// Pulse for a near-zone magnitude: strongest one key away, fading towards the far threshold.
pub fn near_pulse(magnitude: u8, config: &HapticConfig) -> Pulse {
    let last = config.far_threshold.saturating_sub(1);
    Pulse::new(
        lerp(magnitude, 1, last, config.nearest.duty, config.farthest.duty),
        lerp(magnitude, 1, last, config.nearest.period, config.farthest.period),
    )
}

/// One pair of opposing motors (a finger, or a wrist).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HapticChannel {
    /// Ticks on per cycle.
    pub duty_cycle: u8,
    /// Last subcycle index before wrapping.
    pub period: u8,
    pub left_active: bool,
    pub right_active: bool,
    subcycle: u8,
}

impl HapticChannel {
    pub const fn new(period: u8, armed: bool) -> Self {
        Self {
            duty_cycle: 0,
            period,
            left_active: armed,
            right_active: armed,
            subcycle: 0,
        }
    }

    /// Play `pulse` on the selected sides.
    pub fn drive(&mut self, pulse: Pulse, left: bool, right: bool) {
        self.duty_cycle = pulse.duty;
        self.period = pulse.period;
        self.left_active = left;
        self.right_active = right;
    }

    /// Stop pulsing, keeping the sides armed as they were.
    #[inline]
    pub fn mute(&mut self) {
        self.duty_cycle = 0;
    }

    #[inline]
    pub fn subcycle(&self) -> u8 {
        self.subcycle
    }

    /// Output of both sides for this tick, then advance the PWM counter.
    pub fn step(&mut self) -> (bool, bool) {
        let on = self.subcycle < self.duty_cycle;
        self.subcycle = if self.subcycle >= self.period {
            0
        } else {
            self.subcycle + 1
        };
        (on && self.left_active, on && self.right_active)
    }
}
