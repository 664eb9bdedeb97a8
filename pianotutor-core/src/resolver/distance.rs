// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Desired vs. actual finger positions.

use crate::bus::signal::{ActualFingerPositions, DesiredFingerPositions, FingerDistances};
use crate::bus::Reactor;
use crate::music::Key;
use crate::FINGER_COUNT;

/// Distance value meaning "no target".
pub const REST_DISTANCE: i8 = Key::REST.raw() as i8;

/// `desired - actual` per finger, [`REST_DISTANCE`] where either side is not a real key.
pub fn distances(
    desired: &[Key; FINGER_COUNT],
    actual: &[Key; FINGER_COUNT],
) -> [i8; FINGER_COUNT] {
    core::array::from_fn(|i| desired[i].offset_from(actual[i]).unwrap_or(REST_DISTANCE))
}

/// Keeps `FingerDistances` in step with both position signals.
#[derive(Default)]
pub struct DistanceCalculator;

impl DistanceCalculator {
    pub fn update<R: Reactor>(&self, bus: &R) {
        let desired = bus.read::<DesiredFingerPositions>();
        let actual = bus.read::<ActualFingerPositions>();
        bus.write::<FingerDistances>(distances(&desired, &actual));
    }
}
