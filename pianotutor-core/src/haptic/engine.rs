// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The 200 Hz haptic engine.

use super::channel::{near_pulse, zone, HapticChannel, Zone};
use crate::config::HapticConfig;
use crate::music::Hand;
use crate::FINGER_COUNT;

/// Zero bits shifted ahead of the data so it lands at the far end of the 16-bit chain.
pub const PADDING_BITS: u32 = 4;

/// Bits shifted into each hand's register chain per tick.
pub const CHAIN_BITS: u32 = 16;

/// One tick of motor outputs, one word per hand.
///
/// Bits are shifted most significant first: the padding, then for each finger of the hand (pinky
/// to thumb on the left, thumb to pinky on the right) its left then right motor, then the wrist's
/// left and right motor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ShiftFrame {
    pub left: u16,
    pub right: u16,
}

impl ShiftFrame {
    /// Bits of `word` in shift order.
    pub fn bits(word: u16) -> impl Iterator<Item = bool> {
        (0..CHAIN_BITS).rev().map(move |i| word & (1 << i) != 0)
    }

    /// Word for `hand`.
    #[inline]
    pub fn word(&self, hand: Hand) -> u16 {
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }
}

/// Finger and wrist PWM channels, updated once per timer tick.
pub struct HapticEngine {
    config: HapticConfig,
    fingers: [HapticChannel; FINGER_COUNT],
    wrists: [HapticChannel; 2],
}

impl HapticEngine {
    pub fn new(config: HapticConfig) -> Self {
        Self {
            fingers: [HapticChannel::new(config.idle_period, false); FINGER_COUNT],
            wrists: [HapticChannel::new(config.idle_period, true); 2],
            config,
        }
    }

    #[inline]
    pub fn finger(&self, index: usize) -> &HapticChannel {
        &self.fingers[index]
    }

    #[inline]
    pub fn wrist(&self, hand: Hand) -> &HapticChannel {
        &self.wrists[hand as usize]
    }

    /// Set every channel's pulse from the resolved distances.
    pub fn update(&mut self, distances: &[i8; FINGER_COUNT]) {
        for hand in [Hand::Left, Hand::Right] {
            let mut far = 0;

            for i in hand.fingers() {
                let distance = distances[i];
                let finger = &mut self.fingers[i];
                match zone(distance, &self.config) {
                    Zone::OnTarget => finger.drive(self.config.on_target, true, true),
                    Zone::Near(magnitude) => finger.drive(
                        near_pulse(magnitude, &self.config),
                        distance > 0,
                        distance < 0,
                    ),
                    Zone::Far => {
                        far += 1;
                        finger.mute();
                    }
                    Zone::Marker => finger.mute(),
                }
            }

            let wrist = &mut self.wrists[hand as usize];
            if far == hand.fingers().len() {
                let thumb = distances[hand.thumb()];
                wrist.drive(self.config.wrist, thumb > 0, thumb < 0);
            } else {
                wrist.mute();
            }
        }
    }

    /// Step every channel's PWM counter and collect this tick's outputs.
    pub fn shift(&mut self) -> ShiftFrame {
        ShiftFrame {
            left: self.hand_word(Hand::Left),
            right: self.hand_word(Hand::Right),
        }
    }

    /// [`update`](Self::update) then [`shift`](Self::shift).
    pub fn tick(&mut self, distances: &[i8; FINGER_COUNT]) -> ShiftFrame {
        self.update(distances);
        self.shift()
    }

    fn hand_word(&mut self, hand: Hand) -> u16 {
        let mut word = 0u16;
        let mut position = PADDING_BITS;
        let mut put = |(left, right): (bool, bool)| {
            for on in [left, right] {
                if on {
                    word |= 1 << (CHAIN_BITS - 1 - position);
                }
                position += 1;
            }
        };

        for i in hand.fingers() {
            put(self.fingers[i].step());
        }
        put(self.wrists[hand as usize].step());
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::REST_DISTANCE;

    fn engine() -> HapticEngine {
        HapticEngine::new(HapticConfig::default())
    }

    /// Position (in shift order) of a finger's motor within its hand's word.
    fn slot(finger: usize, right_side: bool) -> u32 {
        PADDING_BITS + 2 * (finger % 5) as u32 + right_side as u32
    }

    fn bit(word: u16, position: u32) -> bool {
        ShiftFrame::bits(word).nth(position as usize).unwrap()
    }

    #[test]
    fn rest_is_silent() {
        let mut e = engine();
        for _ in 0..100 {
            assert_eq!(e.tick(&[REST_DISTANCE; FINGER_COUNT]), ShiftFrame::default());
        }
    }

    #[test]
    fn sign_picks_the_motor() {
        let mut e = engine();
        let mut d = [REST_DISTANCE; FINGER_COUNT];
        d[1] = 3;
        d[7] = -3;
        let frame = e.tick(&d);

        assert!(bit(frame.left, slot(1, false)));
        assert!(!bit(frame.left, slot(1, true)));
        assert!(!bit(frame.right, slot(7, false)));
        assert!(bit(frame.right, slot(7, true)));
        assert_eq!(frame.left.count_ones() + frame.right.count_ones(), 2);
    }

    #[test]
    fn on_target_buzzes_both_sides() {
        let mut e = engine();
        let mut d = [REST_DISTANCE; FINGER_COUNT];
        d[5] = 0;
        let frame = e.tick(&d);

        assert!(bit(frame.right, slot(5, false)));
        assert!(bit(frame.right, slot(5, true)));
        assert_eq!(e.finger(5).duty_cycle, 4);
        assert_eq!(e.finger(5).period, 10);
    }

    #[test]
    fn far_hand_falls_back_to_the_wrist() {
        let mut e = engine();
        let mut d = [REST_DISTANCE; FINGER_COUNT];
        d[..5].copy_from_slice(&[60, 55, 70, 80, -50]);
        let frame = e.tick(&d);

        for i in 0..5 {
            assert_eq!(e.finger(i).duty_cycle, 0);
        }
        let wrist = e.wrist(Hand::Left);
        assert_eq!(wrist.duty_cycle, 40);
        assert_eq!(wrist.period, 60);
        // Thumb is below its target: right-side motor.
        assert!(!wrist.left_active && wrist.right_active);
        assert!(!bit(frame.left, 14) && bit(frame.left, 15));
        assert_eq!(e.wrist(Hand::Right).duty_cycle, 0);
    }

    #[test]
    fn one_near_finger_keeps_the_wrist_quiet() {
        let mut e = engine();
        let mut d = [REST_DISTANCE; FINGER_COUNT];
        d[5..].copy_from_slice(&[60, 60, 60, 60, 10]);
        e.tick(&d);
        assert_eq!(e.wrist(Hand::Right).duty_cycle, 0);
        assert!(e.finger(9).duty_cycle > 0);
    }

    #[test]
    fn resting_fingers_do_not_count_as_far() {
        let mut e = engine();
        let mut d = [REST_DISTANCE; FINGER_COUNT];
        d[..4].copy_from_slice(&[60, 60, 60, 60]);
        e.tick(&d);
        assert_eq!(e.wrist(Hand::Left).duty_cycle, 0);
    }

    #[test]
    fn padding_never_carries_data() {
        let mut e = engine();
        for _ in 0..64 {
            let frame = e.tick(&[0; FINGER_COUNT]);
            for word in [frame.left, frame.right] {
                assert!(ShiftFrame::bits(word).take(PADDING_BITS as usize).all(|b| !b));
            }
        }
    }

    #[test]
    fn near_pulse_repeats_with_its_period() {
        let mut e = engine();
        let mut d = [REST_DISTANCE; FINGER_COUNT];
        d[0] = 1;
        let on: Vec<bool> = (0..52).map(|_| bit(e.tick(&d).left, slot(0, false))).collect();

        // duty 20 of a 26-tick cycle
        assert_eq!(on.iter().filter(|b| **b).count(), 40);
        assert_eq!(on[..26], on[26..]);
    }
}
