// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! One-shot haptic mute after a correct note.
//!
//! Once the learner plays the note, guidance towards the next one is held back for as long as the
//! note should sound.

/// Millisecond window on a wrapping `u32` clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MuteWindow {
    armed_at: u32,
    duration: u16,
    active: bool,
}

impl MuteWindow {
    /// Real-time length of `note_ticks` at `tempo` BPM, capped at `u16::MAX` ms.
    pub fn duration_ms(note_ticks: u8, tempo: u8, ticks_per_beat: u8) -> u16 {
        let per_minute = tempo as u32 * ticks_per_beat as u32;
        if per_minute == 0 {
            return 0;
        }
        let ms = note_ticks as u32 * 60_000 / per_minute;
        ms.min(u16::MAX as u32) as u16
    }

    pub fn armed(now_ms: u32, duration: u16) -> Self {
        Self {
            armed_at: now_ms,
            duration,
            active: duration > 0,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn duration(&self) -> u16 {
        self.duration
    }

    /// `true` once `now_ms` is at least `duration` past arming.
    pub fn expired(&self, now_ms: u32) -> bool {
        self.active && now_ms.wrapping_sub(self.armed_at) >= self.duration as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_note_at_sixty_lasts_a_second() {
        assert_eq!(MuteWindow::duration_ms(4, 60, 4), 1000);
        assert_eq!(MuteWindow::duration_ms(2, 120, 4), 250);
        assert_eq!(MuteWindow::duration_ms(0, 120, 4), 0);
        assert_eq!(MuteWindow::duration_ms(4, 0, 4), 0);
        assert_eq!(MuteWindow::duration_ms(255, 1, 4), u16::MAX);
    }

    #[test]
    fn expiry_survives_clock_wrap() {
        let window = MuteWindow::armed(u32::MAX - 10, 100);
        assert!(window.is_active());
        assert!(!window.expired(u32::MAX));
        assert!(!window.expired(88));
        assert!(window.expired(89));
    }

    #[test]
    fn zero_length_window_is_never_active() {
        let window = MuteWindow::armed(5, 0);
        assert!(!window.is_active());
        assert!(!window.expired(1000));
    }
}
