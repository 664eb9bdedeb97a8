// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tunables.
//!
//! Defaults match the reference tutor glove. Every struct can be adjusted with the `with_*`
//! builders before being handed to [`Tutor::new`](crate::Tutor::new).

/// One PWM setting: `duty` ticks on out of every `period + 1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub duty: u8,
    pub period: u8,
}

impl Pulse {
    pub const fn new(duty: u8, period: u8) -> Self {
        Self { duty, period }
    }
}

/// Haptic zone thresholds and pulse shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HapticConfig {
    /// Distances at or beyond this many keys are "far" and silent.
    pub far_threshold: u8,
    /// Magnitudes at or above this are markers (rest, invalid), not distances, and never count
    /// towards the wrist fallback.
    pub marker_floor: u8,
    /// Pulse one key away from the target.
    pub nearest: Pulse,
    /// Pulse just inside the far threshold.
    pub farthest: Pulse,
    /// Confirmation buzz on target.
    pub on_target: Pulse,
    /// Wrist pulse when a whole hand is far away.
    pub wrist: Pulse,
    /// Period of a silent channel.
    pub idle_period: u8,
    /// Engine tick rate.
    pub tick_hz: u32,
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self {
            far_threshold: 50,
            marker_floor: 88,
            nearest: Pulse::new(20, 25),
            farthest: Pulse::new(10, 30),
            on_target: Pulse::new(4, 10),
            wrist: Pulse::new(40, 60),
            idle_period: 20,
            tick_hz: 200,
        }
    }
}

impl HapticConfig {
    /// Set the near-zone end points.
    pub fn with_near_range(mut self, nearest: Pulse, farthest: Pulse) -> Self {
        self.nearest = nearest;
        self.farthest = farthest;
        self
    }

    pub fn with_far_threshold(mut self, threshold: u8) -> Self {
        self.far_threshold = threshold.max(2);
        self
    }

    pub fn with_wrist(mut self, wrist: Pulse) -> Self {
        self.wrist = wrist;
        self
    }
}

/// Song pacing and tempo limits.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Tempo used when the catalogue is empty.
    pub default_tempo: u8,
    pub min_tempo: u8,
    pub max_tempo: u8,
    /// Sequencer ticks in one beat (a quarter note).
    pub ticks_per_beat: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_tempo: 60,
            min_tempo: 1,
            max_tempo: u8::MAX,
            ticks_per_beat: 4,
        }
    }
}

impl PlaybackConfig {
    /// Set tempo limits. `min` is raised to at least 1.
    pub fn with_tempo_limits(mut self, min: u8, max: u8) -> Self {
        self.min_tempo = min.max(1);
        self.max_tempo = max.max(self.min_tempo);
        self
    }

    /// Clamp a tempo into the configured range.
    #[inline]
    pub fn clamp_tempo(&self, tempo: u8) -> u8 {
        tempo.clamp(self.min_tempo, self.max_tempo)
    }
}

/// Sensor link behaviour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkConfig {
    /// How many consecutive frames a finger's last known key stands in for a lost one.
    pub max_position_reuse: u8,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            max_position_reuse: 3,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TutorConfig {
    pub haptic: HapticConfig,
    pub playback: PlaybackConfig,
    pub link: LinkConfig,
}

impl TutorConfig {
    pub fn with_haptic(mut self, haptic: HapticConfig) -> Self {
        self.haptic = haptic;
        self
    }

    pub fn with_playback(mut self, playback: PlaybackConfig) -> Self {
        self.playback = playback;
        self
    }

    pub fn with_link(mut self, link: LinkConfig) -> Self {
        self.link = link;
        self
    }
}
