//! Playback position over a generated step sequence
//!
//! [`Player`] is a bounded counter: every index change is clamped to
//! `[0, total_steps - 1]`. It never touches the steps themselves, so the UI
//! can drive it from key presses and from the auto-play timer alike.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Auto-play speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum PlaybackRate {
    Quarter,
    Half,
    ThreeQuarters,
    #[default]
    Normal,
    OneAndQuarter,
    OneAndHalf,
    Double,
    Triple,
}

impl PlaybackRate {
    pub const ALL: [PlaybackRate; 8] = [
        PlaybackRate::Quarter,
        PlaybackRate::Half,
        PlaybackRate::ThreeQuarters,
        PlaybackRate::Normal,
        PlaybackRate::OneAndQuarter,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
        PlaybackRate::Triple,
    ];

    pub fn as_f64(self) -> f64 {
        match self {
            PlaybackRate::Quarter => 0.25,
            PlaybackRate::Half => 0.5,
            PlaybackRate::ThreeQuarters => 0.75,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndQuarter => 1.25,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
            PlaybackRate::Triple => 3.0,
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(3)
    }

    /// Next faster rate, saturating at the top
    pub fn faster(self) -> Self {
        Self::ALL[(self.position() + 1).min(Self::ALL.len() - 1)]
    }

    /// Next slower rate, saturating at the bottom
    pub fn slower(self) -> Self {
        Self::ALL[self.position().saturating_sub(1)]
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.as_f64())
    }
}

impl From<PlaybackRate> for f64 {
    fn from(rate: PlaybackRate) -> f64 {
        rate.as_f64()
    }
}

impl TryFrom<f64> for PlaybackRate {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        PlaybackRate::ALL
            .into_iter()
            .find(|r| r.as_f64() == value)
            .ok_or_else(|| format!("unsupported playback rate: {}", value))
    }
}

/// Position, play state and speed of the step player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    current_step_index: usize,
    total_steps: usize,
    is_playing: bool,
    rate: PlaybackRate,
}

impl Player {
    /// Paused at step 0 with the default rate
    pub fn new(total_steps: usize) -> Self {
        Player {
            current_step_index: 0,
            total_steps,
            is_playing: false,
            rate: PlaybackRate::default(),
        }
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    fn last_index(&self) -> usize {
        self.total_steps.saturating_sub(1)
    }

    pub fn is_at_start(&self) -> bool {
        self.current_step_index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.current_step_index >= self.last_index()
    }

    /// Advance one step. Returns `false` when already at the last step.
    pub fn next(&mut self) -> bool {
        let before = self.current_step_index;
        self.current_step_index = (before + 1).min(self.last_index());
        self.current_step_index != before
    }

    /// Go back one step. Returns `false` when already at the first step.
    pub fn prev(&mut self) -> bool {
        let before = self.current_step_index;
        self.current_step_index = before.saturating_sub(1);
        self.current_step_index != before
    }

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Back to step 0, paused
    pub fn reset(&mut self) {
        self.current_step_index = 0;
        self.is_playing = false;
    }

    /// Jump to `index`, clamped to the valid range
    pub fn seek(&mut self, index: usize) {
        self.current_step_index = index.min(self.last_index());
    }

    /// Switch to a freshly generated sequence of `total_steps` steps
    pub fn load(&mut self, total_steps: usize) {
        self.total_steps = total_steps;
        self.reset();
    }

    /// One auto-play tick: advance, or pause once the last step is reached
    pub fn tick(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        if self.next() {
            true
        } else {
            self.is_playing = false;
            false
        }
    }

    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
    }

    pub fn faster(&mut self) {
        self.rate = self.rate.faster();
    }

    pub fn slower(&mut self) {
        self.rate = self.rate.slower();
    }

    /// Auto-play delay between steps; higher rates shorten it
    pub fn interval(&self, base: Duration) -> Duration {
        base.div_f64(self.rate.as_f64())
    }
}
