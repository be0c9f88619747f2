//! One-shot celebration fired when the card is accepted.
//!
//! The burst sits behind [`CelebrationEffect`] so the app does not care how it is
//! drawn. Firing is best-effort: a rejected burst is logged and the card carries on.

mod confetti;

pub use confetti::ConfettiBurst;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Launch point as fractions of the window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Default for Origin {
    fn default() -> Self {
        Self { x: 0.5, y: 0.6 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    pub particle_count: u32,
    /// Cone width in degrees, centred on straight up.
    pub spread: f32,
    pub origin: Origin,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 150,
            spread: 180.0,
            origin: Origin::default(),
        }
    }
}

impl BurstConfig {
    pub fn validate(&self) -> Result<(), CelebrationError> {
        if self.particle_count == 0 {
            return Err(CelebrationError::NoParticles);
        }
        if !self.spread.is_finite() || !(0.0..=360.0).contains(&self.spread) {
            return Err(CelebrationError::InvalidSpread(self.spread));
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&self.origin.x) || !unit.contains(&self.origin.y) {
            return Err(CelebrationError::OriginOutOfBounds {
                x: self.origin.x,
                y: self.origin.y,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CelebrationError {
    #[error("burst needs at least one particle")]
    NoParticles,
    #[error("spread must be between 0 and 360 degrees, got {0}")]
    InvalidSpread(f32),
    #[error("origin ({x}, {y}) lies outside the window")]
    OriginOutOfBounds { x: f32, y: f32 },
}

pub trait CelebrationEffect {
    fn fire(&mut self, config: &BurstConfig) -> Result<(), CelebrationError>;
}

/// Fires the effect and swallows failures. Returns whether the burst started.
pub fn celebrate(effect: &mut dyn CelebrationEffect, config: &BurstConfig) -> bool {
    match effect.fire(config) {
        Ok(()) => {
            log::debug!(
                "Celebration burst: {} particles, spread {}°",
                config.particle_count,
                config.spread
            );
            true
        }
        Err(e) => {
            log::warn!("Celebration effect skipped: {e}");
            false
        }
    }
}

/// Counts bursts instead of drawing them.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEffect {
    pub fired: Vec<BurstConfig>,
}

#[cfg(test)]
impl CelebrationEffect for RecordingEffect {
    fn fire(&mut self, config: &BurstConfig) -> Result<(), CelebrationError> {
        config.validate()?;
        self.fired.push(*config);
        Ok(())
    }
}
