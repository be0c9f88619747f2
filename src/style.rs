//! Pure mappings from the decline counter to the look of both buttons.
//!
//! Every factor is clamped, so an arbitrarily large counter still yields a bounded,
//! non-degenerate button.

use crate::types::{AcceptColor, Offset};

/// Count from which the decline button is displaced and the accept button shakes.
pub const DISPLACE_FROM: u32 = 3;

pub fn accept_scale(decline_count: u32) -> f32 {
    (1.0 + decline_count as f32 * 0.3).min(3.0)
}

pub fn accept_width_factor(decline_count: u32) -> f32 {
    (1.0 + decline_count as f32 * 0.2).min(2.0)
}

pub fn accept_height_factor(decline_count: u32) -> f32 {
    (1.0 + decline_count as f32 * 0.15).min(1.5)
}

/// Palette index is `min(floor(n / 2), 3)`.
pub fn accept_color(decline_count: u32) -> AcceptColor {
    AcceptColor::from_index((decline_count / 2) as usize)
}

pub fn decline_scale(decline_count: u32) -> f32 {
    (1.0 - decline_count as f32 * 0.1).max(0.5)
}

/// The translation term only exists once the button has started running away.
pub fn decline_translation(decline_count: u32, offset: Offset) -> Option<Offset> {
    (decline_count >= DISPLACE_FROM).then_some(offset)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptStyle {
    pub scale: f32,
    pub width_factor: f32,
    pub height_factor: f32,
    pub color: AcceptColor,
    /// Fill breathes once the user has declined at least once.
    pub pulse: bool,
    pub shake: bool,
}

impl AcceptStyle {
    pub fn for_count(decline_count: u32) -> Self {
        Self {
            scale: accept_scale(decline_count),
            width_factor: accept_width_factor(decline_count),
            height_factor: accept_height_factor(decline_count),
            color: accept_color(decline_count),
            pulse: decline_count > 0,
            shake: decline_count >= DISPLACE_FROM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclineStyle {
    pub scale: f32,
    pub translation: Option<Offset>,
}

impl DeclineStyle {
    pub fn for_state(decline_count: u32, offset: Offset) -> Self {
        Self {
            scale: decline_scale(decline_count),
            translation: decline_translation(decline_count, offset),
        }
    }
}
