// Looping animations: breathing opacity, bouncing glyphs, the shaking accept button,
// and the hearts floating around the prompt card.

use eframe::egui::{self, FontId};
use std::f64::consts::{PI, TAU};

use crate::ui_constants::palette;

/// Opacity cycling 1 -> 0.5 -> 1 every two seconds.
pub fn pulse_opacity(time: f64) -> f32 {
    (0.75 + 0.25 * (time * TAU / 2.0).cos()) as f32
}

/// Upward lift as a fraction of glyph height, in `[0, 0.25]`, one hop per second.
pub fn bounce_lift(time: f64) -> f32 {
    (0.25 * (time * PI).cos().abs()) as f32
}

/// Horizontal jitter in pixels for the shaking accept button.
pub fn shake_dx(time: f64) -> f32 {
    const AMPLITUDE: f64 = 3.0;
    const HZ: f64 = 8.0;
    (AMPLITUDE * (time * TAU * HZ).sin()) as f32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Pulse,
    Bounce,
}

pub struct FloatingHeart {
    pub glyph: &'static str,
    /// Position as fractions of the window, plus a pixel inset.
    pub anchor: egui::Vec2,
    pub inset: egui::Vec2,
    pub motion: Motion,
}

pub const FLOATING_HEARTS: [FloatingHeart; 4] = [
    FloatingHeart {
        glyph: "💕",
        anchor: egui::vec2(0.0, 0.0),
        inset: egui::vec2(40.0, 40.0),
        motion: Motion::Pulse,
    },
    FloatingHeart {
        glyph: "💗",
        anchor: egui::vec2(1.0, 1.0),
        inset: egui::vec2(-40.0, -40.0),
        motion: Motion::Pulse,
    },
    FloatingHeart {
        glyph: "💘",
        anchor: egui::vec2(1.0, 1.0 / 3.0),
        inset: egui::vec2(-80.0, 0.0),
        motion: Motion::Bounce,
    },
    FloatingHeart {
        glyph: "💝",
        anchor: egui::vec2(0.0, 2.0 / 3.0),
        inset: egui::vec2(80.0, 0.0),
        motion: Motion::Bounce,
    },
];

pub fn draw_floating_hearts(painter: &egui::Painter, rect: egui::Rect, time: f64) {
    let size = crate::ui_constants::font::SMALL_GLYPH;
    for heart in &FLOATING_HEARTS {
        let mut pos = rect.min
            + egui::vec2(rect.width() * heart.anchor.x, rect.height() * heart.anchor.y)
            + heart.inset;
        let mut color = palette::PINK_600;
        match heart.motion {
            Motion::Pulse => color = color.gamma_multiply(pulse_opacity(time)),
            Motion::Bounce => pos.y -= bounce_lift(time) * size,
        }
        painter.text(
            pos,
            egui::Align2::CENTER_CENTER,
            heart.glyph,
            FontId::proportional(size),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> impl Iterator<Item = f64> {
        (0..2_000).map(|i| i as f64 * 0.0137)
    }

    #[test]
    fn pulse_stays_between_half_and_full() {
        assert!((pulse_opacity(0.0) - 1.0).abs() < 1e-6);
        assert!((pulse_opacity(1.0) - 0.5).abs() < 1e-6);
        assert!(samples().all(|t| (0.5 - 1e-6..=1.0 + 1e-6).contains(&pulse_opacity(t))));
    }

    #[test]
    fn bounce_peaks_at_a_quarter() {
        assert!((bounce_lift(0.0) - 0.25).abs() < 1e-6);
        assert!(bounce_lift(0.5) < 1e-6);
        assert!(samples().all(|t| (0.0..=0.25 + 1e-6).contains(&bounce_lift(t))));
    }

    #[test]
    fn shake_is_small() {
        assert!(samples().all(|t| shake_dx(t).abs() <= 3.0 + 1e-4));
    }

    #[test]
    fn hearts_cover_both_motions() {
        let pulses = FLOATING_HEARTS.iter().filter(|h| h.motion == Motion::Pulse).count();
        assert_eq!(pulses, 2);
        assert_eq!(FLOATING_HEARTS.len() - pulses, 2);
    }
}
