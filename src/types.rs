use eframe::egui::{self, Color32};
use strum::{EnumCount, IntoEnumIterator};

/// Pixel displacement applied to the decline button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn to_vec2(self) -> egui::Vec2 {
        egui::vec2(self.x as f32, self.y as f32)
    }
}

/// Fill of the accept button, in the order it escalates.
#[derive(strum::EnumCount, strum::EnumIter, strum::Display, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum AcceptColor {
    #[default]
    Emerald,
    Blue,
    Violet,
    Pink,
}

impl AcceptColor {
    /// Palette entry at `index`, saturating at the last color.
    pub fn from_index(index: usize) -> Self {
        AcceptColor::iter()
            .nth(index.min(AcceptColor::COUNT - 1))
            .unwrap_or(AcceptColor::Pink)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hex(self) -> &'static str {
        use AcceptColor::*;
        match self {
            Emerald => "#10B981",
            Blue => "#3B82F6",
            Violet => "#8B5CF6",
            Pink => "#EC4899",
        }
    }

    pub fn color32(self) -> Color32 {
        use AcceptColor::*;
        match self {
            Emerald => Color32::from_rgb(0x10, 0xB9, 0x81),
            Blue => Color32::from_rgb(0x3B, 0x82, 0xF6),
            Violet => Color32::from_rgb(0x8B, 0x5C, 0xF6),
            Pink => Color32::from_rgb(0xEC, 0x48, 0x99),
        }
    }
}

/// Encouragement line shown under the buttons.
#[derive(strum::EnumIter, strum::Display, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Banner {
    Hesitating,
    Warming,
    Tired,
}

impl Banner {
    pub fn text(self) -> &'static str {
        use Banner::*;
        match self {
            Hesitating => {
                "Je vois que tu hésites... mais regarde comme le bouton \"Oui\" est beau !"
            }
            Warming => {
                "Tu commences à me plaire... mais je sens que tu vas dire oui bientôt! 😉"
            }
            Tired => "Le bouton \"Non\" est fatigué de tant de refus... 😅",
        }
    }

    pub fn color(self) -> Color32 {
        use crate::ui_constants::palette;
        match self {
            Banner::Hesitating => palette::BLUE_600,
            Banner::Warming => palette::PURPLE_600,
            Banner::Tired => palette::GRAY_500,
        }
    }

    pub fn italic(self) -> bool {
        matches!(self, Banner::Tired)
    }

    /// Gap above the banner; the tired line sits further down.
    pub fn top_space(self) -> f32 {
        match self {
            Banner::Tired => crate::ui_constants::spacing::XXLARGE,
            _ => crate::ui_constants::spacing::XLARGE,
        }
    }
}
