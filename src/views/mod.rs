pub mod background;
pub mod celebration;
pub mod decor;
pub mod prompt;

use eframe::egui::{self, Color32, Rounding};

use crate::ui_constants::{card, CARD_MAX_WIDTH, CARD_OUTER_MARGIN};

/// White rounded card centred in the window. Returns whatever `content` returns.
pub fn show_card<R>(
    ctx: &egui::Context,
    id: &'static str,
    content: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let screen = ctx.screen_rect();
    let width = card_width(screen.width());
    egui::Area::new(egui::Id::new(id))
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .movable(false)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::WHITE)
                .rounding(Rounding::same(card::ROUNDING))
                .shadow(ctx.style().visuals.window_shadow)
                .inner_margin(card::INNER_MARGIN)
                .show(ui, |ui| {
                    ui.set_width(width);
                    ui.vertical_centered(content).inner
                })
                .inner
        })
        .inner
}

/// Inner width of the card for a window of `screen_width`.
pub fn card_width(screen_width: f32) -> f32 {
    let available = screen_width - 2.0 * (CARD_OUTER_MARGIN + card::INNER_MARGIN);
    available.clamp(0.0, CARD_MAX_WIDTH - 2.0 * card::INNER_MARGIN)
}
