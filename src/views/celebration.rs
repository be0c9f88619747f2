// Celebration card shown once the card has been accepted. Static apart from the
// bouncing party glyph; the confetti is painted separately on top.

use eframe::egui::{self, RichText};

use super::decor::bounce_lift;
use crate::render::{
    CELEBRATION_BODY, CELEBRATION_GLYPH, CELEBRATION_HEARTS, CELEBRATION_PARTY, CELEBRATION_TITLE,
};
use crate::ui_constants::{font, palette, spacing};

pub fn show(ctx: &egui::Context, time: f64) {
    super::show_card(ctx, "celebration_card", |ui| {
        ui.label(
            RichText::new(CELEBRATION_GLYPH)
                .size(font::CELEBRATION_GLYPH)
                .color(palette::PINK_600),
        );
        ui.add_space(spacing::LARGE);
        ui.label(
            RichText::new(CELEBRATION_TITLE)
                .size(font::CELEBRATION_TITLE)
                .strong()
                .color(palette::PINK_600),
        );
        ui.add_space(spacing::LARGE);
        ui.add(
            egui::Label::new(
                RichText::new(CELEBRATION_BODY)
                    .size(font::CELEBRATION_BODY)
                    .color(palette::GRAY_700),
            )
            .wrap(true),
        );
        ui.add_space(spacing::XLARGE);
        draw_party(ui, time);
        ui.add_space(spacing::XLARGE);
        ui.horizontal(|ui| {
            let glyph_w = font::SMALL_GLYPH + spacing::MEDIUM;
            let row_w = glyph_w * CELEBRATION_HEARTS.len() as f32;
            ui.add_space(((ui.available_width() - row_w) / 2.0).max(0.0));
            for heart in CELEBRATION_HEARTS {
                ui.label(
                    RichText::new(heart)
                        .size(font::SMALL_GLYPH)
                        .color(palette::PINK_600),
                );
            }
        });
    });
}

fn draw_party(ui: &mut egui::Ui, time: f64) {
    let size = font::PARTY_GLYPH;
    // Headroom for the hop so the glyph never overlaps the text above.
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(size * 1.5, size * 1.25),
        egui::Sense::hover(),
    );
    let lift = bounce_lift(time) * size;
    let pos = egui::pos2(rect.center().x, rect.bottom() - size / 2.0 - lift);
    ui.painter().text(
        pos,
        egui::Align2::CENTER_CENTER,
        CELEBRATION_PARTY,
        egui::FontId::proportional(size),
        palette::PURPLE_600,
    );
}
