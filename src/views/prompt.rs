// Prompt card: question, the two buttons and the encouragement banner.

use eframe::egui::{self, Color32, FontId, RichText, Rounding};

use super::background::lerp_color;
use super::decor::{pulse_opacity, shake_dx};
use crate::interaction::UserAction;
use crate::render::{PromptView, ACCEPT_CAPTION, PROMPT_GLYPH, PROMPT_QUESTION};
use crate::style::{AcceptStyle, DeclineStyle};
use crate::types::{AcceptColor, Banner, Offset};
use crate::ui_constants::{button, font, palette, spacing};

/// Where both buttons end up, after scaling and displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRects {
    pub accept: egui::Rect,
    pub decline: Option<egui::Rect>,
}

impl ButtonRects {
    fn translate(self, delta: egui::Vec2) -> Self {
        Self {
            accept: self.accept.translate(delta),
            decline: self.decline.map(|r| r.translate(delta)),
        }
    }

    /// Height the row needs so the scaled buttons do not spill onto the banner.
    fn row_height(&self, decline_style: Option<&DeclineStyle>) -> f32 {
        let mut h = self.accept.height();
        if let (Some(rect), Some(style)) = (self.decline, decline_style) {
            let lift = style.translation.map_or(0.0, |o| (o.y as f32 * style.scale).abs());
            h = h.max(rect.height() + 2.0 * lift);
        }
        h.max(button::BASE_HEIGHT)
    }
}

/// Lays the buttons out side by side around `center`.
///
/// Each button gets a slot from its width/height factors; the visible rect is the slot
/// scaled about its centre. The decline displacement is applied after scaling, so it
/// shrinks with the button.
pub fn layout_buttons(
    center: egui::Pos2,
    accept: &AcceptStyle,
    decline: Option<(&DeclineStyle, f32)>,
) -> ButtonRects {
    let accept_slot = egui::vec2(
        button::BASE_WIDTH * accept.width_factor,
        button::BASE_HEIGHT * accept.height_factor,
    );
    let decline_slot = decline.map(|(_, w)| egui::vec2(w, button::BASE_HEIGHT));
    let total_w = accept_slot.x + decline_slot.map_or(0.0, |s| button::GAP + s.x);

    let left = center.x - total_w / 2.0;
    let accept_center = egui::pos2(left + accept_slot.x / 2.0, center.y);
    let accept_rect = egui::Rect::from_center_size(accept_center, accept_slot * accept.scale);

    let decline_rect = decline.zip(decline_slot).map(|((style, _), slot)| {
        let slot_center = egui::pos2(
            left + accept_slot.x + button::GAP + slot.x / 2.0,
            center.y,
        );
        let shift = style
            .translation
            .map_or(egui::Vec2::ZERO, |o| o.to_vec2() * style.scale);
        egui::Rect::from_center_size(slot_center + shift, slot * style.scale)
    });

    ButtonRects {
        accept: accept_rect,
        decline: decline_rect,
    }
}

pub fn show(ctx: &egui::Context, view: &PromptView, time: f64) -> Option<UserAction> {
    super::show_card(ctx, "prompt_card", |ui| {
        ui.label(
            RichText::new(PROMPT_GLYPH)
                .size(font::HEADLINE_GLYPH)
                .color(palette::RED_500),
        );
        ui.add_space(spacing::XLARGE);
        ui.add(
            egui::Label::new(
                RichText::new(PROMPT_QUESTION)
                    .size(font::QUESTION)
                    .strong()
                    .color(palette::GRAY_800),
            )
            .wrap(true),
        );
        ui.add_space(spacing::BUTTONS_TOP);

        let action = draw_buttons(ui, view, time);

        if let Some(banner) = view.banner {
            draw_banner(ui, banner);
        }
        action
    })
}

fn caption_width(ui: &egui::Ui, caption: &str) -> f32 {
    let font_id = FontId::proportional(button::FONT_SIZE);
    ui.fonts(|f| {
        f.layout_no_wrap(caption.to_string(), font_id, Color32::WHITE)
            .rect
            .width()
    })
}

/// Eases `target` in over [`button::TRANSITION_SECS`], starting from wherever the value
/// keyed by `key` currently is.
fn transition(ctx: &egui::Context, key: &'static str, target: f32) -> f32 {
    ctx.animate_value_with_time(
        egui::Id::new(("prompt_transition", key)),
        target,
        button::TRANSITION_SECS,
    )
}

/// Styles as they look this frame, partway through any running transition.
fn transitioned(
    ctx: &egui::Context,
    accept: &AcceptStyle,
    decline: Option<&DeclineStyle>,
) -> (AcceptStyle, Option<DeclineStyle>) {
    let accept = AcceptStyle {
        scale: transition(ctx, "accept_scale", accept.scale),
        width_factor: transition(ctx, "accept_width", accept.width_factor),
        height_factor: transition(ctx, "accept_height", accept.height_factor),
        ..*accept
    };
    let decline = decline.map(|d| {
        let target = d.translation.unwrap_or(Offset::ZERO);
        DeclineStyle {
            scale: transition(ctx, "decline_scale", d.scale),
            translation: Some(Offset {
                x: transition(ctx, "decline_x", target.x as f32) as f64,
                y: transition(ctx, "decline_y", target.y as f32) as f64,
            }),
        }
    });
    (accept, decline)
}

/// Fill at a fractional palette position, blending the two neighbouring colors.
fn blended_fill(position: f32) -> Color32 {
    let lower = position.max(0.0).floor();
    let from = AcceptColor::from_index(lower as usize);
    let to = AcceptColor::from_index(lower as usize + 1);
    lerp_color(from.color32(), to.color32(), position - lower)
}

fn grown(rect: egui::Rect, factor: f32) -> egui::Rect {
    egui::Rect::from_center_size(rect.center(), rect.size() * factor)
}

fn draw_buttons(ui: &mut egui::Ui, view: &PromptView, time: f64) -> Option<UserAction> {
    let ctx = ui.ctx().clone();
    let (accept, decline_style) = transitioned(
        &ctx,
        &view.accept,
        view.decline.as_ref().map(|d| &d.style),
    );
    let decline = view
        .decline
        .as_ref()
        .zip(decline_style.as_ref())
        .map(|(d, style)| {
            let w = caption_width(ui, d.caption) + 2.0 * button::PADDING_X;
            (style, w)
        });

    let probe = layout_buttons(egui::Pos2::ZERO, &accept, decline);
    let row_h = probe.row_height(decline_style.as_ref());
    let (row, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), row_h),
        egui::Sense::hover(),
    );
    let rects = probe.translate(row.center().to_vec2());

    let mut action = None;

    let mut accept_rect = rects.accept;
    if accept.shake {
        accept_rect = accept_rect.translate(egui::vec2(shake_dx(time), 0.0));
    }
    let hovered = ui.rect_contains_pointer(accept_rect);
    let hover = transition(
        &ctx,
        "accept_hover",
        if hovered { button::HOVER_SCALE } else { 1.0 },
    );
    accept_rect = grown(accept_rect, hover);

    let mut fill = blended_fill(transition(
        &ctx,
        "accept_color",
        accept.color.index() as f32,
    ));
    if accept.pulse {
        fill = fill.gamma_multiply(pulse_opacity(time));
    }
    let accept_btn = filled_button(ACCEPT_CAPTION, accept.scale * hover, fill, accept_rect);
    if ui
        .put(accept_rect, accept_btn)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
    {
        action = Some(UserAction::Accept);
    }

    // Drawn second so it stays on top of the growing accept button.
    if let (Some(d), Some(rect), Some(style)) = (&view.decline, rects.decline, &decline_style) {
        let btn = filled_button(d.caption, style.scale, palette::RED_500, rect);
        if ui
            .put(rect, btn)
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
        {
            action = Some(UserAction::Decline);
        }
    }
    action
}

fn filled_button(caption: &str, scale: f32, fill: Color32, rect: egui::Rect) -> egui::Button<'static> {
    let text = RichText::new(caption.to_string())
        .size(button::FONT_SIZE * scale)
        .strong()
        .color(Color32::WHITE);
    egui::Button::new(text)
        .fill(fill)
        .rounding(Rounding::same(rect.height() / 2.0))
        .min_size(rect.size())
}

fn draw_banner(ui: &mut egui::Ui, banner: Banner) {
    ui.add_space(banner.top_space());
    let mut text = RichText::new(banner.text())
        .size(font::BANNER)
        .color(banner.color());
    text = if banner.italic() {
        text.italics()
    } else {
        text.strong()
    };
    ui.add(egui::Label::new(text).wrap(true));
}
