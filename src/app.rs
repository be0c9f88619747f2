// Window-level glue: owns the interaction state, turns clicks into state changes and
// paints whichever card the state selects. Everything that decides *what* to show lives
// in `interaction`, `style` and `render`; this module only wires it to egui.

use eframe::{egui, App};
use std::time::Duration;

use crate::celebration::{self, BurstConfig, CelebrationEffect, ConfettiBurst};
use crate::interaction::{CardEvent, InteractionState, RandomSource, RngSource, UserAction};
use crate::render::{self, CardView};
use crate::style;
use crate::views;

pub mod config;
mod logs_ui;

// Looping decorations need a steady frame clock.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct ValentineApp {
    state: InteractionState,
    rng: Box<dyn RandomSource>,
    confetti: ConfettiBurst,
    burst: BurstConfig,
    show_decorations: bool,
    logs: logs_ui::LogsWindow,
}

impl ValentineApp {
    pub fn new(cfg: &config::AppConfig) -> Self {
        Self::with_sources(
            cfg,
            Box::new(RngSource::from_os()),
            Box::new(RngSource::from_os()),
        )
    }

    /// `rng` drives the decline offset, `confetti_rng` the particles.
    pub fn with_sources(
        cfg: &config::AppConfig,
        rng: Box<dyn RandomSource>,
        confetti_rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            state: InteractionState::new(),
            rng,
            confetti: ConfettiBurst::new(confetti_rng),
            burst: cfg.celebration,
            show_decorations: cfg.show_decorations,
            logs: logs_ui::LogsWindow::default(),
        }
    }

    fn handle(&mut self, action: UserAction) {
        dispatch(
            &mut self.state,
            self.rng.as_mut(),
            &mut self.confetti,
            &self.burst,
            action,
        );
    }
}

/// Applies `action` and consumes the resulting event. The acceptance edge is the only
/// place the celebration is fired from.
pub fn dispatch(
    state: &mut InteractionState,
    rng: &mut dyn RandomSource,
    effect: &mut dyn CelebrationEffect,
    burst: &BurstConfig,
    action: UserAction,
) -> Option<CardEvent> {
    let event = state.apply(action, rng);
    match event {
        Some(CardEvent::Declined { count, offset }) => {
            let color = style::accept_color(count);
            log::debug!("Declined #{count}, accept button now {color} ({})", color.hex());
            if let Some(banner) = render::select_banner(count) {
                log::debug!("Banner: {banner}");
            }
            if let Some(o) = offset {
                log::debug!("Decline button moved to ({:.1}, {:.1})", o.x, o.y);
            }
        }
        Some(CardEvent::Accepted { declines }) => {
            log::info!("Accepted after {declines} decline(s)");
            celebration::celebrate(effect, burst);
        }
        None => log::trace!("{action:?} ignored in {:?}", state.phase()),
    }
    event
}

impl App for ValentineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::F12)) {
            self.logs.toggle();
        }
        if crate::logger::take_new_flag() && self.logs.is_open() {
            ctx.request_repaint();
        }

        let time = ctx.input(|i| i.time);
        let view = render::select_view(&self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                views::background::paint_gradient(ui.painter(), rect);
                if self.show_decorations && !view.is_celebration() {
                    views::decor::draw_floating_hearts(ui.painter(), rect, time);
                }
            });

        let action = match &view {
            CardView::Prompt(prompt) => views::prompt::show(ctx, prompt, time),
            CardView::Celebration => {
                views::celebration::show(ctx, time);
                None
            }
        };
        if let Some(action) = action {
            self.handle(action);
            ctx.request_repaint();
        }

        self.confetti.paint(ctx);

        // Logs window (separate OS viewport)
        self.logs.show(ctx);

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::celebration::RecordingEffect;
    use crate::interaction::{Phase, ScriptedSource};

    #[test]
    fn three_declines_then_accept() {
        let mut state = InteractionState::new();
        let mut rng = ScriptedSource::new(&[0.2, 0.9]);
        let mut effect = RecordingEffect::default();
        let burst = BurstConfig::default();

        for _ in 0..3 {
            dispatch(&mut state, &mut rng, &mut effect, &burst, UserAction::Decline);
        }
        assert_eq!(state.decline_count(), 3);
        assert_eq!(rng.draws, 2, "offset drawn exactly once");
        assert!((style::decline_scale(state.decline_count()) - 0.7).abs() < 1e-5);
        assert!(effect.fired.is_empty());

        let event = dispatch(&mut state, &mut rng, &mut effect, &burst, UserAction::Accept);
        assert_eq!(event, Some(CardEvent::Accepted { declines: 3 }));
        assert_eq!(state.phase(), Phase::Accepted);
        assert!(render::select_view(&state).is_celebration());
        assert_eq!(effect.fired, vec![burst]);
    }

    #[test]
    fn celebration_fires_once_per_acceptance() {
        for declines in 0..6 {
            let mut state = InteractionState::new();
            let mut rng = RngSource::seeded(declines);
            let mut effect = RecordingEffect::default();
            let burst = BurstConfig::default();
            for _ in 0..declines {
                dispatch(&mut state, &mut rng, &mut effect, &burst, UserAction::Decline);
            }
            for _ in 0..4 {
                dispatch(&mut state, &mut rng, &mut effect, &burst, UserAction::Accept);
            }
            assert_eq!(effect.fired.len(), 1, "declines={declines}");
            assert_eq!(effect.fired[0].particle_count, 150);
            assert_eq!(effect.fired[0].spread, 180.0);
            assert_eq!(effect.fired[0].origin.y, 0.6);
        }
    }

    #[test]
    fn rejected_burst_still_accepts() {
        let mut state = InteractionState::new();
        let mut rng = ScriptedSource::new(&[0.5]);
        let mut effect = RecordingEffect::default();
        let broken = BurstConfig {
            particle_count: 0,
            ..Default::default()
        };
        let event = dispatch(&mut state, &mut rng, &mut effect, &broken, UserAction::Accept);
        assert!(matches!(event, Some(CardEvent::Accepted { .. })));
        assert!(state.is_accepted());
        assert!(effect.fired.is_empty());
    }

    #[test]
    fn decline_after_limit_is_ignored() {
        let mut state = InteractionState::new();
        let mut rng = RngSource::seeded(3);
        let mut effect = RecordingEffect::default();
        let burst = BurstConfig::default();
        for _ in 0..10 {
            dispatch(&mut state, &mut rng, &mut effect, &burst, UserAction::Decline);
        }
        assert_eq!(state.decline_count(), 6);
        assert!(effect.fired.is_empty());
    }

    #[test]
    fn app_starts_prompting_with_configured_burst() {
        let cfg = config::AppConfig::default();
        let app = ValentineApp::with_sources(
            &cfg,
            Box::new(RngSource::seeded(1)),
            Box::new(RngSource::seeded(2)),
        );
        assert_eq!(app.state.phase(), Phase::Prompting);
        assert_eq!(app.burst, cfg.celebration);
        assert!(!app.confetti.is_active());
        assert!(!app.logs.is_open());
    }
}
