//! Chooses what the card shows for a given interaction state.
//!
//! The output is a plain view model; the egui code in `views` only paints it.

use crate::interaction::{InteractionState, DECLINE_LIMIT};
use crate::style::{AcceptStyle, DeclineStyle};
use crate::types::Banner;

pub const ACCEPT_CAPTION: &str = "OUI";

// Plain U+2764: the bundled egui fonts have no glyph for the U+FE0F selector and would
// draw a replacement box after the heart.
pub const PROMPT_GLYPH: &str = "❤";
pub const PROMPT_QUESTION: &str = "Veux-tu être mon/ma Valentin(e)? 💘";

pub const CELEBRATION_GLYPH: &str = "💖";
pub const CELEBRATION_TITLE: &str = "Youpi !";
// Same bare heart as `PROMPT_GLYPH`.
pub const CELEBRATION_BODY: &str =
    "Je savais que tu dirais oui ! Tu es ma/mon Valentin(e) maintenant ! ❤";
pub const CELEBRATION_PARTY: &str = "🎉";
pub const CELEBRATION_HEARTS: [&str; 5] = ["💕", "💗", "💓", "💞", "💖"];

/// Decline captions, one per count below [`DECLINE_LIMIT`].
pub const DECLINE_MESSAGES: [&str; DECLINE_LIMIT as usize] = [
    "Non",
    "Es-tu sûr(e)?",
    "Vraiment?",
    "Pense-y encore...",
    "Sérieusement?",
    "Ne sois pas cruel(le)!",
];

/// Caption past the limit. The button is hidden by then, so this never reaches the screen.
pub const TERMINAL_DECLINE_MESSAGE: &str = "OK, j'arrête de demander...";

pub fn decline_caption(decline_count: u32) -> &'static str {
    DECLINE_MESSAGES
        .get(decline_count as usize)
        .copied()
        .unwrap_or(TERMINAL_DECLINE_MESSAGE)
}

type BannerRule = (fn(u32) -> bool, Banner);

fn hesitating(n: u32) -> bool {
    (2..4).contains(&n)
}

fn warming(n: u32) -> bool {
    (4..DECLINE_LIMIT).contains(&n)
}

fn tired(n: u32) -> bool {
    n >= DECLINE_LIMIT
}

// Evaluated top to bottom, first match wins.
const BANNER_RULES: [BannerRule; 3] = [
    (hesitating, Banner::Hesitating),
    (warming, Banner::Warming),
    (tired, Banner::Tired),
];

pub fn select_banner(decline_count: u32) -> Option<Banner> {
    BANNER_RULES
        .iter()
        .find(|(applies, _)| applies(decline_count))
        .map(|&(_, banner)| banner)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclineButton {
    pub caption: &'static str,
    pub style: DeclineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromptView {
    pub accept: AcceptStyle,
    /// `None` once the decline button has been retired.
    pub decline: Option<DeclineButton>,
    pub banner: Option<Banner>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    Prompt(PromptView),
    Celebration,
}

impl CardView {
    pub fn is_celebration(&self) -> bool {
        matches!(self, CardView::Celebration)
    }
}

pub fn select_view(state: &InteractionState) -> CardView {
    if state.is_accepted() {
        return CardView::Celebration;
    }
    let n = state.decline_count();
    let decline = (n < DECLINE_LIMIT).then(|| DeclineButton {
        caption: decline_caption(n),
        style: DeclineStyle::for_state(n, state.decline_offset()),
    });
    CardView::Prompt(PromptView {
        accept: AcceptStyle::for_count(n),
        decline,
        banner: select_banner(n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{RngSource, ScriptedSource};

    fn state_after(declines: u32) -> InteractionState {
        let mut rng = RngSource::seeded(99);
        let mut st = InteractionState::new();
        for _ in 0..declines {
            st.activate_decline(&mut rng);
        }
        st
    }

    fn prompt(view: CardView) -> PromptView {
        match view {
            CardView::Prompt(p) => p,
            CardView::Celebration => panic!("expected prompt view"),
        }
    }

    #[test]
    fn hearts_carry_no_variation_selector() {
        for text in [PROMPT_GLYPH, CELEBRATION_BODY] {
            assert!(text.contains('\u{2764}'), "{text}");
            assert!(!text.contains('\u{FE0F}'), "{text}");
        }
    }

    #[test]
    fn captions_follow_count() {
        assert_eq!(decline_caption(0), "Non");
        assert_eq!(decline_caption(1), "Es-tu sûr(e)?");
        for (n, msg) in DECLINE_MESSAGES.iter().enumerate() {
            assert_eq!(decline_caption(n as u32), *msg);
        }
        assert_eq!(decline_caption(6), TERMINAL_DECLINE_MESSAGE);
        assert_eq!(decline_caption(1_000), TERMINAL_DECLINE_MESSAGE);
    }

    #[test]
    fn banner_threshold_edges() {
        let expected = [
            (0, None),
            (1, None),
            (2, Some(Banner::Hesitating)),
            (3, Some(Banner::Hesitating)),
            (4, Some(Banner::Warming)),
            (5, Some(Banner::Warming)),
            (6, Some(Banner::Tired)),
            (7, Some(Banner::Tired)),
        ];
        for (n, banner) in expected {
            assert_eq!(select_banner(n), banner, "n={n}");
        }
    }

    #[test]
    fn decline_button_disappears_at_six() {
        let five = prompt(select_view(&state_after(5)));
        let btn = five.decline.expect("decline button at 5");
        assert_eq!(btn.caption, "Ne sois pas cruel(le)!");
        assert_eq!(five.banner, Some(Banner::Warming));

        let six = prompt(select_view(&state_after(6)));
        assert!(six.decline.is_none());
        assert_eq!(six.banner, Some(Banner::Tired));
    }

    #[test]
    fn translation_only_from_three() {
        for n in 0..3 {
            let view = prompt(select_view(&state_after(n)));
            assert_eq!(view.decline.map(|d| d.style.translation), Some(None), "n={n}");
        }
        let st = state_after(3);
        let view = prompt(select_view(&st));
        let translation = view.decline.and_then(|d| d.style.translation);
        assert_eq!(translation, Some(st.decline_offset()));
    }

    #[test]
    fn accepted_renders_only_celebration() {
        let mut st = state_after(4);
        st.activate_accept();
        assert!(select_view(&st).is_celebration());
    }

    #[test]
    fn rendering_does_not_touch_state() {
        let mut rng = ScriptedSource::new(&[0.3, 0.6]);
        let mut st = InteractionState::new();
        for _ in 0..3 {
            st.activate_decline(&mut rng);
        }
        let before = st.decline_offset();
        let a = select_view(&st);
        let b = select_view(&st);
        assert_eq!(a, b);
        assert_eq!(st.decline_offset(), before);
        assert_eq!(rng.draws, 2);
    }
}
