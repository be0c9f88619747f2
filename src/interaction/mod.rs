//! Interaction model of the card: a decline counter, a terminal "accepted" phase and the
//! randomized displacement of the decline button.
//!
//! State only changes through [`InteractionState::activate_decline`] and
//! [`InteractionState::activate_accept`]. Both report what happened as a [`CardEvent`],
//! and the acceptance event is produced exactly once, so callers can hang one-shot side
//! effects on it.

mod random;

pub use random::{RandomSource, RngSource};
#[cfg(test)]
pub use random::ScriptedSource;

use crate::style::DISPLACE_FROM;
use crate::types::Offset;

/// Count at which the decline button is taken off the card.
pub const DECLINE_LIMIT: u32 = 6;

/// Half-width of the square the decline offset is drawn from.
pub const OFFSET_HALF_RANGE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Prompting,
    Accepted,
}

/// What the user did on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Decline,
    Accept,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    Declined {
        count: u32,
        /// Set when this decline redrew the offset.
        offset: Option<Offset>,
    },
    /// Emitted on the single `Prompting -> Accepted` edge.
    Accepted { declines: u32 },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    decline_count: u32,
    phase: Phase,
    decline_offset: Offset,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decline_count(&self) -> u32 {
        self.decline_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_accepted(&self) -> bool {
        self.phase == Phase::Accepted
    }

    pub fn decline_offset(&self) -> Offset {
        self.decline_offset
    }

    /// Whether the decline button is still on the card.
    pub fn decline_available(&self) -> bool {
        !self.is_accepted() && self.decline_count < DECLINE_LIMIT
    }

    /// Registers a decline. Returns `None` when the decline button is gone.
    pub fn activate_decline(&mut self, rng: &mut dyn RandomSource) -> Option<CardEvent> {
        if !self.decline_available() {
            return None;
        }
        self.decline_count += 1;
        let offset = if self.decline_count >= DISPLACE_FROM {
            let drawn = draw_offset(rng);
            self.decline_offset = drawn;
            Some(drawn)
        } else {
            None
        };
        Some(CardEvent::Declined {
            count: self.decline_count,
            offset,
        })
    }

    /// Moves to [`Phase::Accepted`]. Only the first call yields the event.
    pub fn activate_accept(&mut self) -> Option<CardEvent> {
        if self.is_accepted() {
            return None;
        }
        self.phase = Phase::Accepted;
        Some(CardEvent::Accepted {
            declines: self.decline_count,
        })
    }

    pub fn apply(&mut self, action: UserAction, rng: &mut dyn RandomSource) -> Option<CardEvent> {
        match action {
            UserAction::Decline => self.activate_decline(rng),
            UserAction::Accept => self.activate_accept(),
        }
    }
}

/// Draws `x` then `y`, each mapped from `[0, 1)` onto `[-50, 50)`.
pub fn draw_offset(rng: &mut dyn RandomSource) -> Offset {
    let span = OFFSET_HALF_RANGE * 2.0;
    let x = rng.next_unit() * span - OFFSET_HALF_RANGE;
    let y = rng.next_unit() * span - OFFSET_HALF_RANGE;
    Offset { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_prompting_with_zero_offset() {
        let st = InteractionState::new();
        assert_eq!(st.decline_count(), 0);
        assert_eq!(st.phase(), Phase::Prompting);
        assert_eq!(st.decline_offset(), Offset::ZERO);
        assert!(st.decline_available());
    }

    #[test]
    fn first_two_declines_do_not_draw() {
        let mut rng = ScriptedSource::new(&[0.25]);
        let mut st = InteractionState::new();
        assert_eq!(
            st.activate_decline(&mut rng),
            Some(CardEvent::Declined { count: 1, offset: None })
        );
        assert_eq!(
            st.activate_decline(&mut rng),
            Some(CardEvent::Declined { count: 2, offset: None })
        );
        assert_eq!(rng.draws, 0);
        assert_eq!(st.decline_offset(), Offset::ZERO);
    }

    #[test]
    fn offset_uses_two_samples_x_first() {
        let mut rng = ScriptedSource::new(&[0.0, 0.75]);
        let off = draw_offset(&mut rng);
        assert_eq!(off, Offset { x: -50.0, y: 25.0 });
    }

    #[test]
    fn each_decline_from_three_redraws() {
        let mut rng = ScriptedSource::new(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);
        let mut st = InteractionState::new();
        st.activate_decline(&mut rng);
        st.activate_decline(&mut rng);
        st.activate_decline(&mut rng);
        assert_eq!(rng.draws, 2);
        let first = st.decline_offset();
        assert!((first.x - (-40.0)).abs() < 1e-9 && (first.y - (-30.0)).abs() < 1e-9);
        st.activate_decline(&mut rng);
        assert_eq!(rng.draws, 4);
        assert_ne!(st.decline_offset(), first);
    }

    #[test]
    fn offsets_stay_in_range_across_draws() {
        let mut rng = RngSource::seeded(2024);
        for _ in 0..5_000 {
            let off = draw_offset(&mut rng);
            assert!((-50.0..50.0).contains(&off.x), "{off:?}");
            assert!((-50.0..50.0).contains(&off.y), "{off:?}");
        }
        let mut edge = ScriptedSource::new(&[1.0 - f64::EPSILON]);
        let off = draw_offset(&mut edge);
        assert!(off.x < 50.0 && off.y < 50.0);
    }

    #[test]
    fn counter_stops_at_limit() {
        let mut rng = RngSource::seeded(1);
        let mut st = InteractionState::new();
        for expected in 1..=DECLINE_LIMIT {
            match st.activate_decline(&mut rng) {
                Some(CardEvent::Declined { count, .. }) => assert_eq!(count, expected),
                other => panic!("unexpected {other:?}"),
            }
        }
        assert!(!st.decline_available());
        let before = st.decline_offset();
        assert_eq!(st.activate_decline(&mut rng), None);
        assert_eq!(st.decline_count(), DECLINE_LIMIT);
        assert_eq!(st.decline_offset(), before);
    }

    #[test]
    fn accept_fires_once_from_any_count() {
        for declines in 0..DECLINE_LIMIT {
            let mut rng = RngSource::seeded(declines as u64);
            let mut st = InteractionState::new();
            for _ in 0..declines {
                st.activate_decline(&mut rng);
            }
            assert_eq!(st.activate_accept(), Some(CardEvent::Accepted { declines }));
            assert!(st.is_accepted());
            assert_eq!(st.activate_accept(), None);
            assert_eq!(st.activate_accept(), None);
            assert_eq!(st.phase(), Phase::Accepted);
        }
    }

    #[test]
    fn decline_is_ignored_after_accept() {
        let mut rng = ScriptedSource::new(&[0.5]);
        let mut st = InteractionState::new();
        st.activate_accept();
        assert_eq!(st.apply(UserAction::Decline, &mut rng), None);
        assert_eq!(st.decline_count(), 0);
        assert_eq!(rng.draws, 0);
    }
}
