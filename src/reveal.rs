//! One-shot reveal-on-scroll sequencing.
//!
//! A section starts [`RevealState::Hidden`] and flips to
//! [`RevealState::Visible`] the first time its visible fraction reaches a
//! [`Threshold`]. It never flips back. Children of a revealed section enter
//! one after another, each delayed by a [`Stagger`], using the transition
//! described by their [`Variant`].

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feed one observed visible-area fraction into the flag.
    ///
    /// Once `Visible`, every later observation is ignored.
    pub fn observe(self, ratio: f64, threshold: Threshold) -> Self {
        if self.is_visible() || ratio >= threshold.value() {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Fraction of an element that must be inside the viewport, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Self = Self::new(0.2);
    /// Used by tall sections that rarely get 20% on screen at once.
    pub const LOOSE: Self = Self::new(0.1);

    /// Clamps into `[0, 1]`. NaN falls back to 0.2.
    pub const fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.2)
        } else if value < 0.0 {
            Self(0.0)
        } else if value > 1.0 {
            Self(1.0)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    /// Delay before the first child starts.
    pub delay_children: Duration,
    /// Extra delay added for every following sibling.
    pub stagger_children: Duration,
}

impl Stagger {
    pub const SECTION: Self = Self::new(Duration::ZERO, Duration::from_millis(300));
    pub const HERO: Self = Self::new(Duration::from_millis(200), Duration::from_millis(300));
    pub const CARDS: Self = Self::new(Duration::ZERO, Duration::from_millis(200));
    pub const TIGHT: Self = Self::new(Duration::ZERO, Duration::from_millis(100));

    pub const fn new(delay_children: Duration, stagger_children: Duration) -> Self {
        Self {
            delay_children,
            stagger_children,
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_children
            .saturating_add(self.stagger_children.saturating_mul(index))
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::SECTION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    EaseOut,
}

impl Ease {
    fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "ease-out",
        }
    }
}

/// Pixel offset an item starts from while hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

/// Hidden/visible pair for a single revealed item.
///
/// Hidden is fully transparent and shifted by `offset`; visible is opaque at
/// its natural position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    pub offset: Offset,
    pub duration: Duration,
    pub ease: Ease,
}

impl Variant {
    pub const RISE: Self = Self::new(0, 50, Duration::from_millis(800));
    pub const RISE_FAR: Self = Self::new(0, 100, Duration::from_millis(800));
    pub const FROM_LEFT: Self = Self::new(-100, 0, Duration::from_millis(800));
    pub const FROM_RIGHT: Self = Self::new(100, 0, Duration::from_millis(800));
    pub const POP: Self = Self::new(0, 20, Duration::from_millis(600));

    pub const fn new(x: i32, y: i32, duration: Duration) -> Self {
        Self {
            offset: Offset { x, y },
            duration,
            ease: Ease::EaseOut,
        }
    }

    pub const fn eased(self, ease: Ease) -> Self {
        Self { ease, ..self }
    }

    /// Inline style for an item in `state`, starting `delay` after the
    /// section is revealed.
    pub fn style(&self, state: RevealState, delay: Duration) -> String {
        let (opacity, transform) = match state {
            RevealState::Hidden => (
                0,
                format!("translate({}px, {}px)", self.offset.x, self.offset.y),
            ),
            RevealState::Visible => (1, "none".to_string()),
        };
        let timing = format!(
            "{}ms {} {}ms",
            self.duration.as_millis(),
            self.ease.css(),
            delay.as_millis()
        );
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {timing}, transform {timing};"
        )
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::RISE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_below_threshold() {
        let state = RevealState::Hidden
            .observe(0.0, Threshold::DEFAULT)
            .observe(0.19, Threshold::DEFAULT);
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn reveals_once_threshold_is_reached() {
        let state = RevealState::Hidden.observe(0.2, Threshold::DEFAULT);
        assert_eq!(state, RevealState::Visible);

        let state = RevealState::Hidden.observe(0.15, Threshold::LOOSE);
        assert!(state.is_visible());
    }

    #[test]
    fn never_reverts_after_reveal() {
        let mut state = RevealState::Hidden.observe(0.5, Threshold::DEFAULT);
        for ratio in [0.0, 0.05, f64::NAN, 1.0, 0.0] {
            state = state.observe(ratio, Threshold::DEFAULT);
            assert_eq!(state, RevealState::Visible);
        }
    }

    #[test]
    fn nan_ratio_does_not_reveal() {
        assert_eq!(
            RevealState::Hidden.observe(f64::NAN, Threshold::DEFAULT),
            RevealState::Hidden
        );
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(Threshold::new(1.5).value(), 1.0);
        assert_eq!(Threshold::new(-0.3).value(), 0.0);
        assert_eq!(Threshold::new(f64::NAN), Threshold::DEFAULT);
        assert_eq!(Threshold::default().value(), 0.2);
        assert_eq!(Threshold::LOOSE.value(), 0.1);
    }

    #[test]
    fn stagger_delays_increase_by_fixed_step() {
        let hero = Stagger::HERO;
        assert_eq!(hero.delay_for(0), Duration::from_millis(200));
        assert_eq!(hero.delay_for(1), Duration::from_millis(500));
        assert_eq!(hero.delay_for(4), Duration::from_millis(1400));

        let delays: Vec<_> = (0..6).map(|i| Stagger::TIGHT.delay_for(i)).collect();
        for pair in delays.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::from_millis(100));
        }
    }

    #[test]
    fn card_stagger_steps_by_200ms() {
        let delays: Vec<_> = (0..4).map(|i| Stagger::CARDS.delay_for(i)).collect();
        assert_eq!(
            delays,
            [0, 200, 400, 600].map(Duration::from_millis).to_vec()
        );
    }

    #[test]
    fn stagger_saturates_on_huge_index() {
        let delay = Stagger::SECTION.delay_for(usize::MAX);
        assert!(delay >= Stagger::SECTION.delay_for(1_000_000));
    }

    #[test]
    fn hidden_style_offsets_and_hides() {
        let style = Variant::FROM_LEFT.style(RevealState::Hidden, Duration::ZERO);
        assert_eq!(
            style,
            "opacity: 0; transform: translate(-100px, 0px); \
             transition: opacity 800ms ease-out 0ms, transform 800ms ease-out 0ms;"
        );
    }

    #[test]
    fn visible_style_carries_stagger_delay() {
        let delay = Stagger::SECTION.delay_for(2);
        let style = Variant::POP.style(RevealState::Visible, delay);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 600ms ease-out 600ms"));
        assert!(style.contains("transform 600ms ease-out 600ms"));
    }

    #[test]
    fn linear_ease_renders() {
        let variant = Variant::RISE.eased(Ease::Linear);
        let style = variant.style(RevealState::Visible, Duration::from_millis(50));
        assert!(style.contains("800ms linear 50ms"));
    }
}
