use std::time::Duration;

use serde::Serialize;
use tracing::debug;

/// Where a revealable element is in its one-shot lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Never intersected the viewport
    NotObserved,
    /// Intersected, but below the threshold
    Observed,
    /// Terminal. Later intersection changes are ignored.
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RevealConfig {
    /// Visible fraction at which the element reveals
    pub threshold: f32,
    pub duration: Duration,
    /// Delay before inner content starts its own fade
    pub inner_delay: Duration,
    pub inner_duration: Duration,
}

impl RevealConfig {
    /// Magazine cards.
    pub const CARD: RevealConfig = RevealConfig {
        threshold: 0.1,
        duration: Duration::from_millis(600),
        inner_delay: Duration::from_millis(200),
        inner_duration: Duration::from_millis(500),
    };

    /// Page sections below the hero.
    pub const SECTION: RevealConfig = RevealConfig {
        threshold: 0.1,
        duration: Duration::from_millis(800),
        inner_delay: Duration::from_millis(0),
        inner_duration: Duration::from_millis(600),
    };

    /// Hero blocks, which wait until a larger share is visible.
    pub const HERO: RevealConfig = RevealConfig {
        threshold: 0.3,
        duration: Duration::from_millis(1000),
        inner_delay: Duration::from_millis(200),
        inner_duration: Duration::from_millis(800),
    };
}

/// One-shot reveal for a single mounted element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reveal {
    config: RevealConfig,
    state: RevealState,
    revealed_at: Option<Duration>,
}

impl Reveal {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: RevealState::NotObserved,
            revealed_at: None,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed an intersection measurement taken at `now`.
    ///
    /// Returns `true` only for the call that moves the element into
    /// [`RevealState::Revealed`].
    pub fn observe(&mut self, ratio: f32, now: Duration) -> bool {
        match self.state {
            RevealState::Revealed => false,
            _ if ratio >= self.config.threshold => {
                self.state = RevealState::Revealed;
                self.revealed_at = Some(now);
                debug!(ratio, threshold = self.config.threshold, "revealed");
                true
            }
            RevealState::NotObserved if ratio > 0.0 => {
                self.state = RevealState::Observed;
                false
            }
            _ => false,
        }
    }

    /// Eased progress of the outer animation, 0.0 before reveal.
    pub fn progress(&self, now: Duration) -> f32 {
        self.eased(now, Duration::ZERO, self.config.duration)
    }

    /// Eased progress of the inner content fade.
    pub fn inner_progress(&self, now: Duration) -> f32 {
        self.eased(now, self.config.inner_delay, self.config.inner_duration)
    }

    /// Both animations have finished.
    pub fn is_settled(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0 && self.inner_progress(now) >= 1.0
    }

    fn eased(&self, now: Duration, delay: Duration, duration: Duration) -> f32 {
        let Some(start) = self.revealed_at else {
            return 0.0;
        };
        let elapsed = now.saturating_sub(start).saturating_sub(delay);
        if duration.is_zero() {
            return 1.0;
        }
        ease_out((elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0))
    }
}

/// Cubic ease-out on `0.0..=1.0`.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Visible fraction of the span `[top, top + height)` inside the viewport
/// `[view_top, view_top + view_height)`. Zero-height elements count as fully
/// visible when their top lies in the viewport.
pub fn intersection_ratio(top: u16, height: u16, view_top: u16, view_height: u16) -> f32 {
    let view_bottom = view_top as u32 + view_height as u32;
    if height == 0 {
        let inside = top >= view_top && (top as u32) < view_bottom;
        return if inside { 1.0 } else { 0.0 };
    }
    let bottom = top as u32 + height as u32;
    let overlap_top = (top as u32).max(view_top as u32);
    let overlap_bottom = bottom.min(view_bottom);
    if overlap_bottom <= overlap_top {
        return 0.0;
    }
    (overlap_bottom - overlap_top) as f32 / height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: Duration = Duration::from_millis(1_000);

    #[test]
    fn test_reveal_below_threshold_only_observes() {
        let mut reveal = Reveal::new(RevealConfig::CARD);
        assert!(!reveal.observe(0.05, T0));
        assert_eq!(reveal.state(), RevealState::Observed);
        assert_eq!(reveal.progress(T0 * 2), 0.0);
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = Reveal::new(RevealConfig::CARD);
        assert!(reveal.observe(0.1, T0));
        assert!(!reveal.observe(1.0, T0 * 2));
        assert!(!reveal.observe(0.0, T0 * 3));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_reveal_may_skip_observed() {
        let mut reveal = Reveal::new(RevealConfig::HERO);
        assert!(reveal.observe(0.9, T0));
        assert_eq!(reveal.state(), RevealState::Revealed);
    }

    #[test]
    fn test_hero_threshold_is_higher() {
        let mut hero = Reveal::new(RevealConfig::HERO);
        let mut card = Reveal::new(RevealConfig::CARD);
        assert!(!hero.observe(0.2, T0));
        assert!(card.observe(0.2, T0));
    }

    #[test]
    fn test_card_timing() {
        let mut reveal = Reveal::new(RevealConfig::CARD);
        reveal.observe(1.0, T0);

        assert_eq!(reveal.progress(T0), 0.0);
        assert_eq!(reveal.progress(T0 + Duration::from_millis(600)), 1.0);
        assert_eq!(reveal.inner_progress(T0 + Duration::from_millis(200)), 0.0);
        let midway = reveal.progress(T0 + Duration::from_millis(300));
        assert!(midway > 0.5, "ease-out front-loads motion: {midway}");
        assert!(!reveal.is_settled(T0 + Duration::from_millis(600)));
        assert!(reveal.is_settled(T0 + Duration::from_millis(700)));
    }

    #[test]
    fn test_intersection_ratio() {
        assert_eq!(intersection_ratio(0, 10, 0, 20), 1.0);
        assert_eq!(intersection_ratio(15, 10, 0, 20), 0.5);
        assert_eq!(intersection_ratio(25, 10, 0, 20), 0.0);
        assert_eq!(intersection_ratio(0, 10, 9, 20), 0.1);
        assert_eq!(intersection_ratio(5, 0, 0, 20), 1.0);
    }
}
