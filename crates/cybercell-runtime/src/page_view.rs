use std::time::Duration;

use cybercell_content::{Page, SectionBody, page};
use cybercell_engine::layout::{PageLayout, Tile, TileKind};
use cybercell_engine::reveal::intersection_ratio;
use cybercell_engine::{ElementTag, HoverTarget, Reveal, RevealConfig};
use cybercell_types::{Route, Target};
use tracing::debug;

/// A mounted page: its layout at the current width, the scroll offset and
/// every per-instance state (reveals, focus). Mounting a page again starts
/// from scratch.
#[derive(Debug, Clone)]
pub struct PageView {
    route: Route,
    page: &'static Page,
    layout: PageLayout,
    scroll: u16,
    viewport_height: u16,
    hero_reveal: Reveal,
    section_reveals: Vec<Reveal>,
    /// One per tile; only magazine cards carry their own reveal
    tile_reveals: Vec<Option<Reveal>>,
    focus: Option<usize>,
}

impl PageView {
    pub fn mount(route: Route, width: u16, viewport_height: u16, now: Duration) -> Self {
        let page = page(route);
        let layout = PageLayout::compute(page, width);
        let tile_reveals = layout
            .tiles
            .iter()
            .map(|tile| match tile.kind {
                TileKind::Card { section, .. }
                    if matches!(page.sections[section].body, SectionBody::Articles(_)) =>
                {
                    Some(Reveal::new(RevealConfig::CARD))
                }
                _ => None,
            })
            .collect();
        let mut view = Self {
            route,
            page,
            section_reveals: vec![Reveal::new(RevealConfig::SECTION); page.sections.len()],
            hero_reveal: Reveal::new(RevealConfig::HERO),
            tile_reveals,
            layout,
            scroll: 0,
            viewport_height,
            focus: None,
        };
        debug!(%route, width, tiles = view.layout.tiles.len(), "page mounted");
        view.observe(now);
        view
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &'static Page {
        self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout.height.saturating_sub(self.viewport_height)
    }

    /// Relayout for a new size. Reveal and focus state survive.
    pub fn resize(&mut self, width: u16, viewport_height: u16, now: Duration) {
        if width != self.layout.width {
            self.layout = PageLayout::compute(self.page, width);
        }
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
        self.observe(now);
    }

    pub fn scroll_to(&mut self, offset: u16, now: Duration) {
        self.scroll = offset.min(self.max_scroll());
        self.observe(now);
    }

    pub fn scroll_by(&mut self, delta: i32, now: Duration) {
        let target = i32::from(self.scroll)
            .saturating_add(delta)
            .clamp(0, i32::from(u16::MAX)) as u16;
        self.scroll_to(target, now);
    }

    pub fn scroll_to_bottom(&mut self, now: Duration) {
        self.scroll_to(self.max_scroll(), now);
    }

    /// Bring the section carrying `anchor` to the top of the viewport.
    /// Returns `false`, leaving scroll untouched, when no section has it.
    pub fn scroll_to_anchor(&mut self, anchor: &str, now: Duration) -> bool {
        match self.layout.anchor_offset(anchor) {
            Some(offset) => {
                self.scroll_to(offset, now);
                true
            }
            None => {
                debug!(route = %self.route, anchor, "anchor not on page");
                false
            }
        }
    }

    /// Feed the current viewport to every reveal.
    pub fn observe(&mut self, now: Duration) {
        let (top, height) = (self.scroll, self.viewport_height);

        let hero = self.layout.hero.rect;
        self.hero_reveal
            .observe(intersection_ratio(hero.y, hero.height, top, height), now);

        for (section, reveal) in self.layout.sections.iter().zip(&mut self.section_reveals) {
            let ratio = intersection_ratio(section.rect.y, section.rect.height, top, height);
            if reveal.observe(ratio, now) {
                debug!(section = section.index, "section revealed");
            }
        }

        for (tile, reveal) in self.layout.tiles.iter().zip(&mut self.tile_reveals) {
            if let Some(reveal) = reveal {
                let ratio = intersection_ratio(tile.rect.y, tile.rect.height, top, height);
                if reveal.observe(ratio, now) {
                    debug!(card = tile.label, "card revealed");
                }
            }
        }
    }

    pub fn hero_reveal(&self) -> &Reveal {
        &self.hero_reveal
    }

    pub fn section_reveal(&self, index: usize) -> Option<&Reveal> {
        self.section_reveals.get(index)
    }

    /// The reveal that animates a tile: its own, else its section's, else
    /// the hero's.
    pub fn tile_reveal(&self, index: usize) -> Option<&Reveal> {
        if let Some(Some(reveal)) = self.tile_reveals.get(index) {
            return Some(reveal);
        }
        let tile = self.layout.tiles.get(index)?;
        match tile.kind {
            TileKind::Card { section, .. }
            | TileKind::Action {
                section: Some(section),
                ..
            } => self.section_reveals.get(section),
            _ => Some(&self.hero_reveal),
        }
    }

    // ==========================================
    // Focus and hit testing
    // ==========================================

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn focused_tile(&self) -> Option<&Tile> {
        self.focus.and_then(|i| self.layout.tiles.get(i))
    }

    pub fn focus_next(&mut self, now: Duration) -> Option<&Tile> {
        self.move_focus(true, now)
    }

    pub fn focus_prev(&mut self, now: Duration) -> Option<&Tile> {
        self.move_focus(false, now)
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Target of the focused tile, if it leads anywhere.
    pub fn activate_focused(&self) -> Option<Target> {
        self.focused_tile()
            .map(|t| t.target)
            .filter(Target::is_actionable)
    }

    /// Tile at a viewport-relative position.
    pub fn hit(&self, x: u16, viewport_y: u16) -> Option<(usize, &Tile)> {
        if viewport_y >= self.viewport_height {
            return None;
        }
        self.layout.hit(x, viewport_y.saturating_add(self.scroll))
    }

    /// Element under a viewport-relative position, for the cursor effect.
    pub fn hover_target(&self, x: u16, viewport_y: u16) -> HoverTarget {
        match self.hit(x, viewport_y) {
            Some((_, tile)) if tile.is_button() => HoverTarget::new(ElementTag::Button),
            Some((_, tile)) if tile.is_clickable() => {
                HoverTarget::new(ElementTag::Div).with_class("hoverable")
            }
            Some(_) => HoverTarget::new(ElementTag::Div).with_class("glass-card"),
            None => HoverTarget::background(),
        }
    }

    fn move_focus(&mut self, forward: bool, now: Duration) -> Option<&Tile> {
        let clickable: Vec<usize> = self
            .layout
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_clickable())
            .map(|(i, _)| i)
            .collect();
        if clickable.is_empty() {
            self.focus = None;
            return None;
        }

        let position = self.focus.and_then(|f| clickable.iter().position(|&i| i == f));
        let next = match (position, forward) {
            (None, true) => 0,
            (None, false) => clickable.len() - 1,
            (Some(p), true) => (p + 1) % clickable.len(),
            (Some(p), false) => (p + clickable.len() - 1) % clickable.len(),
        };
        let index = clickable[next];
        self.focus = Some(index);
        self.scroll_into_view(index, now);
        self.layout.tiles.get(index)
    }

    fn scroll_into_view(&mut self, index: usize, now: Duration) {
        let Some(rect) = self.layout.tiles.get(index).map(|t| t.rect) else {
            return;
        };
        if rect.y < self.scroll {
            self.scroll_to(rect.y, now);
        } else if rect.bottom() > self.scroll + self.viewport_height {
            self.scroll_to(rect.bottom().saturating_sub(self.viewport_height), now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_engine::RevealState;

    const T0: Duration = Duration::ZERO;

    #[test]
    fn test_mount_reveals_what_is_visible() {
        let view = PageView::mount(Route::Home, 120, 30, T0);
        assert!(view.hero_reveal().is_revealed());
        let last = view.layout().sections.len() - 1;
        assert_eq!(
            view.section_reveal(last).unwrap().state(),
            RevealState::NotObserved
        );
    }

    #[test]
    fn test_card_reveal_fires_once() {
        let mut view = PageView::mount(Route::Home, 120, 20, T0);
        let card = view
            .layout()
            .tiles
            .iter()
            .position(|t| t.featured)
            .unwrap();
        assert!(!view.tile_reveal(card).unwrap().is_revealed());

        let y = view.layout().tiles[card].rect.y;
        view.scroll_to(y, Duration::from_millis(100));
        assert!(view.tile_reveal(card).unwrap().is_revealed());
        let progress = view.tile_reveal(card).unwrap().progress(Duration::from_millis(400));

        // Scrolling away and back does not restart the animation
        view.scroll_to(0, Duration::from_millis(200));
        view.scroll_to(y, Duration::from_millis(300));
        assert_eq!(
            view.tile_reveal(card).unwrap().progress(Duration::from_millis(400)),
            progress
        );
    }

    #[test]
    fn test_remount_starts_fresh() {
        let mut view = PageView::mount(Route::Mitigation, 120, 20, T0);
        let max = view.max_scroll();
        view.scroll_to(max, T0);
        let last = view.layout().sections.len() - 1;
        assert!(view.section_reveal(last).unwrap().is_revealed());

        let again = PageView::mount(Route::Mitigation, 120, 20, T0);
        assert!(!again.section_reveal(last).unwrap().is_revealed());
        assert_eq!(again.scroll(), 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut view = PageView::mount(Route::References, 100, 20, T0);
        view.scroll_by(-5, T0);
        assert_eq!(view.scroll(), 0);
        view.scroll_by(i32::MAX, T0);
        assert_eq!(view.scroll(), view.max_scroll());
    }

    #[test]
    fn test_large_scroll_from_offset_reaches_bottom() {
        let mut view = PageView::mount(Route::References, 100, 20, T0);
        view.scroll_by(5, T0);
        assert_eq!(view.scroll(), 5);
        view.scroll_by(i32::MAX, T0);
        assert_eq!(view.scroll(), view.max_scroll());
        view.scroll_by(i32::MIN, T0);
        assert_eq!(view.scroll(), 0);

        view.scroll_by(5, T0);
        view.scroll_to_bottom(T0);
        assert_eq!(view.scroll(), view.max_scroll());
    }

    #[test]
    fn test_scroll_to_anchor() {
        let mut view = PageView::mount(Route::Mitigation, 120, 10, T0);
        assert!(view.scroll_to_anchor("frameworks", T0));
        assert_eq!(
            Some(view.scroll()),
            view.layout()
                .anchor_offset("frameworks")
                .map(|o| o.min(view.max_scroll()))
        );

        view.scroll_to(0, T0);
        assert!(!view.scroll_to_anchor("zero-day", T0));
        assert_eq!(view.scroll(), 0);
    }

    #[test]
    fn test_focus_cycles_over_clickable_tiles() {
        let mut view = PageView::mount(Route::NotFound, 100, 30, T0);
        let first = view.focus_next(T0).map(|t| t.label);
        assert_eq!(first, Some("Return to Home"));
        // The only clickable tile wraps onto itself
        assert_eq!(view.focus_next(T0).map(|t| t.label), first);
        assert_eq!(view.activate_focused(), Some(Target::route(Route::Home)));
    }

    #[test]
    fn test_decorative_buttons_take_no_focus() {
        let mut view = PageView::mount(Route::RecentThreats, 120, 30, T0);
        let mut seen = Vec::new();
        for _ in 0..view.layout().tiles.len() {
            if let Some(tile) = view.focus_next(T0) {
                seen.push(tile.label);
            }
        }
        assert!(!seen.contains(&"View Security Alerts"));
        assert!(!seen.contains(&"Contact Security Team"));
    }

    #[test]
    fn test_focus_scrolls_into_view() {
        let mut view = PageView::mount(Route::Home, 120, 24, T0);
        for _ in 0..8 {
            view.focus_next(T0);
        }
        let rect = view.focused_tile().unwrap().rect;
        assert!(rect.y >= view.scroll());
        assert!(rect.bottom() <= view.scroll() + view.viewport_height());
    }

    #[test]
    fn test_hover_targets() {
        let view = PageView::mount(Route::Home, 120, 40, T0);
        let button = &view.layout().tiles[0];
        assert!(view.hover_target(button.rect.x, button.rect.y).is_interactive());
        assert!(!view.hover_target(0, 0).is_interactive());
    }
}
