//! The layout shell: background layers, the navigation bar, the footer and
//! the optional cursor-follow effect around whatever page is mounted.

use std::time::Duration;

use cybercell_content::{BRAND, FOOTER_CREDIT, FOOTER_TEAM};
use cybercell_engine::layout::{Breakpoint, Rect};
use cybercell_engine::{CursorEffect, CursorSnapshot, EventBus, NavShell};
use cybercell_types::{Location, NAV_ITEMS, Route};
use serde::Serialize;
use tracing::debug;

pub const NAV_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const STATUS_HEIGHT: u16 = 1;

const LOGO_GLYPH: &str = "◆ ";
const MENU_GLYPH: &str = "☰";
const EDGE: u16 = 2;

/// Fixed decorative layers behind every page, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundLayer {
    CyberGrid,
    HeroGradient,
}

impl BackgroundLayer {
    pub const ALL: [BackgroundLayer; 2] = [BackgroundLayer::CyberGrid, BackgroundLayer::HeroGradient];

    /// Glyph the grid layer puts at a screen cell, if any.
    pub fn grid_glyph(x: u16, y: u16) -> Option<char> {
        match (x % 8, y % 4) {
            (0, 0) => Some('┼'),
            (0, _) => Some('╎'),
            (_, 0) => Some('╌'),
            _ => None,
        }
    }
}

/// What a click on the shell chrome does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "index", rename_all = "snake_case")]
pub enum ShellAction {
    Logo,
    NavLink(usize),
    MenuButton,
    MenuLink(usize),
    FooterLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotspot {
    pub rect: Rect,
    pub action: ShellAction,
    pub label: String,
}

/// Screen regions for one terminal size and menu state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellGeometry {
    pub width: u16,
    pub height: u16,
    pub breakpoint: Breakpoint,
    /// Nav links sit in the bar; otherwise they live in the menu
    pub links_inline: bool,
    pub nav: Rect,
    pub menu: Option<Rect>,
    pub viewport: Rect,
    pub footer: Rect,
    pub status: Rect,
}

impl ShellGeometry {
    pub fn compute(width: u16, height: u16, menu_open: bool) -> Self {
        let breakpoint = Breakpoint::for_width(width);
        let links_inline = !breakpoint.collapses_nav() && inline_links_start(width).is_some();

        let nav = Rect::new(0, 0, width, NAV_HEIGHT.min(height));
        let menu = (!links_inline && menu_open).then(|| {
            let rows = (NAV_ITEMS.len() as u16 + 2).min(height.saturating_sub(nav.bottom()));
            Rect::new(0, nav.bottom(), width, rows)
        });
        let top = menu.map_or(nav.bottom(), |m| m.bottom());

        let status = Rect::new(0, height.saturating_sub(STATUS_HEIGHT), width, STATUS_HEIGHT.min(height));
        let footer_y = status.y.saturating_sub(FOOTER_HEIGHT).max(top);
        let footer = Rect::new(0, footer_y, width, status.y.saturating_sub(footer_y));
        let viewport = Rect::new(0, top, width, footer.y.saturating_sub(top));

        Self {
            width,
            height,
            breakpoint,
            links_inline,
            nav,
            menu,
            viewport,
            footer,
            status,
        }
    }

    /// Clickable chrome regions, in drawing order.
    pub fn hotspots(&self) -> Vec<Hotspot> {
        let mut spots = Vec::new();
        let row = self.nav.y + 1;

        spots.push(Hotspot {
            rect: Rect::new(EDGE, row, logo_width(), 1),
            action: ShellAction::Logo,
            label: format!("{LOGO_GLYPH}{BRAND}"),
        });

        if self.links_inline {
            let mut x = inline_links_start(self.width).unwrap_or(EDGE);
            for (index, item) in NAV_ITEMS.iter().enumerate() {
                let width = link_width(item.name);
                spots.push(Hotspot {
                    rect: Rect::new(x, row, width, 1),
                    action: ShellAction::NavLink(index),
                    label: item.name.to_string(),
                });
                x += width + 1;
            }
        } else {
            spots.push(Hotspot {
                rect: Rect::new(self.width.saturating_sub(EDGE + 3), row, 3, 1),
                action: ShellAction::MenuButton,
                label: MENU_GLYPH.to_string(),
            });
        }

        if let Some(menu) = self.menu {
            for (index, item) in NAV_ITEMS.iter().enumerate() {
                let y = menu.y + 1 + index as u16;
                if y + 1 >= menu.bottom() {
                    break;
                }
                spots.push(Hotspot {
                    rect: Rect::new(EDGE, y, menu.width.saturating_sub(EDGE * 2), 1),
                    action: ShellAction::MenuLink(index),
                    label: item.name.to_string(),
                });
            }
        }

        if self.footer.height > 0 {
            let (team_x, _) = footer_columns(self.width);
            spots.push(Hotspot {
                rect: Rect::new(team_x, self.footer.y, FOOTER_TEAM.chars().count() as u16, 1),
                action: ShellAction::FooterLink,
                label: FOOTER_TEAM.to_string(),
            });
        }
        spots
    }

    pub fn hit(&self, x: u16, y: u16) -> Option<Hotspot> {
        self.hotspots().into_iter().find(|h| h.rect.contains(x, y))
    }
}

/// Footer credit line and the column where the team link starts.
pub fn footer_columns(width: u16) -> (u16, String) {
    let text = format!("{FOOTER_CREDIT} {FOOTER_TEAM}");
    let start = width.saturating_sub(text.chars().count() as u16) / 2;
    let team_x = start + FOOTER_CREDIT.chars().count() as u16 + 1;
    (team_x, text)
}

fn logo_width() -> u16 {
    (LOGO_GLYPH.chars().count() + BRAND.chars().count()) as u16
}

fn link_width(name: &str) -> u16 {
    name.chars().count() as u16 + 2
}

/// First column of the inline links when they fit beside the logo.
fn inline_links_start(width: u16) -> Option<u16> {
    let total: u16 = NAV_ITEMS.iter().map(|i| link_width(i.name)).sum::<u16>()
        + (NAV_ITEMS.len() as u16 - 1);
    let start = width.checked_sub(EDGE + total)?;
    (start >= EDGE + logo_width() + 2).then_some(start)
}

/// The mounted shell. Owns the one navigation bar for its lifetime and,
/// when enabled, the cursor effect.
pub struct LayoutShell {
    nav: NavShell,
    cursor: Option<CursorEffect>,
}

impl LayoutShell {
    pub fn mount(bus: &EventBus, cursor_effect: bool) -> Self {
        let cursor = cursor_effect.then(|| CursorEffect::mount(bus));
        debug!(cursor_effect, "layout shell mounted");
        Self {
            nav: NavShell::new(),
            cursor,
        }
    }

    /// Tear down the shell, removing the cursor effect's listeners.
    pub fn unmount(self) {
        debug!("layout shell unmounted");
    }

    pub fn background_layers(&self) -> [BackgroundLayer; 2] {
        BackgroundLayer::ALL
    }

    pub fn nav(&self) -> &NavShell {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavShell {
        &mut self.nav
    }

    pub fn geometry(&self, width: u16, height: u16) -> ShellGeometry {
        ShellGeometry::compute(width, height, self.nav.is_menu_open())
    }

    pub fn has_cursor_effect(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn cursor(&self) -> Option<CursorSnapshot> {
        self.cursor.as_ref().map(CursorEffect::snapshot)
    }

    pub fn step(&self, dt: Duration) {
        if let Some(cursor) = &self.cursor {
            cursor.step(dt);
        }
    }

    /// Where the footer link leads.
    pub fn footer_location() -> Location {
        Location::for_route(Route::Contact, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_engine::PointerEvent;

    #[test]
    fn test_geometry_stacks_regions() {
        let g = ShellGeometry::compute(140, 40, false);
        assert!(g.links_inline);
        assert_eq!(g.menu, None);
        assert_eq!(g.viewport.y, NAV_HEIGHT);
        assert_eq!(g.viewport.bottom(), g.footer.y);
        assert_eq!(g.footer.bottom(), g.status.y);
        assert_eq!(g.status.bottom(), 40);
    }

    #[test]
    fn test_narrow_geometry_collapses_links() {
        let closed = ShellGeometry::compute(60, 30, false);
        assert!(!closed.links_inline);
        assert!(closed.hotspots().iter().any(|h| h.action == ShellAction::MenuButton));
        assert!(!closed.hotspots().iter().any(|h| matches!(h.action, ShellAction::NavLink(_))));

        let open = ShellGeometry::compute(60, 30, true);
        let menu = open.menu.unwrap();
        assert_eq!(menu.height, NAV_ITEMS.len() as u16 + 2);
        assert_eq!(open.viewport.y, menu.bottom());
        let links = open
            .hotspots()
            .into_iter()
            .filter(|h| matches!(h.action, ShellAction::MenuLink(_)))
            .count();
        assert_eq!(links, NAV_ITEMS.len());
    }

    #[test]
    fn test_menu_flag_ignored_when_links_inline() {
        let g = ShellGeometry::compute(140, 40, true);
        assert_eq!(g.menu, None);
    }

    #[test]
    fn test_hotspots_hit() {
        let g = ShellGeometry::compute(140, 40, false);
        let link = g
            .hotspots()
            .into_iter()
            .find(|h| h.action == ShellAction::NavLink(3))
            .unwrap();
        assert_eq!(link.label, "Mitigation");
        let hit = g.hit(link.rect.x + 1, link.rect.y).unwrap();
        assert_eq!(hit.action, ShellAction::NavLink(3));

        assert_eq!(g.hit(EDGE, 1).unwrap().action, ShellAction::Logo);
        let (team_x, text) = footer_columns(140);
        assert_eq!(text, "Developed by Pynevera");
        assert_eq!(g.hit(team_x, g.footer.y).unwrap().action, ShellAction::FooterLink);
    }

    #[test]
    fn test_shell_with_cursor_installs_listeners() {
        let bus = EventBus::new();
        let shell = LayoutShell::mount(&bus, true);
        assert_eq!(bus.listener_count(), 2);
        bus.dispatch(&PointerEvent::Move { x: 10.0, y: 5.0 });
        assert_eq!(shell.cursor().unwrap().pointer, (10.0, 5.0));

        shell.unmount();
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn test_shell_without_cursor() {
        let bus = EventBus::new();
        let shell = LayoutShell::mount(&bus, false);
        assert_eq!(bus.listener_count(), 0);
        assert!(shell.cursor().is_none());
        assert_eq!(shell.background_layers().len(), 2);
    }
}
