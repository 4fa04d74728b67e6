use cybercell_content::{FOOTER_CREDIT, FOOTER_TEAM, Page, page};
use cybercell_engine::card::{self, BORDER_COLS};
use cybercell_engine::layout::{PageLayout, Tile, TileKind};
use cybercell_engine::{NavShell, resolve_address};
use cybercell_runtime::LayoutShell;
use cybercell_types::{AddressingMode, Location, Target};

use crate::presentation::view_models::{
    FooterViewModel, HeroViewModel, LineViewModel, NavLinkViewModel, PageViewModel,
    SectionViewModel, TileKindViewModel, TileViewModel,
};

/// Resolve an address and lay its page out at `width`, fully revealed.
pub fn present_address(input: &str, mode: AddressingMode, width: u16) -> PageViewModel {
    let (route, location) = resolve_address(input, mode);
    let page = page(route);
    let layout = PageLayout::compute(page, width);
    present_layout(page, &layout, &location, mode)
}

/// Page view model from an existing layout. Reveal progress starts settled
/// and focus/hover cleared; live frontends overwrite them.
pub fn present_layout(
    page: &'static Page,
    layout: &PageLayout,
    location: &Location,
    mode: AddressingMode,
) -> PageViewModel {
    let nav = NavShell::new()
        .entries(&location.path)
        .into_iter()
        .map(|entry| NavLinkViewModel {
            name: entry.item.name,
            href: Location::new(entry.item.path).href(mode),
            active: entry.active,
        })
        .collect();

    let hero = &page.hero;
    let hero_vm = HeroViewModel {
        badge: hero.badge,
        headline_before: hero.headline.before,
        headline_accent: hero.headline.accent,
        headline_after: hero.headline.after,
        tagline: layout.hero.tagline.clone(),
        gradient: hero.gradient,
        image: hero.image.map(|image| image.path()),
        rect: layout.hero.rect,
        text_rect: layout.hero.text,
        reveal: 1.0,
    };

    let sections = layout
        .sections
        .iter()
        .map(|section_layout| {
            let section = &page.sections[section_layout.index];
            SectionViewModel {
                id: section.id,
                anchor: section.anchor,
                heading: section.heading,
                blurb: section_layout.blurb.clone(),
                rect: section_layout.rect,
                header_rect: section_layout.header,
                card_count: section.body.card_count(),
                reveal: 1.0,
            }
        })
        .collect();

    let tiles = layout
        .tiles
        .iter()
        .map(|tile| present_tile(page, tile, mode))
        .collect();

    PageViewModel {
        route: page.route,
        title: page.route.title(),
        path: location.path.clone(),
        href: location.href(mode),
        anchor: location.anchor.clone(),
        anchor_found: location
            .anchor
            .as_deref()
            .map(|anchor| layout.anchor_offset(anchor).is_some()),
        width: layout.width,
        height: layout.height,
        breakpoint: layout.breakpoint,
        nav,
        hero: hero_vm,
        sections,
        tiles,
        footer: FooterViewModel {
            credit: FOOTER_CREDIT,
            team: FOOTER_TEAM,
            href: LayoutShell::footer_location().href(mode),
        },
    }
}

fn present_tile(page: &'static Page, tile: &Tile, mode: AddressingMode) -> TileViewModel {
    let (kind, section, content) = match tile.kind {
        TileKind::Card { section, item } => (
            TileKindViewModel::Card,
            Some(section),
            page.sections
                .get(section)
                .and_then(|s| card::card_content(&s.body, item)),
        ),
        TileKind::QuickAccess { item } => (
            TileKindViewModel::QuickAccess,
            None,
            page.hero.quick_access.get(item).map(card::quick_access_content),
        ),
        TileKind::Action {
            section, primary, ..
        } => (TileKindViewModel::Button { primary }, section, None),
    };

    let inner_width = tile.rect.width.saturating_sub(BORDER_COLS);
    let (icon, badge, gradient, lines) = match content {
        Some(content) => (
            content.icon,
            content.badge,
            content.gradient,
            content
                .lines(inner_width)
                .into_iter()
                .map(|(role, text)| LineViewModel { role, text })
                .collect(),
        ),
        None => (None, None, None, Vec::new()),
    };

    TileViewModel {
        kind,
        section,
        label: tile.label,
        rect: tile.rect,
        featured: tile.featured,
        icon,
        badge,
        gradient,
        lines,
        href: target_href(tile.target, mode),
        reveal: 1.0,
        focused: false,
        hovered: false,
    }
}

/// Address a target leads to, written for the addressing mode.
pub fn target_href(target: Target, mode: AddressingMode) -> Option<String> {
    match target {
        Target::Route { route, anchor } => Some(Location::for_route(route, anchor).href(mode)),
        Target::External { url } => Some(url.to_string()),
        Target::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_engine::card::TextRole;
    use cybercell_types::Route;

    #[test]
    fn test_mitigation_page_cards() {
        let vm = present_address("/mitigation", AddressingMode::Path, 120);
        assert_eq!(vm.route, Route::Mitigation);
        assert_eq!(vm.section_tiles(0).count(), 6);
        assert_eq!(vm.section_tiles(1).count(), 3);
        assert!(vm.nav.iter().any(|link| link.active && link.name == "Mitigation"));
    }

    #[test]
    fn test_unknown_path_presents_not_found() {
        let vm = present_address("/nowhere", AddressingMode::Path, 100);
        assert_eq!(vm.route, Route::NotFound);
        assert_eq!(vm.path, "/nowhere");
        assert!(vm.nav.iter().all(|link| !link.active));
        let button = &vm.tiles[0];
        assert_eq!(button.label, "Return to Home");
        assert_eq!(button.href.as_deref(), Some("/"));
    }

    #[test]
    fn test_hrefs_follow_mode() {
        let vm = present_address("#/", AddressingMode::Fragment, 120);
        assert_eq!(vm.href, "#/");
        assert_eq!(vm.footer.href, "#/contact");
        let references = vm.nav.iter().find(|l| l.name == "References").unwrap();
        assert_eq!(references.href, "#/references");
    }

    #[test]
    fn test_card_lines_fit_inside_border() {
        let vm = present_address("/references", AddressingMode::Path, 90);
        for tile in &vm.tiles {
            let inner = tile.rect.width.saturating_sub(BORDER_COLS) as usize;
            for line in &tile.lines {
                assert!(line.text.chars().count() <= inner, "{}: {}", tile.label, line.text);
            }
        }
    }

    #[test]
    fn test_anchor_reported() {
        let vm = present_address("/mitigation#frameworks", AddressingMode::Path, 120);
        assert_eq!(vm.anchor.as_deref(), Some("frameworks"));
        assert_eq!(vm.anchor_found, Some(true));

        let vm = present_address("/mitigation#cloud-security", AddressingMode::Path, 120);
        assert_eq!(vm.anchor_found, Some(false));
    }

    #[test]
    fn test_featured_article_headline() {
        let vm = present_address("/", AddressingMode::Path, 140);
        let featured = vm.tiles.iter().find(|t| t.featured).unwrap();
        assert_eq!(featured.lines[0].role, TextRole::Headline);
    }
}
