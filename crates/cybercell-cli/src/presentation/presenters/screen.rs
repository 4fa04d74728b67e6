use cybercell_content::BRAND;
use cybercell_engine::layout::Rect;
use cybercell_runtime::{App, Hotspot, ShellAction, ToastLevel};

use super::page::present_layout;
use crate::presentation::view_models::{
    CursorViewModel, MenuViewModel, NavBarViewModel, NavSlotViewModel, ScreenViewModel,
    StatusBarViewModel, StatusLevel, ToastViewModel, TooltipViewModel,
};

/// Snapshot of the whole browser screen.
///
/// `pointer` is the last mouse position the frontend saw and `input` the
/// address being typed, both UI state the app does not track.
pub fn present_screen(app: &App, pointer: Option<(u16, u16)>, input: Option<&str>) -> ScreenViewModel {
    let geometry = app.geometry();
    let view = app.view();
    let router = app.router();
    let now = app.now();

    let mut page = present_layout(view.page(), view.layout(), router.current(), router.mode());
    page.hero.reveal = view.hero_reveal().progress(now);
    for (index, section) in page.sections.iter_mut().enumerate() {
        section.reveal = view.section_reveal(index).map_or(1.0, |r| r.progress(now));
    }

    let hovered_tile = pointer
        .filter(|(x, y)| geometry.viewport.contains(*x, *y))
        .and_then(|(x, y)| view.hit(x, y - geometry.viewport.y))
        .map(|(index, _)| index);
    for (index, tile) in page.tiles.iter_mut().enumerate() {
        tile.reveal = view.tile_reveal(index).map_or(1.0, |r| r.progress(now));
        tile.focused = view.focus() == Some(index);
        tile.hovered = hovered_tile == Some(index);
    }

    // Chrome
    let hovered_spot = pointer.and_then(|(x, y)| geometry.hit(x, y)).map(|h| h.action);
    let active = app.shell().nav().active_index(&router.current().path);
    let menu_open = app.shell().nav().is_menu_open();
    let slot = |spot: &Hotspot| NavSlotViewModel {
        label: spot.label.clone(),
        rect: spot.rect,
        active: match spot.action {
            ShellAction::NavLink(i) | ShellAction::MenuLink(i) => active == Some(i),
            ShellAction::MenuButton => menu_open,
            _ => false,
        },
        hovered: hovered_spot == Some(spot.action),
    };

    let mut logo = None;
    let mut links = Vec::new();
    let mut menu_button = None;
    let mut menu_links = Vec::new();
    for spot in &geometry.hotspots() {
        match spot.action {
            ShellAction::Logo => logo = Some(slot(spot)),
            ShellAction::NavLink(_) => links.push(slot(spot)),
            ShellAction::MenuButton => menu_button = Some(slot(spot)),
            ShellAction::MenuLink(_) => menu_links.push(slot(spot)),
            ShellAction::FooterLink => {}
        }
    }
    let logo = logo.unwrap_or_else(|| NavSlotViewModel {
        label: BRAND.to_string(),
        rect: Rect::default(),
        active: false,
        hovered: false,
    });

    let cursor = app.shell().cursor().map(|snapshot| {
        let (gx, gy) = snapshot.glow.center();
        let (tx, ty) = snapshot.trail.center();
        CursorViewModel {
            glow: (to_cell(gx), to_cell(gy)),
            trail: (to_cell(tx), to_cell(ty)),
            hovering: snapshot.hovering,
        }
    });

    let context = app.context();
    let toasts = context
        .toaster
        .visible()
        .chain(context.sonner.visible())
        .map(|toast| ToastViewModel {
            message: toast.message.clone(),
            level: match toast.level {
                ToastLevel::Info => StatusLevel::Info,
                ToastLevel::Warning => StatusLevel::Warning,
            },
        })
        .collect();

    let tooltip = pointer.and_then(|(x, y)| {
        context.tooltips.visible(now).map(|label| TooltipViewModel {
            label: label.to_string(),
            x,
            y: y.saturating_add(1),
        })
    });

    ScreenViewModel {
        width: geometry.width,
        height: geometry.height,
        nav: NavBarViewModel {
            rect: geometry.nav,
            logo,
            links,
            menu_button,
        },
        menu: geometry.menu.map(|rect| MenuViewModel {
            rect,
            links: menu_links,
        }),
        footer: page.footer.clone(),
        page,
        viewport: geometry.viewport,
        scroll: view.scroll(),
        max_scroll: view.max_scroll(),
        footer_rect: geometry.footer,
        status: StatusBarViewModel {
            rect: geometry.status,
            address: app.address(),
            mode: router.mode(),
            title: view.route().title(),
            can_go_back: router.can_go_back(),
            can_go_forward: router.can_go_forward(),
            input: input.map(str::to_string),
        },
        cursor,
        toasts,
        tooltip,
    }
}

fn to_cell(value: f32) -> u16 {
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}
