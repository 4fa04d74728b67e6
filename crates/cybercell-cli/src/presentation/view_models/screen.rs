//! Screen snapshot for the interactive browser.
//!
//! Built fresh from the app state on every frame. Rects are screen cells
//! except the page, whose rects stay in page space and are shifted by
//! `scroll` when drawn.

use serde::Serialize;

use cybercell_engine::layout::Rect;
use cybercell_types::AddressingMode;

use super::common::StatusLevel;
use super::page::{FooterViewModel, PageViewModel};

#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub width: u16,
    pub height: u16,
    pub nav: NavBarViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuViewModel>,
    pub page: PageViewModel,
    pub viewport: Rect,
    pub scroll: u16,
    pub max_scroll: u16,
    pub footer_rect: Rect,
    pub footer: FooterViewModel,
    pub status: StatusBarViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorViewModel>,
    pub toasts: Vec<ToastViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavSlotViewModel {
    pub label: String,
    pub rect: Rect,
    pub active: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavBarViewModel {
    pub rect: Rect,
    pub logo: NavSlotViewModel,
    /// Inline links; empty when collapsed into the menu
    pub links: Vec<NavSlotViewModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_button: Option<NavSlotViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuViewModel {
    pub rect: Rect,
    pub links: Vec<NavSlotViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub rect: Rect,
    pub address: String,
    pub mode: AddressingMode,
    pub title: &'static str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Address being typed, while the address bar is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

/// Cursor markers in screen cells.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CursorViewModel {
    pub glow: (u16, u16),
    pub trail: (u16, u16),
    pub hovering: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastViewModel {
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct TooltipViewModel {
    pub label: String,
    pub x: u16,
    pub y: u16,
}
