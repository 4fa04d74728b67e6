use serde::Serialize;
use std::fmt;

use cybercell_engine::card::{Badge, TextRole};
use cybercell_engine::layout::{Breakpoint, Rect};
use cybercell_types::{Gradient, Icon, Route};

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// One page laid out at a fixed width. Rects are absolute page cells.
#[derive(Debug, Clone, Serialize)]
pub struct PageViewModel {
    pub route: Route,
    pub title: &'static str,
    pub path: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    /// Whether the anchor names a section on this page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_found: Option<bool>,
    pub width: u16,
    pub height: u16,
    pub breakpoint: Breakpoint,
    pub nav: Vec<NavLinkViewModel>,
    pub hero: HeroViewModel,
    pub sections: Vec<SectionViewModel>,
    pub tiles: Vec<TileViewModel>,
    pub footer: FooterViewModel,
}

impl PageViewModel {
    pub fn section_tiles(&self, index: usize) -> impl Iterator<Item = &TileViewModel> {
        self.tiles
            .iter()
            .filter(move |t| t.kind == TileKindViewModel::Card && t.section == Some(index))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLinkViewModel {
    pub name: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub headline_before: &'static str,
    pub headline_accent: &'static str,
    pub headline_after: &'static str,
    pub tagline: Vec<String>,
    pub gradient: Gradient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    pub rect: Rect,
    pub text_rect: Rect,
    /// Reveal progress, 0.0 hidden to 1.0 settled
    #[serde(skip)]
    pub reveal: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionViewModel {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blurb: Vec<String>,
    pub rect: Rect,
    pub header_rect: Rect,
    pub card_count: usize,
    #[serde(skip)]
    pub reveal: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKindViewModel {
    Card,
    QuickAccess,
    Button { primary: bool },
}

#[derive(Debug, Clone, Serialize)]
pub struct LineViewModel {
    pub role: TextRole,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TileViewModel {
    pub kind: TileKindViewModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<usize>,
    pub label: &'static str,
    pub rect: Rect,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineViewModel>,
    /// Where a click leads, in the current addressing mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip)]
    pub reveal: f32,
    #[serde(skip)]
    pub focused: bool,
    #[serde(skip)]
    pub hovered: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterViewModel {
    pub credit: &'static str,
    pub team: &'static str,
    pub href: String,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PageViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::page::PageTextView;
        Box::new(PageTextView::new(self, mode))
    }
}

impl fmt::Display for PageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
