use serde::Serialize;
use std::fmt;

use cybercell_types::{AddressingMode, Route};

use super::{CreateView, ViewMode};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RouteListViewModel {
    pub mode: AddressingMode,
    pub routes: Vec<RouteEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct RouteEntryViewModel {
    pub route: Route,
    pub title: &'static str,
    pub path: &'static str,
    pub href: String,
    /// Label in the navigation bar, when the route has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_label: Option<&'static str>,
    pub sections: usize,
    pub cards: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub anchors: Vec<&'static str>,
}

/// Where one address lands.
#[derive(Debug, Serialize)]
pub struct ResolveViewModel {
    pub input: String,
    pub mode: AddressingMode,
    pub route: Route,
    pub title: &'static str,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor_found: Option<bool>,
    pub href: String,
    /// Set when resolving a category label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub fallback: bool,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for RouteListViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::route::RouteListView;
        Box::new(RouteListView::new(self, mode))
    }
}

impl CreateView for ResolveViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::route::ResolveView;
        Box::new(ResolveView::new(self, mode))
    }
}

// --------------------------------------------------------
// Display Trait (default rendering)
// --------------------------------------------------------

impl fmt::Display for RouteListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}

impl fmt::Display for ResolveViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
