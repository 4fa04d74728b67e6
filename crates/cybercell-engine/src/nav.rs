use cybercell_types::{Location, NAV_ITEMS, NavItem};
use serde::Serialize;
use tracing::debug;

/// A nav link together with whether it matches the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub item: NavItem,
    pub active: bool,
}

/// Request to move to a path, produced by clicking a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavRequest {
    pub location: Location,
}

impl NavRequest {
    pub fn to(path: &str) -> Self {
        Self {
            location: Location::new(path),
        }
    }
}

/// Navigation bar state. The only thing it owns is the mobile menu flag;
/// the active link is derived from the current path on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavShell {
    menu_open: bool,
}

impl NavShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &'static [NavItem] {
        &NAV_ITEMS
    }

    /// Every link with its active flag. Matching is exact string equality
    /// on the normalized path, so `/` is active only on the home page.
    pub fn entries(&self, current_path: &str) -> Vec<NavEntry> {
        NAV_ITEMS
            .iter()
            .map(|item| NavEntry {
                item: *item,
                active: item.path == current_path,
            })
            .collect()
    }

    pub fn active_index(&self, current_path: &str) -> Option<usize> {
        NAV_ITEMS.iter().position(|item| item.path == current_path)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Follow the link at `index`. The menu closes whether or not the index
    /// names a link.
    pub fn select(&mut self, index: usize) -> Option<NavRequest> {
        self.close_menu();
        NAV_ITEMS.get(index).map(|item| NavRequest::to(item.path))
    }

    /// The brand logo always leads home.
    pub fn select_logo(&mut self) -> NavRequest {
        self.close_menu();
        NavRequest::to("/")
    }
}
