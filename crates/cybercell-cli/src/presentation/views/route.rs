use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{ResolveViewModel, RouteListViewModel, ViewMode};

// --------------------------------------------------------
// Route List View
// --------------------------------------------------------

pub struct RouteListView<'a> {
    data: &'a RouteListViewModel,
    mode: ViewMode,
}

impl<'a> RouteListView<'a> {
    pub fn new(data: &'a RouteListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for RouteListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Addressing: {}", self.data.mode)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<20} {:<18} {:<22} {:<8} {:<6} ANCHORS",
            "PATH", "TITLE", "HREF", "SECTIONS", "CARDS"
        )?;
        writeln!(f, "{}", "-".repeat(96))?;

        for route in &self.data.routes {
            let path = format!("{:<20}", route.path);
            let path = if self.mode.is_color() {
                path.cyan().to_string()
            } else {
                path
            };
            let anchors = if route.anchors.is_empty() {
                "-".to_string()
            } else {
                route.anchors.join(", ")
            };
            writeln!(
                f,
                "{} {:<18} {:<22} {:<8} {:<6} {}",
                path, route.title, route.href, route.sections, route.cards, anchors
            )?;
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Resolve View
// --------------------------------------------------------

pub struct ResolveView<'a> {
    data: &'a ResolveViewModel,
    mode: ViewMode,
}

impl<'a> ResolveView<'a> {
    pub fn new(data: &'a ResolveViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ResolveView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let data = self.data;
        match &data.category {
            Some(category) => writeln!(f, "Category: {category}")?,
            None => writeln!(f, "Input:    {}", data.input)?,
        }
        let title = if self.mode.is_color() {
            data.title.bold().to_string()
        } else {
            data.title.to_string()
        };
        writeln!(f, "Route:    {title}")?;
        writeln!(f, "Path:     {}", data.path)?;
        writeln!(f, "Href:     {} ({})", data.href, data.mode)?;
        if let Some(anchor) = &data.anchor {
            let status = match data.anchor_found {
                Some(true) => "found",
                _ => "not on page, stays at top",
            };
            writeln!(f, "Anchor:   #{anchor} ({status})")?;
        }
        if data.fallback {
            writeln!(f, "No page for this category; falling back to home.")?;
        }
        Ok(())
    }
}
