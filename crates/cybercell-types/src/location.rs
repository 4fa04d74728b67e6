use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::route::Route;

/// How routes are addressed in a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    /// `/mitigation`, for hosts with server-side path routing
    #[default]
    Path,
    /// `#/mitigation`, for static hosts without path routing
    Fragment,
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressingMode::Path => write!(f, "path"),
            AddressingMode::Fragment => write!(f, "fragment"),
        }
    }
}

impl FromStr for AddressingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "path" | "browser" => Ok(AddressingMode::Path),
            "fragment" | "hash" => Ok(AddressingMode::Fragment),
            other => Err(Error::UnknownAddressingMode(other.to_string())),
        }
    }
}

/// A normalized in-site location: route path plus optional section anchor.
///
/// Paths are normalized once here so every consumer can compare them with
/// plain string equality: an empty path becomes `/`, a trailing `/` is
/// dropped and the query string is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Location {
    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            anchor: None,
        }
    }

    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            anchor: None,
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        let anchor = anchor.into();
        self.anchor = if anchor.is_empty() { None } else { Some(anchor) };
        self
    }

    /// Location of a route's canonical path. `NotFound` maps to `/404`,
    /// which no table entry claims.
    pub fn for_route(route: Route, anchor: Option<&str>) -> Self {
        let location = Self::new(route.path().unwrap_or("/404"));
        match anchor {
            Some(anchor) => location.with_anchor(anchor),
            None => location,
        }
    }

    /// Parse user input or a full URL.
    ///
    /// Accepts `https://host/mitigation#strategies`, `/mitigation`,
    /// `https://host/#/mitigation` and `#/mitigation`. In fragment mode the
    /// route lives after the first `#` and a second `#` starts the anchor;
    /// input without any `#` is read as a bare route path.
    pub fn parse(input: &str, mode: AddressingMode) -> Self {
        let rest = strip_origin(input.trim());

        let (path_part, anchor) = match mode {
            AddressingMode::Path => split_anchor(rest),
            AddressingMode::Fragment => match rest.split_once('#') {
                Some((_, hash)) => split_anchor(hash),
                None => split_anchor(rest),
            },
        };

        let path = path_part.split('?').next().unwrap_or_default();
        let location = Self::new(path);
        match anchor {
            Some(anchor) => location.with_anchor(anchor),
            None => location,
        }
    }

    /// Render as a link target for the given addressing mode.
    pub fn href(&self, mode: AddressingMode) -> String {
        let prefix = match mode {
            AddressingMode::Path => "",
            AddressingMode::Fragment => "#",
        };
        match &self.anchor {
            Some(anchor) => format!("{}{}#{}", prefix, self.path, anchor),
            None => format!("{}{}", prefix, self.path),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.href(AddressingMode::Path))
    }
}

fn strip_origin(input: &str) -> &str {
    let Some((_, after_scheme)) = input.split_once("://") else {
        return input;
    };
    match after_scheme.find(['/', '#', '?']) {
        Some(idx) => &after_scheme[idx..],
        None => "/",
    }
}

fn split_anchor(input: &str) -> (&str, Option<&str>) {
    match input.split_once('#') {
        Some((path, anchor)) if !anchor.is_empty() => (path, Some(anchor)),
        Some((path, _)) => (path, None),
        None => (input, None),
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_mode() {
        let loc = Location::parse("/mitigation#strategies", AddressingMode::Path);
        assert_eq!(loc.path, "/mitigation");
        assert_eq!(loc.anchor.as_deref(), Some("strategies"));
    }

    #[test]
    fn test_parse_full_url_path_mode() {
        let loc = Location::parse(
            "https://cybercell.example/recent-threats?ref=mail",
            AddressingMode::Path,
        );
        assert_eq!(loc, Location::new("/recent-threats"));

        let bare_host = Location::parse("https://cybercell.example", AddressingMode::Path);
        assert_eq!(bare_host, Location::root());
    }

    #[test]
    fn test_parse_fragment_mode() {
        let loc = Location::parse("https://cybercell.example/#/references", AddressingMode::Fragment);
        assert_eq!(loc, Location::new("/references"));

        let anchored = Location::parse("#/mitigation#strategies", AddressingMode::Fragment);
        assert_eq!(anchored.path, "/mitigation");
        assert_eq!(anchored.anchor.as_deref(), Some("strategies"));
    }

    #[test]
    fn test_fragment_mode_ignores_document_path() {
        let loc = Location::parse("https://cybercell.example/app/#/contact", AddressingMode::Fragment);
        assert_eq!(loc.path, "/contact");
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Location::new("").path, "/");
        assert_eq!(Location::new("/").path, "/");
        assert_eq!(Location::new("mitigation/").path, "/mitigation");
        assert_eq!(Location::new("/references///").path, "/references");
    }

    #[test]
    fn test_empty_anchor_is_dropped() {
        let loc = Location::parse("/references#", AddressingMode::Path);
        assert_eq!(loc.anchor, None);
    }

    #[test]
    fn test_href_by_mode() {
        let loc = Location::new("/mitigation").with_anchor("frameworks");
        assert_eq!(loc.href(AddressingMode::Path), "/mitigation#frameworks");
        assert_eq!(loc.href(AddressingMode::Fragment), "#/mitigation#frameworks");
    }

    #[test]
    fn test_href_parse_agree() {
        for mode in [AddressingMode::Path, AddressingMode::Fragment] {
            let loc = Location::new("/cyber-awareness").with_anchor("basics");
            assert_eq!(Location::parse(&loc.href(mode), mode), loc);
        }
    }

    #[test]
    fn test_addressing_mode_from_str() {
        assert_eq!("hash".parse::<AddressingMode>().unwrap(), AddressingMode::Fragment);
        assert_eq!("Path".parse::<AddressingMode>().unwrap(), AddressingMode::Path);
        assert!("memory".parse::<AddressingMode>().is_err());
    }

    #[test]
    fn test_for_route() {
        assert_eq!(Location::for_route(Route::Home, None), Location::root());
        assert_eq!(Location::for_route(Route::NotFound, None).path, "/404");
        let anchored = Location::for_route(Route::References, Some("frameworks"));
        assert_eq!(anchored.href(AddressingMode::Path), "/references#frameworks");
    }
}
