use cybercell_types::{AddressingMode, Location, Route};
use serde::Serialize;
use tracing::{debug, warn};

/// Map a normalized path to its route. Matching is exact; anything the
/// table does not name is `NotFound`.
pub fn resolve(path: &str) -> Route {
    Route::DEFINED
        .into_iter()
        .find(|route| route.path() == Some(path))
        .unwrap_or(Route::NotFound)
}

/// Router behavior fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouterConfig {
    pub mode: AddressingMode,
    /// Jump to the top of the page whenever the path changes
    pub scroll_reset: bool,
}

impl RouterConfig {
    /// Fragment addressing resets scroll on path change; path addressing
    /// keeps the offset.
    pub fn for_mode(mode: AddressingMode) -> Self {
        Self {
            mode,
            scroll_reset: mode == AddressingMode::Fragment,
        }
    }

    /// Override the mode default when set.
    pub fn with_scroll_reset(mut self, scroll_reset: Option<bool>) -> Self {
        if let Some(reset) = scroll_reset {
            self.scroll_reset = reset;
        }
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::for_mode(AddressingMode::default())
    }
}

/// Side effects a view applies after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "anchor", rename_all = "snake_case")]
pub enum RouterEffect {
    ResetScroll,
    ScrollToAnchor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: Route,
    pub to: Route,
    pub location: Location,
    pub path_changed: bool,
    pub effects: Vec<RouterEffect>,
}

impl Transition {
    pub fn resets_scroll(&self) -> bool {
        self.effects.contains(&RouterEffect::ResetScroll)
    }

    pub fn anchor(&self) -> Option<&str> {
        self.effects.iter().find_map(|effect| match effect {
            RouterEffect::ScrollToAnchor(anchor) => Some(anchor.as_str()),
            RouterEffect::ResetScroll => None,
        })
    }
}

/// Current location plus browser-style history.
#[derive(Debug, Clone, Serialize)]
pub struct Router {
    config: RouterConfig,
    history: Vec<Location>,
    index: usize,
}

impl Router {
    pub fn new(config: RouterConfig, initial: Location) -> Self {
        let route = resolve(&initial.path);
        if route == Route::NotFound {
            warn!(path = %initial.path, "no route matches initial path");
        }
        Self {
            config,
            history: vec![initial],
            index: 0,
        }
    }

    pub fn config(&self) -> RouterConfig {
        self.config
    }

    pub fn mode(&self) -> AddressingMode {
        self.config.mode
    }

    pub fn current(&self) -> &Location {
        &self.history[self.index]
    }

    pub fn current_route(&self) -> Route {
        resolve(&self.current().path)
    }

    /// Link target for `location` in this router's addressing mode.
    pub fn href(&self, location: &Location) -> String {
        location.href(self.config.mode)
    }

    /// Parse user input in this router's addressing mode and navigate.
    pub fn navigate_str(&mut self, input: &str) -> Transition {
        self.navigate(Location::parse(input, self.config.mode))
    }

    /// Push `location` onto the history, dropping any forward entries.
    /// Navigating to the current location again does not add an entry.
    pub fn navigate(&mut self, location: Location) -> Transition {
        let previous = self.current().clone();
        if location != previous {
            self.history.truncate(self.index + 1);
            self.history.push(location);
            self.index += 1;
        }
        self.transition_from(&previous)
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }

    pub fn back(&mut self) -> Option<Transition> {
        if !self.can_go_back() {
            return None;
        }
        let previous = self.current().clone();
        self.index -= 1;
        Some(self.transition_from(&previous))
    }

    pub fn forward(&mut self) -> Option<Transition> {
        if !self.can_go_forward() {
            return None;
        }
        let previous = self.current().clone();
        self.index += 1;
        Some(self.transition_from(&previous))
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn transition_from(&self, previous: &Location) -> Transition {
        let location = self.current().clone();
        let from = resolve(&previous.path);
        let to = resolve(&location.path);
        let path_changed = previous.path != location.path;

        let mut effects = Vec::new();
        if self.config.scroll_reset && path_changed {
            effects.push(RouterEffect::ResetScroll);
        }
        if let Some(anchor) = &location.anchor {
            effects.push(RouterEffect::ScrollToAnchor(anchor.clone()));
        }

        if to == Route::NotFound {
            warn!(path = %location.path, "no route matches path");
        }
        debug!(%from, %to, href = %self.href(&location), path_changed, "navigated");

        Transition {
            from,
            to,
            location,
            path_changed,
            effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(mode: AddressingMode) -> Router {
        Router::new(RouterConfig::for_mode(mode), Location::root())
    }

    #[test]
    fn test_defined_paths_resolve_to_their_route() {
        for route in Route::DEFINED {
            assert_eq!(resolve(route.path().unwrap()), route);
        }
    }

    #[test]
    fn test_undefined_paths_resolve_to_not_found() {
        for path in ["/404", "/mitigations", "/mitigation/extra", "/Contact", "/cyber"] {
            assert_eq!(resolve(path), Route::NotFound, "{path}");
        }
    }

    #[test]
    fn test_navigate_pushes_and_drops_forward() {
        let mut r = router(AddressingMode::Path);
        r.navigate_str("/mitigation");
        r.navigate_str("/references");
        r.back();
        assert_eq!(r.current_route(), Route::Mitigation);
        assert!(r.can_go_forward());

        r.navigate_str("/contact");
        assert!(!r.can_go_forward());
        assert_eq!(r.history_len(), 3);
    }

    #[test]
    fn test_same_location_does_not_grow_history() {
        let mut r = router(AddressingMode::Path);
        let t = r.navigate(Location::root());
        assert!(!t.path_changed);
        assert_eq!(r.history_len(), 1);
    }

    #[test]
    fn test_back_forward_at_ends() {
        let mut r = router(AddressingMode::Path);
        assert!(r.back().is_none());
        assert!(r.forward().is_none());
        r.navigate_str("/recent-threats");
        let back = r.back().unwrap();
        assert_eq!((back.from, back.to), (Route::RecentThreats, Route::Home));
        let fwd = r.forward().unwrap();
        assert_eq!(fwd.to, Route::RecentThreats);
    }

    #[test]
    fn test_fragment_mode_resets_scroll_on_path_change() {
        let mut r = router(AddressingMode::Fragment);
        let t = r.navigate_str("#/mitigation");
        assert_eq!(t.to, Route::Mitigation);
        assert!(t.resets_scroll());

        let same_path = r.navigate_str("#/mitigation#frameworks");
        assert!(!same_path.path_changed);
        assert!(!same_path.resets_scroll());
        assert_eq!(same_path.anchor(), Some("frameworks"));

        let back = r.back().unwrap();
        assert!(!back.resets_scroll());
        let back_home = r.back().unwrap();
        assert!(back_home.resets_scroll());
    }

    #[test]
    fn test_path_mode_keeps_scroll_by_default() {
        let mut r = router(AddressingMode::Path);
        let t = r.navigate_str("/references#frameworks");
        assert!(t.path_changed);
        assert_eq!(t.effects, vec![RouterEffect::ScrollToAnchor("frameworks".into())]);
    }

    #[test]
    fn test_scroll_reset_override() {
        let config = RouterConfig::for_mode(AddressingMode::Path).with_scroll_reset(Some(true));
        let mut r = Router::new(config, Location::root());
        assert!(r.navigate_str("/contact").resets_scroll());

        let config = RouterConfig::for_mode(AddressingMode::Fragment).with_scroll_reset(None);
        assert!(config.scroll_reset);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let mut r = router(AddressingMode::Path);
        let t = r.navigate_str("/does-not-exist/");
        assert_eq!(t.to, Route::NotFound);
        assert_eq!(t.location.path, "/does-not-exist");
        assert_eq!(r.current_route(), Route::NotFound);
    }

    #[test]
    fn test_href_follows_mode() {
        let r = router(AddressingMode::Fragment);
        assert_eq!(r.href(&Location::new("/mitigation")), "#/mitigation");
    }
}
