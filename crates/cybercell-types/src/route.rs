use serde::{Deserialize, Serialize};
use std::fmt;

/// Every page the site can show. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    CyberAwareness,
    RecentThreats,
    Mitigation,
    References,
    Contact,
    NotFound,
}

impl Route {
    /// Routes reachable through a defined path, in table order.
    pub const DEFINED: [Route; 6] = [
        Route::Home,
        Route::CyberAwareness,
        Route::RecentThreats,
        Route::Mitigation,
        Route::References,
        Route::Contact,
    ];

    /// Canonical path. `NotFound` is the catch-all and has none.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::CyberAwareness => Some("/cyber-awareness"),
            Route::RecentThreats => Some("/recent-threats"),
            Route::Mitigation => Some("/mitigation"),
            Route::References => Some("/references"),
            Route::Contact => Some("/contact"),
            Route::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::CyberAwareness => "Cyber Awareness",
            Route::RecentThreats => "Recent Threats",
            Route::Mitigation => "Mitigation",
            Route::References => "References",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Where a click on a card or call-to-action leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// In-site navigation, optionally to a section anchor
    Route {
        route: Route,
        anchor: Option<&'static str>,
    },
    /// Link that leaves the site
    External { url: &'static str },
    /// Decorative button without a handler
    None,
}

impl Target {
    pub const fn route(route: Route) -> Self {
        Target::Route {
            route,
            anchor: None,
        }
    }

    pub const fn anchored(route: Route, anchor: &'static str) -> Self {
        Target::Route {
            route,
            anchor: Some(anchor),
        }
    }

    pub const fn external(url: &'static str) -> Self {
        Target::External { url }
    }

    pub fn is_actionable(&self) -> bool {
        !matches!(self, Target::None)
    }
}
