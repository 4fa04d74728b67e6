use serde::Serialize;

/// A link in the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

/// The navigation links, in display order. Defined once for the process.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        name: "Home",
        path: "/",
    },
    NavItem {
        name: "Cyber Awareness",
        path: "/cyber-awareness",
    },
    NavItem {
        name: "Recent Threats",
        path: "/recent-threats",
    },
    NavItem {
        name: "Mitigation",
        path: "/mitigation",
    },
    NavItem {
        name: "References",
        path: "/references",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    #[test]
    fn test_nav_paths_are_defined_routes() {
        for item in NAV_ITEMS {
            assert!(
                Route::DEFINED.iter().any(|r| r.path() == Some(item.path)),
                "{} has no route",
                item.path
            );
        }
    }
}
