use cybercell_content::page;
use cybercell_engine::{dispatch_label, resolve, resolve_address};
use cybercell_types::{AddressingMode, Location, NAV_ITEMS, Route};

use crate::presentation::view_models::{ResolveViewModel, RouteEntryViewModel, RouteListViewModel};

pub fn present_routes(mode: AddressingMode) -> RouteListViewModel {
    let routes = Route::DEFINED
        .iter()
        .filter_map(|route| {
            let path = route.path()?;
            let content = page(*route);
            Some(RouteEntryViewModel {
                route: *route,
                title: route.title(),
                path,
                href: Location::new(path).href(mode),
                nav_label: NAV_ITEMS.iter().find(|i| i.path == path).map(|i| i.name),
                sections: content.sections.len(),
                cards: content.sections.iter().map(|s| s.body.card_count()).sum(),
                anchors: content.sections.iter().filter_map(|s| s.anchor).collect(),
            })
        })
        .collect();

    RouteListViewModel { mode, routes }
}

pub fn present_resolve(input: &str, mode: AddressingMode) -> ResolveViewModel {
    let (route, location) = resolve_address(input, mode);
    present_location(input, mode, route, location, None, false)
}

/// Resolve a category label the way the home article cards do.
pub fn present_category(label: &str, mode: AddressingMode) -> ResolveViewModel {
    let dispatch = dispatch_label(label);
    let route = resolve(&dispatch.location.path);
    let fallback = dispatch.is_fallback();
    present_location(
        label,
        mode,
        route,
        dispatch.location,
        Some(dispatch.label),
        fallback,
    )
}

fn present_location(
    input: &str,
    mode: AddressingMode,
    route: Route,
    location: Location,
    category: Option<String>,
    fallback: bool,
) -> ResolveViewModel {
    let anchor_found = location
        .anchor
        .as_deref()
        .map(|anchor| page(route).anchored_section(anchor).is_some());

    ResolveViewModel {
        input: input.to_string(),
        mode,
        route,
        title: route.title(),
        href: location.href(mode),
        path: location.path,
        anchor: location.anchor,
        anchor_found,
        category,
        fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_table() {
        let vm = present_routes(AddressingMode::Path);
        assert_eq!(vm.routes.len(), 6);
        let contact = vm.routes.iter().find(|r| r.route == Route::Contact).unwrap();
        assert_eq!(contact.nav_label, None);
        let mitigation = vm.routes.iter().find(|r| r.route == Route::Mitigation).unwrap();
        assert_eq!(mitigation.cards, 9);
        assert_eq!(mitigation.anchors, vec!["strategies", "frameworks"]);
    }

    #[test]
    fn test_resolve_fragment_address() {
        let vm = present_resolve(
            "https://cybercell.example/#/references#reading",
            AddressingMode::Fragment,
        );
        assert_eq!(vm.route, Route::References);
        assert_eq!(vm.anchor.as_deref(), Some("reading"));
        assert_eq!(vm.anchor_found, Some(true));
        assert_eq!(vm.href, "#/references#reading");
    }

    #[test]
    fn test_resolve_unknown_path() {
        let vm = present_resolve("/threats", AddressingMode::Path);
        assert_eq!(vm.route, Route::NotFound);
        assert_eq!(vm.path, "/threats");
        assert!(!vm.fallback);
    }

    #[test]
    fn test_category_fallback() {
        let vm = present_category("Threats", AddressingMode::Path);
        assert_eq!(vm.route, Route::RecentThreats);
        assert!(!vm.fallback);

        let vm = present_category("Quantum", AddressingMode::Path);
        assert_eq!(vm.route, Route::Home);
        assert!(vm.fallback);
    }

    #[test]
    fn test_resolve_json_shape() {
        let vm = present_resolve("/mitigation#strategies", AddressingMode::Path);
        insta::assert_json_snapshot!(vm, @r###"
        {
          "input": "/mitigation#strategies",
          "mode": "path",
          "route": "mitigation",
          "title": "Mitigation",
          "path": "/mitigation",
          "anchor": "strategies",
          "anchor_found": true,
          "href": "/mitigation#strategies",
          "fallback": false
        }
        "###);
    }
}
