//! Page content for every route: hero, sections and the records they show.
//!
//! Everything here is `'static` and built at compile time. Pages never
//! mutate; transient view state lives in the engine and runtime crates.

mod awareness;
mod contact;
mod home;
mod mitigation;
mod not_found;
pub mod page;
mod references;
mod threats;

pub use page::{Callout, Headline, Hero, Page, Section, SectionBody};

use cybercell_types::{ArticleSummary, Route};

/// Brand shown in the navigation bar.
pub const BRAND: &str = "Cyber Cell";

/// Footer credit line and the team it links to.
pub const FOOTER_CREDIT: &str = "Developed by";
pub const FOOTER_TEAM: &str = "Pynevera";

/// The page mounted for a route. Every route, including `NotFound`, has one.
pub fn page(route: Route) -> &'static Page {
    match route {
        Route::Home => &home::PAGE,
        Route::CyberAwareness => &awareness::PAGE,
        Route::RecentThreats => &threats::PAGE,
        Route::Mitigation => &mitigation::PAGE,
        Route::References => &references::PAGE,
        Route::Contact => &contact::PAGE,
        Route::NotFound => &not_found::PAGE,
    }
}

/// Articles in the home page magazine grid.
pub fn home_articles() -> &'static [ArticleSummary] {
    &home::ARTICLES
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_types::{Category, Target};

    #[test]
    fn test_every_route_has_matching_page() {
        for route in Route::DEFINED.into_iter().chain([Route::NotFound]) {
            assert_eq!(page(route).route, route);
        }
    }

    #[test]
    fn test_mitigation_cards() {
        let mitigation = page(Route::Mitigation);
        let strategies = mitigation.section("core-strategies").unwrap();
        assert_eq!(
            strategies.body.titles(),
            vec![
                "Defense in Depth",
                "Continuous Monitoring",
                "Zero Trust Architecture",
                "Security Awareness Training",
                "Incident Response",
                "Data Encryption",
            ]
        );
        let frameworks = mitigation.section("industry-frameworks").unwrap();
        assert_eq!(
            frameworks.body.titles(),
            vec!["NIST Cybersecurity Framework", "ISO 27001", "MITRE ATT&CK"]
        );
    }

    #[test]
    fn test_home_articles_cover_every_category() {
        for category in Category::ALL {
            assert!(
                home_articles().iter().any(|a| a.category == category),
                "no article for {}",
                category
            );
        }
        let featured: Vec<_> = home_articles().iter().filter(|a| a.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "Building Cyber Awareness in the Digital Age");
    }

    #[test]
    fn test_section_ids_unique_per_page() {
        for route in Route::DEFINED {
            let mut ids: Vec<_> = page(route).sections.iter().map(|s| s.id).collect();
            let total = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), total, "duplicate section id on {}", route);
        }
    }

    #[test]
    fn test_quick_access_anchors_resolve() {
        for tile in page(Route::Home).hero.quick_access {
            let Target::Route {
                route,
                anchor: Some(anchor),
            } = tile.target
            else {
                panic!("quick access tile {} has no anchor", tile.title);
            };
            assert!(
                page(route).anchored_section(anchor).is_some(),
                "{} -> {}#{} has no section",
                tile.title,
                route,
                anchor
            );
        }
    }

    #[test]
    fn test_reference_library_counts() {
        let library = page(Route::References).section("resource-library").unwrap();
        assert_eq!(library.body.card_count(), 12);
        let books = page(Route::References).section("essential-reading").unwrap();
        assert_eq!(books.body.card_count(), 4);
    }

    #[test]
    fn test_threats_page() {
        let threats = page(Route::RecentThreats);
        assert_eq!(threats.section("threat-dashboard").unwrap().body.card_count(), 6);
        assert_eq!(threats.section("attack-timeline").unwrap().body.card_count(), 5);
        let alert = threats.section("critical-alert").unwrap();
        assert_eq!(alert.body.titles(), vec!["Critical Alert: Stay Vigilant"]);
        assert!(alert.actions.iter().all(|a| !a.target.is_actionable()));
    }

    #[test]
    fn test_headline_text() {
        assert_eq!(
            page(Route::CyberAwareness).hero.headline.text(),
            "Building a Security-First Culture"
        );
        assert_eq!(page(Route::Home).hero.headline.text(), "Cyber Security Intelligence");
        assert_eq!(page(Route::NotFound).hero.headline.text(), "404");
    }

    #[test]
    fn test_page_serializes_section_kinds() {
        let json = serde_json::to_value(page(Route::Mitigation)).unwrap();
        assert_eq!(json["sections"][0]["body"]["kind"], "strategies");
        assert_eq!(json["sections"][1]["body"]["items"][2]["name"], "MITRE ATT&CK");
    }
}
