use cybercell_types::{Category, Location, Route};
use serde::Serialize;
use tracing::warn;

/// Page an article of the given category opens.
pub fn route_for_category(category: Category) -> Route {
    match category {
        Category::Awareness => Route::CyberAwareness,
        Category::Threats => Route::RecentThreats,
        Category::Mitigation => Route::Mitigation,
        Category::References => Route::References,
    }
}

pub fn location_for_category(category: Category) -> Location {
    Location::for_route(route_for_category(category), None)
}

/// Outcome of dispatching a free-form category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDispatch {
    pub label: String,
    pub category: Option<Category>,
    pub location: Location,
}

impl CategoryDispatch {
    pub fn is_fallback(&self) -> bool {
        self.category.is_none()
    }
}

/// Resolve a category label typed by a user. Labels that name no category
/// fall back to the home page, with a warning.
pub fn dispatch_label(label: &str) -> CategoryDispatch {
    match label.parse::<Category>() {
        Ok(category) => CategoryDispatch {
            label: label.to_string(),
            category: Some(category),
            location: location_for_category(category),
        },
        Err(err) => {
            warn!(label, error = %err, "category has no page, falling back to home");
            CategoryDispatch {
                label: label.to_string(),
                category: None,
                location: Location::root(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_routes() {
        assert_eq!(route_for_category(Category::Awareness), Route::CyberAwareness);
        assert_eq!(route_for_category(Category::Threats), Route::RecentThreats);
        assert_eq!(route_for_category(Category::Mitigation), Route::Mitigation);
        assert_eq!(route_for_category(Category::References), Route::References);
    }

    #[test]
    fn test_category_paths() {
        let paths: Vec<_> = Category::ALL
            .into_iter()
            .map(|c| location_for_category(c).path)
            .collect();
        assert_eq!(
            paths,
            vec!["/cyber-awareness", "/recent-threats", "/mitigation", "/references"]
        );
    }

    #[test]
    fn test_label_dispatch() {
        let hit = dispatch_label("threats");
        assert_eq!(hit.category, Some(Category::Threats));
        assert_eq!(hit.location.path, "/recent-threats");

        let miss = dispatch_label("Vulnerabilities");
        assert!(miss.is_fallback());
        assert_eq!(miss.location, Location::root());
    }
}
