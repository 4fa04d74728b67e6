// Engine module - view state machines (routing, nav, reveal, cursor, layout)
// This layer sits between static page content and the runtime that drives it

pub mod card;
pub mod cursor;
pub mod dispatch;
pub mod events;
pub mod layout;
pub mod nav;
pub mod reveal;
pub mod router;

pub use card::{CardContent, TextBlock, TextRole, card_content, card_target, wrap_text};
pub use cursor::{CursorEffect, CursorSnapshot, MarkerSnapshot, MarkerSpec, Spring, SpringConfig};
pub use dispatch::{CategoryDispatch, dispatch_label, location_for_category, route_for_category};
pub use events::{ElementTag, EventBus, EventKind, HoverTarget, PointerEvent, Subscription};
pub use layout::{Breakpoint, PageLayout, Rect, SectionLayout, Tile, TileKind};
pub use nav::{NavEntry, NavRequest, NavShell};
pub use reveal::{Reveal, RevealConfig, RevealState};
pub use router::{Router, RouterConfig, RouterEffect, Transition, resolve};

use cybercell_types::Location;

// Façade API - stable entry points for the runtime and CLI layers

/// Resolve a raw address in the given mode to its route and normalized
/// location, without touching any history.
pub fn resolve_address(
    input: &str,
    mode: cybercell_types::AddressingMode,
) -> (cybercell_types::Route, Location) {
    let location = Location::parse(input, mode);
    (resolve(&location.path), location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_types::{AddressingMode, Route};

    #[test]
    fn test_resolve_address() {
        let (route, location) = resolve_address("#/references#reading", AddressingMode::Fragment);
        assert_eq!(route, Route::References);
        assert_eq!(location.anchor.as_deref(), Some("reading"));

        let (route, _) = resolve_address("/nowhere", AddressingMode::Path);
        assert_eq!(route, Route::NotFound);
    }
}
