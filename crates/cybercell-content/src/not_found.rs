use cybercell_types::{CallToAction, Gradient, Hue, Route, Target};

use crate::page::{Headline, Hero, Page};

static ACTIONS: [CallToAction; 1] = [CallToAction {
    label: "Return to Home",
    target: Target::route(Route::Home),
    primary: true,
}];

pub static PAGE: Page = Page {
    route: Route::NotFound,
    hero: Hero {
        badge: None,
        headline: Headline {
            before: "",
            accent: "404",
            after: "",
        },
        tagline: "Oops! Page not found",
        image: None,
        gradient: Gradient::new(Hue::CyberPurple, Hue::CyberBlue),
        actions: &ACTIONS,
        quick_access: &[],
    },
    sections: &[],
};
