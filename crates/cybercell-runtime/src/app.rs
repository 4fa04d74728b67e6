//! The app root. Owns the providers, the router, the shell and the mounted
//! page, and turns input events into state changes.

use std::time::Duration;

use cybercell_engine::{
    ElementTag, EventBus, HoverTarget, PointerEvent, Router, Transition, dispatch_label,
};
use cybercell_types::{Location, Route, Target};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::context::{AppContext, ToastLevel};
use crate::page_view::PageView;
use crate::shell::{LayoutShell, ShellAction, ShellGeometry};

/// Input the frontend feeds into the app, in screen coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    PointerMove { x: u16, y: u16 },
    Click { x: u16, y: u16 },
    /// Scroll the page by a number of rows
    Scroll(i32),
    ScrollTop,
    ScrollBottom,
    /// Navigate to raw address input
    Navigate(String),
    /// Open the page for a category label, as the home cards do
    OpenCategory(String),
    Back,
    Forward,
    ToggleMenu,
    SelectNav(usize),
    FocusNext,
    FocusPrev,
    Activate,
    Resize { width: u16, height: u16 },
    Tick(Duration),
}

/// What handling an event did, for frontends that react to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum AppEffect {
    Navigated { from: Route, to: Route, href: String },
    OpenExternal { url: String },
}

pub struct App {
    context: AppContext,
    router: Router,
    bus: EventBus,
    shell: LayoutShell,
    view: PageView,
    width: u16,
    height: u16,
    now: Duration,
    hovered: HoverTarget,
}

impl App {
    pub fn new(config: &Config, initial: Location, width: u16, height: u16) -> Self {
        let context = AppContext::new(config);
        let router = Router::new(config.router_config(), initial);
        let bus = EventBus::new();
        let shell = LayoutShell::mount(&bus, config.display.cursor_effect);
        let viewport = shell.geometry(width, height).viewport;
        let mut view = PageView::mount(router.current_route(), width, viewport.height, Duration::ZERO);
        if let Some(anchor) = router.current().anchor.clone() {
            view.scroll_to_anchor(&anchor, Duration::ZERO);
        }
        info!(route = %router.current_route(), mode = %router.mode(), "app started");

        Self {
            context,
            router,
            bus,
            shell,
            view,
            width,
            height,
            now: Duration::ZERO,
            hovered: HoverTarget::background(),
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn shell(&self) -> &LayoutShell {
        &self.shell
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn hovered(&self) -> &HoverTarget {
        &self.hovered
    }

    pub fn geometry(&self) -> ShellGeometry {
        self.shell.geometry(self.width, self.height)
    }

    /// Current address in the router's addressing mode.
    pub fn address(&self) -> String {
        self.router.href(self.router.current())
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<AppEffect> {
        match event {
            UiEvent::PointerMove { x, y } => {
                self.pointer_move(x, y);
                Vec::new()
            }
            UiEvent::Click { x, y } => self.click(x, y),
            UiEvent::Scroll(delta) => {
                self.view.scroll_by(delta, self.now);
                Vec::new()
            }
            UiEvent::ScrollTop => {
                self.view.scroll_to(0, self.now);
                Vec::new()
            }
            UiEvent::ScrollBottom => {
                self.view.scroll_to_bottom(self.now);
                Vec::new()
            }
            UiEvent::Navigate(input) => {
                let transition = self.router.navigate_str(&input);
                self.apply(transition)
            }
            UiEvent::OpenCategory(label) => {
                let dispatch = dispatch_label(&label);
                if dispatch.is_fallback() {
                    self.context.toaster.push(
                        format!("No page for category \"{label}\", showing home"),
                        ToastLevel::Warning,
                        self.now,
                    );
                }
                self.navigate(dispatch.location)
            }
            UiEvent::Back => match self.router.back() {
                Some(transition) => self.apply(transition),
                None => Vec::new(),
            },
            UiEvent::Forward => match self.router.forward() {
                Some(transition) => self.apply(transition),
                None => Vec::new(),
            },
            UiEvent::ToggleMenu => {
                self.shell.nav_mut().toggle_menu();
                self.relayout();
                Vec::new()
            }
            UiEvent::SelectNav(index) => match self.shell.nav_mut().select(index) {
                Some(request) => self.navigate(request.location),
                None => {
                    self.relayout();
                    Vec::new()
                }
            },
            UiEvent::FocusNext => {
                self.view.focus_next(self.now);
                Vec::new()
            }
            UiEvent::FocusPrev => {
                self.view.focus_prev(self.now);
                Vec::new()
            }
            UiEvent::Activate => match self.view.activate_focused() {
                Some(target) => self.follow(target),
                None => Vec::new(),
            },
            UiEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
                self.relayout();
                Vec::new()
            }
            UiEvent::Tick(dt) => {
                self.now += dt;
                self.shell.step(dt);
                self.view.observe(self.now);
                self.context.expire(self.now);
                Vec::new()
            }
        }
    }

    fn pointer_move(&mut self, x: u16, y: u16) {
        self.bus.dispatch(&PointerEvent::Move {
            x: f32::from(x),
            y: f32::from(y),
        });

        let geometry = self.geometry();
        let (target, label) = if let Some(spot) = geometry.hit(x, y) {
            let tag = match spot.action {
                ShellAction::MenuButton => ElementTag::Button,
                _ => ElementTag::Anchor,
            };
            (HoverTarget::new(tag), Some(spot.label))
        } else if geometry.viewport.contains(x, y) {
            let vy = y - geometry.viewport.y;
            let label = self.view.hit(x, vy).map(|(_, t)| t.label.to_string());
            (self.view.hover_target(x, vy), label)
        } else {
            (HoverTarget::background(), None)
        };

        self.context.tooltips.hover(label.as_deref(), self.now);
        if target != self.hovered {
            self.bus.dispatch(&PointerEvent::Over {
                target: target.clone(),
            });
            self.hovered = target;
        }
    }

    fn click(&mut self, x: u16, y: u16) -> Vec<AppEffect> {
        let geometry = self.geometry();
        if let Some(spot) = geometry.hit(x, y) {
            return match spot.action {
                ShellAction::Logo => {
                    let request = self.shell.nav_mut().select_logo();
                    self.navigate(request.location)
                }
                ShellAction::NavLink(index) | ShellAction::MenuLink(index) => {
                    self.handle(UiEvent::SelectNav(index))
                }
                ShellAction::MenuButton => self.handle(UiEvent::ToggleMenu),
                ShellAction::FooterLink => self.navigate(LayoutShell::footer_location()),
            };
        }

        if !geometry.viewport.contains(x, y) {
            return Vec::new();
        }
        let hit = self
            .view
            .hit(x, y - geometry.viewport.y)
            .map(|(index, tile)| (index, tile.target));
        match hit {
            Some((_, target)) if target.is_actionable() => self.follow(target),
            Some((index, _)) => {
                debug!(tile = index, "tile has no click handler");
                Vec::new()
            }
            None => Vec::new(),
        }
    }

    fn follow(&mut self, target: Target) -> Vec<AppEffect> {
        match target {
            Target::Route { route, anchor } => self.navigate(Location::for_route(route, anchor)),
            Target::External { url } => {
                self.context
                    .sonner
                    .push(format!("Opening {url}"), ToastLevel::Info, self.now);
                info!(url, "external link");
                vec![AppEffect::OpenExternal {
                    url: url.to_string(),
                }]
            }
            Target::None => Vec::new(),
        }
    }

    fn navigate(&mut self, location: Location) -> Vec<AppEffect> {
        let transition = self.router.navigate(location);
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Vec<AppEffect> {
        self.shell.nav_mut().close_menu();
        let viewport = self.geometry().viewport;

        if transition.path_changed {
            let previous_scroll = self.view.scroll();
            self.view = PageView::mount(transition.to, self.width, viewport.height, self.now);
            if !transition.resets_scroll() {
                self.view.scroll_to(previous_scroll, self.now);
            }
        } else {
            self.view.resize(self.width, viewport.height, self.now);
            if transition.resets_scroll() {
                self.view.scroll_to(0, self.now);
            }
        }
        if let Some(anchor) = transition.anchor() {
            self.view.scroll_to_anchor(anchor, self.now);
        }

        vec![AppEffect::Navigated {
            from: transition.from,
            to: transition.to,
            href: self.router.href(&transition.location),
        }]
    }

    fn relayout(&mut self) {
        let viewport = self.geometry().viewport;
        self.view.resize(self.width, viewport.height, self.now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_types::AddressingMode;

    fn app(mode: AddressingMode) -> App {
        let mut config = Config::default();
        config.display.addressing = mode;
        App::new(&config, Location::root(), 140, 40)
    }

    fn navigated_to(effects: &[AppEffect]) -> Option<Route> {
        effects.iter().find_map(|e| match e {
            AppEffect::Navigated { to, .. } => Some(*to),
            _ => None,
        })
    }

    #[test]
    fn test_every_defined_path_mounts_its_page() {
        let mut app = app(AddressingMode::Path);
        for route in Route::DEFINED {
            let path = route.path().unwrap();
            app.handle(UiEvent::Navigate(path.to_string()));
            assert_eq!(app.view().route(), route);
            assert_eq!(app.view().page().route, route);
        }
        app.handle(UiEvent::Navigate("/threats".to_string()));
        assert_eq!(app.view().route(), Route::NotFound);
    }

    #[test]
    fn test_nav_link_click_navigates() {
        let mut app = app(AddressingMode::Path);
        let spot = app
            .geometry()
            .hotspots()
            .into_iter()
            .find(|h| h.action == ShellAction::NavLink(4))
            .unwrap();
        let effects = app.handle(UiEvent::Click {
            x: spot.rect.x,
            y: spot.rect.y,
        });
        assert_eq!(navigated_to(&effects), Some(Route::References));
        assert_eq!(app.address(), "/references");
    }

    #[test]
    fn test_mobile_menu_closes_on_select() {
        let mut config = Config::default();
        config.display.cursor_effect = false;
        let mut app = App::new(&config, Location::root(), 60, 30);
        app.handle(UiEvent::ToggleMenu);
        assert!(app.shell().nav().is_menu_open());
        assert!(app.geometry().menu.is_some());

        app.handle(UiEvent::SelectNav(2));
        assert!(!app.shell().nav().is_menu_open());
        assert_eq!(app.view().route(), Route::RecentThreats);
    }

    #[test]
    fn test_category_dispatch() {
        let mut app = app(AddressingMode::Path);
        let effects = app.handle(UiEvent::OpenCategory("mitigation".into()));
        assert_eq!(navigated_to(&effects), Some(Route::Mitigation));

        let effects = app.handle(UiEvent::OpenCategory("Vulnerabilities".into()));
        assert_eq!(navigated_to(&effects), Some(Route::Home));
        assert_eq!(app.context().toaster.len(), 1);
    }

    #[test]
    fn test_fragment_mode_resets_scroll() {
        let mut app = app(AddressingMode::Fragment);
        app.handle(UiEvent::Navigate("#/references".into()));
        app.handle(UiEvent::Scroll(15));
        assert!(app.view().scroll() > 0);

        app.handle(UiEvent::Navigate("#/mitigation".into()));
        assert_eq!(app.view().scroll(), 0);
        assert_eq!(app.address(), "#/mitigation");
    }

    #[test]
    fn test_path_mode_keeps_scroll_offset() {
        let mut app = app(AddressingMode::Path);
        app.handle(UiEvent::Navigate("/references".into()));
        app.handle(UiEvent::Scroll(10));
        let offset = app.view().scroll();

        app.handle(UiEvent::Navigate("/mitigation".into()));
        assert_eq!(app.view().scroll(), offset.min(app.view().max_scroll()));
    }

    #[test]
    fn test_anchor_navigation_scrolls() {
        let mut app = app(AddressingMode::Path);
        app.handle(UiEvent::Navigate("/mitigation#frameworks".into()));
        let offset = app.view().layout().anchor_offset("frameworks").unwrap();
        assert_eq!(app.view().scroll(), offset.min(app.view().max_scroll()));
        assert!(app.view().scroll() > 0);
    }

    #[test]
    fn test_back_and_forward() {
        let mut app = app(AddressingMode::Path);
        app.handle(UiEvent::Navigate("/contact".into()));
        let effects = app.handle(UiEvent::Back);
        assert_eq!(navigated_to(&effects), Some(Route::Home));
        assert!(app.handle(UiEvent::Back).is_empty());
        app.handle(UiEvent::Forward);
        assert_eq!(app.view().route(), Route::Contact);
    }

    #[test]
    fn test_external_link_activation() {
        let mut app = app(AddressingMode::Path);
        app.handle(UiEvent::Navigate("/references".into()));
        let mut effects = Vec::new();
        for _ in 0..40 {
            app.handle(UiEvent::FocusNext);
            let target = app.view().focused_tile().map(|t| t.target);
            if matches!(target, Some(Target::External { .. })) {
                effects = app.handle(UiEvent::Activate);
                break;
            }
        }
        assert!(matches!(effects.as_slice(), [AppEffect::OpenExternal { .. }]));
        assert_eq!(app.context().sonner.len(), 1);
        assert_eq!(app.view().route(), Route::References);
    }

    #[test]
    fn test_pointer_feeds_cursor_and_tooltips() {
        let mut app = app(AddressingMode::Path);
        let spot = app
            .geometry()
            .hotspots()
            .into_iter()
            .find(|h| h.action == ShellAction::NavLink(1))
            .unwrap();
        app.handle(UiEvent::PointerMove {
            x: spot.rect.x,
            y: spot.rect.y,
        });
        let cursor = app.shell().cursor().unwrap();
        assert!(cursor.hovering);
        assert_eq!(cursor.pointer, (f32::from(spot.rect.x), f32::from(spot.rect.y)));

        app.handle(UiEvent::Tick(Duration::from_millis(800)));
        assert_eq!(
            app.context().tooltips.visible(app.now()),
            Some("Cyber Awareness")
        );
    }

    #[test]
    fn test_toasts_expire_on_tick() {
        let mut app = app(AddressingMode::Path);
        app.handle(UiEvent::OpenCategory("nothing".into()));
        assert_eq!(app.context().toaster.len(), 1);
        app.handle(UiEvent::Tick(Duration::from_secs(5)));
        assert!(app.context().toaster.is_empty());
    }
}
