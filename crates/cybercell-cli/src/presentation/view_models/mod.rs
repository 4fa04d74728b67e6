pub mod common;
pub mod init;
pub mod page;
pub mod result;
pub mod route;
pub mod screen;

use std::fmt;

pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use init::InitResultViewModel;
pub use page::{
    FooterViewModel, HeroViewModel, LineViewModel, NavLinkViewModel, PageViewModel,
    SectionViewModel, TileKindViewModel, TileViewModel,
};
pub use result::CommandResultViewModel;
pub use route::{ResolveViewModel, RouteEntryViewModel, RouteListViewModel};
pub use screen::{
    CursorViewModel, MenuViewModel, NavBarViewModel, NavSlotViewModel, ScreenViewModel,
    StatusBarViewModel, ToastViewModel, TooltipViewModel,
};

/// Bridge from a view model to the text view that draws it.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
