pub mod content;
pub mod display;
pub mod error;
pub mod location;
pub mod nav;
pub mod route;

pub use content::*;
pub use display::*;
pub use error::{Error, Result};
pub use location::{AddressingMode, Location};
pub use nav::{NAV_ITEMS, NavItem};
pub use route::{Route, Target};
