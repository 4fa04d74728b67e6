pub mod init;
pub mod page;
pub mod route;
pub mod screen;

pub use init::present_init_result;
pub use page::{present_address, present_layout, target_href};
pub use route::{present_category, present_resolve, present_routes};
pub use screen::present_screen;
