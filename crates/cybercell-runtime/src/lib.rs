pub mod app;
pub mod config;
pub mod context;
pub mod error;
pub mod page_view;
pub mod shell;

pub use app::{App, AppEffect, UiEvent};
pub use config::{Config, DATA_DIR_ENV, resolve_data_dir};
pub use context::{AppContext, QueryClient, Toast, ToastLevel, ToastSurface, TooltipProvider};
pub use error::{Error, Result};
pub use page_view::PageView;
pub use shell::{BackgroundLayer, Hotspot, LayoutShell, ShellAction, ShellGeometry};
