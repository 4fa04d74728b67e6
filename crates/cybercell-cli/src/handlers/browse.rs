use is_terminal::IsTerminal;

use anyhow::Result;
use tracing::{info, warn};

use cybercell_engine::resolve_address;
use cybercell_runtime::App;
use cybercell_types::Location;

use crate::context::ExecutionContext;
use crate::presentation::BrowserRenderer;

pub fn handle(
    ctx: &ExecutionContext,
    url: Option<String>,
    no_cursor: bool,
    scroll_reset: Option<bool>,
) -> Result<()> {
    // Without a terminal there is nothing to browse in; print the page instead
    if !std::io::stdout().is_terminal() {
        warn!("stdout is not a terminal, rendering the page once");
        return super::render::handle(ctx, url, None);
    }

    let mut config = ctx.config()?;
    if no_cursor {
        config.display.cursor_effect = false;
    }
    if scroll_reset.is_some() {
        config.display.scroll_reset = scroll_reset;
    }

    let mode = config.display.addressing;
    let location = url
        .as_deref()
        .map(|address| resolve_address(address, mode).1)
        .unwrap_or_else(Location::root);

    let (width, height) = crossterm::terminal::size()?;
    info!(width, height, %mode, "opening browser");

    let app = App::new(&config, location, width, height);
    BrowserRenderer::new(app, config.tick()).run()
}
