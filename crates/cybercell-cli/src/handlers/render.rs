use anyhow::Result;
use tracing::debug;

use cybercell_types::Route;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};

pub const DEFAULT_WIDTH: u16 = 100;
pub const MIN_WIDTH: u16 = 24;

pub fn handle(ctx: &ExecutionContext, url: Option<String>, width: Option<u16>) -> Result<()> {
    let mode = ctx.addressing()?;
    let width = width
        .or_else(terminal_width)
        .unwrap_or(DEFAULT_WIDTH)
        .max(MIN_WIDTH);
    let address = url.as_deref().unwrap_or("/");
    debug!(address, width, %mode, "rendering page");

    let page = presenters::present_address(address, mode, width);

    let mut result = CommandResultViewModel::new(page);
    if result.content.route == Route::NotFound {
        let label = format!("No page at {}", result.content.path);
        result = result.with_badge(StatusBadge::warning(label)).with_suggestion(
            Guidance::new("List the pages this site has").with_command("cybercell routes"),
        );
    } else if result.content.anchor_found == Some(false) {
        let anchor = result.content.anchor.clone().unwrap_or_default();
        let label = format!("No section #{} on this page, showing the top", anchor);
        result = result.with_badge(StatusBadge::info(label)).with_suggestion(
            Guidance::new("See the section anchors of every page").with_command("cybercell routes"),
        );
    }

    ctx.renderer().render(result)
}

fn terminal_width() -> Option<u16> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w)
}
