use anyhow::Result;
use tracing::info;

use cybercell_runtime::Config;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};

pub fn handle(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let data_dir = ctx.data_dir();
    let existed = Config::path_in(data_dir).exists();

    let config_path = Config::init(data_dir, force)?;
    let overwritten = existed && force;
    info!(path = %config_path.display(), overwritten, "config written");

    let view_model =
        presenters::present_init_result(data_dir, &config_path, overwritten, Config::default());

    let badge = if overwritten {
        StatusBadge::success("Config replaced with defaults")
    } else {
        StatusBadge::success("Config created")
    };
    let result = CommandResultViewModel::new(view_model)
        .with_badge(badge)
        .with_suggestion(Guidance::new("Start browsing").with_command("cybercell browse"));

    ctx.renderer().render(result)
}
