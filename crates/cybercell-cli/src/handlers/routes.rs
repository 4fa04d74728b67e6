use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let view_model = presenters::present_routes(ctx.addressing()?);

    let result = CommandResultViewModel::new(view_model)
        .with_suggestion(Guidance::new("Print a page").with_command("cybercell render /mitigation"))
        .with_suggestion(Guidance::new("Browse interactively").with_command("cybercell browse"));

    ctx.renderer().render(result)
}
