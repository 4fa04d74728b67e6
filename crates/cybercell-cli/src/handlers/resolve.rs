use anyhow::Result;

use cybercell_types::Category;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};

pub fn handle(ctx: &ExecutionContext, url: Option<String>, category: Option<String>) -> Result<()> {
    let mode = ctx.addressing()?;

    let view_model = match &category {
        Some(label) => presenters::present_category(label, mode),
        None => presenters::present_resolve(url.as_deref().unwrap_or("/"), mode),
    };

    let mut result = CommandResultViewModel::new(view_model);
    if result.content.fallback {
        let input = result.content.input.clone();
        result = result
            .with_badge(StatusBadge::warning(format!(
                "Unknown category \"{input}\", opening the home page"
            )))
            .with_suggestion(Guidance::new(format!(
                "Categories with a page: {}",
                Category::ALL.map(Category::label).join(", ")
            )));
    }

    ctx.renderer().render(result)
}
