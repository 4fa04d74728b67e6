use anyhow::Result;

use cybercell_runtime::resolve_data_dir;

use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{LogSink, init_logging};

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Browse {
        url: None,
        no_cursor: false,
        scroll_reset: None,
    });

    // The browser owns the terminal, so its logs go to a file
    let sink = match command {
        Commands::Browse { .. } => LogSink::file_in(&data_dir),
        _ => LogSink::Stderr,
    };
    init_logging(cli.log_level, sink)?;

    let ctx = ExecutionContext::new(data_dir, cli.format, cli.mode);

    match command {
        Commands::Browse {
            url,
            no_cursor,
            scroll_reset,
        } => handlers::browse::handle(&ctx, url, no_cursor, scroll_reset),

        Commands::Render { url, width } => handlers::render::handle(&ctx, url, width),

        Commands::Resolve { url, category } => handlers::resolve::handle(&ctx, url, category),

        Commands::Routes => handlers::routes::handle(&ctx),

        Commands::Init { force } => handlers::init::handle(&ctx, force),
    }
}
