use clap::{Parser, Subcommand};

use crate::types::{LogLevel, ModeArg, OutputFormat};

#[derive(Parser)]
#[command(name = "cybercell")]
#[command(about = "Browse the Cyber Cell security-awareness site from your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $CYBERCELL_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Addressing mode, overriding config.toml
    #[arg(long, global = true)]
    pub mode: Option<ModeArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse the site interactively (default)")]
    Browse {
        /// Address to open, e.g. /mitigation#strategies or #/references
        url: Option<String>,

        #[arg(long, help = "Disable the cursor-follow effect")]
        no_cursor: bool,

        #[arg(long, help = "Reset scroll on every page change (true/false)")]
        scroll_reset: Option<bool>,
    },

    #[command(about = "Print one page")]
    Render {
        /// Address to render
        url: Option<String>,

        #[arg(long, help = "Layout width in columns (defaults to the terminal width)")]
        width: Option<u16>,
    },

    #[command(about = "Show which page an address or article category resolves to")]
    Resolve {
        /// Address to resolve
        url: Option<String>,

        #[arg(long, help = "Resolve an article category label instead", conflicts_with = "url")]
        category: Option<String>,
    },

    #[command(about = "List the route table and navigation links")]
    Routes,

    #[command(about = "Write a default config.toml into the data directory")]
    Init {
        #[arg(long, help = "Overwrite an existing config")]
        force: bool,
    },
}
