use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Result;
use cybercell_runtime::Config;
use cybercell_types::AddressingMode;

use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::ViewMode;
use crate::types::{ModeArg, OutputFormat};

/// Everything a handler needs besides its own arguments.
pub struct ExecutionContext {
    data_dir: PathBuf,
    pub format: OutputFormat,
    pub mode_override: Option<AddressingMode>,
    pub view_mode: ViewMode,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat, mode: Option<ModeArg>) -> Self {
        Self {
            data_dir,
            format,
            mode_override: mode.map(AddressingMode::from),
            view_mode: ViewMode::for_terminal(std::io::stdout().is_terminal()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Config from the data directory with `--mode` applied on top.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load(&self.data_dir)?;
        if let Some(mode) = self.mode_override {
            config.display.addressing = mode;
        }
        Ok(config)
    }

    pub fn addressing(&self) -> Result<AddressingMode> {
        Ok(self.config()?.display.addressing)
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format == OutputFormat::Json, self.view_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_override_wins_over_config() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        Config::init(dir.path(), false)?;

        let ctx = ExecutionContext::new(dir.path().to_path_buf(), OutputFormat::Plain, None);
        assert_eq!(ctx.addressing()?, AddressingMode::Path);

        let ctx = ExecutionContext::new(
            dir.path().to_path_buf(),
            OutputFormat::Plain,
            Some(ModeArg::Fragment),
        );
        assert_eq!(ctx.addressing()?, AddressingMode::Fragment);
        Ok(())
    }

    #[test]
    fn test_missing_config_uses_defaults() -> Result<()> {
        let dir = tempfile::TempDir::new()?;
        let ctx = ExecutionContext::new(dir.path().join("absent"), OutputFormat::Json, None);
        assert_eq!(ctx.config()?, Config::default());
        Ok(())
    }
}
