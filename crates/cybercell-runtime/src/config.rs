use crate::{Error, Result};
use cybercell_engine::RouterConfig;
use cybercell_types::AddressingMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CYBERCELL_PATH";

pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. CYBERCELL_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.cybercell (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: CYBERCELL_PATH environment variable
    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("cybercell"));
    }

    // Priority 4: ~/.cybercell
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".cybercell"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub addressing: AddressingMode,
    pub cursor_effect: bool,
    /// Unset means the addressing mode decides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll_reset: Option<bool>,
    /// Frame interval of the terminal browser
    pub tick_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            addressing: AddressingMode::default(),
            cursor_effect: true,
            scroll_reset: None,
            tick_ms: 33,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 4000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub delay_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { delay_ms: 700 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub toasts: ToastConfig,
    #[serde(default)]
    pub tooltips: TooltipConfig,
}

impl Config {
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_from(&Self::path_in(data_dir))
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write the defaults into `data_dir`. Refuses to overwrite an existing
    /// file unless `force` is set.
    pub fn init(data_dir: &Path, force: bool) -> Result<PathBuf> {
        let path = Self::path_in(data_dir);
        if path.exists() && !force {
            return Err(Error::AlreadyInitialized(path));
        }
        Self::default().save_to(&path)?;
        Ok(path)
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.tick_ms == 0 {
            return Err(Error::Config("display.tick_ms must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn router_config(&self) -> RouterConfig {
        RouterConfig::for_mode(self.display.addressing).with_scroll_reset(self.display.scroll_reset)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.display.tick_ms.max(1))
    }
}
