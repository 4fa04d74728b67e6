use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{InitResultViewModel, ViewMode};

pub struct InitResultView<'a> {
    data: &'a InitResultViewModel,
    mode: ViewMode,
}

impl<'a> InitResultView<'a> {
    pub fn new(data: &'a InitResultViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for InitResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.mode.is_color() {
            self.data.config_path.cyan().to_string()
        } else {
            self.data.config_path.clone()
        };
        let verb = if self.data.overwritten {
            "Replaced"
        } else {
            "Wrote"
        };
        writeln!(f, "{verb} {path}")?;
        writeln!(f)?;

        let display = &self.data.config.display;
        writeln!(f, "Display:")?;
        writeln!(f, "  addressing     {}", display.addressing)?;
        writeln!(f, "  cursor_effect  {}", display.cursor_effect)?;
        match display.scroll_reset {
            Some(reset) => writeln!(f, "  scroll_reset   {reset}")?,
            None => writeln!(f, "  scroll_reset   (follows addressing)")?,
        }
        writeln!(f, "  tick_ms        {}", display.tick_ms)?;
        writeln!(f, "Toasts:")?;
        writeln!(f, "  duration_ms    {}", self.data.config.toasts.duration_ms)?;
        writeln!(f, "Tooltips:")?;
        writeln!(f, "  delay_ms       {}", self.data.config.tooltips.delay_ms)?;
        Ok(())
    }
}
