use serde::Serialize;
use std::fmt;

use cybercell_runtime::Config;

use super::{CreateView, ViewMode};

#[derive(Debug, Serialize)]
pub struct InitResultViewModel {
    pub data_dir: String,
    pub config_path: String,
    /// An existing file was replaced
    pub overwritten: bool,
    pub config: Config,
}

impl CreateView for InitResultViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::init::InitResultView;
        Box::new(InitResultView::new(self, mode))
    }
}

impl fmt::Display for InitResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(ViewMode::default()))
    }
}
