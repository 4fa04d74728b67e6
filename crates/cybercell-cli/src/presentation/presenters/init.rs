use std::path::Path;

use cybercell_runtime::Config;

use crate::presentation::view_models::InitResultViewModel;

pub fn present_init_result(
    data_dir: &Path,
    config_path: &Path,
    overwritten: bool,
    config: Config,
) -> InitResultViewModel {
    InitResultViewModel {
        data_dir: data_dir.display().to_string(),
        config_path: config_path.display().to_string(),
        overwritten,
        config,
    }
}
