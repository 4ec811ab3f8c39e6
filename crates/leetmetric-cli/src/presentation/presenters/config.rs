use std::path::Path;

use leetmetric_runtime::Config;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
    StatusLevel,
};

pub fn present_config(
    path: &Path,
    file_exists: bool,
    config: Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let mut result = CommandResultViewModel::new(ConfigViewModel {
        path: path.to_path_buf(),
        file_exists,
        config,
    });

    if !file_exists {
        result = result
            .with_badge(StatusBadge::new(
                StatusLevel::Info,
                "No config file; using defaults",
            ))
            .with_suggestions(vec![
                Guidance::run("Write the defaults to disk", "leetmetric config init"),
            ]);
    }

    result
}

pub fn present_config_init(path: &Path, written: bool) -> CommandResultViewModel<ConfigInitViewModel> {
    let badge = if written {
        StatusBadge::new(StatusLevel::Success, "Configuration written")
    } else {
        StatusBadge::new(StatusLevel::Warning, "Configuration already exists")
    };

    let mut result = CommandResultViewModel::new(ConfigInitViewModel {
        path: path.to_path_buf(),
        written,
    })
    .with_badge(badge);

    if !written {
        result = result.with_suggestions(vec![
            Guidance::run("Replace it with defaults", "leetmetric config init --force"),
        ]);
    }

    result
}
