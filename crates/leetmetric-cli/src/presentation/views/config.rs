use std::fmt;

use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel, ViewMode};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    mode: ViewMode,
    palette: Palette,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, mode: ViewMode, palette: Palette) -> Self {
        Self {
            data,
            mode,
            palette,
        }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let config = &self.data.config;

        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", self.data.path.display()),
            ViewMode::Compact => writeln!(
                f,
                "endpoint={} timeout_secs={} cache_ttl_secs={}",
                config.endpoint, config.timeout_secs, config.cache_ttl_secs
            ),
            ViewMode::Standard | ViewMode::Verbose => {
                let state = if self.data.file_exists {
                    ""
                } else {
                    " (not found)"
                };
                writeln!(
                    f,
                    "{}",
                    self.palette
                        .dim(&format!("# {}{}", self.data.path.display(), state))
                )?;
                let body = toml::to_string_pretty(config).map_err(|_| fmt::Error)?;
                write!(f, "{}", body)
            }
        }
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
    mode: ViewMode,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let path = self.data.path.display();
        match (self.mode, self.data.written) {
            (ViewMode::Minimal, _) => writeln!(f, "{}", path),
            (_, true) => writeln!(f, "Wrote {}", path),
            (_, false) => writeln!(f, "Left {} unchanged", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leetmetric_runtime::Config;
    use std::path::PathBuf;

    #[test]
    fn test_standard_config_view() {
        let data = ConfigViewModel {
            path: PathBuf::from("/home/u/.leetmetric/config.toml"),
            file_exists: false,
            config: Config::default(),
        };

        let output = ConfigView::new(&data, ViewMode::Standard, Palette::plain()).to_string();
        insta::assert_snapshot!(output, @r#"
        # /home/u/.leetmetric/config.toml (not found)
        endpoint = "https://leetcode-stats-api.herokuapp.com"
        timeout_secs = 15
        cache_ttl_secs = 300
        "#);
    }

    #[test]
    fn test_compact_config_view() {
        let data = ConfigViewModel {
            path: PathBuf::from("config.toml"),
            file_exists: true,
            config: Config::default(),
        };

        let output = ConfigView::new(&data, ViewMode::Compact, Palette::plain()).to_string();
        assert_eq!(
            output,
            "endpoint=https://leetcode-stats-api.herokuapp.com timeout_secs=15 cache_ttl_secs=300\n"
        );
    }
}
