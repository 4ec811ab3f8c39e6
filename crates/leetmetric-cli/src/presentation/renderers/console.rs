use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::formatters::Palette;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
    palette: Palette,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self::with_palette(format, mode, Palette::detect())
    }

    pub fn with_palette(format: OutputFormat, mode: ViewMode, palette: Palette) -> Self {
        Self {
            format,
            mode,
            palette,
        }
    }

    /// Write the result to `out` instead of stdout
    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        // Minimal output is for scripts: payload only
        let decorate = self.mode != ViewMode::Minimal;

        if decorate && let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.level.icon(), self.palette.bold(&badge.label))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode, self.palette))?;

        if decorate && !result.suggestions.is_empty() {
            writeln!(out, "\n{}", self.palette.bold("💡 Tips:"))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", self.palette.accent(cmd))?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        ConfigInitViewModel, Guidance, StatusBadge, StatusLevel,
    };
    use std::path::PathBuf;

    fn sample() -> CommandResultViewModel<ConfigInitViewModel> {
        CommandResultViewModel::new(ConfigInitViewModel {
            path: PathBuf::from("/tmp/config.toml"),
            written: true,
        })
        .with_badge(StatusBadge::new(StatusLevel::Success, "Configuration written"))
        .with_suggestions(vec![Guidance::run("Inspect it", "leetmetric config show")])
    }

    fn render(format: OutputFormat, mode: ViewMode) -> String {
        let mut out = Vec::new();
        ConsoleRenderer::with_palette(format, mode, Palette::plain())
            .render_to(&mut out, &sample())
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output_has_badge_and_tips() {
        insta::assert_snapshot!(render(OutputFormat::Text, ViewMode::Standard), @r"
        ✅ Configuration written

        Wrote /tmp/config.toml

        💡 Tips:
          • Inspect it: leetmetric config show
        ");
    }

    #[test]
    fn test_minimal_output_is_payload_only() {
        assert_eq!(
            render(OutputFormat::Text, ViewMode::Minimal),
            "/tmp/config.toml\n"
        );
    }

    #[test]
    fn test_json_output_is_full_envelope() {
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, ViewMode::Minimal)).unwrap();
        assert_eq!(json["badge"]["level"], "success");
        assert_eq!(json["content"]["written"], true);
        assert_eq!(json["suggestions"][0]["command"], "leetmetric config show");
    }
}
