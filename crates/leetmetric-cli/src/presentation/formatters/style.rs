use is_terminal::IsTerminal;
use leetmetric_types::Tier;
use owo_colors::OwoColorize;

use crate::presentation::view_models::StatusLevel;

/// Colour switch for text views.
///
/// Views call these helpers instead of owo-colors directly so piped output
/// and `NO_COLOR` stay plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colour when stdout is a terminal and `NO_COLOR` is unset
    pub fn detect() -> Self {
        Self::new(std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none())
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.enabled {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn level(&self, text: &str, level: StatusLevel) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match level {
            StatusLevel::Success => text.green().to_string(),
            StatusLevel::Info => text.cyan().to_string(),
            StatusLevel::Warning => text.yellow().to_string(),
            StatusLevel::Error => text.red().to_string(),
        }
    }

    pub fn tier(&self, text: &str, tier: Tier) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match tier {
            Tier::Easy => text.green().to_string(),
            Tier::Medium => text.yellow().to_string(),
            Tier::Hard => text.red().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.bold("x"), "x");
        assert_eq!(palette.level("x", StatusLevel::Error), "x");
        assert_eq!(palette.tier("x", Tier::Hard), "x");
    }

    #[test]
    fn test_enabled_palette_adds_escapes() {
        let palette = Palette::new(true);
        assert!(palette.bold("x").contains("\u{1b}["));
        assert!(palette.tier("x", Tier::Easy).contains("\u{1b}["));
    }
}
