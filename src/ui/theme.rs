//! Colors resolved from the theme configuration.

use crate::config::ThemeConfig;
use crate::state::{NotificationLevel, Tone};
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Resolved palette used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Parse every configured color; unparseable values fall back to a
    /// named terminal color.
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            primary: parse(&config.primary, Color::Magenta),
            accent: parse(&config.accent, Color::Cyan),
            success: parse(&config.success, Color::Green),
            warning: parse(&config.warning, Color::Yellow),
            error: parse(&config.error, Color::Red),
            background: parse(&config.background, Color::Reset),
            foreground: parse(&config.foreground, Color::White),
            muted: parse(&config.muted, Color::DarkGray),
            border: parse(&config.border, Color::Gray),
            selection: parse(&config.selection, Color::DarkGray),
        }
    }

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Positive => self.success,
            Tone::Caution => self.warning,
            Tone::Danger => self.error,
            Tone::Neutral => self.muted,
        }
    }

    pub fn level(&self, level: NotificationLevel) -> Color {
        match level {
            NotificationLevel::Info => self.accent,
            NotificationLevel::Success => self.success,
            NotificationLevel::Warning => self.warning,
            NotificationLevel::Error => self.error,
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border for a page section; focused sections use the primary color.
    pub fn section_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }
}

fn parse(value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        tracing::warn!(value, "invalid theme color, using fallback");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_colors_parse() {
        let theme = Theme::default();
        assert_eq!(theme.primary, Color::Rgb(0x8b, 0x5c, 0xf6));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            error: "not-a-color".to_string(),
            accent: "blue".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.error, Color::Red);
        assert_eq!(theme.accent, Color::Blue);
    }

    #[test]
    fn test_tones_map_to_palette() {
        let theme = Theme::default();
        assert_eq!(theme.tone(Tone::Positive), theme.success);
        assert_eq!(theme.tone(Tone::Neutral), theme.muted);
    }
}
