//! Theme preference.
//!
//! A persisted explicit choice wins; otherwise the OS-level dark-mode
//! signal decides. Dark presentation is the `data-theme="dark"` attribute
//! on the document element, light is the attribute's absence.

pub const STORAGE_KEY: &str = "slanker-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the theme toggle: the moon offers dark mode, the sun
    /// offers the way back.
    pub fn indicator(&self) -> &'static str {
        match self {
            Theme::Light => "\u{1f319}",
            Theme::Dark => "\u{2600}\u{fe0f}",
        }
    }
}

/// Decide the presentation at startup from the persisted preference and the
/// OS signal. An explicit saved choice always wins.
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> Theme {
    match saved.and_then(Theme::parse) {
        Some(theme) => theme,
        None => {
            if prefers_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_choice_wins_over_os_signal() {
        assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
        assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn os_signal_decides_when_nothing_is_saved() {
        assert_eq!(resolve_initial(None, true), Theme::Dark);
        assert_eq!(resolve_initial(None, false), Theme::Light);
        assert_eq!(resolve_initial(Some("solarized"), true), Theme::Dark);
    }

    #[test]
    fn toggling_twice_returns_to_the_original() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn persisted_tokens_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }
}
