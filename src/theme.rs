use serde::{Deserialize, Serialize};

/// Local storage key the browser build persists the theme under.
pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Classes for the page root. `dark` switches every `dark:` utility below
    /// it.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => {
                "dark min-h-screen transition-colors duration-500 bg-gradient-to-br from-slate-900 via-slate-800 to-blue-900 text-white"
            }
            Theme::Light => {
                "min-h-screen transition-colors duration-500 bg-gradient-to-br from-gray-50 via-white to-blue-50 text-gray-900"
            }
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light theme",
            Theme::Light => "Switch to dark theme",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀",
            Theme::Light => "☾",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn only_dark_root_carries_dark_class() {
        assert!(Theme::Dark.root_class().split_whitespace().any(|c| c == "dark"));
        assert!(!Theme::Light.root_class().split_whitespace().any(|c| c == "dark"));
    }

    #[test]
    fn stored_as_lowercase_string() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(
            serde_json::from_str::<Theme>("\"dark\"").unwrap(),
            Theme::Dark
        );
    }
}
