//! Light/dark theme preference.

use serde::{Deserialize, Serialize};

/// Persisted theme choice. Defaults to light.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    #[serde(default)]
    pub is_dark: bool,
}

impl ThemePreference {
    /// Flip between light and dark.
    pub const fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    pub const fn set(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_set() {
        let mut theme = ThemePreference::default();
        assert!(!theme.is_dark);

        theme.toggle();
        assert!(theme.is_dark);
        theme.toggle();
        assert!(!theme.is_dark);

        theme.set(true);
        assert!(theme.is_dark);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&ThemePreference { is_dark: true }).unwrap();
        assert_eq!(json, r#"{"isDark":true}"#);

        let parsed: ThemePreference = serde_json::from_str("{}").unwrap();
        assert!(!parsed.is_dark);
    }
}
