// Theme palettes the renderer pulls widget colors from.

use serde::{Deserialize, Serialize};

use crate::notify::Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub gain: String,
    pub loss: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            primary: "#2563eb".to_string(),
            secondary: "#565656".to_string(),
            accent: "#26a69a".to_string(),
            gain: "#26a69a".to_string(),
            loss: "#ef5350".to_string(),
            info: "#2563eb".to_string(),
            success: "#22c55e".to_string(),
            warning: "#f59e0b".to_string(),
            error: "#ef4444".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#111111".to_string(),
            primary: "#2563eb".to_string(),
            secondary: "#e0e0e0".to_string(),
            accent: "#009688".to_string(),
            gain: "#4caf50".to_string(),
            loss: "#f44336".to_string(),
            info: "#2563eb".to_string(),
            success: "#16a34a".to_string(),
            warning: "#d97706".to_string(),
            error: "#ef4444".to_string(),
        }
    }

    /// Color for a notification banner of the given level.
    pub fn notification_color(&self, level: Level) -> &str {
        match level {
            Level::Info => &self.info,
            Level::Success => &self.success,
            Level::Warning => &self.warning,
            Level::Error => &self.error,
        }
    }

    /// Color for a signed change value: `gain` for non-negative, `loss`
    /// otherwise.
    pub fn change_color(&self, change: f64) -> &str {
        if change >= 0.0 {
            &self.gain
        } else {
            &self.loss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_colors_are_distinct() {
        let palette = ThemePalette::default_dark();
        let colors = [
            palette.notification_color(Level::Info),
            palette.notification_color(Level::Success),
            palette.notification_color(Level::Warning),
            palette.notification_color(Level::Error),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_change_color_by_sign() {
        let palette = ThemePalette::default_light();
        assert_eq!(palette.change_color(2.35), palette.gain);
        assert_eq!(palette.change_color(0.0), palette.gain);
        assert_eq!(palette.change_color(-1.15), palette.loss);
    }
}
