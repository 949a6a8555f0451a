// Settings module
// Presenter configuration loaded from config.toml

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::color::{DisplayColors, RgbaColor, DEFAULT_BACKGROUND_HEX, DEFAULT_TEXT_HEX};

const MIN_WINDOW_EDGE: f32 = 100.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} is not a valid hex color: {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("{field} must be at least {min} pixels (got {value})")]
    WindowTooSmall {
        field: &'static str,
        value: f32,
        min: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// External screen background, `#rrggbb`
    pub display_background: String,
    /// External screen label color, `#rrggbb`
    pub display_text: String,
    /// Size used when the external screen sits on the first display
    pub display_default_width: f32,
    pub display_default_height: f32,
    pub control_width: f32,
    pub control_height: f32,
    /// Ask before quitting when the control window is closed by the user
    pub confirm_on_close: bool,
    /// Output selected for the external screen at startup, when it exists
    pub initial_display_index: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_background: DEFAULT_BACKGROUND_HEX.to_string(),
            display_text: DEFAULT_TEXT_HEX.to_string(),
            display_default_width: 800.0,
            display_default_height: 600.0,
            control_width: 800.0,
            control_height: 800.0,
            confirm_on_close: true,
            initial_display_index: 1,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.display_colors()?;

        for (field, value) in [
            ("display_default_width", self.display_default_width),
            ("display_default_height", self.display_default_height),
            ("control_width", self.control_width),
            ("control_height", self.control_height),
        ] {
            if !value.is_finite() || value < MIN_WINDOW_EDGE {
                return Err(SettingsError::WindowTooSmall {
                    field,
                    value,
                    min: MIN_WINDOW_EDGE,
                });
            }
        }

        Ok(())
    }

    pub fn display_colors(&self) -> Result<DisplayColors, SettingsError> {
        let background = RgbaColor::from_hex_str(&self.display_background).ok_or_else(|| {
            SettingsError::InvalidColor {
                field: "display_background",
                value: self.display_background.clone(),
            }
        })?;
        let text =
            RgbaColor::from_hex_str(&self.display_text).ok_or_else(|| SettingsError::InvalidColor {
                field: "display_text",
                value: self.display_text.clone(),
            })?;

        Ok(DisplayColors::new(background, text))
    }

    pub fn set_display_colors(&mut self, colors: DisplayColors) {
        self.display_background = colors.background.to_hex();
        self.display_text = colors.text.to_hex();
    }

    pub fn display_default_size(&self) -> (f32, f32) {
        (self.display_default_width, self.display_default_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.display_default_size(), (800.0, 600.0));
        assert_eq!(settings.display_colors().unwrap(), DisplayColors::default());
    }

    #[test]
    fn bad_color_fails_validation() {
        let settings = Settings {
            display_text: "teal".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidColor {
                field: "display_text",
                ..
            })
        ));
    }

    #[test]
    fn tiny_window_fails_validation() {
        let settings = Settings {
            control_height: 12.0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::WindowTooSmall {
                field: "control_height",
                ..
            })
        ));
    }

    #[test]
    fn colors_round_trip_through_hex_fields() {
        let mut settings = Settings::default();
        let colors = DisplayColors::new(RgbaColor::new(1, 2, 3, 255), RgbaColor::new(250, 251, 252, 255));
        settings.set_display_colors(colors);
        assert_eq!(settings.display_background, "#010203");
        assert_eq!(settings.display_colors().unwrap(), colors);
    }
}
