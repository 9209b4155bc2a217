use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub on_primary: ColorSpec,
    pub banner: ColorSpec,

    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    pub background: ColorSpec,
    pub surface: ColorSpec,

    pub error: ColorSpec,
    pub disabled: ColorSpec,

    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::amber_night()
    }
}

impl Theme {
    /// Amber on near-black, the storefront look.
    ///
    pub fn amber_night() -> Self {
        Theme {
            name: "amber-night".to_string(),
            primary: ColorSpec::rgb(251, 191, 36),    // Amber 400
            on_primary: ColorSpec::rgb(17, 24, 39),   // Gray 900
            banner: ColorSpec::rgb(253, 230, 138),    // Amber 200
            text: ColorSpec::rgb(229, 231, 235),      // Gray 200
            text_muted: ColorSpec::rgb(156, 163, 175), // Gray 400
            background: ColorSpec::rgb(17, 24, 39),   // Gray 900
            surface: ColorSpec::rgb(31, 41, 55),      // Gray 800
            error: ColorSpec::rgb(239, 68, 68),       // Red 500
            disabled: ColorSpec::rgb(75, 85, 99),     // Gray 600
            border_active: ColorSpec::rgb(252, 211, 77), // Amber 300
            border_normal: ColorSpec::rgb(55, 65, 81), // Gray 700
        }
    }

    /// Light variant for bright terminals.
    ///
    pub fn amber_day() -> Self {
        Theme {
            name: "amber-day".to_string(),
            primary: ColorSpec::rgb(217, 119, 6),     // Amber 600
            on_primary: ColorSpec::rgb(255, 251, 235), // Amber 50
            banner: ColorSpec::rgb(180, 83, 9),       // Amber 700
            text: ColorSpec::rgb(31, 41, 55),         // Gray 800
            text_muted: ColorSpec::rgb(107, 114, 128), // Gray 500
            background: ColorSpec::rgb(255, 251, 235), // Amber 50
            surface: ColorSpec::rgb(254, 243, 199),   // Amber 100
            error: ColorSpec::rgb(220, 38, 38),       // Red 600
            disabled: ColorSpec::rgb(209, 213, 219),  // Gray 300
            border_active: ColorSpec::rgb(217, 119, 6), // Amber 600
            border_normal: ColorSpec::rgb(209, 213, 219), // Gray 300
        }
    }

    /// Look up a theme by its configured name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "amber-night" => Some(Self::amber_night()),
            "amber-day" => Some(Self::amber_day()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_known_and_unknown() {
        assert_eq!(Theme::from_name("amber-day").unwrap().name, "amber-day");
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, "amber-night");
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
