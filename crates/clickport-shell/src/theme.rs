//! Theme system for the Clickport shell.
//!
//! A [`Theme`] is built once at startup from [`ThemeOptions`] and handed to
//! the render tree through [`ThemeProvider`]. Palette derivation follows the
//! Material palette rules: every palette color carries `light`, `dark` and a
//! `contrast_text` computed from its `main` token.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Offset used to derive `light`/`dark` variants from a palette `main`.
const TONAL_OFFSET: f64 = 0.2;

/// Minimum contrast ratio for white text on a palette color.
const CONTRAST_THRESHOLD: f32 = 3.0;

/// Errors raised while building a [`Theme`].
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid color token {value:?}")]
    InvalidColor { value: String },

    #[error("invalid theme options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("failed to read theme file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Light or dark color scheme.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the CSS `color-scheme` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// An sRGB color with optional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Mixes each channel toward white by `coefficient`.
    pub fn lighten(&self, coefficient: f64) -> Self {
        let mix = |c: u8| (c as f64 + (255.0 - c as f64) * coefficient) as u8;
        Self::rgba(mix(self.r), mix(self.g), mix(self.b), self.a)
    }

    /// Scales each channel toward black by `coefficient`.
    pub fn darken(&self, coefficient: f64) -> Self {
        let mix = |c: u8| (c as f64 * (1.0 - coefficient)) as u8;
        Self::rgba(mix(self.r), mix(self.g), mix(self.b), self.a)
    }

    /// Relative luminance, rounded to three decimals.
    pub fn luminance(&self) -> f32 {
        let channel = |c: u8| {
            let v = c as f32 / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        };
        let l = 0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b);
        (l * 1000.0).round() / 1000.0
    }

    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let a = self.luminance();
        let b = other.luminance();
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn parse_functional(body: &str, with_alpha: bool) -> Option<Self> {
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return None;
        }
        let r = parts[0].parse().ok()?;
        let g = parts[1].parse().ok()?;
        let b = parts[2].parse().ok()?;
        let a = if with_alpha {
            let a: f32 = parts[3].parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            a
        } else {
            1.0
        };
        Some(Self::rgba(r, g, b, a))
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let parsed = if let Some(hex) = value.strip_prefix('#') {
            Self::parse_hex(hex)
        } else if let Some(body) = value
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Self::parse_functional(body, true)
        } else if let Some(body) = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Self::parse_functional(body, false)
        } else {
            None
        };
        parsed.ok_or_else(|| ThemeError::InvalidColor {
            value: s.to_string(),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// A palette entry with its derived variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaletteColor {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

impl PaletteColor {
    /// Derives `light`, `dark` and `contrast_text` from `main`.
    pub fn augment(main: Color) -> Self {
        let contrast_text = if main.contrast_ratio(&Color::WHITE) >= CONTRAST_THRESHOLD {
            Color::WHITE
        } else {
            Color::rgba(0, 0, 0, 0.87)
        };
        Self {
            main,
            light: main.lighten(TONAL_OFFSET),
            dark: main.darken(TONAL_OFFSET * 1.5),
            contrast_text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundColors {
    pub default: Color,
    pub paper: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
}

/// Full palette after derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub divider: Color,
}

impl Palette {
    pub fn new(mode: ThemeMode, primary: Color, secondary: Color) -> Self {
        let (background, text, divider) = match mode {
            ThemeMode::Light => (
                BackgroundColors {
                    default: Color::WHITE,
                    paper: Color::WHITE,
                },
                TextColors {
                    primary: Color::rgba(0, 0, 0, 0.87),
                    secondary: Color::rgba(0, 0, 0, 0.6),
                },
                Color::rgba(0, 0, 0, 0.12),
            ),
            ThemeMode::Dark => (
                BackgroundColors {
                    default: Color::rgb(0x12, 0x12, 0x12),
                    paper: Color::rgb(0x12, 0x12, 0x12),
                },
                TextColors {
                    primary: Color::WHITE,
                    secondary: Color::rgba(255, 255, 255, 0.7),
                },
                Color::rgba(255, 255, 255, 0.12),
            ),
        };
        Self {
            mode,
            primary: PaletteColor::augment(primary),
            secondary: PaletteColor::augment(secondary),
            background,
            text,
            divider,
        }
    }
}

/// Immutable visual configuration shared by every component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    /// Base spacing unit in pixels.
    pub spacing_unit: u16,
    /// Maximum width of the main content container in pixels.
    pub container_max_width: u16,
    pub font_family: &'static str,
}

impl Theme {
    pub fn new(mode: ThemeMode, primary: Color, secondary: Color) -> Self {
        Self {
            palette: Palette::new(mode, primary, secondary),
            spacing_unit: 8,
            container_max_width: 1200,
            font_family: r#""Roboto", "Helvetica", "Arial", sans-serif"#,
        }
    }

    /// Builds a theme from parsed options.
    pub fn from_options(options: &ThemeOptions) -> Result<Self, ThemeError> {
        let primary: Color = options.palette.primary.main.parse()?;
        let secondary: Color = options.palette.secondary.main.parse()?;
        Ok(Self::new(options.palette.mode, primary, secondary))
    }

    /// Spacing in CSS pixels for `factor` units.
    pub fn spacing(&self, factor: u16) -> String {
        format!("{}px", self.spacing_unit * factor)
    }

    /// Reset/normalization stylesheet applied beneath the whole tree.
    pub fn baseline_css(&self) -> String {
        let palette = &self.palette;
        format!(
            "html {{ -webkit-font-smoothing: antialiased; -moz-osx-font-smoothing: grayscale; \
             box-sizing: border-box; -webkit-text-size-adjust: 100%; color-scheme: {scheme}; }}\n\
             *, *::before, *::after {{ box-sizing: inherit; }}\n\
             strong, b {{ font-weight: 700; }}\n\
             body {{ margin: 0; color: {text}; font-family: {font}; font-weight: 400; \
             font-size: 1rem; line-height: 1.5; letter-spacing: 0.00938em; \
             background-color: {background}; }}\n\
             @media print {{ body {{ background-color: #fff; }} }}\n\
             body::backdrop {{ background-color: {background}; }}\n",
            scheme = palette.mode.css_value(),
            text = palette.text.primary,
            font = self.font_family,
            background = palette.background.default,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(
            ThemeMode::Light,
            Color::rgb(0x19, 0x76, 0xd2),
            Color::rgb(0xdc, 0x00, 0x4e),
        )
    }
}

/// Theme configuration surface, as read from JSON.
///
/// ```json
/// { "palette": { "mode": "dark", "primary": { "main": "#1976d2" } } }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ThemeOptions {
    pub palette: PaletteOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteOptions {
    #[serde(default)]
    pub mode: ThemeMode,
    #[serde(default = "ColorOptions::default_primary")]
    pub primary: ColorOptions,
    #[serde(default = "ColorOptions::default_secondary")]
    pub secondary: ColorOptions,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            mode: ThemeMode::default(),
            primary: ColorOptions::default_primary(),
            secondary: ColorOptions::default_secondary(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColorOptions {
    pub main: String,
}

impl ColorOptions {
    fn default_primary() -> Self {
        Self {
            main: "#1976d2".to_string(),
        }
    }

    fn default_secondary() -> Self {
        Self {
            main: "#dc004e".to_string(),
        }
    }
}

impl ThemeOptions {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let json = std::fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Makes `theme` available to every descendant through [`use_theme`].
#[component]
pub fn ThemeProvider(theme: Theme, children: Element) -> Element {
    use_context_provider(|| theme);
    rsx! { {children} }
}

/// Reads the theme provided by the nearest [`ThemeProvider`].
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

/// Emits the baseline stylesheet for the provided theme.
#[component]
pub fn CssBaseline() -> Element {
    let css = use_theme().baseline_css();
    rsx! {
        style { dangerous_inner_html: "{css}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!("#1976d2".parse::<Color>().unwrap(), Color::rgb(0x19, 0x76, 0xd2));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(
            "rgb(12, 34, 56)".parse::<Color>().unwrap(),
            Color::rgb(12, 34, 56)
        );
        assert_eq!(
            "rgba(0, 0, 0, 0.87)".parse::<Color>().unwrap(),
            Color::rgba(0, 0, 0, 0.87)
        );
    }

    #[test]
    fn test_color_parsing_rejects_garbage() {
        for bad in ["", "blue", "#12", "#gggggg", "rgb(1, 2)", "rgba(1, 2, 3, 4)", "rgb(300, 0, 0)"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(ThemeError::InvalidColor { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgb(0x19, 0x76, 0xd2).to_string(), "#1976d2");
        assert_eq!(Color::rgba(0, 0, 0, 0.6).to_string(), "rgba(0, 0, 0, 0.6)");
    }

    #[test]
    fn test_default_palette_matches_reference() {
        let palette = Theme::default().palette;
        assert_eq!(palette.primary.main.to_string(), "#1976d2");
        assert_eq!(palette.primary.light.to_string(), "#4791db");
        assert_eq!(palette.primary.dark.to_string(), "#115293");
        assert_eq!(palette.primary.contrast_text, Color::WHITE);

        assert_eq!(palette.secondary.light.to_string(), "#e33371");
        assert_eq!(palette.secondary.dark.to_string(), "#9a0036");
        assert_eq!(palette.secondary.contrast_text, Color::WHITE);
    }

    #[test]
    fn test_contrast_text_on_light_color() {
        let yellow = PaletteColor::augment(Color::rgb(0xff, 0xeb, 0x3b));
        assert_eq!(yellow.contrast_text, Color::rgba(0, 0, 0, 0.87));
    }

    #[test]
    fn test_dark_mode_tokens() {
        let theme = Theme::new(ThemeMode::Dark, Color::WHITE, Color::WHITE);
        assert_eq!(theme.palette.background.default.to_string(), "#121212");
        assert_eq!(theme.palette.text.primary, Color::WHITE);
        assert!(theme.baseline_css().contains("color-scheme: dark"));
    }

    #[test]
    fn test_spacing() {
        let theme = Theme::default();
        assert_eq!(theme.spacing(4), "32px");
        assert_eq!(theme.spacing(0), "0px");
    }

    #[test]
    fn test_options_defaults_match_default_theme() {
        let options = ThemeOptions::from_json("{}").unwrap();
        assert_eq!(Theme::from_options(&options).unwrap(), Theme::default());
    }

    #[test]
    fn test_options_partial_palette() {
        let options =
            ThemeOptions::from_json(r##"{"palette": {"mode": "dark", "primary": {"main": "#2e7d32"}}}"##)
                .unwrap();
        let theme = Theme::from_options(&options).unwrap();
        assert_eq!(theme.palette.mode, ThemeMode::Dark);
        assert_eq!(theme.palette.primary.main.to_string(), "#2e7d32");
        assert_eq!(theme.palette.secondary.main.to_string(), "#dc004e");
    }

    #[test]
    fn test_options_reject_unknown_keys() {
        let err = ThemeOptions::from_json(r##"{"palette": {"tertiary": {"main": "#000"}}}"##);
        assert!(matches!(err, Err(ThemeError::InvalidOptions(_))));

        let err = ThemeOptions::from_json(r#"{"typography": {}}"#);
        assert!(matches!(err, Err(ThemeError::InvalidOptions(_))));
    }

    #[test]
    fn test_options_reject_bad_color() {
        let options =
            ThemeOptions::from_json(r#"{"palette": {"secondary": {"main": "pink"}}}"#).unwrap();
        assert!(matches!(
            Theme::from_options(&options),
            Err(ThemeError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ThemeOptions::load(Path::new("/nonexistent/clickport-theme.json"));
        assert!(matches!(err, Err(ThemeError::Read { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r#"{"palette": {"mode": "dark"}}"#).unwrap();

        let options = ThemeOptions::load(&path).unwrap();
        assert_eq!(options.palette.mode, ThemeMode::Dark);
    }
}
