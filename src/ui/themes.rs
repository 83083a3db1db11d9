use std::path::Path;
use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("I/O error reading theme: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid theme file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid colour `{value}` for `{token}`")]
    InvalidColor { token: &'static str, value: String },

    #[error("unknown theme `{0}` (expected default, dark, light or a path to a .toml file)")]
    UnknownTheme(String),
}

/// Colour tokens used by the terminal surface.
///
/// `Color::Reset` stands for "inherit"/"transparent": the terminal's own
/// foreground or background shows through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub background: Color,
    pub active_bg: Color,
    pub active_text: Color,
    pub hover_bg: Color,
    pub hover_text: Color,
    pub disabled_text: Color,
}

#[derive(Deserialize, Default)]
struct ThemeFile {
    #[serde(default)]
    palette: Palette,
}

#[derive(Deserialize, Default)]
struct Palette {
    text: Option<String>,
    background: Option<String>,
    active_bg: Option<String>,
    active_text: Option<String>,
    hover_bg: Option<String>,
    hover_text: Option<String>,
    disabled_text: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            text: Color::Reset,
            background: Color::Reset,
            active_bg: Color::Rgb(0x00, 0x7b, 0xff),
            active_text: Color::Rgb(0xff, 0xff, 0xff),
            hover_bg: Color::Rgb(0xe0, 0xe0, 0xe0),
            hover_text: Color::Rgb(0x00, 0x00, 0x00),
            disabled_text: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            text: Color::Gray,
            background: Color::Rgb(11, 12, 13),
            active_bg: Color::Cyan,
            active_text: Color::Black,
            hover_bg: Color::Rgb(60, 60, 70),
            hover_text: Color::White,
            disabled_text: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Theme {
            text: Color::Black,
            background: Color::White,
            active_bg: Color::Blue,
            active_text: Color::White,
            hover_bg: Color::Rgb(0xe0, 0xe0, 0xe0),
            hover_text: Color::Black,
            disabled_text: Color::Gray,
        }
    }

    /// Parse a theme from TOML. Tokens missing from the `[palette]` table
    /// keep their default value.
    pub fn from_toml(s: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(s)?;
        let p = file.palette;
        let base = Theme::default();
        Ok(Theme {
            text: token("text", p.text, base.text)?,
            background: token("background", p.background, base.background)?,
            active_bg: token("active_bg", p.active_bg, base.active_bg)?,
            active_text: token("active_text", p.active_text, base.active_text)?,
            hover_bg: token("hover_bg", p.hover_bg, base.hover_bg)?,
            hover_text: token("hover_text", p.hover_text, base.hover_text)?,
            disabled_text: token("disabled_text", p.disabled_text, base.disabled_text)?,
        })
    }

    /// Resolve a built-in theme name or a path to a theme file.
    pub fn resolve(name_or_path: &str) -> Result<Self, ThemeError> {
        match name_or_path {
            "default" => Ok(Theme::default()),
            "dark" => Ok(Theme::dark()),
            "light" => Ok(Theme::light()),
            other if other.ends_with(".toml") || Path::new(other).is_file() => {
                let s = std::fs::read_to_string(other)?;
                Theme::from_toml(&s)
            }
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

fn token(name: &'static str, value: Option<String>, fallback: Color) -> Result<Color, ThemeError> {
    match value {
        None => Ok(fallback),
        Some(v) => parse_color(&v).ok_or(ThemeError::InvalidColor { token: name, value: v }),
    }
}

/// Accepts `#rrggbb`, ratatui colour names and `inherit`/`transparent`.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s.to_ascii_lowercase().as_str() {
        "inherit" | "transparent" | "reset" => Some(Color::Reset),
        _ => Color::from_str(s).ok(),
    }
}
