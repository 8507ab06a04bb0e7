//! Color themes and the persisted preference.
//!
//! The preference is the one piece of durable state in the application: a
//! bare `"dark"` or `"light"` string stored under a fixed file name in the
//! user config directory, read once at startup and rewritten on toggle.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use raylib::prelude::*;
use tracing::warn;

/// File name under the app config directory holding the preference.
pub const PREFERENCE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

pub fn preference_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("showcase").join(PREFERENCE_KEY))
}

/// Read the stored preference. A missing file is a first run; anything
/// unrecognized falls back to the default rather than erroring.
pub fn load(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(raw) => {
            let raw = raw.trim();
            Theme::parse(raw).unwrap_or_else(|| {
                warn!(value = raw, "unrecognized theme preference, using light");
                Theme::Light
            })
        }
        Err(_) => Theme::Light,
    }
}

pub fn store(path: &Path, theme: Theme) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, theme.as_str())
        .with_context(|| format!("writing {}", path.display()))
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub surface_border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_text: Color,
    pub chip_bg: Color,
    pub chip_text: Color,
    pub dot_idle: Color,
    pub control_bg: Color,
    pub control_icon: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::new(227, 240, 248, 255),
            surface: Color::new(255, 255, 255, 255),
            surface_border: Color::new(210, 222, 230, 255),
            text_primary: Color::new(34, 40, 49, 255),
            text_muted: Color::new(108, 117, 125, 255),
            accent: Color::new(91, 192, 222, 255),
            accent_text: Color::new(255, 255, 255, 255),
            chip_bg: Color::new(222, 235, 242, 255),
            chip_text: Color::new(52, 73, 94, 255),
            dot_idle: Color::new(178, 196, 208, 255),
            control_bg: Color::new(255, 255, 255, 255),
            control_icon: Color::new(52, 73, 94, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::new(30, 30, 30, 255),
            surface: Color::new(44, 44, 52, 255),
            surface_border: Color::new(66, 66, 78, 255),
            text_primary: Color::new(234, 234, 234, 255),
            text_muted: Color::new(158, 158, 168, 255),
            accent: Color::new(91, 192, 222, 255),
            accent_text: Color::new(20, 24, 28, 255),
            chip_bg: Color::new(58, 62, 72, 255),
            chip_text: Color::new(200, 210, 220, 255),
            dot_idle: Color::new(90, 94, 104, 255),
            control_bg: Color::new(44, 44, 52, 255),
            control_icon: Color::new(220, 224, 230, 255),
        }
    }
}
