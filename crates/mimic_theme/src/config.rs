//! Theme configuration (mimic.toml)
//!
//! ```toml
//! style = "auto"            # auto | fluent | adwaita | classic
//!
//! [scrollbar]               # optional, the style's own colors otherwise
//! thumb_inactive = "#C1C1C1"
//! thumb_active = "#A8A8A8"
//! track = "#F0F0F0"
//! ```
//!
//! The environment can point at a config file with `MIMIC_THEME_CONFIG`
//! and override its style with `MIMIC_THEME_STYLE`.

use crate::error::{Result, ThemeError};
use crate::platform::Platform;
use crate::styling::ScrollbarColors;
use crate::theme::NativeTheme;
use crate::themes::platform::platform_theme;
use crate::themes::{ClassicTheme, LinuxTheme, TokenTheme, WindowsTheme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Path of a config file to load
pub const CONFIG_ENV: &str = "MIMIC_THEME_CONFIG";
/// Style override, one of the [`ThemeStyle`] names
pub const STYLE_ENV: &str = "MIMIC_THEME_STYLE";

/// Built-in style selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeStyle {
    /// The native style of the current platform
    #[default]
    Auto,
    Fluent,
    Adwaita,
    Classic,
}

impl ThemeStyle {
    pub const ALL: [ThemeStyle; 4] = [
        ThemeStyle::Auto,
        ThemeStyle::Fluent,
        ThemeStyle::Adwaita,
        ThemeStyle::Classic,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ThemeStyle::Auto => "auto",
            ThemeStyle::Fluent => "fluent",
            ThemeStyle::Adwaita => "adwaita",
            ThemeStyle::Classic => "classic",
        }
    }

    /// Replace `Auto` with the concrete style for `platform`
    pub const fn resolve_for(self, platform: Platform) -> ThemeStyle {
        match self {
            ThemeStyle::Auto => match platform {
                Platform::Windows => ThemeStyle::Fluent,
                Platform::Linux | Platform::MacOS | Platform::Other => ThemeStyle::Adwaita,
            },
            style => style,
        }
    }

    pub const fn resolve(self) -> ThemeStyle {
        self.resolve_for(Platform::current())
    }

    /// A fresh theme of this style with its default colors
    pub fn theme(self) -> TokenTheme {
        match self {
            ThemeStyle::Auto => platform_theme(),
            ThemeStyle::Fluent => WindowsTheme::theme(),
            ThemeStyle::Adwaita => LinuxTheme::theme(),
            ThemeStyle::Classic => ClassicTheme::theme(),
        }
    }

    pub fn build(self) -> Box<dyn NativeTheme> {
        Box::new(self.theme())
    }
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeStyle {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        ThemeStyle::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ThemeError::UnknownStyle(s.to_string()))
    }
}

/// Top-level theme configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub style: ThemeStyle,
    /// Replaces the style's default scrollbar colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrollbar: Option<ScrollbarColors>,
}

impl ThemeConfig {
    pub fn new(style: ThemeStyle) -> Self {
        Self {
            style,
            scrollbar: None,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Configuration from the process environment.
    ///
    /// Never fails: unreadable files and unknown styles are logged and
    /// skipped so a bad environment cannot keep an application from drawing.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)).unwrap_or_else(|err| {
                tracing::warn!("Ignoring {}: {}", CONFIG_ENV, err);
                Self::default()
            }),
            None => Self::default(),
        };

        if let Some(value) = lookup(STYLE_ENV) {
            match value.parse() {
                Ok(style) => config.style = style,
                Err(err) => tracing::warn!("Ignoring {}: {}", STYLE_ENV, err),
            }
        }
        config
    }

    /// Build the configured theme with its colors applied
    pub fn build(&self) -> Box<dyn NativeTheme> {
        let theme = self.style.theme();
        if let Some(colors) = self.scrollbar {
            theme.styling().set_scrollbar_colors(colors);
        }
        tracing::debug!(
            "ThemeConfig::build - style {} resolved to {}",
            self.style,
            theme.name()
        );
        Box::new(theme)
    }
}
