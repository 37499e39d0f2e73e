//! Process-wide native theme singleton
//!
//! One theme serves the whole process. It is chosen either explicitly at
//! startup ([`install`], [`init_from_config`]) or lazily from the environment
//! on the first call to [`instance`]. Once chosen it never changes; only its
//! styling state (scrollbar colors) can be updated afterwards.

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};
use crate::theme::NativeTheme;
use std::sync::OnceLock;

/// Global theme instance
static THEME: OnceLock<Box<dyn NativeTheme>> = OnceLock::new();

/// Make `theme` the process-wide theme.
///
/// Fails with [`ThemeError::AlreadyInitialized`] once a theme is active,
/// including one selected lazily by [`instance`].
pub fn install(theme: Box<dyn NativeTheme>) -> Result<()> {
    let name = theme.name().to_string();
    THEME.set(theme).map_err(|rejected| {
        tracing::warn!(
            "install: {} rejected, {} is already active",
            rejected.name(),
            current_name()
        );
        ThemeError::AlreadyInitialized
    })?;
    tracing::debug!("Native theme installed: {}", name);
    Ok(())
}

/// Build the theme described by `config` and install it
pub fn init_from_config(config: &ThemeConfig) -> Result<()> {
    if THEME.get().is_some() {
        return Err(ThemeError::AlreadyInitialized);
    }
    install(config.build())
}

/// The process-wide theme.
///
/// The first call without a prior [`install`] selects the style from
/// [`ThemeConfig::from_env`]. Every call returns the same object.
pub fn instance() -> &'static dyn NativeTheme {
    THEME
        .get_or_init(|| {
            let config = ThemeConfig::from_env();
            tracing::debug!("Selecting native theme for style {}", config.style);
            config.build()
        })
        .as_ref()
}

/// The process-wide theme, if one has been selected yet
pub fn try_instance() -> Option<&'static dyn NativeTheme> {
    THEME.get().map(|theme| theme.as_ref())
}

fn current_name() -> &'static str {
    try_instance().map_or("none", |theme| theme.name())
}
