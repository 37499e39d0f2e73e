//! Mimic Native Theme
//!
//! Draws form controls (buttons, check boxes, text fields, scrollbars, menus,
//! sliders, progress bars) so they look like the native controls of a
//! platform.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mimic_theme::{instance, ExtraParams, Part, State};
//! use mimic_paint::{PaintContext, Rect};
//!
//! let theme = mimic_theme::instance();
//! let size = theme.part_size(Part::PushButton, State::Normal, &ExtraParams::None)?;
//!
//! let mut ctx = PaintContext::new();
//! theme.paint(
//!     &mut ctx,
//!     Part::PushButton,
//!     State::Hovered,
//!     Rect::from_size(size),
//!     &ExtraParams::None,
//! )?;
//! ```
//!
//! # Parts, states and extra params
//!
//! - [`Part`]: the closed set of drawable controls
//! - [`State`]: disabled, hovered, normal or pressed
//! - [`ExtraParams`]: per-part details such as "checked" or a progress value.
//!   [`Part::extra_kind`] tells which variant a part reads; passing another
//!   one is rejected with [`ThemeError::ExtraMismatch`].
//!
//! # Styles
//!
//! Built-in styles are token bundles drawn by one shared painter:
//!
//! - [`WindowsTheme`]: Fluent Design (Windows 11)
//! - [`LinuxTheme`]: GNOME Adwaita
//! - [`ClassicTheme`]: bevelled 3D controls, honours `classic_state` flags
//!
//! # The process-wide theme
//!
//! [`instance`] returns the one theme of the process, picked from
//! [`ThemeConfig::from_env`] on first use unless [`install`] or
//! [`init_from_config`] chose one at startup. Scrollbar colors can be
//! changed at any time with [`NativeTheme::set_scrollbar_colors`].

pub mod config;
pub mod error;
pub mod extra;
pub mod part;
pub mod platform;
pub mod state;
pub mod styling;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use config::{ThemeConfig, ThemeStyle};
pub use error::{Result, ThemeError};
pub use extra::*;
pub use part::{ArrowDirection, Part, State};
pub use platform::Platform;
pub use state::{init_from_config, install, instance, try_instance};
pub use styling::{ScrollbarColors, StylingState};
pub use theme::NativeTheme;
pub use themes::classic::classic_state;
pub use themes::{platform::platform_theme, ClassicTheme, LinuxTheme, TokenTheme, WindowsTheme};
