//! Built-in styles

pub mod classic;
pub mod painter;
pub mod platform;

pub use classic::ClassicTheme;
pub use painter::TokenTheme;
pub use platform::{LinuxTheme, WindowsTheme};
