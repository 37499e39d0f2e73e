//! Platform-native styles

mod linux;
mod windows;

pub use linux::LinuxTheme;
pub use windows::WindowsTheme;

use crate::platform::Platform;
use crate::themes::TokenTheme;

/// The native style of the platform this binary was built for
pub fn platform_theme() -> TokenTheme {
    match Platform::current() {
        Platform::Windows => WindowsTheme::theme(),
        Platform::Linux | Platform::MacOS | Platform::Other => LinuxTheme::theme(),
    }
}
