//! Windows Fluent Design 2 control style
//!
//! Native-styled controls as drawn by the Windows 11 visual styles engine:
//! - Accent color: Windows Blue (#0078D4)
//! - Corner radii: 4px (controls), 2px (check boxes), 8px (flyouts)
//! - 17px scrollbars with rounded, inset thumbs
//! - Flat faces with a 1px control stroke, no bevels

use crate::styling::ScrollbarColors;
use crate::themes::painter::TokenTheme;
use crate::tokens::*;
use mimic_paint::{Color, Size};

/// Windows-native controls inspired by Fluent Design System 2 (Windows 11)
pub struct WindowsTheme;

impl WindowsTheme {
    pub const NAME: &'static str = "Windows";

    pub fn tokens() -> ThemeTokens {
        ThemeTokens {
            metrics: ControlMetrics {
                // Default button and check box metrics from the Win32 dialog units
                push_button: Size::new(80, 24),
                checkbox_size: 13,
                radio_size: 13,
                scrollbar_thickness: 17,
                scrollbar_thumb_inset: 4,
                ..Default::default()
            },
            palette: ControlPalette {
                // Control fill - ControlFillColorDefault over the window background
                face: Color::from_hex(0xFDFDFD),
                face_hover: Color::from_hex(0xF9F9F9),
                face_pressed: Color::from_hex(0xF0F0F0),
                face_disabled: Color::from_hex(0xF5F5F5),

                // ControlStrokeColor
                border: Color::from_hex(0xBCBCBC),
                border_hover: Color::from_hex(0xA8A8A8),
                border_focus: Color::from_hex(0x0078D4),
                border_disabled: Color::from_hex(0xDCDCDC),

                // Accent - Windows Blue
                accent: Color::from_hex(0x0078D4),
                accent_hover: Color::from_hex(0x106EBE),
                accent_pressed: Color::from_hex(0x005A9E),

                // Glyphs
                glyph: Color::from_hex(0x1A1A1A),
                glyph_on_accent: Color::WHITE,
                glyph_disabled: Color::from_hex(0xA0A0A0),

                // TextBox
                field: Color::WHITE,
                field_disabled: Color::from_hex(0xF3F3F3),

                // MenuFlyout (AcrylicInAppFillColorDefault without blur)
                menu: Color::from_hex(0xF9F9F9),
                menu_border: Color::from_hex(0xE5E5E5),
                menu_highlight: Color::from_hex(0x000000).with_alpha(0x0F),
                menu_separator: Color::from_hex(0xE0E0E0),
                menu_gutter: Color::from_hex(0xF0F0F0),

                track: Color::from_hex(0xE6E6E6),
                panel: Color::from_hex(0xF3F3F3),
                gripper: Color::from_hex(0x8A8A8A),

                // Fluent draws no bevels; kept for bevelled overrides
                bevel_light: Color::WHITE,
                bevel_shadow: Color::from_hex(0xD0D0D0),
                bevel_dark_shadow: Color::from_hex(0xA0A0A0),
            },
            radii: RadiusTokens {
                control: 4, // Buttons, TextBox, ComboBox
                check: 3,
                menu: 8, // Flyout
                thumb: 3,
                bar: 2,
            },
            scrollbar: ScrollbarColors::new(
                Color::from_hex(0x8A8A8A),
                Color::from_hex(0x5F5F5F),
                Color::from_hex(0xF9F9F9),
            ),
            bevelled: false,
            honors_classic_state: false,
            unthemed: &[],
        }
    }

    pub fn theme() -> TokenTheme {
        TokenTheme::new(Self::NAME, Self::tokens())
    }
}
