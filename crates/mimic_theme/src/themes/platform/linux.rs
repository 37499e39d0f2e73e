//! Linux GNOME Adwaita control style
//!
//! Custom-drawn controls following libadwaita:
//! - Accent color: GNOME Blue (#3584E4)
//! - Corner radii: 6px default, pill shaped scrollbar and slider thumbs
//! - Slim 14px scrollbars
//! - Flat, lightly tinted button faces

use crate::styling::ScrollbarColors;
use crate::themes::painter::TokenTheme;
use crate::tokens::*;
use mimic_paint::{Color, Size};

/// Linux-native controls inspired by GNOME Adwaita (libadwaita/GTK 4)
pub struct LinuxTheme;

impl LinuxTheme {
    pub const NAME: &'static str = "Adwaita";

    pub fn tokens() -> ThemeTokens {
        ThemeTokens {
            metrics: ControlMetrics {
                checkbox_size: 14,
                radio_size: 14,
                push_button: Size::new(64, 34),
                inner_spin_button: Size::new(24, 16),
                menu_list_height: 34,
                menu_check_size: 14,
                menu_check_background_size: 20,
                menu_arrow_size: 10,
                menu_separator_height: 9,
                menu_gutter_width: 0,
                scrollbar_thickness: 14,
                scrollbar_min_thumb_length: 40,
                scrollbar_thumb_inset: 4,
                scrollbar_arrow_glyph: 6,
                gripper_size: 6,
                slider_track_thickness: 4,
                slider_thumb: Size::new(20, 20),
                trackbar_thumb: Size::new(20, 20),
                resize_gripper_size: 14,
                ..Default::default()
            },
            palette: ControlPalette {
                // Buttons - 10% currentColor over window_bg_color
                face: Color::from_hex(0xE8E8E7),
                face_hover: Color::from_hex(0xDEDEDD),
                face_pressed: Color::from_hex(0xCFCFCE),
                face_disabled: Color::from_hex(0xF1F1F0),

                // Borders
                border: Color::from_hex(0xCDCDCD),
                border_hover: Color::from_hex(0xBBBBBB),
                border_focus: Color::from_hex(0x3584E4).with_alpha(0x80),
                border_disabled: Color::from_hex(0xE0E0E0),

                // Accent - GNOME Blue
                accent: Color::from_hex(0x3584E4),
                accent_hover: Color::from_hex(0x1C71D8),
                accent_pressed: Color::from_hex(0x1A63C4),

                // Glyphs
                glyph: Color::from_hex(0x2E3436),
                glyph_on_accent: Color::WHITE,
                glyph_disabled: Color::from_hex(0x9A9996),

                // view_bg_color
                field: Color::WHITE,
                field_disabled: Color::from_hex(0xF5F5F5),

                // popover_bg_color
                menu: Color::WHITE,
                menu_border: Color::from_hex(0xD5D5D5),
                menu_highlight: Color::from_hex(0x000000).with_alpha(0x12),
                menu_separator: Color::from_hex(0xE4E4E4),
                menu_gutter: Color::WHITE,

                track: Color::from_hex(0xDEDDDA),
                panel: Color::from_hex(0xFAFAFA),
                gripper: Color::from_hex(0x9A9996),

                bevel_light: Color::WHITE,
                bevel_shadow: Color::from_hex(0xD5D5D5),
                bevel_dark_shadow: Color::from_hex(0xB0B0B0),
            },
            radii: RadiusTokens {
                control: 6, // Adwaita default
                check: 4,
                menu: 6,
                thumb: 7,
                bar: 3,
            },
            scrollbar: ScrollbarColors::new(
                Color::from_hex(0x9A9996),
                Color::from_hex(0x77767B),
                Color::from_hex(0xF6F5F4),
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
