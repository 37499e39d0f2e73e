//! Classic control style
//!
//! The fallback renderer for hosts without a visual styles engine: gray 3D
//! faces, square corners, raised and sunken bevels. Callers driving a classic
//! host pass its frame-control flags through the `classic_state` payload
//! fields; this style reads them and lets them override the generic state.

use crate::part::{Part, State};
use crate::styling::ScrollbarColors;
use crate::themes::painter::TokenTheme;
use crate::tokens::*;
use mimic_paint::{Color, Size};

/// Bits of the `classic_state` payload fields
pub mod classic_state {
    /// Draw as disabled
    pub const INACTIVE: i32 = 0x0100;
    /// Draw pushed in
    pub const PUSHED: i32 = 0x0200;
    /// Draw checked
    pub const CHECKED: i32 = 0x0400;
    /// Draw hot-tracked
    pub const HOT: i32 = 0x1000;
}

/// Resolve the state a classic control should be drawn in.
///
/// Precedence follows the frame-control flags: inactive beats pushed, pushed
/// beats hot. With no flags set the generic state is used unchanged.
pub fn resolve_state(state: State, flags: i32) -> State {
    if flags & classic_state::INACTIVE != 0 {
        State::Disabled
    } else if flags & classic_state::PUSHED != 0 {
        State::Pressed
    } else if flags & classic_state::HOT != 0 {
        State::Hovered
    } else {
        state
    }
}

pub fn is_checked(flags: i32) -> bool {
    flags & classic_state::CHECKED != 0
}

/// Classic 3D controls
pub struct ClassicTheme;

impl ClassicTheme {
    pub const NAME: &'static str = "Classic";

    pub fn tokens() -> ThemeTokens {
        let face = Color::from_hex(0xC0C0C0);
        ThemeTokens {
            metrics: ControlMetrics {
                push_button: Size::new(75, 23),
                checkbox_size: 13,
                radio_size: 12,
                inner_spin_button: Size::new(16, 11),
                menu_list_height: 21,
                menu_check_size: 13,
                menu_check_background_size: 13,
                menu_arrow_size: 7,
                menu_separator_height: 8,
                scrollbar_thickness: 16,
                scrollbar_min_thumb_length: 8,
                scrollbar_thumb_inset: 0,
                scrollbar_arrow_glyph: 7,
                slider_thumb: Size::new(11, 21),
                trackbar_thumb: Size::new(11, 21),
                resize_gripper_size: 13,
                ..Default::default()
            },
            palette: ControlPalette {
                // COLOR_BTNFACE
                face,
                face_hover: face,
                face_pressed: face,
                face_disabled: face,

                // COLOR_WINDOWFRAME
                border: Color::BLACK,
                border_hover: Color::BLACK,
                border_focus: Color::BLACK,
                border_disabled: Color::from_hex(0x808080),

                // COLOR_HIGHLIGHT
                accent: Color::from_hex(0x000080),
                accent_hover: Color::from_hex(0x000080),
                accent_pressed: Color::from_hex(0x000080),

                // COLOR_BTNTEXT / COLOR_GRAYTEXT
                glyph: Color::BLACK,
                glyph_on_accent: Color::WHITE,
                glyph_disabled: Color::from_hex(0x808080),

                // COLOR_WINDOW
                field: Color::WHITE,
                field_disabled: face,

                // COLOR_MENU
                menu: face,
                menu_border: Color::from_hex(0x808080),
                menu_highlight: Color::from_hex(0x000080),
                menu_separator: Color::from_hex(0x808080),
                menu_gutter: face,

                track: Color::from_hex(0xE0E0E0),
                panel: face,
                gripper: Color::from_hex(0x808080),

                // COLOR_3DHILIGHT / COLOR_3DSHADOW / COLOR_3DDKSHADOW
                bevel_light: Color::WHITE,
                bevel_shadow: Color::from_hex(0x808080),
                bevel_dark_shadow: Color::from_hex(0x404040),
            },
            radii: RadiusTokens::none(),
            scrollbar: ScrollbarColors::new(face, face, Color::from_hex(0xE0E0E0)),
            bevelled: true,
            honors_classic_state: true,
            // Classic menus have no icon gutter
            unthemed: &[Part::MenuPopupGutter],
        }
    }

    pub fn theme() -> TokenTheme {
        TokenTheme::new(Self::NAME, Self::tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_generic_state() {
        assert_eq!(resolve_state(State::Normal, 0), State::Normal);
        assert_eq!(
            resolve_state(State::Normal, classic_state::PUSHED),
            State::Pressed
        );
        assert_eq!(
            resolve_state(State::Hovered, classic_state::INACTIVE | classic_state::PUSHED),
            State::Disabled
        );
        assert_eq!(resolve_state(State::Normal, classic_state::HOT), State::Hovered);
    }

    #[test]
    fn checked_flag() {
        assert!(is_checked(classic_state::CHECKED | classic_state::HOT));
        assert!(!is_checked(classic_state::PUSHED));
    }
}
