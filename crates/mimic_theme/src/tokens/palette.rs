//! Color tokens for control rendering

use crate::part::State;
use mimic_paint::Color;

/// Complete set of control colors for one style
#[derive(Clone, Debug)]
pub struct ControlPalette {
    // Button faces (push buttons, arrows, spin buttons, trackbar thumbs)
    pub face: Color,
    pub face_hover: Color,
    pub face_pressed: Color,
    pub face_disabled: Color,

    // Borders
    pub border: Color,
    pub border_hover: Color,
    pub border_focus: Color,
    pub border_disabled: Color,

    // Accent (checked boxes, default buttons, progress fill, slider thumbs)
    pub accent: Color,
    pub accent_hover: Color,
    pub accent_pressed: Color,

    // Glyphs (check marks, arrows)
    pub glyph: Color,
    pub glyph_on_accent: Color,
    pub glyph_disabled: Color,

    // Text fields and list boxes
    pub field: Color,
    pub field_disabled: Color,

    // Menus
    pub menu: Color,
    pub menu_border: Color,
    pub menu_highlight: Color,
    pub menu_separator: Color,
    pub menu_gutter: Color,

    // Tracks behind progress bars and sliders
    pub track: Color,

    pub panel: Color,
    pub gripper: Color,

    // 3D bevel edges, used by bevelled styles
    pub bevel_light: Color,
    pub bevel_shadow: Color,
    pub bevel_dark_shadow: Color,
}

impl ControlPalette {
    pub fn face(&self, state: State) -> Color {
        match state {
            State::Disabled => self.face_disabled,
            State::Hovered => self.face_hover,
            State::Normal => self.face,
            State::Pressed => self.face_pressed,
        }
    }

    pub fn border(&self, state: State) -> Color {
        match state {
            State::Disabled => self.border_disabled,
            State::Hovered | State::Pressed => self.border_hover,
            State::Normal => self.border,
        }
    }

    pub fn accent(&self, state: State) -> Color {
        match state {
            State::Disabled => self.accent.mix(self.face_disabled, 0.6),
            State::Hovered => self.accent_hover,
            State::Normal => self.accent,
            State::Pressed => self.accent_pressed,
        }
    }

    pub fn glyph(&self, state: State) -> Color {
        match state {
            State::Disabled => self.glyph_disabled,
            _ => self.glyph,
        }
    }
}
