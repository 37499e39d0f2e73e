//! Extra per-part parameters
//!
//! Some parts need more than a state to be drawn correctly. Each such part
//! reads one of the records below, carried in the [`ExtraParams`] sum type.
//! [`Part::extra_kind`] names the variant a part reads; themes reject any
//! other variant with [`ThemeError::ExtraMismatch`] instead of guessing.
//!
//! The record layouts are public interface: adding or removing a field breaks
//! every caller that builds the record.

use crate::error::{Result, ThemeError};
use crate::part::Part;
use mimic_paint::Color;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ButtonExtraParams {
    pub checked: bool,
    /// Whether the button state is indeterminate
    pub indeterminate: bool,
    /// Whether the button is the dialog's default button
    pub is_default: bool,
    pub has_border: bool,
    /// See [`classic_state`](crate::themes::classic::classic_state)
    pub classic_state: i32,
    pub background_color: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InnerSpinButtonExtraParams {
    pub spin_up: bool,
    pub read_only: bool,
    pub classic_state: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuArrowExtraParams {
    pub pointing_right: bool,
    /// Used with the disabled state: the item is both disabled and selected
    pub is_selected: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuCheckExtraParams {
    pub is_radio: bool,
    /// Used with the disabled state: the item is both disabled and selected
    pub is_selected: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuItemExtraParams {
    pub is_selected: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuListExtraParams {
    pub has_border: bool,
    pub has_border_radius: bool,
    /// Center of the drop-down arrow, in canvas coordinates
    pub arrow_x: i32,
    pub arrow_y: i32,
    pub background_color: Color,
    pub classic_state: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuSeparatorExtraParams {
    pub has_gutter: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressBarExtraParams {
    /// Animation input; themes never read a clock of their own
    pub animated_seconds: f64,
    pub determinate: bool,
    pub value_rect_x: i32,
    pub value_rect_y: i32,
    pub value_rect_width: i32,
    pub value_rect_height: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollbarArrowExtraParams {
    pub is_hovering: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollbarTrackExtraParams {
    pub is_upper: bool,
    pub track_x: i32,
    pub track_y: i32,
    pub track_width: i32,
    pub track_height: i32,
    pub classic_state: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollbarThumbExtraParams {
    pub is_hovering: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderExtraParams {
    pub vertical: bool,
    pub in_drag: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextFieldExtraParams {
    pub is_text_area: bool,
    pub is_listbox: bool,
    pub background_color: Color,
    pub is_read_only: bool,
    pub is_focused: bool,
    pub fill_content_area: bool,
    pub draw_edges: bool,
    pub classic_state: i32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackbarExtraParams {
    pub classic_state: i32,
}

/// Tag of an [`ExtraParams`] variant
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ExtraKind {
    Button,
    InnerSpin,
    MenuArrow,
    MenuCheck,
    MenuItem,
    MenuList,
    MenuSeparator,
    ProgressBar,
    ScrollbarArrow,
    ScrollbarTrack,
    ScrollbarThumb,
    Slider,
    TextField,
    Trackbar,
}

impl ExtraKind {
    pub const fn name(self) -> &'static str {
        match self {
            ExtraKind::Button => "button",
            ExtraKind::InnerSpin => "inner-spin",
            ExtraKind::MenuArrow => "menu-arrow",
            ExtraKind::MenuCheck => "menu-check",
            ExtraKind::MenuItem => "menu-item",
            ExtraKind::MenuList => "menu-list",
            ExtraKind::MenuSeparator => "menu-separator",
            ExtraKind::ProgressBar => "progress-bar",
            ExtraKind::ScrollbarArrow => "scrollbar-arrow",
            ExtraKind::ScrollbarTrack => "scrollbar-track",
            ExtraKind::ScrollbarThumb => "scrollbar-thumb",
            ExtraKind::Slider => "slider",
            ExtraKind::TextField => "text-field",
            ExtraKind::Trackbar => "trackbar",
        }
    }
}

impl fmt::Display for ExtraKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The extra parameters for one measure or paint call
///
/// `None` is valid for every part and means "all fields zero", the way an
/// untouched record would read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ExtraParams {
    #[default]
    None,
    Button(ButtonExtraParams),
    InnerSpin(InnerSpinButtonExtraParams),
    MenuArrow(MenuArrowExtraParams),
    MenuCheck(MenuCheckExtraParams),
    MenuItem(MenuItemExtraParams),
    MenuList(MenuListExtraParams),
    MenuSeparator(MenuSeparatorExtraParams),
    ProgressBar(ProgressBarExtraParams),
    ScrollbarArrow(ScrollbarArrowExtraParams),
    ScrollbarTrack(ScrollbarTrackExtraParams),
    ScrollbarThumb(ScrollbarThumbExtraParams),
    Slider(SliderExtraParams),
    TextField(TextFieldExtraParams),
    Trackbar(TrackbarExtraParams),
}

impl ExtraParams {
    pub const fn kind(&self) -> Option<ExtraKind> {
        Some(match self {
            ExtraParams::None => return None,
            ExtraParams::Button(_) => ExtraKind::Button,
            ExtraParams::InnerSpin(_) => ExtraKind::InnerSpin,
            ExtraParams::MenuArrow(_) => ExtraKind::MenuArrow,
            ExtraParams::MenuCheck(_) => ExtraKind::MenuCheck,
            ExtraParams::MenuItem(_) => ExtraKind::MenuItem,
            ExtraParams::MenuList(_) => ExtraKind::MenuList,
            ExtraParams::MenuSeparator(_) => ExtraKind::MenuSeparator,
            ExtraParams::ProgressBar(_) => ExtraKind::ProgressBar,
            ExtraParams::ScrollbarArrow(_) => ExtraKind::ScrollbarArrow,
            ExtraParams::ScrollbarTrack(_) => ExtraKind::ScrollbarTrack,
            ExtraParams::ScrollbarThumb(_) => ExtraKind::ScrollbarThumb,
            ExtraParams::Slider(_) => ExtraKind::Slider,
            ExtraParams::TextField(_) => ExtraKind::TextField,
            ExtraParams::Trackbar(_) => ExtraKind::Trackbar,
        })
    }

    /// Check that these params may accompany `part`
    pub fn validate_for(&self, part: Part) -> Result<()> {
        match self.kind() {
            None => Ok(()),
            Some(found) if part.extra_kind() == Some(found) => Ok(()),
            Some(found) => Err(ThemeError::ExtraMismatch {
                part,
                expected: part.extra_kind(),
                found,
            }),
        }
    }
}

macro_rules! extra_variant {
    ($($variant:ident($record:ty) => $accessor:ident),* $(,)?) => {
        impl ExtraParams {
            $(
                /// The record if this is the matching variant, otherwise its default
                pub fn $accessor(&self) -> $record {
                    match self {
                        ExtraParams::$variant(params) => *params,
                        _ => <$record>::default(),
                    }
                }
            )*
        }

        $(
            impl From<$record> for ExtraParams {
                fn from(params: $record) -> Self {
                    ExtraParams::$variant(params)
                }
            }
        )*
    };
}

extra_variant! {
    Button(ButtonExtraParams) => button,
    InnerSpin(InnerSpinButtonExtraParams) => inner_spin,
    MenuArrow(MenuArrowExtraParams) => menu_arrow,
    MenuCheck(MenuCheckExtraParams) => menu_check,
    MenuItem(MenuItemExtraParams) => menu_item,
    MenuList(MenuListExtraParams) => menu_list,
    MenuSeparator(MenuSeparatorExtraParams) => menu_separator,
    ProgressBar(ProgressBarExtraParams) => progress_bar,
    ScrollbarArrow(ScrollbarArrowExtraParams) => scrollbar_arrow,
    ScrollbarTrack(ScrollbarTrackExtraParams) => scrollbar_track,
    ScrollbarThumb(ScrollbarThumbExtraParams) => scrollbar_thumb,
    Slider(SliderExtraParams) => slider,
    TextField(TextFieldExtraParams) => text_field,
    Trackbar(TrackbarExtraParams) => trackbar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_accepted_everywhere() {
        for part in Part::ALL {
            assert!(ExtraParams::None.validate_for(part).is_ok(), "{part}");
        }
    }

    #[test]
    fn matching_variant_is_accepted() {
        let button: ExtraParams = ButtonExtraParams::default().into();
        assert!(button.validate_for(Part::PushButton).is_ok());
        assert!(button.validate_for(Part::Checkbox).is_ok());
        assert!(button.validate_for(Part::Radio).is_ok());
    }

    #[test]
    fn mismatched_variant_is_rejected() {
        let slider: ExtraParams = SliderExtraParams::default().into();
        let err = slider.validate_for(Part::PushButton).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::ExtraMismatch {
                part: Part::PushButton,
                expected: Some(ExtraKind::Button),
                found: ExtraKind::Slider,
            }
        ));
        assert!(slider.validate_for(Part::TabPanelBackground).is_err());
    }

    #[test]
    fn accessor_falls_back_to_default() {
        let params = ExtraParams::Slider(SliderExtraParams {
            vertical: true,
            in_drag: false,
        });
        assert!(params.slider().vertical);
        assert_eq!(params.button(), ButtonExtraParams::default());
        assert_eq!(ExtraParams::None.progress_bar(), ProgressBarExtraParams::default());
    }

    #[test]
    fn every_payload_part_names_a_kind() {
        let kinds: Vec<_> = Part::ALL.iter().filter_map(|p| p.extra_kind()).collect();
        for kind in [
            ExtraKind::Button,
            ExtraKind::InnerSpin,
            ExtraKind::MenuArrow,
            ExtraKind::MenuCheck,
            ExtraKind::MenuItem,
            ExtraKind::MenuList,
            ExtraKind::MenuSeparator,
            ExtraKind::ProgressBar,
            ExtraKind::ScrollbarArrow,
            ExtraKind::ScrollbarTrack,
            ExtraKind::ScrollbarThumb,
            ExtraKind::Slider,
            ExtraKind::TextField,
            ExtraKind::Trackbar,
        ] {
            assert!(kinds.contains(&kind), "no part reads {kind}");
        }
    }
}
