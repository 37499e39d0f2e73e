//! Control parts and interaction states

use crate::error::{Result, ThemeError};
use crate::extra::ExtraKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The part to be painted / sized
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Part {
    Checkbox,
    InnerSpinButton,
    MenuList,
    MenuCheck,
    MenuCheckBackground,
    MenuPopupArrow,
    MenuPopupBackground,
    MenuPopupGutter,
    MenuPopupSeparator,
    MenuItemBackground,
    ProgressBar,
    PushButton,
    Radio,

    // Painters index their arrow glyph tables by `ArrowDirection`, which is
    // derived from the distance to `ScrollbarDownArrow`. Keep these four
    // together and in this order.
    ScrollbarDownArrow,
    ScrollbarLeftArrow,
    ScrollbarRightArrow,
    ScrollbarUpArrow,

    ScrollbarHorizontalThumb,
    ScrollbarVerticalThumb,
    ScrollbarHorizontalTrack,
    ScrollbarVerticalTrack,
    ScrollbarHorizontalGripper,
    ScrollbarVerticalGripper,
    SliderTrack,
    SliderThumb,
    TabPanelBackground,
    TextField,
    TrackbarThumb,
    TrackbarTrack,
    WindowResizeGripper,
}

/// Direction of a scrollbar arrow, in `Part` order
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ArrowDirection {
    Down,
    Left,
    Right,
    Up,
}

impl ArrowDirection {
    pub const ALL: [ArrowDirection; 4] = [
        ArrowDirection::Down,
        ArrowDirection::Left,
        ArrowDirection::Right,
        ArrowDirection::Up,
    ];

    /// Index into per-direction lookup tables
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Part {
    /// Number of real parts (the old "max part" sentinel)
    pub const COUNT: usize = 30;

    /// Every part in numeric order
    pub const ALL: [Part; Part::COUNT] = [
        Part::Checkbox,
        Part::InnerSpinButton,
        Part::MenuList,
        Part::MenuCheck,
        Part::MenuCheckBackground,
        Part::MenuPopupArrow,
        Part::MenuPopupBackground,
        Part::MenuPopupGutter,
        Part::MenuPopupSeparator,
        Part::MenuItemBackground,
        Part::ProgressBar,
        Part::PushButton,
        Part::Radio,
        Part::ScrollbarDownArrow,
        Part::ScrollbarLeftArrow,
        Part::ScrollbarRightArrow,
        Part::ScrollbarUpArrow,
        Part::ScrollbarHorizontalThumb,
        Part::ScrollbarVerticalThumb,
        Part::ScrollbarHorizontalTrack,
        Part::ScrollbarVerticalTrack,
        Part::ScrollbarHorizontalGripper,
        Part::ScrollbarVerticalGripper,
        Part::SliderTrack,
        Part::SliderThumb,
        Part::TabPanelBackground,
        Part::TextField,
        Part::TrackbarThumb,
        Part::TrackbarTrack,
        Part::WindowResizeGripper,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Part> {
        Part::ALL.get(index).copied()
    }

    /// Kebab-case name, as used in config files and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Part::Checkbox => "checkbox",
            Part::InnerSpinButton => "inner-spin-button",
            Part::MenuList => "menu-list",
            Part::MenuCheck => "menu-check",
            Part::MenuCheckBackground => "menu-check-background",
            Part::MenuPopupArrow => "menu-popup-arrow",
            Part::MenuPopupBackground => "menu-popup-background",
            Part::MenuPopupGutter => "menu-popup-gutter",
            Part::MenuPopupSeparator => "menu-popup-separator",
            Part::MenuItemBackground => "menu-item-background",
            Part::ProgressBar => "progress-bar",
            Part::PushButton => "push-button",
            Part::Radio => "radio",
            Part::ScrollbarDownArrow => "scrollbar-down-arrow",
            Part::ScrollbarLeftArrow => "scrollbar-left-arrow",
            Part::ScrollbarRightArrow => "scrollbar-right-arrow",
            Part::ScrollbarUpArrow => "scrollbar-up-arrow",
            Part::ScrollbarHorizontalThumb => "scrollbar-horizontal-thumb",
            Part::ScrollbarVerticalThumb => "scrollbar-vertical-thumb",
            Part::ScrollbarHorizontalTrack => "scrollbar-horizontal-track",
            Part::ScrollbarVerticalTrack => "scrollbar-vertical-track",
            Part::ScrollbarHorizontalGripper => "scrollbar-horizontal-gripper",
            Part::ScrollbarVerticalGripper => "scrollbar-vertical-gripper",
            Part::SliderTrack => "slider-track",
            Part::SliderThumb => "slider-thumb",
            Part::TabPanelBackground => "tab-panel-background",
            Part::TextField => "text-field",
            Part::TrackbarThumb => "trackbar-thumb",
            Part::TrackbarTrack => "trackbar-track",
            Part::WindowResizeGripper => "window-resize-gripper",
        }
    }

    /// The extra params variant this part reads, `None` if it reads nothing
    pub const fn extra_kind(self) -> Option<ExtraKind> {
        match self {
            Part::Checkbox | Part::Radio | Part::PushButton => Some(ExtraKind::Button),
            Part::InnerSpinButton => Some(ExtraKind::InnerSpin),
            Part::MenuList => Some(ExtraKind::MenuList),
            Part::MenuCheck | Part::MenuCheckBackground => Some(ExtraKind::MenuCheck),
            Part::MenuPopupArrow => Some(ExtraKind::MenuArrow),
            Part::MenuPopupSeparator => Some(ExtraKind::MenuSeparator),
            Part::MenuItemBackground => Some(ExtraKind::MenuItem),
            Part::ProgressBar => Some(ExtraKind::ProgressBar),
            Part::ScrollbarDownArrow
            | Part::ScrollbarLeftArrow
            | Part::ScrollbarRightArrow
            | Part::ScrollbarUpArrow => Some(ExtraKind::ScrollbarArrow),
            Part::ScrollbarHorizontalThumb
            | Part::ScrollbarVerticalThumb
            | Part::ScrollbarHorizontalGripper
            | Part::ScrollbarVerticalGripper => Some(ExtraKind::ScrollbarThumb),
            Part::ScrollbarHorizontalTrack | Part::ScrollbarVerticalTrack => {
                Some(ExtraKind::ScrollbarTrack)
            }
            Part::SliderTrack | Part::SliderThumb => Some(ExtraKind::Slider),
            Part::TextField => Some(ExtraKind::TextField),
            Part::TrackbarThumb | Part::TrackbarTrack => Some(ExtraKind::Trackbar),
            Part::MenuPopupBackground
            | Part::MenuPopupGutter
            | Part::TabPanelBackground
            | Part::WindowResizeGripper => None,
        }
    }

    /// Direction for the four scrollbar arrow parts
    pub fn arrow_direction(self) -> Option<ArrowDirection> {
        let offset = (self as usize).checked_sub(Part::ScrollbarDownArrow as usize)?;
        ArrowDirection::ALL.get(offset).copied()
    }

    /// Parts whose paint may extend past the rect they are given.
    ///
    /// The menu popup arrow is drawn at its natural glyph size centered on the
    /// rect, so a rect smaller than the glyph is overflowed. Every other part
    /// stays inside its rect.
    pub const fn may_overflow_bounds(self) -> bool {
        matches!(self, Part::MenuPopupArrow)
    }
}

impl TryFrom<u32> for Part {
    type Error = ThemeError;

    fn try_from(value: u32) -> Result<Self> {
        Part::from_index(value as usize).ok_or(ThemeError::PartOutOfRange(value))
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Part {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Part::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| ThemeError::UnknownPart(s.to_string()))
    }
}

/// The state of the part. What each state looks like is part-specific.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum State {
    Disabled,
    Hovered,
    Normal,
    Pressed,
}

impl State {
    /// Number of real states (the old "max state" sentinel)
    pub const COUNT: usize = 4;

    pub const ALL: [State; State::COUNT] =
        [State::Disabled, State::Hovered, State::Normal, State::Pressed];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<State> {
        State::ALL.get(index).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            State::Disabled => "disabled",
            State::Hovered => "hovered",
            State::Normal => "normal",
            State::Pressed => "pressed",
        }
    }
}

impl TryFrom<u32> for State {
    type Error = ThemeError;

    fn try_from(value: u32) -> Result<Self> {
        State::from_index(value as usize).ok_or(ThemeError::StateOutOfRange(value))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for State {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        State::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| ThemeError::UnknownState(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_discriminants() {
        for (i, part) in Part::ALL.iter().enumerate() {
            assert_eq!(part.index(), i, "{part}");
        }
        for (i, state) in State::ALL.iter().enumerate() {
            assert_eq!(state.index(), i, "{state}");
        }
    }

    #[test]
    fn scrollbar_arrows_keep_their_order() {
        let arrows = [
            Part::ScrollbarDownArrow,
            Part::ScrollbarLeftArrow,
            Part::ScrollbarRightArrow,
            Part::ScrollbarUpArrow,
        ];
        assert!(arrows.windows(2).all(|w| w[0].index() + 1 == w[1].index()));
        let dirs: Vec<_> = arrows.iter().filter_map(|p| p.arrow_direction()).collect();
        assert_eq!(dirs, ArrowDirection::ALL);
        assert_eq!(Part::ScrollbarHorizontalThumb.arrow_direction(), None);
        assert_eq!(Part::Checkbox.arrow_direction(), None);
    }

    #[test]
    fn numeric_conversion_rejects_sentinels() {
        assert_eq!(Part::try_from(0).unwrap(), Part::Checkbox);
        assert_eq!(Part::try_from(29).unwrap(), Part::WindowResizeGripper);
        assert!(matches!(
            Part::try_from(Part::COUNT as u32),
            Err(ThemeError::PartOutOfRange(30))
        ));
        assert!(matches!(
            State::try_from(State::COUNT as u32),
            Err(ThemeError::StateOutOfRange(4))
        ));
    }

    #[test]
    fn names_parse_back() {
        for part in Part::ALL {
            assert_eq!(part.name().parse::<Part>().unwrap(), part);
        }
        for state in State::ALL {
            assert_eq!(state.name().parse::<State>().unwrap(), state);
        }
        assert!("scrollbar".parse::<Part>().is_err());
    }

    #[test]
    fn only_the_popup_arrow_overflows() {
        let overflowing: Vec<_> = Part::ALL
            .into_iter()
            .filter(|p| p.may_overflow_bounds())
            .collect();
        assert_eq!(overflowing, vec![Part::MenuPopupArrow]);
    }
}
