//! Process-wide styling state attached to a theme
//!
//! The scrollbar colors are the one piece of mutable state a theme carries.
//! They live behind a lock so the theme can be shared between threads; paint
//! calls copy a snapshot once and draw the whole part from it.

use crate::error::{Result, ThemeError};
use mimic_paint::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Colors used by scrollbar thumbs and tracks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbarColors {
    /// Thumb color while the scrollbar is not being interacted with
    pub thumb_inactive: Color,
    /// Thumb color while hovered or dragged
    pub thumb_active: Color,
    pub track: Color,
}

impl ScrollbarColors {
    pub const fn new(thumb_inactive: Color, thumb_active: Color, track: Color) -> Self {
        Self {
            thumb_inactive,
            thumb_active,
            track,
        }
    }
}

/// Parses `inactive,active,track`, e.g. `#C1C1C1,#A8A8A8,#F0F0F0`
impl FromStr for ScrollbarColors {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let colors = s
            .split(',')
            .map(Color::parse)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        match colors.as_slice() {
            [inactive, active, track] => Ok(Self::new(*inactive, *active, *track)),
            _ => Err(ThemeError::InvalidColor(format!(
                "expected three comma separated colors, got {s:?}"
            ))),
        }
    }
}

/// Shared, mutable styling knobs of one theme instance
#[derive(Debug)]
pub struct StylingState {
    scrollbar: RwLock<ScrollbarColors>,
}

impl StylingState {
    pub fn new(scrollbar: ScrollbarColors) -> Self {
        Self {
            scrollbar: RwLock::new(scrollbar),
        }
    }

    /// Snapshot of the current scrollbar colors
    pub fn scrollbar_colors(&self) -> ScrollbarColors {
        // Plain Copy data: a panicked writer cannot leave it half-updated
        *self
            .scrollbar
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_scrollbar_colors(&self, colors: ScrollbarColors) {
        tracing::debug!(
            "StylingState::set_scrollbar_colors - inactive={} active={} track={}",
            colors.thumb_inactive,
            colors.thumb_active,
            colors.track
        );
        *self
            .scrollbar
            .write()
            .unwrap_or_else(PoisonError::into_inner) = colors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn set_replaces_snapshot() {
        let initial = ScrollbarColors::new(Color::gray(200), Color::gray(160), Color::gray(240));
        let state = StylingState::new(initial);
        let before = state.scrollbar_colors();

        let next = ScrollbarColors::new(Color::RED, Color::GREEN, Color::BLUE);
        state.set_scrollbar_colors(next);

        assert_eq!(before, initial);
        assert_eq!(state.scrollbar_colors(), next);
    }

    #[test]
    fn parses_color_triple() {
        let colors: ScrollbarColors = "#C1C1C1, #A8A8A8,#80F0F0F0".parse().unwrap();
        assert_eq!(colors.thumb_inactive, Color::from_hex(0xC1C1C1));
        assert_eq!(colors.thumb_active, Color::from_hex(0xA8A8A8));
        assert_eq!(colors.track, Color(0x80F0_F0F0));

        assert!(matches!(
            "#C1C1C1,#A8A8A8".parse::<ScrollbarColors>(),
            Err(ThemeError::InvalidColor(_))
        ));
        assert!(matches!(
            "#C1C1C1,nope,#A8A8A8".parse::<ScrollbarColors>(),
            Err(ThemeError::InvalidColor(_))
        ));
    }

    #[test]
    fn writes_from_another_thread_are_visible() {
        let state = Arc::new(StylingState::new(ScrollbarColors::new(
            Color::BLACK,
            Color::BLACK,
            Color::BLACK,
        )));
        let writer = Arc::clone(&state);
        thread::spawn(move || {
            writer.set_scrollbar_colors(ScrollbarColors::new(Color::WHITE, Color::WHITE, Color::WHITE))
        })
        .join()
        .unwrap();
        assert_eq!(state.scrollbar_colors().track, Color::WHITE);
    }
}
