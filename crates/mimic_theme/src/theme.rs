//! The native theme contract

use crate::error::Result;
use crate::extra::ExtraParams;
use crate::part::{Part, State};
use crate::styling::{ScrollbarColors, StylingState};
use mimic_paint::{Canvas, Color, Rect, Size};

/// Draws UI controls (buttons, text fields, scrollbars, menus, ...) so they
/// look like the native controls of a platform.
///
/// The supported controls are listed in [`Part`]. Each part can be in any
/// [`State`]; what a state looks like is up to the part. Parts that need
/// more than a state read an [`ExtraParams`] record, see
/// [`Part::extra_kind`].
///
/// Implementations are strategy objects: besides the [`StylingState`] they
/// hold no per-call state, so measuring or painting twice with the same
/// inputs gives the same result.
pub trait NativeTheme: Send + Sync {
    /// Human readable style name, used in logs and errors
    fn name(&self) -> &str;

    /// Default size of the part.
    ///
    /// Parts without an intrinsic extent (backgrounds, text fields, progress
    /// bars) report zero along the dimension the caller decides.
    ///
    /// # Errors
    ///
    /// [`ThemeError::ExtraMismatch`](crate::ThemeError::ExtraMismatch) when
    /// `extra` belongs to another part, and
    /// [`ThemeError::Unthemed`](crate::ThemeError::Unthemed) when this theme
    /// has no visual for the part.
    fn part_size(&self, part: Part, state: State, extra: &ExtraParams) -> Result<Size>;

    /// Paint the part into `rect` on `canvas`.
    ///
    /// Nothing is written outside `rect` unless
    /// [`Part::may_overflow_bounds`] says so. Errors as for
    /// [`part_size`](NativeTheme::part_size).
    fn paint(
        &self,
        canvas: &mut dyn Canvas,
        part: Part,
        state: State,
        rect: Rect,
        extra: &ExtraParams,
    ) -> Result<()>;

    /// Styling state read by paint
    fn styling(&self) -> &StylingState;

    /// Supports theme specific scrollbar colors.
    ///
    /// Applies to every later paint call on this theme, from any thread. A
    /// paint already in progress keeps the colors it started with.
    fn set_scrollbar_colors(&self, inactive: Color, active: Color, track: Color) {
        self.styling()
            .set_scrollbar_colors(ScrollbarColors::new(inactive, active, track));
    }

    fn scrollbar_colors(&self) -> ScrollbarColors {
        self.styling().scrollbar_colors()
    }
}
