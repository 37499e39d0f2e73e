//! The drawing surface seen by themes

use crate::color::Color;
use crate::primitives::{Point, Rect};

/// A drawing destination owned by the caller
///
/// Implementations must honour the clip stack: nothing may be written outside
/// the intersection of every pushed clip rect. Themes rely on this to keep
/// their output inside the bounds they were given.
pub trait Canvas {
    /// Fill every pixel of `rect`
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill `rect` with its corners rounded by `radius`
    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color);

    /// Fill the ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Fill a closed polygon (even-odd rule, sampled at pixel centers)
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// One pixel wide line, both endpoints inclusive
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    fn push_clip(&mut self, rect: Rect);

    fn pop_clip(&mut self);

    /// Outline `rect` with an inner border of `width` pixels
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32) {
        if rect.is_empty() || width <= 0 {
            return;
        }
        let w = width.min(rect.width).min(rect.height);
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, w), color);
        self.fill_rect(Rect::new(rect.x, rect.bottom() - w, rect.width, w), color);
        let inner_height = rect.height - w - w;
        if inner_height > 0 {
            let inner_y = rect.y.saturating_add(w);
            self.fill_rect(Rect::new(rect.x, inner_y, w, inner_height), color);
            self.fill_rect(
                Rect::new(rect.right() - w, inner_y, w, inner_height),
                color,
            );
        }
    }
}
