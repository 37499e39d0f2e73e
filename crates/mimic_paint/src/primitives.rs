//! Geometric primitives
//!
//! All coordinates are whole device pixels. A rect covers the half-open pixel
//! range `x..x + width`, `y..y + height`. Edges and offsets saturate at the
//! `i32` limits instead of overflowing.

use serde::{Deserialize, Serialize};

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Swap width and height
    pub const fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }
}

/// A rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(C)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        let x = p1.x.min(p2.x);
        let y = p1.y.min(p2.y);
        let extent = |a: i32, b: i32| i32::try_from(a.abs_diff(b)).unwrap_or(i32::MAX);
        Self::new(x, y, extent(p1.x, p2.x), extent(p1.y, p2.y))
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Center pixel (rounded toward the origin for even extents)
    pub const fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// True if `other` lies entirely inside `self`. Empty rects are contained everywhere.
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (other.x >= self.x
                && other.y >= self.y
                && other.right() <= self.right()
                && other.bottom() <= self.bottom())
    }

    /// Overlap of two rects, `None` when they do not overlap
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        (right > x && bottom > y).then(|| {
            Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
        })
    }

    /// Smallest rect covering both; empty rects are ignored
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Shrink every edge by `amount`; never produces a negative extent
    pub fn inset(&self, amount: i32) -> Rect {
        self.inset_xy(amount, amount)
    }

    pub fn inset_xy(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width.saturating_sub(dx.saturating_mul(2)).max(0),
            self.height.saturating_sub(dy.saturating_mul(2)).max(0),
        )
    }

    /// A rect of `size` centered inside `self` (may extend past `self` if larger)
    pub fn centered_size(&self, size: Size) -> Rect {
        Rect::new(
            self.x.saturating_add(self.width.saturating_sub(size.width) / 2),
            self.y.saturating_add(self.height.saturating_sub(size.height) / 2),
            size.width,
            size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect_and_union() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(5, 5, 5, 5)));
        assert_eq!(a.union(&b), Rect::new(0, 0, 15, 15));
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
        assert_eq!(a.union(&Rect::default()), a);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(r.contains(Point::new(2, 2)));
        assert!(r.contains(Point::new(4, 4)));
        assert!(!r.contains(Point::new(5, 4)));
    }

    #[test]
    fn inset_clamps_to_zero() {
        assert_eq!(Rect::new(0, 0, 3, 10).inset(2), Rect::new(2, 2, 0, 6));
    }

    #[test]
    fn edges_saturate_at_the_limits() {
        let far = Rect::new(i32::MAX - 10, i32::MIN, 20, i32::MAX);
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.bottom(), -1);
        assert_eq!(Rect::new(i32::MIN, 0, i32::MAX, 4).right(), -1);
        assert_eq!(Point::new(i32::MAX, i32::MIN).offset(5, -5), Point::new(i32::MAX, i32::MIN));

        let huge = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(huge.inset(i32::MAX).size(), Size::ZERO);
        assert_eq!(huge.center(), Point::new(-(1 << 30) - 1, -(1 << 30) - 1));
        assert_eq!(
            Rect::new(0, 0, i32::MAX, 10).intersect(&Rect::new(i32::MIN, 0, i32::MAX, 10)),
            None
        );
        let all = Rect::new(0, 0, 10, 10).union(&Rect::new(i32::MIN, 0, 1, 1));
        assert_eq!((all.x, all.width), (i32::MIN, i32::MAX));
        assert_eq!(
            Rect::from_points(Point::new(i32::MIN, 0), Point::new(i32::MAX, 3)).width,
            i32::MAX
        );
        let _ = Rect::new(i32::MAX, i32::MAX, 1, 1).centered_size(Size::square(i32::MAX));
    }

    #[test]
    fn centered_size_may_overflow() {
        let r = Rect::new(10, 10, 4, 4);
        assert_eq!(r.centered_size(Size::square(8)), Rect::new(8, 8, 8, 8));
        assert!(!r.contains_rect(&r.centered_size(Size::square(8))));
    }
}
