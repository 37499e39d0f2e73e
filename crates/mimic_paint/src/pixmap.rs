//! CPU raster canvas
//!
//! Straight-alpha ARGB pixels, composited source-over. Shapes are sampled at
//! pixel centers without anti-aliasing, which keeps output exact and
//! reproducible: the same commands always produce the same pixels.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::primitives::{Point, Rect};

/// An owned raster image that themes can paint into
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixmap {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    /// Effective clip after intersecting every pushed rect; `None` clips everything
    clip_stack: Vec<Option<Rect>>,
}

impl Pixmap {
    /// A fully transparent pixmap. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
            clip_stack: Vec::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Read a pixel, `None` outside the image
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.bounds()
            .contains(Point::new(x, y))
            .then(|| self.pixels[self.index(x, y)])
    }

    /// Row-major pixels
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Raw pixel memory as native-endian `0xAARRGGBB` words
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy out as tightly packed RGBA8, the layout image encoders expect
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_rgba8()).collect()
    }

    /// Overwrite every pixel, ignoring the clip
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Bounding box of every pixel that differs between two equally sized pixmaps
    pub fn diff_bounds(&self, other: &Pixmap) -> Option<Rect> {
        if self.width != other.width || self.height != other.height {
            return Some(self.bounds().union(&other.bounds()));
        }
        let mut extent: Option<Rect> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                let i = self.index(x, y);
                if self.pixels[i] != other.pixels[i] {
                    let px = Rect::new(x, y, 1, 1);
                    extent = Some(extent.map_or(px, |e| e.union(&px)));
                }
            }
        }
        extent
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn clip(&self) -> Option<Rect> {
        match self.clip_stack.last() {
            Some(clip) => *clip,
            None => (!self.bounds().is_empty()).then(|| self.bounds()),
        }
    }

    /// Region of `rect` that may be written, if any
    fn writable(&self, rect: &Rect) -> Option<Rect> {
        self.clip()?.intersect(rect)
    }

    fn blend(&mut self, x: i32, y: i32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color.blend_over(self.pixels[i]);
    }

    fn plot(&mut self, x: i128, y: i128, clip: Rect, color: Color) {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return;
        };
        if clip.contains(Point::new(x, y)) {
            self.blend(x, y, color);
        }
    }

    /// Blend every pixel of `area` whose center passes `inside`
    fn fill_where(&mut self, area: Rect, color: Color, inside: impl Fn(f32, f32) -> bool) {
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if inside(x as f32 + 0.5, y as f32 + 0.5) {
                    self.blend(x, y, color);
                }
            }
        }
    }
}

/// `step * rise / run` rounded to the nearest integer, zero when `run` is zero
fn rounded_ratio(step: i128, rise: i128, run: i128) -> i128 {
    if run == 0 {
        return 0;
    }
    let (num, den) = if run < 0 {
        (-step * rise, -run)
    } else {
        (step * rise, run)
    };
    (2 * num + den).div_euclid(2 * den)
}

impl Canvas for Pixmap {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(area) = self.writable(&rect) {
            self.fill_where(area, color, |_, _| true);
        }
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        let Some(area) = self.writable(&rect) else {
            return;
        };
        let r = radius.clamp(0, rect.width.min(rect.height) / 2) as f32;
        if r <= 0.0 {
            self.fill_where(area, color, |_, _| true);
            return;
        }
        let (left, top) = (rect.x as f32 + r, rect.y as f32 + r);
        let (right, bottom) = (rect.right() as f32 - r, rect.bottom() as f32 - r);
        self.fill_where(area, color, |px, py| {
            let cx = if px < left {
                left
            } else if px > right {
                right
            } else {
                return true;
            };
            let cy = if py < top {
                top
            } else if py > bottom {
                bottom
            } else {
                return true;
            };
            let (dx, dy) = (px - cx, py - cy);
            dx * dx + dy * dy <= r * r
        });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let Some(area) = self.writable(&rect) else {
            return;
        };
        let rx = rect.width as f32 / 2.0;
        let ry = rect.height as f32 / 2.0;
        let cx = rect.x as f32 + rx;
        let cy = rect.y as f32 + ry;
        self.fill_where(area, color, |px, py| {
            let nx = (px - cx) / rx;
            let ny = (py - cy) / ry;
            nx * nx + ny * ny <= 1.0
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);
        let bbox = Rect::from_points(Point::new(min_x, min_y), Point::new(max_x, max_y));
        let Some(area) = self.writable(&bbox) else {
            return;
        };

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in area.y..area.bottom() {
            let sy = y as f32 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let (ay, by) = (a.y as f32, b.y as f32);
                if (ay <= sy && sy < by) || (by <= sy && sy < ay) {
                    let t = (sy - ay) / (by - ay);
                    crossings.push(a.x as f32 + t * (b.x as f32 - a.x as f32));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let start = ((span[0] - 0.5).ceil() as i32).max(area.x);
                let end = ((span[1] - 0.5).ceil() as i32).min(area.right());
                for x in start..end {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let Some(clip) = self.clip() else {
            return;
        };
        // One pixel per step along the major axis, limited to the clip so
        // far-away endpoints cost nothing
        let (x0, y0) = (i128::from(from.x), i128::from(from.y));
        let (dx, dy) = (i128::from(to.x) - x0, i128::from(to.y) - y0);
        if dx.abs() >= dy.abs() {
            let lo = x0.min(x0 + dx).max(i128::from(clip.x));
            let hi = (x0.max(x0 + dx)).min(i128::from(clip.right()) - 1);
            for x in lo..=hi {
                let y = y0 + rounded_ratio(x - x0, dy, dx);
                self.plot(x, y, clip, color);
            }
        } else {
            let lo = y0.min(y0 + dy).max(i128::from(clip.y));
            let hi = (y0.max(y0 + dy)).min(i128::from(clip.bottom()) - 1);
            for y in lo..=hi {
                let x = x0 + rounded_ratio(y - y0, dx, dy);
                self.plot(x, y, clip, color);
            }
        }
    }

    fn push_clip(&mut self, rect: Rect) {
        let next = self.clip().and_then(|current| current.intersect(&rect));
        self.clip_stack.push(next);
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!("Pixmap::pop_clip called without a matching push_clip");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_is_clipped_to_image() {
        let mut pm = Pixmap::new(4, 4);
        pm.fill_rect(Rect::new(-2, -2, 4, 4), Color::RED);
        assert_eq!(pm.pixel(0, 0), Some(Color::RED));
        assert_eq!(pm.pixel(1, 1), Some(Color::RED));
        assert_eq!(pm.pixel(2, 2), Some(Color::TRANSPARENT));
        assert_eq!(pm.pixel(4, 0), None);
    }

    #[test]
    fn clip_stack_limits_writes() {
        let mut pm = Pixmap::new(10, 10);
        pm.push_clip(Rect::new(2, 2, 3, 3));
        pm.fill_rect(pm.bounds(), Color::BLUE);
        pm.draw_line(Point::new(0, 0), Point::new(9, 9), Color::RED);
        pm.pop_clip();
        assert_eq!(pm.diff_bounds(&Pixmap::new(10, 10)), Some(Rect::new(2, 2, 3, 3)));

        pm.fill_rect(Rect::new(9, 9, 1, 1), Color::GREEN);
        assert_eq!(pm.pixel(9, 9), Some(Color::GREEN));
    }

    #[test]
    fn line_includes_both_endpoints() {
        let mut pm = Pixmap::new(5, 5);
        pm.draw_line(Point::new(4, 1), Point::new(0, 1), Color::BLACK);
        for x in 0..5 {
            assert_eq!(pm.pixel(x, 1), Some(Color::BLACK));
        }
        assert_eq!(pm.pixel(0, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn lines_with_extreme_endpoints_are_clipped() {
        let mut pm = Pixmap::new(6, 6);
        pm.draw_line(Point::new(i32::MIN, 2), Point::new(i32::MAX, 2), Color::BLACK);
        pm.draw_line(Point::new(3, i32::MAX), Point::new(3, i32::MIN), Color::BLUE);
        for x in [0, 1, 2, 4, 5] {
            assert_eq!(pm.pixel(x, 2), Some(Color::BLACK));
        }
        assert_eq!(pm.pixel(3, 0), Some(Color::BLUE));
        assert_eq!(pm.pixel(3, 5), Some(Color::BLUE));

        // Diagonal far outside the image touches nothing
        let blank = Pixmap::new(6, 6);
        let mut pm = blank.clone();
        pm.draw_line(Point::new(i32::MAX - 4, 0), Point::new(i32::MAX, 4), Color::RED);
        assert_eq!(pm, blank);

        // A triangle spanning the whole coordinate range covers the image
        pm.fill_polygon(
            &[Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, 0), Point::new(0, i32::MAX)],
            Color::RED,
        );
        assert_eq!(pm.pixel(1, 1), Some(Color::RED));
    }

    #[test]
    fn triangle_stays_inside_its_bounding_box() {
        let mut pm = Pixmap::new(12, 12);
        let tri = [Point::new(2, 2), Point::new(10, 2), Point::new(6, 8)];
        pm.fill_polygon(&tri, Color::BLACK);
        let drawn = pm.diff_bounds(&Pixmap::new(12, 12)).unwrap();
        assert!(Rect::new(2, 2, 8, 6).contains_rect(&drawn));
        assert_eq!(pm.pixel(6, 3), Some(Color::BLACK));
    }

    #[test]
    fn ellipse_and_rounded_rect_leave_corners() {
        let mut pm = Pixmap::new(10, 10);
        pm.fill_ellipse(Rect::new(0, 0, 10, 10), Color::BLACK);
        assert_eq!(pm.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(pm.pixel(5, 5), Some(Color::BLACK));

        let mut pm = Pixmap::new(10, 10);
        pm.fill_rounded_rect(Rect::new(0, 0, 10, 10), 4, Color::BLACK);
        assert_eq!(pm.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(pm.pixel(5, 0), Some(Color::BLACK));
        assert_eq!(pm.pixel(9, 5), Some(Color::BLACK));
    }

    #[test]
    fn byte_views_cover_every_pixel() {
        let pm = Pixmap::filled(3, 2, Color::from_argb(0xFF, 1, 2, 3));
        assert_eq!(pm.as_bytes().len(), 3 * 2 * 4);
        assert_eq!(&pm.to_rgba8()[..4], &[1, 2, 3, 0xFF]);
    }
}
