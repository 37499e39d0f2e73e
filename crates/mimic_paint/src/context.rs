//! Paint context - a canvas that records commands for later replay

use crate::canvas::Canvas;
use crate::color::Color;
use crate::primitives::*;
use smallvec::SmallVec;

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: Rect,
        radius: i32,
        color: Color,
    },
    FillEllipse {
        rect: Rect,
        color: Color,
    },
    FillPolygon {
        points: SmallVec<[Point; 8]>,
        color: Color,
    },
    DrawLine {
        from: Point,
        to: Point,
        color: Color,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

impl PaintCommand {
    /// Pixels this command may touch, ignoring clipping. `None` for clip commands.
    pub fn extent(&self) -> Option<Rect> {
        match self {
            PaintCommand::FillRect { rect, .. }
            | PaintCommand::FillRoundedRect { rect, .. }
            | PaintCommand::FillEllipse { rect, .. } => Some(*rect),
            PaintCommand::FillPolygon { points, .. } => {
                let first = points.first()?;
                let (mut min, mut max) = (*first, *first);
                for p in points.iter() {
                    min = Point::new(min.x.min(p.x), min.y.min(p.y));
                    max = Point::new(max.x.max(p.x), max.y.max(p.y));
                }
                Some(Rect::from_points(min, max))
            }
            PaintCommand::DrawLine { from, to, .. } => {
                let r = Rect::from_points(*from, *to);
                Some(Rect::new(
                    r.x,
                    r.y,
                    r.width.saturating_add(1),
                    r.height.saturating_add(1),
                ))
            }
            PaintCommand::PushClip { .. } | PaintCommand::PopClip => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            PaintCommand::FillRect { color, .. }
            | PaintCommand::FillRoundedRect { color, .. }
            | PaintCommand::FillEllipse { color, .. }
            | PaintCommand::FillPolygon { color, .. }
            | PaintCommand::DrawLine { color, .. } => Some(*color),
            PaintCommand::PushClip { .. } | PaintCommand::PopClip => None,
        }
    }
}

/// The paint context used for recording theme output
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    clip_stack: Vec<Rect>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        self.clip_stack.clear();
        std::mem::take(&mut self.commands)
    }

    /// Number of clips currently pushed
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Union of every drawing command's extent after applying the clips that
    /// were active when it was recorded. `None` if nothing visible was drawn.
    pub fn painted_extent(&self) -> Option<Rect> {
        let mut clips: Vec<Option<Rect>> = Vec::new();
        let mut extent: Option<Rect> = None;
        for command in &self.commands {
            match command {
                PaintCommand::PushClip { rect } => {
                    let next = match clips.last() {
                        Some(Some(current)) => current.intersect(rect),
                        Some(None) => None,
                        None => Some(*rect),
                    };
                    clips.push(next);
                }
                PaintCommand::PopClip => {
                    clips.pop();
                }
                _ => {
                    let Some(mut visible) = command.extent() else {
                        continue;
                    };
                    if let Some(&clip) = clips.last() {
                        match clip.and_then(|c| c.intersect(&visible)) {
                            Some(clipped) => visible = clipped,
                            None => continue,
                        }
                    }
                    if visible.is_empty() {
                        continue;
                    }
                    extent = Some(match extent {
                        Some(acc) => acc.union(&visible),
                        None => visible,
                    });
                }
            }
        }
        extent
    }
}

impl Canvas for PaintContext {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        self.commands.push(PaintCommand::FillRoundedRect {
            rect,
            radius,
            color,
        });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillEllipse { rect, color });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.commands.push(PaintCommand::FillPolygon {
            points: SmallVec::from_slice(points),
            color,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(PaintCommand::DrawLine { from, to, color });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
        self.commands.push(PaintCommand::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_none() {
            tracing::warn!("PaintContext::pop_clip called without a matching push_clip");
            return;
        }
        self.commands.push(PaintCommand::PopClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_commands_in_order() {
        let mut ctx = PaintContext::new();
        ctx.fill_rect(Rect::new(0, 0, 4, 4), Color::RED);
        ctx.stroke_rect(Rect::new(0, 0, 4, 4), Color::BLACK, 1);
        assert_eq!(ctx.commands().len(), 5);
        assert_eq!(ctx.commands()[0].color(), Some(Color::RED));
    }

    #[test]
    fn painted_extent_respects_clips() {
        let mut ctx = PaintContext::new();
        ctx.push_clip(Rect::new(0, 0, 10, 10));
        ctx.fill_rect(Rect::new(-5, -5, 30, 30), Color::RED);
        ctx.pop_clip();
        assert_eq!(ctx.painted_extent(), Some(Rect::new(0, 0, 10, 10)));

        ctx.draw_line(Point::new(20, 20), Point::new(22, 20), Color::BLACK);
        assert_eq!(ctx.painted_extent(), Some(Rect::new(0, 0, 23, 21)));
    }

    #[test]
    fn disjoint_nested_clips_hide_everything() {
        let mut ctx = PaintContext::new();
        ctx.push_clip(Rect::new(0, 0, 5, 5));
        ctx.push_clip(Rect::new(10, 10, 5, 5));
        ctx.fill_rect(Rect::new(0, 0, 20, 20), Color::RED);
        ctx.pop_clip();
        ctx.pop_clip();
        assert_eq!(ctx.painted_extent(), None);
        assert_eq!(ctx.clip_depth(), 0);
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut ctx = PaintContext::new();
        ctx.pop_clip();
        assert!(ctx.commands().is_empty());
    }
}
