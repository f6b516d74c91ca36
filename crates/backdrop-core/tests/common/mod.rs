#![allow(dead_code)]
use backdrop_core::{DrawSurface, Rgba, SurfaceSize};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(SurfaceSize),
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
}

/// Draw surface that records every primitive it is asked to draw.
#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<(Vec2, Vec2, Rgba, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line {
                    from,
                    to,
                    color,
                    width,
                } => Some((*from, *to, *color, *width)),
                _ => None,
            })
            .collect()
    }

    pub fn disc_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Disc { .. }))
            .count()
    }
}

impl DrawSurface for Recorder {
    fn clear(&mut self, size: SurfaceSize) {
        self.ops.push(Op::Clear(size));
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Disc {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ops.push(Op::Line {
            from,
            to,
            color,
            width,
        });
    }
}
