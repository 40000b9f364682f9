// File: crates/chart-core/src/clip.rs
// Summary: Cohen–Sutherland segment clipping against the plot rectangle (screen space).

use crate::geometry::RectI32;

pub const INSIDE: u8 = 0;
pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const TOP: u8 = 4;
pub const BOTTOM: u8 = 8;

const MAX_PASSES: usize = 8;

/// Screen-space line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// 4-bit position of `(x, y)` relative to the four half-planes of `rect`.
pub fn outcode(x: f64, y: f64, rect: &RectI32) -> u8 {
    let mut code = INSIDE;
    if x < rect.left as f64 {
        code |= LEFT;
    } else if x > rect.right as f64 {
        code |= RIGHT;
    }
    if y < rect.top as f64 {
        code |= TOP;
    } else if y > rect.bottom as f64 {
        code |= BOTTOM;
    }
    code
}

/// Clip `segment` to `rect`. Returns `None` when no part of it is inside.
///
/// The outside endpoint is moved onto the boundary named by its highest-priority bit
/// (TOP, BOTTOM, RIGHT, LEFT). Each move clears at least one bit for good, so four
/// moves settle any segment; the pass limit only absorbs float rounding at corners.
pub fn clip_segment(segment: Segment, rect: &RectI32) -> Option<Segment> {
    let Segment { mut x1, mut y1, mut x2, mut y2 } = segment;
    let (left, top, right, bottom) = (rect.left as f64, rect.top as f64, rect.right as f64, rect.bottom as f64);

    let mut code1 = outcode(x1, y1, rect);
    let mut code2 = outcode(x2, y2, rect);

    for _ in 0..MAX_PASSES {
        if code1 | code2 == INSIDE {
            return Some(Segment::new(x1, y1, x2, y2));
        }
        if code1 & code2 != 0 {
            return None;
        }

        let out = if code1 != INSIDE { code1 } else { code2 };
        let (x, y) = if out & TOP != 0 {
            (x1 + (x2 - x1) * (top - y1) / (y2 - y1), top)
        } else if out & BOTTOM != 0 {
            (x1 + (x2 - x1) * (bottom - y1) / (y2 - y1), bottom)
        } else if out & RIGHT != 0 {
            (right, y1 + (y2 - y1) * (right - x1) / (x2 - x1))
        } else {
            (left, y1 + (y2 - y1) * (left - x1) / (x2 - x1))
        };

        if out == code1 {
            x1 = x;
            y1 = y;
            code1 = outcode(x1, y1, rect);
        } else {
            x2 = x;
            y2 = y;
            code2 = outcode(x2, y2, rect);
        }
    }
    None
}
