// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::kurbo::{Point, Rect};

/// The corners of a glyph quad, in the order the shaper emits them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Corner {
    /// Vertex `4i`.
    TopLeft = 0,
    /// Vertex `4i + 1`.
    TopRight = 1,
    /// Vertex `4i + 2`.
    BottomRight = 2,
    /// Vertex `4i + 3`.
    BottomLeft = 3,
}

impl Corner {
    /// The corner of flat vertex index `vertex`.
    pub const fn of_vertex(vertex: usize) -> Self {
        match vertex % 4 {
            0 => Self::TopLeft,
            1 => Self::TopRight,
            2 => Self::BottomRight,
            _ => Self::BottomLeft,
        }
    }

    /// The flat vertex index of this corner of glyph `glyph`.
    pub const fn vertex(self, glyph: usize) -> usize {
        glyph * 4 + self as usize
    }
}

/// The four corners of one shaped character.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphQuad {
    /// Corner positions, indexed by [`Corner`].
    pub corners: [Point; 4],
}

impl GlyphQuad {
    /// The quad covering `rect`, with y growing upward.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            corners: [
                Point::new(rect.x0, rect.y1),
                Point::new(rect.x1, rect.y1),
                Point::new(rect.x1, rect.y0),
                Point::new(rect.x0, rect.y0),
            ],
        }
    }

    /// Position of `corner`.
    pub fn corner(&self, corner: Corner) -> Point {
        self.corners[corner as usize]
    }
}

/// Whether a visual line break separates two consecutive glyphs.
///
/// `prev` is the bottom-right corner of the earlier glyph and `next` the
/// top-left corner of the one after it. The next glyph starts a new line when
/// it lies both to the left of and below the previous one.
pub fn is_line_break(prev: Point, next: Point) -> bool {
    next.x < prev.x && next.y < prev.y
}
