// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Underline and strikethrough bars.
//!
//! A decoration is drawn as one bar per visual line it covers. The bar of a
//! line is positioned from the glyph boxes of the whole line, including glyphs
//! outside the decorated range, so that a decoration starting or ending in the
//! middle of a line sits at the same height as one covering the full line.

use alloc::vec::Vec;

use markup_text::{DecorationKind, LineDecorationSpan};
use peniko::Color;

use crate::kurbo::Point;
use crate::{is_line_break, AnnotationKind, Corner, GeometryError};

/// One horizontal bar of a decoration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecorationBar {
    /// Left edge.
    pub x0: f64,
    /// Right edge.
    pub x1: f64,
    /// Top edge. The bar extends `height` below it.
    pub y: f64,
    /// Thickness.
    pub height: f64,
    /// Fill color.
    pub color: Color,
}

impl DecorationBar {
    /// The bar's corners in glyph quad order.
    pub fn corners(&self) -> [Point; 4] {
        let bottom = self.y - self.height;
        [
            Point::new(self.x0, self.y),
            Point::new(self.x1, self.y),
            Point::new(self.x1, bottom),
            Point::new(self.x0, bottom),
        ]
    }
}

/// Vertical extent of the glyphs on one visual line.
#[derive(Copy, Clone, Debug)]
struct LineExtent {
    bottom: f64,
    top: f64,
}

impl LineExtent {
    fn include_bottom(&mut self, y: f64) {
        self.bottom = self.bottom.min(y);
    }

    fn include_top(&mut self, y: f64) {
        self.top = self.top.max(y);
    }
}

struct Walker<'a> {
    positions: &'a [Point],
    span: &'a LineDecorationSpan,
}

impl Walker<'_> {
    fn at(&self, vertex: usize) -> Point {
        self.positions[vertex]
    }

    fn tracks_top(&self) -> bool {
        self.span.kind == DecorationKind::Strikethrough
    }

    fn bar(&self, x0: f64, x1: f64, extent: LineExtent) -> DecorationBar {
        let height = f64::from(self.span.height);
        let offset = f64::from(self.span.offset);
        let y = match self.span.kind {
            DecorationKind::Underline => extent.bottom + offset,
            DecorationKind::Strikethrough => (extent.bottom + extent.top + height) / 2.0 + offset,
        };
        DecorationBar {
            x0,
            x1,
            y,
            height,
            color: self.span.color,
        }
    }

    /// Widen `extent` with the glyphs before vertex `first` on its line.
    ///
    /// The two decoration kinds compare different corners here. Underlines
    /// test each glyph's bottom-right corner against its own bottom-left
    /// corner, which in practice never reports a break, so the scan runs to the
    /// start of the text; earlier lines sit higher and cannot lower the bottom.
    /// Strikethroughs test a glyph's bottom-right corner against the top-left
    /// corner of the glyph after it and stop at the line start.
    fn scan_backward(&self, first: usize, extent: &mut LineExtent) {
        let mut recorded: Option<Point> = None;
        for vertex in (0..=first).rev() {
            let current = self.at(vertex);
            let corner = Corner::of_vertex(vertex);
            if corner == Corner::BottomRight
                && recorded.is_some_and(|recorded| is_line_break(current, recorded))
            {
                break;
            }
            match (self.span.kind, corner) {
                (DecorationKind::Underline, Corner::BottomLeft) => {
                    recorded = Some(current);
                    extent.include_bottom(current.y);
                }
                (DecorationKind::Strikethrough, Corner::BottomLeft) => {
                    extent.include_bottom(current.y);
                }
                (DecorationKind::Strikethrough, Corner::TopLeft) => {
                    recorded = Some(current);
                    extent.include_top(current.y);
                }
                _ => {}
            }
        }
    }

    /// Widen `extent` with the glyphs from vertex `first` to the end of their line.
    ///
    /// `prev` is the bottom-right corner of the glyph before `first`, if that
    /// glyph should be checked for a break.
    fn scan_forward(&self, first: usize, mut prev: Option<Point>, extent: &mut LineExtent) {
        for vertex in first..self.positions.len() {
            let current = self.at(vertex);
            match Corner::of_vertex(vertex) {
                Corner::BottomRight => prev = Some(current),
                Corner::BottomLeft => extent.include_bottom(current.y),
                Corner::TopLeft => {
                    if self.tracks_top() {
                        extent.include_top(current.y);
                    }
                    if prev.is_some_and(|prev| is_line_break(prev, current)) {
                        break;
                    }
                }
                Corner::TopRight => {}
            }
        }
    }

    fn walk(&self, bars: &mut Vec<DecorationBar>) -> Result<(), GeometryError> {
        let range = self.span.range.clone();
        if range.is_empty() {
            return Ok(());
        }
        let glyphs = self.positions.len() / 4;
        let annotation = match self.span.kind {
            DecorationKind::Underline => AnnotationKind::Underline,
            DecorationKind::Strikethrough => AnnotationKind::Strikethrough,
        };
        if range.start >= glyphs {
            return Err(GeometryError::out_of_range(annotation, range, glyphs));
        }
        let truncated = range.end > glyphs;
        let last = range.end.min(glyphs) - 1;

        let first = Corner::TopLeft.vertex(range.start);
        let mut extent = LineExtent {
            bottom: self.at(Corner::BottomLeft.vertex(range.start)).y,
            top: self.at(first).y,
        };
        if first != 0 {
            self.scan_backward(first, &mut extent);
        }
        self.scan_forward(first, None, &mut extent);

        let mut left = self.at(Corner::BottomLeft.vertex(range.start)).x;
        let mut prev: Option<Point> = None;
        for vertex in first..Corner::BottomLeft.vertex(last) {
            let current = self.at(vertex);
            match Corner::of_vertex(vertex) {
                Corner::BottomRight => prev = Some(current),
                Corner::BottomLeft => extent.include_bottom(current.y),
                Corner::TopLeft => {
                    if self.tracks_top() {
                        extent.include_top(current.y);
                    }
                    if prev.is_some_and(|prev| is_line_break(prev, current)) {
                        // The top-right corner of the glyph before the break.
                        let right = self.at(vertex - 3).x;
                        bars.push(self.bar(left, right, extent));
                        left = current.x;
                        extent = LineExtent {
                            bottom: self.at(vertex + 3).y,
                            top: current.y,
                        };
                    }
                }
                Corner::TopRight => {}
            }
        }
        if truncated {
            return Err(GeometryError::out_of_range(annotation, range, glyphs));
        }

        let last_bottom_right = self.at(Corner::BottomRight.vertex(last));
        self.scan_forward(
            Corner::TopLeft.vertex(last + 1),
            Some(last_bottom_right),
            &mut extent,
        );
        bars.push(self.bar(left, last_bottom_right.x, extent));
        Ok(())
    }
}

/// Append the bars of `span` to `bars`.
///
/// `positions` holds the glyph quad corners of the plain text, four per
/// character. Bars for every completed visual line are appended even when an
/// error is returned.
pub fn decoration_bars(
    positions: &[Point],
    span: &LineDecorationSpan,
    bars: &mut Vec<DecorationBar>,
) -> Result<(), GeometryError> {
    let glyph_vertices = positions.len() - positions.len() % 4;
    Walker {
        positions: &positions[..glyph_vertices],
        span,
    }
    .walk(bars)
}
