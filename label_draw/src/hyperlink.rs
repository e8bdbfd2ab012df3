// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use markup_text::HyperlinkSpan;

use crate::kurbo::{Point, Rect};
use crate::{is_line_break, AnnotationKind, Corner, GeometryError};

/// Rebuild the hit boxes of `link` from glyph quad corners.
///
/// Each visual line the link covers gets the bounding box of the link's own
/// glyph corners on that line. Text outside the link does not widen the box.
/// If the link runs past the available glyphs, the boxes of completed lines
/// are kept and an error is returned.
pub fn hyperlink_boxes(positions: &[Point], link: &mut HyperlinkSpan) -> Result<(), GeometryError> {
    link.hit_boxes.clear();
    let range = link.range.clone();
    if range.is_empty() {
        return Ok(());
    }
    let vertex_count = positions.len() - positions.len() % 4;
    let glyphs = vertex_count / 4;
    if range.start >= glyphs {
        return Err(GeometryError::out_of_range(
            AnnotationKind::Hyperlink,
            range,
            glyphs,
        ));
    }

    let first = Corner::TopLeft.vertex(range.start);
    let end = Corner::BottomLeft.vertex(range.end - 1);
    let mut bounds = Rect::from_points(positions[first], positions[first]);
    let mut prev: Option<Point> = None;
    for vertex in first..end {
        if vertex >= vertex_count {
            return Err(GeometryError::out_of_range(
                AnnotationKind::Hyperlink,
                range,
                glyphs,
            ));
        }
        let current = positions[vertex];
        let corner = Corner::of_vertex(vertex);
        if corner == Corner::BottomRight {
            prev = Some(current);
        }
        if corner == Corner::TopLeft && prev.is_some_and(|prev| is_line_break(prev, current)) {
            link.hit_boxes.push(bounds);
            bounds = Rect::from_points(current, current);
        } else {
            bounds = bounds.union_pt(current);
        }
    }
    link.hit_boxes.push(bounds);
    Ok(())
}
