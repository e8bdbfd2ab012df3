// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_text::{LineDecorationSpan, ResolvedText};

use crate::kurbo::Point;
use crate::{
    decoration_bars, hyperlink_boxes, place_images, DecorationBar, GeometryError, ImageAnchor,
    TextMesh,
};

/// Options for [`DecorationEngine`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DecorationOptions {
    /// Texture coordinate given to every decoration vertex.
    ///
    /// This should sample a solid part of the font atlas, see [`uv_centroid`](crate::uv_centroid).
    pub uv: Point,
}

/// Everything a geometry pass produced besides the mesh edits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecorationOutput {
    /// Where to place each inline image that has a glyph quad.
    pub image_anchors: Vec<ImageAnchor>,
    /// Number of decoration bars appended to the mesh.
    pub bar_count: usize,
    /// Annotations that could not be fully drawn.
    pub errors: Vec<GeometryError>,
}

/// Runs the geometry pass of a label.
#[derive(Clone, Debug, Default)]
pub struct DecorationEngine {
    options: DecorationOptions,
    positions: Vec<Point>,
    bars: Vec<DecorationBar>,
}

impl DecorationEngine {
    /// Create an engine with the given options.
    pub fn new(options: DecorationOptions) -> Self {
        Self {
            options,
            positions: Vec::new(),
            bars: Vec::new(),
        }
    }

    /// The current options.
    pub fn options(&self) -> &DecorationOptions {
        &self.options
    }

    /// Set the texture coordinate used by later passes.
    ///
    /// Hosts call this when the font atlas is rebuilt and the solid glyph moves.
    pub fn set_uv(&mut self, uv: Point) {
        self.options.uv = uv;
    }

    /// Decorate `mesh`, which must hold exactly the glyph quads of `resolved.text`.
    ///
    /// Image placeholders are handled first, then hyperlink hit boxes are
    /// rebuilt in place, then underline and strikethrough bars are appended
    /// to the mesh. Every scan only looks at the glyph quads that were in the
    /// mesh before the first bar was appended.
    pub fn apply(&mut self, mesh: &mut TextMesh, resolved: &mut ResolvedText) -> DecorationOutput {
        let mut output = DecorationOutput::default();
        place_images(
            mesh,
            &resolved.images,
            &mut output.image_anchors,
            &mut output.errors,
        );

        self.positions.clear();
        self.positions
            .extend(mesh.vertices().iter().map(|vertex| vertex.position));
        let glyphs = self.positions.len() / 4;
        if glyphs != resolved.char_len() {
            log::debug!(
                "mesh has {glyphs} glyph quads for {} characters",
                resolved.char_len()
            );
        }

        for link in &mut resolved.hyperlinks {
            if let Err(err) = hyperlink_boxes(&self.positions, link) {
                output.errors.push(err);
            }
        }

        self.bars.clear();
        self.collect_bars(&resolved.underlines, &mut output.errors);
        self.collect_bars(&resolved.strikethroughs, &mut output.errors);
        let uvs = [self.options.uv; 4];
        for bar in &self.bars {
            mesh.push_quad(bar.corners(), bar.color, uvs);
        }
        output.bar_count = self.bars.len();
        output
    }

    fn collect_bars(&mut self, spans: &[LineDecorationSpan], errors: &mut Vec<GeometryError>) {
        for span in spans {
            if let Err(err) = decoration_bars(&self.positions, span, &mut self.bars) {
                errors.push(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DecorationEngine, DecorationOptions};
    use crate::kurbo::{Point, Rect};
    use crate::{AnnotationKind, GlyphQuad, TextMesh};
    use alloc::vec::Vec;
    use markup_text::resolve;
    use peniko::Color;

    /// One quad per character, 10 wide, wrapping after `per_line` characters.
    fn shape(text: &str, per_line: usize) -> TextMesh {
        let quads = (0..text.chars().count()).map(|i| {
            let x = (i % per_line) as f64 * 10.0;
            let y = -((i / per_line) as f64) * 30.0;
            GlyphQuad::from_rect(Rect::new(x, y - 4.0, x + 10.0, y + 16.0))
        });
        TextMesh::from_glyph_quads(quads, Color::BLACK)
    }

    #[test]
    fn full_pass() {
        let mut resolved = resolve(
            r#"ab<a href="l">cd<u>ef</u></a><d>g</d><quad name="i" size="10"/>"#,
        );
        assert_eq!(resolved.char_len(), 8);
        let mut mesh = shape(&resolved.text, 4);
        let mut engine = DecorationEngine::new(DecorationOptions {
            uv: Point::new(0.5, 0.5),
        });
        let output = engine.apply(&mut mesh, &mut resolved);

        assert!(output.errors.is_empty());
        assert_eq!(output.image_anchors.len(), 1);
        assert_eq!(output.image_anchors[0].center, Point::new(35.0, -29.0));

        // "cdef" wraps after "cd".
        assert_eq!(
            resolved.hyperlinks[0].hit_boxes.as_slice(),
            &[
                Rect::new(20.0, -4.0, 40.0, 16.0),
                Rect::new(0.0, -34.0, 20.0, -14.0),
            ]
        );

        // One underline bar and one strikethrough bar, each one quad.
        assert_eq!(output.bar_count, 2);
        assert_eq!(mesh.vertex_count(), 8 * 4 + 2 * 4);
        assert_eq!(mesh.indices().len(), 8 * 6 + 2 * 6);
        let underline = &mesh.vertices()[32..36];
        assert_eq!(underline[0].position, Point::new(0.0, -34.0));
        assert_eq!(underline[2].position, Point::new(20.0, -35.0));
        assert!(underline.iter().all(|v| v.uv == Point::new(0.5, 0.5)));
        assert_eq!(underline[0].color, Color::BLACK);
    }

    #[test]
    fn truncated_text_degrades() {
        let mut resolved = resolve(r#"<u>abcdef</u><a href="x">gh</a><quad name="q"/>"#);
        // Lay out fewer characters than were resolved.
        let mut mesh = shape("abcd", 10);
        let output = DecorationEngine::default().apply(&mut mesh, &mut resolved);
        let kinds: Vec<_> = output.errors.iter().map(|e| e.annotation()).collect();
        assert_eq!(
            kinds,
            [
                AnnotationKind::Image,
                AnnotationKind::Hyperlink,
                AnnotationKind::Underline
            ]
        );
        assert!(resolved.hyperlinks[0].hit_boxes.is_empty());
        assert_eq!(output.bar_count, 0);
        assert_eq!(mesh.vertex_count(), 16);
    }

    #[test]
    fn uv_change_applies_to_next_pass() {
        let mut resolved = resolve("<u>ab</u>");
        let mut engine = DecorationEngine::default();
        let mut mesh = shape(&resolved.text, 10);
        engine.apply(&mut mesh, &mut resolved);
        assert_eq!(mesh.vertices()[8].uv, Point::ZERO);

        engine.set_uv(Point::new(0.75, 0.25));
        assert_eq!(engine.options().uv, Point::new(0.75, 0.25));
        let mut mesh = shape(&resolved.text, 10);
        engine.apply(&mut mesh, &mut resolved);
        let bar = &mesh.vertices()[8..];
        assert_eq!(bar.len(), 4);
        assert!(bar.iter().all(|v| v.uv == Point::new(0.75, 0.25)));
    }

    #[test]
    fn repeated_passes_rebuild_boxes() {
        let mut resolved = resolve(r#"<a href="x">abc</a>"#);
        let mut engine = DecorationEngine::default();
        engine.apply(&mut shape(&resolved.text, 10), &mut resolved);
        assert_eq!(resolved.hyperlinks[0].hit_boxes.len(), 1);
        engine.apply(&mut shape(&resolved.text, 2), &mut resolved);
        assert_eq!(resolved.hyperlinks[0].hit_boxes.len(), 2);
    }
}
