// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;

use crate::kurbo::Point;
use crate::{Corner, GlyphQuad};

/// A mesh vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    /// Label-local position, y growing upward.
    pub position: Point,
    /// Vertex color.
    pub color: Color,
    /// Texture coordinate into the font atlas.
    pub uv: Point,
}

/// Vertices and triangle indices for a label.
///
/// A shaper fills the mesh with one quad per character; the geometry pass then
/// edits those quads in place and appends decoration quads after them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextMesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl TextMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from glyph quads, all drawn with `color`.
    pub fn from_glyph_quads(quads: impl IntoIterator<Item = GlyphQuad>, color: Color) -> Self {
        let mut mesh = Self::new();
        for quad in quads {
            mesh.push_quad(quad.corners, color, [Point::ZERO; 4]);
        }
        mesh
    }

    /// All vertices.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle indices, three per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The quad at glyph index `glyph`, if the mesh has that many vertices.
    pub fn quad(&self, glyph: usize) -> Option<GlyphQuad> {
        let first = Corner::TopLeft.vertex(glyph);
        let vertices = self.vertices.get(first..first + 4)?;
        Some(GlyphQuad {
            corners: [
                vertices[0].position,
                vertices[1].position,
                vertices[2].position,
                vertices[3].position,
            ],
        })
    }

    /// Move vertex `index`. Out of range indices are ignored.
    pub fn set_position(&mut self, index: usize, position: Point) {
        if let Some(vertex) = self.vertices.get_mut(index) {
            vertex.position = position;
        }
    }

    /// Append a quad as four vertices and the triangles `(0, 1, 2)` and `(0, 2, 3)`.
    pub fn push_quad(&mut self, corners: [Point; 4], color: Color, uvs: [Point; 4]) {
        let base =
            u32::try_from(self.vertices.len()).expect("mesh vertex count should fit in u32");
        for (position, uv) in corners.into_iter().zip(uvs) {
            self.vertices.push(Vertex {
                position,
                color,
                uv,
            });
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Remove all vertices and indices, keeping allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }
}

/// The centroid of a glyph's texture coordinates.
///
/// Sampling a solid glyph (such as `*`) at its centroid gives a texture
/// coordinate that renders as plain color, which decoration bars reuse.
pub fn uv_centroid(uvs: [Point; 4]) -> Point {
    let [a, b, c, d] = uvs;
    Point::new((a.x + b.x + c.x + d.x) * 0.25, (a.y + b.y + c.y + d.y) * 0.25)
}

#[cfg(test)]
mod tests {
    use super::{uv_centroid, TextMesh};
    use crate::kurbo::{Point, Rect};
    use crate::GlyphQuad;
    use peniko::Color;

    #[test]
    fn quads_become_two_triangles() {
        let mut mesh = TextMesh::from_glyph_quads(
            [
                GlyphQuad::from_rect(Rect::new(0.0, 0.0, 10.0, 20.0)),
                GlyphQuad::from_rect(Rect::new(10.0, 0.0, 20.0, 20.0)),
            ],
            Color::BLACK,
        );
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        let second = mesh.quad(1).expect("second quad");
        assert_eq!(second.corners[0], Point::new(10.0, 20.0));
        assert!(mesh.quad(2).is_none());

        mesh.set_position(4, Point::new(1.0, 1.0));
        assert_eq!(mesh.vertices()[4].position, Point::new(1.0, 1.0));
        mesh.set_position(99, Point::ZERO);
        assert_eq!(mesh.vertex_count(), 8);
    }

    #[test]
    fn centroid_of_atlas_cell() {
        let uv = uv_centroid([
            Point::new(0.25, 0.5),
            Point::new(0.5, 0.5),
            Point::new(0.5, 0.25),
            Point::new(0.25, 0.25),
        ]);
        assert_eq!(uv, Point::new(0.375, 0.375));
    }
}
