// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use markup_text::ImagePlaceholder;

use crate::kurbo::{Point, Size};
use crate::{AnnotationKind, Corner, GeometryError, TextMesh};

/// Where an inline image should be drawn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageAnchor {
    /// Index of the placeholder in [`ResolvedText::images`](markup_text::ResolvedText::images).
    pub image: usize,
    /// Center of the image in label-local space.
    pub center: Point,
    /// Size of the image.
    pub size: Size,
}

/// Compute image anchors and hide the placeholder glyphs.
///
/// An image is centered so that its bottom-left corner sits on the bottom-left
/// corner of its placeholder glyph. The placeholder quad is collapsed onto its
/// top-left corner so the glyph itself does not render. Placeholders without
/// a glyph quad get no anchor and produce an error.
pub fn place_images(
    mesh: &mut TextMesh,
    images: &[ImagePlaceholder],
    anchors: &mut Vec<ImageAnchor>,
    errors: &mut Vec<GeometryError>,
) {
    for (index, image) in images.iter().enumerate() {
        let Some(quad) = mesh.quad(image.char_index) else {
            errors.push(GeometryError::out_of_range(
                AnnotationKind::Image,
                image.char_index..image.char_index + 1,
                mesh.vertex_count() / 4,
            ));
            continue;
        };
        let size = f64::from(image.size);
        let bottom_left = quad.corner(Corner::BottomLeft);
        anchors.push(ImageAnchor {
            image: index,
            center: Point::new(bottom_left.x + size / 2.0, bottom_left.y + size / 2.0),
            size: Size::new(size, size),
        });

        let top_left = quad.corner(Corner::TopLeft);
        for corner in [Corner::TopRight, Corner::BottomRight, Corner::BottomLeft] {
            mesh.set_position(corner.vertex(image.char_index), top_left);
        }
    }
}
