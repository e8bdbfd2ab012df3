// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A recoverable problem found during a geometry pass.
///
/// The pass never aborts. An annotation that refers to glyphs the mesh does
/// not have loses the affected geometry and is reported with this error; the
/// next resolve and layout cycle normally fixes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeometryError {
    /// The category of the problem.
    kind: GeometryErrorKind,

    /// Which list the annotation came from.
    annotation: AnnotationKind,

    /// The annotation's char range.
    range: Range<usize>,

    /// The number of glyph quads in the mesh.
    glyphs: usize,
}

impl GeometryError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> GeometryErrorKind {
        self.kind
    }

    /// Which list the annotation came from.
    pub fn annotation(&self) -> AnnotationKind {
        self.annotation
    }

    /// The annotation's char range.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The number of glyph quads in the mesh at the time of the error.
    pub fn glyphs(&self) -> usize {
        self.glyphs
    }

    pub(crate) fn out_of_range(
        annotation: AnnotationKind,
        range: Range<usize>,
        glyphs: usize,
    ) -> Self {
        let error = Self {
            kind: GeometryErrorKind::GlyphIndexOutOfRange,
            annotation,
            range,
            glyphs,
        };
        log::warn!("{error}");
        error
    }
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            GeometryErrorKind::GlyphIndexOutOfRange => write!(
                f,
                "{} {}..{} runs past the {} available glyph quads",
                self.annotation.name(),
                self.range.start,
                self.range.end,
                self.glyphs
            ),
        }
    }
}

impl core::error::Error for GeometryError {}

/// The non-exhaustive category of a [`GeometryError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeometryErrorKind {
    /// The annotation refers to characters that have no glyph quad, usually
    /// because the text changed between resolution and layout.
    GlyphIndexOutOfRange,
}

/// The kind of annotation a [`GeometryError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnnotationKind {
    /// A [`HyperlinkSpan`](markup_text::HyperlinkSpan).
    Hyperlink,
    /// An underline [`LineDecorationSpan`](markup_text::LineDecorationSpan).
    Underline,
    /// A strikethrough [`LineDecorationSpan`](markup_text::LineDecorationSpan).
    Strikethrough,
    /// An [`ImagePlaceholder`](markup_text::ImagePlaceholder).
    Image,
}

impl AnnotationKind {
    fn name(self) -> &'static str {
        match self {
            Self::Hyperlink => "hyperlink",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Image => "image",
        }
    }
}
