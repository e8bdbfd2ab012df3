// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Rich Label Dev
//!
//! This crate provides utilities for developing Rich Label.
//!
//! Real labels get their glyph quads from a text shaper. [`MonospaceShaper`]
//! stands in for one with predictable geometry: every `char` is a box of the
//! same size, lines wrap at a fixed width and at `'\n'`.

use label_draw::{GlyphQuad, TextMesh};
use peniko::kurbo::Rect;
use peniko::Color;

/// Lays out text as equally sized boxes, one per `char`.
///
/// The first line sits at the top of the label with its top edge at `y = 0`,
/// following lines go down (y grows upward). A newline still gets a quad, so
/// that quads and chars stay in one-to-one correspondence, and ends its line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceShaper {
    /// Horizontal advance of every char.
    pub advance: f64,
    /// Height of a glyph box.
    pub glyph_height: f64,
    /// Distance between the tops of two consecutive lines.
    pub line_height: f64,
    /// Lines wrap before a char that would cross this width.
    pub max_width: Option<f64>,
    /// Vertex color of the glyph quads.
    pub color: Color,
}

impl Default for MonospaceShaper {
    fn default() -> Self {
        Self {
            advance: 10.0,
            glyph_height: 20.0,
            line_height: 24.0,
            max_width: None,
            color: Color::BLACK,
        }
    }
}

impl MonospaceShaper {
    /// Wrap lines at `max_width`.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// The glyph boxes of `text`, in char order.
    pub fn layout(&self, text: &str) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(text.len());
        let mut x = 0.0;
        let mut top = 0.0;
        for ch in text.chars() {
            if self
                .max_width
                .is_some_and(|max| x > 0.0 && x + self.advance > max)
            {
                x = 0.0;
                top -= self.line_height;
            }
            rects.push(Rect::new(x, top - self.glyph_height, x + self.advance, top));
            x += self.advance;
            if ch == '\n' {
                x = 0.0;
                top -= self.line_height;
            }
        }
        rects
    }

    /// Shape `text` into a mesh of glyph quads.
    pub fn shape(&self, text: &str) -> TextMesh {
        TextMesh::from_glyph_quads(
            self.layout(text).into_iter().map(GlyphQuad::from_rect),
            self.color,
        )
    }
}

/// Markup samples to be used for development.
pub mod samples {
    /// No markup at all.
    pub const PLAIN: &str = "plain";

    /// A hyperlink long enough to wrap in a narrow label.
    pub const WRAPPED_LINK: &str =
        r#"Read the <a href="https://linebender.org">release notes for this version</a> first."#;

    /// Underline and strikethrough with every attribute set.
    pub const DECORATED: &str = r##"<u height="2" offset="-1" color="#FF0000FF">under</u> and <d height="3" color="#00FF00FF">struck</d>"##;

    /// Inline images between words.
    pub const IMAGES: &str =
        r#"Costs 5 <quad name="coin" size="20"/> or 1 <quad name="gem"/> today"#;

    /// Shaper styles mixed with annotations.
    pub const STYLED: &str =
        r#"<b>bold <a href="b">link</a></b> <color=#00FF00FF>green <u>under</u></color>"#;

    /// Every kind of mistake the resolver recovers from.
    pub const BROKEN: &str = r#"a < b </u> <a href="x">open <u bad>c</d> <quad name="q" size="big"/>"#;
}
