// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::ops::Range;

use peniko::kurbo::Rect;
use peniko::Color;
use smallvec::SmallVec;

/// A hyperlink over a range of the plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct HyperlinkSpan {
    /// Char range of the link text.
    pub range: Range<usize>,
    /// The `href` attribute, empty when absent.
    pub href: String,
    /// Clickable rectangles, one per visual line the link covers.
    ///
    /// These depend on the current layout and are rebuilt by every geometry
    /// pass. They are empty until the first pass runs.
    pub hit_boxes: SmallVec<[Rect; 2]>,
}

impl HyperlinkSpan {
    /// Whether `other` shares at least one character with this link.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }
}

/// Which kind of bar a [`LineDecorationSpan`] draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    /// A bar under the glyphs, from `<u>`.
    Underline,
    /// A bar through the middle of the glyphs, from `<d>`.
    Strikethrough,
}

/// An underline or strikethrough over a range of the plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct LineDecorationSpan {
    /// Char range of the decorated text.
    pub range: Range<usize>,
    /// Underline or strikethrough.
    pub kind: DecorationKind,
    /// Thickness of the bar.
    pub height: f32,
    /// Vertical offset added to the bar position.
    pub offset: f32,
    /// Bar color.
    pub color: Color,
}

impl LineDecorationSpan {
    /// Thickness used when no valid `height` attribute is given.
    pub const DEFAULT_HEIGHT: f32 = 1.0;
    /// Offset used when no valid `offset` attribute is given.
    pub const DEFAULT_OFFSET: f32 = 0.0;
    /// Color used when no valid `color` attribute is given.
    pub const DEFAULT_COLOR: Color = Color::BLACK;

    /// A decoration with default attributes.
    pub fn new(kind: DecorationKind, range: Range<usize>) -> Self {
        Self {
            range,
            kind,
            height: Self::DEFAULT_HEIGHT,
            offset: Self::DEFAULT_OFFSET,
            color: Self::DEFAULT_COLOR,
        }
    }
}

/// An inline image that occupies a single placeholder character.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePlaceholder {
    /// Char index of the placeholder character.
    pub char_index: usize,
    /// Sprite name from the `name` attribute, empty when absent.
    pub sprite_name: String,
    /// Edge length of the square image.
    pub size: f32,
}

impl ImagePlaceholder {
    /// Size used when no valid `size` attribute is given.
    pub const DEFAULT_SIZE: f32 = 35.0;
}

/// A style handled by the text shaper rather than by the decoration pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TextStyle {
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
    /// `<color=…>`, and the link color of hyperlinks.
    Color(Color),
    /// `<size=…>`
    Size(f32),
    /// `<material=…>`
    Material(u32),
}

/// A [`TextStyle`] applied to a range of the plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSpan {
    /// Char range the style applies to.
    pub range: Range<usize>,
    /// The style.
    pub style: TextStyle,
}
