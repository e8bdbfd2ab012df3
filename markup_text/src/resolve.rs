// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup resolution.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::color::palette;
use peniko::Color;
use smallvec::SmallVec;

use crate::attributes::{parse_float, parse_index, parse_rgba};
use crate::{
    DecorationKind, Diagnostic, DiagnosticKind, HyperlinkSpan, ImagePlaceholder,
    LineDecorationSpan, StyleSpan, Tag, TextStyle, Token, Tokenizer,
};

/// Options for [`MarkupResolver`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolveOptions {
    /// Color style applied to hyperlink text.
    pub hyperlink_color: Color,
    /// Character inserted into the plain text for each inline image.
    pub placeholder: char,
    /// Image size used when a `quad` tag has no valid `size`.
    pub default_image_size: f32,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            hyperlink_color: palette::css::BLUE,
            placeholder: '\u{FFFC}',
            default_image_size: ImagePlaceholder::DEFAULT_SIZE,
        }
    }
}

/// Plain text plus everything the markup said about it.
///
/// All ranges and indices count `char`s of [`text`](Self::text).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedText {
    /// The text with all markup removed and one placeholder per inline image.
    pub text: String,
    /// Hyperlinks, in the order of their opening tags.
    pub hyperlinks: Vec<HyperlinkSpan>,
    /// Underlines, in the order of their opening tags.
    pub underlines: Vec<LineDecorationSpan>,
    /// Strikethroughs, in the order of their opening tags.
    pub strikethroughs: Vec<LineDecorationSpan>,
    /// Inline images, in text order.
    pub images: Vec<ImagePlaceholder>,
    /// Shaper styles, in the order of their opening tags.
    pub styles: Vec<StyleSpan>,
    /// Problems found in the markup. None of them stop resolution.
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolvedText {
    /// Number of `char`s in the plain text, which is also the number of glyph
    /// quads a shaper is expected to produce for it.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Clear every list, keeping allocations.
    pub fn clear(&mut self) {
        self.text.clear();
        self.hyperlinks.clear();
        self.underlines.clear();
        self.strikethroughs.clear();
        self.images.clear();
        self.styles.clear();
        self.diagnostics.clear();
    }
}

/// Turns label markup into a [`ResolvedText`].
///
/// Resolution is a single forward pass. Text runs are appended to the plain
/// text; open tags are pushed on a stack together with the current char index;
/// a close tag takes the nearest open tag of the same name off the stack and
/// turns it into a span ending at the current char index. Tags meant for the
/// text shaper become [`StyleSpan`]s, `quad` tags become placeholder characters.
#[derive(Clone, Debug, Default)]
pub struct MarkupResolver {
    options: ResolveOptions,
}

impl MarkupResolver {
    /// Create a resolver with the given options.
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// The options this resolver was created with.
    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve `markup` into a fresh [`ResolvedText`].
    pub fn resolve(&self, markup: &str) -> ResolvedText {
        let mut resolved = ResolvedText::default();
        self.resolve_into(markup, &mut resolved);
        resolved
    }

    /// Resolve `markup` into `resolved`, replacing its previous contents.
    pub fn resolve_into(&self, markup: &str, resolved: &mut ResolvedText) {
        resolved.clear();
        let mut state = ResolveState {
            options: &self.options,
            out: resolved,
            char_index: 0,
            next_seq: 0,
            stack: Vec::new(),
            hyperlinks: Vec::new(),
            underlines: Vec::new(),
            strikethroughs: Vec::new(),
            styles: Vec::new(),
        };
        for (offset, token) in Tokenizer::new(markup) {
            match token {
                Token::Text(text) => state.push_text(text),
                Token::Malformed(text) => {
                    state.diagnose(DiagnosticKind::MalformedTag, offset, "<");
                    state.push_text(text);
                }
                Token::Open(tag) => state.open(offset, tag),
                Token::Close(name) => state.close(offset, name),
                Token::SelfClosing(tag) => state.self_closing(offset, &tag),
            }
        }
        state.finish();
    }
}

/// Resolve `markup` with the default [`ResolveOptions`].
pub fn resolve(markup: &str) -> ResolvedText {
    MarkupResolver::default().resolve(markup)
}

/// The plain text of `markup`, with inline images as placeholder characters.
pub fn strip_markup(markup: &str) -> String {
    resolve(markup).text
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TagKind {
    Hyperlink,
    Decoration(DecorationKind),
    Style,
    Unknown,
}

impl TagKind {
    fn of(name: &str) -> Self {
        match name {
            "a" => Self::Hyperlink,
            "u" => Self::Decoration(DecorationKind::Underline),
            "d" => Self::Decoration(DecorationKind::Strikethrough),
            "b" | "i" | "color" | "size" | "material" => Self::Style,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug)]
struct OpenTag<'a> {
    tag: Tag<'a>,
    kind: TagKind,
    offset: usize,
    start: usize,
    seq: usize,
}

struct ResolveState<'r, 'a> {
    options: &'r ResolveOptions,
    out: &'r mut ResolvedText,
    char_index: usize,
    next_seq: usize,
    stack: Vec<OpenTag<'a>>,
    // Spans complete in close-tag order; the sequence number restores open-tag order.
    hyperlinks: Vec<(usize, HyperlinkSpan)>,
    underlines: Vec<(usize, LineDecorationSpan)>,
    strikethroughs: Vec<(usize, LineDecorationSpan)>,
    styles: Vec<(usize, StyleSpan)>,
}

impl<'a> ResolveState<'_, 'a> {
    fn push_text(&mut self, text: &str) {
        self.out.text.push_str(text);
        self.char_index += text.chars().count();
    }

    fn diagnose(&mut self, kind: DiagnosticKind, offset: usize, detail: impl Into<String>) {
        let diagnostic = Diagnostic::new(kind, offset, detail);
        log::debug!("{diagnostic}");
        self.out.diagnostics.push(diagnostic);
    }

    fn open(&mut self, offset: usize, tag: Tag<'a>) {
        let kind = TagKind::of(tag.name());
        self.stack.push(OpenTag {
            tag,
            kind,
            offset,
            start: self.char_index,
            seq: self.next_seq,
        });
        self.next_seq += 1;
    }

    fn close(&mut self, offset: usize, name: &str) {
        let Some(pos) = self.stack.iter().rposition(|open| open.tag.name() == name) else {
            self.diagnose(DiagnosticKind::UnmatchedCloseTag, offset, name);
            return;
        };
        // Only the matched entry leaves the stack, so crossing tags still pair up.
        let open = self.stack.remove(pos);
        let range = open.start..self.char_index;
        match open.kind {
            TagKind::Hyperlink => {
                let href = open.tag.attribute("href").unwrap_or_default();
                log::debug!("hyperlink {range:?} -> {href:?}");
                self.styles.push((
                    open.seq,
                    StyleSpan {
                        range: range.clone(),
                        style: TextStyle::Color(self.options.hyperlink_color),
                    },
                ));
                self.hyperlinks.push((
                    open.seq,
                    HyperlinkSpan {
                        range,
                        href: href.into(),
                        hit_boxes: SmallVec::new(),
                    },
                ));
            }
            TagKind::Decoration(kind) => {
                let span = self.decoration(kind, range, &open);
                match kind {
                    DecorationKind::Underline => self.underlines.push((open.seq, span)),
                    DecorationKind::Strikethrough => self.strikethroughs.push((open.seq, span)),
                }
            }
            TagKind::Style => {
                if let Some(style) = self.style(&open) {
                    self.styles.push((open.seq, StyleSpan { range, style }));
                }
            }
            TagKind::Unknown => {
                self.diagnose(DiagnosticKind::UnknownTag, open.offset, open.tag.name());
            }
        }
    }

    fn self_closing(&mut self, offset: usize, tag: &Tag<'a>) {
        if tag.name() != "quad" {
            self.diagnose(DiagnosticKind::UnknownTag, offset, tag.name());
            return;
        }
        let mut image = ImagePlaceholder {
            char_index: self.char_index,
            sprite_name: String::new(),
            size: self.options.default_image_size,
        };
        for attr in tag.attributes() {
            match attr.name {
                "name" => image.sprite_name = attr.value.into(),
                "size" => match parse_float(attr.value) {
                    Some(size) => image.size = size,
                    None => self.invalid_attribute(offset, attr.name, attr.value),
                },
                _ => {}
            }
        }
        log::debug!("image {:?} at char {}", image.sprite_name, image.char_index);
        self.out.images.push(image);
        self.out.text.push(self.options.placeholder);
        self.char_index += 1;
    }

    fn decoration(
        &mut self,
        kind: DecorationKind,
        range: core::ops::Range<usize>,
        open: &OpenTag<'a>,
    ) -> LineDecorationSpan {
        let mut span = LineDecorationSpan::new(kind, range);
        for attr in open.tag.attributes() {
            let parsed = match attr.name {
                "height" => parse_float(attr.value).map(|v| span.height = v),
                "offset" => parse_float(attr.value).map(|v| span.offset = v),
                "color" => parse_rgba(attr.value).map(|c| span.color = c),
                _ => continue,
            };
            if parsed.is_none() {
                self.invalid_attribute(open.offset, attr.name, attr.value);
            }
        }
        span
    }

    fn style(&mut self, open: &OpenTag<'a>) -> Option<TextStyle> {
        let name = open.tag.name();
        let value = open.tag.value().unwrap_or_default();
        let style = match name {
            "b" => Some(TextStyle::Bold),
            "i" => Some(TextStyle::Italic),
            "color" => parse_rgba(value).map(TextStyle::Color),
            "size" => parse_float(value).map(TextStyle::Size),
            "material" => parse_index(value).map(TextStyle::Material),
            _ => None,
        };
        if style.is_none() {
            self.invalid_attribute(open.offset, name, value);
        }
        style
    }

    fn invalid_attribute(&mut self, offset: usize, name: &str, value: &str) {
        self.diagnose(
            DiagnosticKind::InvalidAttribute,
            offset,
            format!("{name}={value}"),
        );
    }

    fn finish(mut self) {
        for open in core::mem::take(&mut self.stack) {
            self.diagnose(DiagnosticKind::UnmatchedOpenTag, open.offset, open.tag.name());
        }
        self.out.hyperlinks = in_open_order(self.hyperlinks);
        self.out.underlines = in_open_order(self.underlines);
        self.out.strikethroughs = in_open_order(self.strikethroughs);
        self.out.styles = in_open_order(self.styles);
    }
}

fn in_open_order<T>(mut spans: Vec<(usize, T)>) -> Vec<T> {
    spans.sort_by_key(|(seq, _)| *seq);
    spans.into_iter().map(|(_, span)| span).collect()
}
