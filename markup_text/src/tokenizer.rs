// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single forward pass over label markup.

use smallvec::SmallVec;

/// A `name="value"` pair inside a tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// The attribute name.
    pub name: &'a str,
    /// The attribute value, without the surrounding quotes.
    pub value: &'a str,
}

/// An opening or self-closing tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    name: &'a str,
    value: Option<&'a str>,
    attributes: SmallVec<[Attribute<'a>; 4]>,
    source: &'a str,
}

impl<'a> Tag<'a> {
    /// The tag name, e.g. `u` for `<u height="2">`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The shorthand value of tags like `<color=#FF0000>` or `<size=20>`.
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// The attributes in the order they were written, duplicates included.
    pub fn attributes(&self) -> &[Attribute<'a>] {
        &self.attributes
    }

    /// The value of the last attribute called `name`.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.attributes
            .iter()
            .rev()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value)
    }

    /// The tag exactly as written in the markup, including the angle brackets.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

/// A piece of label markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// A run of ordinary characters.
    Text(&'a str),
    /// `<name …>`
    Open(Tag<'a>),
    /// `</name>`, carrying the name.
    Close(&'a str),
    /// `<name …/>`
    SelfClosing(Tag<'a>),
    /// A `<` that does not start a well-formed tag. It is kept as a literal character.
    Malformed(&'a str),
}

/// Splits markup into [`Token`]s together with their byte offsets.
///
/// ```
/// use markup_text::{Token, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("a<u>b</u>").map(|(_, token)| token).collect();
/// assert_eq!(tokens[0], Token::Text("a"));
/// assert!(matches!(&tokens[1], Token::Open(tag) if tag.name() == "u"));
/// assert_eq!(tokens[3], Token::Close("u"));
/// ```
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = (usize, Token<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = &self.source[start..];
        if rest.is_empty() {
            return None;
        }
        if !rest.starts_with('<') {
            let len = rest.find('<').unwrap_or(rest.len());
            self.pos += len;
            return Some((start, Token::Text(&rest[..len])));
        }
        match scan_tag(rest) {
            Some((len, token)) => {
                self.pos += len;
                Some((start, token))
            }
            None => {
                self.pos += 1;
                Some((start, Token::Malformed(&rest[..1])))
            }
        }
    }
}

/// Byte cursor used while scanning a single tag.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn name(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        while self
            .peek()
            .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            self.pos += 1;
        }
        Some(&self.src[start..self.pos])
    }

    fn quoted(&mut self) -> Option<&'a str> {
        if !self.eat(b'"') {
            return None;
        }
        let start = self.pos;
        let len = self.src[start..].find('"')?;
        self.pos += len + 1;
        Some(&self.src[start..start + len])
    }

    fn bare_value(&mut self) -> Option<&'a str> {
        let src = self.src;
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|b| !b.is_ascii_whitespace() && b != b'>' && b != b'<')
        {
            self.pos += 1;
        }
        let end = self.pos;
        (end > start).then(|| &src[start..end])
    }
}

/// Scan one tag at the start of `src`, which begins with `<`.
///
/// Returns the byte length of the tag and its token, or `None` if the text is
/// not a well-formed tag.
fn scan_tag(src: &str) -> Option<(usize, Token<'_>)> {
    let mut cursor = Cursor { src, pos: 1 };
    if cursor.eat(b'/') {
        let name = cursor.name()?;
        cursor.skip_whitespace();
        if !cursor.eat(b'>') {
            return None;
        }
        return Some((cursor.pos, Token::Close(name)));
    }

    let name = cursor.name()?;
    let value = if cursor.eat(b'=') {
        Some(match cursor.peek() {
            Some(b'"') => cursor.quoted()?,
            _ => cursor.bare_value()?,
        })
    } else {
        None
    };

    let mut attributes = SmallVec::new();
    loop {
        let separated = cursor.skip_whitespace();
        if cursor.eat(b'>') {
            let tag = Tag {
                name,
                value,
                attributes,
                source: &src[..cursor.pos],
            };
            return Some((cursor.pos, Token::Open(tag)));
        }
        if cursor.eat(b'/') {
            if !cursor.eat(b'>') {
                return None;
            }
            let tag = Tag {
                name,
                value,
                attributes,
                source: &src[..cursor.pos],
            };
            return Some((cursor.pos, Token::SelfClosing(tag)));
        }
        if !separated {
            return None;
        }
        let attr_name = cursor.name()?;
        if !cursor.eat(b'=') {
            return None;
        }
        let attr_value = cursor.quoted()?;
        attributes.push(Attribute {
            name: attr_name,
            value: attr_value,
        });
    }
}
