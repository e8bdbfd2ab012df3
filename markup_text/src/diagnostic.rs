// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// A recoverable problem found while resolving markup.
///
/// Resolution never fails: malformed markup degrades to literal text or to a
/// tag without an annotation, and a bad attribute keeps its previous value.
/// Each of those events is reported as a `Diagnostic` so callers can surface
/// them if they want to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The category of the problem.
    kind: DiagnosticKind,

    /// The byte offset of the offending tag in the markup.
    offset: usize,

    /// The tag name, or `name=value` for attribute problems.
    detail: String,
}

impl Diagnostic {
    /// The machine-readable category for this diagnostic.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// The byte offset of the offending tag in the markup.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The tag name involved, or `name=value` for attribute problems.
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub(crate) fn new(kind: DiagnosticKind, offset: usize, detail: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            detail: detail.into(),
        }
    }
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            DiagnosticKind::MalformedTag => {
                write!(f, "`<` at byte {} does not start a tag", self.offset)
            }
            DiagnosticKind::UnmatchedOpenTag => write!(
                f,
                "open tag `<{}>` at byte {} is never closed",
                self.detail, self.offset
            ),
            DiagnosticKind::UnmatchedCloseTag => write!(
                f,
                "close tag `</{}>` at byte {} has no open tag",
                self.detail, self.offset
            ),
            DiagnosticKind::UnknownTag => {
                write!(f, "unknown tag `{}` at byte {}", self.detail, self.offset)
            }
            DiagnosticKind::InvalidAttribute => write!(
                f,
                "invalid attribute `{}` in tag at byte {}",
                self.detail, self.offset
            ),
        }
    }
}

impl core::error::Error for Diagnostic {}

/// The non-exhaustive category of a [`Diagnostic`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum DiagnosticKind {
    /// A `<` that is not the start of a well-formed tag. It is kept as text.
    MalformedTag,

    /// An open tag without a matching close tag. It is stripped.
    UnmatchedOpenTag,

    /// A close tag without a matching open tag. It is stripped.
    UnmatchedCloseTag,

    /// A tag with no meaning for labels. Its content is kept.
    UnknownTag,

    /// An attribute value that could not be parsed. The attribute keeps its
    /// previous value.
    InvalidAttribute,
}
