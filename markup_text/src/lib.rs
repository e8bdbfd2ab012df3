// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup Text resolves the inline markup of a rich label into plain text plus
//! annotation spans.
//!
//! The markup is a small tag language:
//!
//! - `<a href="…">…</a>` marks a hyperlink.
//! - `<u height="…" offset="…" color="#RRGGBBAA">…</u>` marks an underline.
//! - `<d …>…</d>` marks a strikethrough, with the same attributes as `u`.
//! - `<quad name="…" size="…"/>` places an inline image.
//! - `<b>`, `<i>`, `<color=…>`, `<size=…>` and `<material=…>` are styles meant for
//!   the text shaper. They are removed from the plain text and reported as
//!   [`StyleSpan`]s.
//!
//! Every annotation is indexed in `char`s of the final plain text, so the `n`th
//! glyph quad a shaper produces for [`ResolvedText::text`] belongs to character `n`.
//!
//! ```
//! let resolved = markup_text::resolve(r#"see <a href="docs">the docs</a>"#);
//! assert_eq!(resolved.text, "see the docs");
//! assert_eq!(resolved.hyperlinks[0].range, 4..12);
//! assert_eq!(resolved.hyperlinks[0].href, "docs");
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("markup_text requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod attributes;
mod diagnostic;
mod resolve;
mod span;
mod tokenizer;

pub use crate::diagnostic::{Diagnostic, DiagnosticKind};
pub use crate::resolve::{resolve, strip_markup, MarkupResolver, ResolveOptions, ResolvedText};
pub use crate::span::{
    DecorationKind, HyperlinkSpan, ImagePlaceholder, LineDecorationSpan, StyleSpan, TextStyle,
};
pub use crate::tokenizer::{Attribute, Tag, Token, Tokenizer};
