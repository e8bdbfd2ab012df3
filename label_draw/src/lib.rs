// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label Draw turns the annotations of a [`ResolvedText`] into geometry, given the
//! glyph quads a text shaper produced for its plain text.
//!
//! The shaper is expected to emit one quad per `char`, in character order, with
//! its corners at vertex indices `4i..4i+3` (see [`Corner`]). Positions are in
//! label-local space with y growing upward. The only information about line
//! wrapping is the jump between consecutive quads, which [`is_line_break`]
//! detects.
//!
//! A geometry pass (see [`DecorationEngine::apply`]) does three things:
//!
//! - collapses the placeholder quad of every inline image and computes where the
//!   image goes ([`ImageAnchor`]),
//! - rebuilds the per-line hit boxes of every hyperlink,
//! - appends one bar per visual line of every underline and strikethrough to the
//!   mesh.
//!
//! [`hit_test`] then maps a local point back to the hyperlink under it.
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://crates.io/crates/libm
//! [`ResolvedText`]: markup_text::ResolvedText

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
compile_error!("label_draw requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

use peniko::kurbo;

mod decoration;
mod engine;
mod error;
mod hit_test;
mod hyperlink;
mod image;
mod mesh;
mod quad;

pub use decoration::{decoration_bars, DecorationBar};
pub use engine::{DecorationEngine, DecorationOptions, DecorationOutput};
pub use error::{AnnotationKind, GeometryError, GeometryErrorKind};
pub use hit_test::hit_test;
pub use hyperlink::hyperlink_boxes;
pub use image::{place_images, ImageAnchor};
pub use mesh::{uv_centroid, TextMesh, Vertex};
pub use quad::{is_line_break, Corner, GlyphQuad};
