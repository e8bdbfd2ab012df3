// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich Label is a text label whose content is written in a small inline markup.
//!
//! A [`RichLabel`] owns the raw markup and everything derived from it. It
//! calls into [`markup_text`] whenever the text changes and into [`label_draw`]
//! once the host has shaped the plain text into a [`TextMesh`]:
//!
//! - [`RichLabel::set_text`] resolves the markup and synchronizes the pool of
//!   inline image slots with the resolved placeholders.
//! - [`RichLabel::populate_mesh`] collapses image placeholders, rebuilds
//!   hyperlink hit boxes and appends underline and strikethrough bars.
//! - [`RichLabel::click`] maps a label-local point to a hyperlink and notifies
//!   the listeners of [`HrefClickEvent`].
//!
//! Sprites for inline images come from a [`SpriteSource`] chosen when the label
//! is created. Any `FnMut(&str) -> Option<T>` closure is a sprite source, and
//! [`ResourceDirectory`] looks names up as PNG files in a directory.
//!
//! ## Example
//!
//! ```rust
//! use rich_label::{LabelConfig, RichLabel, TextMesh};
//! use rich_label::label_draw::GlyphQuad;
//! use rich_label::peniko::kurbo::{Point, Rect};
//! use rich_label::peniko::Color;
//!
//! let mut label = RichLabel::new(LabelConfig::default(), |_: &str| None::<()>);
//! label.set_text(r#"<a href="home">go</a>"#);
//! assert_eq!(label.text(), "go");
//!
//! // The host shapes the plain text, here with two 10x20 glyphs on one line.
//! let quads = (0..2).map(|i| {
//!     let x = f64::from(i) * 10.0;
//!     GlyphQuad::from_rect(Rect::new(x, 0.0, x + 10.0, 20.0))
//! });
//! let mut mesh = TextMesh::from_glyph_quads(quads, Color::BLACK);
//! label.populate_mesh(&mut mesh);
//!
//! label.on_href_click().add_listener(|href| assert_eq!(href, "home"));
//! assert!(label.click(Point::new(5.0, 5.0)));
//! assert!(!label.click(Point::new(50.0, 5.0)));
//! ```

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

pub use label_draw;
pub use markup_text;
pub use peniko;

mod config;
mod error;
mod event;
mod label;
mod pool;
mod sprite;

pub use config::LabelConfig;
pub use error::{SpriteError, SpriteErrorKind};
pub use event::{HrefClickEvent, ListenerId};
pub use label::RichLabel;
pub use pool::{ImagePool, ImageSlot};
pub use sprite::{ResourceDirectory, SpriteSource};

pub use label_draw::TextMesh;
pub use markup_text::ResolvedText;
