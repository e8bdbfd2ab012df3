// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline image placeholders.

use label_draw::AnnotationKind;
use markup_text::resolve;
use peniko::kurbo::{Point, Size};
use rich_label_dev::{samples, MonospaceShaper};

use crate::util::decorate;

#[test]
fn images_anchor_on_placeholder_glyph() {
    let (resolved, mesh, output) = decorate(samples::IMAGES, &MonospaceShaper::default());
    assert_eq!(resolved.text, "Costs 5 \u{FFFC} or 1 \u{FFFC} today");
    let indices: Vec<_> = resolved.images.iter().map(|i| i.char_index).collect();
    assert_eq!(indices, [8, 15]);

    assert_eq!(output.image_anchors.len(), 2);
    assert_eq!(output.image_anchors[0].center, Point::new(90.0, -10.0));
    assert_eq!(output.image_anchors[0].size, Size::new(20.0, 20.0));
    // The gem has no size and gets the default of 35.
    assert_eq!(output.image_anchors[1].center, Point::new(167.5, -2.5));
    assert_eq!(output.image_anchors[1].size, Size::new(35.0, 35.0));

    // Placeholder glyphs collapse onto their top-left corner.
    let coin = mesh.quad(8).expect("placeholder glyph");
    assert!(coin.corners.iter().all(|&p| p == Point::new(80.0, 0.0)));
    let before = mesh.quad(7).expect("glyph before the placeholder");
    assert_eq!(before.corners[3], Point::new(70.0, -20.0));
}

#[test]
fn images_without_glyphs_are_reported() {
    let mut resolved = resolve(r#"ab<quad name="coin"/>"#);
    let mut mesh = MonospaceShaper::default().shape("ab");
    let output = label_draw::DecorationEngine::default().apply(&mut mesh, &mut resolved);
    assert!(output.image_anchors.is_empty());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].annotation(), AnnotationKind::Image);
    assert_eq!(output.errors[0].range(), 2..3);
}
