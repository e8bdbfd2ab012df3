// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Underline and strikethrough bars over shaped text.

use label_draw::{AnnotationKind, DecorationEngine, TextMesh};
use markup_text::resolve;
use peniko::kurbo::Point;
use rich_label_dev::MonospaceShaper;

use crate::util::{decorate, shaper};

/// The positions of the `bar`th decoration quad appended after `glyphs` glyphs.
fn bar_corners(mesh: &TextMesh, glyphs: usize, bar: usize) -> [Point; 4] {
    let start = (glyphs + bar) * 4;
    let vertices = &mesh.vertices()[start..start + 4];
    [
        vertices[0].position,
        vertices[1].position,
        vertices[2].position,
        vertices[3].position,
    ]
}

#[test]
fn decorations_underline_single_line() {
    let (resolved, mesh, output) = decorate("ab<u>cd</u>ef", &MonospaceShaper::default());
    assert!(output.errors.is_empty());
    assert_eq!(output.bar_count, 1);
    assert_eq!(
        bar_corners(&mesh, resolved.char_len(), 0),
        [
            Point::new(20.0, -20.0),
            Point::new(40.0, -20.0),
            Point::new(40.0, -21.0),
            Point::new(20.0, -21.0),
        ]
    );
}

#[test]
fn decorations_underline_wraps() {
    let (resolved, mesh, output) = decorate("<u>abcdefghij</u>", &shaper(50.0));
    assert_eq!(output.bar_count, 2);
    let glyphs = resolved.char_len();
    assert_eq!(bar_corners(&mesh, glyphs, 0)[0], Point::new(0.0, -20.0));
    assert_eq!(bar_corners(&mesh, glyphs, 0)[1], Point::new(50.0, -20.0));
    assert_eq!(bar_corners(&mesh, glyphs, 1)[0], Point::new(0.0, -44.0));
    assert_eq!(bar_corners(&mesh, glyphs, 1)[1], Point::new(50.0, -44.0));
}

#[test]
fn decorations_underline_ending_at_line_end() {
    let (resolved, mesh, output) = decorate("<u>abcde</u>fghij", &shaper(50.0));
    assert_eq!(output.bar_count, 1);
    let corners = bar_corners(&mesh, resolved.char_len(), 0);
    assert_eq!(corners[0], Point::new(0.0, -20.0));
    assert_eq!(corners[1], Point::new(50.0, -20.0));
}

#[test]
fn decorations_strikethrough_on_wrapped_line() {
    let (resolved, mesh, output) = decorate("abcde<d>fg</d>", &shaper(50.0));
    assert_eq!(output.bar_count, 1);
    let corners = bar_corners(&mesh, resolved.char_len(), 0);
    // The second line spans y = -44 .. -24.
    let y = (-44.0 + -24.0 + 1.0) / 2.0;
    assert_eq!(corners[0], Point::new(0.0, y));
    assert_eq!(corners[2], Point::new(20.0, y - 1.0));
}

#[test]
fn decorations_attributes_shape_the_bar() {
    let (resolved, mesh, output) = decorate(
        r##"<u height="2" offset="-1" color="#FF0000FF">ab</u>"##,
        &MonospaceShaper::default(),
    );
    assert_eq!(output.bar_count, 1);
    let glyphs = resolved.char_len();
    let corners = bar_corners(&mesh, glyphs, 0);
    assert_eq!(corners[0], Point::new(0.0, -21.0));
    assert_eq!(corners[3], Point::new(0.0, -23.0));
    let color = mesh.vertices()[glyphs * 4].color.to_rgba8();
    assert_eq!([color.r, color.g, color.b, color.a], [255, 0, 0, 255]);
}

#[test]
fn decorations_bars_follow_underlines_first() {
    let (resolved, mesh, output) = decorate("<d>ab</d><u>cd</u>", &MonospaceShaper::default());
    assert_eq!(output.bar_count, 2);
    let glyphs = resolved.char_len();
    // Underline bar first, even though the strikethrough opened first.
    assert_eq!(bar_corners(&mesh, glyphs, 0)[0], Point::new(20.0, -20.0));
    assert_eq!(bar_corners(&mesh, glyphs, 1)[0].x, 0.0);
    assert_eq!(mesh.indices().len(), (glyphs + 2) * 6);
}

#[test]
fn decorations_truncated_text() {
    let mut resolved = resolve("<u>abcdefghij</u><d>k</d>");
    // Lay out less text than was resolved.
    let mut mesh = shaper(50.0).shape("abcdefgh");
    let output = DecorationEngine::default().apply(&mut mesh, &mut resolved);
    let kinds: Vec<_> = output.errors.iter().map(|e| e.annotation()).collect();
    assert_eq!(
        kinds,
        [AnnotationKind::Underline, AnnotationKind::Strikethrough]
    );
    // The first line of the underline is complete and kept.
    assert_eq!(output.bar_count, 1);
    assert_eq!(bar_corners(&mesh, 8, 0)[1], Point::new(50.0, -20.0));
}
