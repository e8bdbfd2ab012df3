// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod asserts;

pub(crate) use asserts::{assert_hyperlinks_disjoint, assert_round_trip_length};

use label_draw::{DecorationEngine, DecorationOutput, TextMesh};
use markup_text::{resolve, ResolvedText};
use rich_label_dev::MonospaceShaper;

/// Glyphs of 10x20 on lines 24 apart, wrapping at `max_width`.
pub(crate) fn shaper(max_width: f64) -> MonospaceShaper {
    MonospaceShaper::default().with_max_width(max_width)
}

/// Resolve `markup`, shape it with `shaper` and run a geometry pass.
pub(crate) fn decorate(
    markup: &str,
    shaper: &MonospaceShaper,
) -> (ResolvedText, TextMesh, DecorationOutput) {
    let mut resolved = resolve(markup);
    let mut mesh = shaper.shape(&resolved.text);
    let output = DecorationEngine::default().apply(&mut mesh, &mut resolved);
    (resolved, mesh, output)
}
