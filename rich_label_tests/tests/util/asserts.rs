// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use markup_text::{ResolvedText, Token, Tokenizer};

/// Assert that removing every tag from `markup`, and adding one placeholder per
/// image, leaves exactly as many chars as the plain text has.
pub(crate) fn assert_round_trip_length(markup: &str, resolved: &ResolvedText) {
    let tokens: Vec<_> = Tokenizer::new(markup).collect();
    let mut tag_chars = 0;
    for (i, (offset, token)) in tokens.iter().enumerate() {
        let end = tokens.get(i + 1).map_or(markup.len(), |(next, _)| *next);
        match token {
            Token::Open(_) | Token::Close(_) | Token::SelfClosing(_) => {
                tag_chars += markup[*offset..end].chars().count();
            }
            Token::Text(_) => {}
            Token::Malformed(_) => panic!("{markup:?} is not well formed"),
        }
    }
    assert_eq!(
        resolved.char_len(),
        markup.chars().count() - tag_chars + resolved.images.len(),
        "plain text length mismatch for {markup:?}"
    );
}

/// Assert that no two hyperlinks share a char.
pub(crate) fn assert_hyperlinks_disjoint(resolved: &ResolvedText) {
    for (i, a) in resolved.hyperlinks.iter().enumerate() {
        for b in &resolved.hyperlinks[i + 1..] {
            assert!(
                !a.overlaps(b),
                "hyperlinks {:?} and {:?} overlap",
                a.range,
                b.range
            );
        }
    }
}
