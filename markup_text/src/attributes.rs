// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parse-or-default helpers for attribute values.

use peniko::color::{parse_color, Srgb};
use peniko::Color;

/// Parse a finite float, ignoring surrounding whitespace.
pub(crate) fn parse_float(value: &str) -> Option<f32> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` or a CSS color name.
pub(crate) fn parse_rgba(value: &str) -> Option<Color> {
    parse_color(value.trim())
        .ok()
        .map(|color| color.to_alpha_color::<Srgb>())
}

/// Parse a non-negative integer such as a material index.
pub(crate) fn parse_index(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_float, parse_index, parse_rgba};
    use peniko::Color;

    fn rgba(color: Color) -> [u8; 4] {
        let c = color.to_rgba8();
        [c.r, c.g, c.b, c.a]
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float("2"), Some(2.0));
        assert_eq!(parse_float(" -1.5 "), Some(-1.5));
        assert_eq!(parse_float("wide"), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float(""), None);
    }

    #[test]
    fn colors() {
        let red = parse_rgba("#FF0000FF").expect("hex color");
        assert_eq!(rgba(red), [255, 0, 0, 255]);
        let translucent = parse_rgba("#E6FF0080").expect("hex color");
        assert_eq!(rgba(translucent), [230, 255, 0, 128]);
        let named = parse_rgba("blue").expect("named color");
        assert_eq!(rgba(named), [0, 0, 255, 255]);
        assert!(parse_rgba("#GG0000").is_none());
        assert!(parse_rgba("").is_none());
    }

    #[test]
    fn indices() {
        assert_eq!(parse_index("2"), Some(2));
        assert_eq!(parse_index("-2"), None);
    }
}
