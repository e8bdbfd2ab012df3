// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use markup_text::HyperlinkSpan;

use crate::kurbo::Point;

/// The hyperlink whose hit boxes contain `point`, in label-local space.
///
/// Links are checked in the order they were resolved and each link's boxes in
/// the order they were built; the first containing box wins.
pub fn hit_test(point: Point, hyperlinks: &[HyperlinkSpan]) -> Option<&HyperlinkSpan> {
    hyperlinks
        .iter()
        .find(|link| link.hit_boxes.iter().any(|hit_box| hit_box.contains(point)))
}

#[cfg(test)]
mod tests {
    use super::hit_test;
    use crate::kurbo::{Point, Rect};
    use markup_text::HyperlinkSpan;
    use smallvec::smallvec;

    fn link(href: &str, boxes: &[Rect]) -> HyperlinkSpan {
        HyperlinkSpan {
            range: 0..1,
            href: href.into(),
            hit_boxes: boxes.iter().copied().collect(),
        }
    }

    #[test]
    fn first_declared_link_wins() {
        let links = [
            link("a", &[Rect::new(0.0, 0.0, 10.0, 10.0)]),
            link(
                "b",
                &[
                    Rect::new(20.0, 0.0, 30.0, 10.0),
                    Rect::new(5.0, 5.0, 25.0, 15.0),
                ],
            ),
        ];
        assert_eq!(hit_test(Point::new(25.0, 5.0), &links).map(|l| l.href.as_str()), Some("b"));
        // Inside boxes of both links.
        assert_eq!(hit_test(Point::new(7.0, 7.0), &links).map(|l| l.href.as_str()), Some("a"));
        assert!(hit_test(Point::new(50.0, 50.0), &links).is_none());
    }

    #[test]
    fn boxes_are_half_open() {
        let links = [HyperlinkSpan {
            range: 0..1,
            href: "a".into(),
            hit_boxes: smallvec![Rect::new(0.0, 0.0, 10.0, 10.0)],
        }];
        assert!(hit_test(Point::new(0.0, 0.0), &links).is_some());
        assert!(hit_test(Point::new(10.0, 5.0), &links).is_none());
    }
}
