// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned boxes for images placed by their top-left corner.

use kurbo::{Point, Rect, Size};

/// Returns the box covered by an image of `size` whose top-left corner sits at `origin`.
///
/// In the returned [`Rect`], `y0` is the top, `x0` the left, `y1` the bottom
/// and `x1` the right edge.
#[must_use]
pub fn bounds(size: Size, origin: Point) -> Rect {
    Rect::from_origin_size(origin, size)
}

/// Returns `true` if image `a` at `origin_a` comes within `margin` of image `b` at `origin_b`.
///
/// Only `a`'s box is inflated, by `margin` on every side, and then compared
/// against `b`'s box with strict inequalities, so boxes that are exactly
/// `margin` apart do not intersect. Swapping the arguments gives the same
/// answer.
#[must_use]
pub fn intersects(
    size_a: Size,
    origin_a: Point,
    size_b: Size,
    origin_b: Point,
    margin: f64,
) -> bool {
    let a = bounds(size_a, origin_a);
    let b = bounds(size_b, origin_b);
    a.x0 - margin < b.x1 && a.x1 + margin > b.x0 && a.y0 - margin < b.y1 && a.y1 + margin > b.y0
}
