// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::ScreenParams;

/// Returns `true` if an image of intrinsic `size` drawn with `params` may touch the view.
///
/// The image's screen rectangle is grown by `margin` pixels and tested
/// against `[0, view.width] x [0, view.height]`. Images that are only just
/// off-screen therefore stay alive, which avoids popping at the edges while
/// panning.
#[must_use]
pub fn is_visible(params: ScreenParams, size: Size, view: Size, margin: f64) -> bool {
    let rect = params.rect(size);
    !(rect.x0 > view.width + margin
        || rect.y0 > view.height + margin
        || rect.x1 + margin < 0.0
        || rect.y1 + margin < 0.0)
}
