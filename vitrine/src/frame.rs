// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use vitrine_view2d::Variant;

/// Caption drawn under an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Caption<'a> {
    /// Image name, always shown.
    pub name: &'a str,
    /// Category, shown only once the image is large enough.
    pub category: Option<&'a str>,
}

/// Everything the presentation layer needs to draw one image for one frame.
///
/// Frames are derived from the gallery state on demand and never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFrame<'a> {
    /// Index of the image in the gallery's working set.
    pub index: usize,
    /// Whether the image should be drawn at all: its filter is enabled and it
    /// is close enough to the view.
    pub visible: bool,
    /// Screen position of the top-left corner, in pixels.
    pub origin: Point,
    /// Uniform scale applied to the intrinsic size.
    pub scale: f64,
    /// Intrinsic size of the image.
    pub size: Size,
    /// Resolution tier to request.
    pub variant: Variant,
    /// Path of the asset for [`ImageFrame::variant`].
    ///
    /// Only resolved for visible images.
    pub asset: Option<String>,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Caption text.
    pub caption: Caption<'a>,
}

impl ImageFrame<'_> {
    /// Screen rectangle covered by the image.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size * self.scale)
    }
}
