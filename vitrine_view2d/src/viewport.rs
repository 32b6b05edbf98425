// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Inclusive zoom range enforced by [`Viewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed zoom factor.
    pub min: f64,
    /// Largest allowed zoom factor.
    pub max: f64,
}

impl ZoomLimits {
    /// Creates a zoom range, swapping the bounds if they are given in reverse.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `zoom` into this range.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// Returns `true` if `zoom` lies inside this range.
    #[must_use]
    pub fn contains(&self, zoom: f64) -> bool {
        (self.min..=self.max).contains(&zoom)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.04, max: 1.3 }
    }
}

/// Where a world-space image lands on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenParams {
    /// Screen position of the image's top-left corner, in pixels.
    pub origin: Point,
    /// Uniform scale applied to the image's intrinsic size.
    pub scale: f64,
}

impl ScreenParams {
    /// Screen rectangle covered by an image of intrinsic `size`.
    #[must_use]
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size * self.scale)
    }
}

/// Pan/zoom state of the gallery canvas.
///
/// World points map to the screen with a uniform similarity transform: the
/// map offset is added first, the sum is scaled by the zoom, and the result is
/// measured from the center of the view:
///
/// `screen = center + (world + offset) * zoom`
///
/// The zoom always lies inside the configured [`ZoomLimits`]. Non-finite
/// inputs are dropped so the state never holds NaN or infinities.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_size: Size,
    zoom: f64,
    offset: Vec2,
    limits: ZoomLimits,
}

impl Viewport {
    /// Creates a viewport over a view of `view_size` pixels.
    ///
    /// - Initial zoom is `1.0`, clamped into the default [`ZoomLimits`].
    /// - Initial offset is zero, so the world origin sits at the view center.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        let limits = ZoomLimits::default();
        Self {
            view_size,
            zoom: limits.clamp(1.0),
            offset: Vec2::ZERO,
            limits,
        }
    }

    /// Returns the view size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size, for example after the host window was resized.
    ///
    /// Zoom and offset are kept; the world point under the view center stays
    /// under the new center.
    pub fn set_view_size(&mut self, size: Size) {
        if size.width.is_finite() && size.height.is_finite() {
            self.view_size = size;
        }
    }

    /// Returns the center of the view in screen coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        (self.view_size.to_vec2() / 2.0).to_point()
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamping it into the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = self.limits.clamp(zoom);
        }
    }

    /// Returns the configured zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Replaces the zoom limits and clamps the current zoom into them.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = ZoomLimits::new(limits.min, limits.max);
        self.zoom = self.limits.clamp(self.zoom);
    }

    /// Returns the map offset in world units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the map offset in world units.
    pub fn set_offset(&mut self, offset: Vec2) {
        if offset.is_finite() {
            self.offset = offset;
        }
    }

    /// Moves the world by `delta` world units.
    pub fn pan(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.offset += delta;
        }
    }

    /// Converts a screen-space distance into world units at the current zoom.
    ///
    /// Feeding the result to [`Viewport::pan`] makes a drag move the canvas by
    /// the same number of pixels regardless of zoom.
    #[must_use]
    pub fn screen_to_world_delta(&self, delta: Vec2) -> Vec2 {
        delta / self.zoom
    }

    /// Multiplies the zoom by `factor`, clamped into the zoom limits.
    ///
    /// Zero or negative factors drive the zoom to its minimum.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor.is_finite() {
            self.zoom = self.limits.clamp(self.zoom * factor);
        }
    }

    /// Zooms onto a single image and centers it.
    ///
    /// `size` is the intrinsic image size, `world_pos` its top-left corner and
    /// `inset` is subtracted from both image dimensions before fitting, which
    /// slightly over-zooms so the image edges fall outside the view.
    ///
    /// Landscape images take the larger of the two axis ratios and cover the
    /// view; square and portrait images take the smaller one and fit inside
    /// it. The resulting zoom is clamped into the limits. If the inset image
    /// or the view is empty only the centering is applied.
    pub fn focus_on(&mut self, size: Size, world_pos: Point, inset: f64) {
        let fit_w = size.width - inset;
        let fit_h = size.height - inset;
        if fit_w > 0.0 && fit_h > 0.0 && self.view_size.width > 0.0 && self.view_size.height > 0.0 {
            let sx = self.view_size.width / fit_w;
            let sy = self.view_size.height / fit_h;
            let target = if size.width > size.height {
                sx.max(sy)
            } else {
                sx.min(sy)
            };
            self.set_zoom(target);
        }
        self.set_offset(-(world_pos.to_vec2() + size.to_vec2() / 2.0));
    }

    /// Restores the given zoom and offset.
    pub fn reset(&mut self, zoom: f64, offset: Vec2) {
        self.set_zoom(zoom);
        self.set_offset(offset);
    }

    /// Computes where an image whose top-left corner is at `world_pos` lands on screen.
    ///
    /// This is a pure read of the viewport state.
    #[must_use]
    pub fn screen_params(&self, world_pos: Point) -> ScreenParams {
        ScreenParams {
            origin: self.world_to_screen(world_pos),
            scale: self.zoom,
        }
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.center() + (pt.to_vec2() + self.offset) * self.zoom
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        ((pt - self.center()) / self.zoom - self.offset).to_point()
    }
}
