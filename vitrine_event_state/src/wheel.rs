// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mouse wheel zoom.

/// Scroll distance that sweeps the whole zoom range once.
pub const DEFAULT_WHEEL_TRAVEL: f64 = 10_000.0;

/// Zoom factor for a vertical wheel step of `delta_y` pixels.
///
/// The factor is `1 - delta_y * (max_zoom - min_zoom) / travel`: scrolling up
/// (negative delta) zooms in, scrolling down zooms out. Returns `None` for a
/// non-positive or non-finite `travel` and for non-finite input.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64, min_zoom: f64, max_zoom: f64, travel: f64) -> Option<f64> {
    if !travel.is_finite()
        || travel <= 0.0
        || !delta_y.is_finite()
        || !(max_zoom - min_zoom).is_finite()
    {
        return None;
    }
    let factor = 1.0 - delta_y * (max_zoom - min_zoom) / travel;
    factor.is_finite().then_some(factor)
}
