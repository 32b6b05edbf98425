// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! The zoom factor of a pinch step is the *square* of the ratio between the
//! current and the previous finger distance, which makes small finger motions
//! zoom noticeably.
//!
//! ```
//! use vitrine_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.start(100.0);
//! assert_eq!(pinch.update(200.0), Some(4.0));
//! assert_eq!(pinch.update(100.0), Some(0.25));
//! pinch.end();
//! assert_eq!(pinch.update(50.0), None);
//! ```

/// Previous distances at or below this value are treated as degenerate samples.
pub const MIN_PINCH_DISTANCE: f64 = 1e-6;

/// Zoom factor for a pinch going from `previous` to `current` finger distance.
///
/// Returns `None` for non-finite samples and for a previous distance that is
/// (nearly) zero, which would otherwise divide by zero.
#[must_use]
pub fn pinch_zoom_factor(previous: f64, current: f64) -> Option<f64> {
    if !previous.is_finite() || !current.is_finite() || previous <= MIN_PINCH_DISTANCE {
        return None;
    }
    let ratio = current / previous;
    Some(ratio * ratio)
}

/// Remembers the last finger distance of an ongoing pinch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    last_distance: Option<f64>,
}

impl PinchState {
    /// Starts a pinch at the given finger distance.
    pub fn start(&mut self, distance: f64) {
        self.last_distance = Some(distance);
    }

    /// Records a new finger distance and returns the zoom factor for this step.
    ///
    /// Returns `None` outside a pinch or when the step is degenerate. The new
    /// distance is remembered in both cases while a pinch is active.
    pub fn update(&mut self, distance: f64) -> Option<f64> {
        let previous = self.last_distance?;
        self.last_distance = Some(distance);
        pinch_zoom_factor(previous, distance)
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.last_distance = None;
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.last_distance.is_some()
    }
}
