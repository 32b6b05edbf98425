// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::drag::DragState;
use crate::pinch::PinchState;
use crate::wheel::{DEFAULT_WHEEL_TRAVEL, wheel_zoom_factor};

/// What the host device can do, resolved once at startup by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCapabilities {
    /// The device has a touch screen.
    ///
    /// Touch devices zoom with pinches; everything else zooms with the wheel.
    pub touch: bool,
}

impl InputCapabilities {
    /// Capabilities of a mouse/trackpad device.
    pub const DESKTOP: Self = Self { touch: false };
    /// Capabilities of a touch device.
    pub const TOUCH: Self = Self { touch: true };

    /// Whether pinch gestures should zoom.
    #[must_use]
    pub fn accepts_pinch(self) -> bool {
        self.touch
    }

    /// Whether wheel events should zoom.
    #[must_use]
    pub fn accepts_wheel(self) -> bool {
        !self.touch
    }

    /// Whether side menus should start expanded.
    ///
    /// Small touch screens start with menus collapsed.
    #[must_use]
    pub fn menu_starts_open(self) -> bool {
        !self.touch
    }
}

/// A recognized canvas gesture, ready to be applied to a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Pan with the given pointer velocity, in pixels per millisecond.
    Pan {
        /// Pointer velocity.
        velocity: Vec2,
    },
    /// Multiply the zoom by `factor`.
    Zoom {
        /// Zoom multiplier; always finite.
        factor: f64,
    },
    /// The pointer was pressed and released without moving.
    Tap {
        /// Position of the release.
        pos: Point,
    },
}

/// Turns raw pointer, pinch and wheel events into [`Gesture`]s.
///
/// The recognizer only tracks per-gesture state; it does not own any zoom or
/// pan values. Pinches are dropped on non-touch devices and wheel steps on
/// touch devices.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    capabilities: InputCapabilities,
    drag: DragState,
    pinch: PinchState,
    wheel_travel: f64,
    double_click_factor: f64,
}

impl GestureRecognizer {
    /// Creates a recognizer for a device with the given capabilities.
    #[must_use]
    pub fn new(capabilities: InputCapabilities) -> Self {
        Self {
            capabilities,
            drag: DragState::default(),
            pinch: PinchState::default(),
            wheel_travel: DEFAULT_WHEEL_TRAVEL,
            double_click_factor: 1.7,
        }
    }

    /// Sets the scroll distance that sweeps the whole zoom range.
    #[must_use]
    pub fn with_wheel_travel(mut self, travel: f64) -> Self {
        self.wheel_travel = travel;
        self
    }

    /// Sets the zoom multiplier applied on double-click.
    #[must_use]
    pub fn with_double_click_factor(mut self, factor: f64) -> Self {
        self.double_click_factor = factor;
        self
    }

    /// Returns the device capabilities this recognizer was built for.
    #[must_use]
    pub fn capabilities(&self) -> InputCapabilities {
        self.capabilities
    }

    /// Returns the drag tracker.
    #[must_use]
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Pointer pressed at `pos`.
    pub fn pointer_down(&mut self, pos: Point, time_ms: u64) {
        self.drag.start(pos, time_ms);
    }

    /// Pointer moved to `pos`.
    ///
    /// Returns a [`Gesture::Pan`] while the pointer is held and moving.
    pub fn pointer_move(&mut self, pos: Point, time_ms: u64) -> Option<Gesture> {
        let step = self.drag.update(pos, time_ms)?;
        (step.delta != Vec2::ZERO).then_some(Gesture::Pan {
            velocity: step.velocity,
        })
    }

    /// Pointer released at `pos`.
    ///
    /// Returns a [`Gesture::Tap`] if the pointer did not move while held.
    pub fn pointer_up(&mut self, pos: Point) -> Option<Gesture> {
        let release = self.drag.end()?;
        (!release.moved).then_some(Gesture::Tap { pos })
    }

    /// Two fingers touched down `distance` pixels apart.
    ///
    /// A pointer press in progress no longer counts as a click.
    pub fn pinch_start(&mut self, distance: f64) {
        if self.capabilities.accepts_pinch() {
            self.drag.cancel_click();
            self.pinch.start(distance);
        }
    }

    /// Fingers are now `distance` pixels apart.
    pub fn pinch_move(&mut self, distance: f64) -> Option<Gesture> {
        if !self.capabilities.accepts_pinch() {
            return None;
        }
        let factor = self.pinch.update(distance)?;
        Some(Gesture::Zoom { factor })
    }

    /// Fingers lifted.
    pub fn pinch_end(&mut self) {
        self.pinch.end();
    }

    /// Vertical wheel step of `delta_y` pixels, normalized against the zoom range.
    pub fn wheel(&mut self, delta_y: f64, min_zoom: f64, max_zoom: f64) -> Option<Gesture> {
        if !self.capabilities.accepts_wheel() {
            return None;
        }
        let factor = wheel_zoom_factor(delta_y, min_zoom, max_zoom, self.wheel_travel)?;
        Some(Gesture::Zoom { factor })
    }

    /// Double-click anywhere on the canvas.
    pub fn double_click(&mut self) -> Option<Gesture> {
        let factor = self.double_click_factor;
        factor.is_finite().then_some(Gesture::Zoom { factor })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{Gesture, GestureRecognizer, InputCapabilities};

    #[test]
    fn drag_yields_pan_and_suppresses_tap() {
        let mut r = GestureRecognizer::new(InputCapabilities::DESKTOP);
        r.pointer_down(Point::new(0.0, 0.0), 0);
        assert_eq!(
            r.pointer_move(Point::new(8.0, -4.0), 4),
            Some(Gesture::Pan {
                velocity: Vec2::new(2.0, -1.0)
            })
        );
        assert_eq!(r.pointer_up(Point::new(8.0, -4.0)), None);
        assert!(!r.drag().is_dragging());
    }

    #[test]
    fn press_and_release_is_a_tap() {
        let mut r = GestureRecognizer::new(InputCapabilities::DESKTOP);
        let pos = Point::new(30.0, 40.0);
        r.pointer_down(pos, 0);
        assert_eq!(r.pointer_up(pos), Some(Gesture::Tap { pos }));
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut r = GestureRecognizer::new(InputCapabilities::DESKTOP);
        assert_eq!(r.pointer_move(Point::new(5.0, 5.0), 10), None);
        assert_eq!(r.pointer_up(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn pinch_only_on_touch() {
        let mut desktop = GestureRecognizer::new(InputCapabilities::DESKTOP);
        desktop.pinch_start(100.0);
        assert_eq!(desktop.pinch_move(200.0), None);

        let mut touch = GestureRecognizer::new(InputCapabilities::TOUCH);
        touch.pinch_start(100.0);
        assert_eq!(touch.pinch_move(200.0), Some(Gesture::Zoom { factor: 4.0 }));
        touch.pinch_end();
        assert_eq!(touch.pinch_move(300.0), None);
    }

    #[test]
    fn same_timestamp_moves_still_pan() {
        let mut r = GestureRecognizer::new(InputCapabilities::DESKTOP);
        r.pointer_down(Point::new(0.0, 0.0), 5);
        assert_eq!(
            r.pointer_move(Point::new(30.0, 0.0), 5),
            Some(Gesture::Pan {
                velocity: Vec2::new(30.0, 0.0)
            })
        );
        assert_eq!(r.pointer_move(Point::new(30.0, 0.0), 5), None);
        assert_eq!(r.pointer_up(Point::new(30.0, 0.0)), None);
    }

    #[test]
    fn pinch_cancels_pending_tap() {
        let mut r = GestureRecognizer::new(InputCapabilities::TOUCH);
        let pos = Point::new(40.0, 40.0);
        r.pointer_down(pos, 0);
        r.pinch_start(100.0);
        assert_eq!(r.pinch_move(200.0), Some(Gesture::Zoom { factor: 4.0 }));
        r.pinch_end();
        assert_eq!(r.pointer_up(pos), None);
    }

    #[test]
    fn wheel_only_on_desktop() {
        let mut touch = GestureRecognizer::new(InputCapabilities::TOUCH);
        assert_eq!(touch.wheel(-120.0, 0.04, 1.3), None);

        let mut desktop =
            GestureRecognizer::new(InputCapabilities::DESKTOP).with_wheel_travel(1_000.0);
        match desktop.wheel(-100.0, 0.0, 1.0) {
            Some(Gesture::Zoom { factor }) => assert!((factor - 1.1).abs() < 1e-12),
            other => panic!("expected a zoom gesture, got {other:?}"),
        }
    }

    #[test]
    fn double_click_zooms_in() {
        let mut r = GestureRecognizer::new(InputCapabilities::TOUCH).with_double_click_factor(2.0);
        assert_eq!(r.double_click(), Some(Gesture::Zoom { factor: 2.0 }));
    }

    #[test]
    fn menu_default_follows_device() {
        assert!(InputCapabilities::DESKTOP.menu_starts_open());
        assert!(!InputCapabilities::TOUCH.menu_starts_open());
    }
}
