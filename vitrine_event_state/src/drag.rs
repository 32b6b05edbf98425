// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: movement deltas, pointer velocity and click-versus-drag detection.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] on pointer down with the position and a timestamp in milliseconds.
//! 2) On each move event, call [`DragState::update`] to get the [`DragMove`] since the last update.
//! 3) Call [`DragState::end`] on pointer up; the returned [`PointerRelease`] tells whether the
//!    pointer moved while held, which separates a click from a drag.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vitrine_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! drag.start(Point::new(10.0, 20.0), 1_000);
//! assert!(drag.is_dragging());
//!
//! // 10px to the right over 5ms.
//! let step = drag.update(Point::new(20.0, 20.0), 1_005).unwrap();
//! assert_eq!(step.delta, Vec2::new(10.0, 0.0));
//! assert_eq!(step.velocity, Vec2::new(2.0, 0.0));
//!
//! let release = drag.end().unwrap();
//! assert!(release.moved);
//! ```

use kurbo::{Point, Vec2};

/// Movement reported by [`DragState::update`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragMove {
    /// Pointer movement since the previous update, in pixels.
    pub delta: Vec2,
    /// Pointer velocity in pixels per millisecond.
    ///
    /// When the timestamp did not advance since the previous update, the
    /// movement is taken to span one millisecond.
    pub velocity: Vec2,
}

/// Outcome of releasing the pointer, returned by [`DragState::end`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerRelease {
    /// Whether the pointer moved while it was held.
    ///
    /// A release without movement is a click.
    pub moved: bool,
}

/// Tracks one pointer press across move events.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the press.
    pub last_pos: Option<Point>,
    /// Timestamp of the last recorded position, in milliseconds.
    pub last_time: Option<u64>,
    /// Set once the pointer moves while held.
    pub moved: bool,
}

impl DragState {
    /// Start tracking a new press at `pos`, observed at `time_ms`.
    ///
    /// Any press still in progress is discarded.
    pub fn start(&mut self, pos: Point, time_ms: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.last_time = Some(time_ms);
        self.moved = false;
    }

    /// Record a new pointer position, returning the movement since the last update.
    ///
    /// Returns `None` when no press is in progress.
    pub fn update(&mut self, pos: Point, time_ms: u64) -> Option<DragMove> {
        self.start_pos?;
        let Some(last_pos) = self.last_pos else {
            self.last_pos = Some(pos);
            self.last_time = Some(time_ms);
            return None;
        };

        let delta = pos - last_pos;
        if delta != Vec2::ZERO {
            self.moved = true;
        }
        let dt = match self.last_time {
            Some(last_time) if time_ms > last_time => (time_ms - last_time) as f64,
            _ => 1.0,
        };
        let velocity = delta / dt;

        self.last_pos = Some(pos);
        self.last_time = Some(time_ms);
        Some(DragMove { delta, velocity })
    }

    /// Marks the current press as moved, so releasing it is not a click.
    ///
    /// Does nothing when no press is in progress.
    pub fn cancel_click(&mut self) {
        if self.start_pos.is_some() {
            self.moved = true;
        }
    }

    /// End the current press and reset state.
    ///
    /// Returns `None` if no press was in progress.
    pub fn end(&mut self) -> Option<PointerRelease> {
        let release = self.start_pos.map(|_| PointerRelease { moved: self.moved });
        *self = Self::default();
        release
    }

    /// Returns `true` while a press is in progress.
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(!drag.moved);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn start_sets_dragging_state() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        drag.start(start, 40);

        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.start_pos, drag.last_pos);
        assert_eq!(drag.last_time, Some(40));
        assert!(!drag.moved);
    }

    #[test]
    fn update_returns_delta_and_velocity() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 100);

        let step = drag.update(Point::new(14.0, 28.0), 104);

        assert_eq!(
            step,
            Some(DragMove {
                delta: Vec2::new(4.0, 8.0),
                velocity: Vec2::new(1.0, 2.0),
            })
        );
        assert!(drag.moved);
    }

    #[test]
    fn update_without_elapsed_time_spans_one_millisecond() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 100);

        let step = drag.update(Point::new(3.0, 0.0), 100).unwrap();
        assert_eq!(step.delta, Vec2::new(3.0, 0.0));
        assert_eq!(step.velocity, Vec2::new(3.0, 0.0));

        // Out-of-order timestamps are treated the same way.
        let step = drag.update(Point::new(6.0, 0.0), 90).unwrap();
        assert_eq!(step.velocity, Vec2::new(3.0, 0.0));
    }

    #[test]
    fn update_returns_none_when_not_dragging() {
        let mut drag = DragState::default();

        let step = drag.update(Point::new(15.0, 25.0), 10);

        assert_eq!(step, None);
        assert!(drag.last_pos.is_none());
        assert!(!drag.moved);
    }

    #[test]
    fn update_with_no_last_position_returns_none() {
        let mut drag = DragState {
            start_pos: Some(Point::new(10.0, 20.0)),
            ..DragState::default()
        };

        let new_pos = Point::new(15.0, 25.0);
        let step = drag.update(new_pos, 5);

        assert_eq!(step, None);
        assert_eq!(drag.last_pos, Some(new_pos));
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 0);

        let d1 = drag.update(Point::new(5.0, 3.0), 1).unwrap();
        assert_eq!(d1.delta, Vec2::new(5.0, 3.0));

        let d2 = drag.update(Point::new(8.0, 7.0), 2).unwrap();
        assert_eq!(d2.delta, Vec2::new(3.0, 4.0));
        assert_eq!(drag.start_pos, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn stationary_move_is_still_a_click() {
        let mut drag = DragState::default();
        let pos = Point::new(50.0, 50.0);
        drag.start(pos, 0);

        let step = drag.update(pos, 16).unwrap();
        assert_eq!(step.delta, Vec2::ZERO);

        assert_eq!(drag.end(), Some(PointerRelease { moved: false }));
    }

    #[test]
    fn end_reports_movement_and_resets() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 0);
        drag.update(Point::new(15.0, 25.0), 10);

        assert_eq!(drag.end(), Some(PointerRelease { moved: true }));
        assert!(!drag.is_dragging());
        assert!(drag.last_pos.is_none());
        assert!(!drag.moved);
    }

    #[test]
    fn end_on_fresh_state_returns_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn start_clears_previous_movement() {
        let mut drag = DragState::default();

        drag.start(Point::new(0.0, 0.0), 0);
        drag.update(Point::new(10.0, 10.0), 5);
        assert!(drag.moved);

        let new_start = Point::new(50.0, 60.0);
        drag.start(new_start, 20);

        assert!(!drag.moved);
        assert_eq!(drag.start_pos, Some(new_start));
    }

    #[test]
    fn cancelled_click_releases_as_moved() {
        let mut drag = DragState::default();
        drag.cancel_click();
        assert!(!drag.moved);

        drag.start(Point::new(5.0, 5.0), 0);
        drag.cancel_click();
        assert_eq!(drag.end(), Some(PointerRelease { moved: true }));
    }
}
