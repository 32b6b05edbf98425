// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Event State: gesture state for a pan/zoom gallery canvas.
//!
//! This crate turns raw input into canvas gestures. Each module handles one
//! interaction pattern:
//!
//! - [`drag`]: pointer press/move/release with velocity and a per-gesture
//!   "moved" flag that separates clicks from drags
//! - [`pinch`]: two-finger distance tracking, yielding squared-ratio zoom factors
//! - [`wheel`]: wheel deltas normalized against the zoom range
//!
//! [`GestureRecognizer`] composes them and gates pinch versus wheel on the
//! [`InputCapabilities`] the host injects at startup. It emits [`Gesture`]
//! values and never owns zoom or pan state; applying a gesture is the
//! caller's job.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use vitrine_event_state::{Gesture, GestureRecognizer, InputCapabilities};
//!
//! let mut input = GestureRecognizer::new(InputCapabilities::DESKTOP);
//!
//! // Press, drag, release: a pan and no tap.
//! input.pointer_down(Point::new(10.0, 10.0), 0);
//! let pan = input.pointer_move(Point::new(30.0, 10.0), 10);
//! assert!(matches!(pan, Some(Gesture::Pan { .. })));
//! assert_eq!(input.pointer_up(Point::new(30.0, 10.0)), None);
//!
//! // Press and release in place: a tap.
//! input.pointer_down(Point::new(50.0, 50.0), 20);
//! assert!(matches!(input.pointer_up(Point::new(50.0, 50.0)), Some(Gesture::Tap { .. })));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
mod recognizer;
pub mod wheel;

pub use recognizer::{Gesture, GestureRecognizer, InputCapabilities};
