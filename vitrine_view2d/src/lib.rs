// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine View 2D: the gallery canvas viewport.
//!
//! This crate provides a small, headless model of the gallery's pan/zoom
//! state and the per-image decisions derived from it:
//! - [`Viewport`]: zoom level, map offset and view size, plus the
//!   world → screen transform.
//! - [`is_visible`]: cull images whose screen rectangle misses the view.
//! - [`Variant`] and [`fade_opacity`]: level-of-detail and fade-out choices
//!   based on the current scale.
//!
//! It does **not** own images, layouts or input handling. Callers keep world
//! positions elsewhere and feed them through [`Viewport::screen_params`] once
//! per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use vitrine_view2d::{Variant, Viewport, is_visible};
//!
//! let mut view = Viewport::new(Size::new(800.0, 600.0));
//! view.set_zoom(0.5);
//! view.pan(Vec2::new(-100.0, 0.0));
//!
//! let image = Size::new(400.0, 300.0);
//! let params = view.screen_params(Point::new(100.0, 50.0));
//! assert_eq!(params.origin, Point::new(400.0, 325.0));
//! assert!(is_visible(params, image, view.view_size(), 50.0));
//! assert_eq!(Variant::for_scale(params.scale), Variant::X3);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** zoom factor.
//! - The offset is stored in world units, so panning by a screen distance
//!   goes through [`Viewport::screen_to_world_delta`].
//! - Gesture interpretation lives in `vitrine_event_state`; state ownership
//!   lives in the `vitrine` crate.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod cull;
mod lod;
mod viewport;

pub use cull::is_visible;
pub use lod::{Variant, fade_opacity};
pub use viewport::{ScreenParams, Viewport, ZoomLimits};
