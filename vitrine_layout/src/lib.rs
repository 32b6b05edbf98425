// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Layout: scatter gallery images over an unbounded plane.
//!
//! This crate places a list of rectangular images in world space so that no
//! two of them come closer than a configurable margin. It knows nothing about
//! catalogs, filters or viewports; callers describe each image as a
//! [`ScatterItem`] (a size plus an "active" flag) and receive one
//! [`kurbo::Point`] per item, the image's top-left corner.
//!
//! - [`geometry`]: box construction and the margin-aware intersection test.
//! - [`scatter`]: the randomized outward spiral search.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use vitrine_layout::{LayoutConfig, ScatterItem, geometry, scatter};
//!
//! let items = [
//!     ScatterItem::new(Size::new(100.0, 100.0), true),
//!     ScatterItem::new(Size::new(200.0, 150.0), true),
//! ];
//! let config = LayoutConfig::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let positions = scatter(&items, &config, &mut rng);
//!
//! assert!(!geometry::intersects(
//!     items[0].size,
//!     positions[0],
//!     items[1].size,
//!     positions[1],
//!     config.margin,
//! ));
//! ```
//!
//! ## Termination
//!
//! Every item gets at most [`LayoutConfig::max_steps`] candidates. Dense
//! inputs that exhaust the budget keep the least-colliding candidate and log
//! a warning through the `log` facade instead of spinning forever.

pub mod geometry;
mod scatter;

pub use scatter::{LayoutConfig, ScatterItem, scatter};
