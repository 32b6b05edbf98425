// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine: the core of a pan/zoom portfolio gallery.
//!
//! Images from a static [`Catalog`] are scattered over an unbounded canvas
//! without overlapping. Users drag, pinch or scroll to move around, click an
//! image to zoom onto it, and toggle categories on and off. This crate owns
//! that state and turns it into per-image render parameters; drawing and
//! chrome belong to the host.
//!
//! - [`Gallery`]: the single owner of images, layout, filters and viewport.
//!   Input handlers (`pointer_*`, `pinch_*`, [`Gallery::wheel`],
//!   [`Gallery::double_click`]) and [`Gallery::apply`] mutate it;
//!   [`Gallery::frames`] reads it.
//! - [`Intent`]: the actions chrome can emit (home, zoom, shuffle, filter
//!   toggle, arrow navigation, focus).
//! - [`GalleryConfig`]: tunables, loadable from JSON.
//! - [`translate`]: the static label table for the filter menu.
//!
//! The building blocks live in their own crates: `vitrine_layout` (scatter
//! layout), `vitrine_view2d` (viewport, culling, level of detail) and
//! `vitrine_event_state` (gesture recognition).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Size;
//! use vitrine::{Catalog, Gallery, GalleryConfig, Intent};
//! use vitrine_event_state::InputCapabilities;
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"src": "./thumbs/blog/a", "width": 100, "height": 100, "name": "a", "category": "blog", "filter": "blog"},
//!     {"src": "./thumbs/outils/b", "width": 200, "height": 150, "name": "b", "category": "outils", "filter": "outils"}
//! ]"#)?;
//!
//! let mut gallery = Gallery::new(
//!     &catalog,
//!     GalleryConfig::default(),
//!     Size::new(1280.0, 800.0),
//!     InputCapabilities::DESKTOP,
//! )?;
//!
//! gallery.apply(Intent::ToggleFilter("outils".into()))?;
//! let shown = gallery.frames().iter().filter(|frame| frame.visible).count();
//! assert_eq!(shown, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod catalog;
mod config;
mod filters;
mod frame;
mod gallery;
mod intent;
pub mod translate;

pub use catalog::{Catalog, CatalogError, ImageDescriptor};
pub use config::{ConfigError, GalleryConfig};
pub use filters::FilterSet;
pub use frame::{Caption, ImageFrame};
pub use gallery::{Gallery, GalleryError, MenuEntry};
pub use intent::{Direction, Intent};
pub use translate::Language;
