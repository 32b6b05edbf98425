// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeSet;

use kurbo::Size;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use vitrine_view2d::Variant;

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog is not valid JSON or does not match the descriptor shape.
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// An image has a zero width or height.
    #[error("image `{name}` has an empty size ({width}x{height})")]
    InvalidSize {
        /// Name of the offending image.
        name: String,
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
    },
    /// An image has no filter tag.
    #[error("image `{name}` has no filter tag")]
    MissingFilter {
        /// Name of the offending image.
        name: String,
    },
}

/// One image of the gallery, as listed in the catalog file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Asset base path; variants are resolved as `{src}@Nx.jpg`.
    pub src: String,
    /// Intrinsic width in world units.
    pub width: u32,
    /// Intrinsic height in world units.
    pub height: u32,
    /// Display name, shown in captions.
    pub name: String,
    /// Category label, shown in captions once zoomed in.
    pub category: String,
    /// Filter tag controlling visibility.
    pub filter: String,
}

impl ImageDescriptor {
    /// Intrinsic size of the image.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Path of the given resolution tier of this image.
    #[must_use]
    pub fn asset_path(&self, variant: Variant) -> String {
        variant.asset_path(&self.src)
    }
}

/// The static, ordered list of gallery images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<ImageDescriptor>,
}

impl Catalog {
    /// Builds a catalog, rejecting descriptors with an empty size or filter tag.
    pub fn new(images: Vec<ImageDescriptor>) -> Result<Self, CatalogError> {
        for image in &images {
            if image.width == 0 || image.height == 0 {
                return Err(CatalogError::InvalidSize {
                    name: image.name.clone(),
                    width: image.width,
                    height: image.height,
                });
            }
            if image.filter.is_empty() {
                return Err(CatalogError::MissingFilter {
                    name: image.name.clone(),
                });
            }
        }
        Ok(Self { images })
    }

    /// Parses a catalog from its JSON form, an array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Serializes the catalog to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.images)?)
    }

    /// The images in catalog order.
    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the catalog holds no image.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns a copy of the catalog in random order.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut images = self.images.clone();
        images.shuffle(rng);
        Self { images }
    }

    /// Distinct filter tags, sorted.
    #[must_use]
    pub fn filter_tags(&self) -> BTreeSet<&str> {
        self.images.iter().map(|image| image.filter.as_str()).collect()
    }
}
