// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use vitrine::{Catalog, CatalogError, ImageDescriptor};
use vitrine_view2d::Variant;
use walkdir::WalkDir;

/// Errors that stop a pipeline run.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ThumbsError {
    #[error("cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Settings of one pipeline run.
#[derive(Clone, Debug)]
pub(crate) struct Pipeline {
    /// Folder holding one sub-folder per category.
    pub(crate) input: PathBuf,
    /// Folder receiving the resized tiers.
    pub(crate) output: PathBuf,
    /// Prefix of `src` entries in the catalog, as seen from the web root.
    pub(crate) src_prefix: String,
    /// Longest side of the full-resolution tier, in pixels.
    pub(crate) max_size: u32,
}

impl Pipeline {
    /// Resizes every image under `input` and returns the resulting catalog.
    pub(crate) fn run(&self) -> Result<Catalog, ThumbsError> {
        let mut images = Vec::new();
        for entry in WalkDir::new(&self.input).sort_by_file_name() {
            let entry = entry.map_err(|source| ThumbsError::Walk {
                path: self.input.clone(),
                source,
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || is_hidden(path) {
                continue;
            }
            let Some(category) = category_of(path, &self.input) else {
                log::warn!("skipping {}: not inside a category folder", path.display());
                continue;
            };
            if let Some(descriptor) = self.process(path, &category)? {
                images.push(descriptor);
            }
        }
        log::info!("processed {} images", images.len());
        Ok(Catalog::new(images)?)
    }

    fn process(
        &self,
        path: &Path,
        category: &str,
    ) -> Result<Option<ImageDescriptor>, ThumbsError> {
        let source = match image::open(path) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("skipping {}: {err}", path.display());
                return Ok(None);
            }
        };
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = asset_stem(category, &name);
        let out_base = self.output.join(&stem);
        if let Some(parent) = out_base.parent() {
            fs::create_dir_all(parent).map_err(|source| ThumbsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let (mut width, mut height) = (0, 0);
        for variant in Variant::ALL {
            let (w, h) = tier_size(
                source.width(),
                source.height(),
                self.max_size,
                variant.ratio(),
            );
            let tier = source.resize_exact(w, h, FilterType::Lanczos3).into_rgb8();
            let target = PathBuf::from(variant.asset_path(&out_base.to_string_lossy()));
            tier.save(&target).map_err(|source| ThumbsError::Encode {
                path: target.clone(),
                source,
            })?;
            log::debug!("wrote {} ({w}x{h})", target.display());
            (width, height) = (w, h);
        }

        Ok(Some(ImageDescriptor {
            src: catalog_src(&self.src_prefix, &stem),
            width,
            height,
            name,
            category: category.to_owned(),
            filter: category.to_owned(),
        }))
    }
}

/// Size of the tier drawn at `ratio` of full resolution, where full resolution
/// has its longest side equal to `max_size`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "tier sizes are bounded by max_size, which fits in u32"
)]
pub(crate) fn tier_size(width: u32, height: u32, max_size: u32, ratio: f64) -> (u32, u32) {
    let longest = f64::from(width.max(height).max(1));
    let factor = f64::from(max_size) / longest * ratio;
    let scale = |side: u32| ((f64::from(side) * factor).round() as u32).max(1);
    (scale(width), scale(height))
}

/// Relative path of an image's tiers, without the tier suffix.
///
/// Spaces become underscores so the result can be used in URLs unquoted.
pub(crate) fn asset_stem(category: &str, name: &str) -> String {
    format!("{category}/{name}").replace(' ', "_")
}

/// Catalog `src` of an asset stem, as seen from the web root.
///
/// An empty prefix keeps the stem relative.
pub(crate) fn catalog_src(prefix: &str, stem: &str) -> String {
    if prefix.is_empty() {
        stem.to_owned()
    } else {
        format!("{}/{stem}", prefix.trim_end_matches('/'))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

fn category_of(path: &Path, root: &Path) -> Option<String> {
    let parent = path.parent()?;
    if parent == root {
        return None;
    }
    parent
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
