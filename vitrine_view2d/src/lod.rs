// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level-of-detail selection: which pre-rendered asset to request at a given scale.

use alloc::format;
use alloc::string::String;

/// One of the pre-rendered resolution tiers of an image asset.
///
/// Tiers are ordered from smallest to largest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    /// Smallest tier, used for far-out overviews.
    X1,
    /// Second tier.
    X2,
    /// Third tier.
    X3,
    /// Full resolution.
    X4,
}

impl Variant {
    /// All tiers, smallest first.
    pub const ALL: [Self; 4] = [Self::X1, Self::X2, Self::X3, Self::X4];

    /// Picks the tier for an image drawn at `scale`.
    ///
    /// ```
    /// use vitrine_view2d::Variant;
    ///
    /// assert_eq!(Variant::for_scale(0.05), Variant::X1);
    /// assert_eq!(Variant::for_scale(0.2), Variant::X2);
    /// assert_eq!(Variant::for_scale(0.5), Variant::X3);
    /// assert_eq!(Variant::for_scale(1.5), Variant::X4);
    /// ```
    #[must_use]
    pub fn for_scale(scale: f64) -> Self {
        if scale > 1.0 {
            Self::X4
        } else if scale > 0.4 {
            Self::X3
        } else if scale > 0.1 {
            Self::X2
        } else {
            Self::X1
        }
    }

    /// File-name suffix of this tier, for example `"@2x"`.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::X1 => "@1x",
            Self::X2 => "@2x",
            Self::X3 => "@3x",
            Self::X4 => "@4x",
        }
    }

    /// Size of this tier relative to the full-resolution asset.
    #[must_use]
    pub fn ratio(self) -> f64 {
        match self {
            Self::X1 => 0.1,
            Self::X2 => 0.4,
            Self::X3 => 0.7,
            Self::X4 => 1.0,
        }
    }

    /// Resolves the asset path of this tier for an image whose base path is `src`.
    #[must_use]
    pub fn asset_path(self, src: &str) -> String {
        format!("{src}{}.jpg", self.suffix())
    }
}

/// Opacity of an image drawn at `scale`.
///
/// Fully opaque at or above `hide_zoom`, fully transparent at or below
/// `min_zoom`, linear in between.
#[must_use]
pub fn fade_opacity(scale: f64, min_zoom: f64, hide_zoom: f64) -> f64 {
    if scale >= hide_zoom {
        1.0
    } else if scale <= min_zoom {
        0.0
    } else {
        (scale - min_zoom) / (hide_zoom - min_zoom)
    }
}
