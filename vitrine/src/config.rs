// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vitrine_layout::LayoutConfig;
use vitrine_view2d::ZoomLimits;

/// Errors raised while loading or validating a [`GalleryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or has fields of the wrong type.
    #[error("malformed gallery config: {0}")]
    Json(#[from] serde_json::Error),
    /// A field holds a value the gallery cannot work with.
    #[error("invalid gallery config: `{field}` {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Tunables of the gallery canvas.
///
/// Every field has a default, so a JSON document only needs to list the
/// values it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Zoom restored by the home action.
    pub initial_zoom: f64,
    /// Smallest zoom factor.
    pub min_zoom: f64,
    /// Largest zoom factor.
    pub max_zoom: f64,
    /// Below this scale images fade out.
    pub hide_images_zoom: f64,
    /// Multiplier applied by the zoom buttons and double-click.
    pub zoom_speed_buttons: f64,
    /// Drag velocity (pixels per millisecond) to pan distance (pixels) multiplier.
    pub move_speed: f64,
    /// Minimum clearance between images in the layout, in world units.
    pub margin: f64,
    /// Spiral radius growth per layout step.
    pub radius_step: f64,
    /// Smallest spiral angle increment, in degrees.
    pub min_angle_step_deg: f64,
    /// Largest spiral angle increment, in degrees.
    pub max_angle_step_deg: f64,
    /// Candidate budget per image before the layout settles for its best candidate.
    pub max_layout_steps: usize,
    /// Extra screen pixels around the view in which images are still drawn.
    pub display_margin: f64,
    /// Scroll distance that sweeps the whole zoom range.
    pub wheel_travel: f64,
    /// World units trimmed from an image before fitting it on focus.
    pub focus_inset: f64,
    /// Scale above which captions include the category.
    pub caption_cutoff: f64,
    /// Initial filter state; catalog tags not listed here start enabled.
    pub initial_filters: BTreeMap<String, bool>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let layout = LayoutConfig::default();
        let limits = ZoomLimits::default();
        Self {
            initial_zoom: 0.2,
            min_zoom: limits.min,
            max_zoom: limits.max,
            hide_images_zoom: 0.1,
            zoom_speed_buttons: 1.7,
            move_speed: 20.0,
            margin: layout.margin,
            radius_step: layout.radius_step,
            min_angle_step_deg: layout.min_angle_step_deg,
            max_angle_step_deg: layout.max_angle_step_deg,
            max_layout_steps: layout.max_steps,
            display_margin: 50.0,
            wheel_travel: vitrine_event_state::wheel::DEFAULT_WHEEL_TRAVEL,
            focus_inset: 10.0,
            caption_cutoff: 0.1,
            initial_filters: BTreeMap::new(),
        }
    }
}

impl GalleryConfig {
    /// Parses and validates a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("initial_zoom", self.initial_zoom),
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("hide_images_zoom", self.hide_images_zoom),
            ("zoom_speed_buttons", self.zoom_speed_buttons),
            ("move_speed", self.move_speed),
            ("margin", self.margin),
            ("radius_step", self.radius_step),
            ("min_angle_step_deg", self.min_angle_step_deg),
            ("max_angle_step_deg", self.max_angle_step_deg),
            ("display_margin", self.display_margin),
            ("wheel_travel", self.wheel_travel),
            ("focus_inset", self.focus_inset),
            ("caption_cutoff", self.caption_cutoff),
        ];
        if let Some((field, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(invalid(*field, "must be finite"));
        }
        if self.min_zoom <= 0.0 {
            return Err(invalid("min_zoom", "must be positive"));
        }
        if self.max_zoom < self.min_zoom {
            return Err(invalid("max_zoom", "must not be below min_zoom"));
        }
        if self.zoom_speed_buttons <= 0.0 {
            return Err(invalid("zoom_speed_buttons", "must be positive"));
        }
        if self.wheel_travel <= 0.0 {
            return Err(invalid("wheel_travel", "must be positive"));
        }
        if self.radius_step <= 0.0 {
            return Err(invalid("radius_step", "must be positive"));
        }
        if self.min_angle_step_deg <= 0.0 || self.max_angle_step_deg <= 0.0 {
            return Err(invalid("min_angle_step_deg", "angle steps must be positive"));
        }
        if self.max_layout_steps == 0 {
            return Err(invalid("max_layout_steps", "must be at least 1"));
        }
        Ok(())
    }

    /// Layout parameters derived from this configuration.
    #[must_use]
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            margin: self.margin,
            radius_step: self.radius_step,
            min_angle_step_deg: self.min_angle_step_deg,
            max_angle_step_deg: self.max_angle_step_deg,
            max_steps: self.max_layout_steps,
        }
    }

    /// Zoom limits derived from this configuration.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.min_zoom, self.max_zoom)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GalleryConfig};

    #[test]
    fn defaults_are_valid() {
        let config = GalleryConfig::default();
        config.validate().unwrap();
        assert_eq!(config.initial_zoom, 0.2);
        assert_eq!(config.zoom_limits().min, 0.04);
        assert_eq!(config.zoom_limits().max, 1.3);
        assert_eq!(config.layout().margin, 300.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GalleryConfig::from_json(
            r#"{"margin": 120, "initial_filters": {"raison": false}}"#,
        )
        .unwrap();
        assert_eq!(config.margin, 120.0);
        assert_eq!(config.zoom_speed_buttons, 1.7);
        assert_eq!(config.initial_filters.get("raison"), Some(&false));
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = GalleryConfig::from_json(r#"{"min_zoom": 2.0, "max_zoom": 1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_zoom", .. }));

        let err = GalleryConfig::from_json(r#"{"min_zoom": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "min_zoom", .. }));

        let err = GalleryConfig::from_json(r#"{"max_layout_steps": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "max_layout_steps", .. }));

        assert!(matches!(
            GalleryConfig::from_json(r#"{"margin": "wide"}"#),
            Err(ConfigError::Json(_))
        ));
    }
}
