// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vitrine_event_state::{Gesture, GestureRecognizer, InputCapabilities};
use vitrine_layout::{ScatterItem, scatter};
use vitrine_view2d::{Variant, Viewport, fade_opacity, is_visible};

use crate::catalog::{Catalog, ImageDescriptor};
use crate::config::{ConfigError, GalleryConfig};
use crate::filters::FilterSet;
use crate::frame::{Caption, ImageFrame};
use crate::intent::{Direction, Intent};
use crate::translate::{Language, translate};

/// Errors returned for intents that name something the gallery does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryError {
    /// No image at this index.
    #[error("no image at index {0}")]
    UnknownImage(usize),
    /// The image exists but its filter is disabled.
    #[error("image {0} is hidden by the current filters")]
    HiddenImage(usize),
    /// No such filter tag.
    #[error("unknown filter `{0}`")]
    UnknownCategory(String),
}

/// One row of the filter menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry<'a> {
    /// Filter tag, to send back in [`Intent::ToggleFilter`].
    pub tag: &'a str,
    /// Label to display.
    pub label: &'a str,
    /// Whether the filter is enabled.
    pub enabled: bool,
}

/// The gallery canvas: images, their layout, filters and the viewport.
///
/// `Gallery` is the single owner of all mutable state. Input handlers and
/// [`Gallery::apply`] mutate it; [`Gallery::frames`] only reads it, so two
/// calls without an intervening mutation return identical frames.
///
/// Every mutation bumps [`Gallery::revision`], which hosts can compare to
/// skip redundant renders.
#[derive(Debug)]
pub struct Gallery {
    config: GalleryConfig,
    images: Vec<ImageDescriptor>,
    default_filters: FilterSet,
    filters: FilterSet,
    positions: Vec<Point>,
    viewport: Viewport,
    input: GestureRecognizer,
    pressed: Option<usize>,
    selected: Option<usize>,
    rng: StdRng,
    revision: u64,
}

impl Gallery {
    /// Creates a gallery over a shuffled copy of `catalog`.
    ///
    /// `view_size` is the host window's inner size and `capabilities` the
    /// device capabilities resolved by the host.
    pub fn new(
        catalog: &Catalog,
        config: GalleryConfig,
        view_size: Size,
        capabilities: InputCapabilities,
    ) -> Result<Self, ConfigError> {
        Self::with_rng(catalog, config, view_size, capabilities, StdRng::from_entropy())
    }

    /// Like [`Gallery::new`], with an explicit random source for shuffling and layout.
    pub fn with_rng(
        catalog: &Catalog,
        config: GalleryConfig,
        view_size: Size,
        capabilities: InputCapabilities,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let images = catalog.shuffled(&mut rng).images().to_vec();
        let default_filters =
            FilterSet::with_defaults(catalog.filter_tags(), &config.initial_filters);

        let mut viewport = Viewport::new(view_size);
        viewport.set_zoom_limits(config.zoom_limits());
        viewport.reset(config.initial_zoom, Vec2::ZERO);

        let input = GestureRecognizer::new(capabilities)
            .with_wheel_travel(config.wheel_travel)
            .with_double_click_factor(config.zoom_speed_buttons);

        let mut gallery = Self {
            config,
            images,
            filters: default_filters.clone(),
            default_filters,
            positions: Vec::new(),
            viewport,
            input,
            pressed: None,
            selected: None,
            rng,
            revision: 0,
        };
        gallery.relayout();
        Ok(gallery)
    }

    /// The working set of images, in display order.
    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// World position of every image, parallel to [`Gallery::images`].
    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Current filter state.
    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Configuration the gallery was built with.
    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Device capabilities injected at construction.
    #[must_use]
    pub fn capabilities(&self) -> InputCapabilities {
        self.input.capabilities()
    }

    /// Index of the focused image, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Counter bumped on every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if image `index` passes the current filters.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.images
            .get(index)
            .is_some_and(|image| self.filters.is_enabled(&image.filter))
    }

    /// Render parameters of every image for the current state.
    #[must_use]
    pub fn frames(&self) -> Vec<ImageFrame<'_>> {
        (0..self.images.len()).filter_map(|index| self.frame(index)).collect()
    }

    /// Render parameters of a single image.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<ImageFrame<'_>> {
        let image = self.images.get(index)?;
        let position = *self.positions.get(index)?;
        let size = image.size();
        let params = self.viewport.screen_params(position);
        let visible = self.filters.is_enabled(&image.filter)
            && is_visible(params, size, self.viewport.view_size(), self.config.display_margin);
        let variant = Variant::for_scale(params.scale);
        let limits = self.viewport.zoom_limits();
        Some(ImageFrame {
            index,
            visible,
            origin: params.origin,
            scale: params.scale,
            size,
            variant,
            asset: visible.then(|| image.asset_path(variant)),
            opacity: fade_opacity(params.scale, limits.min, self.config.hide_images_zoom),
            caption: Caption {
                name: &image.name,
                category: (params.scale > self.config.caption_cutoff)
                    .then_some(image.category.as_str()),
            },
        })
    }

    /// Filter menu rows in tag order, labelled in `language`.
    #[must_use]
    pub fn menu_entries(&self, language: Language) -> Vec<MenuEntry<'_>> {
        self.filters
            .iter()
            .map(|(tag, enabled)| MenuEntry {
                tag,
                label: translate(language, tag),
                enabled,
            })
            .collect()
    }

    /// Applies a chrome intent.
    pub fn apply(&mut self, intent: Intent) -> Result<(), GalleryError> {
        log::debug!("gallery intent: {intent:?}");
        match intent {
            Intent::Home => self.home(),
            Intent::ZoomIn => self.zoom_by(self.config.zoom_speed_buttons),
            Intent::ZoomOut => self.zoom_by(1.0 / self.config.zoom_speed_buttons),
            Intent::Shuffle => self.shuffle(),
            Intent::ToggleFilter(tag) => return self.toggle_filter(&tag),
            Intent::Navigate(direction) => self.navigate(direction),
            Intent::Focus(index) => return self.focus(index),
        }
        Ok(())
    }

    /// Restores the initial zoom, offset and filters, clears the focus and lays out again.
    pub fn home(&mut self) {
        self.viewport.reset(self.config.initial_zoom, Vec2::ZERO);
        self.filters = self.default_filters.clone();
        self.selected = None;
        self.relayout();
    }

    /// Lays the images out again under the current filters.
    pub fn shuffle(&mut self) {
        self.relayout();
    }

    /// Multiplies the zoom by `factor`, within the zoom limits.
    pub fn zoom_by(&mut self, factor: f64) {
        self.viewport.zoom_by(factor);
        self.touch();
    }

    /// Flips a filter tag, resets the zoom, clears the focus and lays out again.
    pub fn toggle_filter(&mut self, tag: &str) -> Result<(), GalleryError> {
        if self.filters.toggle(tag).is_none() {
            return Err(GalleryError::UnknownCategory(tag.to_owned()));
        }
        self.selected = None;
        self.viewport.set_zoom(self.config.initial_zoom);
        self.relayout();
        Ok(())
    }

    /// Focuses the next or previous image that passes the current filters.
    ///
    /// Navigation cycles through the filtered images only. Without a current
    /// focus it starts from the first (or last) of them. Does nothing when
    /// every image is filtered out.
    pub fn navigate(&mut self, direction: Direction) {
        let active: Vec<usize> = (0..self.images.len()).filter(|&i| self.is_active(i)).collect();
        let Some(&first) = active.first() else {
            return;
        };
        let last = active[active.len() - 1];

        let current = self.selected.and_then(|index| active.binary_search(&index).ok());
        let target = match (current, direction) {
            (Some(position), _) => active[direction.wrap(position, active.len())],
            (None, Direction::Next) => first,
            (None, Direction::Previous) => last,
        };
        self.focus_active(target);
    }

    /// Zooms onto image `index` and centers it.
    pub fn focus(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.images.len() {
            return Err(GalleryError::UnknownImage(index));
        }
        if !self.is_active(index) {
            return Err(GalleryError::HiddenImage(index));
        }
        self.focus_active(index);
        Ok(())
    }

    /// Updates the view size after the host window was resized.
    pub fn resize(&mut self, view_size: Size) {
        self.viewport.set_view_size(view_size);
        self.touch();
    }

    /// Pointer pressed at `pos`, over image `target` if any.
    pub fn pointer_down(&mut self, target: Option<usize>, pos: Point, time_ms: u64) {
        self.pressed = target;
        self.input.pointer_down(pos, time_ms);
    }

    /// Pointer moved to `pos`. Returns `true` if the canvas panned.
    pub fn pointer_move(&mut self, pos: Point, time_ms: u64) -> bool {
        let gesture = self.input.pointer_move(pos, time_ms);
        self.apply_gesture(gesture)
    }

    /// Pointer released at `pos`.
    ///
    /// A release without movement over the pressed image focuses it. Returns
    /// `true` if that happened.
    pub fn pointer_up(&mut self, pos: Point) -> bool {
        let gesture = self.input.pointer_up(pos);
        let focused = self.apply_gesture(gesture);
        self.pressed = None;
        focused
    }

    /// Two fingers touched down `distance` pixels apart. Ignored on non-touch devices.
    pub fn pinch_start(&mut self, distance: f64) {
        self.input.pinch_start(distance);
    }

    /// Fingers moved to `distance` pixels apart. Returns `true` if the zoom changed.
    pub fn pinch_move(&mut self, distance: f64) -> bool {
        let gesture = self.input.pinch_move(distance);
        self.apply_gesture(gesture)
    }

    /// Fingers lifted.
    pub fn pinch_end(&mut self) {
        self.input.pinch_end();
    }

    /// Vertical wheel step. Ignored on touch devices. Returns `true` if the zoom changed.
    pub fn wheel(&mut self, delta_y: f64) -> bool {
        let limits = self.viewport.zoom_limits();
        let gesture = self.input.wheel(delta_y, limits.min, limits.max);
        self.apply_gesture(gesture)
    }

    /// Double-click on the canvas: zoom in by the button step.
    pub fn double_click(&mut self) -> bool {
        let gesture = self.input.double_click();
        self.apply_gesture(gesture)
    }

    fn apply_gesture(&mut self, gesture: Option<Gesture>) -> bool {
        match gesture {
            Some(Gesture::Pan { velocity }) => {
                let delta = self.viewport.screen_to_world_delta(velocity * self.config.move_speed);
                self.viewport.pan(delta);
                self.touch();
                true
            }
            Some(Gesture::Zoom { factor }) => {
                self.zoom_by(factor);
                true
            }
            Some(Gesture::Tap { .. }) => match self.pressed {
                Some(index) if self.is_active(index) => {
                    self.focus_active(index);
                    true
                }
                _ => false,
            },
            None => false,
        }
    }

    fn focus_active(&mut self, index: usize) {
        let size = self.images[index].size();
        let position = self.positions[index];
        self.viewport.focus_on(size, position, self.config.focus_inset);
        self.selected = Some(index);
        self.touch();
    }

    fn relayout(&mut self) {
        let items: Vec<ScatterItem> = self
            .images
            .iter()
            .map(|image| ScatterItem::new(image.size(), self.filters.is_enabled(&image.filter)))
            .collect();
        self.positions = scatter(&items, &self.config.layout(), &mut self.rng);
        log::debug!(
            "gallery layout: {} images, {} active",
            items.len(),
            items.iter().filter(|item| item.active).count()
        );
        self.touch();
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
