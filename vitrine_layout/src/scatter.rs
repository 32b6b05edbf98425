// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use kurbo::{Point, Size};
use rand::Rng;

use crate::geometry::intersects;

/// One entry of a scatter layout request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterItem {
    /// Intrinsic size of the image in world units.
    pub size: Size,
    /// Whether the image takes part in the layout.
    ///
    /// Inactive items are parked at the origin without searching.
    pub active: bool,
}

impl ScatterItem {
    /// Creates an item of the given size.
    #[must_use]
    pub fn new(size: Size, active: bool) -> Self {
        Self { size, active }
    }
}

/// Parameters of the spiral search used by [`scatter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Minimum clearance between two placed boxes, in world units.
    pub margin: f64,
    /// Radius growth per step once the spiral has completed its first turn.
    pub radius_step: f64,
    /// Smallest angle increment per step, in degrees.
    pub min_angle_step_deg: f64,
    /// Largest angle increment per step, in degrees.
    pub max_angle_step_deg: f64,
    /// Maximum number of candidates tried for a single item.
    ///
    /// When the budget runs out, the candidate with the fewest collisions is
    /// kept instead.
    pub max_steps: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 300.0,
            radius_step: 50.0,
            min_angle_step_deg: 10.0,
            max_angle_step_deg: 25.0,
            max_steps: 20_000,
        }
    }
}

impl LayoutConfig {
    fn angle_step_range(&self) -> (f64, f64) {
        let lo = self.min_angle_step_deg.to_radians();
        let hi = self.max_angle_step_deg.to_radians();
        if lo <= hi { (lo, hi) } else { (hi, lo) }
    }
}

/// Assigns a world position to every item, in input order.
///
/// Each active item walks an outward spiral from the origin until its
/// margin-inflated box clears every item placed before it. Inactive items
/// land on the origin and still count as obstacles for later items.
///
/// The returned vector has the same length as `items`.
pub fn scatter<R: Rng + ?Sized>(
    items: &[ScatterItem],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<Point> {
    let mut positions: Vec<Point> = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let position = if item.active {
            place(item.size, &items[..index], &positions, config, rng, index)
        } else {
            Point::ZERO
        };
        positions.push(position);
    }
    positions
}

fn place<R: Rng + ?Sized>(
    size: Size,
    placed: &[ScatterItem],
    positions: &[Point],
    config: &LayoutConfig,
    rng: &mut R,
    index: usize,
) -> Point {
    let (lo, hi) = config.angle_step_range();
    let mut angle = rng.gen_range(0.0..TAU);
    let mut turned = 0.0;
    let mut radius = 0.0;
    let mut best: Option<(usize, Point)> = None;

    for _ in 0..config.max_steps.max(1) {
        let step = rng.gen_range(lo..=hi);
        angle += step;
        turned += step;
        if turned > TAU {
            radius += config.radius_step;
        }
        let candidate = Point::new((angle.cos() * radius).floor(), (angle.sin() * radius).floor());

        let collisions = placed
            .iter()
            .zip(positions)
            .filter(|(other, at)| intersects(size, candidate, other.size, **at, config.margin))
            .count();
        if collisions == 0 {
            return candidate;
        }
        if best.is_none_or(|(fewest, _)| collisions < fewest) {
            best = Some((collisions, candidate));
        }
    }

    let (collisions, candidate) = best.unwrap_or((0, Point::ZERO));
    log::warn!(
        "scatter: item {index} still overlaps {collisions} item(s) after {} steps; keeping best candidate",
        config.max_steps
    );
    candidate
}
