// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static placement of the dot ring.
//!
//! [`Layout::compute`] places [`DOT_COUNT`] dots evenly around a circle
//! centered on the origin. Slot 0 sits straight above the center (negative y
//! in the surface's y-down space) and successive slots step by
//! [`DELTA_ANGLE`] degrees toward negative x.
//!
//! The result depends only on the view size, the radius factor and the
//! palette, so the engine caches it and rebuilds it only when one of those
//! changes.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::color::{Color, Palette};

/// Number of dots in the ring.
pub const DOT_COUNT: usize = 15;

/// Angular spacing between neighboring slots, in degrees.
pub const DELTA_ANGLE: f64 = 360.0 / DOT_COUNT as f64;

/// One fixed slot on the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Slot identity in `[0, DOT_COUNT)`.
    pub index: usize,
    /// Position on the circle when the dot is not displaced.
    pub rest: Point,
    /// Fill color, `palette[index % 3]`.
    pub color: Color,
}

impl Dot {
    /// Angle of this slot in degrees.
    #[inline]
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        DELTA_ANGLE * self.index as f64
    }
}

/// The full ring, rebuilt whenever its inputs change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    dots: [Dot; DOT_COUNT],
    ring_radius: f64,
    dot_radius: f64,
    view_size: f64,
    radius_factor: f64,
}

impl Layout {
    /// Lays out the ring for a square view of side `view_size`.
    ///
    /// The ring radius is `floor(view_size / 3 * radius_factor)` and each dot
    /// is drawn with radius `floor(ring_radius / 12)`. Non-positive or
    /// non-finite inputs collapse the ring to the center with zero-sized
    /// dots rather than failing.
    #[must_use]
    pub fn compute(view_size: f64, radius_factor: f64, palette: &Palette) -> Self {
        let ring_radius = non_negative((view_size / 3.0 * radius_factor).floor());
        let dot_radius = (ring_radius / 12.0).floor();

        let dots = core::array::from_fn(|index| {
            let theta = (DELTA_ANGLE * index as f64).to_radians();
            Dot {
                index,
                rest: Point::new(-ring_radius * theta.sin(), -ring_radius * theta.cos()),
                color: palette.color_for_slot(index),
            }
        });

        Self {
            dots,
            ring_radius,
            dot_radius,
            view_size,
            radius_factor,
        }
    }

    /// The dots, indexed by slot.
    #[inline]
    #[must_use]
    pub fn dots(&self) -> &[Dot; DOT_COUNT] {
        &self.dots
    }

    /// Distance from the center to each rest position.
    #[inline]
    #[must_use]
    pub fn ring_radius(&self) -> f64 {
        self.ring_radius
    }

    /// Radius each dot is drawn with.
    #[inline]
    #[must_use]
    pub fn dot_radius(&self) -> f64 {
        self.dot_radius
    }

    /// View size this layout was computed for.
    #[inline]
    #[must_use]
    pub fn view_size(&self) -> f64 {
        self.view_size
    }

    /// Radius factor this layout was computed for.
    #[inline]
    #[must_use]
    pub fn radius_factor(&self) -> f64 {
        self.radius_factor
    }

    /// Returns `true` if this layout was built from the given inputs.
    #[must_use]
    pub fn matches(&self, view_size: f64, radius_factor: f64, palette: &Palette) -> bool {
        self.view_size == view_size
            && self.radius_factor == radius_factor
            && self
                .dots
                .iter()
                .all(|dot| dot.color == palette.color_for_slot(dot.index))
    }
}

// NaN and infinities land on zero too.
fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn radii_follow_view_size() {
        let layout = Layout::compute(300.0, 1.0, &Palette::DEFAULT);
        assert_eq!(layout.ring_radius(), 100.0);
        assert_eq!(layout.dot_radius(), 8.0);

        let layout = Layout::compute(301.0, 1.0, &Palette::DEFAULT);
        assert_eq!(layout.ring_radius(), 100.0, "floored");

        let layout = Layout::compute(300.0, 0.5, &Palette::DEFAULT);
        assert_eq!(layout.ring_radius(), 50.0);
        assert_eq!(layout.dot_radius(), 4.0);
    }

    #[test]
    fn slot_zero_is_above_center() {
        let layout = Layout::compute(300.0, 1.0, &Palette::DEFAULT);
        let rest = layout.dots()[0].rest;
        assert!(rest.x.abs() < EPS, "x = {}", rest.x);
        assert!((rest.y + 100.0).abs() < EPS, "y = {}", rest.y);

        // Slot 3 sits at 72 degrees: up and to the left.
        let rest = layout.dots()[3].rest;
        assert!(rest.x < 0.0 && rest.y < 0.0, "slot 3 at {rest:?}");
    }

    #[test]
    fn slots_are_evenly_spaced() {
        let layout = Layout::compute(300.0, 1.0, &Palette::DEFAULT);
        let step = DELTA_ANGLE.to_radians();
        assert_eq!(DELTA_ANGLE, 24.0);
        for pair in layout.dots().windows(2) {
            let a = pair[0].rest.to_vec2();
            let b = pair[1].rest.to_vec2();
            let cos = a.dot(b) / (a.hypot() * b.hypot());
            assert!(
                (cos - step.cos()).abs() < EPS,
                "slots {} and {} are not 24 degrees apart",
                pair[0].index,
                pair[1].index
            );
            assert!((a.hypot() - 100.0).abs() < EPS, "slot {} off the ring", pair[0].index);
        }
        assert_eq!(layout.dots()[7].angle_degrees(), 168.0);
    }

    #[test]
    fn ring_is_centered() {
        let layout = Layout::compute(480.0, 1.0, &Palette::DEFAULT);
        let (sx, sy) = layout
            .dots()
            .iter()
            .fold((0.0, 0.0), |(sx, sy), d| (sx + d.rest.x, sy + d.rest.y));
        assert!(sx.abs() < 1e-9, "sum x = {sx}");
        assert!(sy.abs() < 1e-9, "sum y = {sy}");
    }

    #[test]
    fn colors_cycle_by_slot() {
        let palette = Palette::new([Color(1), Color(2), Color(3)]);
        let layout = Layout::compute(300.0, 1.0, &palette);
        for dot in layout.dots() {
            assert_eq!(dot.color, palette.colors()[dot.index % 3], "slot {}", dot.index);
        }
    }

    #[test]
    fn degenerate_sizes_collapse_to_center() {
        for size in [0.0, -120.0, f64::NAN] {
            let layout = Layout::compute(size, 1.0, &Palette::DEFAULT);
            assert_eq!(layout.ring_radius(), 0.0, "size {size}");
            assert_eq!(layout.dot_radius(), 0.0, "size {size}");
            for dot in layout.dots() {
                assert_eq!(dot.rest.x.abs(), 0.0, "slot {} x", dot.index);
                assert_eq!(dot.rest.y.abs(), 0.0, "slot {} y", dot.index);
            }
        }
    }

    #[test]
    fn infinite_inputs_collapse_to_center() {
        let inputs = [
            (f64::INFINITY, 1.0),
            (300.0, f64::INFINITY),
            (f64::NEG_INFINITY, 1.0),
        ];
        for (size, factor) in inputs {
            let layout = Layout::compute(size, factor, &Palette::DEFAULT);
            assert_eq!(layout.ring_radius(), 0.0, "size {size} factor {factor}");
            assert_eq!(layout.dot_radius(), 0.0, "size {size} factor {factor}");
            for dot in layout.dots() {
                assert!(
                    dot.rest.x.is_finite() && dot.rest.y.is_finite(),
                    "slot {} at {:?}",
                    dot.index,
                    dot.rest
                );
            }
        }
    }

    #[test]
    fn matches_tracks_inputs() {
        let layout = Layout::compute(300.0, 1.0, &Palette::DEFAULT);
        assert!(layout.matches(300.0, 1.0, &Palette::DEFAULT));
        assert!(!layout.matches(300.0, 0.5, &Palette::DEFAULT));
        assert!(!layout.matches(200.0, 1.0, &Palette::DEFAULT));
        let other = Palette::new([Color(1), Color(2), Color(3)]);
        assert!(!layout.matches(300.0, 1.0, &other));
    }
}
