// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame motion of the ring.
//!
//! Each frame is derived from nothing but the elapsed play time and the
//! cached [`Layout`]:
//!
//! 1. The **cycle factor** is the position within the current cycle, in
//!    `[0, 1)`.
//! 2. The whole frame is rotated by [`ROTATION_PER_CYCLE`] degrees times the
//!    factor.
//! 3. Each dot gets a **raw item factor**: its own motion window opens
//!    `stagger / N * i` into the cycle and lasts `1 / window` of it. Outside
//!    the window the value is clamped to 0 (not started) or 1 (arrived).
//! 4. The raw item factor is eased by the configured [`Curve`].
//! 5. The eased value moves the dot along the straight line from its rest
//!    position through the center to the mirror position.
//!
//! A dot's mirror position lies halfway between two slots, 180° around the
//! ring. Rotating by 1.5 slot spacings per cycle carries it onto a slot of the
//! same color, so the frame at factor → 1 is indistinguishable from the frame
//! at factor 0 and the loop has no visible seam.
//!
//! [`Curve`]: crate::easing::Curve

use kurbo::{Affine, Point, Vec2};

use crate::backend::Surface;
use crate::config::{Config, MotionParams};
use crate::easing::{Curve, clamp_unit};
use crate::layout::{DELTA_ANGLE, DOT_COUNT, Layout};
use crate::time::Duration;

/// Frame rotation accumulated over one full cycle, in degrees.
pub const ROTATION_PER_CYCLE: f64 = DELTA_ANGLE * 1.5;

/// Position within the current cycle, in `[0, 1)`.
///
/// Wrapping is done on the integer millisecond count, so
/// `cycle_factor(e, d) == cycle_factor(e + k * d, d)` holds exactly. A zero
/// `duration` yields 0.
#[must_use]
pub fn cycle_factor(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    elapsed.wrapping_rem(duration).millis() as f64 / duration.millis() as f64
}

/// Whole-frame rotation for a cycle factor, in degrees.
#[inline]
#[must_use]
pub fn rotation_degrees(factor: f64) -> f64 {
    ROTATION_PER_CYCLE * factor
}

/// Un-eased progress of dot `index` through its motion window, in `[0, 1]`.
#[must_use]
pub fn item_factor_raw(index: usize, factor: f64, motion: &MotionParams) -> f64 {
    clamp_unit((factor - motion.window_start(index)) * motion.window)
}

/// Moves `rest` toward its mirror through the origin.
///
/// `item = 0` returns `rest` and `item = 1` returns `-rest`, both exactly.
#[inline]
#[must_use]
pub fn displace(rest: Point, item: f64) -> Point {
    Point::new(rest.x - 2.0 * rest.x * item, rest.y - 2.0 * rest.y * item)
}

/// Everything needed to draw one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Cycle factor in `[0, 1)`.
    pub factor: f64,
    /// Rotation applied to the whole ring, in degrees.
    pub rotation_degrees: f64,
    /// Eased item factor per dot.
    pub item_factors: [f64; DOT_COUNT],
    /// Dot centers before the frame rotation, relative to the ring center.
    pub positions: [Point; DOT_COUNT],
}

impl Frame {
    /// Computes the frame shown after `elapsed` play time.
    #[must_use]
    pub fn compute(elapsed: Duration, layout: &Layout, config: &Config) -> Self {
        let factor = cycle_factor(elapsed, config.duration);
        Self::at_factor(factor, layout, &config.motion, config.curve)
    }

    /// Computes the frame for an explicit cycle factor.
    #[must_use]
    pub fn at_factor(factor: f64, layout: &Layout, motion: &MotionParams, curve: Curve) -> Self {
        let item_factors: [f64; DOT_COUNT] =
            core::array::from_fn(|i| curve.ease(item_factor_raw(i, factor, motion)));
        let dots = layout.dots();
        let positions = core::array::from_fn(|i| displace(dots[i].rest, item_factors[i]));
        Self {
            factor,
            rotation_degrees: rotation_degrees(factor),
            item_factors,
            positions,
        }
    }

    /// Number of dots away from their rest position.
    #[must_use]
    pub fn moving_count(&self) -> usize {
        self.item_factors.iter().filter(|&&v| v > 0.0).count()
    }

    /// Maps ring-relative coordinates to surface coordinates for a ring
    /// centered at `center`.
    #[must_use]
    pub fn transform(&self, center: Point) -> Affine {
        Affine::translate(center.to_vec2()) * Affine::rotate(self.rotation_degrees.to_radians())
    }

    /// Draws the frame: translate to `center`, rotate the whole ring, fill
    /// every dot. The surface's transform is restored afterwards.
    pub fn draw<S: Surface + ?Sized>(&self, layout: &Layout, center: Point, surface: &mut S) {
        surface.save();
        surface.translate(Vec2::new(center.x, center.y));
        surface.rotate(self.rotation_degrees);
        let radius = layout.dot_radius();
        for (dot, position) in layout.dots().iter().zip(self.positions) {
            surface.fill_circle(position, radius, dot.color);
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;

    fn layout() -> Layout {
        Layout::compute(300.0, 1.0, &Palette::DEFAULT)
    }

    #[test]
    fn factor_wraps_every_cycle() {
        let d = Duration(3600);
        for ms in [0, 1, 599, 600, 1800, 3599] {
            let base = cycle_factor(Duration(ms), d);
            assert!((0.0..1.0).contains(&base), "factor {base} out of range");
            for k in 1..5 {
                let wrapped = cycle_factor(Duration(ms + k * 3600), d);
                assert_eq!(base, wrapped, "{ms}ms vs {k} cycles later");
            }
        }
        assert_eq!(cycle_factor(Duration(3600), d), 0.0);
        assert_eq!(cycle_factor(Duration(123), Duration::ZERO), 0.0);
    }

    #[test]
    fn factor_is_a_pure_read() {
        let d = Duration(3600);
        let a = cycle_factor(Duration(1234), d);
        let b = cycle_factor(Duration(1234), d);
        assert_eq!(a, b);
    }

    #[test]
    fn rotation_spans_one_and_a_half_slots() {
        assert_eq!(ROTATION_PER_CYCLE, 36.0);
        assert_eq!(rotation_degrees(0.0), 0.0);
        assert!((rotation_degrees(0.5) - 18.0).abs() < 1e-12);
    }

    #[test]
    fn item_factor_is_clamped_to_window() {
        let m = MotionParams::DEFAULT;
        assert_eq!(item_factor_raw(0, 0.0, &m), 0.0);
        assert!((item_factor_raw(0, 1.0 / 6.0, &m) - 0.5).abs() < 1e-12);
        assert_eq!(item_factor_raw(0, 0.5, &m), 1.0);
        // Before dot 5's window opens.
        assert_eq!(item_factor_raw(5, 0.2, &m), 0.0);
    }

    #[test]
    fn item_factor_saturates_once_window_closes() {
        for m in [MotionParams::DEFAULT, MotionParams::TIGHT] {
            for i in 0..DOT_COUNT {
                let close = m.window_start(i) + 1.0 / m.window;
                for extra in [1e-9, 0.01, 0.05] {
                    let factor = close + extra;
                    if factor < 1.0 {
                        assert_eq!(
                            item_factor_raw(i, factor, &m),
                            1.0,
                            "dot {i} at factor {factor} with {m:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn displacement_endpoints_are_exact() {
        for dot in layout().dots() {
            let rest = dot.rest;
            assert_eq!(displace(rest, 0.0), rest, "slot {} at rest", dot.index);
            assert_eq!(
                displace(rest, 1.0),
                Point::new(-rest.x, -rest.y),
                "slot {} mirrored",
                dot.index
            );
        }
        let mid = displace(Point::new(10.0, -4.0), 0.5);
        assert_eq!(mid, Point::ZERO, "halfway is the center");
    }

    #[test]
    fn first_frame_is_at_rest() {
        let layout = layout();
        let frame = Frame::compute(Duration::ZERO, &layout, &Config::default());
        assert_eq!(frame.factor, 0.0);
        assert_eq!(frame.rotation_degrees, 0.0);
        assert_eq!(frame.moving_count(), 0);
        for (dot, pos) in layout.dots().iter().zip(frame.positions) {
            assert_eq!(pos, dot.rest, "slot {}", dot.index);
        }
    }

    #[test]
    fn sixth_of_a_cycle_moves_leading_dots_only() {
        let layout = layout();
        let frame = Frame::compute(Duration(600), &layout, &Config::default());
        assert!((frame.factor - 1.0 / 6.0).abs() < 1e-12);
        assert!((frame.rotation_degrees - 6.0).abs() < 1e-9);

        // Dot 0 is halfway through its window; cubic in-out is 0.5 there.
        assert!((frame.item_factors[0] - 0.5).abs() < 1e-9);
        let p0 = frame.positions[0];
        assert!(p0.to_vec2().hypot() < 1e-6, "dot 0 near center: {p0:?}");

        for i in 1..4 {
            assert!(frame.item_factors[i] > 0.0, "dot {i} has started");
            assert!(frame.item_factors[i] < frame.item_factors[i - 1], "dot {i} trails");
        }
        for dot in &layout.dots()[4..] {
            let i = dot.index;
            assert_eq!(frame.item_factors[i], 0.0, "dot {i} still waiting");
            assert_eq!(frame.positions[i], dot.rest, "dot {i} at rest");
        }
    }

    #[test]
    fn loop_has_no_seam() {
        // Just before wraparound every dot has reached its mirror, and the
        // rotated mirror positions coincide with the rest positions of
        // same-colored slots.
        let layout = layout();
        let config = Config::default();
        let last = Frame::compute(Duration(3599), &layout, &config);
        assert_eq!(last.moving_count(), DOT_COUNT);

        let center = Point::ZERO;
        let seam = Frame::at_factor(1.0, &layout, &config.motion, config.curve);
        let xf = seam.transform(center);
        for (i, pos) in seam.positions.iter().enumerate() {
            let world = xf * *pos;
            let twin = layout
                .dots()
                .iter()
                .find(|d| (d.rest - world).hypot() < 1e-6)
                .unwrap_or_else(|| panic!("dot {i} lands between slots at {world:?}"));
            assert_eq!(twin.color, layout.dots()[i].color, "dot {i} lands on a different color");
        }
    }
}
