// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interpolation curves applied to each dot's motion window.
//!
//! A curve maps a linear progress value `t ∈ [0, 1]` to an eased value. Every
//! curve must satisfy `ease(0) = 0`, `ease(1) = 1` and be monotonic
//! non-decreasing on `[0, 1]`. The output of a [`Curve::Custom`] function is
//! clamped to `[0, 1]`.

/// An easing curve.
#[derive(Clone, Copy, Debug, Default)]
pub enum Curve {
    /// `f(t) = t`.
    Linear,
    /// `f(t) = t³`.
    EaseInCubic,
    /// `f(t) = 1 - (1 - t)³`.
    EaseOutCubic,
    /// `f(t) = 4t³` for `t < 0.5`, else `1 - 4(1 - t)³`.
    #[default]
    EaseInOutCubic,
    /// A caller-supplied curve.
    Custom(fn(f64) -> f64),
}

impl Curve {
    /// Applies the curve to `t`, clamping both input and output to `[0, 1]`.
    #[must_use]
    pub fn ease(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        let eased = match self {
            Self::Linear => t,
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => ease_in_out_cubic(t),
            Self::Custom(f) => f(t),
        };
        clamp_unit(eased)
    }
}

/// The symmetric cubic ease-in-out.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 4.0 * u * u * u
    }
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
#[inline]
pub(crate) fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILT_IN: [Curve; 4] = [
        Curve::Linear,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for curve in BUILT_IN {
            assert_eq!(curve.ease(0.0), 0.0, "{curve:?} at 0");
            assert_eq!(curve.ease(1.0), 1.0, "{curve:?} at 1");
        }
    }

    #[test]
    fn monotonic_on_sampled_grid() {
        for curve in BUILT_IN {
            let mut prev = curve.ease(0.0);
            for step in 1..=1000 {
                let t = f64::from(step) / 1000.0;
                let v = curve.ease(t);
                assert!(v >= prev, "{curve:?} decreased at t={t}: {prev} -> {v}");
                prev = v;
            }
        }
    }

    #[test]
    fn in_out_cubic_shape() {
        assert_eq!(ease_in_out_cubic(0.5), 0.5, "midpoint");
        assert!(ease_in_out_cubic(0.25) < 0.25, "slow start");
        assert!(ease_in_out_cubic(0.75) > 0.75, "slow finish");
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12, "4 * 0.25^3");
        assert!((ease_in_out_cubic(0.75) - 0.9375).abs() < 1e-12, "1 - 4 * 0.25^3");
    }

    #[test]
    fn default_is_in_out_cubic() {
        let t = 0.3;
        assert_eq!(Curve::default().ease(t), ease_in_out_cubic(t));
    }

    #[test]
    fn input_and_output_are_clamped() {
        assert_eq!(Curve::Linear.ease(-0.5), 0.0);
        assert_eq!(Curve::Linear.ease(1.5), 1.0);
        assert_eq!(Curve::Linear.ease(f64::NAN), 0.0);

        fn overshoot(t: f64) -> f64 {
            t * 2.0
        }
        assert_eq!(Curve::Custom(overshoot).ease(0.75), 1.0);
        assert_eq!(Curve::Custom(overshoot).ease(0.25), 0.5);
    }
}
