// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration and validation.
//!
//! [`Config`] bundles every tunable of the animation. All fields have
//! defaults reproducing the reference look (3.6 s cycle, cubic ease-in-out,
//! red/teal/orange palette, stagger 0.66 with a one-third-cycle motion
//! window). Invalid values are rejected by [`Config::validate`] with a
//! [`ConfigError`]; the render path never sees them.

use crate::color::Palette;
use crate::easing::Curve;
use crate::layout::DOT_COUNT;
use crate::time::Duration;

/// A configuration value the engine refuses to run with.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The palette did not hold exactly three colors.
    #[error("palette must hold exactly 3 colors, found {found}")]
    PaletteLength {
        /// Number of colors supplied.
        found: usize,
    },
    /// The cycle duration was zero.
    #[error("cycle duration must be non-zero")]
    ZeroDuration,
    /// The stagger coefficient was negative or not finite.
    #[error("stagger coefficient must be finite and non-negative, got {0}")]
    InvalidStagger(f64),
    /// The window divisor was not a finite positive number.
    #[error("window divisor must be finite and positive, got {0}")]
    InvalidWindow(f64),
    /// The last dot would still be moving when the cycle wraps.
    #[error(
        "stagger {stagger} with window divisor {window} ends the last dot's motion at {end} of the cycle (must be <= 1)"
    )]
    WindowOverrun {
        /// Stagger coefficient.
        stagger: f64,
        /// Window divisor.
        window: f64,
        /// Cycle fraction at which the last dot reaches its mirror position.
        end: f64,
    },
    /// The radius factor was negative or not finite.
    #[error("radius factor must be finite and non-negative, got {0}")]
    InvalidRadiusFactor(f64),
    /// The default side length was negative or not finite.
    #[error("default size must be finite and non-negative, got {0}")]
    InvalidDefaultSize(f64),
}

/// Staggering of the per-dot motion windows.
///
/// Dot `i` starts moving at cycle fraction `stagger / N * i` and spends
/// `1 / window` of the cycle travelling to its mirror position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// Stagger coefficient; the last dot starts moving at roughly this
    /// fraction of the cycle.
    pub stagger: f64,
    /// Window divisor; each dot moves during `1 / window` of the cycle.
    pub window: f64,
}

impl MotionParams {
    /// Stagger 0.66, one-third-cycle window.
    pub const DEFAULT: Self = Self {
        stagger: 0.66,
        window: 3.0,
    };

    /// Stagger 0.8, one-fifth-cycle window.
    pub const TIGHT: Self = Self {
        stagger: 0.8,
        window: 5.0,
    };

    /// Cycle fraction at which the motion window of dot `index` opens.
    #[inline]
    #[must_use]
    pub fn window_start(&self, index: usize) -> f64 {
        self.stagger / DOT_COUNT as f64 * index as f64
    }

    /// Cycle fraction at which the last dot reaches its mirror position.
    #[must_use]
    pub fn completion(&self) -> f64 {
        self.window_start(DOT_COUNT - 1) + 1.0 / self.window
    }

    /// Checks the parameters describe a loop that closes within one cycle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stagger.is_finite() || self.stagger < 0.0 {
            return Err(ConfigError::InvalidStagger(self.stagger));
        }
        if !self.window.is_finite() || self.window <= 0.0 {
            return Err(ConfigError::InvalidWindow(self.window));
        }
        let end = self.completion();
        if end > 1.0 {
            return Err(ConfigError::WindowOverrun {
                stagger: self.stagger,
                window: self.window,
                end,
            });
        }
        Ok(())
    }
}

impl Default for MotionParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for a [`ProgressRing`](crate::engine::ProgressRing).
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Length of one animation cycle.
    pub duration: Duration,
    /// Curve applied to each dot's motion window.
    pub curve: Curve,
    /// Dot colors.
    pub palette: Palette,
    /// Scale applied to the ring radius derived from the view size.
    pub radius_factor: f64,
    /// Per-dot stagger and window.
    pub motion: MotionParams,
    /// Side length used when the host leaves both dimensions unconstrained.
    pub default_size: f64,
}

impl Config {
    /// Default cycle length.
    pub const DEFAULT_DURATION: Duration = Duration(3600);

    /// Default side length for unconstrained layouts.
    pub const DEFAULT_SIZE: f64 = 200.0;

    /// The default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            curve: Curve::EaseInOutCubic,
            palette: Palette::DEFAULT,
            radius_factor: 1.0,
            motion: MotionParams::DEFAULT,
            default_size: Self::DEFAULT_SIZE,
        }
    }

    /// Sets the cycle length.
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub const fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    /// Sets the palette.
    #[must_use]
    pub const fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the radius factor.
    #[must_use]
    pub const fn with_radius_factor(mut self, radius_factor: f64) -> Self {
        self.radius_factor = radius_factor;
        self
    }

    /// Sets the motion parameters.
    #[must_use]
    pub const fn with_motion(mut self, motion: MotionParams) -> Self {
        self.motion = motion;
        self
    }

    /// Sets the side length used for unconstrained layouts.
    #[must_use]
    pub const fn with_default_size(mut self, default_size: f64) -> Self {
        self.default_size = default_size;
        self
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        validate_radius_factor(self.radius_factor)?;
        if !self.default_size.is_finite() || self.default_size < 0.0 {
            return Err(ConfigError::InvalidDefaultSize(self.default_size));
        }
        self.motion.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_radius_factor(factor: f64) -> Result<(), ConfigError> {
    if factor.is_finite() && factor >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadiusFactor(factor))
    }
}
