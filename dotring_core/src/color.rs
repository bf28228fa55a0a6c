// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed colors and the three-color dot palette.
//!
//! [`Color`] is an opaque `0xAARRGGBB` value; the engine never interprets it
//! beyond handing it to the [`Surface`](crate::backend::Surface).
//! [`Palette`] holds exactly three colors, assigned to dots round-robin by
//! slot index.

use core::fmt;

use crate::config::ConfigError;

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// Creates a color from its alpha, red, green and blue channels.
    #[inline]
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "extracts a single byte-wide channel"
    )]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "extracts a single byte-wide channel"
    )]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "extracts a single byte-wide channel"
    )]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "extracts a single byte-wide channel"
    )]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

/// Number of colors in a [`Palette`].
pub const PALETTE_LEN: usize = 3;

/// The three dot colors, assigned to slot `i` as `colors[i % 3]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: [Color; PALETTE_LEN],
}

impl Palette {
    /// Red, teal and orange.
    pub const DEFAULT: Self = Self::new([
        Color(0xFFE5_282C),
        Color(0xFF1F_909A),
        Color(0xFFFC_9E12),
    ]);

    /// Creates a palette from exactly three colors.
    #[inline]
    #[must_use]
    pub const fn new(colors: [Color; PALETTE_LEN]) -> Self {
        Self { colors }
    }

    /// Creates a palette from a caller-provided slice.
    ///
    /// Fails with [`ConfigError::PaletteLength`] unless the slice holds
    /// exactly three colors.
    pub fn try_from_slice(colors: &[Color]) -> Result<Self, ConfigError> {
        let colors: [Color; PALETTE_LEN] = colors
            .try_into()
            .map_err(|_| ConfigError::PaletteLength {
                found: colors.len(),
            })?;
        Ok(Self { colors })
    }

    /// Returns the color for dot slot `index`.
    #[inline]
    #[must_use]
    pub const fn color_for_slot(&self, index: usize) -> Color {
        self.colors[index % PALETTE_LEN]
    }

    /// Returns the three colors.
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> [Color; PALETTE_LEN] {
        self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}
