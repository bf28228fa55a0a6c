// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records filled circles instead of rasterizing them.
//!
//! [`RecordingSurface`] tracks the current transform as a [`kurbo::Affine`]
//! and stores every circle with its center mapped to surface coordinates.
//! Useful for asserting on rendered output without a real canvas.

use kurbo::{Affine, Point, Vec2};

use dotring_core::backend::Surface;
use dotring_core::color::Color;

/// One filled circle as it landed on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilledCircle {
    /// Center in surface coordinates.
    pub center: Point,
    /// Radius as passed to the surface.
    pub radius: f64,
    /// Fill color.
    pub color: Color,
}

/// Records draw calls for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    transform: Affine,
    stack: Vec<Affine>,
    circles: Vec<FilledCircle>,
    /// Number of `restore` calls that had no matching `save`.
    unbalanced_restores: usize,
}

impl RecordingSurface {
    /// Creates an empty surface with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Circles drawn since creation or the last [`clear`](Self::clear).
    #[must_use]
    pub fn circles(&self) -> &[FilledCircle] {
        &self.circles
    }

    /// The current transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Depth of the save stack.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if every `restore` matched a `save` and nothing is
    /// left on the stack.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.unbalanced_restores == 0
    }

    /// Forgets recorded circles, keeping the transform state.
    pub fn clear(&mut self) {
        self.circles.clear();
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(t) => self.transform = t,
            None => self.unbalanced_restores += 1,
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform *= Affine::translate(offset);
    }

    fn rotate(&mut self, degrees: f64) {
        self.transform *= Affine::rotate(degrees.to_radians());
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.circles.push(FilledCircle {
            center: self.transform * center,
            radius,
            color,
        });
    }
}
