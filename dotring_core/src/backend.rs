// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for embedding the ring in a UI toolkit.
//!
//! The engine owns no timer, thread or canvas. A host provides:
//!
//! - **Time and scheduling**: the [`Host`] trait, a monotonic millisecond
//!   clock and a way to ask for one more redraw callback.
//! - **Drawing**: the [`Surface`] trait with save/restore transform scoping,
//!   translate, rotate and filled circles.
//! - **Diagnostics**: optionally, a [`TraceSink`](crate::trace::TraceSink)
//!   exposed through [`Host::tracer`].
//!
//! # Redraw loop pseudocode
//!
//! ```rust,ignore
//! fn on_frame(ring: &mut ProgressRing, host: &mut MyHost, canvas: &mut MyCanvas) {
//!     // Draws the current frame and, while playing, asks the host for
//!     // exactly one more callback.
//!     ring.on_redraw_requested(host, canvas);
//! }
//! ```

use kurbo::{Point, Vec2};

use crate::color::Color;
use crate::time::HostTime;
use crate::trace::Tracer;

/// Clock, redraw scheduling and trace plumbing supplied by the host.
pub trait Host {
    /// Current reading of the host's monotonic millisecond clock.
    fn now(&self) -> HostTime;

    /// Asks the host to call back into the engine on the next frame.
    fn request_redraw(&mut self);

    /// Tracer receiving engine events. Defaults to discarding them.
    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::none()
    }
}

/// A 2-D drawing target with a current transform.
///
/// `translate` and `rotate` compose onto the current transform; `save` pushes
/// it and `restore` pops it. Rotation is clockwise in the y-down surface
/// space.
pub trait Surface {
    /// Pushes the current transform.
    fn save(&mut self);

    /// Pops the transform pushed by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Translates the current transform.
    fn translate(&mut self, offset: Vec2);

    /// Rotates the current transform by `degrees`.
    fn rotate(&mut self, degrees: f64);

    /// Fills a circle in current-transform coordinates.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
}
