// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the redraw loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! engine calls as it renders frames, changes playback state and rebuilds its
//! layout. All method bodies default to no-ops, so implementing only the
//! events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Hosts hand a tracer to the engine through
//! [`Host::tracer`](crate::backend::Host::tracer).

use crate::layout::Layout;
use crate::motion::Frame;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which playback operation happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Playback started or resumed.
    Start,
    /// Playback paused.
    Stop,
    /// Playback stopped and rewound to zero.
    Reset,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted after each rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameEvent {
    /// Monotonic count of frames rendered by this engine.
    pub frame_index: u64,
    /// Host time the frame was rendered for.
    pub now: HostTime,
    /// Accumulated play time.
    pub elapsed: Duration,
    /// Cycle factor in `[0, 1)`.
    pub factor: f64,
    /// Whole-ring rotation in degrees.
    pub rotation_degrees: f64,
    /// Dots away from their rest position.
    pub moving_dots: u8,
    /// Whether another redraw was requested.
    pub playing: bool,
}

impl FrameEvent {
    /// Creates a `FrameEvent` from a computed [`Frame`] plus the timing the
    /// frame itself does not carry.
    #[must_use]
    pub fn new(
        frame_index: u64,
        now: HostTime,
        elapsed: Duration,
        frame: &Frame,
        playing: bool,
    ) -> Self {
        Self {
            frame_index,
            now,
            elapsed,
            factor: frame.factor,
            rotation_degrees: frame.rotation_degrees,
            moving_dots: u8::try_from(frame.moving_count()).unwrap_or(u8::MAX),
            playing,
        }
    }
}

/// Emitted when playback starts, stops or resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackEvent {
    /// Host time of the transition.
    pub at: HostTime,
    /// What happened.
    pub transition: Transition,
    /// Accumulated play time after the transition.
    pub elapsed: Duration,
}

/// Emitted the first frame after the layout was rebuilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEvent {
    /// Host time of the frame that first used the layout.
    pub at: HostTime,
    /// Side length of the square view.
    pub view_size: f64,
    /// Radius factor.
    pub radius_factor: f64,
    /// Ring radius.
    pub ring_radius: f64,
    /// Dot draw radius.
    pub dot_radius: f64,
}

impl LayoutEvent {
    /// Creates a `LayoutEvent` describing `layout`.
    #[must_use]
    pub fn new(at: HostTime, layout: &Layout) -> Self {
        Self {
            at,
            view_size: layout.view_size(),
            radius_factor: layout.radius_factor(),
            ring_radius: layout.ring_radius(),
            dot_radius: layout.dot_radius(),
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the engine.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a frame is drawn.
    fn on_frame(&mut self, e: &FrameEvent) {
        _ = e;
    }

    /// Called on every playback transition.
    fn on_playback(&mut self, e: &PlaybackEvent) {
        _ = e;
    }

    /// Called when a rebuilt layout is first drawn.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`FrameEvent`].
    #[inline]
    pub fn frame(&mut self, e: &FrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PlaybackEvent`].
    #[inline]
    pub fn playback(&mut self, e: &PlaybackEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_playback(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
