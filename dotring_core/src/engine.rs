// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The progress ring engine.
//!
//! [`ProgressRing`] ties together the configuration, the cached [`Layout`]
//! and the [`AnimationClock`], and exposes the operations a host calls:
//!
//! - [`configure`](ProgressRing::configure) — palette, duration and curve.
//! - [`layout`](ProgressRing::layout) — fit the square ring into the
//!   available space and rebuild the dot layout.
//! - [`on_redraw_requested`](ProgressRing::on_redraw_requested) — draw the
//!   current frame and keep the redraw chain alive while playing.
//! - [`start`](ProgressRing::start), [`stop`](ProgressRing::stop),
//!   [`reset`](ProgressRing::reset) and
//!   [`set_size_factor`](ProgressRing::set_size_factor) — playback control.
//!
//! # Redraw chain
//!
//! The engine has no timer. `start` and `reset` request a redraw; every frame
//! drawn while playing requests exactly one more. At most one request is
//! outstanding at a time. After `stop`, the redraw that is already scheduled
//! still renders (frozen) and does not request another, so the chain ends.

use kurbo::Point;

use crate::backend::{Host, Surface};
use crate::clock::AnimationClock;
use crate::color::{Color, Palette};
use crate::config::{Config, ConfigError, validate_radius_factor};
use crate::easing::Curve;
use crate::layout::Layout;
use crate::motion::Frame;
use crate::time::{Duration, HostTime};
use crate::trace::{FrameEvent, LayoutEvent, PlaybackEvent, Transition};

/// A breathing ring of dots driven by host redraw callbacks.
#[derive(Clone, Debug)]
pub struct ProgressRing {
    config: Config,
    layout: Layout,
    side: f64,
    clock: AnimationClock,
    frame_index: u64,
    /// A rebuilt layout has not been drawn yet.
    layout_pending: bool,
    /// A redraw was requested and has not arrived yet.
    redraw_pending: bool,
}

impl ProgressRing {
    /// Creates a stopped ring, laid out at the configured default size.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new_unchecked(config))
    }

    fn new_unchecked(config: Config) -> Self {
        let side = non_negative(config.default_size);
        Self {
            layout: Layout::compute(side, config.radius_factor, &config.palette),
            config,
            side,
            clock: AnimationClock::new(),
            frame_index: 0,
            layout_pending: true,
            redraw_pending: false,
        }
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The cached dot layout.
    #[inline]
    #[must_use]
    pub fn current_layout(&self) -> &Layout {
        &self.layout
    }

    /// The playback clock.
    #[inline]
    #[must_use]
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Returns `true` while playing.
    #[inline]
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    /// Side length of the square view.
    #[inline]
    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.side
    }

    /// Center of the view in surface coordinates.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.side / 2.0, self.side / 2.0)
    }

    /// Updates any of palette, cycle duration and curve.
    ///
    /// Fails without changing anything if the palette does not hold exactly
    /// three colors or the duration is zero. A new palette recolors the
    /// layout immediately.
    pub fn configure(
        &mut self,
        palette: Option<&[Color]>,
        duration: Option<Duration>,
        curve: Option<Curve>,
    ) -> Result<(), ConfigError> {
        let mut next = self.config;
        if let Some(colors) = palette {
            next.palette = Palette::try_from_slice(colors)?;
        }
        if let Some(duration) = duration {
            next.duration = duration;
        }
        if let Some(curve) = curve {
            next.curve = curve;
        }
        self.set_config(next)
    }

    /// Replaces the whole configuration.
    ///
    /// The layout is rebuilt if the palette or radius factor changed. Play
    /// time is kept, so a new duration or curve takes effect from the current
    /// elapsed time.
    pub fn set_config(&mut self, config: Config) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.relayout(self.side);
        Ok(())
    }

    /// Fits the ring into the available space and rebuilds the layout.
    ///
    /// The ring is always square. An unconstrained dimension (`None`) counts
    /// as the configured default size; the side is the smaller of the two.
    /// A negative or non-finite side collapses to 0. Returns the chosen side
    /// length.
    pub fn layout(&mut self, width: Option<f64>, height: Option<f64>) -> f64 {
        let fallback = self.config.default_size;
        let side = width.unwrap_or(fallback).min(height.unwrap_or(fallback));
        self.relayout(non_negative(side));
        self.side
    }

    /// Frame shown at host time `now`, without drawing or side effects.
    #[must_use]
    pub fn frame_at(&self, now: HostTime) -> Frame {
        Frame::compute(self.clock.elapsed(now), &self.layout, &self.config)
    }

    /// Draws the current frame onto `surface`.
    ///
    /// While playing, requests exactly one more redraw from `host`. Returns
    /// the frame that was drawn.
    pub fn on_redraw_requested<H, S>(&mut self, host: &mut H, surface: &mut S) -> Frame
    where
        H: Host + ?Sized,
        S: Surface + ?Sized,
    {
        self.redraw_pending = false;
        let now = host.now();
        let elapsed = self.clock.elapsed(now);
        let frame = Frame::compute(elapsed, &self.layout, &self.config);
        frame.draw(&self.layout, self.center(), surface);

        let playing = self.clock.is_playing();
        {
            let mut tracer = host.tracer();
            if self.layout_pending {
                tracer.layout(&LayoutEvent::new(now, &self.layout));
            }
            tracer.frame(&FrameEvent::new(
                self.frame_index,
                now,
                elapsed,
                &frame,
                playing,
            ));
        }
        self.layout_pending = false;
        self.frame_index = self.frame_index.wrapping_add(1);

        if playing {
            self.schedule_redraw(host);
        }
        frame
    }

    /// Starts or resumes playback from the accumulated play time.
    pub fn start<H: Host + ?Sized>(&mut self, host: &mut H) {
        let now = host.now();
        self.clock.start(now);
        self.emit_playback(host, now, Transition::Start);
        self.schedule_redraw(host);
    }

    /// Pauses playback, freezing the current phase.
    pub fn stop<H: Host + ?Sized>(&mut self, host: &mut H) {
        let now = host.now();
        self.clock.stop(now);
        self.emit_playback(host, now, Transition::Stop);
    }

    /// Stops playback and rewinds to the first frame.
    pub fn reset<H: Host + ?Sized>(&mut self, host: &mut H) {
        let now = host.now();
        self.clock.reset(now);
        self.emit_playback(host, now, Transition::Reset);
        self.schedule_redraw(host);
    }

    /// Rescales the ring radius and restarts the animation from its first
    /// frame with the new geometry.
    ///
    /// Fails without changing anything if `factor` is negative or not finite.
    pub fn set_size_factor<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        factor: f64,
    ) -> Result<(), ConfigError> {
        validate_radius_factor(factor)?;
        self.reset(host);
        self.config.radius_factor = factor;
        self.relayout(self.side);
        self.start(host);
        Ok(())
    }

    fn relayout(&mut self, side: f64) {
        self.side = side;
        if !self
            .layout
            .matches(side, self.config.radius_factor, &self.config.palette)
        {
            self.layout = Layout::compute(side, self.config.radius_factor, &self.config.palette);
            self.layout_pending = true;
        }
    }

    // At most one request is outstanding, so repeated start/reset calls never
    // fork a second redraw chain.
    fn schedule_redraw<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.redraw_pending {
            self.redraw_pending = true;
            host.request_redraw();
        }
    }

    fn emit_playback<H: Host + ?Sized>(&self, host: &mut H, at: HostTime, transition: Transition) {
        host.tracer().playback(&PlaybackEvent {
            at,
            transition,
            elapsed: self.clock.elapsed(at),
        });
    }
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self::new_unchecked(Config::default())
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}
