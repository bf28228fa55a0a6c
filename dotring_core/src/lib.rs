// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and geometry engine for a breathing ring-of-dots progress
//! animation.
//!
//! `dotring_core` renders a ring of fifteen colored dots that take turns
//! collapsing through the center to the opposite side, each trailing the one
//! before it, while the whole ring slowly turns. It is `no_std`, allocation
//! free, and owns no timer, thread or canvas: the host drives it with redraw
//! callbacks and a drawing surface.
//!
//! # Architecture
//!
//! ```text
//!   Host::request_redraw() ◄──────────────────────────────┐
//!       │                                                 │ (while playing)
//!       ▼                                                 │
//!   ProgressRing::on_redraw_requested(host, surface)      │
//!       │                                                 │
//!       ├─► AnimationClock::elapsed(now) ──► Frame::compute(elapsed, layout)
//!       │                                        │
//!       │                                        ▼
//!       └──────────────────────────────► Frame::draw(surface) ───┘
//! ```
//!
//! **[`layout`]** — Static rest positions, colors and radii of the dots,
//! cached until the view size, radius factor or palette changes.
//!
//! **[`motion`]** — Cycle factor, per-dot staggered windows, easing, radial
//! displacement and the seam-hiding frame rotation.
//!
//! **[`easing`]** — Built-in and custom interpolation curves.
//!
//! **[`clock`]** — Play/pause/reset state machine over host time.
//!
//! **[`engine`]** — [`ProgressRing`](engine::ProgressRing), the object a
//! host talks to.
//!
//! **[`backend`]** — The [`Host`](backend::Host) and
//! [`Surface`](backend::Surface) traits a host implements.
//!
//! **[`config`]** — [`Config`](config::Config) and
//! [`ConfigError`](config::ConfigError).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! redraw-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod clock;
pub mod color;
pub mod config;
pub mod easing;
pub mod engine;
pub mod layout;
pub mod motion;
pub mod time;
pub mod trace;
