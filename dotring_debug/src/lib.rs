// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for dotring
//! diagnostics.
//!
//! This crate provides [`TraceSink`](dotring_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`] — writes Chrome Trace Event Format JSON from recorded
//!   bytes.
//!
//! It also provides [`canvas::RecordingSurface`], a
//! [`Surface`](dotring_core::backend::Surface) that captures drawn circles in
//! surface coordinates.

pub mod canvas;
pub mod chrome;
pub mod pretty;
pub mod recorder;
