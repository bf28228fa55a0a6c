// Copyright 2026 the Dotring Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use dotring_core::trace::{FrameEvent, LayoutEvent, PlaybackEvent, TraceSink, Transition};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    /// Print every n-th frame; playback and layout events always print.
    frame_stride: u64,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("frame_stride", &self.frame_stride)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            frame_stride: 1,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            frame_stride: 1,
        }
    }

    /// Only prints frames whose index is a multiple of `stride`.
    ///
    /// A stride of 0 is treated as 1.
    #[must_use]
    pub fn every_nth_frame(mut self, stride: u64) -> Self {
        self.frame_stride = stride.max(1);
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn transition_name(t: Transition) -> &'static str {
    match t {
        Transition::Start => "start",
        Transition::Stop => "stop",
        Transition::Reset => "reset",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_frame(&mut self, e: &FrameEvent) {
        if e.frame_index % self.frame_stride != 0 {
            return;
        }
        let state = if e.playing { "playing" } else { "stopped" };
        let _ = writeln!(
            self.writer,
            "[frame] #{} now={}ms elapsed={}ms factor={:.4} rot={:.2}° moving={} {state}",
            e.frame_index,
            e.now.millis(),
            e.elapsed.millis(),
            e.factor,
            e.rotation_degrees,
            e.moving_dots,
        );
    }

    fn on_playback(&mut self, e: &PlaybackEvent) {
        let _ = writeln!(
            self.writer,
            "[playback] {} at {}ms elapsed={}ms",
            transition_name(e.transition),
            e.at.millis(),
            e.elapsed.millis(),
        );
    }

    fn on_layout(&mut self, e: &LayoutEvent) {
        let _ = writeln!(
            self.writer,
            "[layout] at {}ms size={} factor={} ring={} dot={}",
            e.at.millis(),
            e.view_size,
            e.radius_factor,
            e.ring_radius,
            e.dot_radius,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotring_core::time::{Duration, HostTime};

    fn frame(frame_index: u64) -> FrameEvent {
        FrameEvent {
            frame_index,
            now: HostTime(1600),
            elapsed: Duration(600),
            factor: 1.0 / 6.0,
            rotation_degrees: 6.0,
            moving_dots: 4,
            playing: true,
        }
    }

    #[test]
    fn pretty_print_frame() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_frame(&frame(1));
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("[frame] #1"), "got: {output}");
        assert!(output.contains("factor=0.1667"), "got: {output}");
        assert!(output.contains("moving=4 playing"), "got: {output}");
    }

    #[test]
    fn pretty_print_playback_and_layout() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_playback(&PlaybackEvent {
            at: HostTime(900),
            transition: Transition::Stop,
            elapsed: Duration(900),
        });
        sink.on_layout(&LayoutEvent {
            at: HostTime(900),
            view_size: 300.0,
            radius_factor: 0.5,
            ring_radius: 50.0,
            dot_radius: 4.0,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2, "got: {output}");
        assert_eq!(lines[0], "[playback] stop at 900ms elapsed=900ms");
        assert_eq!(lines[1], "[layout] at 900ms size=300 factor=0.5 ring=50 dot=4");
    }

    #[test]
    fn stride_skips_frames() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new()).every_nth_frame(10);
        for i in 0..25 {
            sink.on_frame(&frame(i));
        }
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 3, "frames 0, 10 and 20");
    }
}
